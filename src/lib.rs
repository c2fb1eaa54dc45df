pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{InMemoryStores, RestStores};
pub use core::resolver::DataContextResolver;
pub use domain::model::{AccountAssignment, CaseInstance, DataContextOfAction};
pub use utils::error::{ContextError, Result};
