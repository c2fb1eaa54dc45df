pub mod mapper;
pub mod resolver;

pub use crate::domain::model::{
    AccountAssignment, CaseInstance, CaseParameters, CaseParametersRecord, CaseRecord,
    DataContextOfAction, Product,
};
pub use crate::domain::ports::{CaseParametersStore, CaseStore, ProductStore};
pub use crate::utils::error::Result;
pub use resolver::DataContextResolver;
