// Adapters layer: concrete store implementations for external systems.

pub mod file;
pub mod http;
pub mod memory;

pub use http::RestStores;
pub use memory::InMemoryStores;
