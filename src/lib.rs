// Library surface shared by the app binary and the integration tests

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;

// Re-export common types and structures
pub use crate::catalog::{Catalog, Edition, OperationKind, Platform, Server, Tool};
pub use crate::components::*;
pub use crate::config::ExplorerConfig;
pub use crate::error::ExplorerError;
