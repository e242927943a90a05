//! Starting, configuring and stopping the catalog system.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use config::CatalogConfig;
pub use self::tracing::setup_tracing;
