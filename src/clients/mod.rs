//! Typed handles for talking to the actors.

pub mod catalog_client;

pub use catalog_client::CatalogClient;
