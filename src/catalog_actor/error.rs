//! Error types for the catalog actor.

use thiserror::Error;

use crate::loader::LoadError;
use crate::model::CatalogError;

/// Errors returned by [`CatalogClient`](crate::clients::CatalogClient) calls.
#[derive(Debug, Error)]
pub enum CatalogActorError {
    /// The catalog rejected the operation (duplicate or absent code).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A replacement catalog could not be loaded. The current catalog is kept.
    #[error("Catalog load failed: {0}")]
    Load(#[from] LoadError),

    /// The actor has shut down and no longer accepts requests.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
