//! Serialized access to a shared catalog.
//!
//! One [`CatalogActor`] task owns the catalog; any number of cloned
//! [`CatalogClient`](crate::clients::CatalogClient)s send it requests.

pub mod actor;
pub mod error;
pub mod messages;
pub mod mock;

pub use actor::CatalogActor;
pub use error::CatalogActorError;
pub use messages::{CatalogRequest, Response};

use crate::clients::CatalogClient;
use crate::model::Catalog;

/// Creates a catalog actor and its client without spawning it.
pub fn new(catalog: Catalog, buffer_size: usize) -> (CatalogActor, CatalogClient) {
    CatalogActor::new(catalog, buffer_size)
}
