//! Requests understood by the catalog actor.

use chrono::NaiveDate;
use tokio::sync::oneshot;

use crate::model::{Catalog, CatalogError, Product};

/// One-shot reply channel for a request.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// A single operation on the catalog owned by the actor.
///
/// Requests are handled one at a time in arrival order, so every operation
/// sees the effects of the ones before it.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Append a product; fails on a duplicate code.
    Insert {
        product: Product,
        respond_to: Response<()>,
    },
    /// Remove the product with this code and hand it back.
    Remove {
        code: String,
        respond_to: Response<Product>,
    },
    /// The catalog's formatted text.
    Render { respond_to: Response<String> },
    /// A deep copy of the whole catalog.
    Snapshot { respond_to: Response<Catalog> },
    SetLastUpdated {
        date: NaiveDate,
        respond_to: Response<()>,
    },
    /// Swap in another catalog, returning the one it replaces.
    Replace {
        catalog: Catalog,
        respond_to: Response<Catalog>,
    },
}
