use chrono::NaiveDate;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::catalog_actor::{CatalogActorError, CatalogRequest, Response};
use crate::loader::CatalogSource;
use crate::model::{Catalog, Product};

/// Client for the catalog actor. Cloning is cheap; every clone talks to the
/// same catalog.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, CatalogActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CatalogActorError::ActorClosed)?;
        let result = response.await.map_err(|_| CatalogActorError::ActorDropped)?;
        Ok(result?)
    }

    /// Adds a product. A product whose code is already present is rejected and
    /// the catalog is left as it was.
    #[instrument(skip(self, product), fields(code = tracing::field::Empty))]
    pub async fn insert(&self, product: impl Into<Product>) -> Result<(), CatalogActorError> {
        let product = product.into();
        tracing::Span::current().record("code", product.code());
        debug!(?product, "Sending request");
        self.request(|respond_to| CatalogRequest::Insert { product, respond_to })
            .await
    }

    /// Removes and returns the product with exactly this code.
    #[instrument(skip(self))]
    pub async fn remove(&self, code: &str) -> Result<Product, CatalogActorError> {
        debug!("Sending request");
        let code = code.to_string();
        self.request(|respond_to| CatalogRequest::Remove { code, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn formatted_text(&self) -> Result<String, CatalogActorError> {
        self.request(|respond_to| CatalogRequest::Render { respond_to })
            .await
    }

    /// A deep copy of the catalog as it is now. Later changes do not reach it.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Catalog, CatalogActorError> {
        self.request(|respond_to| CatalogRequest::Snapshot { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_last_updated(&self, date: NaiveDate) -> Result<(), CatalogActorError> {
        self.request(|respond_to| CatalogRequest::SetLastUpdated { date, respond_to })
            .await
    }

    /// Swaps in `catalog` and returns the catalog it replaced.
    #[instrument(skip(self, catalog), fields(catalog = catalog.name()))]
    pub async fn replace(&self, catalog: Catalog) -> Result<Catalog, CatalogActorError> {
        self.request(|respond_to| CatalogRequest::Replace { catalog, respond_to })
            .await
    }

    /// Loads a fresh catalog from `source` and makes it current.
    ///
    /// The load runs on the caller's task, so the actor keeps serving other
    /// clients meanwhile. On a load error the current catalog is untouched.
    /// Returns the number of products in the new catalog.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn load_from(&self, source: &dyn CatalogSource) -> Result<usize, CatalogActorError> {
        let catalog = source.load().await?;
        let size = catalog.len();
        self.replace(catalog).await?;
        info!(size, "Catalog loaded");
        Ok(size)
    }
}
