//! # Catalog Actor
//!
//! The `CatalogActor` is the single owner of the current [`Catalog`]. Every
//! operation arrives as a [`CatalogRequest`] and is applied in order, so the
//! catalog needs no lock even when many tasks hold a client.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::messages::CatalogRequest;
use crate::clients::CatalogClient;
use crate::model::Catalog;

/// Server half of the catalog actor.
///
/// Create it with [`CatalogActor::new`], spawn [`CatalogActor::run`], and talk
/// to it through the returned [`CatalogClient`]. The loop ends once every
/// client clone has been dropped.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalog: Catalog,
}

impl CatalogActor {
    /// Creates the actor around `catalog` together with its client.
    ///
    /// `buffer_size` bounds the request channel (at least one slot); senders
    /// wait when it is full.
    pub fn new(catalog: Catalog, buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, catalog };
        (actor, CatalogClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(catalog = self.catalog.name(), size = self.catalog.len(), "Actor started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(request);
        }

        info!(catalog = self.catalog.name(), size = self.catalog.len(), "Shutdown");
    }

    fn handle(&mut self, request: CatalogRequest) {
        match request {
            CatalogRequest::Insert { product, respond_to } => {
                let code = product.code().to_string();
                debug!(%code, kind = %product.kind(), "Insert");
                let result = self.catalog.push(product);
                match &result {
                    Ok(()) => info!(%code, size = self.catalog.len(), "Inserted"),
                    Err(e) => warn!(%code, error = %e, "Insert rejected"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::Remove { code, respond_to } => {
                debug!(%code, "Remove");
                let result = self.catalog.remove(&code);
                match &result {
                    Ok(_) => info!(%code, size = self.catalog.len(), "Removed"),
                    Err(e) => warn!(%code, error = %e, "Remove rejected"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::Render { respond_to } => {
                debug!(size = self.catalog.len(), "Render");
                let _ = respond_to.send(Ok(self.catalog.formatted_text()));
            }
            CatalogRequest::Snapshot { respond_to } => {
                debug!(size = self.catalog.len(), "Snapshot");
                let _ = respond_to.send(Ok(self.catalog.clone()));
            }
            CatalogRequest::SetLastUpdated { date, respond_to } => {
                debug!(%date, "SetLastUpdated");
                self.catalog.set_last_updated(date);
                let _ = respond_to.send(Ok(()));
            }
            CatalogRequest::Replace { catalog, respond_to } => {
                let previous = std::mem::replace(&mut self.catalog, catalog);
                info!(
                    previous = previous.name(),
                    catalog = self.catalog.name(),
                    size = self.catalog.len(),
                    "Replaced"
                );
                let _ = respond_to.send(Ok(previous));
            }
        }
    }
}
