use tokio::task::JoinHandle;
use tracing::{error, info};

use super::config::CatalogConfig;
use crate::clients::CatalogClient;
use crate::loader::{CatalogSource, FileSource, LoadError};
use crate::model::Catalog;

/// A running catalog actor and the client used to reach it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(catalog, 32);
/// system.catalog_client.insert(product).await?;
/// println!("{}", system.catalog_client.formatted_text().await?);
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub catalog_client: CatalogClient,
    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the actor around `catalog`. Must be called inside a Tokio runtime.
    pub fn start(catalog: Catalog, buffer_size: usize) -> Self {
        let (actor, catalog_client) = crate::catalog_actor::new(catalog, buffer_size);
        let handle = tokio::spawn(actor.run());
        Self { catalog_client, handle }
    }

    /// Loads the configured file and starts the actor on it.
    pub async fn from_config(config: &CatalogConfig) -> Result<Self, LoadError> {
        let catalog = FileSource::new(&config.file).load().await?;
        Ok(Self::start(catalog, config.buffer_size))
    }

    /// Stops the actor and waits for it to finish.
    ///
    /// The actor only exits once every clone of the client is gone, so callers
    /// must drop their own clones first or this waits forever.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down catalog system...");
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Catalog actor task failed");
            return Err(e);
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
