//! Test helpers for code that talks to a [`CatalogClient`].
//!
//! `create_mock_client` hands back a real client wired to a bare receiver, so a
//! test can play the actor: pull the next request, check it, and answer it.
//!
//! ```rust
//! use product_catalog::catalog_actor::mock::{create_mock_client, expect_remove};
//! use product_catalog::model::CatalogError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(4);
//!
//!     let call = tokio::spawn(async move { client.remove("PRD-NONE-00").await });
//!
//!     let (code, respond_to) = expect_remove(&mut receiver).await.unwrap();
//!     respond_to.send(Err(CatalogError::Absent { code })).unwrap();
//!
//!     assert!(call.await.unwrap().is_err());
//! }
//! ```

use tokio::sync::mpsc;

use super::messages::{CatalogRequest, Response};
use crate::clients::CatalogClient;
use crate::model::{Catalog, Product};

/// A client whose requests land in the returned receiver instead of an actor.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Next request, if it is an `Insert`.
pub async fn expect_insert(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Product, Response<()>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Insert { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Remove`.
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, Response<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Remove { code, respond_to }) => Some((code, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Render`.
pub async fn expect_render(receiver: &mut mpsc::Receiver<CatalogRequest>) -> Option<Response<String>> {
    match receiver.recv().await {
        Some(CatalogRequest::Render { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request, if it is a `Replace`.
pub async fn expect_replace(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Catalog, Response<Catalog>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Replace { catalog, respond_to }) => Some((catalog, respond_to)),
        _ => None,
    }
}
