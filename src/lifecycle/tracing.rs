//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! # Lifecycle and successful changes
//! RUST_LOG=info cargo run
//!
//! # Every request the actor receives, with full products
//! RUST_LOG=debug cargo run
//!
//! # Only the loader
//! RUST_LOG=product_catalog::loader=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a run of the demo looks like:
//!
//! ```text
//! INFO load: Catalog parsed catalog="mon catalogue" products=5 path=catalogue_produits_valide.txt
//! INFO Actor started catalog="mon catalogue" size=5
//! WARN insert: Insert rejected code="PRD-SMAR-60" error=Product already present in the catalog: PRD-SMAR-60
//! INFO Shutdown catalog="mon catalogue" size=5
//! ```
//!
//! Calling it twice panics, since a global subscriber can only be set once.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
