//! # Product Catalog
//!
//! > **Validated products, checksummed codes, and a catalog that refuses duplicates.**
//!
//! A catalog holds electronic and clothing products. Every product carries a
//! code derived from its description and price, so a code that does not
//! match its product is rejected at construction. The catalog itself keeps
//! codes unique and copies deeply.
//!
//! ## 🚀 Core Concepts
//!
//! ### Product codes
//! `PRD-XXXX-NN`: the first four letters of the description, then a two-digit
//! checksum of those letters and the price's cents. See [`model::code`].
//!
//! ### One closed product type
//! [`Product`](model::Product) is an enum over the two variants. The
//! catalog stores values, so cloning a catalog never shares a product.
//!
//! ### Fallible construction
//! Constructors return `Result` with a [`ProductError`](model::ProductError);
//! catalog operations return [`CatalogError`](model::CatalogError). The two
//! never mix.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Products, sizes, codes and the catalog. Synchronous and free of I/O.
//! [`model::draft`] validates the raw text fields an interactive form collects.
//!
//! ### 2. The Files ([`loader`])
//! The flat text format: a format check, a parser that reports the first bad
//! line, and the [`CatalogSource`](loader::CatalogSource) seam.
//!
//! ### 3. Shared Access ([`catalog_actor`], [`clients`])
//! A Tokio task owning the current catalog, reached through a cloneable
//! [`CatalogClient`](clients::CatalogClient). Requests are applied strictly
//! in order. [`catalog_actor::mock`] lets tests stand in for the actor.
//!
//! ### 4. Wiring ([`lifecycle`])
//! Command-line configuration, tracing setup, and
//! [`CatalogSystem`](lifecycle::CatalogSystem) for start and graceful shutdown.
//!
//! ## 📚 Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use product_catalog::model::{generate_code, Catalog, ClothingProduct};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
//! let mut catalog = Catalog::new("mon catalogue", date).unwrap();
//!
//! let code = generate_code("T-shirt coton", 19.95);
//! assert_eq!(code, "PRD-TSHI-70");
//!
//! let shirt = ClothingProduct::new("T-shirt coton", 19.95, code, "M", "Blanc").unwrap();
//! catalog.insert(&shirt.clone().into()).unwrap();
//! assert!(catalog.insert(&shirt.into()).is_err());
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod lifecycle;
pub mod loader;
pub mod model;
