//! Error types for the catalog model.
//!
//! Two families are kept apart:
//! - [`ProductError`] is a precondition violation raised while building a value.
//! - [`CatalogError`] is an expected runtime outcome of a catalog operation.

use thiserror::Error;

/// Precondition violations raised by product and catalog constructors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product description was empty.
    #[error("Product description cannot be empty")]
    EmptyDescription,

    /// The product price was below zero.
    #[error("Product price cannot be negative: {0}")]
    NegativePrice(f64),

    /// The product price was NaN or infinite.
    #[error("Product price must be a finite number: {0}")]
    NonFinitePrice(f64),

    /// The code does not match the checksum for the description and price.
    #[error("Invalid product code {code:?} for {description:?} at {price}")]
    InvalidCode {
        code: String,
        description: String,
        price: f64,
    },

    /// The warranty length was below zero.
    #[error("Warranty cannot be negative: {0} months")]
    NegativeWarranty(i32),

    /// The size token is not part of the clothing size range.
    #[error("Invalid clothing size: {0:?}")]
    InvalidSize(String),

    /// The clothing color was empty.
    #[error("Clothing color cannot be empty")]
    EmptyColor,

    /// The catalog name was empty.
    #[error("Catalog name cannot be empty")]
    EmptyCatalogName,
}

/// Failures of catalog insert/remove operations. The catalog is left unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with the same code is already in the catalog.
    #[error("Product already present in the catalog: {code}")]
    Duplicate { code: String },

    /// No product with this code is in the catalog.
    #[error("No product with code: {code}")]
    Absent { code: String },
}
