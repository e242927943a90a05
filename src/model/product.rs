//! Product base fields and the closed set of product variants.
//!
//! [`ProductBase`] carries the fields every product shares and enforces the base
//! invariants. [`Product`] is the sum type the catalog stores; cloning it keeps
//! the variant, so a catalog can deep-copy its products without knowing which
//! kind each one is.

use serde::Serialize;
use std::fmt::Display;

use super::clothing::ClothingProduct;
use super::code::{generate_code, validate_code};
use super::electronic::ElectronicProduct;
use super::error::ProductError;

/// Separator line printed above every product banner.
pub const SEPARATOR: &str = "----------------------------";

/// Fields shared by every product: description, price and checksum code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductBase {
    description: String,
    price: f64,
    code: String,
}

impl ProductBase {
    /// Builds the shared fields after checking the base invariants.
    ///
    /// # Errors
    /// - [`ProductError::EmptyDescription`] if `description` is empty
    /// - [`ProductError::NonFinitePrice`] if `price` is NaN or infinite
    /// - [`ProductError::NegativePrice`] if `price` is below zero
    /// - [`ProductError::InvalidCode`] if `code` does not match the checksum
    pub fn new(
        description: impl Into<String>,
        price: f64,
        code: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let description = description.into();
        let code = code.into();

        if description.is_empty() {
            return Err(ProductError::EmptyDescription);
        }
        check_price(price)?;
        if !validate_code(&code, &description, price) {
            return Err(ProductError::InvalidCode {
                code,
                description,
                price,
            });
        }

        Ok(Self {
            description,
            price,
            code,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Sets a new price and regenerates the code to match it.
    pub fn reassign_price(&mut self, price: f64) -> Result<(), ProductError> {
        check_price(price)?;
        self.price = price;
        self.code = generate_code(&self.description, self.price);
        Ok(())
    }

    /// Description, price and code, one per line, without a trailing newline.
    pub fn formatted_text(&self) -> String {
        format!("{}\n{}\n{}", self.description, self.price, self.code)
    }
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() {
        return Err(ProductError::NonFinitePrice(price));
    }
    if price < 0.0 {
        return Err(ProductError::NegativePrice(price));
    }
    Ok(())
}

/// Tag identifying a product variant in the flat catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductKind {
    Electronic,
    Clothing,
}

impl ProductKind {
    /// Looks up a variant from its file tag (`Electronique` or `Vetement`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Electronique" => Some(Self::Electronic),
            "Vetement" => Some(Self::Clothing),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Electronic => "Electronique",
            Self::Clothing => "Vetement",
        }
    }
}

impl Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A product held by a catalog.
///
/// Two products are equal only when they are the same variant and every field
/// matches, prices included, compared exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Product {
    Electronic(ElectronicProduct),
    Clothing(ClothingProduct),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Self::Electronic(_) => ProductKind::Electronic,
            Self::Clothing(_) => ProductKind::Clothing,
        }
    }

    pub fn base(&self) -> &ProductBase {
        match self {
            Self::Electronic(p) => p.base(),
            Self::Clothing(p) => p.base(),
        }
    }

    pub fn description(&self) -> &str {
        self.base().description()
    }

    pub fn price(&self) -> f64 {
        self.base().price()
    }

    pub fn code(&self) -> &str {
        self.base().code()
    }

    /// Sets a new price and regenerates the code. See [`ProductBase::reassign_price`].
    pub fn reassign_price(&mut self, price: f64) -> Result<(), ProductError> {
        match self {
            Self::Electronic(p) => p.reassign_price(price),
            Self::Clothing(p) => p.reassign_price(price),
        }
    }

    /// The variant's own multi-line rendering.
    pub fn formatted_text(&self) -> String {
        match self {
            Self::Electronic(p) => p.formatted_text(),
            Self::Clothing(p) => p.formatted_text(),
        }
    }
}

impl From<ElectronicProduct> for Product {
    fn from(product: ElectronicProduct) -> Self {
        Self::Electronic(product)
    }
}

impl From<ClothingProduct> for Product {
    fn from(product: ClothingProduct) -> Self {
        Self::Clothing(product)
    }
}
