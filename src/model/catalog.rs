//! The catalog: an ordered collection of exclusively owned products.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::{CatalogError, ProductError};
use super::product::Product;

/// Date format used in the catalog header.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// An ordered, duplicate-free collection of products with name and date metadata.
///
/// Products are kept in insertion order, which is also the display order.
/// No two products share a code. `Clone` and `clone_from` copy every product,
/// so two catalogs never share state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    name: String,
    last_updated: NaiveDate,
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    ///
    /// # Errors
    /// [`ProductError::EmptyCatalogName`] if `name` is empty.
    pub fn new(name: impl Into<String>, last_updated: NaiveDate) -> Result<Self, ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyCatalogName);
        }
        Ok(Self {
            name,
            last_updated,
            products: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }

    pub fn set_last_updated(&mut self, date: NaiveDate) {
        self.last_updated = date;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code() == code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Appends a copy of `product` at the end of the catalog.
    ///
    /// # Errors
    /// [`CatalogError::Duplicate`] if a product with the same code is present.
    pub fn insert(&mut self, product: &Product) -> Result<(), CatalogError> {
        self.push(product.clone())
    }

    /// Appends `product`, taking ownership. Same contract as [`Catalog::insert`].
    pub fn push(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.contains_code(product.code()) {
            return Err(CatalogError::Duplicate {
                code: product.code().to_string(),
            });
        }
        self.products.push(product);
        Ok(())
    }

    /// Removes the first product whose code is exactly `code` and returns it.
    ///
    /// # Errors
    /// [`CatalogError::Absent`] if no product has this code.
    pub fn remove(&mut self, code: &str) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.code() == code)
            .ok_or_else(|| CatalogError::Absent {
                code: code.to_string(),
            })?;
        Ok(self.products.remove(index))
    }

    /// Header lines, then every product's rendering followed by a newline.
    pub fn formatted_text(&self) -> String {
        let mut out = format!(
            "Catalog {}\nLast updated : {}\n",
            self.name,
            self.last_updated.format(DATE_FORMAT)
        );
        for product in &self.products {
            out.push_str(&product.formatted_text());
            out.push('\n');
        }
        out
    }
}
