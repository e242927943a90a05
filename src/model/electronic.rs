//! Electronic products: base fields plus warranty and refurbished flag.

use serde::Serialize;

use super::error::ProductError;
use super::product::{ProductBase, SEPARATOR};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectronicProduct {
    #[serde(flatten)]
    base: ProductBase,
    warranty_months: u32,
    is_refurbished: bool,
}

impl ElectronicProduct {
    /// Creates an electronic product. The warranty is signed so negative input is rejected.
    ///
    /// # Errors
    /// Any base precondition (see [`ProductBase::new`]) and
    /// [`ProductError::NegativeWarranty`].
    pub fn new(
        description: impl Into<String>,
        price: f64,
        code: impl Into<String>,
        warranty_months: i32,
        is_refurbished: bool,
    ) -> Result<Self, ProductError> {
        let base = ProductBase::new(description, price, code)?;
        Self::with_base(base, warranty_months, is_refurbished)
    }

    /// Creates an electronic product from already validated base fields.
    pub fn with_base(
        base: ProductBase,
        warranty_months: i32,
        is_refurbished: bool,
    ) -> Result<Self, ProductError> {
        let warranty_months = u32::try_from(warranty_months)
            .map_err(|_| ProductError::NegativeWarranty(warranty_months))?;
        Ok(Self {
            base,
            warranty_months,
            is_refurbished,
        })
    }

    pub fn base(&self) -> &ProductBase {
        &self.base
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn is_refurbished(&self) -> bool {
        self.is_refurbished
    }

    pub fn reassign_price(&mut self, price: f64) -> Result<(), ProductError> {
        self.base.reassign_price(price)
    }

    pub fn formatted_text(&self) -> String {
        format!(
            "{SEPARATOR}\nElectronic product\n{}\nWarranty : {} months\nRefurbished : {}\n",
            self.base.formatted_text(),
            self.warranty_months,
            if self.is_refurbished { "Yes" } else { "No" },
        )
    }
}
