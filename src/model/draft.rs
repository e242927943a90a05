//! Raw text drafts for new products, as typed into an add-product form.
//!
//! Each field is checked in form order and the first offending field is
//! reported. A draft that passes every check becomes a validated product.

use thiserror::Error;

use super::clothing::{ClothingProduct, Size};
use super::code::validate_code;
use super::electronic::ElectronicProduct;
use super::error::ProductError;
use super::product::ProductBase;

/// Field-level validation failures for product drafts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// The description field was left empty.
    #[error("The description must not be empty")]
    EmptyDescription,

    /// The price field is not digits with at most one `.`.
    #[error("The price must be a positive number or zero: {0:?}")]
    InvalidPrice(String),

    /// The code field does not match the description and price.
    #[error("The code is not valid: {0:?}")]
    InvalidCode(String),

    /// The size field is not one of the known sizes.
    #[error("The size is not valid: {0:?}")]
    InvalidSize(String),

    /// The color field was left empty.
    #[error("The color must not be empty")]
    EmptyColor,

    /// The warranty field is not a whole number of months.
    #[error("The warranty must be a positive integer or zero: {0:?}")]
    InvalidWarranty(String),

    /// The refurbished field is neither `1` nor `0`.
    #[error("The refurbished flag must be 1 (yes) or 0 (no): {0:?}")]
    InvalidRefurbished(String),

    /// A product invariant failed after the field checks passed.
    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Parses a price made of digits with at most one `.`.
///
/// Signs, exponents and thousands separators are rejected.
pub fn parse_price(input: &str) -> Result<f64, DraftError> {
    let invalid = || DraftError::InvalidPrice(input.to_string());
    let well_formed = !input.is_empty()
        && input.chars().all(|c| c.is_ascii_digit() || c == '.')
        && input.matches('.').count() <= 1
        && input.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }
    input.parse().map_err(|_| invalid())
}

/// Parses a warranty length made of digits only.
pub fn parse_warranty(input: &str) -> Result<i32, DraftError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(DraftError::InvalidWarranty(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| DraftError::InvalidWarranty(input.to_string()))
}

/// `1` means refurbished, `0` means new.
pub fn parse_refurbished(input: &str) -> Result<bool, DraftError> {
    match input {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(DraftError::InvalidRefurbished(input.to_string())),
    }
}

/// Uppercases the token before matching it against [`Size`].
pub fn parse_size(input: &str) -> Result<Size, DraftError> {
    input
        .to_ascii_uppercase()
        .parse()
        .map_err(|_| DraftError::InvalidSize(input.to_string()))
}

fn checked_base(description: &str, price: &str, code: &str) -> Result<ProductBase, DraftError> {
    if description.is_empty() {
        return Err(DraftError::EmptyDescription);
    }
    let price = parse_price(price)?;
    if !validate_code(code, description, price) {
        return Err(DraftError::InvalidCode(code.to_string()));
    }
    Ok(ProductBase::new(description, price, code)?)
}

/// Unvalidated fields of a new clothing product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothingDraft {
    pub description: String,
    pub price: String,
    pub code: String,
    pub size: String,
    pub color: String,
}

impl ClothingDraft {
    pub fn validate(&self) -> Result<ClothingProduct, DraftError> {
        let base = checked_base(&self.description, &self.price, &self.code)?;
        let size = parse_size(&self.size)?;
        if self.color.is_empty() {
            return Err(DraftError::EmptyColor);
        }
        Ok(ClothingProduct::with_size(base, size, self.color.clone())?)
    }
}

/// Unvalidated fields of a new electronic product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElectronicDraft {
    pub description: String,
    pub price: String,
    pub code: String,
    pub warranty_months: String,
    pub refurbished: String,
}

impl ElectronicDraft {
    pub fn validate(&self) -> Result<ElectronicProduct, DraftError> {
        let base = checked_base(&self.description, &self.price, &self.code)?;
        let warranty = parse_warranty(&self.warranty_months)?;
        let refurbished = parse_refurbished(&self.refurbished)?;
        Ok(ElectronicProduct::with_base(base, warranty, refurbished)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn clothing_draft() -> ClothingDraft {
        ClothingDraft {
            description: "T-shirt coton".into(),
            price: "19.95".into(),
            code: "PRD-TSHI-70".into(),
            size: "m".into(),
            color: "Blanc".into(),
        }
    }

    fn electronic_draft() -> ElectronicDraft {
        ElectronicDraft {
            description: "Smartphone Galaxy".into(),
            price: "499.90".into(),
            code: "PRD-SMAR-60".into(),
            warranty_months: "24".into(),
            refurbished: "0".into(),
        }
    }

    #[rstest]
    #[case("19.95", 19.95)]
    #[case("0", 0.0)]
    #[case("12.", 12.0)]
    #[case(".5", 0.5)]
    fn test_parse_price_accepts(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_price(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("1.2.3")]
    #[case("1e3")]
    #[case("12,5")]
    #[case(".")]
    fn test_parse_price_rejects(#[case] input: &str) {
        assert_eq!(parse_price(input), Err(DraftError::InvalidPrice(input.to_string())));
    }

    #[test]
    fn test_parse_warranty() {
        assert_eq!(parse_warranty("24"), Ok(24));
        assert!(parse_warranty("-1").is_err());
        assert!(parse_warranty("").is_err());
        assert!(parse_warranty("99999999999").is_err());
    }

    #[test]
    fn test_parse_refurbished() {
        assert_eq!(parse_refurbished("1"), Ok(true));
        assert_eq!(parse_refurbished("0"), Ok(false));
        assert!(parse_refurbished("oui").is_err());
    }

    #[test]
    fn test_clothing_draft_uppercases_size() {
        let product = clothing_draft().validate().unwrap();
        assert_eq!(product.size(), Size::M);
        assert_eq!(product.base().code(), "PRD-TSHI-70");
    }

    #[test]
    fn test_clothing_draft_reports_first_bad_field() {
        let draft = ClothingDraft {
            code: "PRD-TSHI-71".into(),
            color: String::new(),
            ..clothing_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidCode("PRD-TSHI-71".into())));

        let draft = ClothingDraft {
            color: String::new(),
            ..clothing_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::EmptyColor));

        let draft = ClothingDraft {
            size: "XXXL".into(),
            ..clothing_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidSize("XXXL".into())));
    }

    #[test]
    fn test_empty_description_is_reported() {
        let draft = ClothingDraft {
            description: String::new(),
            ..clothing_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::EmptyDescription));
    }

    #[test]
    fn test_electronic_draft() {
        let product = electronic_draft().validate().unwrap();
        assert_eq!(product.warranty_months(), 24);
        assert!(!product.is_refurbished());

        let draft = ElectronicDraft {
            refurbished: "2".into(),
            ..electronic_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidRefurbished("2".into())));

        let draft = ElectronicDraft {
            warranty_months: "un an".into(),
            ..electronic_draft()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidWarranty("un an".into())));
    }
}
