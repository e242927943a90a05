//! Clothing products: base fields plus size and color.

use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

use super::error::ProductError;
use super::product::{ProductBase, SEPARATOR};

/// Clothing sizes accepted by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub const ALL: [Size; 6] = [Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl FromStr for Size {
    type Err = ProductError;

    /// Exact, case-sensitive match against the size tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ProductError::InvalidSize(s.to_string()))
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClothingProduct {
    #[serde(flatten)]
    base: ProductBase,
    size: Size,
    color: String,
}

impl ClothingProduct {
    /// Creates a clothing product from a size token such as `"XL"`.
    ///
    /// # Errors
    /// Any base precondition (see [`ProductBase::new`]),
    /// [`ProductError::InvalidSize`] and [`ProductError::EmptyColor`].
    pub fn new(
        description: impl Into<String>,
        price: f64,
        code: impl Into<String>,
        size: &str,
        color: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let base = ProductBase::new(description, price, code)?;
        let size = size.parse()?;
        Self::with_size(base, size, color)
    }

    /// Creates a clothing product from already validated base fields and size.
    pub fn with_size(base: ProductBase, size: Size, color: impl Into<String>) -> Result<Self, ProductError> {
        let color = color.into();
        if color.is_empty() {
            return Err(ProductError::EmptyColor);
        }
        Ok(Self { base, size, color })
    }

    pub fn base(&self) -> &ProductBase {
        &self.base
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn reassign_price(&mut self, price: f64) -> Result<(), ProductError> {
        self.base.reassign_price(price)
    }

    pub fn formatted_text(&self) -> String {
        format!(
            "{SEPARATOR}\nClothing product\n{}\nSize : {}\nColor : {}\n",
            self.base.formatted_text(),
            self.size,
            self.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tshirt() -> ClothingProduct {
        ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", "M", "Blanc").unwrap()
    }

    #[test]
    fn test_valid_clothing() {
        let v = tshirt();
        assert_eq!(v.base().description(), "T-shirt coton");
        assert_eq!(v.size(), Size::M);
        assert_eq!(v.color(), "Blanc");
    }

    #[rstest]
    #[case("XS")]
    #[case("S")]
    #[case("M")]
    #[case("L")]
    #[case("XL")]
    #[case("XXL")]
    fn test_every_size_is_accepted(#[case] token: &str) {
        let v = ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", token, "Blanc").unwrap();
        assert_eq!(v.size().as_str(), token);
    }

    #[rstest]
    #[case("XXXL")]
    #[case("m")]
    #[case("")]
    #[case(" M")]
    fn test_invalid_size_fails(#[case] token: &str) {
        let result = ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", token, "Blanc");
        assert_eq!(result, Err(ProductError::InvalidSize(token.to_string())));
    }

    #[test]
    fn test_empty_color_fails() {
        let result = ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", "M", "");
        assert_eq!(result, Err(ProductError::EmptyColor));
    }

    #[test]
    fn test_equality_compares_size_and_color() {
        assert_eq!(tshirt(), tshirt());
        let large = ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", "L", "Blanc").unwrap();
        let black = ClothingProduct::new("T-shirt coton", 19.95, "PRD-TSHI-70", "M", "Noir").unwrap();
        assert_ne!(tshirt(), large);
        assert_ne!(tshirt(), black);
    }

    #[test]
    fn test_formatted_text() {
        let expected = format!(
            "{SEPARATOR}\nClothing product\nT-shirt coton\n19.95\nPRD-TSHI-70\nSize : M\nColor : Blanc\n"
        );
        assert_eq!(tshirt().formatted_text(), expected);
    }
}
