//! Building a [`Catalog`] from flat catalog text.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::error::LoadError;
use super::format::{date_parts, split_fields, PRODUCT_FIELDS};
use crate::model::{Catalog, ClothingProduct, ElectronicProduct, Product, ProductKind};

/// Parses catalog text: a name line, a `day month year` line, then one
/// product per line.
///
/// Blank product lines and lines with an unknown type tag are skipped. Every
/// product goes through its validating constructor, so a line with a bad code
/// or an out-of-range field fails the whole load.
pub fn parse_catalog(text: &str) -> Result<Catalog, LoadError> {
    let mut lines = text.lines();

    let name = lines.next().ok_or(LoadError::MissingHeader("name"))?.trim_end();
    let date_line = lines.next().ok_or(LoadError::MissingHeader("date"))?;
    let date = parse_date(date_line)?;

    let mut catalog = Catalog::new(name, date).map_err(|source| LoadError::Product { line: 1, source })?;

    for (index, line) in lines.enumerate() {
        let line_no = index + 3;
        if line.trim().is_empty() {
            continue;
        }
        let Some(product) = parse_product(line_no, line)? else {
            continue;
        };
        catalog
            .push(product)
            .map_err(|source| LoadError::Catalog { line: line_no, source })?;
    }

    info!(catalog = catalog.name(), products = catalog.len(), "Catalog parsed");
    Ok(catalog)
}

fn parse_date(line: &str) -> Result<NaiveDate, LoadError> {
    let invalid = || LoadError::InvalidDate(line.trim().to_string());
    let (day, month, year) = date_parts(line).ok_or_else(invalid)?;
    let (Ok(day), Ok(month), Ok(year)) = (u32::try_from(day), u32::try_from(month), i32::try_from(year)) else {
        return Err(invalid());
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// `Ok(None)` for lines whose type tag is not a known product kind.
fn parse_product(line_no: usize, line: &str) -> Result<Option<Product>, LoadError> {
    let fields = split_fields(line);
    let Some(kind) = fields.first().and_then(|tag| ProductKind::from_tag(tag)) else {
        debug!(line = line_no, "Skipping line with unknown product type");
        return Ok(None);
    };
    let invalid = |reason: String| LoadError::InvalidLine { line: line_no, reason };

    let &[_, description, price, code, field5, field6] = fields.as_slice() else {
        return Err(invalid(format!(
            "expected {PRODUCT_FIELDS} fields, found {}",
            fields.len()
        )));
    };
    let price: f64 = price
        .parse()
        .map_err(|_| invalid(format!("invalid price {price:?}")))?;
    let product_error = |source| LoadError::Product { line: line_no, source };

    let product = match kind {
        ProductKind::Electronic => {
            let warranty: i32 = field5
                .parse()
                .map_err(|_| invalid(format!("invalid warranty {field5:?}")))?;
            let is_refurbished = field6 == "1";
            ElectronicProduct::new(description, price, code, warranty, is_refurbished)
                .map_err(product_error)?
                .into()
        }
        ProductKind::Clothing => ClothingProduct::new(description, price, code, field5, field6)
            .map_err(product_error)?
            .into(),
    };
    Ok(Some(product))
}
