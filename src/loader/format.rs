//! Pre-check of the flat catalog file format.
//!
//! ```text
//! <catalog name>
//! <day> <month> <year>
//! <Type>,<description>,<price>,<code>,<field5>,<field6>
//! ```

use std::io::BufRead;

use crate::model::code::validate_code;
use crate::model::{ProductKind, Size};

/// Number of comma-separated fields on a product line.
pub const PRODUCT_FIELDS: usize = 6;

/// Splits a product line on commas and trims every field.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Reads the first three whitespace-separated integers of a date line.
pub(crate) fn date_parts(line: &str) -> Option<(i64, i64, i64)> {
    let mut parts = line.split_whitespace().map(str::parse::<i64>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(day)), Some(Ok(month)), Some(Ok(year))) => Some((day, month, year)),
        _ => None,
    }
}

/// Checks a whole catalog stream without building anything.
///
/// Returns `false` on the first problem: an unreadable stream, a blank line,
/// a missing or malformed date header, a product line without exactly six
/// fields, an unknown type tag, a price that is not a finite number of zero
/// or more, a code that fails the checksum, or a variant field out of range.
pub fn validate_file_format<R: BufRead>(reader: R) -> bool {
    let mut seen = 0;
    for (index, line) in reader.lines().enumerate() {
        let Ok(line) = line else {
            return false;
        };
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        let valid = match index {
            0 => true,
            1 => valid_date_line(line),
            _ => valid_product_line(line),
        };
        if !valid {
            return false;
        }
        seen = index + 1;
    }
    seen >= 2
}

fn valid_date_line(line: &str) -> bool {
    match date_parts(line) {
        Some((day, month, year)) => (1..=31).contains(&day) && (1..=12).contains(&month) && year > 0,
        None => false,
    }
}

fn valid_product_line(line: &str) -> bool {
    let fields = split_fields(line);
    let &[tag, description, price, code, field5, field6] = fields.as_slice() else {
        return false;
    };
    let Some(kind) = ProductKind::from_tag(tag) else {
        return false;
    };
    let Ok(price) = price.parse::<f64>() else {
        return false;
    };
    if !price.is_finite() || price < 0.0 {
        return false;
    }
    if !validate_code(code, description, price) {
        return false;
    }
    match kind {
        ProductKind::Clothing => {
            field5.to_ascii_uppercase().parse::<Size>().is_ok() && !field6.is_empty()
        }
        ProductKind::Electronic => matches!(
            (field5.parse::<i64>(), field6.parse::<i64>()),
            (Ok(warranty), Ok(0 | 1)) if warranty >= 0
        ),
    }
}
