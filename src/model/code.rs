//! Product code checksum scheme.
//!
//! A product code has the shape `PRD-XXXX-NN`:
//! - `XXXX` is the first four ASCII letters of the description, uppercased.
//! - `NN` is a two-digit checksum over the letter values and the price cents.
//!
//! ```
//! use product_catalog::model::code::{generate_code, validate_code};
//!
//! let code = generate_code("T-shirt coton", 19.95);
//! assert_eq!(code, "PRD-TSHI-70");
//! assert!(validate_code(&code, "T-shirt coton", 19.95));
//! ```
//!
//! Descriptions with fewer than four letters produce a shorter key, so the
//! generated code is shorter than [`CODE_LEN`] and never passes
//! [`validate_code`]. Callers relying on round trips must use descriptions with
//! at least four letters.

/// Fixed prefix of every product code.
pub const CODE_PREFIX: &str = "PRD-";

/// Length of a well-formed product code.
pub const CODE_LEN: usize = 11;

const KEY_LEN: usize = 4;

/// Builds the product code for a description and a price.
pub fn generate_code(name: &str, price: f64) -> String {
    let key: String = name
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(KEY_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let letters: i64 = key.bytes().map(|b| i64::from(b - b'A' + 1)).sum();

    // Truncating remainder, the price is validated non-negative upstream.
    let cents = (price * 100.0).round() as i64 % 100;
    let checksum = (letters + cents / 10 + cents % 10) % 100;

    format!("{CODE_PREFIX}{key}-{checksum:02}")
}

/// Checks that `code` is the code [`generate_code`] builds for `name` and `price`.
pub fn validate_code(code: &str, name: &str, price: f64) -> bool {
    if code.len() != CODE_LEN || !code.starts_with(CODE_PREFIX) {
        return false;
    }
    code == generate_code(name, price)
}
