//! Loading catalogs from the flat text format.
//!
//! - [`format`] checks a stream without building anything.
//! - [`parse`] builds a [`Catalog`](crate::model::Catalog), reporting the first bad line.
//! - [`source`] is the async seam the catalog actor loads through.
//!
//! A missing or unreadable file is a [`LoadError::Io`]; the caller decides
//! whether that ends the program.

pub mod error;
pub mod format;
pub mod parse;
pub mod source;

pub use error::*;
pub use format::validate_file_format;
pub use parse::parse_catalog;
pub use source::*;
