//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::{CatalogError, ProductError};

/// Errors that can occur while loading a catalog from flat text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be opened or read.
    #[error("Cannot read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text ended before the named header line.
    #[error("Catalog text is missing its {0} line")]
    MissingHeader(&'static str),

    /// Line 2 is not `day month year` or is not a calendar date.
    #[error("Line 2: invalid catalog date {0:?}")]
    InvalidDate(String),

    /// A product line could not be split or parsed.
    #[error("Line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    /// A product or the catalog header broke a model invariant.
    #[error("Line {line}: {source}")]
    Product {
        line: usize,
        #[source]
        source: ProductError,
    },

    /// The file lists the same product code twice.
    #[error("Line {line}: {source}")]
    Catalog {
        line: usize,
        #[source]
        source: CatalogError,
    },
}
