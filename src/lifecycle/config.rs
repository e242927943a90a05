//! Command-line configuration for the catalog demo.

use clap::Parser;
use std::path::PathBuf;

use crate::loader::DEFAULT_CATALOG_FILE;

/// Default capacity of the catalog actor's request channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// `product-catalog` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "product-catalog",
    about = "Load a product catalog file, print it, and exercise the catalog rules",
    version
)]
pub struct CatalogConfig {
    /// Catalog file to load.
    #[arg(value_name = "path", default_value = DEFAULT_CATALOG_FILE)]
    pub file: PathBuf,
    /// Capacity of the catalog actor's request channel.
    #[arg(
        long = "buffer-size",
        value_name = "n",
        default_value_t = DEFAULT_BUFFER_SIZE
    )]
    pub buffer_size: usize,
    /// Only check the file format and report the result.
    #[arg(long)]
    pub check: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CATALOG_FILE),
            buffer_size: DEFAULT_BUFFER_SIZE,
            check: false,
        }
    }
}
