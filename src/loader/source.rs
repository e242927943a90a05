//! Where a catalog comes from.
//!
//! The [`CatalogSource`] trait is the seam between the catalog actor and the
//! loader: `CatalogClient::load_from` only knows it can ask a source for a
//! fresh [`Catalog`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use super::error::LoadError;
use super::parse::parse_catalog;
use crate::model::Catalog;

/// Default catalog file name used by the demo and the "load catalog" action.
pub const DEFAULT_CATALOG_FILE: &str = "catalogue_produits_valide.txt";

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Reads and parses a complete catalog.
    async fn load(&self) -> Result<Catalog, LoadError>;
}

/// A catalog stored in a flat text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Catalog, LoadError> {
        debug!("Reading catalog file");
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_catalog(&text)
    }
}

/// A catalog held in memory as flat text.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl CatalogSource for TextSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    async fn load(&self) -> Result<Catalog, LoadError> {
        parse_catalog(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "mon catalogue\n21 8 2025\nVetement,T-shirt coton,19.95,PRD-TSHI-70,M,Blanc\n";

    #[tokio::test]
    async fn test_file_source_loads_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let source = FileSource::new(file.path());
        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.name(), "mon catalogue");
        assert_eq!(catalog.len(), 1);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_missing_file_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CATALOG_FILE);

        match FileSource::new(&path).load().await {
            Err(LoadError::Io { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_text_source() {
        let catalog = TextSource::new(SAMPLE).load().await.unwrap();
        assert!(catalog.contains_code("PRD-TSHI-70"));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(FileSource::default().path(), Path::new(DEFAULT_CATALOG_FILE));
    }
}
