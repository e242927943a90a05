use std::io::Write;

use chrono::NaiveDate;
use product_catalog::catalog_actor::CatalogActorError;
use product_catalog::lifecycle::{CatalogConfig, CatalogSystem};
use product_catalog::loader::{FileSource, LoadError, TextSource};
use product_catalog::model::{Catalog, CatalogError, ClothingProduct, ElectronicProduct, Product};
use tempfile::NamedTempFile;

const SAMPLE: &str = "mon catalogue
21 8 2025
Electronique,Smartphone Galaxy,499.9,PRD-SMAR-60,24,0
Vetement,T-shirt coton,19.95,PRD-TSHI-70,M,Blanc
";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("Failed to write sample");
    file
}

fn galaxy() -> ElectronicProduct {
    ElectronicProduct::new("Smartphone Galaxy", 499.9, "PRD-SMAR-60", 24, false).expect("valid product")
}

/// Load from disk, print, refuse a duplicate, print again.
#[tokio::test]
async fn test_full_catalog_system() {
    let file = sample_file();
    let config = CatalogConfig {
        file: file.path().to_path_buf(),
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::from_config(&config).await.expect("Failed to load");

    let expected = "Catalog mon catalogue\n\
        Last updated : 21/08/2025\n\
        ----------------------------\n\
        Electronic product\n\
        Smartphone Galaxy\n\
        499.9\n\
        PRD-SMAR-60\n\
        Warranty : 24 months\n\
        Refurbished : No\n\
        \n\
        ----------------------------\n\
        Clothing product\n\
        T-shirt coton\n\
        19.95\n\
        PRD-TSHI-70\n\
        Size : M\n\
        Color : Blanc\n\
        \n";
    let before = system.catalog_client.formatted_text().await.unwrap();
    assert_eq!(before, expected);

    let err = system.catalog_client.insert(galaxy()).await.unwrap_err();
    assert!(matches!(
        err,
        CatalogActorError::Catalog(CatalogError::Duplicate { ref code }) if code == "PRD-SMAR-60"
    ));

    let after = system.catalog_client.formatted_text().await.unwrap();
    assert_eq!(after, before);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_inserts_keep_codes_unique() {
    let catalog = Catalog::new("vide", NaiveDate::from_ymd_opt(2025, 8, 21).unwrap()).unwrap();
    let system = CatalogSystem::start(catalog, 4);

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let client = system.catalog_client.clone();
        tasks.push(tokio::spawn(async move { client.insert(galaxy()).await }));
    }

    let mut accepted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(CatalogActorError::Catalog(CatalogError::Duplicate { .. })) => {}
            Err(e) => panic!("Unexpected error: {e}"),
        }
    }
    assert_eq!(accepted, 1);
    assert_eq!(system.catalog_client.snapshot().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_is_a_deep_copy() {
    let catalog = product_catalog::loader::parse_catalog(SAMPLE).unwrap();
    let system = CatalogSystem::start(catalog, 8);

    let snapshot = system.catalog_client.snapshot().await.unwrap();
    system.catalog_client.remove("PRD-TSHI-70").await.unwrap();
    system
        .catalog_client
        .set_last_updated(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.contains_code("PRD-TSHI-70"));
    assert_eq!(snapshot.last_updated(), NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());

    let current = system.catalog_client.snapshot().await.unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current.last_updated(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_absent_code() {
    let catalog = product_catalog::loader::parse_catalog(SAMPLE).unwrap();
    let system = CatalogSystem::start(catalog, 8);

    let err = system.catalog_client.remove("PRD-TSHI-7").await.unwrap_err();
    assert!(matches!(err, CatalogActorError::Catalog(CatalogError::Absent { .. })));
    assert_eq!(system.catalog_client.snapshot().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_replaces_catalog() {
    let catalog = Catalog::new("ancien", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap();
    let system = CatalogSystem::start(catalog, 8);
    let file = sample_file();

    let size = system
        .catalog_client
        .load_from(&FileSource::new(file.path()))
        .await
        .unwrap();
    assert_eq!(size, 2);

    let current = system.catalog_client.snapshot().await.unwrap();
    assert_eq!(current.name(), "mon catalogue");
    let codes: Vec<&str> = current.products().iter().map(Product::code).collect();
    assert_eq!(codes, ["PRD-SMAR-60", "PRD-TSHI-70"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_reload_keeps_current_catalog() {
    let mut catalog = Catalog::new("ancien", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).unwrap();
    let jean = ClothingProduct::new("Jean slim", 49.90, "PRD-JEAN-39", "L", "Bleu").unwrap();
    catalog.insert(&jean.into()).unwrap();
    let system = CatalogSystem::start(catalog.clone(), 8);

    let dir = tempfile::tempdir().unwrap();
    let missing = FileSource::new(dir.path().join("absent.txt"));
    let err = system.catalog_client.load_from(&missing).await.unwrap_err();
    assert!(matches!(err, CatalogActorError::Load(LoadError::Io { .. })));

    let bad = TextSource::new("ancien\n21 8 2025\nVetement,T-shirt coton,19.95,PRD-TSHI-99,M,Blanc\n");
    let err = system.catalog_client.load_from(&bad).await.unwrap_err();
    assert!(matches!(err, CatalogActorError::Load(LoadError::Product { line: 3, .. })));

    assert_eq!(system.catalog_client.snapshot().await.unwrap(), catalog);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_file_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig {
        file: dir.path().join("catalogue_produits_valide.txt"),
        ..CatalogConfig::default()
    };
    match CatalogSystem::from_config(&config).await {
        Err(LoadError::Io { source, .. }) => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        Err(e) => panic!("Expected Io error, got {e}"),
        Ok(_) => panic!("Expected the load to fail"),
    }
}
