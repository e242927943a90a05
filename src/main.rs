//! # Product Catalog Demo
//!
//! Loads a catalog file, prints it, shows that a duplicate product is
//! refused, and prints the catalog again to show it is unchanged.
//!
//! ```bash
//! RUST_LOG=info cargo run -- catalogue_produits_valide.txt
//! cargo run -- --check autre_catalogue.txt
//! ```

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use clap::Parser;
use product_catalog::catalog_actor::CatalogActorError;
use product_catalog::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use product_catalog::loader::validate_file_format;
use product_catalog::model::ElectronicProduct;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> ExitCode {
    let config = CatalogConfig::parse();
    setup_tracing();

    if config.check {
        return check_format(&config);
    }

    info!(file = %config.file.display(), "Starting catalog demo");

    let system = match CatalogSystem::from_config(&config).await {
        Ok(system) => system,
        Err(e) => {
            error!(error = %e, "Catalog load failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run_demo(&system).instrument(tracing::info_span!("demo")).await;

    if let Err(e) = system.shutdown().await {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_demo(system: &CatalogSystem) -> Result<(), CatalogActorError> {
    let client = &system.catalog_client;
    println!("{}", client.formatted_text().await?);

    let duplicate = match ElectronicProduct::new("Smartphone Galaxy", 499.9, "PRD-SMAR-60", 24, false) {
        Ok(product) => product,
        Err(e) => {
            println!("Product rejected: {e}");
            return Ok(());
        }
    };

    match client.insert(duplicate).await {
        Ok(()) => println!("Inserted PRD-SMAR-60"),
        Err(CatalogActorError::Catalog(e)) => println!("Insert refused: {e}"),
        Err(e) => return Err(e),
    }

    println!("{}", client.formatted_text().await?);
    Ok(())
}

fn check_format(config: &CatalogConfig) -> ExitCode {
    let file = match File::open(&config.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open {}: {e}", config.file.display());
            return ExitCode::FAILURE;
        }
    };

    if validate_file_format(BufReader::new(file)) {
        println!("{}: valid catalog format", config.file.display());
        ExitCode::SUCCESS
    } else {
        println!("{}: invalid catalog format", config.file.display());
        ExitCode::FAILURE
    }
}
