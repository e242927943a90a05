//! Catalog domain types: products, the code checksum and the catalog container.

pub mod catalog;
pub mod clothing;
pub mod code;
pub mod draft;
pub mod electronic;
pub mod error;
pub mod product;

pub use catalog::*;
pub use clothing::*;
pub use code::{generate_code, validate_code};
pub use draft::{ClothingDraft, DraftError, ElectronicDraft};
pub use electronic::*;
pub use error::*;
pub use product::*;
