//! Joyero Catalog
//!
//! Row-level preparation around the extraction engine: validates catalog
//! rows, groups variants under their base reference, assembles product
//! and variant records, and renders attribute maps as metafield payloads
//! for the sync collaborator.
//!
//! # Architecture
//!
//! ```text
//! CatalogRow → RowValidator → group_rows → prepare_product → Metafields
//!                                              │
//!                                       AttributeEngine
//! ```
//!
//! File ingestion (CSV/XLSX), persistence and the platform API client
//! live outside this workspace; this crate only covers the pure row
//! logic between them.

#![warn(missing_docs)]

mod clean;
mod config;
mod error;
mod metafield;
mod prepare;
mod row;
mod validator;

pub use clean::{clean_value, parse_price, parse_weight};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use metafield::{render_metafields, Metafield};
pub use prepare::{
    assemble_tags, detect_material, format_title, group_rows, prepare_images,
    prepare_product, prepare_variants, ProductGroup,
};
pub use row::{CatalogRow, ImageData, ProductData, VariantData};
pub use validator::{
    RejectionReason, RowValidator, ValidationConfig, ValidationResult, ValidationStatus,
};
