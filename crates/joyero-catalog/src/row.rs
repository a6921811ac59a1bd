//! Catalog row input and prepared output records

use joyero_domain::AttributeMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One row of the source catalog, as cleaned strings
///
/// Column semantics follow the supplier export: a variant row carries the
/// same base data as its product plus a `BASE/SIZE` reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Reference, `BASE` or `BASE/SIZE`
    pub referencia: String,

    /// Free-text product description
    pub descripcion: String,

    /// Coarse product-type tag
    pub tipo: String,

    /// Cost price as written in the catalog
    pub precio: String,

    /// Stock units
    pub stock: String,

    /// Category column
    pub categoria: String,

    /// Subcategory column
    pub subcategoria: String,

    /// Gender column, mapped to the `destinatario` attribute
    pub genero: String,

    /// Clasp column
    pub cierre: String,

    /// Gold color column
    pub color_oro: String,

    /// Stone column
    pub piedra: String,

    /// Stone quality column
    pub calidad_piedra: String,

    /// Weight column, grams
    pub peso: String,

    /// Image URL columns, in display order
    pub imagenes: Vec<String>,
}

/// Prepared base-product record, ready for the sync collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    /// Formatted display title
    pub title: String,

    /// Raw description used as the product body
    pub body_html: String,

    /// Vendor name from configuration
    pub vendor: String,

    /// Capitalized product-type tag
    pub product_type: String,

    /// Comma-joined tag list
    pub tags: String,

    /// Base reference
    pub sku: String,

    /// Sale price (cost × margin, 2 decimals)
    pub price: f64,

    /// Stock units
    pub stock: i64,

    /// Weight column as written
    pub weight: String,

    /// Cost price as written
    pub cost: String,

    /// Extracted attribute map
    #[serde(serialize_with = "serialize_attributes")]
    pub metafields: AttributeMap,

    /// Image records
    pub images: Vec<ImageData>,
}

/// Prepared variant record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantData {
    /// Size option value
    pub size: String,

    /// Sale price (cost × margin, 2 decimals)
    pub price: f64,

    /// Full variant reference
    pub sku: String,

    /// Stock units
    pub stock: i64,

    /// Weight in grams
    pub weight: f64,

    /// Cost price as written
    pub cost: String,
}

/// Serialize the attribute map as a flat key→value object, in insertion
/// order
fn serialize_attributes<S: Serializer>(map: &AttributeMap, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map.iter() {
        state.serialize_entry(key.key(), value)?;
    }
    state.end()
}

/// One product image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageData {
    /// Image URL, scheme included
    pub src: String,

    /// 1-based display position
    pub position: usize,

    /// Alt text
    pub alt: String,
}
