//! Product and variant preparation
//!
//! Pure row logic: grouping variants under their base reference, deriving
//! the material from the karat prefix, formatting titles and tags, and
//! assembling the records handed to the sync collaborator. The attribute
//! map itself comes from the extraction engine.

use joyero_domain::{Reference, StructuredOverrides};
use joyero_engine::{zodiac, AttributeEngine, ExtractionInput};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::clean::{clean_value, parse_price, parse_weight};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::row::{CatalogRow, ImageData, ProductData, VariantData};

/// Karat prefix stripped from titles; the same prefix drives material
/// detection before it is removed
static RE_KARAT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(18K|9k)\s*").unwrap());

/// Product types whose tag is pluralized into the tag list
const PLURALIZED_TYPES: &[&str] = &["Solitario", "Alianza", "Sello"];

/// A base product with its variant rows, in catalog order
#[derive(Debug, Clone)]
pub struct ProductGroup {
    /// Base reference shared by every row in the group
    pub base_reference: String,

    /// Whether any row carries a size suffix
    pub is_variant_product: bool,

    /// The first row seen for the base reference
    pub base_row: CatalogRow,

    /// Rows contributing size variants
    pub variant_rows: Vec<CatalogRow>,
}

/// Group catalog rows by base reference, preserving input order
///
/// The first row seen for a base reference supplies the product data.
/// Variant rows accumulate; a base row only stands in as its own variant
/// while no real variant has appeared.
pub fn group_rows(rows: &[CatalogRow]) -> Vec<ProductGroup> {
    let mut groups: Vec<ProductGroup> = Vec::new();

    for row in rows {
        let reference = Reference::new(clean_value(&row.referencia));
        let base = reference.base().to_string();

        let idx = match groups.iter().position(|g| g.base_reference == base) {
            Some(idx) => idx,
            None => {
                groups.push(ProductGroup {
                    base_reference: base,
                    is_variant_product: false,
                    base_row: row.clone(),
                    variant_rows: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];

        if reference.is_variant() {
            group.is_variant_product = true;
            group.variant_rows.push(row.clone());
        } else if group.variant_rows.is_empty() {
            group.variant_rows.push(row.clone());
        }
    }

    debug!(products = groups.len(), rows = rows.len(), "rows grouped");
    groups
}

/// Material from the description's karat prefix, if present
pub fn detect_material(description: &str) -> Option<String> {
    let upper = description.trim().to_uppercase();
    if upper.starts_with("18K") {
        Some("Oro 18 kilates".to_string())
    } else if upper.starts_with("9K") {
        Some("Oro 9 kilates".to_string())
    } else {
        None
    }
}

/// Format a display title: karat prefix stripped, first letter capitalized
pub fn format_title(base_reference: &str, description: &str) -> String {
    let description = clean_value(description);
    if description.is_empty() {
        return base_reference.to_string();
    }
    capitalize(RE_KARAT_PREFIX.replace(&description, "").as_ref())
}

/// Assemble the comma-joined tag list
///
/// Category and subcategory pass through; a pluralizable type adds its
/// plural form; a zodiac sign anywhere in the description adds the
/// Horoscopo tag.
pub fn assemble_tags(
    categoria: &str,
    subcategoria: &str,
    tipo: &str,
    description: &str,
) -> String {
    let mut tags: Vec<String> = [categoria, subcategoria]
        .iter()
        .map(|v| clean_value(v))
        .filter(|v| !v.is_empty())
        .collect();

    let tipo = capitalize(&clean_value(tipo));
    if PLURALIZED_TYPES.contains(&tipo.as_str()) {
        tags.push(format!("{tipo}s"));
    }

    if zodiac::match_sign(description).is_some() {
        tags.push("Horoscopo".to_string());
    }

    tags.join(", ")
}

/// Image records from the row's URL columns
///
/// Empty columns are skipped; a bare host gets the https scheme.
pub fn prepare_images(row: &CatalogRow) -> Vec<ImageData> {
    row.imagenes
        .iter()
        .map(|src| clean_value(src))
        .filter(|src| !src.is_empty())
        .enumerate()
        .map(|(idx, mut src)| {
            if !src.starts_with("http://") && !src.starts_with("https://") {
                src = format!("https://{src}");
            }
            ImageData {
                src,
                position: idx + 1,
                alt: format!("{} - Imagen {}", row.descripcion, idx + 1),
            }
        })
        .collect()
}

/// Prepare the base-product record for one group
///
/// Runs the extraction engine over the description with the row's
/// structured columns as overrides.
pub fn prepare_product(
    group: &ProductGroup,
    engine: &AttributeEngine,
    config: &CatalogConfig,
) -> Result<ProductData, CatalogError> {
    let row = &group.base_row;
    let description = clean_value(&row.descripcion);
    let product_type = clean_value(&row.tipo);
    let title = format_title(&group.base_reference, &row.descripcion);

    let overrides = StructuredOverrides {
        destinatario: Some(clean_value(&row.genero)),
        cierre: Some(clean_value(&row.cierre)),
        material: detect_material(&row.descripcion),
        color_oro: Some(clean_value(&row.color_oro)),
        piedra: Some(clean_value(&row.piedra)),
        calidad_piedra: Some(clean_value(&row.calidad_piedra)),
        peso: Some(clean_value(&row.peso)),
    };

    let metafields = engine.extract(&ExtractionInput {
        description: description.clone(),
        product_type: product_type.clone(),
        title: Some(title.clone()),
        overrides,
    });

    let cost = parse_price(&row.precio)?;
    let stock = parse_stock(&row.stock)?;

    Ok(ProductData {
        title,
        body_html: description,
        vendor: config.vendor.clone(),
        product_type: capitalize(&product_type),
        tags: assemble_tags(
            &row.categoria,
            &row.subcategoria,
            &row.tipo,
            &row.descripcion,
        ),
        sku: group.base_reference.clone(),
        price: round_price(cost * config.price_margin),
        stock,
        weight: clean_value(&row.peso),
        cost: clean_value(&row.precio),
        metafields,
        images: prepare_images(row),
    })
}

/// Prepare the variant records for one group
///
/// Rows without a size suffix are skipped; weights are parsed leniently.
pub fn prepare_variants(
    group: &ProductGroup,
    config: &CatalogConfig,
) -> Result<Vec<VariantData>, CatalogError> {
    let mut variants = Vec::new();

    for row in &group.variant_rows {
        let reference = Reference::new(clean_value(&row.referencia));
        let Some(size) = reference.size() else {
            continue;
        };

        let cost = parse_price(&row.precio)?;
        variants.push(VariantData {
            size: size.to_string(),
            price: round_price(cost * config.price_margin),
            sku: reference.as_str().to_string(),
            stock: parse_stock(&row.stock)?,
            weight: parse_weight(&row.peso),
            cost: clean_value(&row.precio),
        });
    }

    Ok(variants)
}

fn parse_stock(raw: &str) -> Result<i64, CatalogError> {
    let cleaned = clean_value(raw);
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned
        .parse::<i64>()
        .map_err(|_| CatalogError::InvalidStock(raw.to_string()))
}

fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First letter upper-cased, the rest lowered
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joyero_domain::AttributeKey;

    fn base_row(referencia: &str, descripcion: &str, tipo: &str) -> CatalogRow {
        CatalogRow {
            referencia: referencia.to_string(),
            descripcion: descripcion.to_string(),
            tipo: tipo.to_string(),
            precio: "10".to_string(),
            stock: "2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_rows_structure() {
        let rows = vec![
            base_row("ABC", "Anillo", "Sello"),
            base_row("ABC/12", "Anillo talla 12", "Sello"),
            base_row("DEF/5", "Aro 5mm", "Aros"),
        ];
        let groups = group_rows(&rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].base_reference, "ABC");
        assert!(groups[0].is_variant_product);
        // The bare base row stood in as a variant until ABC/12 arrived.
        assert_eq!(groups[0].variant_rows.len(), 2);
        assert_eq!(groups[1].base_reference, "DEF");
        assert!(groups[1].is_variant_product);
    }

    #[test]
    fn test_group_preserves_input_order() {
        let rows = vec![
            base_row("ZZZ", "Colgante", "Colgante"),
            base_row("AAA", "Medalla", "Medalla"),
        ];
        let groups = group_rows(&rows);
        assert_eq!(groups[0].base_reference, "ZZZ");
        assert_eq!(groups[1].base_reference, "AAA");
    }

    #[test]
    fn test_detect_material() {
        assert_eq!(
            detect_material("18K Colgante cruz"),
            Some("Oro 18 kilates".to_string())
        );
        assert_eq!(
            detect_material("9k sello oro"),
            Some("Oro 9 kilates".to_string())
        );
        assert_eq!(detect_material("Colgante cruz"), None);
    }

    #[test]
    fn test_format_title_strips_karat_prefix() {
        assert_eq!(
            format_title("ABC", "18K COLGANTE CORAZON"),
            "Colgante corazon"
        );
        assert_eq!(format_title("ABC", "9k sello"), "Sello");
    }

    #[test]
    fn test_format_title_falls_back_to_reference() {
        assert_eq!(format_title("ABC", "  "), "ABC");
    }

    #[test]
    fn test_assemble_tags() {
        let tags = assemble_tags("Anillos", "Oro", "Solitario", "Colgante del zodiaco aries");
        for expected in ["Anillos", "Oro", "Solitarios", "Horoscopo"] {
            assert!(tags.contains(expected), "missing tag {expected} in {tags}");
        }
    }

    #[test]
    fn test_assemble_tags_skips_empty_columns() {
        assert_eq!(assemble_tags("", "nan", "Colgante", "colgante liso"), "");
    }

    #[test]
    fn test_prepare_images_scheme_defaulting() {
        let mut row = base_row("ABC", "Anillo", "Sello");
        row.imagenes = vec![
            "cdn.example.com/a.jpg".to_string(),
            String::new(),
            "https://cdn.example.com/b.jpg".to_string(),
        ];

        let images = prepare_images(&row);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].src, "https://cdn.example.com/a.jpg");
        assert_eq!(images[0].position, 1);
        assert_eq!(images[1].src, "https://cdn.example.com/b.jpg");
        assert_eq!(images[1].position, 2);
    }

    #[test]
    fn test_prepare_product_end_to_end() {
        let mut row = base_row("COL1", "18K Colgante estrella de david 10x15 mm", "Colgante");
        row.genero = "mujer".to_string();
        row.precio = "10".to_string();

        let groups = group_rows(&[row]);
        let product =
            prepare_product(&groups[0], &AttributeEngine::new(), &CatalogConfig::default())
                .unwrap();

        assert_eq!(product.title, "Colgante estrella de david 10x15 mm");
        assert_eq!(product.price, 22.0);
        assert_eq!(product.stock, 2);
        assert_eq!(product.product_type, "Colgante");
        assert_eq!(
            product.metafields.get(AttributeKey::FormaColgante),
            Some("Estrella De David")
        );
        assert_eq!(
            product.metafields.get(AttributeKey::Material),
            Some("Oro 18 kilates")
        );
        assert_eq!(
            product.metafields.get(AttributeKey::Destinatario),
            Some("Mujer")
        );
    }

    #[test]
    fn test_prepare_product_invalid_price() {
        let mut row = base_row("COL1", "Colgante", "Colgante");
        row.precio = "gratis".to_string();

        let groups = group_rows(&[row]);
        let result =
            prepare_product(&groups[0], &AttributeEngine::new(), &CatalogConfig::default());
        assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn test_prepare_variants() {
        let rows = vec![
            base_row("ABC", "Anillo", "Sello"),
            {
                let mut row = base_row("ABC/12", "Anillo talla 12", "Sello");
                row.peso = "2,4".to_string();
                row.precio = "12,50".to_string();
                row
            },
        ];
        let groups = group_rows(&rows);
        let variants = prepare_variants(&groups[0], &CatalogConfig::default()).unwrap();

        // The bare base row has no size and is skipped.
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].size, "12");
        assert_eq!(variants[0].sku, "ABC/12");
        assert_eq!(variants[0].weight, 2.4);
        assert_eq!(variants[0].price, 27.5);
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(10.0 * 2.2), 22.0);
        assert_eq!(round_price(12.5 * 2.2), 27.5);
        assert_eq!(round_price(3.333 * 2.2), 7.33);
    }
}
