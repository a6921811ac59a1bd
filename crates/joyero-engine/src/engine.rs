//! Orchestration of the classifier cascade
//!
//! The orchestrator applies every classifier in a fixed order and merges
//! their contributions into one attribute map. Where two classifiers
//! target the same key, evaluation order is the conflict resolution rule:
//! the last writer in the sequence wins. The shape classifier is merged
//! last on purpose — its result (default included) overwrites a
//! figure-derived `forma_colgante` for pendants.

use joyero_domain::{AttributeKey, AttributeMap, ProductType, StructuredOverrides};
use tracing::debug;

use crate::{diamond, figures, measures, shapes, stones, subtypes, zodiac};

/// One extraction request: a product row's free text plus its context
#[derive(Debug, Clone, Default)]
pub struct ExtractionInput {
    /// Free-text product description
    pub description: String,

    /// Raw product-type tag, case- and accent-insensitive
    pub product_type: String,

    /// Formatted product title; the description stands in when absent
    pub title: Option<String>,

    /// Structured catalog-column values layered over derived attributes
    pub overrides: StructuredOverrides,
}

/// The attribute extraction engine
///
/// Stateless and pure: the same input always produces the same map, and
/// instances are free to be shared across worker threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeEngine;

impl AttributeEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Derive the attribute map for one product row
    pub fn extract(&self, input: &ExtractionInput) -> AttributeMap {
        let product_type = ProductType::parse(&input.product_type);
        let description = input.description.as_str();
        let title = input.title.as_deref().unwrap_or(description);

        let mut map = AttributeMap::new();

        // 1. Figure, sub-type and zodiac classifiers
        map.merge(figures::extract_figure(description, product_type));
        map.merge(subtypes::extract_medal_type(description, product_type));
        map.merge(subtypes::extract_earring_type(description, product_type));
        map.merge(subtypes::extract_chain_type(description, product_type));
        map.merge(zodiac::extract_zodiac(description));

        // 2. Structured column overrides, capitalized, non-empty only
        let overrides = &input.overrides;
        apply_override(&mut map, AttributeKey::Destinatario, &overrides.destinatario);
        apply_override(&mut map, AttributeKey::Cierre, &overrides.cierre);
        apply_override(&mut map, AttributeKey::Material, &overrides.material);
        apply_override(&mut map, AttributeKey::ColorOro, &overrides.color_oro);

        // 3. Stones: the structured column beats the description scan
        match non_empty(&overrides.piedra) {
            Some(piedra) => map.insert(AttributeKey::Piedra, capitalize(piedra)),
            None => map.merge(stones::extract_stones(description)),
        }

        // 4. Remaining structured columns
        apply_override(&mut map, AttributeKey::CalidadPiedra, &overrides.calidad_piedra);
        if let Some(peso) = non_empty(&overrides.peso) {
            map.insert(AttributeKey::Peso, peso);
        }

        // 5. Measurements and diamond attributes
        map.merge(measures::extract_measures(description, product_type));
        map.merge(diamond::extract_diamond(description));

        // 6. Shape and letter classification, merged last
        map.merge(shapes::extract_shapes_and_letters(description, title, product_type));

        debug!(
            product_type = product_type.as_str(),
            attributes = map.len(),
            "extraction complete"
        );

        map
    }
}

/// Trimmed, non-empty view of an optional column value
fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First letter upper-cased, the rest lowered
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn apply_override(map: &mut AttributeMap, key: AttributeKey, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        map.insert(key, capitalize(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: &str, product_type: &str) -> ExtractionInput {
        ExtractionInput {
            description: description.to_string(),
            product_type: product_type.to_string(),
            title: None,
            overrides: StructuredOverrides::none(),
        }
    }

    #[test]
    fn test_empty_description_only_overrides() {
        let engine = AttributeEngine::new();
        let mut request = input("", "colgante");
        request.overrides.destinatario = Some("mujer".to_string());
        request.overrides.peso = Some("3,5".to_string());

        let map = engine.extract(&request);
        assert_eq!(map.get(AttributeKey::Destinatario), Some("Mujer"));
        assert_eq!(map.get(AttributeKey::Peso), Some("3,5"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_override_capitalization() {
        let engine = AttributeEngine::new();
        let mut request = input("cadena forzada", "cadena");
        request.overrides.cierre = Some("MOSQUETON".to_string());
        request.overrides.color_oro = Some("amarillo".to_string());

        let map = engine.extract(&request);
        assert_eq!(map.get(AttributeKey::Cierre), Some("Mosqueton"));
        assert_eq!(map.get(AttributeKey::ColorOro), Some("Amarillo"));
    }

    #[test]
    fn test_stone_column_beats_description() {
        let engine = AttributeEngine::new();
        let mut request = input("sortija con perla y turquesa", "sortija");
        request.overrides.piedra = Some("circonita".to_string());

        let map = engine.extract(&request);
        assert_eq!(map.get(AttributeKey::Piedra), Some("Circonita"));
    }

    #[test]
    fn test_stone_fallback_to_description() {
        let engine = AttributeEngine::new();
        let map = engine.extract(&input("sortija con perla y turquesa", "sortija"));
        assert_eq!(map.get(AttributeKey::Piedra), Some("perla, turquesa"));
    }

    #[test]
    fn test_shape_overwrites_figure_for_pendants() {
        let engine = AttributeEngine::new();
        let map = engine.extract(&input("colgante san jose con estrella", "colgante"));
        // The figure matcher wrote "San Jose"; the shape classifier,
        // merged last, overwrites it.
        assert_eq!(map.get(AttributeKey::FormaColgante), Some("Estrella"));
    }

    #[test]
    fn test_figure_survives_for_medals() {
        let engine = AttributeEngine::new();
        let map = engine.extract(&input("medalla san jose oro", "medalla"));
        assert_eq!(map.get(AttributeKey::FiguraMedalla), Some("San Jose"));
    }

    #[test]
    fn test_unknown_type_is_harmless() {
        let engine = AttributeEngine::new();
        let map = engine.extract(&input("pieza rara grosor 3 mm", "trofeo"));
        assert_eq!(map.get(AttributeKey::Grosor), Some("3"));
        assert_eq!(map.get(AttributeKey::FormaColgante), None);
    }
}
