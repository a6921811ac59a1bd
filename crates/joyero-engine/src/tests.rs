//! Cross-classifier integration tests

use crate::{AttributeEngine, ExtractionInput};
use joyero_domain::{AttributeKey, StructuredOverrides};

fn extract(description: &str, product_type: &str) -> joyero_domain::AttributeMap {
    AttributeEngine::new().extract(&ExtractionInput {
        description: description.to_string(),
        product_type: product_type.to_string(),
        title: None,
        overrides: StructuredOverrides::none(),
    })
}

#[test]
fn test_sello_engraving_full_pipeline() {
    let map = extract("sello grabado 8x10 mm", "sello");
    assert_eq!(map.get(AttributeKey::MedidasZonaGrabado), Some("8x10"));
    assert_eq!(map.get(AttributeKey::MedidasChaton), None);
}

#[test]
fn test_aros_ratio_full_pipeline() {
    let map = extract("aro 2x8 mm", "aros");
    assert_eq!(map.get(AttributeKey::Diametro), Some("2"));
    assert_eq!(map.get(AttributeKey::Grosor), Some("8"));
}

#[test]
fn test_diamond_context_full_pipeline() {
    let map = extract("sortija oro 1.5 QTS oro, 0.30 QTS diamante", "sortija");
    assert_eq!(map.get(AttributeKey::KilatesDiamante), Some("0.30"));
}

#[test]
fn test_shape_longest_match_tie_break() {
    let map = extract("colgante estrella, modelo estrella de david", "colgante");
    assert_eq!(map.get(AttributeKey::FormaColgante), Some("Estrella De David"));
}

#[test]
fn test_stone_multi_match() {
    let map = extract("anillo con perla y turquesa", "sortija");
    assert_eq!(map.get(AttributeKey::Piedra), Some("perla, turquesa"));
}

#[test]
fn test_length_noise_filter() {
    let map = extract("pulsera eslabones largo 5 cm", "pulsera");
    assert_eq!(map.get(AttributeKey::Largo), None);
}

#[test]
fn test_decimal_normalization() {
    let map = extract("medalla 12,0x8,5 mm", "medalla");
    assert_eq!(map.get(AttributeKey::Alto), Some("12"));
    assert_eq!(map.get(AttributeKey::Ancho), Some("8.5"));
}

#[test]
fn test_chain_row_end_to_end() {
    let map = extract("cadena forzada oro amarillo largo 45 cm ancho 1,2 mm", "cadena");
    assert_eq!(map.get(AttributeKey::TipoCadena), Some("Forzada"));
    assert_eq!(map.get(AttributeKey::Cadena), Some("Simple"));
    assert_eq!(map.get(AttributeKey::Largo), Some("45"));
    assert_eq!(map.get(AttributeKey::Ancho), Some("1.2"));
}

#[test]
fn test_medalla_zodiac_row() {
    let map = extract("medalla horoscopo leo 16 mm", "medalla");
    assert_eq!(map.get(AttributeKey::SimboloZodiaco), Some("Leo"));
    assert_eq!(map.get(AttributeKey::TipoMedalla), Some("Zodiaco"));
    assert_eq!(map.get(AttributeKey::Diametro), Some("16"));
}

#[test]
fn test_case_and_accents_do_not_matter() {
    let lower = extract("medalla virgen del pilar", "medalla");
    let mixed = extract("MEDALLA Virgen del Pilar", "Medalla");
    assert_eq!(lower, mixed);
}

mod purity {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: extraction is idempotent — two runs over the same
        /// input yield identical maps
        #[test]
        fn test_idempotent(
            description in ".{0,80}",
            product_type in "[a-zA-Z]{0,12}",
        ) {
            let input = ExtractionInput {
                description: description.clone(),
                product_type: product_type.clone(),
                title: None,
                overrides: StructuredOverrides::none(),
            };
            let engine = AttributeEngine::new();
            prop_assert_eq!(engine.extract(&input), engine.extract(&input));
        }

        /// Property: no input can make extraction panic
        #[test]
        fn test_total(description in "\\PC{0,120}") {
            for tag in ["sello", "aros", "colgante", "cadena", ""] {
                let _ = extract(&description, tag);
            }
        }

        /// Property: decimal attributes never render a trailing `.0`
        #[test]
        fn test_no_trailing_point_zero(n in 1u32..500, d in 0u32..10) {
            let description = format!("cadena largo {n},{d} cm");
            let map = extract(&description, "cadena");
            if let Some(value) = map.get(AttributeKey::Largo) {
                prop_assert!(!value.ends_with(".0"));
                prop_assert!(!value.contains(','));
            }
        }
    }
}
