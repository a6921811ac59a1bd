//! Medal, earring and chain sub-type classification
//!
//! Three independent single-result keyword classifiers. Each scans its
//! own small dictionary in declaration order and the first entry with a
//! variant contained in the normalized description wins. The chain
//! classifier additionally derives the `cadena` complexity field: a named
//! link type means a simple chain, anything else counts as composite.

use joyero_domain::{AttributeKey, AttributeMap, ProductType};

use crate::normalizer::normalize;

/// Chain sub-type when no link type is named
pub const OTHER_CHAIN: &str = "Otras";

/// First declared entry whose variant substring-matches wins
fn first_match(text: &str, entries: &[(&'static str, &[&str])]) -> Option<&'static str> {
    entries
        .iter()
        .find(|(_, variants)| variants.iter().any(|v| text.contains(v)))
        .map(|(display, _)| *display)
}

static MEDAL_TYPES: &[(&str, &[&str])] = &[
    ("Escapulario", &["escapulario"]),
    ("Comunion", &["comunion"]),
    ("Bautizo", &["bautizo", "bautismo"]),
    ("Zodiaco", &["zodiaco", "horoscopo"]),
    ("Religiosa", &["virgen", "cristo", "crucifijo", "santo", "santa ", "san "]),
];

static EARRING_TYPES: &[(&str, &[&str])] = &[
    ("Criollas", &["criolla"]),
    ("Trepadores", &["trepador"]),
    ("De presion", &["presion"]),
    ("Perla", &["perla"]),
    ("Bola", &["bola"]),
    ("Largos", &["largo"]),
];

/// Named link types; any of these marks the chain as simple
static CHAIN_TYPES: &[(&str, &[&str])] = &[
    ("Barbada", &["barbada"]),
    ("Forzada", &["forzada", "forzado"]),
    ("Rolo", &["rolo"]),
    ("Veneciana", &["veneciana", "veneciano"]),
    ("Singapur", &["singapur"]),
    ("Espiga", &["espiga"]),
    ("Bismark", &["bismark", "bismarck"]),
    ("Calabrote", &["calabrote"]),
    ("Marina", &["marina", "marinero"]),
    ("Figaro", &["figaro"]),
    ("Salomonico", &["salomonico"]),
    ("Diamantada", &["diamantada", "diamantado"]),
];

/// Classify the medal sub-type (medals only)
pub fn extract_medal_type(description: &str, product_type: ProductType) -> AttributeMap {
    let mut map = AttributeMap::new();
    if product_type != ProductType::Medalla {
        return map;
    }
    let text = normalize(description);
    if let Some(display) = first_match(&text, MEDAL_TYPES) {
        map.insert(AttributeKey::TipoMedalla, display);
    }
    map
}

/// Classify the earring sub-type (earrings only)
pub fn extract_earring_type(description: &str, product_type: ProductType) -> AttributeMap {
    let mut map = AttributeMap::new();
    if product_type != ProductType::Pendientes {
        return map;
    }
    let text = normalize(description);
    if let Some(display) = first_match(&text, EARRING_TYPES) {
        map.insert(AttributeKey::TipoPendientes, display);
    }
    map
}

/// Classify the chain link type and derive the complexity field
/// (chains, necklaces and cords only)
pub fn extract_chain_type(description: &str, product_type: ProductType) -> AttributeMap {
    let mut map = AttributeMap::new();
    if !matches!(
        product_type,
        ProductType::Cadena | ProductType::Collar | ProductType::Cordon
    ) {
        return map;
    }
    let text = normalize(description);
    match first_match(&text, CHAIN_TYPES) {
        Some(display) => {
            map.insert(AttributeKey::TipoCadena, display);
            map.insert(AttributeKey::Cadena, "Simple");
        }
        None => {
            map.insert(AttributeKey::TipoCadena, OTHER_CHAIN);
            map.insert(AttributeKey::Cadena, "Compuesta");
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_type_first_match() {
        let map = extract_medal_type("medalla escapulario virgen del carmen", ProductType::Medalla);
        assert_eq!(map.get(AttributeKey::TipoMedalla), Some("Escapulario"));
    }

    #[test]
    fn test_medal_type_religious_fallthrough() {
        let map = extract_medal_type("medalla virgen oro", ProductType::Medalla);
        assert_eq!(map.get(AttributeKey::TipoMedalla), Some("Religiosa"));
    }

    #[test]
    fn test_medal_type_wrong_product() {
        let map = extract_medal_type("medalla escapulario", ProductType::Colgante);
        assert!(map.is_empty());
    }

    #[test]
    fn test_medal_type_no_match() {
        let map = extract_medal_type("medalla lisa mate", ProductType::Medalla);
        assert!(map.is_empty());
    }

    #[test]
    fn test_earring_type() {
        let map = extract_earring_type("pendientes criollas rizadas", ProductType::Pendientes);
        assert_eq!(map.get(AttributeKey::TipoPendientes), Some("Criollas"));
    }

    #[test]
    fn test_chain_simple() {
        let map = extract_chain_type("cadena forzada 45 cm", ProductType::Cadena);
        assert_eq!(map.get(AttributeKey::TipoCadena), Some("Forzada"));
        assert_eq!(map.get(AttributeKey::Cadena), Some("Simple"));
    }

    #[test]
    fn test_chain_composite_default() {
        let map = extract_chain_type("collar fantasia eslabones", ProductType::Collar);
        assert_eq!(map.get(AttributeKey::TipoCadena), Some(OTHER_CHAIN));
        assert_eq!(map.get(AttributeKey::Cadena), Some("Compuesta"));
    }

    #[test]
    fn test_chain_cordon_applicable() {
        let map = extract_chain_type("cordon salomonico oro", ProductType::Cordon);
        assert_eq!(map.get(AttributeKey::TipoCadena), Some("Salomonico"));
        assert_eq!(map.get(AttributeKey::Cadena), Some("Simple"));
    }

    #[test]
    fn test_chain_inapplicable_type() {
        let map = extract_chain_type("pulsera barbada", ProductType::Pulsera);
        assert!(map.is_empty());
    }

    #[test]
    fn test_chain_accented_description() {
        let map = extract_chain_type("Cadena Salomónico", ProductType::Cadena);
        assert_eq!(map.get(AttributeKey::TipoCadena), Some("Salomonico"));
    }
}
