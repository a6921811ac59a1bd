//! Zodiac sign matching
//!
//! First-match-wins over the twelve signs in declaration order, against
//! the normalized description. Applicable to every product type.

use joyero_domain::{AttributeKey, AttributeMap};

use crate::normalizer::normalize;

/// Normalized sign keys with their accented display names
static SIGNS: &[(&str, &str)] = &[
    ("aries", "Aries"),
    ("tauro", "Tauro"),
    ("geminis", "Géminis"),
    ("cancer", "Cáncer"),
    ("leo", "Leo"),
    ("virgo", "Virgo"),
    ("libra", "Libra"),
    ("escorpio", "Escorpio"),
    ("sagitario", "Sagitario"),
    ("capricornio", "Capricornio"),
    ("acuario", "Acuario"),
    ("piscis", "Piscis"),
];

/// Find the first sign named in a description, if any
pub fn match_sign(description: &str) -> Option<&'static str> {
    let text = normalize(description);
    if text.is_empty() {
        return None;
    }
    SIGNS
        .iter()
        .find(|(key, _)| text.contains(key))
        .map(|(_, display)| *display)
}

/// Extract the zodiac sign attribute
pub fn extract_zodiac(description: &str) -> AttributeMap {
    let mut map = AttributeMap::new();
    if let Some(display) = match_sign(description) {
        map.insert(AttributeKey::SimboloZodiaco, display);
    }
    map
}
