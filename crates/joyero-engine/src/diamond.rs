//! Diamond attribute extraction
//!
//! Carat weight, color grade and clarity grade from diamond-specific
//! vocabulary. Unlike every other classifier this one matches against the
//! upper-cased raw description: the grade letters (G/H/I, VS1, SI2...)
//! are upper-case tokens in the source catalog.

use joyero_domain::{AttributeKey, AttributeMap};
use once_cell::sync::Lazy;
use regex::Regex;

/// Clarity grade alternation shared by the explicit and combined patterns
const GRADES: &str = "FL|IF|WS|VVS1|VVS2|VS|VS1|VS2|SI|SI1|SI2|I1|I2|I3";

static RE_CARAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+[.,]\d+|\d+)\s*(?:QTS?|QT)\b").unwrap());

static RE_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"COLOR\s+([GHI])\b").unwrap());

static RE_CLARITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"PUREZA\s+({GRADES})\b")).unwrap());

static RE_COMBINED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"([GHI])[-\s]?({GRADES})|({GRADES})[-\s]?([GHI])"
    ))
    .unwrap()
});

/// How far past a carat figure to look for the diamond vocabulary that
/// ties the figure to the stone rather than to the gold weight
const CONTEXT_WINDOW: usize = 30;

/// Extract diamond carat/color/clarity attributes
///
/// Short-circuits to an empty map unless the description mentions
/// BRILLANTE or DIAMANTE at all.
pub fn extract_diamond(description: &str) -> AttributeMap {
    let mut map = AttributeMap::new();
    let text = description.to_uppercase();

    if !text.contains("BRILLANTE") && !text.contains("DIAMANTE") {
        return map;
    }

    // Carat: prefer a figure followed (within the window) by diamond
    // vocabulary; the one closest to that vocabulary wins when several
    // qualify. With no qualifying figure, the last one in the string wins.
    let mut last_carat: Option<String> = None;
    let mut contextual_carat: Option<String> = None;
    for caps in RE_CARAT.captures_iter(&text) {
        let value = caps[1].replace(',', ".");
        last_carat = Some(value.clone());

        let end = caps.get(0).map_or(0, |m| m.end());
        let window: String = text[end..].chars().take(CONTEXT_WINDOW).collect();
        if window.contains("DIAMANTE") || window.contains("BRILLANTE") {
            contextual_carat = Some(value);
        }
    }
    if let Some(value) = contextual_carat.or(last_carat) {
        map.insert(AttributeKey::KilatesDiamante, value);
    }

    // Explicit COLOR / PUREZA labels first
    let color = RE_COLOR.captures(&text);
    if let Some(caps) = &color {
        map.insert(AttributeKey::ColorDiamante, &caps[1]);
    }
    let clarity = RE_CLARITY.captures(&text);
    if let Some(caps) = &clarity {
        map.insert(AttributeKey::CalidadDiamante, &caps[1]);
    }

    // Combined adjacency pattern fills only the still-unset fields
    if color.is_none() || clarity.is_none() {
        if let Some(caps) = RE_COMBINED.captures(&text) {
            let color_letter = caps.get(1).or_else(|| caps.get(4));
            if let Some(m) = color_letter {
                if !map.contains_key(AttributeKey::ColorDiamante) {
                    map.insert(AttributeKey::ColorDiamante, m.as_str());
                }
            }
            let grade = caps.get(2).or_else(|| caps.get(3));
            if let Some(m) = grade {
                if !map.contains_key(AttributeKey::CalidadDiamante) {
                    map.insert(AttributeKey::CalidadDiamante, m.as_str());
                }
            }
        }
    }

    map
}
