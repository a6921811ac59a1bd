//! Stone name extraction
//!
//! Multi-match lookup over the stone dictionary. Matching is plain
//! substring containment on the lower-cased description (no diacritic
//! stripping, no word boundaries), so names embedded in longer words can
//! false-positive; accepted as a known trade-off for catalog parity.

use joyero_domain::{AttributeKey, AttributeMap};

/// Canonical stone names with their surface variants, in output order
static STONES: &[(&str, &[&str])] = &[
    ("aguamarina", &["aguamarina", "aguamarinas"]),
    ("alejandrita", &["alejandrita", "alejandritas"]),
    ("amatista", &["amatista", "amatistas"]),
    ("brillante", &["brillante", "brillantes"]),
    ("circonita", &["circonita", "circonitas"]),
    ("coral", &["coral", "corales"]),
    ("cuarzo", &["cuarzo", "cuarzos"]),
    ("diamante", &["diamante", "diamantes"]),
    ("esmeralda", &["esmeralda", "esmeraldas"]),
    ("granate", &["granate", "granates"]),
    ("jade", &["jade", "jades"]),
    ("perla", &["perla", "perlas"]),
    ("topacio", &["topacio", "topacios"]),
    ("turquesa", &["turquesa", "turquesas"]),
    ("zafiro", &["zafiro", "zafiros"]),
];

/// Extract every stone mentioned in the description
///
/// Produces `piedra` as a comma-joined list in dictionary declaration
/// order, or nothing when no stone matches.
pub fn extract_stones(description: &str) -> AttributeMap {
    let mut map = AttributeMap::new();
    let text = description.to_lowercase();

    let found: Vec<&str> = STONES
        .iter()
        .filter(|(_, variants)| variants.iter().any(|v| text.contains(v)))
        .map(|(name, _)| *name)
        .collect();

    if !found.is_empty() {
        map.insert(AttributeKey::Piedra, found.join(", "));
    }

    map
}
