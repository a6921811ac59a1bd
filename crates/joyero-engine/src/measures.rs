//! Measurement extraction
//!
//! Resolves dimensional attributes (alto/ancho/grosor/largo/diametro and
//! the combined `medidas` fields) from numeric patterns in the description,
//! interpreted per product type.
//!
//! The extractor is an ordered cascade of rules. Order is behavior:
//! explicit-label rules may overwrite what the dimension-pair rule set,
//! and fallback rules only fire for slots still empty. The cascade is a
//! fixed slice of named rule functions so each step can be audited and
//! tested in isolation.

use joyero_domain::{AttributeKey, AttributeMap, ProductType};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::normalizer::normalize;

static RE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*[x×]\s*(\d+(?:[.,]\d+)?)").unwrap());

static RE_LABELED_LARGO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"largo\s+(\d+(?:[.,]\d+)?)\s*(?:cm|mm)").unwrap());

static RE_LONGITUD_TOTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longitud\s+total\s+(\d+(?:[.,]\d+)?)\s*cm").unwrap());

static RE_LABELED_GROSOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"grosor\s+(\d+(?:[.,]\d+)?)\s*mm").unwrap());

static RE_LABELED_ANCHO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ancho\s+(\d+(?:[.,]\d+)?)\s*mm").unwrap());

static RE_GENERIC_MM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*mm").unwrap());

static RE_GENERIC_CM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*cm").unwrap());

/// Labeled `largo`/`longitud total` values at or below this are treated as
/// noise (stone sizes mislabeled as length) and dropped.
const MIN_LENGTH: f64 = 10.0;

/// Parse a `12,5`/`12.5` fragment. Malformed fragments yield `None` and
/// the associated attribute is simply omitted.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

/// Render a numeric value with `.`-decimal and no trailing `.0`
/// (`12.0` → `"12"`, `12.5` → `"12.5"`)
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

type MeasureRule = fn(&str, ProductType, &mut AttributeMap);

/// The cascade, evaluated top to bottom on every call
static RULES: &[(&str, MeasureRule)] = &[
    ("dimension-pair", rule_dimension_pair),
    ("labeled-largo", rule_labeled_largo),
    ("longitud-total", rule_longitud_total),
    ("labeled-grosor-ancho", rule_labeled_grosor_ancho),
    ("generic-cm", rule_generic_cm),
    ("generic-mm", rule_generic_mm),
];

/// Extract dimensional attributes from a description
///
/// The description is normalized internally; the product type selects the
/// interpretation branches. Empty descriptions yield an empty map.
pub fn extract_measures(description: &str, product_type: ProductType) -> AttributeMap {
    let mut map = AttributeMap::new();
    let text = normalize(description);
    if text.is_empty() {
        return map;
    }

    for (name, rule) in RULES {
        rule(&text, product_type, &mut map);
        debug!(rule = name, entries = map.len(), "measure rule applied");
    }

    map
}

/// `N x N` dimension pairs, branched by type.
///
/// - sello: engraving-zone vs signet-face split, decided by whether
///   "grabado" occurs before the pair
/// - aros: every pair is scanned; ratio ≥ 3 routes to diametro/grosor,
///   otherwise alto/ancho/medidas. The last pair in the string wins.
/// - anything else: first pair only, as alto/ancho/medidas
fn rule_dimension_pair(text: &str, product_type: ProductType, map: &mut AttributeMap) {
    match product_type {
        ProductType::Sello => {
            let Some(caps) = RE_PAIR.captures(text) else {
                return;
            };
            let (Some(a), Some(b)) = (parse_decimal(&caps[1]), parse_decimal(&caps[2])) else {
                return;
            };
            let value = format!("{}x{}", format_decimal(a), format_decimal(b));
            let prefix = &text[..caps.get(0).map_or(0, |m| m.start())];
            if prefix.contains("grabado") {
                map.insert(AttributeKey::MedidasZonaGrabado, value);
            } else {
                map.insert(AttributeKey::MedidasChaton, value);
            }
        }
        ProductType::Aros => {
            for caps in RE_PAIR.captures_iter(text) {
                let (Some(dim1), Some(dim2)) = (parse_decimal(&caps[1]), parse_decimal(&caps[2]))
                else {
                    continue;
                };
                let ratio = dim1.max(dim2) / dim1.min(dim2).max(f64::MIN_POSITIVE);
                if ratio >= 3.0 {
                    map.insert(AttributeKey::Diametro, format_decimal(dim1));
                    map.insert(AttributeKey::Grosor, format_decimal(dim2));
                } else {
                    map.insert(AttributeKey::Alto, format_decimal(dim1));
                    map.insert(AttributeKey::Ancho, format_decimal(dim2));
                    map.insert(
                        AttributeKey::Medidas,
                        format!("{}x{}", format_decimal(dim1), format_decimal(dim2)),
                    );
                }
            }
        }
        _ => {
            let Some(caps) = RE_PAIR.captures(text) else {
                return;
            };
            let (Some(a), Some(b)) = (parse_decimal(&caps[1]), parse_decimal(&caps[2])) else {
                return;
            };
            map.insert(AttributeKey::Alto, format_decimal(a));
            map.insert(AttributeKey::Ancho, format_decimal(b));
            map.insert(
                AttributeKey::Medidas,
                format!("{}x{}", format_decimal(a), format_decimal(b)),
            );
        }
    }
}

/// Explicit `largo N cm|mm`, only for length-bearing types and only above
/// the noise threshold
fn rule_labeled_largo(text: &str, product_type: ProductType, map: &mut AttributeMap) {
    if !product_type.bears_length() {
        return;
    }
    let Some(caps) = RE_LABELED_LARGO.captures(text) else {
        return;
    };
    if let Some(value) = parse_decimal(&caps[1]) {
        if value > MIN_LENGTH {
            map.insert(AttributeKey::Largo, format_decimal(value));
        }
    }
}

/// `longitud total N cm`, same filters, only if largo is still absent
fn rule_longitud_total(text: &str, product_type: ProductType, map: &mut AttributeMap) {
    if map.contains_key(AttributeKey::Largo) || !product_type.bears_length() {
        return;
    }
    if !text.contains("longitud total") {
        return;
    }
    let Some(caps) = RE_LONGITUD_TOTAL.captures(text) else {
        return;
    };
    if let Some(value) = parse_decimal(&caps[1]) {
        if value > MIN_LENGTH {
            map.insert(AttributeKey::Largo, format_decimal(value));
        }
    }
}

/// Explicit `grosor N mm` / `ancho N mm`, extracted for any product type
/// whenever the keyword is present. These overwrite pair-derived values.
fn rule_labeled_grosor_ancho(text: &str, _product_type: ProductType, map: &mut AttributeMap) {
    if text.contains("grosor") {
        if let Some(caps) = RE_LABELED_GROSOR.captures(text) {
            if let Some(value) = parse_decimal(&caps[1]) {
                map.insert(AttributeKey::Grosor, format_decimal(value));
            }
        }
    }
    if text.contains("ancho") {
        if let Some(caps) = RE_LABELED_ANCHO.captures(text) {
            if let Some(value) = parse_decimal(&caps[1]) {
                map.insert(AttributeKey::Ancho, format_decimal(value));
            }
        }
    }
}

/// Generic `N cm` (first match), as largo for length-bearing types when no
/// largo was found yet
fn rule_generic_cm(text: &str, product_type: ProductType, map: &mut AttributeMap) {
    if map.contains_key(AttributeKey::Largo) || !product_type.bears_length() {
        return;
    }
    let Some(caps) = RE_GENERIC_CM.captures(text) else {
        return;
    };
    if let Some(value) = parse_decimal(&caps[1]) {
        if value > MIN_LENGTH {
            map.insert(AttributeKey::Largo, format_decimal(value));
        }
    }
}

/// Generic `N mm` values, processed last.
///
/// Aros/pendientes: the first mm value not already claimed by grosor or
/// ancho becomes the diameter. Other types: a lone mm value routes through
/// the fixed type→slot table when alto/ancho are both absent.
fn rule_generic_mm(text: &str, product_type: ProductType, map: &mut AttributeMap) {
    let values: Vec<String> = RE_GENERIC_MM
        .captures_iter(text)
        .filter_map(|caps| parse_decimal(&caps[1]))
        .map(format_decimal)
        .collect();
    if values.is_empty() {
        return;
    }

    if matches!(product_type, ProductType::Aros | ProductType::Pendientes) {
        for value in values {
            let claimed = map.get(AttributeKey::Grosor) == Some(value.as_str())
                || map.get(AttributeKey::Ancho) == Some(value.as_str());
            if !claimed {
                map.insert(AttributeKey::Diametro, value);
                break;
            }
        }
        return;
    }

    if values.len() == 1
        && !map.contains_key(AttributeKey::Alto)
        && !map.contains_key(AttributeKey::Ancho)
    {
        if let Some(slot) = product_type.mm_fallback_slot() {
            map.insert(slot, values.into_iter().next().unwrap());
        }
    }
}
