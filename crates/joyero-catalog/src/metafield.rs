//! Metafield payload rendering
//!
//! Turns an attribute map into the typed payload records the sync
//! collaborator serializes. Decimal-typed keys are normalized here one
//! last time before leaving the system; a decimal value that does not
//! parse is dropped with a warning rather than shipped broken.

use joyero_domain::{AttributeMap, ValueType};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One metafield payload record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    /// Metafield namespace
    pub namespace: String,

    /// Metafield key
    pub key: String,

    /// Rendered value
    pub value: String,

    /// Declared scalar type
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Render an attribute map as metafield payloads
///
/// Empty values are skipped; entries keep the map's insertion order.
pub fn render_metafields(map: &AttributeMap, namespace: &str) -> Vec<Metafield> {
    map.iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .filter_map(|(key, value)| {
            let (value, value_type) = match key.value_type() {
                ValueType::Decimal => {
                    let Some(rendered) = render_decimal(value) else {
                        warn!(key = key.key(), value, "unparseable decimal metafield dropped");
                        return None;
                    };
                    (rendered, "number_decimal")
                }
                ValueType::Text => (value.to_string(), "single_line_text_field"),
            };
            Some(Metafield {
                namespace: namespace.to_string(),
                key: key.key().to_string(),
                value,
                value_type: value_type.to_string(),
            })
        })
        .collect()
}

/// `.`-decimal rendering with no trailing `.0`
fn render_decimal(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().replace(',', ".").parse().ok()?;
    if value.fract() == 0.0 {
        Some(format!("{}", value as i64))
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joyero_domain::AttributeKey;

    #[test]
    fn test_types_declared_per_key() {
        let mut map = AttributeMap::new();
        map.insert(AttributeKey::Alto, "12");
        map.insert(AttributeKey::Piedra, "perla, turquesa");

        let fields = render_metafields(&map, "custom");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "alto");
        assert_eq!(fields[0].value_type, "number_decimal");
        assert_eq!(fields[1].key, "piedra");
        assert_eq!(fields[1].value_type, "single_line_text_field");
    }

    #[test]
    fn test_decimal_comma_normalized() {
        let mut map = AttributeMap::new();
        map.insert(AttributeKey::Peso, "3,5");

        let fields = render_metafields(&map, "custom");
        assert_eq!(fields[0].value, "3.5");
    }

    #[test]
    fn test_integral_decimal_trimmed() {
        let mut map = AttributeMap::new();
        map.insert(AttributeKey::Largo, "45,0");

        let fields = render_metafields(&map, "custom");
        assert_eq!(fields[0].value, "45");
    }

    #[test]
    fn test_empty_value_skipped() {
        let mut map = AttributeMap::new();
        map.insert(AttributeKey::Piedra, "  ");
        map.insert(AttributeKey::Cierre, "Mosqueton");

        let fields = render_metafields(&map, "custom");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].key, "cierre");
    }

    #[test]
    fn test_unparseable_decimal_dropped() {
        let mut map = AttributeMap::new();
        map.insert(AttributeKey::Peso, "3,5 aprox");

        let fields = render_metafields(&map, "custom");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_serializes_with_type_field() {
        let field = Metafield {
            namespace: "custom".to_string(),
            key: "alto".to_string(),
            value: "12".to_string(),
            value_type: "number_decimal".to_string(),
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains(r#""type":"number_decimal""#));
    }
}
