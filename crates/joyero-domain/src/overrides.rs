//! Structured column overrides supplied by the ingestion collaborator

/// Optional catalog-column values layered over description-derived
/// attributes by the orchestrator
///
/// Each field mirrors one structured source column. `None` or an empty
/// string both mean "column absent"; the orchestrator only applies
/// non-empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredOverrides {
    /// Intended wearer, from the gender column
    pub destinatario: Option<String>,

    /// Clasp type column
    pub cierre: Option<String>,

    /// Material hint derived from the description prefix (18K/9K)
    pub material: Option<String>,

    /// Gold color column
    pub color_oro: Option<String>,

    /// Stone column; beats the description-derived stone list
    pub piedra: Option<String>,

    /// Stone quality column
    pub calidad_piedra: Option<String>,

    /// Weight column, grams
    pub peso: Option<String>,
}

impl StructuredOverrides {
    /// An overrides value with every column absent
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether no column carries a value
    pub fn is_empty(&self) -> bool {
        let fields = [
            &self.destinatario,
            &self.cierre,
            &self.material,
            &self.color_oro,
            &self.piedra,
            &self.calidad_piedra,
            &self.peso,
        ];
        fields
            .iter()
            .all(|f| f.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(StructuredOverrides::none().is_empty());
    }

    #[test]
    fn test_blank_values_count_as_empty() {
        let overrides = StructuredOverrides {
            cierre: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_populated_is_not_empty() {
        let overrides = StructuredOverrides {
            piedra: Some("circonita".to_string()),
            ..Default::default()
        };
        assert!(!overrides.is_empty());
    }
}
