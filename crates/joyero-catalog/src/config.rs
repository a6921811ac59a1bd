//! Configuration for catalog preparation

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Configuration for product preparation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Vendor name stamped on every prepared product
    pub vendor: String,

    /// Sale price multiplier over the catalog cost price
    pub price_margin: f64,

    /// Namespace the metafield payloads are rendered under
    pub metafield_namespace: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            vendor: "Joyero".to_string(),
            price_margin: 2.2,
            metafield_namespace: "custom".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.vendor.trim().is_empty() {
            return Err(CatalogError::Config("vendor must not be empty".to_string()));
        }
        if self.price_margin <= 0.0 {
            return Err(CatalogError::Config(format!(
                "price_margin must be positive, got {}",
                self.price_margin
            )));
        }
        if self.metafield_namespace.trim().is_empty() {
            return Err(CatalogError::Config(
                "metafield_namespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        toml::from_str(toml_str)
            .map_err(|e| CatalogError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("failed to serialize TOML: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.price_margin, 2.2);
    }

    #[test]
    fn test_invalid_margin() {
        let mut config = CatalogConfig::default();
        config.price_margin = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CatalogConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = CatalogConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.vendor, parsed.vendor);
        assert_eq!(config.price_margin, parsed.price_margin);
        assert_eq!(config.metafield_namespace, parsed.metafield_namespace);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(CatalogConfig::from_toml("vendor = [").is_err());
    }
}
