//! Catalog row validation
//!
//! Rejects rows that cannot become products before any preparation work
//! happens: missing required columns, unparseable prices or stock, and
//! negative quantities. Each check either produces a rejection reason or
//! declines, and a row is accepted only when no check fired.

use crate::clean::{clean_value, parse_price};
use crate::row::CatalogRow;

/// Result of row validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the row passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Row accepted
    Accepted,

    /// Row rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// A required column is empty
    MissingField(&'static str),

    /// Price column could not be parsed
    InvalidPrice {
        /// Raw column value
        raw: String,
    },

    /// Stock column could not be parsed as an integer
    InvalidStock {
        /// Raw column value
        raw: String,
    },

    /// A numeric column is below its minimum
    NegativeValue {
        /// Column name
        field: &'static str,
        /// Parsed value
        value: f64,
    },
}

/// Configuration for validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Require the four mandatory columns (referencia, descripcion,
    /// precio, tipo)
    pub require_mandatory_columns: bool,

    /// Check that precio/stock parse as numbers
    pub validate_numeric_columns: bool,

    /// Reject negative prices and stock
    pub validate_non_negative: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_mandatory_columns: true,
            validate_numeric_columns: true,
            validate_non_negative: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (mandatory columns only)
    pub fn permissive() -> Self {
        Self {
            require_mandatory_columns: true,
            validate_numeric_columns: false,
            validate_non_negative: false,
        }
    }
}

/// The row validator gates rows before preparation
pub struct RowValidator {
    config: ValidationConfig,
}

impl RowValidator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a row against the configured rules
    pub fn validate(&self, row: &CatalogRow) -> ValidationResult {
        let mut reasons = Vec::new();

        if self.config.require_mandatory_columns {
            reasons.extend(self.check_mandatory_columns(row));
        }

        if self.config.validate_numeric_columns {
            if let Some(reason) = self.check_price(row) {
                reasons.push(reason);
            }
            if let Some(reason) = self.check_stock(row) {
                reasons.push(reason);
            }
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    /// Required-column checks: referencia, descripcion, precio, tipo
    fn check_mandatory_columns(&self, row: &CatalogRow) -> Vec<RejectionReason> {
        let columns = [
            ("referencia", &row.referencia),
            ("descripcion", &row.descripcion),
            ("precio", &row.precio),
            ("tipo", &row.tipo),
        ];

        columns
            .into_iter()
            .filter(|(_, value)| clean_value(value).is_empty())
            .map(|(name, _)| RejectionReason::MissingField(name))
            .collect()
    }

    fn check_price(&self, row: &CatalogRow) -> Option<RejectionReason> {
        let raw = clean_value(&row.precio);
        if raw.is_empty() {
            // Already reported as a missing column.
            return None;
        }
        match parse_price(&raw) {
            Ok(price) => {
                if self.config.validate_non_negative && price < 0.0 {
                    Some(RejectionReason::NegativeValue {
                        field: "precio",
                        value: price,
                    })
                } else {
                    None
                }
            }
            Err(_) => Some(RejectionReason::InvalidPrice { raw }),
        }
    }

    fn check_stock(&self, row: &CatalogRow) -> Option<RejectionReason> {
        let raw = clean_value(&row.stock);
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i64>() {
            Ok(stock) => {
                if self.config.validate_non_negative && stock < 0 {
                    Some(RejectionReason::NegativeValue {
                        field: "stock",
                        value: stock as f64,
                    })
                } else {
                    None
                }
            }
            Err(_) => Some(RejectionReason::InvalidStock { raw }),
        }
    }
}
