//! Column value cleaning and numeric parsing

use crate::error::CatalogError;

/// Clean a raw column value
///
/// Trims whitespace and maps the NaN artifacts spreadsheet exports leave
/// behind to an empty string, so downstream code only has to test for
/// emptiness.
pub fn clean_value(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    trimmed.to_string()
}

/// Parse a price column
///
/// Strips everything but digits and separators, then folds the decimal
/// comma. `"12,34"` parses to `12.34`; a value with thousand separators
/// like `"EUR 1.234,56"` is rejected, not guessed at.
pub fn parse_price(raw: &str) -> Result<f64, CatalogError> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    digits
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CatalogError::InvalidPrice(raw.to_string()))
}

/// Parse a weight column, leniently: empty or malformed weights are 0.0
pub fn parse_weight(raw: &str) -> f64 {
    let cleaned = clean_value(raw);
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value_basic() {
        assert_eq!(clean_value(""), "");
        assert_eq!(clean_value("  hola  "), "hola");
        assert_eq!(clean_value("nan"), "");
        assert_eq!(clean_value("NaN"), "");
    }

    #[test]
    fn test_parse_price_comma_decimal() {
        assert_eq!(parse_price("12,34").unwrap(), 12.34);
        assert_eq!(parse_price("123").unwrap(), 123.0);
    }

    #[test]
    fn test_parse_price_currency_noise_stripped() {
        assert_eq!(parse_price("EUR 12,34").unwrap(), 12.34);
    }

    #[test]
    fn test_parse_price_thousand_separator_rejected() {
        assert!(parse_price("EUR 1.234,56").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_parse_weight_lenient() {
        assert_eq!(parse_weight("3,5"), 3.5);
        assert_eq!(parse_weight(""), 0.0);
        assert_eq!(parse_weight("n/a"), 0.0);
    }
}
