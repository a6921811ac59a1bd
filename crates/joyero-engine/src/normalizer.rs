//! Locale-insensitive text normalization
//!
//! Every matcher that compares substrings or runs lowercase regexes goes
//! through [`normalize`] first. The diamond extractor is the exception:
//! it matches on the upper-cased raw description instead.

use unicode_normalization::UnicodeNormalization;

/// Lower-case, strip diacritics, and collapse whitespace
///
/// Diacritics are removed by NFD decomposition followed by ASCII-only
/// retention, so `"Círculo  Ónix"` becomes `"circulo onix"`. Total:
/// empty input yields an empty string.
pub fn normalize(input: &str) -> String {
    let ascii: String = input
        .nfd()
        // The multiplication sign separates dimension pairs; folding it
        // keeps "10×15" intact instead of fusing the digits.
        .map(|c| if c == '×' { 'x' } else { c })
        .filter(char::is_ascii)
        .collect();
    let lowered = ascii.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
