//! Monetary amount matching and plausibility filtering.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT;

/// Minimum value an amount match must reach to be believed. Anything
/// smaller is treated as a misread decimal point.
pub const MIN_PLAUSIBLE: Decimal = Decimal::ONE;

/// First amount-shaped match anywhere in the text.
pub fn first_amount(text: &str) -> Option<&str> {
    AMOUNT.find(text).map(|m| m.as_str())
}

/// Keep a matched amount only if it normalizes to a plausible value.
///
/// Normalization strips thousands dots and turns the decimal comma into a
/// point ("1.234,56" -> 1234.56). The literal match is returned unchanged;
/// parse failures and values below [`MIN_PLAUSIBLE`] are discarded.
pub fn plausible(matched: &str) -> Option<String> {
    let normalized = matched.replace('.', "").replace(',', ".");
    let value = Decimal::from_str(&normalized).ok()?;
    if value < MIN_PLAUSIBLE {
        return None;
    }
    Some(matched.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_amount_takes_leftmost_match() {
        assert_eq!(first_amount("ARA TOPLAM 10,00 TOPLAM 45,90"), Some("10,00"));
        assert_eq!(first_amount("no numbers here"), None);
    }

    #[test]
    fn plausible_keeps_literal_form() {
        assert_eq!(plausible("12,50"), Some("12,50".to_string()));
        assert_eq!(plausible("1.234,56"), Some("1.234,56".to_string()));
    }

    #[test]
    fn plausible_rejects_sub_lira_values() {
        assert_eq!(plausible("0,50"), None);
        assert_eq!(plausible("0,99"), None);
        assert_eq!(plausible("1,00"), Some("1,00".to_string()));
    }
}
