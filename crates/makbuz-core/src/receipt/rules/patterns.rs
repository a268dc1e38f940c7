//! Common regex patterns for Turkish receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date: DD.MM.YYYY, DD/MM/YYYY or DD-MM-YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\d{2}[/.\-]\d{2}[/.\-]\d{4}"
    ).unwrap();

    // Time with seconds, as printed by cash registers
    pub static ref TIME_HMS: Regex = Regex::new(
        r"\d{2}:\d{2}:\d{2}"
    ).unwrap();

    // Short time, used on e-arşiv slips
    pub static ref TIME_HM: Regex = Regex::new(
        r"\d{2}:\d{2}"
    ).unwrap();

    // Either form; the seconds variant wins at the same position
    pub static ref TIME_ANY: Regex = Regex::new(
        r"\d{2}:\d{2}:\d{2}|\d{2}:\d{2}"
    ).unwrap();

    // Amount: 45,90 / 1.234,56 / 1234.56 — thousands vs decimal separator
    // is not disambiguated, only position matters
    pub static ref AMOUNT: Regex = Regex::new(
        r"\d{1,3}(?:[.,]\d{3})*[.,]\d{2}"
    ).unwrap();

    // Amount followed by the lira marker, matched against upper-cased lines
    pub static ref AMOUNT_TL: Regex = Regex::new(
        r"(\d{1,3}(?:[.,]\d{3})*[.,]\d{2})\s*TL"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_accepts_all_three_separators() {
        for text in ["01/02/2023", "01.02.2023", "01-02-2023"] {
            assert!(DATE_DMY.is_match(text), "no match for {text}");
        }
    }

    #[test]
    fn date_requires_four_digit_year() {
        assert!(!DATE_DMY.is_match("01/02/23"));
    }

    #[test]
    fn time_any_prefers_seconds_form() {
        let m = TIME_ANY.find("14:30:00").unwrap();
        assert_eq!(m.as_str(), "14:30:00");
    }

    #[test]
    fn amount_matches_grouped_thousands() {
        assert_eq!(AMOUNT.find("TOPLAM 1.234,56").unwrap().as_str(), "1.234,56");
        assert_eq!(AMOUNT.find("KDV 45,90").unwrap().as_str(), "45,90");
    }

    #[test]
    fn amount_tl_allows_space_before_marker() {
        let caps = AMOUNT_TL.captures("125,00 TL").unwrap();
        assert_eq!(&caps[1], "125,00");
        let caps = AMOUNT_TL.captures("125,00TL").unwrap();
        assert_eq!(&caps[1], "125,00");
    }
}
