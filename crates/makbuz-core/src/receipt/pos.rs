//! Bank POS card slip strategy.

use crate::models::receipt::{sentinel, ReceiptRecord};

use super::rules::{amounts, datetime, merchant};

/// Lines carrying one of these sit just below the merchant header block.
const ANCHOR_KEYWORDS: &[&str] = &["İŞYERİ", "ISYERI", "MERSİS", "TİC", "TİC."];

/// Boilerplate that disqualifies a merchant candidate.
const IGNORE_KEYWORDS: &[&str] = &[
    "BANKASI", "APP LABEL", "VISA", "MASTERCARD", "PAYWAVE", "ONAY KODU", "SATIŞ",
];

/// Look-back window above an anchor line.
const MERCHANT_WINDOW: usize = 3;

pub(crate) fn parse(text: &str, lines: &[&str]) -> ReceiptRecord {
    let date = datetime::first_date(text)
        .map(str::to_string)
        .unwrap_or_else(|| sentinel::DATE.to_string());

    let time = datetime::first_time(text)
        .map(str::to_string)
        .unwrap_or_else(|| sentinel::TIME.to_string());

    let total_amount = extract_amount(lines)
        .unwrap_or_else(|| sentinel::AMOUNT.to_string());

    let merchant = extract_merchant(lines)
        .unwrap_or_else(|| sentinel::MERCHANT.to_string());

    ReceiptRecord {
        merchant,
        date,
        time,
        total_amount,
    }
}

/// The charged amount follows the "SATIŞ" marker: once seen, the first
/// later line mentioning "TL" is searched. The flag never resets, the
/// marker line itself is not searched, and the first amount match decides
/// even when the filter rejects its value.
fn extract_amount(lines: &[&str]) -> Option<String> {
    let mut after_sale = false;

    for line in lines {
        let upper = line.to_uppercase();
        if upper.contains("SATIŞ") {
            after_sale = true;
        } else if after_sale && upper.contains("TL") {
            if let Some(matched) = amounts::first_amount(line) {
                return amounts::plausible(matched);
            }
        }
    }

    None
}

fn extract_merchant(lines: &[&str]) -> Option<String> {
    // Pass 1: up to three lines above an İŞYERİ/MERSİS/TİC anchor.
    let anchored = merchant::look_back(
        lines,
        MERCHANT_WINDOW,
        |line| {
            let upper = line.to_uppercase();
            ANCHOR_KEYWORDS.iter().any(|kw| upper.contains(kw))
        },
        |line| {
            let candidate = line.trim().to_uppercase();
            if within_name_bounds(&candidate) && candidate.chars().any(char::is_alphabetic) {
                Some(merchant::title_case(&candidate))
            } else {
                None
            }
        },
    );

    if anchored.is_some() {
        return anchored;
    }

    // Pass 2: any line that is nothing but letters once spaces are removed.
    lines.iter().find_map(|line| {
        let upper = line.trim().to_uppercase();
        let squeezed: String = upper.chars().filter(|c| *c != ' ').collect();
        let all_alpha = !squeezed.is_empty() && squeezed.chars().all(char::is_alphabetic);
        if within_name_bounds(&upper) && all_alpha {
            Some(merchant::title_case(&upper))
        } else {
            None
        }
    })
}

fn within_name_bounds(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > 5 && len < 40 && !IGNORE_KEYWORDS.iter().any(|kw| candidate.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_lines(text: &str) -> ReceiptRecord {
        parse(text, &text.lines().collect::<Vec<_>>())
    }

    #[test]
    fn amount_search_skips_lines_between_marker_and_tl() {
        let record = parse_lines("SATIŞ\nONAY KODU 123\n125,00 TL");
        assert_eq!(record.total_amount, "125,00");
    }

    #[test]
    fn marker_line_itself_is_not_searched() {
        let record = parse_lines("SATIŞ 125,00 TL");
        assert_eq!(record.total_amount, sentinel::AMOUNT);
    }

    #[test]
    fn no_sale_marker_means_no_amount() {
        let record = parse_lines("TUTAR\n125,00 TL");
        assert_eq!(record.total_amount, sentinel::AMOUNT);
    }

    #[test]
    fn rejected_first_match_stops_the_scan() {
        let record = parse_lines("SATIŞ\n0,50 TL\n125,00 TL");
        assert_eq!(record.total_amount, sentinel::AMOUNT);
    }

    #[test]
    fn full_slip_extracts_date_and_short_time() {
        let record = parse_lines("TÜRKİYE İŞ BANKASI\n01.02.2023 14:30\nSATIŞ\n89,75 TL");
        assert_eq!(record.date, "01.02.2023");
        assert_eq!(record.time, "14:30");
        assert_eq!(record.total_amount, "89,75");
    }

    #[test]
    fn merchant_found_above_isyeri_anchor() {
        let record = parse_lines("TÜRKİYE İŞ BANKASI\nKARDEŞLER MARKET\nİŞYERİ NO: 00012345");
        assert_eq!(record.merchant, "Kardeşler Market");
    }

    #[test]
    fn window_candidates_checked_oldest_first() {
        let lines = [
            "VISA CONTACTLESS",
            "KARDEŞLER MARKET",
            "ŞUBE KADIKÖY",
            "MERSİS 0123456789",
        ];
        // line 0 is ignored boilerplate; line 1 is the oldest valid
        // candidate in the 3-line window
        let merchant = extract_merchant(&lines).unwrap();
        assert_eq!(merchant, "Kardeşler Market");
    }

    #[test]
    fn short_candidates_are_rejected() {
        let record = parse_lines("ABC\nİŞYERİ NO: 00012345");
        assert_eq!(record.merchant, sentinel::MERCHANT);
    }

    #[test]
    fn fallback_accepts_pure_letter_lines_only() {
        let lines = ["FİŞ NO 0042", "KARDEŞLER MARKET", "TUTAR"];
        let merchant = extract_merchant(&lines).unwrap();
        assert_eq!(merchant, "Kardeşler Market");
    }

    #[test]
    fn bank_boilerplate_never_becomes_the_merchant() {
        let record = parse_lines("TÜRKİYE İŞ BANKASI\nPAYWAVE");
        assert_eq!(record.merchant, sentinel::MERCHANT);
    }
}
