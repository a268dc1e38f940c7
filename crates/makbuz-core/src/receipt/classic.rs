//! Classic cash-register receipt (yazar kasa fişi) strategy.

use crate::models::receipt::{sentinel, ReceiptRecord};

use super::rules::{amounts, datetime, merchant, MERCHANT_KEYWORDS};

pub(crate) fn parse(text: &str, lines: &[&str]) -> ReceiptRecord {
    let date = datetime::first_date(text)
        .map(str::to_string)
        .unwrap_or_else(|| sentinel::DATE.to_string());

    let time = datetime::first_long_time(text)
        .map(str::to_string)
        .unwrap_or_else(|| sentinel::TIME.to_string());

    // First amount anywhere in the transcript, not anchored to a totals
    // keyword. Inherited behavior.
    let total_amount = amounts::first_amount(text)
        .and_then(amounts::plausible)
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

/// The merchant name usually sits on the line directly above the first
/// line carrying a company-form or sector keyword. A grab that lands on
/// the subtotal label falls back to the generic upper-case heuristic.
fn extract_merchant(lines: &[&str]) -> Option<String> {
    let candidate = merchant::look_back(
        lines,
        1,
        |line| {
            let upper = line.to_uppercase();
            MERCHANT_KEYWORDS.iter().any(|kw| upper.contains(kw))
        },
        |line| Some(line.trim().to_string()),
    );

    match candidate {
        Some(name) if !name.is_empty() && !name.to_uppercase().contains("ARA TOPLAM") => {
            Some(name)
        }
        _ => merchant::upper_case_line(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reference_receipt_extracts_all_fields() {
        let text = "ABC TİCARET LTD ŞTİ\nTİC SİCİL NO: 123\n01/02/2023\n14:30:00\nTOPLAM 45,90";
        let lines: Vec<&str> = text.lines().collect();

        let record = parse(text, &lines);

        assert_eq!(record.merchant, "ABC TİCARET LTD ŞTİ");
        assert_eq!(record.date, "01/02/2023");
        assert_eq!(record.time, "14:30:00");
        assert_eq!(record.total_amount, "45,90");
    }

    #[test]
    fn empty_transcript_yields_sentinels() {
        let record = parse("", &[]);
        assert_eq!(record, ReceiptRecord::illegible());
    }

    #[test]
    fn time_without_seconds_is_not_accepted() {
        let text = "SAAT 14:30\nTOPLAM 45,90";
        let record = parse(text, &text.lines().collect::<Vec<_>>());
        assert_eq!(record.time, sentinel::TIME);
    }

    #[test]
    fn first_amount_wins_even_before_total_line() {
        let text = "KDV 3,90\nTOPLAM 45,90";
        let record = parse(text, &text.lines().collect::<Vec<_>>());
        assert_eq!(record.total_amount, "3,90");
    }

    #[test]
    fn tiny_amount_is_discarded() {
        let text = "TOPLAM 0,45";
        let record = parse(text, &text.lines().collect::<Vec<_>>());
        assert_eq!(record.total_amount, sentinel::AMOUNT);
    }

    #[test]
    fn subtotal_label_above_anchor_falls_back_to_upper_case_line() {
        let lines = ["ara toplam", "MARKET ŞUBESİ", "ARA TOPLAM", "TİC SİCİL 5"];
        let merchant = extract_merchant(&lines).unwrap();
        assert_eq!(merchant, "MARKET ŞUBESİ");
    }

    #[test]
    fn keyword_on_first_line_keeps_scanning() {
        let lines = ["MARKET GİRİŞ", "KARDEŞLER PAZARLAMA", "TİC SİCİL NO 7"];
        // anchor on line 0 has no preceding line; the next anchor (line 2)
        // grabs line 1
        let merchant = extract_merchant(&lines).unwrap();
        assert_eq!(merchant, "KARDEŞLER PAZARLAMA");
    }
}
