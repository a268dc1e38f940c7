//! E-arşiv invoice slip strategy.
//!
//! E-arşiv slips label their fields ("Tarih: ...", "Saat: ...") and print
//! the payable total as the last amount followed by "TL", so extraction is
//! line-oriented rather than whole-text.

use crate::models::receipt::{sentinel, ReceiptRecord};

use super::rules::{amounts, datetime, merchant, patterns, MERCHANT_KEYWORDS};

pub(crate) fn parse(_text: &str, lines: &[&str]) -> ReceiptRecord {
    let (date, time) = extract_date_time(lines);

    let total_amount = extract_amount(lines)
        .unwrap_or_else(|| sentinel::AMOUNT.to_string());

    let merchant = extract_merchant(lines)
        .unwrap_or_else(|| sentinel::MERCHANT.to_string());

    ReceiptRecord {
        merchant,
        date: date.unwrap_or_else(|| sentinel::DATE.to_string()),
        time: time.unwrap_or_else(|| sentinel::TIME.to_string()),
        total_amount,
    }
}

/// The issuer name precedes the company-form keyword on the same line;
/// the keyword's prefix of the upper-cased line is the candidate.
fn extract_merchant(lines: &[&str]) -> Option<String> {
    for line in lines {
        let upper = line.to_uppercase();
        for keyword in MERCHANT_KEYWORDS {
            if let Some(pos) = upper.find(keyword) {
                return Some(upper[..pos].trim().to_string());
            }
        }
    }
    merchant::upper_case_line(lines)
}

/// Scan labeled lines for date and short time, each captured at its first
/// occurrence independently; stop once both are in hand.
fn extract_date_time(lines: &[&str]) -> (Option<String>, Option<String>) {
    let mut date = None;
    let mut time = None;

    for line in lines {
        let lower = line.to_lowercase();
        if lower.contains("tarih") || lower.contains("saat") {
            if date.is_none() {
                date = datetime::first_date(line).map(str::to_string);
            }
            if time.is_none() {
                time = datetime::first_short_time(line).map(str::to_string);
            }
        }
        if date.is_some() && time.is_some() {
            break;
        }
    }

    (date, time)
}

/// The payable total is the last "<amount> TL" line; the first line found
/// scanning bottom-up decides, even when the filter rejects its value.
fn extract_amount(lines: &[&str]) -> Option<String> {
    for line in lines.iter().rev() {
        let upper = line.to_uppercase();
        if let Some(caps) = patterns::AMOUNT_TL.captures(&upper) {
            return amounts::plausible(&caps[1]);
        }
    }
    None
}
