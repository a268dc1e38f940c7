//! Merchant-name heuristics shared by the layout strategies.

/// Keywords that mark a line as sitting at (or right below) the merchant
/// header on classic receipts and e-arşiv slips.
pub const MERCHANT_KEYWORDS: &[&str] = &[
    "TİC", "LTD", "ŞTİ", "MARKET", "AVM", "MAĞAZA", "GIDA", "TİCARET", "TEKSTİL",
];

/// Windowed look-back search: scan lines for an anchor, then examine up to
/// `window` lines immediately above the anchor (oldest first) and return
/// the first candidate accepted by `valid`. Anchors near the top of the
/// document with no preceding lines are skipped.
pub fn look_back<A, V>(lines: &[&str], window: usize, anchor: A, valid: V) -> Option<String>
where
    A: Fn(&str) -> bool,
    V: Fn(&str) -> Option<String>,
{
    for (i, line) in lines.iter().enumerate() {
        if !anchor(line) {
            continue;
        }
        let start = i.saturating_sub(window);
        for candidate in &lines[start..i] {
            if let Some(found) = valid(candidate) {
                return Some(found);
            }
        }
    }
    None
}

/// Generic fallback shared by every layout: the first line printed fully
/// in upper case with at least two words, trimmed.
pub fn upper_case_line(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find(|line| is_all_upper(line) && line.split_whitespace().count() >= 2)
        .map(|line| line.trim().to_string())
}

fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

/// Title-case an upper-cased name: the first letter after any non-letter
/// stays upper, the rest are lowered. "KARDEŞLER MARKET" -> "Kardeşler Market".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}
