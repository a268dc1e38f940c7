//! Date and time finders.
//!
//! Matches are returned as the literal matched text; no calendar or clock
//! validation is applied ("99/99/9999" passes through).

use super::patterns::{DATE_DMY, TIME_ANY, TIME_HM, TIME_HMS};

/// First DD.MM.YYYY-shaped match (any of the three separators).
pub fn first_date(text: &str) -> Option<&str> {
    DATE_DMY.find(text).map(|m| m.as_str())
}

/// First HH:MM:SS match.
pub fn first_long_time(text: &str) -> Option<&str> {
    TIME_HMS.find(text).map(|m| m.as_str())
}

/// First HH:MM match.
pub fn first_short_time(text: &str) -> Option<&str> {
    TIME_HM.find(text).map(|m| m.as_str())
}

/// First time in either form, preferring HH:MM:SS at the same position.
pub fn first_time(text: &str) -> Option<&str> {
    TIME_ANY.find(text).map(|m| m.as_str())
}
