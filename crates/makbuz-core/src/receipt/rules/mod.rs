//! Rule-based field extractors shared by the receipt layout strategies.
//!
//! Every extractor is a small pure function returning an `Option`; the
//! strategies combine them first-success-wins and degrade to per-field
//! sentinels when nothing matches.

pub mod amounts;
pub mod datetime;
pub mod merchant;
pub mod patterns;

pub use amounts::{first_amount, plausible};
pub use datetime::{first_date, first_long_time, first_short_time, first_time};
pub use merchant::{look_back, title_case, upper_case_line, MERCHANT_KEYWORDS};
