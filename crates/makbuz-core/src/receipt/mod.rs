//! Receipt layout detection and field extraction.
//!
//! One strategy per layout; each composes the shared extractors in
//! [`rules`] and always produces a fully-populated record.

mod classic;
mod e_arsiv;
mod parser;
mod pos;

pub mod layout;
pub mod rules;

pub use layout::{classify, ReceiptLayout};
pub use parser::{parse_receipt, ReceiptParser};
