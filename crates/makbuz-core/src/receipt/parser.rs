//! Receipt parsing: layout classification plus per-layout extraction.

use tracing::debug;

use crate::models::receipt::ReceiptRecord;

use super::layout::{classify, ReceiptLayout};
use super::{classic, e_arsiv, pos};

/// Parses OCR transcripts into normalized receipt records.
///
/// Stateless and pure: the same transcript always yields the same record,
/// and extraction never fails — unreadable fields degrade to sentinels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptParser;

impl ReceiptParser {
    pub fn new() -> Self {
        Self
    }

    /// Classify the transcript and run the matching layout strategy.
    pub fn parse(&self, text: &str) -> ReceiptRecord {
        let lines: Vec<&str> = text.lines().collect();
        let layout = classify(text);
        debug!("transcript classified as {:?} ({} lines)", layout, lines.len());

        match layout {
            ReceiptLayout::EInvoice => e_arsiv::parse(text, &lines),
            ReceiptLayout::PosSlip => pos::parse(text, &lines),
            ReceiptLayout::Classic => classic::parse(text, &lines),
        }
    }
}

/// One-shot convenience over [`ReceiptParser`].
pub fn parse_receipt(text: &str) -> ReceiptRecord {
    ReceiptParser::new().parse(text)
}
