//! Receipt record and per-file result types.

use serde::{Deserialize, Serialize};

/// Placeholder strings reported when a field cannot be read from the
/// transcript. The wording is part of the response contract.
pub mod sentinel {
    pub const MERCHANT: &str = "Firma adı düzgün okunamıyor";
    pub const DATE: &str = "Tarih düzgün okunamıyor";
    pub const TIME: &str = "Saat düzgün okunamıyor";
    pub const AMOUNT: &str = "Toplam tutar düzgün okunamıyor";
}

/// Normalized record extracted from one receipt transcript.
///
/// Every field is always populated: either the literal matched text or
/// the field's sentinel. Callers never see a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Merchant (firma) name.
    pub merchant: String,

    /// Date as matched, e.g. "01/02/2023". Not calendar-validated.
    pub date: String,

    /// Time as matched, e.g. "14:30:00".
    pub time: String,

    /// Total amount as matched, e.g. "45,90" or "1.234,56".
    #[serde(rename = "totalAmount")]
    pub total_amount: String,
}

impl ReceiptRecord {
    /// Record with every field set to its sentinel.
    pub fn illegible() -> Self {
        Self {
            merchant: sentinel::MERCHANT.to_string(),
            date: sentinel::DATE.to_string(),
            time: sentinel::TIME.to_string(),
            total_amount: sentinel::AMOUNT.to_string(),
        }
    }
}

/// Outcome of processing one scanned file. Built once per file and
/// serialized as-is; a failed file never aborts the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileResult {
    /// OCR and extraction both ran.
    Parsed {
        filename: String,
        ocr_text: String,
        parsed: ReceiptRecord,
    },

    /// The file could not be read or recognized; extraction never ran.
    Failed { filename: String, error: String },
}

impl FileResult {
    pub fn filename(&self) -> &str {
        match self {
            FileResult::Parsed { filename, .. } => filename,
            FileResult::Failed { filename, .. } => filename,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, FileResult::Parsed { .. })
    }
}

/// Aggregated response for a batch of files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub ocr_results: Vec<FileResult>,
}

impl BatchReport {
    pub fn new(ocr_results: Vec<FileResult>) -> Self {
        Self { ocr_results }
    }
}
