//! Core library for Turkish receipt OCR processing.
//!
//! This crate provides:
//! - Receipt layout classification (classic fiş, e-arşiv slip, POS slip)
//! - Rule-based field extraction: merchant, date, time, total amount
//! - A thin Tesseract collaborator for image preprocessing and recognition
//!
//! The extraction core is pure, synchronous and stateless: it consumes a
//! transcript string and always returns a fully-populated
//! [`ReceiptRecord`] — unreadable fields carry per-field sentinel text
//! instead of being absent.

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{MakbuzError, OcrError, Result};
pub use models::config::{MakbuzConfig, OcrConfig, PreprocessConfig};
pub use models::receipt::{sentinel, BatchReport, FileResult, ReceiptRecord};
pub use ocr::TesseractEngine;
pub use receipt::{classify, parse_receipt, ReceiptLayout, ReceiptParser};
