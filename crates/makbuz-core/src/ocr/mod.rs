//! External OCR collaborator: image preprocessing and the Tesseract
//! subprocess. The extraction core never touches this module; it only
//! consumes the transcript string produced here.

mod engine;

pub mod preprocessing;

pub use engine::TesseractEngine;
