//! Error types for the makbuz-core library.
//!
//! Field extraction itself never errors; it degrades to sentinels. These
//! types cover the collaborator surface: image decoding, preprocessing,
//! and the Tesseract subprocess.

use thiserror::Error;

/// Main error type for the makbuz library.
#[derive(Error, Debug)]
pub enum MakbuzError {
    /// OCR engine invocation error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image decoding or processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the external OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine executable could not be started.
    #[error("failed to launch OCR engine '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but reported failure.
    #[error("OCR engine exited with {status}: {stderr}")]
    Engine {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The engine produced output that is not valid UTF-8.
    #[error("OCR output is not valid UTF-8")]
    Encoding,

    /// The prepared image could not be staged for the engine.
    #[error("failed to stage image for OCR: {0}")]
    Staging(#[source] std::io::Error),
}

/// Result type for the makbuz library.
pub type Result<T> = std::result::Result<T, MakbuzError>;
