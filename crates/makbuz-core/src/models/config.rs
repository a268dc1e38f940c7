//! Configuration structures for the OCR pipeline.
//!
//! Configuration covers only the external collaborator (preprocessing and
//! the Tesseract invocation); the extraction core is configuration-free.

use serde::{Deserialize, Serialize};

/// Main configuration for the makbuz pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MakbuzConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,
}

/// OCR engine (Tesseract) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable; resolved via PATH when not absolute.
    pub tesseract_cmd: String,

    /// Language models passed to `-l`.
    pub languages: String,

    /// Page segmentation mode passed to `--psm`, when set.
    pub psm: Option<u8>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: "tesseract".to_string(),
            languages: "tur+eng".to_string(),
            psm: None,
        }
    }
}

/// Image preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Contrast adjustment applied after grayscale conversion.
    pub contrast_boost: f32,

    /// Apply a 3x3 sharpen kernel.
    pub sharpen: bool,

    /// Upscale factor applied before recognition (1 = keep size).
    pub upscale: u32,

    /// Gaussian blur sigma used to knock down sensor noise; 0 disables.
    pub denoise_sigma: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            contrast_boost: 40.0,
            sharpen: true,
            upscale: 2,
            denoise_sigma: 1.0,
        }
    }
}

impl MakbuzConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_turkish_receipts() {
        let config = MakbuzConfig::default();
        assert_eq!(config.ocr.languages, "tur+eng");
        assert_eq!(config.preprocess.upscale, 2);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: MakbuzConfig =
            serde_json::from_str(r#"{"ocr": {"languages": "tur"}}"#).unwrap();
        assert_eq!(config.ocr.languages, "tur");
        assert_eq!(config.ocr.tesseract_cmd, "tesseract");
        assert!(config.preprocess.sharpen);
    }
}
