//! Tesseract subprocess wrapper.

use std::path::Path;
use std::process::Command;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::{OcrConfig, PreprocessConfig};

use super::preprocessing;

/// External OCR engine driven over the command line.
///
/// The engine is invoked per image with the configured language models
/// (default `tur+eng`); its stdout is the raw transcript fed to the
/// extraction core. No state is shared between invocations.
pub struct TesseractEngine {
    config: OcrConfig,
    preprocess: PreprocessConfig,
}

impl TesseractEngine {
    pub fn new(config: OcrConfig, preprocess: PreprocessConfig) -> Self {
        Self { config, preprocess }
    }

    /// Whether the configured executable answers `--version`.
    pub fn available(&self) -> bool {
        Command::new(&self.config.tesseract_cmd)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Preprocess `image` and run recognition, returning the transcript.
    pub fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let prepared = preprocessing::prepare(image, &self.preprocess);

        let staging = tempfile::Builder::new()
            .prefix("makbuz-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(OcrError::Staging)?;

        prepared
            .save(staging.path())
            .map_err(|e| OcrError::Staging(std::io::Error::other(e)))?;

        self.recognize_file(staging.path())
    }

    /// Run the engine on an image already on disk, without preprocessing.
    pub fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        let mut command = Command::new(&self.config.tesseract_cmd);
        command
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.languages);

        if let Some(psm) = self.config.psm {
            command.arg("--psm").arg(psm.to_string());
        }

        debug!("running {:?}", command);

        let output = command.output().map_err(|source| OcrError::Launch {
            command: self.config.tesseract_cmd.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| OcrError::Encoding)?;
        info!("OCR produced {} characters from {}", text.len(), path.display());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_reports_launch_error() {
        let config = OcrConfig {
            tesseract_cmd: "definitely-not-a-real-binary".to_string(),
            ..OcrConfig::default()
        };
        let engine = TesseractEngine::new(config, PreprocessConfig::default());

        assert!(!engine.available());
        let err = engine
            .recognize_file(Path::new("missing.png"))
            .unwrap_err();
        assert!(matches!(err, OcrError::Launch { .. }));
    }
}
