//! Image cleanup ahead of recognition.
//!
//! Scanned receipts arrive crumpled and underexposed; recognition quality
//! improves a lot with a fixed cleanup pass: grayscale, contrast boost,
//! sharpening, upscaling, then a light blur against sensor noise.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::models::config::PreprocessConfig;

const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Run the cleanup pipeline described by `config`.
pub fn prepare(image: &DynamicImage, config: &PreprocessConfig) -> DynamicImage {
    let mut prepared = image.grayscale();

    if config.contrast_boost != 0.0 {
        prepared = prepared.adjust_contrast(config.contrast_boost);
    }

    if config.sharpen {
        prepared = prepared.filter3x3(&SHARPEN_KERNEL);
    }

    if config.upscale > 1 {
        let (width, height) = prepared.dimensions();
        prepared = prepared.resize_exact(
            width * config.upscale,
            height * config.upscale,
            FilterType::Lanczos3,
        );
    }

    if config.denoise_sigma > 0.0 {
        prepared = prepared.blur(config.denoise_sigma);
    }

    debug!(
        "prepared image {}x{} -> {}x{}",
        image.width(),
        image.height(),
        prepared.width(),
        prepared.height()
    );

    prepared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::new_rgb8(width, height)
    }

    #[test]
    fn upscale_doubles_dimensions() {
        let config = PreprocessConfig::default();
        let prepared = prepare(&blank(40, 30), &config);
        assert_eq!(prepared.dimensions(), (80, 60));
    }

    #[test]
    fn unit_upscale_keeps_dimensions() {
        let config = PreprocessConfig {
            upscale: 1,
            ..PreprocessConfig::default()
        };
        let prepared = prepare(&blank(40, 30), &config);
        assert_eq!(prepared.dimensions(), (40, 30));
    }
}
