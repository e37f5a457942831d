//! # OCR Text Extraction
//!
//! This module provides the text-extraction boundary: a [`TextDetector`]
//! trait standing for the external OCR capability, a Tesseract-backed
//! implementation of it, and the [`extract_text`] adapter that callers invoke
//! with a dependency-injected detector.
//!
//! The adapter performs no validation, retry, or cleanup of its own; it
//! returns the detector's transcription verbatim (empty string when no text
//! was detected) and lets any provider failure propagate.

use crate::ocr_config::{OcrConfig, FORMAT_DETECTION_BUFFER_SIZE, MIN_FORMAT_BYTES};
use crate::ocr_errors::OcrError;
use leptess::LepTess;
use log::info;

/// The external OCR capability: turns encoded image bytes into text
///
/// Implementations own any provider-specific validation and fail with a
/// provider error when the input is unsupported. A successful detection of a
/// textless image is `Ok` with an empty string, not an error.
pub trait TextDetector {
    /// Detect and transcribe all text in the given encoded image
    fn detect_text(&self, image: &[u8]) -> Result<String, OcrError>;
}

/// Tesseract-backed [`TextDetector`]
///
/// Creates a fresh engine instance per call; instances hold mutable engine
/// state, so sharing one across calls would force synchronization the
/// capability does not need.
pub struct TesseractDetector {
    config: OcrConfig,
}

impl TesseractDetector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self {
            config: OcrConfig::default(),
        }
    }

    /// Create a detector with a custom configuration
    pub fn with_config(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl Default for TesseractDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDetector for TesseractDetector {
    fn detect_text(&self, image: &[u8]) -> Result<String, OcrError> {
        validate_image(image, &self.config)?;

        let mut tess = LepTess::new(None, &self.config.languages)
            .map_err(|e| OcrError::Initialization(format!("Failed to initialize Tesseract OCR: {e}")))?;

        tess.set_image_from_mem(image)
            .map_err(|e| OcrError::ImageLoad(format!("Failed to load image for OCR: {e}")))?;

        let text = tess
            .get_utf8_text()
            .map_err(|e| OcrError::Extraction(format!("Failed to extract text from image: {e}")))?;

        Ok(text)
    }
}

/// Extract the full-text transcription from an image using the given detector
///
/// Returns the detector's top transcription unmodified; callers trim
/// whitespace as needed. Returns an empty string when the detector reports no
/// text. Detector failures propagate unchanged; no retry is performed here.
///
/// # Arguments
///
/// * `detector` - The OCR capability to invoke
/// * `image` - Raw encoded image bytes in any format the detector supports
pub fn extract_text(detector: &dyn TextDetector, image: &[u8]) -> Result<String, OcrError> {
    info!("Starting OCR text extraction from {} byte image", image.len());

    let text = detector.detect_text(image)?;

    info!("OCR extraction completed. Extracted {} characters of text", text.len());

    Ok(text)
}

/// Check whether the given image bytes are in a format supported for OCR
///
/// Sniffs the leading bytes with `image::guess_format`. Tesseract supports
/// PNG, JPEG/JPG, BMP, and TIFF.
pub fn is_supported_image_format(image: &[u8]) -> bool {
    if image.len() < MIN_FORMAT_BYTES {
        info!(
            "Not enough bytes to determine image format ({} bytes, need at least {})",
            image.len(),
            MIN_FORMAT_BYTES
        );
        return false;
    }

    let sniff_len = image.len().min(FORMAT_DETECTION_BUFFER_SIZE);
    match image::guess_format(&image[..sniff_len]) {
        Ok(format) => {
            let supported = matches!(
                format,
                image::ImageFormat::Png
                    | image::ImageFormat::Jpeg
                    | image::ImageFormat::Bmp
                    | image::ImageFormat::Tiff
            );

            if supported {
                info!("Detected supported image format: {:?}", format);
            } else {
                info!("Detected unsupported image format: {:?}", format);
            }

            supported
        }
        Err(e) => {
            info!("Could not determine image format: {}", e);
            false
        }
    }
}

/// Validate image bytes against the configured limits
///
/// Checks the payload is large enough to sniff, within the size limit, and in
/// a supported format. Used by detector implementations before handing bytes
/// to the engine.
pub fn validate_image(image: &[u8], config: &OcrConfig) -> Result<(), OcrError> {
    if image.len() < config.min_format_bytes {
        return Err(OcrError::Validation(format!(
            "Image payload too small: {} bytes (need at least {})",
            image.len(),
            config.min_format_bytes
        )));
    }

    if image.len() as u64 > config.max_image_bytes {
        return Err(OcrError::Validation(format!(
            "Image payload too large: {} bytes (limit {})",
            image.len(),
            config.max_image_bytes
        )));
    }

    if !is_supported_image_format(image) {
        return Err(OcrError::Validation(
            "Unsupported image format; expected PNG, JPEG, BMP, or TIFF".to_string(),
        ));
    }

    Ok(())
}
