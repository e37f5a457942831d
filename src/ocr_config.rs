//! # OCR Configuration Module
//!
//! This module defines configuration for OCR processing: the recognition
//! languages and the limits applied when validating image bytes before they
//! reach the engine.

// Constants for OCR configuration
pub const DEFAULT_LANGUAGES: &str = "eng";
pub const FORMAT_DETECTION_BUFFER_SIZE: usize = 32;
pub const MIN_FORMAT_BYTES: usize = 8;
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024; // 10MB limit for image payloads

/// Configuration structure for OCR processing
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// OCR language codes (e.g., "eng", "eng+fra", "deu")
    pub languages: String,
    /// Number of leading bytes inspected for format detection
    pub format_buffer_size: usize,
    /// Minimum bytes required for format detection
    pub min_format_bytes: usize,
    /// Maximum allowed image payload size in bytes
    pub max_image_bytes: u64,
}

impl OcrConfig {
    /// Build a config with the given languages and default limits
    pub fn with_languages(languages: impl Into<String>) -> Self {
        Self {
            languages: languages.into(),
            ..Self::default()
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.to_string(),
            format_buffer_size: FORMAT_DETECTION_BUFFER_SIZE,
            min_format_bytes: MIN_FORMAT_BYTES,
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }
}
