//! # OCR Error Types Module
//!
//! This module defines the error type for the OCR boundary. Provider and
//! transport failures surface through these variants and propagate to the
//! caller unchanged; the text-extraction adapter neither retries nor
//! classifies them further.

/// Custom error types for OCR operations
#[derive(Debug, Clone)]
pub enum OcrError {
    /// Image validation errors (unsupported format, undersized or oversized input)
    Validation(String),
    /// OCR engine initialization errors
    Initialization(String),
    /// Image loading errors
    ImageLoad(String),
    /// Text extraction errors
    Extraction(String),
}

impl std::fmt::Display for OcrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrError::Validation(msg) => write!(f, "Validation error: {msg}"),
            OcrError::Initialization(msg) => write!(f, "Initialization error: {msg}"),
            OcrError::ImageLoad(msg) => write!(f, "Image load error: {msg}"),
            OcrError::Extraction(msg) => write!(f, "Extraction error: {msg}"),
        }
    }
}

impl std::error::Error for OcrError {}

impl From<anyhow::Error> for OcrError {
    fn from(err: anyhow::Error) -> Self {
        OcrError::Extraction(err.to_string())
    }
}
