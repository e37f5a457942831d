//! # OCR Tests Module
//!
//! Test suite for the OCR boundary: configuration defaults, image format
//! validation, and error types. Engine-backed extraction is exercised through
//! canned detectors so the suite runs without installed language data.

#[cfg(test)]
mod tests {
    use feedlabel::ocr::{extract_text, is_supported_image_format, validate_image, TextDetector};
    use feedlabel::ocr_config::{OcrConfig, DEFAULT_LANGUAGES, MIN_FORMAT_BYTES};
    use feedlabel::ocr_errors::OcrError;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0x00; 24]);
        bytes
    }

    /// Test OCR configuration defaults
    #[test]
    fn test_ocr_config_defaults() {
        let config = OcrConfig::default();

        assert_eq!(config.languages, DEFAULT_LANGUAGES);
        assert_eq!(config.format_buffer_size, 32);
        assert_eq!(config.min_format_bytes, MIN_FORMAT_BYTES);
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_ocr_config_with_languages() {
        let config = OcrConfig::with_languages("eng+fra");

        assert_eq!(config.languages, "eng+fra");
        assert_eq!(config.max_image_bytes, OcrConfig::default().max_image_bytes);
    }

    /// Test format sniffing over magic bytes
    #[test]
    fn test_format_detection() {
        assert!(is_supported_image_format(&png_bytes()));

        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        jpeg.extend_from_slice(&[0x00; 24]);
        assert!(is_supported_image_format(&jpeg));

        let mut gif = b"GIF89a".to_vec();
        gif.extend_from_slice(&[0x00; 26]);
        assert!(!is_supported_image_format(&gif));

        assert!(!is_supported_image_format(b"short"));
        assert!(!is_supported_image_format(&[]));
    }

    #[test]
    fn test_validate_image_limits() {
        let config = OcrConfig::default();

        assert!(validate_image(&png_bytes(), &config).is_ok());
        assert!(validate_image(&[0x89], &config).is_err());
        assert!(validate_image(&[0x00; 64], &config).is_err());

        let tiny_limit = OcrConfig {
            max_image_bytes: 8,
            ..OcrConfig::default()
        };
        assert!(validate_image(&png_bytes(), &tiny_limit).is_err());
    }

    /// Test error display formatting
    #[test]
    fn test_ocr_error_display() {
        let cases = [
            (
                OcrError::Validation("bad input".to_string()),
                "Validation error: bad input",
            ),
            (
                OcrError::Initialization("no tessdata".to_string()),
                "Initialization error: no tessdata",
            ),
            (
                OcrError::ImageLoad("corrupt image".to_string()),
                "Image load error: corrupt image",
            ),
            (
                OcrError::Extraction("engine failure".to_string()),
                "Extraction error: engine failure",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_ocr_error_from_anyhow() {
        let err: OcrError = anyhow::anyhow!("provider exploded").into();
        assert!(matches!(err, OcrError::Extraction(_)));
        assert!(err.to_string().contains("provider exploded"));
    }

    /// Canned detector returning a fixed transcription
    struct FixedDetector(&'static str);

    impl TextDetector for FixedDetector {
        fn detect_text(&self, _image: &[u8]) -> Result<String, OcrError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingDetector;

    impl TextDetector for FailingDetector {
        fn detect_text(&self, _image: &[u8]) -> Result<String, OcrError> {
            Err(OcrError::Extraction("transport failure".to_string()))
        }
    }

    #[test]
    fn test_extract_text_passes_transcription_through_unmodified() {
        let text = extract_text(&FixedDetector("  5kg 200g daily \n"), &png_bytes()).unwrap();

        // No trimming or cleanup at the adapter layer.
        assert_eq!(text, "  5kg 200g daily \n");
    }

    #[test]
    fn test_extract_text_empty_when_no_text_detected() {
        let text = extract_text(&FixedDetector(""), &png_bytes()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_text_propagates_detector_errors() {
        let err = extract_text(&FailingDetector, &png_bytes()).unwrap_err();
        assert!(matches!(err, OcrError::Extraction(_)));
    }
}
