//! # Label Scan Pipeline
//!
//! This module composes the OCR adapter, the feeding-guideline parser, and
//! the product store into the end-to-end label scan: image bytes in, a
//! product record candidate (and its identifier, once persisted) out.

use crate::guideline_model::GuidelineRow;
use crate::guideline_parser::parse_feeding_guidelines;
use crate::ocr::{extract_text, TextDetector};
use crate::product_model::ProductRecord;
use crate::store::save_product;
use anyhow::{Context, Result};
use log::info;
use sqlx::sqlite::SqlitePool;

/// The result of scanning one label image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelScan {
    /// The raw OCR transcription, untrimmed
    pub raw_text: String,
    /// The guideline rows parsed out of the transcription
    pub guidelines: Vec<GuidelineRow>,
    /// The storage candidate built from the scan
    pub product: ProductRecord,
}

/// Run OCR and guideline parsing over a label image
///
/// The candidate's product name is the trimmed full transcription (callers
/// typically crop the image to the field of interest before scanning), and
/// its feeding-guidelines field holds the JSON-encoded row sequence.
pub fn scan_label(detector: &dyn TextDetector, image: &[u8]) -> Result<LabelScan> {
    let raw_text = extract_text(detector, image)?;
    let guidelines = parse_feeding_guidelines(&raw_text);

    info!(
        "Scanned label: {} characters of text, {} guideline rows",
        raw_text.len(),
        guidelines.len()
    );

    let encoded_guidelines =
        serde_json::to_string(&guidelines).context("Failed to encode guideline rows")?;
    let product = ProductRecord::new(raw_text.trim()).with_feeding_guidelines(encoded_guidelines);

    Ok(LabelScan {
        raw_text,
        guidelines,
        product,
    })
}

/// Scan a label image and persist the resulting product candidate
///
/// Returns the stored document identifier alongside the scan.
pub async fn process_label_scan(
    pool: &SqlitePool,
    detector: &dyn TextDetector,
    image: &[u8],
) -> Result<(i64, LabelScan)> {
    let scan = scan_label(detector, image)?;

    let product_id = save_product(pool, &scan.product).await?;
    info!("Stored scanned product with ID: {}", product_id);

    Ok((product_id, scan))
}

/// Render guideline rows for terminal display
pub fn format_guidelines_for_display(rows: &[GuidelineRow]) -> String {
    if rows.is_empty() {
        return "No feeding guidelines detected.".to_string();
    }

    let mut output = String::from("Feeding guidelines:\n");
    for (i, row) in rows.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, row));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr_errors::OcrError;
    use crate::store::{init_product_schema, read_product};
    use sqlx::sqlite::SqlitePoolOptions;

    /// Canned detector standing in for the OCR capability
    struct FixedDetector {
        text: String,
    }

    impl TextDetector for FixedDetector {
        fn detect_text(&self, _image: &[u8]) -> Result<String, OcrError> {
            Ok(self.text.clone())
        }
    }

    struct FailingDetector;

    impl TextDetector for FailingDetector {
        fn detect_text(&self, _image: &[u8]) -> Result<String, OcrError> {
            Err(OcrError::Extraction("engine unavailable".to_string()))
        }
    }

    #[test]
    fn test_scan_label_builds_candidate() {
        let detector = FixedDetector {
            text: "5kg 200g daily\n10kg 350g\n".to_string(),
        };

        let scan = scan_label(&detector, &[0u8; 8]).unwrap();

        assert_eq!(scan.raw_text, "5kg 200g daily\n10kg 350g\n");
        assert_eq!(scan.guidelines.len(), 2);
        assert_eq!(scan.product.product_name, "5kg 200g daily\n10kg 350g");

        let rows: Vec<GuidelineRow> =
            serde_json::from_str(&scan.product.feeding_guidelines).unwrap();
        assert_eq!(rows, scan.guidelines);
    }

    #[test]
    fn test_scan_label_empty_transcription() {
        let detector = FixedDetector {
            text: String::new(),
        };

        let scan = scan_label(&detector, &[0u8; 8]).unwrap();

        assert_eq!(scan.raw_text, "");
        assert!(scan.guidelines.is_empty());
        assert_eq!(scan.product.product_name, "");
        assert_eq!(scan.product.feeding_guidelines, "[]");
    }

    #[test]
    fn test_scan_label_propagates_detector_failure() {
        let result = scan_label(&FailingDetector, &[0u8; 8]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_process_label_scan_persists_candidate() -> Result<()> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        init_product_schema(&pool).await?;

        let detector = FixedDetector {
            text: "Acme Adult Dog Food".to_string(),
        };

        let (product_id, scan) = process_label_scan(&pool, &detector, &[0u8; 8]).await?;

        let doc = read_product(&pool, product_id).await?.unwrap();
        assert_eq!(doc.record, scan.product);
        assert_eq!(doc.record.product_name, "Acme Adult Dog Food");

        Ok(())
    }

    #[tokio::test]
    async fn test_process_label_scan_rejects_textless_image() -> Result<()> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        init_product_schema(&pool).await?;

        let detector = FixedDetector {
            text: "   \n".to_string(),
        };

        // A blank transcription yields an empty product name, which the
        // store boundary refuses.
        assert!(process_label_scan(&pool, &detector, &[0u8; 8]).await.is_err());

        Ok(())
    }

    #[test]
    fn test_format_guidelines_for_display() {
        let rows = vec![
            GuidelineRow::new("5kg", "200g").with_notes("daily"),
            GuidelineRow::new("10kg", "350g"),
        ];

        let output = format_guidelines_for_display(&rows);

        assert!(output.contains("1. 5kg: 200g (daily)"));
        assert!(output.contains("2. 10kg: 350g"));
    }

    #[test]
    fn test_format_guidelines_empty() {
        assert_eq!(
            format_guidelines_for_display(&[]),
            "No feeding guidelines detected."
        );
    }
}
