//! # Feeding Guideline Parser
//!
//! This module parses raw OCR text into structured feeding-guideline rows.
//! It performs a best-effort line-oriented tokenization: each line that holds
//! at least two whitespace-delimited tokens becomes one row, everything else
//! is dropped silently.
//!
//! ## Features
//!
//! - One row per qualifying line, in input order
//! - Tokens are taken literally (no numeric validation or unit normalization)
//! - Blank and single-token lines contribute nothing, never an error
//!
//! ## Usage
//!
//! ```rust
//! use feedlabel::guideline_parser::parse_feeding_guidelines;
//!
//! let text = "5kg 200g daily\n10kg 350g";
//! let rows = parse_feeding_guidelines(text);
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].weight, "5kg");
//! assert_eq!(rows[0].amount, "200g");
//! assert_eq!(rows[0].notes, "daily");
//! ```

use crate::guideline_model::GuidelineRow;
use log::{debug, info};

/// Parse raw multi-line OCR text into feeding-guideline rows
///
/// Splits the input into lines, tokenizes each line on runs of whitespace,
/// and emits one row per line with at least two tokens: the first token
/// becomes the weight, the second the amount, and any remaining tokens are
/// space-joined into the notes. Lines yielding fewer than two tokens are
/// skipped without error. Row order matches the order of surviving lines.
///
/// # Arguments
///
/// * `text` - Arbitrary multi-line text, typically OCR output from a
///   feeding-guideline label; may be empty
///
/// # Examples
///
/// ```rust
/// use feedlabel::guideline_parser::parse_feeding_guidelines;
///
/// assert!(parse_feeding_guidelines("").is_empty());
/// assert_eq!(parse_feeding_guidelines("5kg 200g").len(), 1);
/// ```
pub fn parse_feeding_guidelines(text: &str) -> Vec<GuidelineRow> {
    let mut rows = Vec::new();

    for line in text.lines() {
        match parse_guideline_line(line) {
            Some(row) => rows.push(row),
            None => debug!("Skipping guideline line with fewer than two tokens: '{}'", line),
        }
    }

    info!(
        "Parsed {} guideline rows from {} lines of text",
        rows.len(),
        text.lines().count()
    );

    rows
}

/// Parse a single line into a guideline row
///
/// Returns `None` when the line holds fewer than two whitespace-delimited
/// tokens. The notes field is the space-joined remainder after the first two
/// tokens, empty when the line holds exactly two.
pub fn parse_guideline_line(line: &str) -> Option<GuidelineRow> {
    let mut tokens = line.split_whitespace();

    let weight = tokens.next()?;
    let amount = tokens.next()?;
    let notes = tokens.collect::<Vec<&str>>().join(" ");

    Some(GuidelineRow::new(weight, amount).with_notes(notes))
}
