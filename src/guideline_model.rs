//! # Feeding Guideline Data Model
//!
//! This module defines the data structure for one row of a feeding-guideline
//! table as extracted from label text. A row pairs a weight band with a daily
//! amount and carries any trailing text as free-form notes.
//!
//! ## Usage
//!
//! ```rust
//! use feedlabel::guideline_model::GuidelineRow;
//!
//! let row = GuidelineRow::new("5kg", "200g").with_notes("split over two meals");
//!
//! assert_eq!(row.weight, "5kg");
//! assert_eq!(row.amount, "200g");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One structured row of a feeding-guideline table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineRow {
    /// The weight band the row applies to (e.g., "5kg", "5-10kg")
    pub weight: String,

    /// The recommended amount for that weight (e.g., "200g", "1/2 cup")
    pub amount: String,

    /// Free-form trailing text (e.g., "daily", "split over two meals"); empty if absent
    #[serde(default)]
    pub notes: String,
}

impl GuidelineRow {
    /// Create a row with empty notes
    pub fn new(weight: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            amount: amount.into(),
            notes: String::new(),
        }
    }

    /// Attach notes to the row
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Whether the row carries any notes
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Rebuild the source-line form of the row (weight, amount, notes
    /// separated by single spaces)
    pub fn reconstruct(&self) -> String {
        if self.notes.is_empty() {
            format!("{} {}", self.weight, self.amount)
        } else {
            format!("{} {} {}", self.weight, self.amount, self.notes)
        }
    }
}

impl fmt::Display for GuidelineRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notes.is_empty() {
            write!(f, "{}: {}", self.weight, self.amount)
        } else {
            write!(f, "{}: {} ({})", self.weight, self.amount, self.notes)
        }
    }
}
