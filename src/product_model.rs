//! # Product Record Data Model
//!
//! This module defines the boundary types exchanged with the product document
//! store. `ProductRecord` is a candidate for storage; `ProductDocument` is a
//! stored record with its document identifier and timestamp attached.
//!
//! Field names serialize in camelCase (`productName`, `brandName`, ...) to
//! match the document-store wire format. Only the product name is required;
//! every other field defaults to an empty string.
//!
//! ## Usage
//!
//! ```rust
//! use feedlabel::product_model::ProductRecord;
//!
//! let record = ProductRecord::new("Acme Adult Dog Food 2kg")
//!     .with_brand_name("Acme")
//!     .with_ingredients("chicken, rice, beet pulp");
//!
//! assert_eq!(record.brand_name, "Acme");
//! assert_eq!(record.feeding_guidelines, "");
//! ```

use serde::{Deserialize, Serialize};

/// A product record candidate as sent to (or read from) the document store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// The product name; required and must be non-empty at the store boundary
    pub product_name: String,

    /// The brand name; empty when unknown
    #[serde(default)]
    pub brand_name: String,

    /// The ingredient declaration as printed on the label; empty when unknown
    #[serde(default)]
    pub ingredients: String,

    /// The feeding-guideline table, JSON-encoded row sequence; empty when unknown
    #[serde(default)]
    pub feeding_guidelines: String,
}

impl ProductRecord {
    /// Create a record with only the product name set
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            brand_name: String::new(),
            ingredients: String::new(),
            feeding_guidelines: String::new(),
        }
    }

    /// Set the brand name
    pub fn with_brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = brand_name.into();
        self
    }

    /// Set the ingredient declaration
    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = ingredients.into();
        self
    }

    /// Set the feeding-guideline field
    pub fn with_feeding_guidelines(mut self, feeding_guidelines: impl Into<String>) -> Self {
        self.feeding_guidelines = feeding_guidelines.into();
        self
    }
}

/// A stored product with its document identifier attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    /// Store-assigned document identifier
    pub id: i64,

    /// The record fields, flattened into the document
    #[serde(flatten)]
    pub record: ProductRecord,

    /// Store-assigned creation timestamp
    pub created_at: String,
}
