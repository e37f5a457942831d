//! # Feedlabel
//!
//! A thin backend core for scanning pet food product labels: extracts text
//! from label images using OCR, parses feeding-guideline tables out of the
//! raw text, and stores product records with prefix-searchable names.

pub mod guideline_model;
pub mod guideline_parser;
pub mod ocr;
pub mod ocr_config;
pub mod ocr_errors;
pub mod product_model;
pub mod scan;
pub mod store;
