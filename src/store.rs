//! # Product Document Store
//!
//! This module owns the storage boundary for product records: schema
//! initialization, appending new documents, and retrieving them by id or by
//! product-name prefix.
//!
//! Prefix search is a lexicographic range query (`product_name >= prefix`
//! and `product_name <= prefix + U+F8FF`), the standard way to express
//! "starts with" over a sorted index. SQLite compares TEXT byte-wise over
//! UTF-8, which orders by code point, so the bounds behave the same as they
//! do in a document database.

use crate::product_model::{ProductDocument, ProductRecord};
use anyhow::{Context, Result};
use log::info;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Upper-bound sentinel for lexicographic prefix range queries
const PREFIX_RANGE_SENTINEL: char = '\u{f8ff}';

/// Initialize the product document schema
pub async fn init_product_schema(pool: &SqlitePool) -> Result<()> {
    info!("Initializing product schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name TEXT NOT NULL,
            brand_name TEXT NOT NULL DEFAULT '',
            ingredients TEXT NOT NULL DEFAULT '',
            feeding_guidelines TEXT NOT NULL DEFAULT '',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .context("Failed to create products table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name ON products (product_name)")
        .execute(pool)
        .await
        .context("Failed to create product name index")?;

    info!("Product schema initialized successfully");
    Ok(())
}

/// Append a new product document and return its identifier
///
/// Validates the record at the boundary: the product name must be non-empty.
pub async fn save_product(pool: &SqlitePool, record: &ProductRecord) -> Result<i64> {
    if record.product_name.trim().is_empty() {
        anyhow::bail!("productName is required");
    }

    info!("Saving product: {}", record.product_name);

    let result = sqlx::query(
        "INSERT INTO products (product_name, brand_name, ingredients, feeding_guidelines)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&record.product_name)
    .bind(&record.brand_name)
    .bind(&record.ingredients)
    .bind(&record.feeding_guidelines)
    .execute(pool)
    .await
    .context("Failed to insert product")?;

    let product_id = result.last_insert_rowid();
    info!("Product saved with ID: {}", product_id);

    Ok(product_id)
}

/// Search for products whose name starts with the given prefix
///
/// Runs the lexicographic range query and returns matches ordered by product
/// name, document identifiers attached. An empty prefix matches every
/// document.
pub async fn search_products(pool: &SqlitePool, prefix: &str) -> Result<Vec<ProductDocument>> {
    info!("Searching products with name prefix: '{}'", prefix);

    let upper_bound = format!("{prefix}{PREFIX_RANGE_SENTINEL}");

    let rows = sqlx::query(
        "SELECT id, product_name, brand_name, ingredients, feeding_guidelines, created_at
         FROM products
         WHERE product_name >= ?1 AND product_name <= ?2
         ORDER BY product_name",
    )
    .bind(prefix)
    .bind(&upper_bound)
    .fetch_all(pool)
    .await
    .context("Failed to run product prefix query")?;

    let mut products = Vec::with_capacity(rows.len());
    for row in &rows {
        products.push(document_from_row(row)?);
    }

    info!("Found {} products for prefix '{}'", products.len(), prefix);
    Ok(products)
}

/// Read a single product document by identifier
pub async fn read_product(pool: &SqlitePool, product_id: i64) -> Result<Option<ProductDocument>> {
    info!("Reading product with ID: {}", product_id);

    let row = sqlx::query(
        "SELECT id, product_name, brand_name, ingredients, feeding_guidelines, created_at
         FROM products WHERE id = ?1",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await
    .context("Failed to read product")?;

    match row {
        Some(row) => Ok(Some(document_from_row(&row)?)),
        None => {
            info!("No product found with ID: {}", product_id);
            Ok(None)
        }
    }
}

fn document_from_row(row: &SqliteRow) -> Result<ProductDocument> {
    Ok(ProductDocument {
        id: row.try_get("id").context("Failed to read product id")?,
        record: ProductRecord {
            product_name: row
                .try_get("product_name")
                .context("Failed to read product name")?,
            brand_name: row
                .try_get("brand_name")
                .context("Failed to read brand name")?,
            ingredients: row
                .try_get("ingredients")
                .context("Failed to read ingredients")?,
            feeding_guidelines: row
                .try_get("feeding_guidelines")
                .context("Failed to read feeding guidelines")?,
        },
        created_at: row
            .try_get("created_at")
            .context("Failed to read creation timestamp")?,
    })
}
