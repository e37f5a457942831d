use anyhow::Result;
use feedlabel::ocr::TesseractDetector;
use feedlabel::ocr_config::{OcrConfig, DEFAULT_LANGUAGES};
use feedlabel::product_model::ProductRecord;
use feedlabel::scan::{format_guidelines_for_display, process_label_scan};
use feedlabel::store::{init_product_schema, save_product, search_products};
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::env;
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting feedlabel");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get database path from environment
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    info!("Initializing database at: {}", database_url);

    // Create database pool and schema
    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    init_product_schema(&pool).await?;

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("scan") => {
            let image_path = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("usage: feedlabel scan <image-path>"))?;

            info!("Scanning label image: {}", image_path);
            let image = std::fs::read(image_path)?;

            let languages =
                env::var("OCR_LANGUAGES").unwrap_or_else(|_| DEFAULT_LANGUAGES.to_string());
            let detector = TesseractDetector::with_config(OcrConfig::with_languages(languages));

            let (product_id, scan) = process_label_scan(&pool, &detector, &image).await?;

            println!("Stored product {} ({})", product_id, scan.product.product_name);
            println!("{}", format_guidelines_for_display(&scan.guidelines));
        }
        Some("add") => {
            let product_name = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("usage: feedlabel add <product-name> [brand-name]"))?;

            let mut record = ProductRecord::new(product_name);
            if let Some(brand_name) = args.get(3) {
                record = record.with_brand_name(brand_name);
            }

            let product_id = save_product(&pool, &record).await?;
            println!("Stored product {}", product_id);
        }
        Some("search") => {
            let prefix = args.get(2).map(String::as_str).unwrap_or("");

            let products = search_products(&pool, prefix).await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        _ => {
            eprintln!("usage: feedlabel <scan|add|search> ...");
            eprintln!("  scan <image-path>             OCR a label image and store the product");
            eprintln!("  add <product-name> [brand]    store a product record");
            eprintln!("  search [prefix]               list products by name prefix");
        }
    }

    Ok(())
}
