//! # Seed Data Generator
//!
//! Populates the database with demo products and options for development.
//!
//! ## Usage
//! ```bash
//! # Generate 20 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! Each product gets a model name, a price between 199.99 and 1499.99, a
//! delivery price from a small fixed set, and two or three colour options.

use std::env;
use std::time::Instant;

use anyhow::{bail, Context};
use catalog_core::validation::{validate_option, validate_product};
use catalog_core::{Product, ProductOption};
use catalog_db::{migrations, Database, DbConfig};
use rust_decimal::Decimal;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Brands and models for realistic names
const MODELS: &[(&str, &[&str])] = &[
    ("Samsung", &["Galaxy S7", "Galaxy S8", "Galaxy Note 8", "Galaxy A5"]),
    ("Apple", &["iPhone 6S", "iPhone 7", "iPhone 8 Plus", "iPhone X"]),
    ("Google", &["Pixel", "Pixel 2", "Pixel 2 XL"]),
    ("Nokia", &["6.1", "7 Plus", "8 Sirocco"]),
    ("Huawei", &["P20", "P20 Pro", "Mate 10"]),
];

/// Option names, three consecutive entries per product
const COLOURS: &[&str] = &[
    "White",
    "Black",
    "Rose Gold",
    "Silver",
    "Midnight Blue",
    "Coral",
];

/// Delivery prices in cents
const DELIVERY_CENTS: &[i64] = &[0, 999, 1599, 1699];

const DEFAULT_COUNT: usize = 20;
const DEFAULT_DB: &str = "./catalog.db";

struct Args {
    count: usize,
    db_path: String,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let args: Vec<String> = env::args().collect();

    let mut parsed = Args {
        count: DEFAULT_COUNT,
        db_path: DEFAULT_DB.to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let raw = args.get(i + 1).context("--count needs a value")?;
                parsed.count = raw
                    .parse()
                    .with_context(|| format!("invalid --count '{}'", raw))?;
                i += 1;
            }
            "--db" | "-d" => {
                parsed.db_path = args.get(i + 1).context("--db needs a value")?.clone();
                i += 1;
            }
            "--help" | "-h" => {
                println!("Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {})", DEFAULT_COUNT);
                println!("  -d, --db <PATH>    Database file path (default: {})", DEFAULT_DB);
                println!("  -h, --help         Show this help message");
                return Ok(None);
            }
            other => bail!("unknown argument '{}'", other),
        }
        i += 1;
    }

    Ok(Some(parsed))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    println!("Catalog Seed Data Generator");
    println!("===========================");
    println!("Database: {}", args.db_path);
    println!("Products: {}", args.count);
    println!();

    let db = Database::new(DbConfig::new(&args.db_path))
        .await
        .context("failed to open database")?;

    let (total, applied) = migrations::migration_status(db.pool()).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let products = db.products();
    let options = db.options();
    let start = Instant::now();
    let mut generated = 0;
    let mut generated_options = 0;

    for seed in 0..args.count {
        let product = generate_product(seed);
        validate_product(&product)?;

        let created = match products.insert(&product).await {
            Ok(created) => created,
            Err(e) => {
                warn!(name = %product.name, error = %e, "Failed to insert product");
                continue;
            }
        };
        generated += 1;

        for option in generate_options(created.id, seed) {
            validate_option(&option)?;
            if let Err(e) = options.insert(&option).await {
                warn!(name = %option.name, error = %e, "Failed to insert option");
                continue;
            }
            generated_options += 1;
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Generated {} products and {} options in {:?}",
        generated, generated_options, elapsed
    );

    let sample = products.search_by_name("galaxy").await?;
    println!("  Search 'galaxy': {} results", sample.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product. Names repeat with a series suffix once the
/// model list is exhausted.
fn generate_product(seed: usize) -> Product {
    let (brand, models) = MODELS[seed % MODELS.len()];
    let model = models[(seed / MODELS.len()) % models.len()];
    let series = seed / MODELS.iter().map(|(_, m)| m.len()).sum::<usize>();

    let name = if series == 0 {
        format!("{} {}", brand, model)
    } else {
        format!("{} {} ({})", brand, model, series + 1)
    };

    // 199.99 .. 1499.99
    let price_cents = 19_999 + ((seed as i64 * 7_919) % 130_000);
    let delivery_cents = DELIVERY_CENTS[seed % DELIVERY_CENTS.len()];

    Product::new(
        name,
        Some(format!("{} smartphone, model {}", brand, model)),
        Decimal::new(price_cents, 2),
        Decimal::new(delivery_cents, 2),
    )
}

/// Two or three colour options for `product_id`.
fn generate_options(product_id: Uuid, seed: usize) -> Vec<ProductOption> {
    let count = 2 + seed % 2;

    (0..count)
        .map(|offset| {
            let colour = COLOURS[(seed + offset) % COLOURS.len()];
            ProductOption::new(colour, None).with_ids(product_id, Uuid::new_v4())
        })
        .collect()
}
