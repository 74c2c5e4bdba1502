//! Bulk-creates synthetic products with round-robin image paths.

use eyre::Result;
use rentreturn_seeder::api::{self, ProductsApi};
use rentreturn_seeder::product::ImageCycle;
use tracing::info;

const API_BASE: &str = "http://localhost:8080";
const NUM_PRODUCTS_PER_CATEGORY: usize = 30;
/// Highest image index the asset folder is expected to hold.
const NUM_IMAGES: u32 = 200;

#[tokio::main]
async fn main() -> Result<()> {
    rentreturn_seeder::init_logging();

    let products = ProductsApi::new(API_BASE)?;
    let mut images = ImageCycle::new(NUM_IMAGES);
    let summary = api::seed(&products, &mut images, NUM_PRODUCTS_PER_CATEGORY).await;

    info!(
        "total products created: {} of {} attempted",
        summary.created, summary.attempted
    );
    Ok(())
}
