//! Bulk-creates synthetic products, picking each image at random from the
//! category's downloaded asset folder.

use std::path::Path;

use eyre::Result;
use rentreturn_seeder::api::{self, ProductsApi};
use rentreturn_seeder::product::FolderPool;
use tracing::info;

const API_BASE: &str = "http://localhost:8080";
const NUM_PRODUCTS_PER_CATEGORY: usize = 30;
/// Where `download_category_images` puts its output.
const ASSET_BASE: &str = "../frontend/public/assets/products";

#[tokio::main]
async fn main() -> Result<()> {
    rentreturn_seeder::init_logging();

    let products = ProductsApi::new(API_BASE)?;
    let mut images = FolderPool::scan(Path::new(ASSET_BASE));
    let summary = api::seed(&products, &mut images, NUM_PRODUCTS_PER_CATEGORY).await;

    info!(
        "total products created: {} of {} attempted",
        summary.created, summary.attempted
    );
    Ok(())
}
