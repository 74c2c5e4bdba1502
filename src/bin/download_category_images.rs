//! Downloads stock photos from Unsplash into the per-category asset
//! folders consumed by the product seeders.

use std::path::Path;
use std::time::Duration;

use eyre::Result;
use rentreturn_seeder::catalog::Category;
use rentreturn_seeder::unsplash::{self, Unsplash};
use tracing::info;

const IMAGES_PER_CATEGORY: usize = 50;
const OUTPUT_BASE: &str = "../frontend/public/assets/products";
/// Pause between page requests to stay inside Unsplash rate limits.
const PAGE_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    rentreturn_seeder::init_logging();

    let access_key = unsplash::access_key_from_env()?;
    let api = Unsplash::new(&access_key)?;
    let out_base = Path::new(OUTPUT_BASE);

    for category in Category::ALL {
        info!("downloading images for {}...", category.slug());
        let saved = unsplash::download_category(
            &api,
            category,
            out_base,
            IMAGES_PER_CATEGORY,
            PAGE_DELAY,
        )
        .await?;
        info!("saved {saved} images for {}", category.slug());
    }
    info!("all downloads complete");
    Ok(())
}
