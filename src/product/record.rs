use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Category;

/// Bounds for the synthesized daily rental price.
const PRICE_RANGE: (f64, f64) = (50.0, 2000.0);
/// Bounds for the synthesized stock count, inclusive.
const STOCK_RANGE: (u32, u32) = (1, 20);
/// Identifiers stamped into `createdBy`/`updatedBy`.
const AUTHORS: [&str; 4] = ["admin", "system", "demo_user", "testuser"];

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// A product record as the backend's create endpoint expects it.
///
/// Wire payload only. No id is assigned client-side; the backend is the
/// system of record.
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_per_day: f64,
    pub stock: u32,
    pub category: &'static str,
    pub image_url: String,
    pub available: bool,
    pub deleted: bool,
    pub created_by: &'static str,
    pub updated_by: &'static str,
}

impl NewProduct {
    /// Synthesizes a record for `category` from its canned name pool and
    /// random price/stock, pointing at `image_url`.
    pub fn synthesize(category: Category, image_url: String) -> Self {
        let mut rng = rand::thread_rng();
        let base_name = category
            .name_pool()
            .choose(&mut rng)
            .copied()
            .unwrap_or(category.label());
        let name = format!("{base_name} {}", rng.gen_range(1..=1000));
        let description = format!(
            "Rent a high-quality {name} for your needs in the {} category. \
             Well-maintained, reliable, and available at an affordable daily rate!",
            category.label().to_lowercase()
        );
        let price_per_day =
            (rng.gen_range(PRICE_RANGE.0..=PRICE_RANGE.1) * 100.0).round() / 100.0;
        let author = AUTHORS
            .choose(&mut rng)
            .copied()
            .unwrap_or(AUTHORS[0]);

        NewProduct {
            name,
            description,
            price_per_day,
            stock: rng.gen_range(STOCK_RANGE.0..=STOCK_RANGE.1),
            category: category.label(),
            image_url,
            available: true,
            deleted: false,
            created_by: author,
            updated_by: author,
        }
    }
}
