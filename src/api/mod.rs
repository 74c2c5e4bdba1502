//! Client for the RentReturn products endpoint and the submission loop
//! shared by both seeding binaries.

use eyre::Result;
use reqwest::{Client, Response};
use tracing::{error, info, warn};
use url::Url;

use crate::catalog::Category;
use crate::product::{ImageSource, NewProduct};

/// Thin client for `POST <base>/api/products`.
pub struct ProductsApi {
    client: Client,
    endpoint: Url,
}

/// Tally of one seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Submissions issued, successful or not.
    pub attempted: usize,
    /// Submissions that came back with a 2xx status.
    pub created: usize,
}

impl ProductsApi {
    /// `base` is the backend root, e.g. `http://localhost:8080`.
    pub fn new(base: &str) -> Result<Self> {
        let endpoint = Url::parse(base)?.join("api/products")?;
        Ok(ProductsApi {
            client: Client::new(),
            endpoint,
        })
    }

    async fn create(&self, product: &NewProduct) -> Result<Response> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(product)
            .send()
            .await?;
        Ok(response)
    }
}

/// Synthesizes and submits `per_category` products for every category.
///
/// Any non-2xx status or transport failure is logged and the loop moves on
/// to the next product. A category whose image source cannot serve it gets
/// zero submissions.
pub async fn seed(
    api: &ProductsApi,
    images: &mut impl ImageSource,
    per_category: usize,
) -> SeedSummary {
    let mut summary = SeedSummary::default();
    for category in Category::ALL {
        for _ in 0..per_category {
            let Some(image_url) = images.next_image(category) else {
                break;
            };
            let product = NewProduct::synthesize(category, image_url);
            summary.attempted += 1;
            match api.create(&product).await {
                Ok(response) if response.status().is_success() => {
                    info!("created {} in {}", product.name, category.label());
                    summary.created += 1;
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    warn!("failed to create {}: {status} {body}", product.name);
                }
                Err(err) => error!("error creating {}: {err}", product.name),
            }
        }
    }
    summary
}
