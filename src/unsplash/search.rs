use eyre::{bail, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use url::Url;

const SEARCH_URL: &str = "https://api.unsplash.com/search/photos";

#[derive(Debug, serde::Deserialize)]
/// One page of `GET /search/photos` results.
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchPhoto>,
}

#[derive(Debug, serde::Deserialize)]
/// A single photo in the search results.
pub struct SearchPhoto {
    pub urls: PhotoUrls,
}

#[derive(Debug, serde::Deserialize)]
pub struct PhotoUrls {
    /// Regular-resolution rendition, fetchable without authentication.
    pub regular: String,
}

/// Client for the Unsplash search API.
pub struct Unsplash {
    client: Client,
    search_url: Url,
}

impl Unsplash {
    pub fn new(access_key: &str) -> Result<Self> {
        Self::with_search_url(access_key, Url::parse(SEARCH_URL)?)
    }

    pub(crate) fn with_search_url(access_key: &str, search_url: Url) -> Result<Self> {
        let client = Client::builder()
            .default_headers(build_headers(access_key)?)
            .build()?;
        Ok(Unsplash { client, search_url })
    }

    /// Fetches one page of landscape-oriented results for `query`.
    ///
    /// Anything other than HTTP 200 becomes an error carrying the response
    /// body, which ends that category's pagination loop.
    pub async fn search_page(
        &self,
        query: &str,
        per_page: usize,
        page: u32,
    ) -> Result<SearchResponse> {
        let url = Url::parse_with_params(
            self.search_url.as_str(),
            &[
                ("query", query.to_owned()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("orientation", "landscape".to_owned()),
            ],
        )?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            bail!("search returned {status}: {body}");
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Headers the Unsplash API requires on every search request.
fn build_headers(access_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("Accept-Version", HeaderValue::from_static("v1"));
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Client-ID {access_key}"))?,
    );
    Ok(headers)
}
