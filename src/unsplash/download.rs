use std::fs;
use std::path::Path;
use std::time::Duration;

use eyre::Result;
use tracing::{error, info, warn};

use super::search::{SearchPhoto, Unsplash};
use crate::catalog::Category;

/// Unsplash caps `per_page` at 30.
const MAX_PER_PAGE: usize = 30;

/// Fetches up to `quota` photos for `category` into
/// `<out_base>/<slug>/<slug>-<n>.jpg`, paging through search results with
/// `page_delay` between successive page requests.
///
/// Pagination ends early when the API returns no further results or a
/// non-success status; images already saved stay on disk. A transport or
/// write failure on an individual image skips that image only.
pub async fn download_category(
    api: &Unsplash,
    category: Category,
    out_base: &Path,
    quota: usize,
    page_delay: Duration,
) -> Result<usize> {
    let dir = out_base.join(category.slug());
    fs::create_dir_all(&dir)?;
    // Image CDN links carry their own signature, no auth header needed.
    let image_client = reqwest::Client::new();

    let mut saved = 0;
    let mut page = 1;
    while saved < quota {
        let per_page = MAX_PER_PAGE.min(quota - saved);
        let results = match api.search_page(category.search_query(), per_page, page).await {
            Ok(response) => response.results,
            Err(err) => {
                error!("error fetching images for {}: {err}", category.slug());
                break;
            }
        };
        if results.is_empty() {
            info!("no more results for {} on page {page}", category.slug());
            break;
        }
        for photo in &results {
            let filename = format!("{}-{}.jpg", category.slug(), saved + 1);
            match save_photo(&image_client, photo, &dir.join(&filename)).await {
                Ok(()) => {
                    info!("downloaded {filename}");
                    saved += 1;
                    if saved >= quota {
                        break;
                    }
                }
                Err(err) => warn!("failed to download {}: {err}", photo.urls.regular),
            }
        }
        page += 1;
        tokio::time::sleep(page_delay).await;
    }
    Ok(saved)
}

async fn save_photo(
    client: &reqwest::Client,
    photo: &SearchPhoto,
    path: &Path,
) -> Result<()> {
    let response = client.get(&photo.urls.regular).send().await?;
    let bytes = response.bytes().await?;
    fs::write(path, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn page_body(server_uri: &str, count: usize) -> serde_json::Value {
        let results: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "urls": { "regular": format!("{server_uri}/photos/{i}.jpg") }
                })
            })
            .collect();
        serde_json::json!({ "results": results })
    }

    async fn api_for(server: &MockServer) -> Unsplash {
        let search_url = Url::parse(&format!("{}/search/photos", server.uri())).unwrap();
        Unsplash::with_search_url("test-key", search_url).unwrap()
    }

    #[tokio::test]
    async fn never_saves_more_than_quota() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 5)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/photos/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpegdata".to_vec()))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let out = tempfile::tempdir().unwrap();
        let saved = download_category(
            &api,
            Category::Electronics,
            out.path(),
            3,
            Duration::ZERO,
        )
        .await
        .unwrap();

        assert_eq!(saved, 3);
        let files = fs::read_dir(out.path().join("electronics")).unwrap().count();
        assert_eq!(files, 3);
    }

    #[tokio::test]
    async fn stops_paging_once_results_run_dry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 2)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 0)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/photos/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpegdata".to_vec()))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let out = tempfile::tempdir().unwrap();
        let saved =
            download_category(&api, Category::Vehicles, out.path(), 10, Duration::ZERO)
                .await
                .unwrap();

        assert_eq!(saved, 2);
    }

    #[tokio::test]
    async fn search_failure_keeps_partial_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 2)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/photos/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpegdata".to_vec()))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let out = tempfile::tempdir().unwrap();
        let saved =
            download_category(&api, Category::Furniture, out.path(), 10, Duration::ZERO)
                .await
                .unwrap();

        assert_eq!(saved, 2);
        assert!(out.path().join("furniture/furniture-1.jpg").exists());
        assert!(out.path().join("furniture/furniture-2.jpg").exists());
    }

    #[tokio::test]
    async fn filenames_are_category_and_sequence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 2)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(&server.uri(), 0)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/photos/"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpegdata".to_vec()))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let out = tempfile::tempdir().unwrap();
        download_category(&api, Category::Services, out.path(), 10, Duration::ZERO)
            .await
            .unwrap();

        assert!(out.path().join("services/services-1.jpg").exists());
        assert!(out.path().join("services/services-2.jpg").exists());
        assert!(!out.path().join("services/services-3.jpg").exists());
    }
}
