//! Unsplash photo-search client and the per-category download loop.

mod download;
mod search;

pub use download::download_category;
pub use search::{PhotoUrls, SearchPhoto, SearchResponse, Unsplash};

use eyre::{bail, Result};

const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";
const PLACEHOLDER_KEY: &str = "YOUR_UNSPLASH_ACCESS_KEY";

/// Reads the Unsplash access key from the environment.
///
/// Refuses to run with the key unset or left at the placeholder, so a
/// misconfigured run aborts before any work starts.
pub fn access_key_from_env() -> Result<String> {
    let key =
        std::env::var(ACCESS_KEY_VAR).unwrap_or_else(|_| PLACEHOLDER_KEY.to_owned());
    if key.contains(PLACEHOLDER_KEY) {
        bail!(
            "set {ACCESS_KEY_VAR} to your Unsplash access key \
             (register for free at https://unsplash.com/developers)"
        );
    }
    Ok(key)
}
