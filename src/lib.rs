//! Seeding tools for the RentReturn demo application.
//!
//! `api` posts synthesized product records to the backend, `product`
//! builds those records and picks their image paths, and `unsplash`
//! fills the local asset folders with stock photos.
//!
//! Each binary under `src/bin` is an independent, sequential run; the only
//! coupling between them is that the downloader's output directory is the
//! folder-scanning seeder's input directory.

pub mod api;
pub mod catalog;
pub mod product;
pub mod unsplash;

use tracing_subscriber::EnvFilter;

/// Initializes log output for the binaries, defaulting to `info` unless
/// `RUST_LOG` says otherwise.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
