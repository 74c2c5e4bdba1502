use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use tracing::warn;

use crate::catalog::Category;

/// Where a synthesized product gets its `imageUrl` from.
pub trait ImageSource {
    /// Next image path for a product in `category`, or `None` if the
    /// category has no usable images and should be skipped.
    fn next_image(&mut self, category: Category) -> Option<String>;
}

/// Cycles through `/assets/products/1.jpg` .. `/assets/products/{max}.jpg`,
/// wrapping back to 1. Does not care whether the files exist.
pub struct ImageCycle {
    next: u32,
    max: u32,
}

impl ImageCycle {
    pub fn new(max: u32) -> Self {
        ImageCycle { next: 1, max }
    }
}

impl ImageSource for ImageCycle {
    fn next_image(&mut self, _category: Category) -> Option<String> {
        let index = self.next;
        self.next += 1;
        if self.next > self.max {
            self.next = 1;
        }
        Some(format!("/assets/products/{index}.jpg"))
    }
}

/// Picks uniformly at random from a one-time listing of each category's
/// asset folder under the given base directory.
pub struct FolderPool {
    snapshots: HashMap<Category, Vec<String>>,
}

impl FolderPool {
    /// Lists every category folder under `base` once. Categories whose
    /// folder is missing or empty end up with an empty snapshot and are
    /// warned about here.
    pub fn scan(base: &Path) -> Self {
        let mut snapshots = HashMap::new();
        for category in Category::ALL {
            let dir = base.join(category.slug());
            let files = list_files(&dir);
            if files.is_empty() {
                warn!(
                    "no images found in {}, skipping {}",
                    dir.display(),
                    category.label()
                );
            }
            snapshots.insert(category, files);
        }
        FolderPool { snapshots }
    }
}

impl ImageSource for FolderPool {
    fn next_image(&mut self, category: Category) -> Option<String> {
        let files = self.snapshots.get(&category)?;
        let file = files.choose(&mut rand::thread_rng())?;
        Some(format!("/assets/products/{}/{file}", category.slug()))
    }
}

fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.file_type().ok()?.is_file() {
                return None;
            }
            entry.file_name().into_string().ok()
        })
        .collect()
}
