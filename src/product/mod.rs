mod images;
mod record;

pub use images::{FolderPool, ImageCycle, ImageSource};
pub use record::NewProduct;
