use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::image::Image;
use crate::utils::normalize_path;

/// Owns decoded images for as long as sprites need to borrow them.
pub struct ImageManager {
    images: HashMap<PathBuf, Image>,
}

impl ImageManager {
    pub fn new() -> ImageManager {
        ImageManager {
            images: HashMap::new(),
        }
    }

    /// Decode and cache the image at `path`. Paths are normalized, so the
    /// same file loaded through different spellings is stored once.
    pub fn preload(&mut self, path: &Path) -> Result<()> {
        let path = normalize_path(path)?;
        if self.images.contains_key(&path) {
            return Ok(());
        }
        info!("loading image: {:?}", path);
        let image = Image::from_file(&path)?;
        self.images.insert(path, image);
        Ok(())
    }

    /// Register a procedurally built image under a name.
    pub fn insert(&mut self, name: &str, image: Image) {
        self.images.insert(PathBuf::from(name), image);
    }

    pub fn image(&self, path: &Path) -> Option<&Image> {
        let path = normalize_path(path).ok()?;
        self.images.get(&path)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
