//=========================================================================
// Asset Manager
//=========================================================================
//
// Byte-level asset cache rooted at a directory.
//
// Assets are addressed by a path relative to the asset root and loaded
// once; later loads share the cached bytes. Decoding is left to the
// consumer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

//=== External Dependencies ===============================================

use log::{debug, info};
use thiserror::Error;

//=== AssetError ==========================================================

/// Errors raised while resolving or loading an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The name is absolute or escapes the asset root.
    #[error("Asset name {0:?} must be a relative path inside the asset root")]
    InvalidName(String),

    /// The file could not be read.
    #[error("Failed to read asset {name:?} from {path:?}: {source}")]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Shorthand for [`Result<T, AssetError>`].
pub type AssetResult<T> = Result<T, AssetError>;

//=== AssetManager ========================================================

pub struct AssetManager {
    root: PathBuf,
    cache: HashMap<String, Arc<[u8]>>,
}

impl AssetManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        info!(target: "assets", "Asset manager rooted at {:?}", root);
        Self {
            root,
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the bytes of `name`, reading the file on first use.
    pub fn load(&mut self, name: &str) -> AssetResult<Arc<[u8]>> {
        if let Some(bytes) = self.cache.get(name) {
            return Ok(Arc::clone(bytes));
        }

        let path = self.resolve(name)?;
        let bytes: Arc<[u8]> = fs::read(&path)
            .map_err(|source| AssetError::Io {
                name: name.to_owned(),
                path: path.clone(),
                source,
            })?
            .into();

        debug!(target: "assets", "Loaded {:?} ({} bytes)", name, bytes.len());
        self.cache.insert(name.to_owned(), Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Drops the cached copy of `name`. Returns `true` if it was cached.
    ///
    /// Outstanding handles stay valid.
    pub fn unload(&mut self, name: &str) -> bool {
        self.cache.remove(name).is_some()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn resolve(&self, name: &str) -> AssetResult<PathBuf> {
        let relative = Path::new(name);
        let inside_root = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        if !inside_root {
            return Err(AssetError::InvalidName(name.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

impl Drop for AssetManager {
    fn drop(&mut self) {
        debug!(target: "assets", "Releasing {} cached assets", self.cache.len());
        self.cache.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
