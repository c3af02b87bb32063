//! Runtime manifest loading
//!
//! Resolution order for the manifest file:
//!
//! 1. Configured path (absolute, or relative to the content root)
//! 2. `<content_root>/recipe-manifest.json`
//! 3. `<content_root>/../recipe-manifest.json`
//! 4. `<web_root>/recipe-manifest.json`
//!
//! The file is read at most once per loader. Whatever the first load
//! produced, a manifest or nothing, is served for the rest of the loader's
//! life.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use super::{Manifest, MANIFEST_FILE_NAME};
use crate::config::{CatalogSettings, HostPaths};

/// Loads and caches the recipe manifest
#[derive(Debug)]
pub struct ManifestLoader {
    host: HostPaths,
    configured_path: Option<PathBuf>,
    cache: OnceCell<Option<Arc<Manifest>>>,
}

impl ManifestLoader {
    pub fn new(host: HostPaths, settings: &CatalogSettings) -> Self {
        Self {
            host,
            // A blank configured path means "not configured"
            configured_path: settings
                .manifest_path
                .clone()
                .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty()),
            cache: OnceCell::new(),
        }
    }

    /// Path the manifest would be loaded from
    ///
    /// A configured path is returned whether or not it exists. Otherwise the
    /// first existing default location is used, or `None` when there is none.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if let Some(configured) = &self.configured_path {
            return Some(if configured.is_absolute() {
                configured.clone()
            } else {
                self.host.content_root.join(configured)
            });
        }

        self.default_locations().into_iter().find(|p| p.is_file())
    }

    /// Default locations probed in order when no path is configured
    pub fn default_locations(&self) -> Vec<PathBuf> {
        vec![
            self.host.content_root.join(MANIFEST_FILE_NAME),
            self.host.content_root.join("..").join(MANIFEST_FILE_NAME),
            self.host.web_root.join(MANIFEST_FILE_NAME),
        ]
    }

    /// Whether a manifest file currently exists at the resolved path
    ///
    /// Not cached; checks the file system on every call.
    pub fn is_available(&self) -> bool {
        self.resolve_path().map(|p| p.is_file()).unwrap_or(false)
    }

    /// Whether the one-time load has already happened
    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    /// Load the manifest, reading the file only on the first call
    ///
    /// Returns `None` when the manifest is missing, unreadable, malformed or
    /// empty. Concurrent first callers wait for a single read.
    pub async fn load(&self) -> Option<Arc<Manifest>> {
        self.cache
            .get_or_init(|| async { self.read_manifest().await.map(Arc::new) })
            .await
            .clone()
    }

    async fn read_manifest(&self) -> Option<Manifest> {
        let Some(path) = self.resolve_path() else {
            info!("No recipe manifest found, using file scanning fallback");
            return None;
        };

        debug!("Loading recipe manifest from {}", path.display());

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Manifest file not found at {}, using file scanning fallback",
                    path.display()
                );
                return None;
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read recipe manifest, using file scanning fallback"
                );
                return None;
            }
        };

        let manifest = match Manifest::from_json(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse recipe manifest, using file scanning fallback"
                );
                return None;
            }
        };

        if manifest.is_empty() {
            info!(
                "Manifest at {} contains no recipes, using file scanning fallback",
                path.display()
            );
            return None;
        }

        info!(
            recipes = manifest.recipes.len(),
            generated_at = %manifest.metadata.generated_at,
            "Loaded recipe manifest from {}",
            path.display()
        );
        Some(manifest)
    }
}
