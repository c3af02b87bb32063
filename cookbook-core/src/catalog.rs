//! Runtime recipe catalog
//!
//! Serves recipes from the pre-generated manifest when manifest loading is
//! enabled and the manifest is usable, and otherwise scans the live source
//! tree. The choice is made on every call; only the manifest read itself is
//! cached (by the loader).

use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::{CatalogSettings, HostPaths};
use crate::discovery::{layout, scan_roots};
use crate::manifest::{Manifest, ManifestLoader};
use crate::recipe::{sort_recipes, RecipeRecord};

/// Where a catalog request is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Manifest,
    LiveScan,
}

/// Decide between the manifest and a live scan
pub fn select_source(use_json_manifest: bool, manifest: Option<&Manifest>) -> CatalogSource {
    match manifest {
        Some(m) if use_json_manifest && !m.is_empty() => CatalogSource::Manifest,
        _ => CatalogSource::LiveScan,
    }
}

/// Recipe catalog facade used by the application
#[derive(Debug, Clone)]
pub struct CatalogService {
    loader: Arc<ManifestLoader>,
    settings: CatalogSettings,
    host: HostPaths,
}

impl CatalogService {
    /// Catalog sharing `loader`, which should live as long as the process
    pub fn new(loader: Arc<ManifestLoader>, settings: CatalogSettings, host: HostPaths) -> Self {
        Self {
            loader,
            settings,
            host,
        }
    }

    /// Catalog with its own loader built from the same settings
    pub fn from_settings(settings: CatalogSettings, host: HostPaths) -> Self {
        let loader = Arc::new(ManifestLoader::new(host.clone(), &settings));
        Self::new(loader, settings, host)
    }

    pub fn loader(&self) -> &ManifestLoader {
        &self.loader
    }

    /// All recipes in catalog order, paired with where they came from
    pub async fn recipes_with_source(&self) -> (CatalogSource, Vec<RecipeRecord>) {
        let manifest = if self.settings.use_json_manifest {
            self.loader.load().await
        } else {
            None
        };

        match select_source(self.settings.use_json_manifest, manifest.as_deref()) {
            CatalogSource::Manifest => {
                let mut recipes = manifest.map(|m| m.recipes.clone()).unwrap_or_default();
                sort_recipes(&mut recipes);
                debug!(count = recipes.len(), "Serving recipes from manifest");
                (CatalogSource::Manifest, recipes)
            }
            CatalogSource::LiveScan => (CatalogSource::LiveScan, self.live_scan().await),
        }
    }

    /// All recipes in catalog order
    pub async fn recipes(&self) -> Vec<RecipeRecord> {
        self.recipes_with_source().await.1
    }

    /// Recipes listed in the overview
    pub async fn visible_recipes(&self) -> Vec<RecipeRecord> {
        let mut recipes = self.recipes().await;
        recipes.retain(|r| r.visible_in_overview);
        recipes
    }

    /// Visible recipes with four or more stars
    pub async fn featured_recipes(&self) -> Vec<RecipeRecord> {
        let mut recipes = self.visible_recipes().await;
        recipes.retain(RecipeRecord::is_featured);
        recipes
    }

    async fn live_scan(&self) -> Vec<RecipeRecord> {
        let roots = layout::content_roots(&self.host.content_root);
        debug!(
            "Scanning recipes live from {}",
            self.host.content_root.display()
        );

        match tokio::task::spawn_blocking(move || scan_roots(&roots).recipes).await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!(error = %e, "Live recipe scan did not complete");
                Vec::new()
            }
        }
    }
}
