//! Recipe manifest (recipe-manifest.json)
//!
//! The manifest is produced wholesale at build time by [`ManifestBuilder`]
//! and consumed read-only at runtime by [`ManifestLoader`].
//!
//! # Format
//!
//! ```text
//! {
//!   "metadata":   { generatedAt, generatorVersion, formatVersion,
//!                   sourcePath, scannedDirectories },
//!   "recipes":    [ { route, chapter, recipe, variant, location, title,
//!                     summary, stars, visibleInOverview, filePath } ],
//!   "statistics": { totalRecipes, visibleRecipes, hiddenRecipes,
//!                   serverRecipes, clientRecipes, featuredRecipes,
//!                   chapterRange, starRatings }
//! }
//! ```
//!
//! Property names are written in camelCase and read case-insensitively.

mod builder;
mod loader;
mod statistics;

pub use builder::{write_manifest, ManifestBuilder};
pub use loader::ManifestLoader;
pub use statistics::ManifestStatistics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::recipe::RecipeRecord;

/// Default manifest file name
pub const MANIFEST_FILE_NAME: &str = "recipe-manifest.json";

/// Version of the generator that writes manifests
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Version of the manifest structure
pub const FORMAT_VERSION: &str = "1.0";

/// Every property name in the manifest format, in canonical casing
const PROPERTY_NAMES: &[&str] = &[
    "metadata",
    "recipes",
    "statistics",
    "generatedAt",
    "generatorVersion",
    "formatVersion",
    "sourcePath",
    "scannedDirectories",
    "route",
    "chapter",
    "recipe",
    "variant",
    "location",
    "title",
    "summary",
    "stars",
    "visibleInOverview",
    "filePath",
    "totalRecipes",
    "visibleRecipes",
    "hiddenRecipes",
    "serverRecipes",
    "clientRecipes",
    "featuredRecipes",
    "chapterRange",
    "starRatings",
];

/// A complete recipe manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Generation provenance
    #[serde(default)]
    pub metadata: ManifestMetadata,

    /// All recipes in catalog order
    #[serde(default)]
    pub recipes: Vec<RecipeRecord>,

    /// Aggregates over `recipes`
    #[serde(default)]
    pub statistics: ManifestStatistics,
}

/// When and how the manifest was generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestMetadata {
    /// Generation time (UTC)
    pub generated_at: DateTime<Utc>,

    /// Version of the generator that wrote the file
    pub generator_version: String,

    /// Version of the manifest structure
    pub format_version: String,

    /// Root the generator scanned from
    pub source_path: String,

    /// Directories that existed and were scanned
    pub scanned_directories: Vec<String>,
}

impl Default for ManifestMetadata {
    fn default() -> Self {
        Self {
            generated_at: DateTime::<Utc>::default(),
            generator_version: GENERATOR_VERSION.to_string(),
            format_version: FORMAT_VERSION.to_string(),
            source_path: String::new(),
            scanned_directories: Vec::new(),
        }
    }
}

impl Manifest {
    /// Assemble a manifest, computing statistics from `recipes`
    pub fn new(metadata: ManifestMetadata, recipes: Vec<RecipeRecord>) -> Self {
        let statistics = ManifestStatistics::from_recipes(&recipes);
        Self {
            metadata,
            recipes,
            statistics,
        }
    }

    /// A manifest with no recipes is treated as unavailable
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Serialize as indented camelCase JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse manifest JSON, matching property names case-insensitively
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Ok(serde_json::from_value(normalize_property_names(value))?)
    }

    /// Read and parse a manifest file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json(&content)
    }
}

/// Rewrite known property names to their canonical casing
///
/// Unknown names (including the numeric keys of `starRatings`) are kept.
fn normalize_property_names(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (canonical_property(key), normalize_property_names(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(normalize_property_names).collect())
        }
        other => other,
    }
}

fn canonical_property(key: String) -> String {
    PROPERTY_NAMES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(&key))
        .map(|name| name.to_string())
        .unwrap_or(key)
}
