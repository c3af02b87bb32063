//! Catalog configuration and host paths
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. Environment variables (`COOKBOOK_USE_JSON_MANIFEST`, `COOKBOOK_MANIFEST_PATH`)
//! 2. Configuration file (`--config` or `<content_root>/cookbook.yml`)
//! 3. Built-in defaults
//!
//! ```yaml
//! recipe_manifest:
//!   use_json_manifest: true
//!   path: ../recipe-manifest.json
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Default configuration file name, looked up in the content root
pub const CONFIG_FILE_NAME: &str = "cookbook.yml";

/// Toggles manifest-based loading
pub const ENV_USE_JSON_MANIFEST: &str = "COOKBOOK_USE_JSON_MANIFEST";

/// Overrides the manifest path
pub const ENV_MANIFEST_PATH: &str = "COOKBOOK_MANIFEST_PATH";

/// Directories provided by the hosting application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    /// Directory of the running server project
    pub content_root: PathBuf,
    /// Directory of static web assets
    pub web_root: PathBuf,
}

impl HostPaths {
    /// Host paths with the conventional `wwwroot` web root
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        let content_root = content_root.into();
        let web_root = content_root.join("wwwroot");
        Self {
            content_root,
            web_root,
        }
    }

    pub fn with_web_root(mut self, web_root: impl Into<PathBuf>) -> Self {
        self.web_root = web_root.into();
        self
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookConfig {
    pub recipe_manifest: CatalogSettings,
}

/// Settings consumed by the catalog service and manifest loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Serve recipes from the JSON manifest when one is usable
    pub use_json_manifest: bool,

    /// Manifest location; relative paths resolve against the content root
    #[serde(rename = "path")]
    pub manifest_path: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            use_json_manifest: true,
            manifest_path: None,
        }
    }
}

impl CookbookConfig {
    /// Load configuration for a host and apply environment overrides
    ///
    /// An explicitly given file must exist. Without one, `cookbook.yml` in the
    /// content root is used if present, otherwise the defaults.
    pub fn load(content_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CatalogError::Config(format!(
                        "Configuration file does not exist: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => {
                let default_path = content_root.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    debug!("No configuration file at {}, using defaults", default_path.display());
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        // An empty file is valid and means defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(&content).map_err(|source| CatalogError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_USE_JSON_MANIFEST) {
            match parse_bool(&raw) {
                Some(enabled) => {
                    debug!("{} overrides use_json_manifest = {}", ENV_USE_JSON_MANIFEST, enabled);
                    self.recipe_manifest.use_json_manifest = enabled;
                }
                None => warn!(
                    "Ignoring invalid {} value '{}' (expected true/false)",
                    ENV_USE_JSON_MANIFEST, raw
                ),
            }
        }

        if let Some(path) = lookup(ENV_MANIFEST_PATH).filter(|p| !p.trim().is_empty()) {
            debug!("{} overrides manifest path = {}", ENV_MANIFEST_PATH, path);
            self.recipe_manifest.manifest_path = Some(PathBuf::from(path.trim()));
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
