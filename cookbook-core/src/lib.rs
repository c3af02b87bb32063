//! Cookbook recipe catalog library
//!
//! Discovers recipe pages in component sources, builds the JSON recipe
//! manifest at build time, and serves the catalog at runtime with a
//! live-scan fallback when no usable manifest is available.

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod recipe;

pub use catalog::{select_source, CatalogService, CatalogSource};
pub use config::{CatalogSettings, CookbookConfig, HostPaths};
pub use error::{CatalogError, Result};
pub use manifest::{Manifest, ManifestBuilder, ManifestLoader, ManifestMetadata, ManifestStatistics};
pub use recipe::{RecipeRecord, RecipeRoute};
