//! File system scanner for discovering recipe pages
//!
//! Walks each scan root for `.razor` files and runs the extractor over every
//! file. A bad root or a bad file is logged and skipped; a scan never fails.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::extractor::extract_recipe;
use crate::recipe::{sort_recipes, RecipeRecord};

/// Extension of component source files
pub const SOURCE_EXTENSION: &str = "razor";

/// A directory to scan and the location label its recipes receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub location: String,
}

impl ScanRoot {
    pub fn new(path: impl Into<PathBuf>, location: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            location: location.into(),
        }
    }
}

/// Result of scanning a set of roots
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Recipes in catalog order
    pub recipes: Vec<RecipeRecord>,
    /// Roots that existed and were walked
    pub scanned_directories: Vec<PathBuf>,
}

/// Scan every root and return the sorted recipes
pub fn scan_roots(roots: &[ScanRoot]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for root in roots {
        if !root.path.is_dir() {
            warn!(
                path = %root.path.display(),
                location = %root.location,
                "Scan root is missing or not a directory, skipping"
            );
            continue;
        }

        let Some(found) = walk_root(&root.path, &root.location) else {
            warn!(
                path = %root.path.display(),
                location = %root.location,
                "Scan root could not be enumerated, skipping"
            );
            continue;
        };
        debug!(
            path = %root.path.display(),
            count = found.len(),
            "Scanned recipe root"
        );
        outcome.recipes.extend(found);
        outcome.scanned_directories.push(root.path.clone());
    }

    sort_recipes(&mut outcome.recipes);
    info!(
        "Scan complete: found {} recipes in {} directories",
        outcome.recipes.len(),
        outcome.scanned_directories.len()
    );

    outcome
}

/// Recursively scan one directory, tagging recipes with `location`
///
/// Results are in enumeration order; callers sort.
pub fn scan_directory(dir: &Path, location: &str) -> Vec<RecipeRecord> {
    walk_root(dir, location).unwrap_or_default()
}

/// Walk one root; `None` when the root itself could not be listed
fn walk_root(dir: &Path, location: &str) -> Option<Vec<RecipeRecord>> {
    let mut recipes = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                warn!(path = %dir.display(), error = %e, "Failed to enumerate scan root");
                return None;
            }
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to enumerate entry, skipping");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }

        if let Some(recipe) = scan_file(entry.path(), location) {
            recipes.push(recipe);
        }
    }

    Some(recipes)
}

/// Read and extract a single file
pub fn scan_file(path: &Path, location: &str) -> Option<RecipeRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read recipe file, skipping");
            return None;
        }
    };

    let recipe = extract_recipe(&content, path, location);
    match &recipe {
        Some(r) => debug!(path = %path.display(), route = %r.route, "Found recipe"),
        None => debug!(path = %path.display(), "No recipe route, skipping"),
    }
    recipe
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}
