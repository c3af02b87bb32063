//! Build-time manifest generation
//!
//! Scans the solution's recipe directories and writes the result as
//! `recipe-manifest.json`. Only the offline generator uses this; the running
//! application reads manifests through the loader.

use chrono::Utc;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{Manifest, ManifestMetadata, FORMAT_VERSION, GENERATOR_VERSION};
use crate::discovery::{layout, scan_roots, ScanRoot};
use crate::error::{CatalogError, Result};

/// Generates manifests from a solution root
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    root: PathBuf,
    roots: Vec<ScanRoot>,
}

impl ManifestBuilder {
    /// Builder scanning the conventional directories under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let roots = layout::solution_roots(&root);
        Self { root, roots }
    }

    /// Builder scanning an explicit set of roots
    pub fn with_roots(root: impl Into<PathBuf>, roots: Vec<ScanRoot>) -> Self {
        Self {
            root: root.into(),
            roots,
        }
    }

    /// Scan, sort, and aggregate into a complete manifest
    pub fn generate(&self) -> Manifest {
        info!("Generating recipe manifest from {}", self.root.display());

        let outcome = scan_roots(&self.roots);

        let metadata = ManifestMetadata {
            generated_at: Utc::now(),
            generator_version: GENERATOR_VERSION.to_string(),
            format_version: FORMAT_VERSION.to_string(),
            source_path: self.root.display().to_string(),
            scanned_directories: outcome
                .scanned_directories
                .iter()
                .map(|dir| dir.display().to_string())
                .collect(),
        };

        Manifest::new(metadata, outcome.recipes)
    }

    /// Generate a manifest and write it to `output`
    pub fn generate_to_file(&self, output: &Path) -> Result<Manifest> {
        let manifest = self.generate();
        write_manifest(&manifest, output)?;
        Ok(manifest)
    }
}

/// Write a manifest as indented JSON, replacing `path` atomically
///
/// The JSON goes to a temporary file next to `path` which is then renamed
/// over it, so readers never observe a partially written manifest.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = manifest.to_json()?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| CatalogError::io(&parent, e))?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| CatalogError::io(&parent, e))?;
    temp.write_all(json.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| CatalogError::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| CatalogError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(
        path = %path.display(),
        bytes = json.len(),
        recipes = manifest.recipes.len(),
        "Wrote recipe manifest"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::layout::{CLIENT_PROJECT, SERVER_PROJECT};
    use crate::recipe::{LOCATION_CLIENT, LOCATION_SERVER};
    use std::fs;
    use tempfile::TempDir;

    fn write_page(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_generate_tags_locations_and_records_existing_roots() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        write_page(
            &root.join(SERVER_PROJECT).join("Components").join("Pages"),
            "Static.razor",
            r#"@page "/ch01r02""#,
        );
        write_page(
            &root.join(CLIENT_PROJECT).join("Pages"),
            "Client.razor",
            r#"@page "/ch01r02cl""#,
        );
        // Chapters directory intentionally absent

        let manifest = ManifestBuilder::new(root).generate();

        assert_eq!(manifest.recipes.len(), 2);
        assert_eq!(manifest.recipes[0].location, LOCATION_SERVER);
        assert_eq!(manifest.recipes[1].location, LOCATION_CLIENT);
        assert_eq!(manifest.metadata.scanned_directories.len(), 2);
        assert!(!manifest
            .metadata
            .scanned_directories
            .iter()
            .any(|d| d.ends_with("Chapters")));
        assert_eq!(manifest.metadata.source_path, root.display().to_string());
        assert_eq!(manifest.metadata.generator_version, GENERATOR_VERSION);
        assert_eq!(manifest.statistics.server_recipes, 1);
        assert_eq!(manifest.statistics.client_recipes, 1);
    }

    #[test]
    fn test_generate_with_no_sources() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = ManifestBuilder::new(temp_dir.path()).generate();

        assert!(manifest.is_empty());
        assert!(manifest.metadata.scanned_directories.is_empty());
        assert_eq!(manifest.statistics.chapter_range, "0-0");
    }

    #[test]
    fn test_generate_with_explicit_roots() {
        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("Shared");
        write_page(&shared, "Counter.razor", r#"@page "/ch03r01""#);

        let builder = ManifestBuilder::with_roots(
            temp_dir.path(),
            vec![
                ScanRoot::new(&shared, LOCATION_CLIENT),
                ScanRoot::new(temp_dir.path().join("Missing"), LOCATION_SERVER),
            ],
        );
        let manifest = builder.generate();

        assert_eq!(manifest.recipes.len(), 1);
        assert_eq!(manifest.recipes[0].location, LOCATION_CLIENT);
        assert_eq!(
            manifest.metadata.scanned_directories,
            vec![shared.display().to_string()]
        );
        assert_eq!(manifest.metadata.source_path, temp_dir.path().display().to_string());
    }

    #[test]
    fn test_write_manifest_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out").join("recipe-manifest.json");
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, "stale").unwrap();

        let manifest = Manifest::default();
        write_manifest(&manifest, &output).unwrap();

        let written = Manifest::from_file(&output).unwrap();
        assert_eq!(written, manifest);

        // Only the manifest remains; the temporary file was renamed
        let entries: Vec<_> = fs::read_dir(output.parent().unwrap()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_manifest_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("a").join("b").join("manifest.json");

        write_manifest(&Manifest::default(), &output).unwrap();
        assert!(output.exists());
    }
}
