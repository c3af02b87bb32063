//! Recipe records discovered in the cookbook sources
//!
//! A recipe is one demo page identified by a `/ch<chapter>r<recipe>` route.
//! Records are produced by the extractor, persisted in the manifest, and
//! served by the catalog in a deterministic order.

mod route;

pub use route::{label_for_path, title_for_path, RecipeRoute, UNKNOWN_CHAPTER_RECIPE};
pub(crate) use route::route_number;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Location label for recipes found in the server project
pub const LOCATION_SERVER: &str = "Server";

/// Location label for recipes found in the client project
pub const LOCATION_CLIENT: &str = "Client";

/// Sentinel used when a title or summary declaration is missing
pub const UNKNOWN: &str = "unknown";

/// Star rating used when no valid rating is declared
pub const DEFAULT_STARS: u8 = 3;

/// Lowest star rating that counts as featured
pub const FEATURED_MIN_STARS: u8 = 4;

/// One discovered recipe page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Complete route path (e.g., "/ch01r02")
    pub route: String,

    /// Chapter number (e.g., 1)
    pub chapter: u32,

    /// Recipe number within the chapter (e.g., 2)
    pub recipe: u32,

    /// Optional variant suffix (e.g., "cl" for client)
    #[serde(default)]
    pub variant: Option<String>,

    /// Project location: "Server" or "Client"
    #[serde(default)]
    pub location: String,

    /// Title declared by the page's `PageTitle` member
    #[serde(default = "default_text")]
    pub title: String,

    /// Description declared by the page's `PageSummary` member
    #[serde(default = "default_text")]
    pub summary: String,

    /// Star rating, 1-5
    #[serde(default = "default_stars")]
    pub stars: u8,

    /// Whether the recipe is listed in the overview
    #[serde(default = "default_visible")]
    pub visible_in_overview: bool,

    /// Name of the originating file, for debugging only
    #[serde(default)]
    pub file_path: String,
}

fn default_text() -> String {
    UNKNOWN.to_string()
}

fn default_stars() -> u8 {
    DEFAULT_STARS
}

fn default_visible() -> bool {
    true
}

impl RecipeRecord {
    /// Featured recipes carry four or five stars
    pub fn is_featured(&self) -> bool {
        self.stars >= FEATURED_MIN_STARS
    }

    /// Catalog ordering: chapter, then recipe number, then variant
    ///
    /// A missing variant sorts before any present one; variants compare
    /// ordinally.
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        self.chapter
            .cmp(&other.chapter)
            .then_with(|| self.recipe.cmp(&other.recipe))
            .then_with(|| self.variant.as_deref().cmp(&other.variant.as_deref()))
    }
}

/// Sort recipes into catalog order (stable)
pub fn sort_recipes(recipes: &mut [RecipeRecord]) {
    recipes.sort_by(RecipeRecord::catalog_cmp);
}
