//! Recipe route parsing and display labels
//!
//! Routes follow `/ch<chapter>r<recipe><variant>`, e.g. `/ch01r04` or
//! `/ch01r03cl`. Leading zeros are optional.

use once_cell::sync::Lazy;
use regex::Regex;

/// Label used when a path carries no usable chapter/recipe numbers
pub const UNKNOWN_CHAPTER_RECIPE: &str = "Unknown Chapter/Recipe";

static EXACT_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^/ch(\d+)r(\d+)(\w*)$").expect("route pattern is valid")
});

static ROUTE_IN_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/ch(\d+)r(\d+)").expect("route pattern is valid"));

/// Parse a chapter or recipe number from route digits
///
/// Values outside the signed 32-bit range are rejected.
pub(crate) fn route_number(digits: &str) -> Option<u32> {
    digits
        .parse::<i32>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
}

/// Parsed chapter/recipe route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRoute {
    pub chapter: u32,
    pub recipe: u32,
    pub variant: Option<String>,
}

impl RecipeRoute {
    /// Parse a complete route such as `/ch01r03cl`
    pub fn parse(route: &str) -> Option<Self> {
        let caps = EXACT_ROUTE.captures(route)?;
        let chapter = route_number(&caps[1])?;
        let recipe = route_number(&caps[2])?;
        let variant = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Some(Self {
            chapter,
            recipe,
            variant,
        })
    }

    /// Find the first chapter/recipe pair anywhere in a URL path
    ///
    /// Used for pages that only know their current location, e.g.
    /// `/app/ch02r05?x=1`. The variant is not captured.
    pub fn find_in_path(path: &str) -> Option<Self> {
        let caps = ROUTE_IN_PATH.captures(path)?;
        Some(Self {
            chapter: route_number(&caps[1])?,
            recipe: route_number(&caps[2])?,
            variant: None,
        })
    }

    /// "Chapter 1, Recipe 4", or the unknown label when either number is 0
    pub fn label(&self) -> String {
        if self.chapter > 0 && self.recipe > 0 {
            format!("Chapter {}, Recipe {}", self.chapter, self.recipe)
        } else {
            UNKNOWN_CHAPTER_RECIPE.to_string()
        }
    }

    /// Combine a page title with the chapter/recipe label
    pub fn title_with_numbers(&self, base_title: &str) -> String {
        format!("{} ({})", base_title, self.label())
    }
}

/// Label for an arbitrary URL path
pub fn label_for_path(path: &str) -> String {
    RecipeRoute::find_in_path(path)
        .map(|r| r.label())
        .unwrap_or_else(|| UNKNOWN_CHAPTER_RECIPE.to_string())
}

/// Title plus label for an arbitrary URL path
pub fn title_for_path(path: &str, base_title: &str) -> String {
    match RecipeRoute::find_in_path(path) {
        Some(route) => route.title_with_numbers(base_title),
        None => format!("{} ({})", base_title, UNKNOWN_CHAPTER_RECIPE),
    }
}
