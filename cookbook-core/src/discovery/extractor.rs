//! Pattern-based metadata extraction from component sources
//!
//! Each `.razor` page declares its route with `@page "/chXXrYY"` and may
//! declare metadata members in its code block:
//!
//! ```text
//! @page "/ch01r04"
//! @code {
//!     public string PageTitle { get; set; } = "Render modes";
//!     protected override string PageSummary => "Compare render modes";
//!     protected override int PageStars => 5;
//!     private static readonly bool PageVisibleInOverview = false;
//! }
//! ```
//!
//! The route decides whether the file is a recipe at all. Every other field
//! is extracted independently from the raw text and falls back to its own
//! default.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

use crate::recipe::{route_number, RecipeRecord, DEFAULT_STARS, UNKNOWN};

// Not anchored to line starts, so a commented-out directive still matches.
static ROUTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)@page\s+"(/ch(\d+)r(\d+)(\w*))""#).expect("route pattern is valid")
});

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| member_pattern("string", "PageTitle", r#""([^"]*)""#));

static SUMMARY_PATTERN: Lazy<Regex> =
    Lazy::new(|| member_pattern("string", "PageSummary", r#""([^"]*)""#));

static STARS_PATTERN: Lazy<Regex> = Lazy::new(|| member_pattern("int", "PageStars", r"(-?\d+)"));

static VISIBILITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)private\s+static\s+readonly\s+bool\s+PageVisibleInOverview\s*=\s*(true|false)\s*;")
        .expect("visibility pattern is valid")
});

/// Build the two accepted declaration forms for a metadata member
///
/// Capture 1 holds the value of the auto-property form
/// (`public T Name { get; set; } = value`), capture 2 the value of the
/// override form (`protected override T Name => value;`).
fn member_pattern(ty: &str, name: &str, value: &str) -> Regex {
    let pattern = format!(
        r"(?is)(?:public\s+{ty}\s+{name}\s*\{{\s*get;\s*set;\s*\}}\s*=\s*{value}|protected\s+override\s+{ty}\s+{name}\s*=>\s*{value}\s*;)"
    );
    Regex::new(&pattern).expect("member pattern is valid")
}

/// Value of whichever declaration form matched
fn member_value<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().trim())
        .unwrap_or("")
}

/// Extract a recipe record from one file's content
///
/// Returns `None` when the content has no recipe route. `file_path` is only
/// used to name the record's origin.
pub fn extract_recipe(content: &str, file_path: &Path, location: &str) -> Option<RecipeRecord> {
    let caps = ROUTE_PATTERN.captures(content)?;

    let route = caps[1].to_string();
    let chapter = route_number(&caps[2])?;
    let recipe = route_number(&caps[3])?;
    let variant = Some(&caps[4])
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(RecipeRecord {
        route,
        chapter,
        recipe,
        variant,
        location: location.to_string(),
        title: extract_title(content),
        summary: extract_summary(content),
        stars: extract_stars(content),
        visible_in_overview: extract_visible_in_overview(content),
        file_path: origin_name(file_path),
    })
}

/// Title from `PageTitle`, or "unknown"
pub fn extract_title(content: &str) -> String {
    first_text_value(&TITLE_PATTERN, content)
}

/// Summary from `PageSummary`, or "unknown"
pub fn extract_summary(content: &str) -> String {
    first_text_value(&SUMMARY_PATTERN, content)
}

fn first_text_value(pattern: &Regex, content: &str) -> String {
    pattern
        .captures_iter(content)
        .map(|caps| member_value(&caps))
        .find(|value| !value.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Star rating from `PageStars`; anything outside 1-5 yields the default
pub fn extract_stars(content: &str) -> u8 {
    STARS_PATTERN
        .captures(content)
        .and_then(|caps| member_value(&caps).parse::<i64>().ok())
        .filter(|stars| (1..=5).contains(stars))
        .map(|stars| stars as u8)
        .unwrap_or(DEFAULT_STARS)
}

/// Visibility from `PageVisibleInOverview`; visible unless declared false
pub fn extract_visible_in_overview(content: &str) -> bool {
    VISIBILITY_PATTERN
        .captures(content)
        .map(|caps| caps[1].eq_ignore_ascii_case("true"))
        .unwrap_or(true)
}

fn origin_name(file_path: &Path) -> String {
    file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned())
}
