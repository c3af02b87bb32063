//! Recipe discovery - scanning component sources for recipe pages

pub mod extractor;
pub mod layout;
pub mod scanner;

pub use extractor::extract_recipe;
pub use scanner::{scan_roots, ScanOutcome, ScanRoot};
