//! Conventional locations of recipe pages in the cookbook solution
//!
//! ```text
//! <solution>/
//! ├── BlazorCookbookApp/Components          ← Server recipes
//! └── BlazorCookbookApp.Client/
//!     ├── Pages                             ← Client recipes
//!     └── Chapters                          ← Client recipes
//! ```
//!
//! The build-time generator resolves these from the solution root; the
//! running server resolves them from its content root, which is the
//! `BlazorCookbookApp` project directory.

use std::path::Path;

use super::scanner::ScanRoot;
use crate::recipe::{LOCATION_CLIENT, LOCATION_SERVER};

/// Server project directory name
pub const SERVER_PROJECT: &str = "BlazorCookbookApp";

/// Client project directory name
pub const CLIENT_PROJECT: &str = "BlazorCookbookApp.Client";

/// Scan roots relative to the solution root
pub fn solution_roots(solution_root: &Path) -> Vec<ScanRoot> {
    project_roots(&solution_root.join(SERVER_PROJECT), &solution_root.join(CLIENT_PROJECT))
}

/// Scan roots relative to the running server's content root
pub fn content_roots(content_root: &Path) -> Vec<ScanRoot> {
    project_roots(content_root, &content_root.join("..").join(CLIENT_PROJECT))
}

fn project_roots(server_project: &Path, client_project: &Path) -> Vec<ScanRoot> {
    vec![
        ScanRoot::new(server_project.join("Components"), LOCATION_SERVER),
        ScanRoot::new(client_project.join("Pages"), LOCATION_CLIENT),
        ScanRoot::new(client_project.join("Chapters"), LOCATION_CLIENT),
    ]
}
