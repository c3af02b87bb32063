//! Shared helpers for integration tests

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const BINDING_PAGE: &str = r#"@page "/ch01r02"
@rendermode InteractiveServer

<h3>@PageTitle</h3>

@code {
    public string PageTitle { get; set; } = "Two-way binding";
    protected override string PageSummary => "Bind inputs to component state";
    protected override int PageStars => 5;
}
"#;

pub const BINDING_CLIENT_PAGE: &str = r#"@page "/ch01r02cl"

@code {
    protected override string PageTitle => "Two-way binding on the client";
    private static readonly bool PageVisibleInOverview = false;
}
"#;

pub const GRID_PAGE: &str = r#"@page "/ch02r01"

@code {
    public string PageTitle { get; set; } = "Data grid";
    public int PageStars { get; set; } = 4;
}
"#;

pub const HOME_PAGE: &str = r#"@page "/"

<h1>Blazor Cookbook</h1>
"#;

/// Write `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// Create a cookbook solution with three recipes and one non-recipe page
///
/// Returns the server project directory, which is the content root of the
/// running application.
pub fn create_solution(solution_root: &Path) -> Result<PathBuf> {
    write_file(
        solution_root,
        "BlazorCookbookApp/Components/Pages/Home.razor",
        HOME_PAGE,
    )?;
    write_file(
        solution_root,
        "BlazorCookbookApp/Components/Chapters/Chapter01/Recipe02/Binding.razor",
        BINDING_PAGE,
    )?;
    write_file(
        solution_root,
        "BlazorCookbookApp.Client/Pages/BindingClient.razor",
        BINDING_CLIENT_PAGE,
    )?;
    write_file(
        solution_root,
        "BlazorCookbookApp.Client/Chapters/Chapter02/Recipe01/Grid.razor",
        GRID_PAGE,
    )?;

    Ok(solution_root.join("BlazorCookbookApp"))
}
