//! `cookbook list`: run the catalog service against a content root

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::info;

use cookbook_core::{CatalogService, CatalogSource, CookbookConfig, HostPaths, RecipeRecord};

use crate::generate_cli::star_bar;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Content root of the server project (BlazorCookbookApp)
    #[clap(long, default_value = ".")]
    pub content_root: PathBuf,

    /// Web root (defaults to <content-root>/wwwroot)
    #[clap(long)]
    pub web_root: Option<PathBuf>,

    /// Configuration file (defaults to <content-root>/cookbook.yml if present)
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Include recipes hidden from the overview
    #[clap(long)]
    pub all: bool,

    /// Only recipes with four or more stars
    #[clap(long)]
    pub featured: bool,

    /// Output recipes as JSON
    #[clap(long)]
    pub json: bool,
}

/// Table row for the recipe listing
#[derive(Tabled)]
struct RecipeRow {
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Stars")]
    stars: String,
    #[tabled(rename = "Visible")]
    visible: String,
}

impl From<&RecipeRecord> for RecipeRow {
    fn from(recipe: &RecipeRecord) -> Self {
        Self {
            route: recipe.route.clone(),
            title: recipe.title.clone(),
            location: recipe.location.clone(),
            stars: star_bar(recipe.stars),
            visible: if recipe.visible_in_overview { "yes" } else { "no" }.to_string(),
        }
    }
}

pub async fn execute(args: ListArgs) -> Result<()> {
    let config = CookbookConfig::load(&args.content_root, args.config.as_deref())
        .context("Failed to load configuration")?;

    let mut host = HostPaths::new(&args.content_root);
    if let Some(web_root) = args.web_root {
        host = host.with_web_root(web_root);
    }

    let service = CatalogService::from_settings(config.recipe_manifest, host);
    let (source, mut recipes) = service.recipes_with_source().await;
    info!(count = recipes.len(), source = ?source, "Catalog loaded");

    if !args.all {
        recipes.retain(|r| r.visible_in_overview);
    }
    if args.featured {
        recipes.retain(RecipeRecord::is_featured);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    let rows: Vec<RecipeRow> = recipes.iter().map(RecipeRow::from).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    println!(
        "\n{} recipes (served from {})",
        recipes.len(),
        source_name(source)
    );

    Ok(())
}

fn source_name(source: CatalogSource) -> &'static str {
    match source {
        CatalogSource::Manifest => "manifest",
        CatalogSource::LiveScan => "live scan",
    }
}
