//! `cookbook generate`: build-time manifest generation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use cookbook_core::manifest::MANIFEST_FILE_NAME;
use cookbook_core::{Manifest, ManifestBuilder, RecipeRecord};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Solution root containing the BlazorCookbookApp projects
    #[clap(long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest output path (defaults to <root>/recipe-manifest.json)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Print the manifest JSON instead of the summary
    #[clap(long)]
    pub json: bool,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| args.root.join(MANIFEST_FILE_NAME));
    let builder = ManifestBuilder::new(&args.root);

    // Scanning is synchronous file I/O
    let manifest = tokio::task::spawn_blocking({
        let output = output.clone();
        move || builder.generate_to_file(&output)
    })
    .await
    .context("Manifest generation task failed")?
    .with_context(|| format!("Failed to write manifest to {}", output.display()))?;

    info!(
        recipes = manifest.recipes.len(),
        "Manifest written to {}",
        output.display()
    );

    if args.json {
        println!("{}", manifest.to_json()?);
        return Ok(());
    }

    print_summary(&manifest);

    let size = std::fs::metadata(&output)
        .with_context(|| format!("Failed to stat {}", output.display()))?
        .len();
    println!("\n✅ Manifest saved to: {}", output.display());
    println!("   File size: {size} bytes");

    Ok(())
}

fn print_summary(manifest: &Manifest) {
    let metadata = &manifest.metadata;
    let stats = &manifest.statistics;

    println!("=== Recipe Manifest ===");
    println!(
        "  Generated at:        {} UTC",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Generator version:   {}", metadata.generator_version);
    println!("  Format version:      {}", metadata.format_version);
    println!("  Source path:         {}", metadata.source_path);
    println!("  Scanned directories: {}", metadata.scanned_directories.len());

    println!("\n=== Statistics ===");
    println!("  Total recipes:    {}", stats.total_recipes);
    println!("  Visible recipes:  {}", stats.visible_recipes);
    println!("  Hidden recipes:   {}", stats.hidden_recipes);
    println!("  Server recipes:   {}", stats.server_recipes);
    println!("  Client recipes:   {}", stats.client_recipes);
    println!("  Featured (4+):    {}", stats.featured_recipes);
    println!("  Chapter range:    {}", stats.chapter_range);

    println!("\n=== Star Ratings ===");
    for (stars, count) in stats.star_ratings.iter().rev() {
        println!("  {} ({stars} stars): {count} recipes", star_bar(*stars));
    }

    let (visible, hidden): (Vec<&RecipeRecord>, Vec<&RecipeRecord>) =
        manifest.recipes.iter().partition(|r| r.visible_in_overview);

    if !visible.is_empty() {
        println!("\n=== Visible Recipes ===");
        visible.iter().for_each(|r| print_recipe_line(r));
    }
    if !hidden.is_empty() {
        println!("\n=== Hidden Recipes ===");
        hidden.iter().for_each(|r| print_recipe_line(r));
    }
}

fn print_recipe_line(recipe: &RecipeRecord) {
    println!(
        "  {} - {} ({}) {}",
        recipe.route,
        recipe.title,
        recipe.location,
        star_bar(recipe.stars)
    );
}

/// Five-slot star bar, e.g. "★★★☆☆"
pub(crate) fn star_bar(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
