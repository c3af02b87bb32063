//! Aggregate statistics over a recipe set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::recipe::{RecipeRecord, LOCATION_CLIENT, LOCATION_SERVER};

/// Counts derived from the manifest's recipes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestStatistics {
    pub total_recipes: usize,
    pub visible_recipes: usize,
    pub hidden_recipes: usize,
    pub server_recipes: usize,
    pub client_recipes: usize,

    /// Recipes with four or more stars
    pub featured_recipes: usize,

    /// "min-max" over chapter numbers, "0-0" when there are no recipes
    pub chapter_range: String,

    /// Recipe count per star value; only values that occur are present
    pub star_ratings: BTreeMap<u8, usize>,
}

impl ManifestStatistics {
    pub fn from_recipes(recipes: &[RecipeRecord]) -> Self {
        let visible_recipes = recipes.iter().filter(|r| r.visible_in_overview).count();

        let chapter_range = match (
            recipes.iter().map(|r| r.chapter).min(),
            recipes.iter().map(|r| r.chapter).max(),
        ) {
            (Some(min), Some(max)) => format!("{min}-{max}"),
            _ => "0-0".to_string(),
        };

        let mut star_ratings = BTreeMap::new();
        for recipe in recipes {
            *star_ratings.entry(recipe.stars).or_insert(0) += 1;
        }

        Self {
            total_recipes: recipes.len(),
            visible_recipes,
            hidden_recipes: recipes.len() - visible_recipes,
            server_recipes: count_location(recipes, LOCATION_SERVER),
            client_recipes: count_location(recipes, LOCATION_CLIENT),
            featured_recipes: recipes.iter().filter(|r| r.is_featured()).count(),
            chapter_range,
            star_ratings,
        }
    }
}

fn count_location(recipes: &[RecipeRecord], location: &str) -> usize {
    recipes.iter().filter(|r| r.location == location).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::UNKNOWN;
    use pretty_assertions::assert_eq;

    fn recipe(chapter: u32, location: &str, stars: u8, visible: bool) -> RecipeRecord {
        RecipeRecord {
            route: format!("/ch{chapter:02}r01"),
            chapter,
            recipe: 1,
            variant: None,
            location: location.to_string(),
            title: UNKNOWN.to_string(),
            summary: UNKNOWN.to_string(),
            stars,
            visible_in_overview: visible,
            file_path: String::new(),
        }
    }

    #[test]
    fn test_empty_recipe_set() {
        let stats = ManifestStatistics::from_recipes(&[]);

        assert_eq!(stats.total_recipes, 0);
        assert_eq!(stats.chapter_range, "0-0");
        assert!(stats.star_ratings.is_empty());
    }

    #[test]
    fn test_counts() {
        let recipes = vec![
            recipe(3, LOCATION_SERVER, 5, true),
            recipe(1, LOCATION_CLIENT, 4, false),
            recipe(7, LOCATION_CLIENT, 3, true),
            recipe(2, "Shared", 3, true),
        ];

        let stats = ManifestStatistics::from_recipes(&recipes);

        assert_eq!(
            stats,
            ManifestStatistics {
                total_recipes: 4,
                visible_recipes: 3,
                hidden_recipes: 1,
                server_recipes: 1,
                client_recipes: 2,
                featured_recipes: 2,
                chapter_range: "1-7".to_string(),
                star_ratings: BTreeMap::from([(3, 2), (4, 1), (5, 1)]),
            }
        );
    }

    #[test]
    fn test_consistency_invariants() {
        let recipes: Vec<RecipeRecord> = (1..=12)
            .map(|i| {
                let location = if i % 3 == 0 { LOCATION_SERVER } else { LOCATION_CLIENT };
                recipe(i, location, (i % 5 + 1) as u8, i % 4 != 0)
            })
            .collect();

        let stats = ManifestStatistics::from_recipes(&recipes);

        assert_eq!(stats.visible_recipes + stats.hidden_recipes, stats.total_recipes);
        assert_eq!(stats.star_ratings.values().sum::<usize>(), stats.total_recipes);
        assert_eq!(stats.chapter_range, "1-12");
    }

    #[test]
    fn test_single_chapter_range() {
        let stats = ManifestStatistics::from_recipes(&[recipe(4, LOCATION_SERVER, 3, true)]);
        assert_eq!(stats.chapter_range, "4-4");
    }
}
