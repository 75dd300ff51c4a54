// Logic for matching recipes against the current inventory.
//
// An ingredient counts as available when its lower-cased text appears as a
// substring of some lower-cased inventory item name ("Eggs" is satisfied by
// "Free-range eggs"). The check runs in that direction only; an inventory
// name is never searched for inside an ingredient. This is the intended
// matching heuristic, not a candidate for exact or fuzzy matching.
//
// A recipe with every ingredient available is ready. A recipe that misses
// some but has at least half (rounded up) available is almost ready and
// reported together with its missing ingredients, in recipe order. Anything
// below half is omitted.

use crate::model::{FoodItem, Recipe};

/// A recipe that is close to cookable, with the gap spelled out.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialMatch {
    pub recipe: Recipe,
    /// Unavailable ingredients, preserving the recipe's ingredient order.
    pub missing: Vec<String>,
}

/// Result of matching a catalog against an inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeMatches {
    pub ready: Vec<Recipe>,
    pub almost_ready: Vec<PartialMatch>,
}

fn is_available(ingredient: &str, inventory_names: &[String]) -> bool {
    let wanted = ingredient.to_lowercase();
    inventory_names.iter().any(|name| name.contains(&wanted))
}

/// Recomputes the full match result for `(recipes, items)`. Pure: inputs are
/// untouched and the output is freshly allocated on every call.
pub fn match_recipes(recipes: &[Recipe], items: &[FoodItem]) -> RecipeMatches {
    let inventory_names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();

    let mut matches = RecipeMatches::default();

    for recipe in recipes {
        let available_count = recipe
            .ingredients
            .iter()
            .filter(|ing| is_available(ing, &inventory_names))
            .count();
        let total = recipe.ingredients.len();

        // The empty conjunction holds, so an ingredient-less recipe is ready.
        if available_count == total {
            matches.ready.push(recipe.clone());
            continue;
        }

        if available_count >= total.div_ceil(2) {
            let missing = recipe
                .ingredients
                .iter()
                .filter(|ing| !is_available(ing, &inventory_names))
                .cloned()
                .collect();
            matches.almost_ready.push(PartialMatch {
                recipe: recipe.clone(),
                missing,
            });
        }
    }

    matches
}

/// Missing ingredients for a single recipe against the inventory, in recipe
/// order. Empty for a ready recipe.
pub fn missing_ingredients(recipe: &Recipe, items: &[FoodItem]) -> Vec<String> {
    let inventory_names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();
    recipe
        .ingredients
        .iter()
        .filter(|ing| !is_available(ing, &inventory_names))
        .cloned()
        .collect()
}
