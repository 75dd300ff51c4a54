// File: ./src/catalog.rs
// Seed data: the starter inventory, the built-in recipe catalog and the
// starter shopping list. Seeding only happens on a first run with no store
// file on disk, so user data is never overwritten.
use crate::model::{Category, FoodItem, Recipe, ShoppingItem, Unit};
use chrono::{DateTime, Duration, Utc};

/// Starter inventory with expirations spread around `now`, so every urgency
/// bucket and the recipe matcher have something to show out of the box.
pub fn starter_inventory(now: DateTime<Utc>) -> Vec<FoodItem> {
    vec![
        FoodItem::new("Milk", Category::Dairy, now + Duration::days(7), 1.0, Unit::L),
        FoodItem::new("Eggs", Category::Dairy, now + Duration::days(14), 12.0, Unit::Pcs),
        FoodItem::new(
            "Chicken Breast",
            Category::Meat,
            now + Duration::days(3),
            500.0,
            Unit::G,
        ),
        FoodItem::new("Apples", Category::Fruits, now + Duration::days(10), 6.0, Unit::Pcs),
        FoodItem::new("Yogurt", Category::Dairy, now + Duration::days(5), 4.0, Unit::Pcs),
        FoodItem::new(
            "Tomatoes",
            Category::Vegetables,
            now + Duration::days(6),
            4.0,
            Unit::Pcs,
        ),
        FoodItem::new(
            "Orange Juice",
            Category::Beverages,
            now + Duration::days(8),
            1.0,
            Unit::L,
        ),
        FoodItem::new(
            "Lettuce",
            Category::Vegetables,
            now + Duration::days(4),
            1.0,
            Unit::Pcs,
        ),
        FoodItem::new(
            "Pasta Leftovers",
            Category::Leftovers,
            now + Duration::days(2),
            1.0,
            Unit::Pack,
        ),
    ]
}

/// The read-only recipe catalog supplied at startup.
pub fn recipe_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Vegetable Omelette",
            vec![
                "Eggs".to_string(),
                "Tomatoes".to_string(),
                "Lettuce".to_string(),
                "Milk".to_string(),
            ],
            "Beat eggs with milk, pour into a hot pan, add chopped vegetables, cook until set.",
            15,
        ),
        Recipe::new(
            "Chicken Salad",
            vec![
                "Chicken Breast".to_string(),
                "Lettuce".to_string(),
                "Tomatoes".to_string(),
            ],
            "Cook chicken, slice it, mix with chopped vegetables.",
            25,
        ),
        Recipe::new(
            "Fruit Yogurt",
            vec!["Yogurt".to_string(), "Apples".to_string()],
            "Dice apples, mix with yogurt.",
            5,
        ),
        Recipe::new(
            "Pasta with Chicken",
            vec!["Pasta Leftovers".to_string(), "Chicken Breast".to_string()],
            "Heat pasta, cook and slice chicken, mix together.",
            20,
        ),
    ]
}

/// Starter shopping list for a fresh install.
pub fn starter_shopping_list() -> Vec<ShoppingItem> {
    vec![
        ShoppingItem::new("Milk"),
        ShoppingItem::new("Eggs"),
        ShoppingItem::new("Bread"),
    ]
}
