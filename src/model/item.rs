// File: ./src/model/item.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;
use uuid::Uuid;

fn default_id() -> String {
    Uuid::new_v4().to_string()
}

/// Storage category of a food item. Closed set; free-form strings from the
/// input layer are parsed through `FromStr` and rejected if unknown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Meat,
    Beverages,
    Leftovers,
    Condiments,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Fruits => write!(f, "fruits"),
            Category::Vegetables => write!(f, "vegetables"),
            Category::Dairy => write!(f, "dairy"),
            Category::Meat => write!(f, "meat"),
            Category::Beverages => write!(f, "beverages"),
            Category::Leftovers => write!(f, "leftovers"),
            Category::Condiments => write!(f, "condiments"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fruits" => Ok(Category::Fruits),
            "vegetables" => Ok(Category::Vegetables),
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "beverages" => Ok(Category::Beverages),
            "leftovers" => Ok(Category::Leftovers),
            "condiments" => Ok(Category::Condiments),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Measurement unit for item quantities.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Pcs,
    Kg,
    G,
    L,
    Ml,
    Pack,
}

impl Unit {
    /// The token used in smart input and table rendering ("500 g", "2kg").
    pub fn token(&self) -> &'static str {
        match self {
            Unit::Pcs => "pcs",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pack => "pack",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pcs" => Ok(Unit::Pcs),
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            "pack" => Ok(Unit::Pack),
            other => Err(format!("Unknown unit: {}", other)),
        }
    }
}

/// A single tracked food item. Created through the add-item input, removed
/// explicitly; there is no in-place edit of a stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default = "default_id")]
    pub id: String,
    pub name: String,
    pub category: Category,
    // Serialized as RFC 3339 text; deserialization restores a real instant.
    pub expires: DateTime<Utc>,
    pub quantity: f64,
    pub unit: Unit,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        expires: DateTime<Utc>,
        quantity: f64,
        unit: Unit,
    ) -> Self {
        Self {
            id: default_id(),
            name: name.into(),
            category,
            expires,
            quantity,
            unit,
        }
    }
}

/// Read-only recipe reference data, supplied by the catalog at startup.
/// Ingredients are free-text names matched case-insensitively against the
/// inventory (see `model::matcher`), never by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "default_id")]
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub cooking_time_mins: u32,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
        cooking_time_mins: u32,
    ) -> Self {
        Self {
            id: default_id(),
            name: name.into(),
            ingredients,
            instructions: instructions.into(),
            cooking_time_mins,
        }
    }
}

/// One line of the shopping list. Independent of FoodItem and Recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    #[serde(default = "default_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: default_id(),
            name: name.into(),
            completed: false,
        }
    }
}
