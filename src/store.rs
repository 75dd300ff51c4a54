// File: src/store.rs
use crate::context::AppContext;
use crate::model::{Category, FoodItem, ShoppingItem};
use crate::storage::{KEY_FOOD_ITEMS, KEY_SHOPPING_LIST, LocalStore};

/// In-memory inventory with persistence hooks. Mutations write through to
/// the local store best-effort; the in-memory list stays authoritative for
/// the session either way.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    pub items: Vec<FoodItem>,
}

pub struct InventoryFilter<'a> {
    pub search_term: &'a str,
    pub category: Option<Category>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the persisted inventory; a missing or unreadable file yields an
    /// empty store.
    pub fn load(ctx: &dyn AppContext) -> Self {
        Self {
            items: LocalStore::load(ctx, KEY_FOOD_ITEMS, Vec::new()),
        }
    }

    pub fn persist(&self, ctx: &dyn AppContext) {
        LocalStore::save_or_log(ctx, KEY_FOOD_ITEMS, &self.items);
    }

    pub fn add_item(&mut self, ctx: &dyn AppContext, item: FoodItem) {
        self.items.push(item);
        self.persist(ctx);
    }

    pub fn remove_item(&mut self, ctx: &dyn AppContext, id: &str) -> Option<FoodItem> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(idx);
        self.persist(ctx);
        Some(item)
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Case-insensitive substring search over item names, optionally
    /// restricted to one category. Input order is preserved.
    pub fn filter(&self, options: InventoryFilter) -> Vec<FoodItem> {
        let search_lower = options.search_term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                let matches_search =
                    search_lower.is_empty() || item.name.to_lowercase().contains(&search_lower);
                let matches_category = options
                    .category
                    .map(|c| item.category == c)
                    .unwrap_or(true);
                matches_search && matches_category
            })
            .cloned()
            .collect()
    }
}

/// The shopping list. Same write-through persistence shape as the inventory,
/// under its own store key.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(ctx: &dyn AppContext) -> Self {
        Self {
            items: LocalStore::load(ctx, KEY_SHOPPING_LIST, Vec::new()),
        }
    }

    pub fn persist(&self, ctx: &dyn AppContext) {
        LocalStore::save_or_log(ctx, KEY_SHOPPING_LIST, &self.items);
    }

    pub fn add_item(&mut self, ctx: &dyn AppContext, name: &str) -> Option<ShoppingItem> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let item = ShoppingItem::new(trimmed);
        self.items.push(item.clone());
        self.persist(ctx);
        Some(item)
    }

    /// Flips the completed flag of one entry; other entries are untouched.
    pub fn toggle_item(&mut self, ctx: &dyn AppContext, id: &str) -> Option<ShoppingItem> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.completed = !item.completed;
        let updated = item.clone();
        self.persist(ctx);
        Some(updated)
    }

    pub fn remove_item(&mut self, ctx: &dyn AppContext, id: &str) -> Option<ShoppingItem> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(idx);
        self.persist(ctx);
        Some(item)
    }

    /// Removes every completed entry, returning how many were dropped.
    pub fn clear_completed(&mut self, ctx: &dyn AppContext) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            self.persist(ctx);
        }
        removed
    }
}
