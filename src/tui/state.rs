// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::catalog;
use crate::config::Config;
use crate::context::AppContext;
use crate::model::expiration::{self, ExpiringItem};
use crate::model::matcher::{self, RecipeMatches};
use crate::model::{Category, FoodItem, Recipe};
use crate::settings::RefrigeratorSettings;
use crate::storage::{KEY_FOOD_ITEMS, KEY_SETTINGS, KEY_SHOPPING_LIST, LocalStore};
use crate::store::{InventoryFilter, InventoryStore, ShoppingList};
use crate::tui::action::Panel;
use chrono::Utc;
use ratatui::widgets::{ListState, TableState};
use std::sync::Arc;
use strum::IntoEnumIterator;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    AddingItem,
    Searching,
    AddingShoppingItem,
}

/// Rows of the temperature panel, in display order.
pub const TEMPERATURE_ROWS: usize = 4;

pub struct AppState {
    // Data
    pub ctx: Arc<dyn AppContext>,
    pub config: Config,
    pub inventory: InventoryStore,
    pub shopping: ShoppingList,
    pub settings: RefrigeratorSettings,
    pub recipes: Vec<Recipe>,

    // UI State
    pub panel: Panel,
    pub mode: InputMode,
    pub list_state: ListState,
    /// Scroll state for the inventory table; selection mirrors `list_state`.
    pub table_state: TableState,
    pub message: String,
    pub show_full_help: bool,

    // Filter State
    pub search_query: String,
    pub category_filter: Option<Category>,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,
    /// When set, the add-item submit replaces this item instead of only
    /// appending (stored items are never edited in place).
    pub editing_id: Option<String>,
}

impl AppState {
    /// Creates the full application state: loads the persisted stores and
    /// seeds the demo data on a first run when the config allows it.
    pub fn new_with_ctx(ctx: Arc<dyn AppContext>, config: Config) -> Self {
        let first_run = !LocalStore::exists(ctx.as_ref(), KEY_FOOD_ITEMS);

        let mut inventory = InventoryStore::load(ctx.as_ref());
        let mut shopping = ShoppingList::load(ctx.as_ref());
        let settings: RefrigeratorSettings =
            LocalStore::load(ctx.as_ref(), KEY_SETTINGS, RefrigeratorSettings::default());

        if first_run && config.seed_demo_data {
            let now = Utc::now();
            inventory.items = catalog::starter_inventory(now);
            inventory.persist(ctx.as_ref());
            if !LocalStore::exists(ctx.as_ref(), KEY_SHOPPING_LIST) {
                shopping.items = catalog::starter_shopping_list();
                shopping.persist(ctx.as_ref());
            }
        }

        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            ctx,
            config,
            inventory,
            shopping,
            settings,
            recipes: catalog::recipe_catalog(),
            panel: Panel::Inventory,
            mode: InputMode::Normal,
            list_state,
            table_state,
            message: "Ready.".to_string(),
            show_full_help: false,
            search_query: String::new(),
            category_filter: None,
            input_buffer: String::new(),
            cursor_position: 0,
            editing_id: None,
        }
    }

    // --- Derived views (recomputed per frame; the core is pure) ---

    /// Inventory rows after search and category filtering.
    pub fn visible_inventory(&self) -> Vec<FoodItem> {
        self.inventory.filter(InventoryFilter {
            search_term: &self.search_query,
            category: self.category_filter,
        })
    }

    /// The expiring-soon view for the current wall clock.
    pub fn expiring_view(&self) -> Vec<ExpiringItem> {
        expiration::classify(&self.inventory.items, Utc::now())
    }

    /// Recipe matching against the current inventory.
    pub fn recipe_view(&self) -> RecipeMatches {
        matcher::match_recipes(&self.recipes, &self.inventory.items)
    }

    fn current_list_len(&self) -> usize {
        match self.panel {
            Panel::Inventory => self.visible_inventory().len(),
            Panel::Expiring => self.expiring_view().len(),
            Panel::Recipes => {
                let matches = self.recipe_view();
                matches.ready.len() + matches.almost_ready.len()
            }
            Panel::Shopping => self.shopping.items.len(),
            Panel::Temperature => TEMPERATURE_ROWS,
        }
    }

    // --- Navigation ---

    fn select_index(&mut self, idx: Option<usize>) {
        self.list_state.select(idx);
        self.table_state.select(idx);
    }

    pub fn next(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            self.select_index(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select_index(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            self.select_index(None);
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.select_index(Some(i));
    }

    pub fn select_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            self.panel = panel;
            self.select_index(Some(0));
        }
    }

    pub fn next_panel(&mut self) {
        self.select_panel(self.panel.next());
    }

    pub fn previous_panel(&mut self) {
        self.select_panel(self.panel.previous());
    }

    /// Cycles the inventory category filter: All -> each category -> All.
    pub fn cycle_category_filter(&mut self) {
        let all: Vec<Category> = Category::iter().collect();
        self.category_filter = match self.category_filter {
            None => Some(all[0]),
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0);
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            }
        };
        self.select_index(Some(0));
    }

    pub fn reset_selection(&mut self) {
        self.select_index(Some(0));
    }

    // --- Persistence helpers ---

    pub fn persist_settings(&self) {
        LocalStore::save_or_log(self.ctx.as_ref(), KEY_SETTINGS, &self.settings);
    }

    // --- Input buffer editing ---

    pub fn enter_input(&mut self, mode: InputMode, prefill: &str) {
        self.mode = mode;
        self.input_buffer = prefill.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.editing_id = None;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let byte_idx = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.input_buffer.remove(byte_idx);
        self.cursor_position -= 1;
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.input_buffer.chars().count();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }
}
