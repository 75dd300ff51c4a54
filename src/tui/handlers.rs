// File: ./src/tui/handlers.rs
// Key handling for the TUI. Handlers mutate the state directly and return
// an Action only when the main loop itself has to react (quit).
use crate::config::AppTheme;
use crate::model::display::ItemDisplay;
use crate::model::parser;
use crate::tui::action::{Action, Panel};
use crate::tui::state::{AppState, InputMode};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use strum::IntoEnumIterator;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::AddingItem => {
            handle_input_mode(key, state, submit_add_item);
            None
        }
        InputMode::Searching => {
            handle_input_mode(key, state, submit_search);
            None
        }
        InputMode::AddingShoppingItem => {
            handle_input_mode(key, state, submit_add_shopping_item);
            None
        }
    }
}

fn handle_normal_mode(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Char('t') => cycle_theme(state),
        KeyCode::Tab => state.next_panel(),
        KeyCode::BackTab => state.previous_panel(),
        KeyCode::Char('1') => state.select_panel(Panel::Inventory),
        KeyCode::Char('2') => state.select_panel(Panel::Expiring),
        KeyCode::Char('3') => state.select_panel(Panel::Recipes),
        KeyCode::Char('4') => state.select_panel(Panel::Shopping),
        KeyCode::Char('5') => state.select_panel(Panel::Temperature),
        KeyCode::Char('j') | KeyCode::Down => state.next(),
        KeyCode::Char('k') | KeyCode::Up => state.previous(),
        _ => match state.panel {
            Panel::Inventory => handle_inventory_keys(key, state),
            Panel::Shopping => handle_shopping_keys(key, state),
            Panel::Temperature => handle_temperature_keys(key, state),
            Panel::Expiring | Panel::Recipes => {}
        },
    }
    None
}

fn handle_inventory_keys(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('a') => {
            state.editing_id = None;
            state.enter_input(InputMode::AddingItem, "");
        }
        KeyCode::Char('e') => {
            if let Some(item) = selected_inventory_item(state) {
                let prefill = parser::to_smart_string(&item);
                state.editing_id = Some(item.id);
                state.enter_input(InputMode::AddingItem, &prefill);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(item) = selected_inventory_item(state) {
                let ctx = state.ctx.clone();
                if state.inventory.remove_item(ctx.as_ref(), &item.id).is_some() {
                    state.message = format!("Removed {}", item.name);
                    state.previous();
                }
            }
        }
        KeyCode::Char('/') => {
            let query = state.search_query.clone();
            state.enter_input(InputMode::Searching, &query);
        }
        KeyCode::Char('c') => {
            state.cycle_category_filter();
        }
        _ => {}
    }
}

fn handle_shopping_keys(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('a') => state.enter_input(InputMode::AddingShoppingItem, ""),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(idx) = state.list_state.selected()
                && let Some(item) = state.shopping.items.get(idx).cloned()
            {
                let ctx = state.ctx.clone();
                state.shopping.toggle_item(ctx.as_ref(), &item.id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(idx) = state.list_state.selected()
                && let Some(item) = state.shopping.items.get(idx).cloned()
            {
                let ctx = state.ctx.clone();
                if state.shopping.remove_item(ctx.as_ref(), &item.id).is_some() {
                    state.message = format!("{} removed from your shopping list", item.name);
                    state.previous();
                }
            }
        }
        KeyCode::Char('C') => {
            let ctx = state.ctx.clone();
            let removed = state.shopping.clear_completed(ctx.as_ref());
            if removed > 0 {
                state.message = format!("{} completed items removed from your list", removed);
                state.reset_selection();
            }
        }
        _ => {}
    }
}

fn handle_temperature_keys(key: KeyEvent, state: &mut AppState) {
    let row = state.list_state.selected().unwrap_or(0);
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            match row {
                0 => state.settings.adjust_fridge_temp(-1),
                1 => state.settings.adjust_freezer_temp(-1),
                _ => return,
            }
            state.persist_settings();
            state.message = temperature_message(state, row);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            match row {
                0 => state.settings.adjust_fridge_temp(1),
                1 => state.settings.adjust_freezer_temp(1),
                _ => return,
            }
            state.persist_settings();
            state.message = temperature_message(state, row);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            match row {
                2 => {
                    state.settings.toggle_power_saving();
                    state.message = if state.settings.power_saving {
                        "Refrigerator is now in power saving mode".to_string()
                    } else {
                        "Regular power mode is now active".to_string()
                    };
                }
                3 => {
                    state.settings.toggle_quick_cool();
                    state.message = if state.settings.quick_cool {
                        "Quick cool mode will rapidly lower temperature".to_string()
                    } else {
                        "Regular cooling mode is now active".to_string()
                    };
                }
                _ => return,
            }
            state.persist_settings();
        }
        _ => {}
    }
}

fn cycle_theme(state: &mut AppState) {
    let all: Vec<AppTheme> = AppTheme::iter().collect();
    let idx = all
        .iter()
        .position(|t| *t == state.config.theme)
        .unwrap_or(0);
    state.config.theme = all[(idx + 1) % all.len()];
    state.message = format!("Theme: {}", state.config.theme);
    if let Err(e) = state.config.save(state.ctx.as_ref()) {
        log::warn!("Could not save config: {}", e);
    }
}

fn temperature_message(state: &AppState, row: usize) -> String {
    match row {
        0 => format!("Fridge temperature set to {}°C", state.settings.fridge_temp),
        _ => format!("Freezer temperature set to {}°C", state.settings.freezer_temp),
    }
}

// --- Input modes ---

fn handle_input_mode(key: KeyEvent, state: &mut AppState, submit: fn(&mut AppState)) {
    match key.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.cursor_left(),
        KeyCode::Right => state.cursor_right(),
        KeyCode::Char(c) => state.insert_char(c),
        _ => {}
    }
}

fn submit_add_item(state: &mut AppState) {
    let item = parser::parse_smart_input(&state.input_buffer, Utc::now());
    if item.name.trim().is_empty() {
        state.message = "Item name cannot be empty".to_string();
        return;
    }

    let ctx = state.ctx.clone();
    // Editing replaces the stored item wholesale; there is no in-place edit.
    if let Some(old_id) = state.editing_id.take() {
        state.inventory.remove_item(ctx.as_ref(), &old_id);
    }
    state.message = format!("{} ({}) added", item.name, item.quantity_label());
    state.inventory.add_item(ctx.as_ref(), item);
    state.cancel_input();
}

fn submit_search(state: &mut AppState) {
    state.search_query = state.input_buffer.clone();
    state.mode = InputMode::Normal;
    state.input_buffer.clear();
    state.cursor_position = 0;
    state.reset_selection();
}

fn submit_add_shopping_item(state: &mut AppState) {
    let name = state.input_buffer.clone();
    let ctx = state.ctx.clone();
    match state.shopping.add_item(ctx.as_ref(), &name) {
        Some(item) => state.message = format!("{} added to your shopping list", item.name),
        None => state.message = "Item name cannot be empty".to_string(),
    }
    state.cancel_input();
}

fn selected_inventory_item(state: &AppState) -> Option<crate::model::FoodItem> {
    let idx = state.list_state.selected()?;
    state.visible_inventory().get(idx).cloned()
}
