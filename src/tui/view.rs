// File: src/tui/view.rs
use crate::config::AppTheme;
use crate::model::display::{ItemDisplay, ShoppingDisplay, urgency_label};
use crate::model::expiration::Urgency;
use crate::model::expiration::expiration_label;
use crate::settings::{FREEZER_TEMP_MAX, FREEZER_TEMP_MIN, FRIDGE_TEMP_MAX, FRIDGE_TEMP_MIN};
use crate::tui::action::Panel;
use crate::tui::state::{AppState, InputMode};
use unicode_width::UnicodeWidthStr;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
};

fn accent(state: &AppState) -> Color {
    match state.config.theme {
        AppTheme::FrostDark => Color::Cyan,
        AppTheme::Light => Color::Blue,
        AppTheme::Dark => Color::White,
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab:Switch Panel  1-5:Jump  t:Theme  ?:Toggle Help  q:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " NAVIGATION ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k:Up/Down"),
        ]),
        Line::from(vec![
            Span::styled(
                " INVENTORY ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add  e:Edit  d:Delete  /:Search  c:Cycle Category"),
        ]),
        Line::from(vec![
            Span::styled("           ", Style::default()), // Indent alignment
            Span::raw("Smart input: Milk 1l dairy @2026-08-12 (see --help)"),
        ]),
        Line::from(vec![
            Span::styled(
                " SHOPPING ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" a:Add  Space:Toggle Done  d:Delete  C:Clear Completed"),
        ]),
        Line::from(vec![
            Span::styled(
                " TEMPERATURE ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" h/l:Adjust Selected  Space:Toggle Power Saving / Quick Cool"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), footer_height])
        .split(f.area());

    // --- Tabs ---
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .map(|p| Line::from(p.title()))
        .collect();
    let selected = Panel::ALL.iter().position(|p| *p == state.panel).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" Frigo "))
        .highlight_style(
            Style::default()
                .fg(accent(state))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, v_chunks[0]);

    // --- Active panel ---
    match state.panel {
        Panel::Inventory => draw_inventory(f, state, v_chunks[1]),
        Panel::Expiring => draw_expiring(f, state, v_chunks[1]),
        Panel::Recipes => draw_recipes(f, state, v_chunks[1]),
        Panel::Shopping => draw_shopping(f, state, v_chunks[1]),
        Panel::Temperature => draw_temperature(f, state, v_chunks[1]),
    }

    // --- Footer ---
    if state.show_full_help {
        let help = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(help, v_chunks[2]);
    } else {
        draw_footer(f, state, v_chunks[2]);
    }
}

fn draw_inventory(f: &mut Frame, state: &mut AppState, area: Rect) {
    let items = state.visible_inventory();

    let mut title = String::from(" Food Inventory ");
    if !state.search_query.is_empty() {
        title.push_str(&format!("[search: {}] ", state.search_query));
    }
    if let Some(cat) = state.category_filter {
        title.push_str(&format!("[{}] ", cat));
    }

    let header = Row::new(vec!["Name", "Category", "Qty", "Expires", ""])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let now = chrono::Utc::now();
    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            let days_left = crate::model::expiration::days_until(item.expires, now);
            let status = if days_left <= crate::model::expiration::SOON_WINDOW_DAYS {
                expiration_label(days_left)
            } else {
                String::new()
            };
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(item.category.to_string()),
                Cell::from(item.quantity_label()),
                Cell::from(item.expires_label()),
                Cell::from(status),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut state.table_state);
}

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Critical => Color::Red,
        Urgency::Warning => Color::Yellow,
        Urgency::Normal => Color::Blue,
    }
}

fn draw_expiring(f: &mut Frame, state: &mut AppState, area: Rect) {
    let expiring = state.expiring_view();

    if expiring.is_empty() {
        let empty = Paragraph::new("No items expiring soon.\nAll your food items are fresh!")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Expiration Tracker "),
            );
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = expiring
        .iter()
        .map(|e| {
            let style = Style::default().fg(urgency_color(e.urgency));
            let marker = if e.days_left <= 2 { "⚠ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<24}", e.item.name), style),
                Span::styled(format!("{:<14}", e.item.expires_label()), style),
                Span::styled(
                    format!("{:<20}", expiration_label(e.days_left)),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("[{}]", urgency_label(e.urgency)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Expiration Tracker "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_recipes(f: &mut Frame, state: &mut AppState, area: Rect) {
    let matches = state.recipe_view();

    if matches.ready.is_empty() && matches.almost_ready.is_empty() {
        let empty = Paragraph::new(
            "No recipe suggestions available.\nAdd more ingredients to get recipe suggestions.",
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recipe Suggestions "),
        );
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Ready recipes first, almost-ready after; selection indexes this order.
    let mut rows: Vec<ListItem> = Vec::new();
    for recipe in &matches.ready {
        rows.push(ListItem::new(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::styled(recipe.name.clone(), Style::default().fg(Color::Green)),
            Span::raw(format!("  ({} mins)", recipe.cooking_time_mins)),
        ])));
    }
    for partial in &matches.almost_ready {
        rows.push(ListItem::new(Line::from(vec![
            Span::styled("~ ", Style::default().fg(Color::Yellow)),
            Span::styled(partial.recipe.name.clone(), Style::default().fg(Color::Yellow)),
            Span::raw(format!(
                "  ({} mins, {} missing)",
                partial.recipe.cooking_time_mins,
                partial.missing.len()
            )),
        ])));
    }

    let title = format!(
        " Recipe Suggestions — {} ready, {} almost ",
        matches.ready.len(),
        matches.almost_ready.len()
    );
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, chunks[0], &mut state.list_state);

    // Details for the selected recipe.
    let selected = state.list_state.selected().unwrap_or(0);
    let (recipe, missing) = if selected < matches.ready.len() {
        (matches.ready.get(selected), Vec::new())
    } else {
        match matches.almost_ready.get(selected - matches.ready.len()) {
            Some(p) => (Some(&p.recipe), p.missing.clone()),
            None => (None, Vec::new()),
        }
    };

    let mut detail_lines: Vec<Line> = Vec::new();
    if let Some(recipe) = recipe {
        detail_lines.push(Line::from(Span::styled(
            "Ingredients",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for ing in &recipe.ingredients {
            if missing.contains(ing) {
                detail_lines.push(Line::from(Span::styled(
                    format!(" - {} (missing)", ing),
                    Style::default().fg(Color::Red),
                )));
            } else {
                detail_lines.push(Line::from(format!(" - {}", ing)));
            }
        }
        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from(Span::styled(
            "Instructions",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        detail_lines.push(Line::from(recipe.instructions.clone()));
        detail_lines.push(Line::from(""));
        detail_lines.push(Line::from(format!(
            "Cooking time: {} minutes",
            recipe.cooking_time_mins
        )));
    }

    let details = Paragraph::new(detail_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Recipe "));
    f.render_widget(details, chunks[1]);
}

fn draw_shopping(f: &mut Frame, state: &mut AppState, area: Rect) {
    let rows: Vec<ListItem> = state
        .shopping
        .items
        .iter()
        .map(|item| {
            let mut style = Style::default();
            if item.completed {
                style = style.fg(Color::DarkGray);
                if state.config.strikethrough_completed {
                    style = style.add_modifier(Modifier::CROSSED_OUT);
                }
            }
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", item.checkbox_symbol())),
                Span::styled(item.name.clone(), style),
            ]))
        })
        .collect();

    let title = format!(" Shopping List ({} items) ", state.shopping.items.len());
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_temperature(f: &mut Frame, state: &mut AppState, area: Rect) {
    let s = &state.settings;
    let rows = vec![
        ListItem::new(Line::from(vec![
            Span::raw(format!("{:<22}", "Fridge Temperature")),
            Span::styled(
                format!("{}°C", s.fridge_temp),
                Style::default()
                    .fg(accent(state))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   ({}..{}°C)", FRIDGE_TEMP_MIN, FRIDGE_TEMP_MAX)),
        ])),
        ListItem::new(Line::from(vec![
            Span::raw(format!("{:<22}", "Freezer Temperature")),
            Span::styled(
                format!("{}°C", s.freezer_temp),
                Style::default()
                    .fg(accent(state))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   ({}..{}°C)", FREEZER_TEMP_MIN, FREEZER_TEMP_MAX)),
        ])),
        ListItem::new(Line::from(vec![
            Span::raw(format!("{:<22}", "Power Saving Mode")),
            Span::styled(
                if s.power_saving { "on" } else { "off" },
                Style::default().fg(if s.power_saving {
                    Color::Green
                } else {
                    Color::DarkGray
                }),
            ),
        ])),
        ListItem::new(Line::from(vec![
            Span::raw(format!("{:<22}", "Quick Cool")),
            Span::styled(
                if s.quick_cool { "on" } else { "off" },
                Style::default().fg(if s.quick_cool {
                    Color::Green
                } else {
                    Color::DarkGray
                }),
            ),
        ])),
    ];

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Temperature Control "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let (title, content) = match state.mode {
        InputMode::Normal => (
            " Status ",
            Line::from(vec![
                Span::raw(state.message.clone()),
                Span::styled(
                    "   (?:help  q:quit)",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ),
        InputMode::AddingItem => (
            " Add Item (smart input, Enter to save, Esc to cancel) ",
            Line::from(state.input_buffer.clone()),
        ),
        InputMode::Searching => (
            " Search (Enter to apply, Esc to cancel) ",
            Line::from(state.input_buffer.clone()),
        ),
        InputMode::AddingShoppingItem => (
            " Add Shopping Item (Enter to save, Esc to cancel) ",
            Line::from(state.input_buffer.clone()),
        ),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(footer, area);

    if state.mode != InputMode::Normal {
        // Place the terminal cursor after the last edited glyph.
        let before_cursor: String = state
            .input_buffer
            .chars()
            .take(state.cursor_position)
            .collect();
        let x = area.x + 1 + before_cursor.width() as u16;
        let y = area.y + 1;
        f.set_cursor_position((x, y));
    }
}
