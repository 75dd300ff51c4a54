// File: src/model/parser.rs
// Smart input for the add-item line. One line describes a whole item:
//
//   Milk 1l dairy @2026-08-12
//   Chicken Breast 500g meat @3d
//   Apples 6pcs fruits @tomorrow
//
// Leading free text becomes the name. `<amount><unit>` (or "<amount> <unit>")
// sets quantity and unit, a bare category word sets the category, and an
// `@`-prefixed token sets the expiration date. Unrecognized tokens stay part
// of the name. Parsing never fails; missing pieces fall back to defaults
// (1 pcs, fruits, expiring today) and blank names are rejected upstream.
use crate::model::{Category, FoodItem, Unit};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::str::FromStr;

/// Parses an `@` date token: `@2026-08-12`, `@today`, `@tomorrow`, `@3d`,
/// `@2w`. Date-only values expire at the end of that day.
fn parse_smart_date(token: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let end_of_day = |d: NaiveDate| d.and_hms_opt(23, 59, 59).unwrap().and_utc();

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(end_of_day(date));
    }

    let today = now.date_naive();
    match token {
        "today" => return Some(end_of_day(today)),
        "tomorrow" => return Some(end_of_day(today + Duration::days(1))),
        _ => {}
    }

    let offset_days = if let Some(n) = token.strip_suffix('d') {
        n.parse::<i64>().ok()
    } else if let Some(n) = token.strip_suffix('w') {
        n.parse::<i64>().ok().map(|w| w * 7)
    } else {
        None
    };
    offset_days.map(|days| end_of_day(today + Duration::days(days)))
}

/// Splits "500g" / "1.5kg" / "12pcs" into amount and unit. The numeric part
/// must be a positive number and the remainder a known unit token.
fn parse_amount_and_unit(token: &str) -> Option<(f64, Unit)> {
    let split = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|&idx| idx > 0)?;
    let (num, rest) = token.split_at(split);
    let amount: f64 = num.parse().ok()?;
    if amount <= 0.0 {
        return None;
    }
    let unit = Unit::from_str(rest).ok()?;
    Some((amount, unit))
}

fn parse_bare_amount(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|a| *a > 0.0)
}

/// Parses one smart-input line into a fresh FoodItem.
pub fn parse_smart_input(input: &str, now: DateTime<Utc>) -> FoodItem {
    let mut name_words: Vec<&str> = Vec::new();
    let mut category = Category::Fruits;
    let mut quantity = 1.0;
    let mut unit = Unit::Pcs;
    let mut expires = now;

    let words: Vec<&str> = input.split_whitespace().collect();
    let mut i = 0;
    while i < words.len() {
        let word = words[i];

        if let Some(date_token) = word.strip_prefix('@') {
            if let Some(dt) = parse_smart_date(date_token, now) {
                expires = dt;
                i += 1;
                continue;
            }
        }

        if let Some((amount, parsed_unit)) = parse_amount_and_unit(word) {
            quantity = amount;
            unit = parsed_unit;
            i += 1;
            continue;
        }

        // Two-token form: "500 g", "1.5 kg".
        if let Some(amount) = parse_bare_amount(word)
            && i + 1 < words.len()
            && let Ok(parsed_unit) = Unit::from_str(words[i + 1])
        {
            quantity = amount;
            unit = parsed_unit;
            i += 2;
            continue;
        }

        if let Ok(cat) = Category::from_str(word) {
            category = cat;
            i += 1;
            continue;
        }

        name_words.push(word);
        i += 1;
    }

    FoodItem::new(name_words.join(" "), category, expires, quantity, unit)
}

/// Formats a quantity without a spurious fraction ("1", "1.5", "500").
pub fn format_amount(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Reconstructs the smart-input line for an existing item (used to pre-fill
/// the edit buffer).
pub fn to_smart_string(item: &FoodItem) -> String {
    format!(
        "{} {}{} {} @{}",
        item.name,
        format_amount(item.quantity),
        item.unit,
        item.category,
        item.expires.format("%Y-%m-%d"),
    )
}
