// Tests for the add-item smart input parser.
use chrono::{Duration, TimeZone, Utc};
use frigo::model::parser::{parse_smart_input, to_smart_string};
use frigo::model::{Category, Unit};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

#[test]
fn test_full_line() {
    let item = parse_smart_input("Milk 1l dairy @2026-08-12", now());

    assert_eq!(item.name, "Milk");
    assert_eq!(item.quantity, 1.0);
    assert_eq!(item.unit, Unit::L);
    assert_eq!(item.category, Category::Dairy);
    assert_eq!(item.expires.date_naive().to_string(), "2026-08-12");
}

#[test]
fn test_multi_word_name() {
    let item = parse_smart_input("Chicken Breast 500g meat @3d", now());

    assert_eq!(item.name, "Chicken Breast");
    assert_eq!(item.quantity, 500.0);
    assert_eq!(item.unit, Unit::G);
    assert_eq!(item.category, Category::Meat);
    assert_eq!(
        item.expires.date_naive(),
        now().date_naive() + Duration::days(3)
    );
}

#[test]
fn test_defaults_when_tokens_missing() {
    let item = parse_smart_input("Mystery Jar", now());

    assert_eq!(item.name, "Mystery Jar");
    assert_eq!(item.quantity, 1.0);
    assert_eq!(item.unit, Unit::Pcs);
    assert_eq!(item.category, Category::Fruits);
    assert_eq!(item.expires, now());
}

#[test]
fn test_two_token_quantity() {
    let item = parse_smart_input("Flour 1.5 kg", now());

    assert_eq!(item.name, "Flour");
    assert_eq!(item.quantity, 1.5);
    assert_eq!(item.unit, Unit::Kg);
}

#[test]
fn test_keyword_dates() {
    let today = parse_smart_input("Yogurt @today", now());
    assert_eq!(today.expires.date_naive(), now().date_naive());

    let tomorrow = parse_smart_input("Yogurt @tomorrow", now());
    assert_eq!(
        tomorrow.expires.date_naive(),
        now().date_naive() + Duration::days(1)
    );
}

#[test]
fn test_week_offset() {
    let item = parse_smart_input("Jam 1pack condiments @2w", now());
    assert_eq!(
        item.expires.date_naive(),
        now().date_naive() + Duration::days(14)
    );
    assert_eq!(item.category, Category::Condiments);
    assert_eq!(item.unit, Unit::Pack);
}

#[test]
fn test_unrecognized_tokens_stay_in_name() {
    // A malformed date token is not silently guessed at; it stays in the
    // name where the user can see and fix it.
    let item = parse_smart_input("Cheese @soonish", now());
    assert_eq!(item.name, "Cheese @soonish");
}

#[test]
fn test_blank_input_yields_blank_name() {
    // The boundary (TUI submit) rejects blank names; the parser stays total.
    let item = parse_smart_input("   ", now());
    assert!(item.name.is_empty());
}

#[test]
fn test_smart_string_round_trip() {
    let original = parse_smart_input("Orange Juice 1l beverages @2026-09-01", now());

    let line = to_smart_string(&original);
    assert_eq!(line, "Orange Juice 1l beverages @2026-09-01");

    let reparsed = parse_smart_input(&line, now());
    assert_eq!(reparsed.name, original.name);
    assert_eq!(reparsed.quantity, original.quantity);
    assert_eq!(reparsed.unit, original.unit);
    assert_eq!(reparsed.category, original.category);
    assert_eq!(reparsed.expires.date_naive(), original.expires.date_naive());
}

#[test]
fn test_fractional_quantity_round_trip() {
    let original = parse_smart_input("Mince 0.5kg meat @2d", now());
    assert_eq!(original.quantity, 0.5);

    let line = to_smart_string(&original);
    let reparsed = parse_smart_input(&line, now());
    assert_eq!(reparsed.quantity, 0.5);
    assert_eq!(reparsed.unit, Unit::Kg);
}
