// Tests for the expiration classification logic.
use chrono::{Duration, TimeZone, Utc};
use frigo::model::expiration::{SOON_WINDOW_DAYS, Urgency, classify, days_until, expiration_label};
use frigo::model::{Category, FoodItem, Unit};

fn item(name: &str, expires: chrono::DateTime<Utc>) -> FoodItem {
    FoodItem::new(name, Category::Dairy, expires, 1.0, Unit::Pcs)
}

#[test]
fn test_inclusion_window() {
    let now = Utc::now();

    let items = vec![
        item("Expired", now - Duration::days(2)),
        item("Today", now),
        item("Edge", now + Duration::days(5)),
        item("Beyond", now + Duration::days(6)),
    ];

    let result = classify(&items, now);
    let names: Vec<&str> = result.iter().map(|e| e.item.name.as_str()).collect();

    // Everything at or under the window is listed, including expired items.
    assert_eq!(names, vec!["Expired", "Today", "Edge"]);
    assert_eq!(result[2].days_left, SOON_WINDOW_DAYS);
}

#[test]
fn test_partial_day_counts_as_full_day() {
    let now = Utc::now();
    assert_eq!(days_until(now + Duration::hours(12), now), 1);
    assert_eq!(days_until(now + Duration::hours(36), now), 2);
    // Exactly five days, to the millisecond, is still day five.
    assert_eq!(days_until(now + Duration::days(5), now), 5);
}

#[test]
fn test_expired_days_are_zero_or_negative() {
    let now = Utc::now();
    assert_eq!(days_until(now, now), 0);
    assert_eq!(days_until(now - Duration::days(1), now), -1);
    // ceil(-2.5) = -2
    assert_eq!(days_until(now - Duration::hours(60), now), -2);
}

#[test]
fn test_sorted_ascending_and_stable() {
    let now = Utc::now();
    let shared_instant = now + Duration::days(2);

    let items = vec![
        item("Later", now + Duration::days(4)),
        item("Tie A", shared_instant),
        item("Tie B", shared_instant),
        item("Soonest", now + Duration::days(1)),
    ];

    let result = classify(&items, now);
    let names: Vec<&str> = result.iter().map(|e| e.item.name.as_str()).collect();

    // Ascending by expiration; the tie keeps input order.
    assert_eq!(names, vec!["Soonest", "Tie A", "Tie B", "Later"]);
}

#[test]
fn test_urgency_buckets() {
    let now = Utc::now();
    let items = vec![
        item("Gone", now - Duration::days(1)),
        item("Today", now),
        item("Soon", now + Duration::hours(30)),
        item("Two days", now + Duration::days(2)),
        item("Four days", now + Duration::days(4)),
    ];

    let result = classify(&items, now);
    let urgencies: Vec<Urgency> = result.iter().map(|e| e.urgency).collect();

    assert_eq!(
        urgencies,
        vec![
            Urgency::Critical,
            Urgency::Critical,
            Urgency::Warning,
            Urgency::Warning,
            Urgency::Normal,
        ]
    );
}

#[test]
fn test_label_mapping_is_exact() {
    assert_eq!(expiration_label(-3), "Expired");
    assert_eq!(expiration_label(-1), "Expired");
    assert_eq!(expiration_label(0), "Expires today");
    assert_eq!(expiration_label(1), "Expires tomorrow");
    assert_eq!(expiration_label(2), "Expires in 2 days");
    assert_eq!(expiration_label(4), "Expires in 4 days");
}

#[test]
fn test_classify_is_pure_and_idempotent() {
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let items = vec![
        item("Milk", now + Duration::days(1)),
        item("Yogurt", now + Duration::days(3)),
    ];
    let snapshot = items.clone();

    let first = classify(&items, now);
    let second = classify(&items, now);

    assert_eq!(first, second);
    // Inputs are untouched.
    assert_eq!(items, snapshot);
}

#[test]
fn test_empty_inventory_yields_empty_view() {
    assert!(classify(&[], Utc::now()).is_empty());
}
