// File: ./src/model/expiration.rs
// Pure expiration classification: days-remaining, urgency buckets and the
// sorted "expiring soon" view. No I/O, no caching; callers re-evaluate on
// every render with a fresh `now`.
use crate::model::FoodItem;
use chrono::{DateTime, Utc};

/// Items whose remaining days are at or under this bound show up in the
/// expiring-soon view.
pub const SOON_WINDOW_DAYS: i64 = 5;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Qualitative urgency derived from days-until-expiration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Urgency {
    /// Expired or expiring today (`days_left <= 0`).
    Critical,
    /// One or two days left.
    Warning,
    /// Still listed, lower urgency (three days and up).
    Normal,
}

impl Urgency {
    pub fn from_days_left(days_left: i64) -> Self {
        if days_left <= 0 {
            Urgency::Critical
        } else if days_left <= 2 {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// One row of the expiring-soon view.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiringItem {
    pub item: FoodItem,
    pub days_left: i64,
    pub urgency: Urgency,
}

/// Whole days until `expires`, rounded up: any partial day remaining still
/// counts as a full day ahead. Instants at or before `now` yield zero or a
/// negative count.
pub fn days_until(expires: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expires - now).num_milliseconds();
    // Ceiling division; div_euclid keeps the rounding direction correct for
    // already-expired (negative) spans.
    (millis + MILLIS_PER_DAY - 1).div_euclid(MILLIS_PER_DAY)
}

/// Human-readable expiration text for a row.
pub fn expiration_label(days_left: i64) -> String {
    if days_left < 0 {
        "Expired".to_string()
    } else if days_left == 0 {
        "Expires today".to_string()
    } else if days_left == 1 {
        "Expires tomorrow".to_string()
    } else {
        format!("Expires in {} days", days_left)
    }
}

/// Computes the expiring-soon view: every item with `days_left <=
/// SOON_WINDOW_DAYS` (expired items included), sorted ascending by
/// expiration instant. The sort is stable, so equal instants keep their
/// input order.
pub fn classify(items: &[FoodItem], now: DateTime<Utc>) -> Vec<ExpiringItem> {
    let mut expiring: Vec<ExpiringItem> = items
        .iter()
        .filter_map(|item| {
            let days_left = days_until(item.expires, now);
            if days_left > SOON_WINDOW_DAYS {
                return None;
            }
            Some(ExpiringItem {
                item: item.clone(),
                days_left,
                urgency: Urgency::from_days_left(days_left),
            })
        })
        .collect();

    expiring.sort_by_key(|e| e.item.expires);
    expiring
}
