// File: ./src/model/display.rs
use crate::model::expiration::Urgency;
use crate::model::parser::format_amount;
use crate::model::{FoodItem, ShoppingItem};

pub trait ItemDisplay {
    fn quantity_label(&self) -> String;
    fn expires_label(&self) -> String;
}

impl ItemDisplay for FoodItem {
    /// "500 g", "1 l", "12 pcs" — amount without spurious fraction digits.
    fn quantity_label(&self) -> String {
        format!("{} {}", format_amount(self.quantity), self.unit)
    }

    /// "Aug 12, 2026" — the date shown in the inventory table and the
    /// expiration tracker rows.
    fn expires_label(&self) -> String {
        self.expires.format("%b %d, %Y").to_string()
    }
}

pub trait ShoppingDisplay {
    fn checkbox_symbol(&self) -> &'static str;
}

impl ShoppingDisplay for ShoppingItem {
    fn checkbox_symbol(&self) -> &'static str {
        if self.completed { "[✔]" } else { "[ ]" }
    }
}

/// Urgency tag shown next to an expiring row; the view also maps these to
/// colors.
pub fn urgency_label(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Critical => "critical",
        Urgency::Warning => "warning",
        Urgency::Normal => "normal",
    }
}
