// File: ./src/tui/action.rs

/// Result of a key handler that the main loop must act on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}

/// The dashboard panels, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Inventory,
    Expiring,
    Recipes,
    Shopping,
    Temperature,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Inventory,
        Panel::Expiring,
        Panel::Recipes,
        Panel::Shopping,
        Panel::Temperature,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Inventory => "Inventory",
            Panel::Expiring => "Expiring",
            Panel::Recipes => "Recipes",
            Panel::Shopping => "Shopping",
            Panel::Temperature => "Temperature",
        }
    }

    pub fn next(&self) -> Panel {
        let idx = Panel::ALL.iter().position(|p| p == self).unwrap_or(0);
        Panel::ALL[(idx + 1) % Panel::ALL.len()]
    }

    pub fn previous(&self) -> Panel {
        let idx = Panel::ALL.iter().position(|p| p == self).unwrap_or(0);
        Panel::ALL[(idx + Panel::ALL.len() - 1) % Panel::ALL.len()]
    }
}
