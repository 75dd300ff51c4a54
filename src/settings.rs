// File: ./src/settings.rs
// The simulated refrigerator's control state. A singleton value: every
// update replaces the whole struct in the store, there is no per-field
// persistence.
use serde::{Deserialize, Serialize};

/// Adjustable fridge compartment range, in °C.
pub const FRIDGE_TEMP_MIN: i8 = 1;
pub const FRIDGE_TEMP_MAX: i8 = 7;

/// Adjustable freezer compartment range, in °C.
pub const FREEZER_TEMP_MIN: i8 = -24;
pub const FREEZER_TEMP_MAX: i8 = -16;

fn default_fridge_temp() -> i8 {
    4
}
fn default_freezer_temp() -> i8 {
    -18
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefrigeratorSettings {
    #[serde(default = "default_fridge_temp")]
    pub fridge_temp: i8,
    #[serde(default = "default_freezer_temp")]
    pub freezer_temp: i8,
    #[serde(default)]
    pub power_saving: bool,
    #[serde(default)]
    pub quick_cool: bool,
}

impl Default for RefrigeratorSettings {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            fridge_temp: 4,
            freezer_temp: -18,
            power_saving: false,
            quick_cool: false,
        }
    }
}

impl RefrigeratorSettings {
    /// Sets the fridge compartment target, clamped to the valid range.
    /// Out-of-domain input is corrected here rather than trusted.
    pub fn set_fridge_temp(&mut self, temp: i8) {
        self.fridge_temp = temp.clamp(FRIDGE_TEMP_MIN, FRIDGE_TEMP_MAX);
    }

    /// Sets the freezer compartment target, clamped to the valid range.
    pub fn set_freezer_temp(&mut self, temp: i8) {
        self.freezer_temp = temp.clamp(FREEZER_TEMP_MIN, FREEZER_TEMP_MAX);
    }

    pub fn adjust_fridge_temp(&mut self, delta: i8) {
        self.set_fridge_temp(self.fridge_temp.saturating_add(delta));
    }

    pub fn adjust_freezer_temp(&mut self, delta: i8) {
        self.set_freezer_temp(self.freezer_temp.saturating_add(delta));
    }

    pub fn toggle_power_saving(&mut self) {
        self.power_saving = !self.power_saving;
    }

    pub fn toggle_quick_cool(&mut self) {
        self.quick_cool = !self.quick_cool;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = RefrigeratorSettings::default();
        assert_eq!(s.fridge_temp, 4);
        assert_eq!(s.freezer_temp, -18);
        assert!(!s.power_saving);
        assert!(!s.quick_cool);
    }

    #[test]
    fn test_clamping() {
        let mut s = RefrigeratorSettings::default();
        s.set_fridge_temp(12);
        assert_eq!(s.fridge_temp, FRIDGE_TEMP_MAX);
        s.set_fridge_temp(-5);
        assert_eq!(s.fridge_temp, FRIDGE_TEMP_MIN);

        s.set_freezer_temp(0);
        assert_eq!(s.freezer_temp, FREEZER_TEMP_MAX);
        s.set_freezer_temp(-40);
        assert_eq!(s.freezer_temp, FREEZER_TEMP_MIN);
    }

    #[test]
    fn test_adjust_saturates_at_bounds() {
        let mut s = RefrigeratorSettings::default();
        for _ in 0..10 {
            s.adjust_fridge_temp(1);
        }
        assert_eq!(s.fridge_temp, FRIDGE_TEMP_MAX);
        for _ in 0..20 {
            s.adjust_freezer_temp(-1);
        }
        assert_eq!(s.freezer_temp, FREEZER_TEMP_MIN);
    }
}
