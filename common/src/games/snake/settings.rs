use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::config::check_range;
use crate::defaults::{
    AUTOPILOT_TICK_INTERVAL, DEFAULT_CELL_PIXEL_SIZE, MAX_CELL_PIXEL_SIZE, MAX_COLUMNS, MAX_ROWS,
    MIN_CELL_PIXEL_SIZE, MIN_COLUMNS, MIN_ROWS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub columns: u32,
    pub rows: u32,
    pub cell_pixel_size: u32,
    pub draw_grid: bool,
    pub rule_enforced: bool,
    pub wraparound: bool,
    /// Hands steering to the autopilot.
    pub cheating: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            columns: MIN_COLUMNS,
            rows: MIN_ROWS,
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            draw_grid: true,
            rule_enforced: true,
            wraparound: false,
            cheating: false,
            seed: None,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("columns", self.columns, MIN_COLUMNS, MAX_COLUMNS)?;
        check_range("rows", self.rows, MIN_ROWS, MAX_ROWS)?;
        check_range("cell_pixel_size", self.cell_pixel_size, MIN_CELL_PIXEL_SIZE, MAX_CELL_PIXEL_SIZE)?;
        Ok(())
    }
}

/// Pause between ticks.
///
/// Hand-steered games slow down with larger cells so the snake crosses the
/// screen at roughly the same speed. The autopilot runs at a short fixed pace
/// while rules apply and flat out otherwise.
pub fn tick_interval(cell_pixel_size: u32, cheating: bool, rule_enforced: bool) -> Duration {
    match (cheating, rule_enforced) {
        (true, true) => AUTOPILOT_TICK_INTERVAL,
        (true, false) => Duration::ZERO,
        (false, _) => {
            let millis = (5.0 * cell_pixel_size as f64 + 100.0) / 3.0;
            Duration::from_millis(millis.round() as u64)
        }
    }
}
