use std::time::Duration;

// Grid sizes the options menu accepts.
pub(crate) const MIN_COLUMNS: u32 = 16;
pub(crate) const MAX_COLUMNS: u32 = 1569;
pub(crate) const MIN_ROWS: u32 = 9;
pub(crate) const MAX_ROWS: u32 = 869;

pub(crate) const MIN_CELL_PIXEL_SIZE: u32 = 1;
pub(crate) const MAX_CELL_PIXEL_SIZE: u32 = 500;
pub(crate) const DEFAULT_CELL_PIXEL_SIZE: u32 = 40;

/// Cadence of an autopiloted game that still enforces the rules.
pub(crate) const AUTOPILOT_TICK_INTERVAL: Duration = Duration::from_millis(5);
