//! Closed-form steering that walks the snake over the whole grid.
//!
//! Nothing here looks at the body. Each mode is a fixed traversal whose turns
//! are keyed on landmark cells, so the only state carried between ticks is a
//! small counter. The bounded traversals are Hamiltonian cycles on the grids
//! they are meant for; degenerate shapes (one or two rows, odd widths) can
//! still lead the snake into itself, which is accepted.

use super::grid::Grid;
use super::types::{Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutopilotMode {
    /// Rules are off, so any heading is safe.
    Unbounded,
    /// Rules on with wraparound: full-height vertical sweeps, one column apart.
    WrapInfinite,
    /// Bounded, even number of rows: serpentine over row pairs with column 0
    /// as the return lane.
    EvenHeight,
    /// Bounded, odd rows and even columns: rows 1 and 2 are zigzagged column
    /// by column before the serpentine continues.
    OddHeightEvenWidth,
    /// Bounded, odd rows and odd columns: alternates between leaving the last
    /// and the first sweep column out, switching at cell (2, 0).
    OddHeightOddWidth,
}

impl AutopilotMode {
    pub fn select(rule_enforced: bool, wraparound: bool, grid: &Grid) -> Self {
        if !rule_enforced {
            AutopilotMode::Unbounded
        } else if wraparound {
            AutopilotMode::WrapInfinite
        } else if grid.rows() % 2 == 0 {
            AutopilotMode::EvenHeight
        } else if grid.columns() % 2 == 0 {
            AutopilotMode::OddHeightEvenWidth
        } else {
            AutopilotMode::OddHeightOddWidth
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutopilotInput {
    pub head: Point,
    pub width: usize,
    pub height: usize,
    pub score: u32,
    pub counter: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Steer {
    /// `None` keeps the current heading.
    pub heading: Option<Direction>,
    pub counter: usize,
}

/// Heading for the upcoming move. A fresh game (or a resumed one) starts with
/// counter 0, which lets the bounded modes re-aim onto their traversal once.
pub fn steer(mode: AutopilotMode, input: AutopilotInput) -> Steer {
    match mode {
        AutopilotMode::Unbounded => unbounded(input),
        AutopilotMode::WrapInfinite => wrap_infinite(input),
        AutopilotMode::EvenHeight => even_height(input),
        AutopilotMode::OddHeightEvenWidth => odd_height_even_width(input),
        AutopilotMode::OddHeightOddWidth => odd_height_odd_width(input),
    }
}

fn unbounded(input: AutopilotInput) -> Steer {
    let heading = match input.counter {
        0 => Some(Direction::Down),
        1 => Some(Direction::Right),
        _ => None,
    };
    let period = input.width.max(input.score as usize + 1);

    Steer {
        heading,
        counter: (input.counter + 1) % period,
    }
}

fn wrap_infinite(input: AutopilotInput) -> Steer {
    let height = input.height;
    let counter = input.counter;

    let heading = if counter == 0 {
        Some(Direction::Right)
    } else if counter == 1 {
        Some(Direction::Down)
    } else if counter == height {
        Some(Direction::Right)
    } else if counter == height + 1 {
        Some(Direction::Up)
    } else {
        None
    };

    Steer {
        heading,
        counter: (counter + 1) % (2 * height).max(1),
    }
}

fn even_height(input: AutopilotInput) -> Steer {
    let Point { x, y } = input.head;
    let last_x = input.width.saturating_sub(1);
    let last_y = input.height.saturating_sub(1);

    let mut counter = input.counter;
    let mut heading = None;

    if counter == 0 {
        counter = 1;
        heading = Some(if x == 0 {
            Direction::Up
        } else if y % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        });
    }

    let landmark = if x == 0 && y == 0 {
        Some(Direction::Right)
    } else if y == last_y {
        if x == 0 {
            Some(Direction::Up)
        } else if x == last_x {
            Some(Direction::Left)
        } else {
            None
        }
    } else if x == last_x {
        Some(if y % 2 == 0 { Direction::Down } else { Direction::Left })
    } else if x == 1 {
        Some(if y % 2 == 1 { Direction::Down } else { Direction::Right })
    } else {
        None
    };

    Steer {
        heading: landmark.or(heading),
        counter,
    }
}

fn odd_height_even_width(input: AutopilotInput) -> Steer {
    let x = input.head.x as i64;
    let y = input.head.y;

    let mut counter = input.counter;
    let mut heading = None;

    if counter == 0 {
        counter = 1;
        heading = Some(enter_row_sweep(x, y));
    }

    let landmark = row_sweep_landmark(x, y, input.width as i64 - 1, input.height, x == 0);

    Steer {
        heading: landmark.or(heading),
        counter,
    }
}

fn odd_height_odd_width(input: AutopilotInput) -> Steer {
    let x = input.head.x as i64;
    let y = input.head.y;

    let mut counter = input.counter;
    if x == 2 && y == 0 {
        // Counter 0 has not entered the cycle yet, so there is no phase to flip.
        counter = match counter {
            1 => 2,
            2 => 1,
            other => other,
        };
    }

    let mut heading = None;
    let mut effective_x = x;
    if counter == 0 {
        counter = 1;
        heading = Some(enter_row_sweep(x, y));
    } else if counter == 2 {
        effective_x -= 1;
    }

    let on_return_lane = (counter == 1 && effective_x == 0) || (counter == 2 && effective_x == -1);
    let landmark = row_sweep_landmark(effective_x, y, input.width as i64 - 2, input.height, on_return_lane);

    Steer {
        heading: landmark.or(heading),
        counter,
    }
}

fn enter_row_sweep(x: i64, y: usize) -> Direction {
    if x == 0 {
        Direction::Up
    } else if y == 0 || y % 2 == 1 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Turn table shared by the odd-height traversals. `last_x` is the last column
/// of the sweep; `on_return_lane` marks the column the snake climbs back up.
fn row_sweep_landmark(
    x: i64,
    y: usize,
    last_x: i64,
    height: usize,
    on_return_lane: bool,
) -> Option<Direction> {
    let last_y = height.saturating_sub(1);

    if on_return_lane {
        if y == 0 {
            Some(Direction::Right)
        } else if y == last_y {
            Some(Direction::Up)
        } else {
            None
        }
    } else if y == 0 {
        (x == last_x).then_some(Direction::Down)
    } else if y == last_y {
        (x == last_x).then_some(Direction::Left)
    } else if y == 1 || y == 2 {
        if x == 1 {
            Some(Direction::Down)
        } else if x % 2 == 1 {
            Some(if y == 1 { Direction::Down } else { Direction::Left })
        } else {
            Some(if y == 1 { Direction::Left } else { Direction::Up })
        }
    } else if y % 2 == 1 {
        if x == 1 {
            Some(Direction::Right)
        } else if x == last_x {
            Some(Direction::Down)
        } else {
            None
        }
    } else if x == 1 {
        Some(Direction::Down)
    } else if x == last_x {
        Some(Direction::Left)
    } else {
        None
    }
}
