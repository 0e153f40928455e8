use std::time::Duration;

use crate::games::SessionRng;
use crate::log;

use super::autopilot::{self, AutopilotInput, AutopilotMode};
use super::food::Food;
use super::grid::Grid;
use super::settings::{self, SnakeSettings};
use super::snake::Snake;
use super::types::{Direction, Point, SnakeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub tick: u64,
    pub ate_food: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub segments: Vec<Point>,
    pub heading: Direction,
    pub food: Point,
    pub columns: usize,
    pub rows: usize,
    pub cell_pixel_size: u32,
    pub draw_grid: bool,
    pub score: u32,
    pub tick: u64,
}

/// Everything one game simulates. Only the session's tick loop calls `step`.
pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: SessionRng,
    // Requested flags. The snake's own flags may differ while cheating.
    rule_enforced: bool,
    wraparound: bool,
    cheating: bool,
    autopilot_counter: usize,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, mut rng: SessionRng) -> Self {
        let grid = Grid::new(
            settings.columns as usize,
            settings.rows as usize,
            settings.cell_pixel_size,
            settings.draw_grid,
        );
        let snake = Snake::spawn(&grid, &mut rng, settings.rule_enforced, settings.wraparound);
        let food = Food::place(&grid, &snake, &mut rng);

        Self {
            grid,
            snake,
            food,
            rng,
            rule_enforced: settings.rule_enforced,
            wraparound: settings.wraparound,
            cheating: settings.cheating,
            autopilot_counter: 0,
            tick: 0,
        }
    }

    /// Assembles a game from prepared parts; the requested flags are taken from
    /// the snake.
    pub fn from_parts(grid: Grid, snake: Snake, food: Food, rng: SessionRng, cheating: bool) -> Self {
        Self {
            rule_enforced: snake.rule_enforced(),
            wraparound: snake.wraparound(),
            grid,
            snake,
            food,
            rng,
            cheating,
            autopilot_counter: 0,
            tick: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn cheating(&self) -> bool {
        self.cheating
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.snake.set_heading(heading);
    }

    pub fn autopilot_mode(&self) -> AutopilotMode {
        AutopilotMode::select(self.rule_enforced, self.wraparound, &self.grid)
    }

    /// Called whenever a new tick loop takes over.
    pub fn reset_autopilot(&mut self) {
        self.autopilot_counter = 0;
    }

    pub fn tick_interval(&self) -> Duration {
        settings::tick_interval(self.grid.cell_pixel_size(), self.cheating, self.rule_enforced)
    }

    pub fn step(&mut self) -> Result<StepReport, SnakeError> {
        if self.cheating {
            self.apply_autopilot();
        }

        let outcome = self.snake.advance(&self.grid, &self.food)?;
        self.tick += 1;

        if outcome.ate_food {
            let eaten = self.food.position();
            self.food = Food::place(&self.grid, &self.snake, &mut self.rng);
            log!(
                "Food eaten at ({}, {}), score {}. Next food at ({}, {})",
                eaten.x,
                eaten.y,
                self.snake.score(),
                self.food.position().x,
                self.food.position().y
            );
        }

        Ok(StepReport {
            tick: self.tick,
            ate_food: outcome.ate_food,
        })
    }

    fn apply_autopilot(&mut self) {
        let input = AutopilotInput {
            head: self.snake.head(),
            width: self.grid.columns(),
            height: self.grid.rows(),
            score: self.snake.score(),
            counter: self.autopilot_counter,
        };
        let steer = autopilot::steer(self.autopilot_mode(), input);

        if let Some(heading) = steer.heading {
            self.snake.set_heading(heading);
        }
        self.autopilot_counter = steer.counter;
    }

    /// Applies new options between ticks. Cheating lifts the rules from the
    /// snake itself; the requested flags still pick the autopilot pattern.
    pub fn reconfigure(
        &mut self,
        columns: usize,
        rows: usize,
        cell_pixel_size: u32,
        draw_grid: bool,
        rule_enforced: bool,
        wraparound: bool,
        cheating: bool,
    ) {
        self.grid.resize(columns, rows, cell_pixel_size);
        self.grid.set_draw_grid(draw_grid);

        self.rule_enforced = rule_enforced;
        self.wraparound = wraparound;
        self.cheating = cheating;

        if cheating {
            self.snake.set_rule_enforced(false);
            self.snake.set_wraparound(true);
        } else {
            self.snake.set_rule_enforced(rule_enforced);
            self.snake.set_wraparound(wraparound);
        }

        self.snake.renormalize(self.grid.columns(), self.grid.rows());
        self.food.renormalize(self.grid.columns(), self.grid.rows());
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: self.snake.segments().copied().collect(),
            heading: self.snake.heading(),
            food: self.food.position(),
            columns: self.grid.columns(),
            rows: self.grid.rows(),
            cell_pixel_size: self.grid.cell_pixel_size(),
            draw_grid: self.grid.draw_grid(),
            score: self.snake.score(),
            tick: self.tick,
        }
    }
}
