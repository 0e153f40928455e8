use crate::games::SessionRng;

use super::grid::Grid;
use super::snake::Snake;
use super::types::Point;

/// Retries before placement gives up and keeps the last candidate. Only a body
/// covering (almost) the whole grid gets this far.
pub const MAX_FOOD_PLACEMENT_ATTEMPTS: usize = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    pub fn place(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Self {
        let mut candidate = Self::random_cell(grid, rng);
        let mut retries = 0;

        while snake.contains(candidate) && retries < MAX_FOOD_PLACEMENT_ATTEMPTS {
            candidate = Self::random_cell(grid, rng);
            retries += 1;
        }

        Self { position: candidate }
    }

    fn random_cell(grid: &Grid, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(0..grid.columns()),
            rng.random_range(0..grid.rows()),
        )
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn renormalize(&mut self, columns: usize, rows: usize) {
        self.position.x %= columns.max(1);
        self.position.y %= rows.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::Direction;

    fn body_covering_all_but(grid: &Grid, free: Point) -> Snake {
        // Boustrophedon order keeps consecutive segments adjacent.
        let mut cells = Vec::new();
        for y in 0..grid.rows() {
            let xs: Vec<usize> = if y % 2 == 0 {
                (0..grid.columns()).collect()
            } else {
                (0..grid.columns()).rev().collect()
            };
            for x in xs {
                let cell = Point::new(x, y);
                if cell != free {
                    cells.push(cell);
                }
            }
        }
        Snake::from_segments(cells, Direction::Right, true, false).unwrap()
    }

    #[test]
    fn test_place_avoids_body() {
        let grid = Grid::new(6, 4, 40, true);
        let snake = Snake::from_segments(
            [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)],
            Direction::Left,
            true,
            false,
        )
        .unwrap();
        let mut rng = SessionRng::new(42);

        for _ in 0..200 {
            let food = Food::place(&grid, &snake, &mut rng);
            assert!(!snake.contains(food.position()));
            assert!(grid.contains(food.position().x, food.position().y));
        }
    }

    #[test]
    fn test_place_finds_the_only_free_cell() {
        let grid = Grid::new(3, 3, 40, true);
        let free = Point::new(2, 1);
        let snake = body_covering_all_but(&grid, free);
        let mut rng = SessionRng::new(42);

        let food = Food::place(&grid, &snake, &mut rng);

        assert_eq!(food.position(), free);
    }

    #[test]
    fn test_place_terminates_on_full_grid() {
        let grid = Grid::new(2, 2, 40, true);
        let snake = Snake::from_segments(
            [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)],
            Direction::Up,
            true,
            false,
        )
        .unwrap();
        let mut rng = SessionRng::new(42);

        let food = Food::place(&grid, &snake, &mut rng);

        assert!(snake.contains(food.position()));
    }

    #[test]
    fn test_renormalize_ignores_body() {
        let mut food = Food::at(Point::new(18, 11));
        food.renormalize(16, 9);
        assert_eq!(food.position(), Point::new(2, 2));
    }
}
