use std::collections::VecDeque;

use crate::games::SessionRng;

use super::food::Food;
use super::grid::Grid;
use super::types::{Direction, MoveOutcome, Point, SnakeError};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Direction,
    rule_enforced: bool,
    wraparound: bool,
    score: u32,
}

impl Snake {
    pub fn new(start_pos: Point, heading: Direction, rule_enforced: bool, wraparound: bool) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            heading,
            rule_enforced,
            wraparound,
            score: 0,
        }
    }

    /// Builds a body from head-to-tail segments; the score follows the length.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Point>,
        heading: Direction,
        rule_enforced: bool,
        wraparound: bool,
    ) -> Result<Self, String> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            return Err("Snake needs at least one segment".to_string());
        }
        let score = (body.len() - 1) as u32;
        Ok(Self {
            body,
            heading,
            rule_enforced,
            wraparound,
            score,
        })
    }

    /// Places a one-segment snake with a random heading. The start cell keeps a
    /// fifth of the grid between the snake and the edge it is heading towards.
    pub fn spawn(grid: &Grid, rng: &mut SessionRng, rule_enforced: bool, wraparound: bool) -> Self {
        let heading = rng.random_direction();
        let columns = grid.columns();
        let rows = grid.rows();

        let (min_x, max_x) = match heading {
            Direction::Left => (columns / 5, columns - 1),
            Direction::Right => (0, columns * 4 / 5),
            _ => (0, columns - 1),
        };
        let (min_y, max_y) = match heading {
            Direction::Up => (rows / 5, rows - 1),
            Direction::Down => (0, rows * 4 / 5),
            _ => (0, rows - 1),
        };

        let start_pos = Point::new(
            rng.random_range(min_x..=max_x),
            rng.random_range(min_y..=max_y),
        );
        Self::new(start_pos, heading, rule_enforced, wraparound)
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rule_enforced(&self) -> bool {
        self.rule_enforced
    }

    pub fn wraparound(&self) -> bool {
        self.wraparound
    }

    /// No reversal check: turning back into the body is caught by the next move.
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub fn set_rule_enforced(&mut self, rule_enforced: bool) {
        self.rule_enforced = rule_enforced;
    }

    pub fn set_wraparound(&mut self, wraparound: bool) {
        self.wraparound = wraparound;
    }

    pub fn contains(&self, cell: Point) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }

    pub fn renormalize(&mut self, columns: usize, rows: usize) {
        let columns = columns.max(1);
        let rows = rows.max(1);
        for segment in self.body.iter_mut() {
            segment.x %= columns;
            segment.y %= rows;
        }
    }

    fn may_wrap(&self) -> bool {
        self.wraparound || !self.rule_enforced
    }

    fn step_forward(value: usize, max: usize, may_wrap: bool) -> Result<usize, SnakeError> {
        if value + 1 < max {
            Ok(value + 1)
        } else if may_wrap {
            Ok(0)
        } else {
            Err(SnakeError::BoundaryHit)
        }
    }

    fn step_back(value: usize, max: usize, may_wrap: bool) -> Result<usize, SnakeError> {
        if value > 0 {
            Ok(value - 1)
        } else if may_wrap {
            Ok(max - 1)
        } else {
            Err(SnakeError::BoundaryHit)
        }
    }

    pub fn next_head(&self, grid: &Grid) -> Result<Point, SnakeError> {
        let head = grid.cell(self.head().x, self.head().y)?;
        let may_wrap = self.may_wrap();

        let (x, y) = match self.heading {
            Direction::Up => (head.x, Self::step_back(head.y, grid.rows(), may_wrap)?),
            Direction::Down => (head.x, Self::step_forward(head.y, grid.rows(), may_wrap)?),
            Direction::Left => (Self::step_back(head.x, grid.columns(), may_wrap)?, head.y),
            Direction::Right => (Self::step_forward(head.x, grid.columns(), may_wrap)?, head.y),
        };

        grid.cell(x, y)
    }

    /// Moves one cell along the heading.
    ///
    /// A boundary hit leaves the body untouched. A self collision is detected
    /// after the shift, so the cell the tail just left is free to enter.
    pub fn advance(&mut self, grid: &Grid, food: &Food) -> Result<MoveOutcome, SnakeError> {
        let next_head = self.next_head(grid)?;
        let old_tail = self.tail();

        self.body.pop_back();
        self.body.push_front(next_head);

        if self.rule_enforced && self.body.iter().skip(1).any(|segment| *segment == next_head) {
            return Err(SnakeError::SelfCollision);
        }

        if next_head == food.position() {
            self.body.push_back(old_tail);
            self.score += 1;
            return Ok(MoveOutcome { ate_food: true });
        }

        Ok(MoveOutcome { ate_food: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(snake: &Snake) -> Vec<Point> {
        snake.segments().copied().collect()
    }

    #[test]
    fn test_move_without_food() {
        let grid = Grid::new(20, 10, 40, true);
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, true, false);
        let food = Food::at(Point::new(5, 6));

        let outcome = snake.advance(&grid, &food).unwrap();

        assert!(!outcome.ate_food);
        assert_eq!(snake.head(), Point::new(6, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn test_move_onto_food_grows_by_old_tail() {
        let grid = Grid::new(20, 10, 40, true);
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, true, false);
        let food = Food::at(Point::new(6, 5));

        let outcome = snake.advance(&grid, &food).unwrap();

        assert!(outcome.ate_food);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.score(), 1);
        assert_eq!(segments(&snake), vec![Point::new(6, 5), Point::new(5, 5)]);
    }

    #[test]
    fn test_growth_appends_pre_move_tail() {
        let grid = Grid::new(20, 10, 40, true);
        let mut snake = Snake::from_segments(
            [Point::new(4, 4), Point::new(3, 4), Point::new(2, 4)],
            Direction::Down,
            true,
            false,
        )
        .unwrap();
        let food = Food::at(Point::new(4, 5));

        let outcome = snake.advance(&grid, &food).unwrap();

        assert!(outcome.ate_food);
        assert_eq!(snake.score(), 3);
        assert_eq!(snake.tail(), Point::new(2, 4));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_boundary_hit_leaves_body_unchanged() {
        let grid = Grid::new(1, 3, 40, true);
        let mut snake = Snake::from_segments(
            [Point::new(0, 2), Point::new(0, 1), Point::new(0, 0)],
            Direction::Down,
            true,
            false,
        )
        .unwrap();
        let food = Food::at(Point::new(0, 0));
        let before = segments(&snake);

        assert_eq!(snake.advance(&grid, &food), Err(SnakeError::BoundaryHit));
        assert_eq!(segments(&snake), before);
    }

    #[test]
    fn test_column_body_heading_down_hits_bottom_border() {
        let grid = Grid::new(5, 3, 40, true);
        let mut snake = Snake::from_segments(
            [Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)],
            Direction::Down,
            true,
            false,
        )
        .unwrap();
        let food = Food::at(Point::new(4, 0));

        // The head first runs back over its own body, which is a collision.
        assert_eq!(snake.advance(&grid, &food), Err(SnakeError::SelfCollision));

        let mut snake = Snake::from_segments(
            [Point::new(0, 2), Point::new(0, 1), Point::new(0, 0)],
            Direction::Down,
            true,
            false,
        )
        .unwrap();
        assert_eq!(snake.advance(&grid, &food), Err(SnakeError::BoundaryHit));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_every_edge_is_a_boundary_when_bounded() {
        let grid = Grid::new(4, 4, 40, true);
        let food = Food::at(Point::new(2, 2));
        let cases = [
            (Point::new(0, 0), Direction::Up),
            (Point::new(0, 0), Direction::Left),
            (Point::new(3, 3), Direction::Down),
            (Point::new(3, 3), Direction::Right),
        ];
        for (start, heading) in cases {
            let mut snake = Snake::new(start, heading, true, false);
            assert_eq!(snake.advance(&grid, &food), Err(SnakeError::BoundaryHit));
            assert_eq!(snake.len(), 1);
        }
    }

    #[test]
    fn test_wraparound_stays_inside_grid() {
        let grid = Grid::new(7, 5, 40, true);
        let food = Food::at(Point::new(6, 4));
        for heading in Direction::ALL {
            let mut snake = Snake::new(Point::new(0, 0), heading, false, true);
            for _ in 0..20 {
                snake.advance(&grid, &food).unwrap();
                let head = snake.head();
                assert!(head.x < grid.columns() && head.y < grid.rows());
            }
        }
    }

    #[test]
    fn test_wraps_to_opposite_edge() {
        let grid = Grid::new(7, 5, 40, true);
        let food = Food::at(Point::new(3, 3));

        let mut snake = Snake::new(Point::new(0, 2), Direction::Left, true, true);
        snake.advance(&grid, &food).unwrap();
        assert_eq!(snake.head(), Point::new(6, 2));

        let mut snake = Snake::new(Point::new(2, 4), Direction::Down, true, true);
        snake.advance(&grid, &food).unwrap();
        assert_eq!(snake.head(), Point::new(2, 0));
    }

    #[test]
    fn test_rules_off_wraps_even_without_wraparound() {
        let grid = Grid::new(7, 5, 40, true);
        let food = Food::at(Point::new(3, 3));
        let mut snake = Snake::new(Point::new(2, 0), Direction::Up, false, false);

        snake.advance(&grid, &food).unwrap();

        assert_eq!(snake.head(), Point::new(2, 4));
    }

    #[test]
    fn test_reversal_is_self_collision_when_rules_enforced() {
        let grid = Grid::new(10, 10, 40, true);
        let food = Food::at(Point::new(9, 9));
        let mut snake = Snake::from_segments(
            [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
            true,
            false,
        )
        .unwrap();
        snake.set_heading(Direction::Left);

        assert_eq!(snake.advance(&grid, &food), Err(SnakeError::SelfCollision));
    }

    #[test]
    fn test_reversal_is_allowed_without_rules() {
        let grid = Grid::new(10, 10, 40, true);
        let food = Food::at(Point::new(9, 9));
        let mut snake = Snake::from_segments(
            [Point::new(5, 5), Point::new(4, 5)],
            Direction::Left,
            false,
            true,
        )
        .unwrap();

        assert!(snake.advance(&grid, &food).is_ok());
        assert_eq!(snake.head(), Point::new(4, 5));
    }

    #[test]
    fn test_single_segment_never_self_collides() {
        let grid = Grid::new(3, 3, 40, true);
        let food = Food::at(Point::new(2, 2));
        for heading in Direction::ALL {
            let mut snake = Snake::new(Point::new(1, 1), heading, true, true);
            for _ in 0..9 {
                assert!(snake.advance(&grid, &food).is_ok());
            }
        }
    }

    #[test]
    fn test_entering_vacated_tail_cell_is_not_a_collision() {
        let grid = Grid::new(4, 4, 40, true);
        let food = Food::at(Point::new(3, 3));
        let mut snake = Snake::from_segments(
            [Point::new(1, 0), Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)],
            Direction::Left,
            true,
            false,
        )
        .unwrap();

        assert!(snake.advance(&grid, &food).is_ok());
        assert_eq!(snake.head(), Point::new(0, 0));
    }

    #[test]
    fn test_stale_head_is_out_of_bounds() {
        let grid = Grid::new(4, 4, 40, true);
        let food = Food::at(Point::new(0, 0));
        let mut snake = Snake::new(Point::new(6, 1), Direction::Up, true, false);

        assert_eq!(
            snake.advance(&grid, &food),
            Err(SnakeError::OutOfBounds { x: 6, y: 1 })
        );
    }

    #[test]
    fn test_renormalize_reduces_modulo_dimensions() {
        let mut snake = Snake::from_segments(
            [Point::new(17, 8), Point::new(16, 8)],
            Direction::Right,
            true,
            false,
        )
        .unwrap();

        snake.renormalize(16, 5);

        assert_eq!(segments(&snake), vec![Point::new(1, 3), Point::new(0, 3)]);
    }

    #[test]
    fn test_spawn_keeps_distance_from_leading_edge() {
        let grid = Grid::new(20, 10, 40, true);
        let mut rng = SessionRng::new(42);
        for _ in 0..500 {
            let snake = Snake::spawn(&grid, &mut rng, true, false);
            let head = snake.head();
            assert!(grid.contains(head.x, head.y));
            match snake.heading() {
                Direction::Left => assert!(head.x >= 4),
                Direction::Right => assert!(head.x <= 16),
                Direction::Up => assert!(head.y >= 2),
                Direction::Down => assert!(head.y <= 8),
            }
            assert_eq!(snake.len(), 1);
        }
    }

    #[test]
    fn test_from_segments_rejects_empty_body() {
        assert!(Snake::from_segments([], Direction::Up, true, false).is_err());
    }
}
