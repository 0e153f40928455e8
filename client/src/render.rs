use common::games::snake::{Direction, SnakeSnapshot};

const EMPTY: char = '.';
const BLANK: char = ' ';
const BODY: char = 'o';
const FOOD: char = '*';

fn head_char(heading: Direction) -> char {
    match heading {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Draws the board as text, one line per row, followed by the score line.
pub fn render(snapshot: &SnakeSnapshot) -> String {
    let background = if snapshot.draw_grid { EMPTY } else { BLANK };
    let mut cells = vec![vec![background; snapshot.columns]; snapshot.rows];

    let mut place = |x: usize, y: usize, c: char| {
        if let Some(cell) = cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = c;
        }
    };

    place(snapshot.food.x, snapshot.food.y, FOOD);
    for segment in snapshot.segments.iter().skip(1) {
        place(segment.x, segment.y, BODY);
    }
    if let Some(head) = snapshot.segments.first() {
        place(head.x, head.y, head_char(snapshot.heading));
    }

    let mut out = String::with_capacity((snapshot.columns + 1) * (snapshot.rows + 1));
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out.push_str(&format!("Score: {}  Tick: {}\n", snapshot.score, snapshot.tick));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::Point;

    fn snapshot(draw_grid: bool) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: vec![Point::new(2, 1), Point::new(1, 1), Point::new(0, 1)],
            heading: Direction::Right,
            food: Point::new(3, 0),
            columns: 4,
            rows: 2,
            cell_pixel_size: 40,
            draw_grid,
            score: 2,
            tick: 9,
        }
    }

    #[test]
    fn test_render_board() {
        assert_eq!(render(&snapshot(true)), "...*\noo>.\nScore: 2  Tick: 9\n");
    }

    #[test]
    fn test_render_without_grid_uses_blanks() {
        assert_eq!(render(&snapshot(false)), "   *\noo> \nScore: 2  Tick: 9\n");
    }

    #[test]
    fn test_head_drawn_over_food() {
        let mut snapshot = snapshot(true);
        snapshot.food = Point::new(2, 1);
        assert!(render(&snapshot).starts_with("....\noo>."));
    }
}
