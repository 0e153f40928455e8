use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseCause {
    BoundaryHit,
    SelfCollision,
    UserRequested,
}

impl PauseCause {
    pub fn is_resumable(&self) -> bool {
        matches!(self, PauseCause::UserRequested)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// A segment ended up outside the grid. Movement never produces this on its
    /// own; it means the grid changed without renormalizing the body.
    OutOfBounds { x: usize, y: usize },
    BoundaryHit,
    SelfCollision,
}

impl SnakeError {
    pub fn pause_cause(&self) -> Option<PauseCause> {
        match self {
            SnakeError::OutOfBounds { .. } => None,
            SnakeError::BoundaryHit => Some(PauseCause::BoundaryHit),
            SnakeError::SelfCollision => Some(PauseCause::SelfCollision),
        }
    }
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::OutOfBounds { x, y } => write!(f, "Segment ({}, {}) lies outside the grid", x, y),
            SnakeError::BoundaryHit => write!(f, "Your Snake hit the borders!"),
            SnakeError::SelfCollision => write!(f, "Your Snake ate itself!"),
        }
    }
}

impl std::error::Error for SnakeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub ate_food: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    EscapeRequested,
    CloseRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_user_pause_is_resumable() {
        assert!(PauseCause::UserRequested.is_resumable());
        assert!(!PauseCause::BoundaryHit.is_resumable());
        assert!(!PauseCause::SelfCollision.is_resumable());
    }

    #[test]
    fn test_error_messages_match_pause_causes() {
        assert_eq!(SnakeError::BoundaryHit.to_string(), "Your Snake hit the borders!");
        assert_eq!(SnakeError::SelfCollision.to_string(), "Your Snake ate itself!");
        assert_eq!(SnakeError::BoundaryHit.pause_cause(), Some(PauseCause::BoundaryHit));
        assert_eq!(SnakeError::SelfCollision.pause_cause(), Some(PauseCause::SelfCollision));
        assert_eq!(SnakeError::OutOfBounds { x: 3, y: 9 }.pause_cause(), None);
    }
}
