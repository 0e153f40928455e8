mod autopilot;
mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snake;
mod types;

pub use autopilot::{AutopilotInput, AutopilotMode, Steer, steer};
pub use food::{Food, MAX_FOOD_PLACEMENT_ATTEMPTS};
pub use game_state::{SnakeGameState, SnakeSnapshot, StepReport};
pub use grid::Grid;
pub use session::{CLOSE_MESSAGE, ESCAPE_MESSAGE, SessionPhase, SnakeSession};
pub use settings::{SnakeSettings, tick_interval};
pub use snake::Snake;
pub use types::{Direction, InputEvent, MoveOutcome, PauseCause, Point, SnakeError};
