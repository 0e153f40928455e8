mod presenter;
mod session_rng;

pub mod snake;

pub use presenter::GamePresenter;
pub use session_rng::SessionRng;
