use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;

use crate::config::Validate;
use crate::games::{GamePresenter, SessionRng};
use crate::log;

use super::game_state::{SnakeGameState, SnakeSnapshot};
use super::settings::SnakeSettings;
use super::types::{Direction, InputEvent, PauseCause};

pub const ESCAPE_MESSAGE: &str = "You hit escape!";
pub const CLOSE_MESSAGE: &str = "Are you sure you want to exit the game?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
    Ended(PauseCause),
    /// A step found the body outside the grid.
    Faulted,
}

struct SessionInner {
    game: Option<SnakeGameState>,
    phase: SessionPhase,
}

struct TickLoop {
    stop_tx: oneshot::Sender<()>,
    join_handle: JoinHandle<()>,
}

impl TickLoop {
    async fn stop(self) {
        let _ = self.stop_tx.send(());
        if let Err(e) = self.join_handle.await {
            log!("Tick loop terminated abnormally: {}", e);
        }
    }
}

/// Runs one snake game and owns its tick loop.
///
/// Every operation that changes the loop goes through `tick_loop`, which stays
/// locked for the whole operation, so at most one loop steps the game.
pub struct SnakeSession<P: GamePresenter> {
    inner: Arc<Mutex<SessionInner>>,
    tick_loop: Mutex<Option<TickLoop>>,
    presenter: P,
}

impl<P: GamePresenter> SnakeSession<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                game: None,
                phase: SessionPhase::NotStarted,
            })),
            tick_loop: Mutex::new(None),
            presenter,
        }
    }

    pub async fn start(&self, settings: &SnakeSettings) -> Result<(), String> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!(
            "Starting {}x{} game (rules: {}, wraparound: {}, cheating: {}, seed: {})",
            settings.columns,
            settings.rows,
            settings.rule_enforced,
            settings.wraparound,
            settings.cheating,
            rng.seed()
        );

        self.start_with_state(SnakeGameState::new(settings, rng)).await
    }

    /// Replaces whatever game is running with `game` and starts ticking it.
    pub async fn start_with_state(&self, game: SnakeGameState) -> Result<(), String> {
        let mut tick_loop = self.tick_loop.lock().await;
        if let Some(previous) = tick_loop.take() {
            previous.stop().await;
        }

        {
            let mut inner = self.inner.lock().await;
            inner.game = Some(game);
            inner.phase = SessionPhase::Running;
        }

        *tick_loop = Some(self.spawn_tick_loop().await);
        Ok(())
    }

    /// Stops the running game. Only a user pause can be resumed; any other
    /// cause ends the game.
    pub async fn pause(&self, message: impl Into<String>, cause: PauseCause) -> Result<(), String> {
        let message = message.into();
        let mut tick_loop = self.tick_loop.lock().await;
        if let Some(previous) = tick_loop.take() {
            previous.stop().await;
        }

        let score = {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionPhase::Running {
                return Err(format!("Cannot pause a game in phase {:?}", inner.phase));
            }
            inner.phase = if cause.is_resumable() {
                SessionPhase::Paused
            } else {
                SessionPhase::Ended(cause)
            };
            inner.game.as_ref().map_or(0, |game| game.score())
        };

        log!("Game paused ({:?}): {} Score: {}", cause, message, score);
        self.presenter.on_game_ended(message, cause, score).await;
        Ok(())
    }

    pub async fn resume(&self) -> Result<(), String> {
        let mut tick_loop = self.tick_loop.lock().await;

        {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionPhase::Paused {
                return Err(format!("Cannot resume a game in phase {:?}", inner.phase));
            }
            inner.phase = SessionPhase::Running;
        }

        if let Some(previous) = tick_loop.take() {
            previous.stop().await;
        }
        log!("Game resumed");
        *tick_loop = Some(self.spawn_tick_loop().await);
        Ok(())
    }

    /// Applies new options to a paused game and resumes it. The seed is only
    /// used by `start`.
    pub async fn reconfigure(&self, settings: &SnakeSettings) -> Result<(), String> {
        settings.validate()?;
        let mut tick_loop = self.tick_loop.lock().await;

        {
            let mut inner = self.inner.lock().await;
            if inner.phase != SessionPhase::Paused {
                return Err(format!("Cannot reconfigure a game in phase {:?}", inner.phase));
            }
            let Some(game) = inner.game.as_mut() else {
                return Err("No game to reconfigure".to_string());
            };
            game.reconfigure(
                settings.columns as usize,
                settings.rows as usize,
                settings.cell_pixel_size,
                settings.draw_grid,
                settings.rule_enforced,
                settings.wraparound,
                settings.cheating,
            );
            inner.phase = SessionPhase::Running;
        }

        if let Some(previous) = tick_loop.take() {
            previous.stop().await;
        }
        log!(
            "Game reconfigured to {}x{} (rules: {}, wraparound: {}, cheating: {})",
            settings.columns,
            settings.rows,
            settings.rule_enforced,
            settings.wraparound,
            settings.cheating
        );
        *tick_loop = Some(self.spawn_tick_loop().await);
        Ok(())
    }

    pub async fn set_heading(&self, heading: Direction) -> Result<(), String> {
        let mut inner = self.inner.lock().await;
        if inner.phase != SessionPhase::Running {
            return Err(format!("Cannot steer a game in phase {:?}", inner.phase));
        }
        match inner.game.as_mut() {
            Some(game) => {
                game.set_heading(heading);
                Ok(())
            }
            None => Err("No game to steer".to_string()),
        }
    }

    /// Input outside a running game is ignored.
    pub async fn handle_input(&self, event: InputEvent) -> Result<(), String> {
        if !self.is_running().await {
            return Ok(());
        }
        match event {
            InputEvent::Turn(heading) => self.set_heading(heading).await,
            InputEvent::EscapeRequested => self.pause(ESCAPE_MESSAGE, PauseCause::UserRequested).await,
            InputEvent::CloseRequested => self.pause(CLOSE_MESSAGE, PauseCause::UserRequested).await,
        }
    }

    pub async fn score(&self) -> u32 {
        let inner = self.inner.lock().await;
        inner.game.as_ref().map_or(0, |game| game.score())
    }

    pub async fn is_running(&self) -> bool {
        self.phase().await == SessionPhase::Running
    }

    pub async fn phase(&self) -> SessionPhase {
        self.inner.lock().await.phase
    }

    pub async fn snapshot(&self) -> Option<SnakeSnapshot> {
        let inner = self.inner.lock().await;
        inner.game.as_ref().map(|game| game.snapshot())
    }

    async fn spawn_tick_loop(&self) -> TickLoop {
        if let Some(game) = self.inner.lock().await.game.as_mut() {
            game.reset_autopilot();
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let join_handle = tokio::spawn(run_tick_loop(
            self.inner.clone(),
            self.presenter.clone(),
            stop_rx,
        ));

        TickLoop { stop_tx, join_handle }
    }
}

enum TickResult {
    Continue(Duration),
    Ended(String, PauseCause, u32),
    Stopped,
}

async fn run_tick_loop<P: GamePresenter>(
    inner: Arc<Mutex<SessionInner>>,
    presenter: P,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        let result = {
            let mut guard = inner.lock().await;
            let SessionInner { game, phase } = &mut *guard;

            match (game.as_mut(), *phase) {
                (Some(game), SessionPhase::Running) => match game.step() {
                    Ok(_) => TickResult::Continue(game.tick_interval()),
                    Err(error) => match error.pause_cause() {
                        Some(cause) => {
                            *phase = SessionPhase::Ended(cause);
                            TickResult::Ended(error.to_string(), cause, game.score())
                        }
                        None => {
                            log!("Invariant violated at tick {}: {}", game.tick(), error);
                            *phase = SessionPhase::Faulted;
                            TickResult::Stopped
                        }
                    },
                },
                _ => TickResult::Stopped,
            }
        };

        let interval = match result {
            TickResult::Continue(interval) => interval,
            TickResult::Ended(message, cause, score) => {
                log!("Game over: {} Score: {}", message, score);
                presenter.on_redraw_needed().await;
                presenter.on_game_ended(message, cause, score).await;
                break;
            }
            TickResult::Stopped => break,
        };

        presenter.on_redraw_needed().await;

        if interval.is_zero() {
            tokio::task::yield_now().await;
            if !matches!(stop_rx.try_recv(), Err(oneshot::error::TryRecvError::Empty)) {
                break;
            }
        } else {
            tokio::select! {
                _ = &mut stop_rx => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }
}
