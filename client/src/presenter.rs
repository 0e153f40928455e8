use std::future::Future;
use std::sync::Arc;

use common::games::GamePresenter;
use common::games::snake::PauseCause;
use tokio::sync::{Notify, mpsc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEnded {
    pub message: String,
    pub cause: PauseCause,
    pub score: u32,
}

/// Forwards session events to the input loop. Redraws are coalesced: however
/// many ticks pass between two reads, one notification is pending.
#[derive(Clone)]
pub struct TerminalPresenter {
    redraw: Arc<Notify>,
    ended_tx: mpsc::UnboundedSender<GameEnded>,
}

impl TerminalPresenter {
    pub fn new(redraw: Arc<Notify>, ended_tx: mpsc::UnboundedSender<GameEnded>) -> Self {
        Self { redraw, ended_tx }
    }
}

impl GamePresenter for TerminalPresenter {
    fn on_redraw_needed(&self) -> impl Future<Output = ()> + Send {
        self.redraw.notify_one();
        async {}
    }

    fn on_game_ended(
        &self,
        message: String,
        cause: PauseCause,
        score: u32,
    ) -> impl Future<Output = ()> + Send {
        let _ = self.ended_tx.send(GameEnded { message, cause, score });
        async {}
    }
}
