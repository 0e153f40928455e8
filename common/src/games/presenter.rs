use std::future::Future;

use super::snake::PauseCause;

/// The display side of a running game.
///
/// Implementations are cloned into the tick loop, so they should be cheap handles
/// (channels, `Arc`s). Neither callback may call back into the session.
pub trait GamePresenter: Send + Sync + Clone + 'static {
    fn on_redraw_needed(&self) -> impl Future<Output = ()> + Send;

    fn on_game_ended(
        &self,
        message: String,
        cause: PauseCause,
        score: u32,
    ) -> impl Future<Output = ()> + Send;
}
