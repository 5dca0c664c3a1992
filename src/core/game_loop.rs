//! Session driver shared by hosts and tests.
//!
//! [`GameLoop`] owns the session, its RNG, the timer queue and the save
//! store. It saves after every state-changing command and autosaves on
//! ticks so no more than [`AUTOSAVE_INTERVAL_SECONDS`] of play time is lost.

use super::constants::AUTOSAVE_INTERVAL_SECONDS;
use super::engine::{self, ApplyResult};
use super::events::{Command, GameEvent};
use super::game_state::GameState;
use super::scheduler::ManualScheduler;
use crate::persistence::{self, SaveStore};
use rand::Rng;
use std::time::Duration;
use tracing::warn;

pub struct GameLoop<S: SaveStore, R: Rng> {
    state: GameState,
    store: S,
    rng: R,
    scheduler: ManualScheduler,
    /// Ticked seconds since the last save
    since_save: u64,
}

impl<S: SaveStore, R: Rng> GameLoop<S, R> {
    /// Resume the session saved in `store`, or start a new game.
    pub fn load(store: S, rng: R) -> Self {
        let state = persistence::load_or_default(&store);
        Self::with_state(state, store, rng)
    }

    /// Drive an existing session. Nothing is written until the first save.
    pub fn with_state(state: GameState, store: S, rng: R) -> Self {
        Self {
            state,
            store,
            rng,
            scheduler: ManualScheduler::new(),
            since_save: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Timers still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Apply one command and persist if needed.
    pub fn dispatch(&mut self, command: Command) -> Vec<GameEvent> {
        let ticked = match command {
            Command::Tick { elapsed_secs } => elapsed_secs,
            _ => 0,
        };

        let ApplyResult {
            events,
            state_changed,
        } = engine::apply(&mut self.state, command, &mut self.rng, &mut self.scheduler);

        self.since_save += ticked;
        if state_changed || self.since_save >= AUTOSAVE_INTERVAL_SECONDS {
            self.save();
        }
        events
    }

    /// Advance the timer clock and deliver every timer that came due.
    ///
    /// Each timer is dispatched at its own due time, so timers it schedules
    /// also fire within this call when they fall inside the window.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let target = self.scheduler.now() + elapsed;
        let mut events = Vec::new();
        while let Some(timer) = self.scheduler.pop_due(target) {
            events.extend(self.dispatch(Command::TimerElapsed(timer)));
        }
        self.scheduler.wait_until(target);
        events
    }

    /// Fire pending timers in order until none remain.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(timer) = self.scheduler.fire_next() {
            events.extend(self.dispatch(Command::TimerElapsed(timer)));
        }
        events
    }

    /// Write the session to the store. Failures are logged, never fatal.
    pub fn save(&mut self) -> bool {
        self.since_save = 0;
        match persistence::save(&mut self.store, &self.state) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to save session");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::SAVE_KEY;
    use crate::core::game_state::RoundPhase;
    use crate::persistence::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_loop() -> GameLoop<MemoryStore, ChaCha8Rng> {
        GameLoop::load(MemoryStore::new(), ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_round_runs_through_timers() {
        let mut game = new_loop();
        game.dispatch(Command::StartShuffle);
        assert!(game.advance(Duration::from_millis(999)).is_empty());
        let events = game.advance(Duration::from_millis(1));
        assert_eq!(events, vec![GameEvent::CardsLaidOut { count: 5 }]);

        game.dispatch(Command::SelectCard { index: 0 });
        game.settle();
        assert_eq!(game.state().draws, 1);
        assert_eq!(game.pending_timers(), 0);
        assert_eq!(game.state().phase, RoundPhase::Idle);
    }

    #[test]
    fn test_reveal_and_clear_chain_within_one_advance() {
        let mut game = new_loop();
        game.dispatch(Command::StartShuffle);
        game.advance(Duration::from_millis(3000));
        assert!(game.state().cards_laid_out().is_some());

        // Reveal due at +500, clear at +2000
        game.dispatch(Command::SelectCard { index: 0 });
        let events = game.advance(Duration::from_millis(2000));
        assert!(events.contains(&GameEvent::TableCleared));
        assert_eq!(game.state().phase, RoundPhase::Idle);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_clear_is_timed_from_reveal_not_frame_end() {
        let mut game = new_loop();
        game.dispatch(Command::StartShuffle);
        game.advance(Duration::from_millis(1000));

        game.dispatch(Command::SelectCard { index: 1 });
        // Coarse frame: the reveal fires 500 ms into it
        game.advance(Duration::from_millis(1200));
        assert_eq!(game.state().phase, RoundPhase::Clearing);
        game.advance(Duration::from_millis(799));
        assert_eq!(game.state().phase, RoundPhase::Clearing);
        game.advance(Duration::from_millis(1));
        assert_eq!(game.state().phase, RoundPhase::Idle);

        let events = game.dispatch(Command::StartShuffle);
        assert!(matches!(events[0], GameEvent::ShuffleStarted { .. }));
    }

    #[test]
    fn test_resolved_pick_is_saved() {
        let mut game = new_loop();
        assert!(game.store().get(SAVE_KEY).is_none());
        game.dispatch(Command::StartShuffle);
        game.settle();
        // Shuffling alone changes nothing persistent
        assert!(game.store().get(SAVE_KEY).is_none());

        game.dispatch(Command::SelectCard { index: 3 });
        game.settle();
        let saved = persistence::load_or_default(game.store());
        assert_eq!(saved.draws, 1);
    }

    #[test]
    fn test_autosave_after_interval() {
        let mut game = new_loop();
        game.dispatch(Command::Tick { elapsed_secs: 29 });
        assert!(game.store().get(SAVE_KEY).is_none());
        game.dispatch(Command::Tick { elapsed_secs: 1 });
        let saved = persistence::load_or_default(game.store());
        assert_eq!(saved.stats.time_played, 30);
    }

    #[test]
    fn test_load_resumes_saved_session() {
        let mut game = new_loop();
        game.dispatch(Command::FullReset);
        let store = game.store().clone();

        let resumed = GameLoop::load(store, ChaCha8Rng::seed_from_u64(1));
        assert_eq!(resumed.state().money, 0);
    }
}
