//! Session state, command dispatch and timing.

pub mod constants;
pub mod engine;
pub mod events;
pub mod game_loop;
pub mod game_state;
pub mod scheduler;

pub use engine::{apply, ApplyResult};
pub use events::{Command, GameEvent};
pub use game_loop::GameLoop;
pub use game_state::{GameState, RoundPhase};
pub use scheduler::{ManualScheduler, Scheduler, Timer, TimerKind};
