//! Royal Flush - incremental card game core
//!
//! Deck weighting and draws, the money and combo ledger, the upgrade shop,
//! achievements, prestige, the daily bonus and save/load. Rendering, audio
//! and input belong to the host, which talks to the core through
//! [`Command`]s and [`GameEvent`]s.

pub mod achievements;
pub mod cards;
pub mod core;
pub mod error;
pub mod persistence;
pub mod progression;
pub mod shop;
pub mod simulator;

pub use crate::core::{apply, ApplyResult, Command, GameEvent, GameLoop, GameState, RoundPhase};
pub use error::{RejectedAction, SaveError};
