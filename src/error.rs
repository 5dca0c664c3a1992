//! Error taxonomy for the game core.
//!
//! Nothing here is fatal. A [`RejectedAction`] leaves the session untouched
//! and a [`SaveError`] is recovered by falling back to a fresh session.

use crate::shop::UpgradeId;
use thiserror::Error;

/// An action the player attempted that had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectedAction {
    #[error("not enough money: costs ${cost}, have ${money}")]
    InsufficientFunds { cost: u64, money: u64 },

    #[error("{id:?} is already at max level")]
    UpgradeMaxed { id: UpgradeId },

    #[error("the deck is still being shuffled")]
    ShuffleInProgress,

    #[error("there are no cards on the table")]
    NoCardsLaidOut,

    #[error("a round is in progress")]
    RoundInProgress,

    #[error("the royal flush is complete, start a new round first")]
    RoundComplete,

    #[error("no card at position {index}")]
    InvalidCardIndex { index: usize },

    #[error("prestige needs {required} wins, have {wins}")]
    PrestigeLocked { wins: u32, required: u32 },

    #[error("daily bonus already claimed today")]
    AlreadyClaimedToday,

    #[error("date is earlier than the last daily bonus claim")]
    ClockWentBackwards,
}

/// Failure to read or decode a save blob.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save store unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt save data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

