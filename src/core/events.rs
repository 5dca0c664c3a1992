//! Commands consumed from the shell and events emitted for rendering.

use super::scheduler::Timer;
use crate::achievements::AchievementId;
use crate::cards::Card;
use crate::error::RejectedAction;
use crate::shop::UpgradeId;
use chrono::NaiveDate;

/// Everything the host can ask the core to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartShuffle,
    /// Pick one of the laid-out cards by position.
    SelectCard { index: usize },
    PurchaseUpgrade { id: UpgradeId },
    ClaimDailyBonus { today: NaiveDate },
    Prestige,
    ResetRound,
    FullReset,
    /// Wall-clock play time since the previous tick.
    Tick { elapsed_secs: u64 },
    /// A delay requested through the scheduler has finished.
    TimerElapsed(Timer),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Table ───────────────────────────────────────────────────
    ShuffleStarted { duration_ms: u64 },
    CardsLaidOut { count: usize },
    CardRevealed { index: usize, card: Card },
    /// A needed hearts royal card was collected.
    CardCollected {
        card: Card,
        combo: u32,
        multiplier: f64,
        money_earned: u64,
    },
    WrongCard { card: Card, ranks_lost: usize },
    RoundWon {
        total_wins: u32,
        draws: u64,
        exit_progress: f64,
        door_open: bool,
    },
    TableCleared,
    RoundReset,

    // ── Economy ─────────────────────────────────────────────────
    MoneyChanged { old: u64, new: u64 },
    UpgradePurchased { id: UpgradeId, level: u32, cost: u64 },
    /// Ask the shell to spawn the dog sprite.
    DogAdopted,
    DailyBonusGranted { amount: u64, streak: u32 },

    // ── Progression ─────────────────────────────────────────────
    AchievementUnlocked { id: AchievementId },
    PrestigeCompleted { level: u32, points: u64 },
    FullReset,

    /// The command had no effect.
    ActionRejected { reason: RejectedAction },
}
