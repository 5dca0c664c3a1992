//! Prestige: trade the current run for permanent bonuses.
//!
//! Each prestige level permanently grants:
//! - 5% off every upgrade (see [`crate::shop::logic::prestige_discount_percent`])
//! - +0.1x to every card multiplier
//! - +0.02 luck
//! - a larger starting wallet after the reset

use crate::core::constants::{
    PRESTIGE_MONEY_BASE, PRESTIGE_MONEY_PER_LEVEL, PRESTIGE_MONEY_PER_POINT,
    PRESTIGE_WINS_PER_POINT, PRESTIGE_WIN_REQUIREMENT,
};
use crate::core::game_state::GameState;
use crate::error::RejectedAction;
use crate::progression::ledger::MoneyChange;

/// Checks if the player can prestige
pub fn can_prestige(state: &GameState) -> bool {
    state.total_wins >= PRESTIGE_WIN_REQUIREMENT
}

/// Points a prestige would grant right now:
/// `floor(total_wins / 5) + floor(lifetime_money / 10000)`.
pub fn prestige_points_for(state: &GameState) -> u64 {
    (state.total_wins / PRESTIGE_WINS_PER_POINT) as u64
        + state.lifetime_money / PRESTIGE_MONEY_PER_POINT
}

/// Wallet after prestiging into `prestige_level`.
pub fn starting_money_for(prestige_level: u32) -> u64 {
    PRESTIGE_MONEY_BASE + prestige_level as u64 * PRESTIGE_MONEY_PER_LEVEL
}

/// What a completed prestige did.
#[derive(Debug, Clone, PartialEq)]
pub struct PrestigeReport {
    pub level: u32,
    pub points_gained: u64,
    pub total_points: u64,
    pub money: MoneyChange,
}

/// Performs a prestige, resetting the run and incrementing prestige level.
///
/// Lifetime money, statistics, achievements and the daily streak survive.
pub fn perform_prestige(state: &mut GameState) -> Result<PrestigeReport, RejectedAction> {
    if !can_prestige(state) {
        return Err(RejectedAction::PrestigeLocked {
            wins: state.total_wins,
            required: PRESTIGE_WIN_REQUIREMENT,
        });
    }

    let points_gained = prestige_points_for(state);
    state.prestige_level += 1;
    state.prestige_points += points_gained;

    let old_money = state.money;
    state.money = starting_money_for(state.prestige_level);

    state.draws = 0;
    state.combo = 0;
    state.total_wins = 0;
    state.has_dog = false;
    state.royal_flush.reset();
    state.upgrades.reset();
    state.recompute_deck_size();
    state.clear_table();

    Ok(PrestigeReport {
        level: state.prestige_level,
        points_gained,
        total_points: state.prestige_points,
        money: MoneyChange {
            old: old_money,
            new: state.money,
        },
    })
}
