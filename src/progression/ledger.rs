//! Money, combo and statistics bookkeeping.

use crate::cards::Card;
use crate::core::constants::{
    BASE_CARD_REWARD, EXIT_DOOR_WINS, FLOOR_EPSILON, PRESTIGE_MULTIPLIER_PER_LEVEL,
};
use crate::core::game_state::GameState;
use crate::shop::{UpgradeId, Upgrades};
use serde::{Deserialize, Serialize};

/// Lifetime counters. Never reset except `current_streak`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    pub total_draws: u64,
    pub total_wins: u64,
    pub total_money: u64,
    pub cards_collected: u64,
    pub wrong_cards: u64,
    pub games_played: u64,
    /// Seconds of ticked play time.
    pub time_played: u64,
    pub highest_combo: u32,
    pub best_streak: u64,
    pub current_streak: u64,
    /// Fewest draws any completed flush has taken.
    pub fastest_win_draws: Option<u64>,
}

/// Before/after pair for a money mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyChange {
    pub old: u64,
    pub new: u64,
}

/// `combo + multiplierBoost + prestige_level * 0.1`
pub fn total_multiplier(combo: u32, upgrades: &Upgrades, prestige_level: u32) -> f64 {
    combo as f64
        + upgrades.total_effect(UpgradeId::MultiplierBoost)
        + prestige_level as f64 * PRESTIGE_MULTIPLIER_PER_LEVEL
}

/// `floor((10 + moneyBoost) * multiplier)`
pub fn money_earned(upgrades: &Upgrades, multiplier: f64) -> u64 {
    let base = BASE_CARD_REWARD + upgrades.total_effect(UpgradeId::MoneyBoost);
    (base * multiplier + FLOOR_EPSILON).floor().max(0.0) as u64
}

/// Multiplier shown next to the combo counter, `None` with no combo running.
pub fn multiplier_display(state: &GameState) -> Option<f64> {
    if state.combo == 0 {
        return None;
    }
    Some(total_multiplier(
        state.combo,
        &state.upgrades,
        state.prestige_level,
    ))
}

/// How close the EXIT sign is, from 0.0 to 1.0.
pub fn exit_progress(total_wins: u32) -> f64 {
    (total_wins as f64 / EXIT_DOOR_WINS as f64).min(1.0)
}

/// Add earned money to the wallet and every lifetime accumulator.
pub fn credit(state: &mut GameState, amount: u64) -> MoneyChange {
    let old = state.money;
    state.money = state.money.saturating_add(amount);
    state.lifetime_money = state.lifetime_money.saturating_add(amount);
    state.stats.total_money = state.stats.total_money.saturating_add(amount);
    MoneyChange {
        old,
        new: state.money,
    }
}

/// Spend money. Callers check affordability first.
pub fn debit(state: &mut GameState, amount: u64) -> MoneyChange {
    let old = state.money;
    state.money = state.money.saturating_sub(amount);
    MoneyChange {
        old,
        new: state.money,
    }
}

/// Result of collecting a needed hearts royal card.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectReport {
    pub card: Card,
    pub combo: u32,
    pub multiplier: f64,
    pub money_earned: u64,
    pub money: MoneyChange,
}

/// Apply the win arithmetic for a correct card.
pub fn record_collected(state: &mut GameState, card: Card) -> CollectReport {
    state.royal_flush.mark_found(card.rank);
    state.combo += 1;
    state.draws += 1;

    let stats = &mut state.stats;
    stats.total_draws += 1;
    stats.cards_collected += 1;
    stats.current_streak += 1;
    stats.highest_combo = stats.highest_combo.max(state.combo);
    stats.best_streak = stats.best_streak.max(stats.current_streak);

    let multiplier = total_multiplier(state.combo, &state.upgrades, state.prestige_level);
    let earned = money_earned(&state.upgrades, multiplier);
    let money = credit(state, earned);

    CollectReport {
        card,
        combo: state.combo,
        multiplier,
        money_earned: earned,
        money,
    }
}

/// Apply the penalty for a wrong card. Returns how many found ranks were lost.
pub fn record_wrong(state: &mut GameState) -> usize {
    let lost = state.royal_flush.found_count();
    state.royal_flush.reset();
    state.combo = 0;
    state.draws += 1;
    state.stats.total_draws += 1;
    state.stats.wrong_cards += 1;
    state.stats.current_streak = 0;
    lost
}

/// Summary of a completed royal flush.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundWin {
    pub total_wins: u32,
    pub draws: u64,
    pub exit_progress: f64,
    pub door_open: bool,
}

/// Count a completed flush.
pub fn record_round_win(state: &mut GameState) -> RoundWin {
    state.total_wins += 1;
    state.stats.total_wins += 1;
    state.stats.games_played += 1;
    state.stats.fastest_win_draws = Some(match state.stats.fastest_win_draws {
        Some(best) => best.min(state.draws),
        None => state.draws,
    });

    RoundWin {
        total_wins: state.total_wins,
        draws: state.draws,
        exit_progress: exit_progress(state.total_wins),
        door_open: state.total_wins >= EXIT_DOOR_WINS,
    }
}
