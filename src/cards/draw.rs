//! Dealing five face-down cards and resolving the player's pick.

use super::types::{Card, Suit};
use crate::core::constants::{BASE_SHUFFLE_MS, CARDS_PER_ROUND, MIN_SHUFFLE_MS};
use crate::core::game_state::GameState;
use crate::progression::ledger::{self, CollectReport, RoundWin};
use crate::shop::{UpgradeId, Upgrades};
use rand::Rng;
use std::time::Duration;

/// Shuffle animation length: `max(0.1s, 1s - shuffleSpeed * 0.2s)`.
pub fn shuffle_duration(upgrades: &Upgrades) -> Duration {
    let reduction_ms = (upgrades.total_effect(UpgradeId::ShuffleSpeed) * 1000.0).round() as u64;
    Duration::from_millis(BASE_SHUFFLE_MS.saturating_sub(reduction_ms).max(MIN_SHUFFLE_MS))
}

/// Deal up to five distinct cards by sampling without replacement.
pub fn draw_round<R: Rng>(mut deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    let count = CARDS_PER_ROUND.min(deck.len());
    let mut dealt = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..deck.len());
        dealt.push(deck.swap_remove(index));
    }
    dealt
}

/// A pick wins when it is a hearts royal card whose rank is still missing.
pub fn is_winning_pick(state: &GameState, card: Card) -> bool {
    card.rank.is_royal() && card.suit == Suit::Hearts && !state.royal_flush.is_found(card.rank)
}

/// What happened when a picked card was turned over.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    Collected {
        report: CollectReport,
        round_win: Option<RoundWin>,
    },
    Wrong {
        card: Card,
        ranks_lost: usize,
    },
}

/// Apply the win/fail rules for a picked card.
///
/// Any miss, including the right rank in the wrong suit or a rank already
/// collected, wipes the whole flush and the combo.
pub fn resolve_pick(state: &mut GameState, card: Card) -> PickOutcome {
    if !is_winning_pick(state, card) {
        let ranks_lost = ledger::record_wrong(state);
        return PickOutcome::Wrong { card, ranks_lost };
    }

    let report = ledger::record_collected(state, card);
    let round_win = if state.royal_flush.is_complete() {
        Some(ledger::record_round_win(state))
    } else {
        None
    };
    PickOutcome::Collected { report, round_win }
}
