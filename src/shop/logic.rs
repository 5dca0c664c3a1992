//! Upgrade pricing and purchases.

use super::types::UpgradeId;
use crate::core::constants::{
    MIN_DISCOUNT_PERCENT, MIN_UPGRADE_COST, PRESTIGE_DISCOUNT_PERCENT_PER_LEVEL,
    UPGRADE_COST_GROWTH,
};
use crate::core::game_state::GameState;
use crate::error::RejectedAction;
use crate::progression::ledger::{self, MoneyChange};

/// Percent of list price paid at a prestige level: 5% off per level,
/// never below [`MIN_DISCOUNT_PERCENT`].
pub fn prestige_discount_percent(prestige_level: u32) -> u32 {
    100u32
        .saturating_sub(prestige_level.saturating_mul(PRESTIGE_DISCOUNT_PERCENT_PER_LEVEL))
        .max(MIN_DISCOUNT_PERCENT)
}

/// `floor(base_cost * 1.5^level * discount)`, at least 1.
pub fn upgrade_cost(id: UpgradeId, level: u32, prestige_level: u32) -> u64 {
    let list_price = id.def().base_cost as f64 * UPGRADE_COST_GROWTH.powi(level as i32);
    let discounted = list_price * prestige_discount_percent(prestige_level) as f64 / 100.0;
    (discounted.floor() as u64).max(MIN_UPGRADE_COST)
}

/// Price of the next level, or None if the upgrade is maxed.
pub fn next_cost(state: &GameState, id: UpgradeId) -> Option<u64> {
    if state.upgrades.is_maxed(id) {
        return None;
    }
    Some(upgrade_cost(
        id,
        state.upgrades.level(id),
        state.prestige_level,
    ))
}

pub fn can_afford(state: &GameState, id: UpgradeId) -> bool {
    match next_cost(state, id) {
        Some(cost) => state.money >= cost,
        None => false,
    }
}

/// Receipt for a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: UpgradeId,
    pub new_level: u32,
    pub cost: u64,
    pub money: MoneyChange,
    /// True when this purchase brought the dog home.
    pub dog_adopted: bool,
}

/// Buy one level of an upgrade and apply its immediate side effect.
pub fn purchase(state: &mut GameState, id: UpgradeId) -> Result<Purchase, RejectedAction> {
    let cost = next_cost(state, id).ok_or(RejectedAction::UpgradeMaxed { id })?;
    if state.money < cost {
        return Err(RejectedAction::InsufficientFunds {
            cost,
            money: state.money,
        });
    }

    let new_level = state
        .upgrades
        .increment(id)
        .ok_or(RejectedAction::UpgradeMaxed { id })?;
    let money = ledger::debit(state, cost);

    let mut dog_adopted = false;
    match id {
        UpgradeId::DeckReduction => state.recompute_deck_size(),
        UpgradeId::Dog => {
            dog_adopted = !state.has_dog;
            state.has_dog = true;
        }
        _ => {}
    }

    Ok(Purchase {
        id,
        new_level,
        cost,
        money,
        dog_adopted,
    })
}
