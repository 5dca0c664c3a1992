//! Daily login bonus with a consecutive-day streak.
//!
//! Claims are keyed on calendar dates, not elapsed time: one claim per date,
//! and the streak survives only if the previous claim was yesterday.

use crate::core::constants::{DAILY_BONUS_BASE, DAILY_BONUS_PER_PRESTIGE, DAILY_BONUS_PER_STREAK};
use crate::core::game_state::GameState;
use crate::error::RejectedAction;
use crate::progression::ledger::{self, MoneyChange};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailyBonusState {
    pub last_claimed: Option<NaiveDate>,
    pub streak: u32,
}

impl DailyBonusState {
    /// True if no claim has been made on `today`.
    pub fn can_claim(&self, today: NaiveDate) -> bool {
        match self.last_claimed {
            Some(last) => today > last,
            None => true,
        }
    }
}

/// `50 + streak * 25 + prestige_level * 10`
pub fn daily_bonus_amount(streak: u32, prestige_level: u32) -> u64 {
    DAILY_BONUS_BASE
        + streak as u64 * DAILY_BONUS_PER_STREAK
        + prestige_level as u64 * DAILY_BONUS_PER_PRESTIGE
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyBonusGrant {
    pub amount: u64,
    pub streak: u32,
    pub money: MoneyChange,
}

/// Claim today's bonus.
///
/// A gap of more than one day resets the streak before it is incremented,
/// so a lapsed player restarts at streak 1.
pub fn claim_daily_bonus(
    state: &mut GameState,
    today: NaiveDate,
) -> Result<DailyBonusGrant, RejectedAction> {
    if let Some(last) = state.daily.last_claimed {
        if today == last {
            return Err(RejectedAction::AlreadyClaimedToday);
        }
        if today < last {
            return Err(RejectedAction::ClockWentBackwards);
        }
        if (today - last).num_days() > 1 {
            state.daily.streak = 0;
        }
    }

    state.daily.streak += 1;
    state.daily.last_claimed = Some(today);

    let amount = daily_bonus_amount(state.daily.streak, state.prestige_level);
    let money = ledger::credit(state, amount);

    Ok(DailyBonusGrant {
        amount,
        streak: state.daily.streak,
        money,
    })
}
