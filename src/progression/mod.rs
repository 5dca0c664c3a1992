//! Economy ledger, prestige and the daily bonus.

pub mod daily;
pub mod ledger;
pub mod prestige;

pub use daily::{claim_daily_bonus, daily_bonus_amount, DailyBonusGrant, DailyBonusState};
pub use ledger::{exit_progress, multiplier_display, MoneyChange, Statistics};
pub use prestige::{can_prestige, perform_prestige, prestige_points_for, PrestigeReport};
