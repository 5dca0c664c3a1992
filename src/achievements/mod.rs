//! Achievement system module.
//!
//! Achievements are one-way flags stored in the session save. Conditions
//! are re-evaluated after every command; unlocking is idempotent.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use logic::{check_achievements, is_earned};
pub use types::{AchievementCategory, AchievementDef, AchievementId, Achievements};
