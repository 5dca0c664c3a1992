//! Unlock conditions, evaluated as pure predicates over the session.

use super::data::ALL_ACHIEVEMENTS;
use super::types::AchievementId;
use crate::core::constants::SPEEDRUN_MAX_DRAWS;
use crate::core::game_state::GameState;

/// Whether the session currently satisfies an achievement's condition.
pub fn is_earned(id: AchievementId, state: &GameState) -> bool {
    let stats = &state.stats;
    match id {
        AchievementId::FirstWin => stats.total_wins >= 1,
        AchievementId::Wins10 => stats.total_wins >= 10,
        AchievementId::Wins50 => stats.total_wins >= 50,
        AchievementId::Draws100 => stats.total_draws >= 100,
        AchievementId::Draws1000 => stats.total_draws >= 1000,
        AchievementId::Combo5 => stats.highest_combo >= 5,
        AchievementId::Money10000 => state.money >= 10_000,
        AchievementId::Speedrun => stats
            .fastest_win_draws
            .is_some_and(|draws| draws <= SPEEDRUN_MAX_DRAWS),
        AchievementId::Prestige1 => state.prestige_level >= 1,
        AchievementId::Prestige5 => state.prestige_level >= 5,
        AchievementId::DogOwner => state.has_dog,
        AchievementId::MaxUpgrade => state.upgrades.any_maxed(),
        AchievementId::DailyStreak7 => state.daily.streak >= 7,
        AchievementId::Collector100 => stats.cards_collected >= 100,
    }
}

/// Unlock every achievement whose condition now holds.
///
/// Returns only the newly unlocked ids, so calling it again with unchanged
/// state returns an empty list.
pub fn check_achievements(state: &mut GameState) -> Vec<AchievementId> {
    let earned: Vec<AchievementId> = ALL_ACHIEVEMENTS
        .iter()
        .map(|def| def.id)
        .filter(|id| !state.achievements.is_unlocked(*id) && is_earned(*id, state))
        .collect();

    earned
        .into_iter()
        .filter(|id| state.achievements.unlock(*id))
        .collect()
}
