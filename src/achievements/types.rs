//! Achievement identifiers, definitions and the unlocked set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Achievement categories for grouping in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Wins,
    Draws,
    Economy,
    Prestige,
    Collection,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Wins,
        AchievementCategory::Draws,
        AchievementCategory::Economy,
        AchievementCategory::Prestige,
        AchievementCategory::Collection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Wins => "Wins",
            AchievementCategory::Draws => "Draws",
            AchievementCategory::Economy => "Economy",
            AchievementCategory::Prestige => "Prestige",
            AchievementCategory::Collection => "Collection",
        }
    }
}

/// Unique identifier for each achievement. Serialized names are save keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum AchievementId {
    FirstWin,
    Wins10,
    Wins50,
    Draws100,
    Draws1000,
    Combo5,
    Money10000,
    Speedrun,
    Prestige1,
    Prestige5,
    DogOwner,
    MaxUpgrade,
    DailyStreak7,
    Collector100,
}

impl AchievementId {
    /// Save-file key for this achievement.
    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstWin => "firstWin",
            AchievementId::Wins10 => "wins10",
            AchievementId::Wins50 => "wins50",
            AchievementId::Draws100 => "draws100",
            AchievementId::Draws1000 => "draws1000",
            AchievementId::Combo5 => "combo5",
            AchievementId::Money10000 => "money10000",
            AchievementId::Speedrun => "speedrun",
            AchievementId::Prestige1 => "prestige1",
            AchievementId::Prestige5 => "prestige5",
            AchievementId::DogOwner => "dogOwner",
            AchievementId::MaxUpgrade => "maxUpgrade",
            AchievementId::DailyStreak7 => "dailyStreak7",
            AchievementId::Collector100 => "collector100",
        }
    }

    pub fn from_key(key: &str) -> Option<AchievementId> {
        super::data::ALL_ACHIEVEMENTS
            .iter()
            .map(|def| def.id)
            .find(|id| id.key() == key)
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub icon: &'static str,
}

/// Unlocked achievements. Flags only ever go from locked to unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Achievements {
    unlocked: BTreeSet<AchievementId>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlocked.insert(id)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = AchievementId> + '_ {
        self.unlocked.iter().copied()
    }

    pub fn total_count(&self) -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Get unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Get count of unlocked/total by category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        let in_category: Vec<_> = super::data::ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = in_category
            .iter()
            .filter(|a| self.is_unlocked(a.id))
            .count();
        (unlocked, in_category.len())
    }
}
