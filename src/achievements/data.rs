//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // WINS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstWin,
        name: "Beginner's Luck",
        description: "Complete your first Royal Flush",
        category: AchievementCategory::Wins,
        icon: "🏆",
    },
    AchievementDef {
        id: AchievementId::Wins10,
        name: "High Roller",
        description: "Complete 10 Royal Flushes",
        category: AchievementCategory::Wins,
        icon: "🎰",
    },
    AchievementDef {
        id: AchievementId::Wins50,
        name: "Card Shark",
        description: "Complete 50 Royal Flushes",
        category: AchievementCategory::Wins,
        icon: "🦈",
    },
    AchievementDef {
        id: AchievementId::Speedrun,
        name: "Speed Demon",
        description: "Complete a Royal Flush in 20 draws or fewer",
        category: AchievementCategory::Wins,
        icon: "⚡",
    },
    // ═══════════════════════════════════════════════════════════════
    // DRAWS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Draws100,
        name: "Persistent",
        description: "Draw 100 cards",
        category: AchievementCategory::Draws,
        icon: "🃏",
    },
    AchievementDef {
        id: AchievementId::Draws1000,
        name: "Dedicated",
        description: "Draw 1,000 cards",
        category: AchievementCategory::Draws,
        icon: "🃏",
    },
    AchievementDef {
        id: AchievementId::Combo5,
        name: "Combo King",
        description: "Reach a 5x combo",
        category: AchievementCategory::Draws,
        icon: "🔥",
    },
    // ═══════════════════════════════════════════════════════════════
    // ECONOMY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Money10000,
        name: "Big Spender",
        description: "Hold $10,000 at once",
        category: AchievementCategory::Economy,
        icon: "💰",
    },
    AchievementDef {
        id: AchievementId::MaxUpgrade,
        name: "Maxed Out",
        description: "Raise any upgrade to its max level",
        category: AchievementCategory::Economy,
        icon: "⬆️",
    },
    AchievementDef {
        id: AchievementId::DailyStreak7,
        name: "Regular",
        description: "Claim the daily bonus 7 days in a row",
        category: AchievementCategory::Economy,
        icon: "📅",
    },
    // ═══════════════════════════════════════════════════════════════
    // PRESTIGE
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Prestige1,
        name: "New Beginnings",
        description: "Prestige for the first time",
        category: AchievementCategory::Prestige,
        icon: "⭐",
    },
    AchievementDef {
        id: AchievementId::Prestige5,
        name: "Veteran",
        description: "Reach prestige level 5",
        category: AchievementCategory::Prestige,
        icon: "🌟",
    },
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::DogOwner,
        name: "Good Boy",
        description: "Adopt a dog",
        category: AchievementCategory::Collection,
        icon: "🐕",
    },
    AchievementDef {
        id: AchievementId::Collector100,
        name: "Collector",
        description: "Collect 100 royal hearts",
        category: AchievementCategory::Collection,
        icon: "♥",
    },
];

/// Look up the definition for an achievement.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .unwrap_or(&ALL_ACHIEVEMENTS[0])
}

/// All definitions in a category, in display order.
pub fn get_achievements_by_category(
    category: AchievementCategory,
) -> impl Iterator<Item = &'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(move |def| def.category == category)
}
