//! Upgrade catalog and per-session upgrade levels.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every purchasable upgrade. Serialized names are the save-file keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeId {
    DeckReduction,
    ShuffleSpeed,
    Luck,
    SuitFilter,
    MoneyBoost,
    MultiplierBoost,
    Dog,
}

impl UpgradeId {
    /// All upgrades in shop display order.
    pub const ALL: [UpgradeId; 7] = [
        UpgradeId::DeckReduction,
        UpgradeId::ShuffleSpeed,
        UpgradeId::Luck,
        UpgradeId::SuitFilter,
        UpgradeId::MoneyBoost,
        UpgradeId::MultiplierBoost,
        UpgradeId::Dog,
    ];

    /// Save-file key for this upgrade.
    pub fn key(&self) -> &'static str {
        match self {
            UpgradeId::DeckReduction => "deckReduction",
            UpgradeId::ShuffleSpeed => "shuffleSpeed",
            UpgradeId::Luck => "luck",
            UpgradeId::SuitFilter => "suitFilter",
            UpgradeId::MoneyBoost => "moneyBoost",
            UpgradeId::MultiplierBoost => "multiplierBoost",
            UpgradeId::Dog => "dog",
        }
    }

    pub fn from_key(key: &str) -> Option<UpgradeId> {
        UpgradeId::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn def(&self) -> &'static UpgradeDef {
        match self {
            UpgradeId::DeckReduction => &UPGRADE_DEFS[0],
            UpgradeId::ShuffleSpeed => &UPGRADE_DEFS[1],
            UpgradeId::Luck => &UPGRADE_DEFS[2],
            UpgradeId::SuitFilter => &UPGRADE_DEFS[3],
            UpgradeId::MoneyBoost => &UPGRADE_DEFS[4],
            UpgradeId::MultiplierBoost => &UPGRADE_DEFS[5],
            UpgradeId::Dog => &UPGRADE_DEFS[6],
        }
    }

    pub fn max_level(&self) -> u32 {
        self.def().max_level
    }

    pub fn effect(&self) -> f64 {
        self.def().effect
    }
}

/// Static definition of an upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub max_level: u32,
    pub base_cost: u64,
    pub effect: f64,
}

pub static UPGRADE_DEFS: [UpgradeDef; 7] = [
    UpgradeDef {
        id: UpgradeId::DeckReduction,
        name: "Deck Trimmer",
        description: "Remove 4 cards from the deck",
        max_level: 10,
        base_cost: 20,
        effect: 4.0,
    },
    UpgradeDef {
        id: UpgradeId::ShuffleSpeed,
        name: "Quick Hands",
        description: "Reduce shuffle time by 0.2s",
        max_level: 5,
        base_cost: 20,
        effect: 0.2,
    },
    UpgradeDef {
        id: UpgradeId::Luck,
        name: "Lady Luck",
        description: "Increase chance of correct card appearing",
        max_level: 7,
        base_cost: 20,
        effect: 0.05,
    },
    UpgradeDef {
        id: UpgradeId::SuitFilter,
        name: "Suit Converter",
        description: "Convert random cards to hearts",
        max_level: 5,
        base_cost: 20,
        effect: 0.05,
    },
    UpgradeDef {
        id: UpgradeId::MoneyBoost,
        name: "Lucky Charm",
        description: "Earn more money per correct card",
        max_level: 10,
        base_cost: 20,
        effect: 5.0,
    },
    UpgradeDef {
        id: UpgradeId::MultiplierBoost,
        name: "Combo Master",
        description: "Increase combo multiplier by 0.3x",
        max_level: 10,
        base_cost: 20,
        effect: 0.3,
    },
    UpgradeDef {
        id: UpgradeId::Dog,
        name: "Good Boy",
        description: "Get an Irish Setter companion",
        max_level: 1,
        base_cost: 500,
        effect: 1.0,
    },
];

/// Current level of every upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrades {
    levels: HashMap<UpgradeId, u32>,
}

impl Default for Upgrades {
    fn default() -> Self {
        let mut levels = HashMap::new();
        for id in UpgradeId::ALL {
            levels.insert(id, 0);
        }
        Upgrades { levels }
    }
}

impl Upgrades {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, id: UpgradeId) -> u32 {
        *self.levels.get(&id).unwrap_or(&0)
    }

    /// `level * effect` for the given upgrade.
    pub fn total_effect(&self, id: UpgradeId) -> f64 {
        self.level(id) as f64 * id.effect()
    }

    pub fn is_maxed(&self, id: UpgradeId) -> bool {
        self.level(id) >= id.max_level()
    }

    pub fn any_maxed(&self) -> bool {
        UpgradeId::ALL.iter().any(|id| self.is_maxed(*id))
    }

    /// Fraction of the way to max level, for progress bars.
    pub fn progress(&self, id: UpgradeId) -> f64 {
        self.level(id) as f64 / id.max_level() as f64
    }

    /// Raise one level. Returns the new level, or None if already maxed.
    pub fn increment(&mut self, id: UpgradeId) -> Option<u32> {
        if self.is_maxed(id) {
            return None;
        }
        let new_level = self.level(id) + 1;
        self.levels.insert(id, new_level);
        Some(new_level)
    }

    /// Set a level from persisted data, clamped to the upgrade's max.
    pub fn set_level(&mut self, id: UpgradeId, level: u32) {
        self.levels.insert(id, level.min(id.max_level()));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (UpgradeId, u32)> + '_ {
        UpgradeId::ALL.iter().map(move |id| (*id, self.level(*id)))
    }
}
