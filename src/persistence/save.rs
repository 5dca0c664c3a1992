//! Versioned save blob.
//!
//! Every field has a default so older or partial blobs still load. Fields
//! are keyed by stable string ids rather than enum positions so catalogs
//! can grow without breaking saves.

use crate::achievements::{AchievementId, Achievements, ALL_ACHIEVEMENTS};
use crate::cards::{FlushSlot, Rank, RoyalFlushProgress};
use crate::core::constants::{FULL_DECK_SIZE, SAVE_VERSION, STARTING_MONEY};
use crate::core::game_state::GameState;
use crate::error::SaveError;
use crate::progression::{DailyBonusState, Statistics};
use crate::shop::{UpgradeId, Upgrades};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Everything persisted between sessions.
///
/// The table phase and round epoch are transient and never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveData {
    /// Schema version. Blobs written before versioning load as 0.
    pub version: u32,
    pub draws: u64,
    pub money: u64,
    /// Informational only, re-derived from upgrades on load.
    pub deck_size: u32,
    pub combo: u32,
    pub total_wins: u32,
    /// Keyed by rank label ("10", "J", "Q", "K", "A").
    pub royal_flush: BTreeMap<String, FlushSlot>,
    pub has_dog: bool,
    pub prestige_level: u32,
    pub prestige_points: u64,
    pub lifetime_money: u64,
    pub stats: Statistics,
    pub last_daily_bonus: Option<NaiveDate>,
    pub daily_bonus_streak: u32,
    /// Achievement key -> unlocked. Only `true` entries matter on load.
    pub achievements: BTreeMap<String, bool>,
    /// Upgrade key -> level. Missing keys are level 0.
    pub upgrades: BTreeMap<String, u32>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: 0,
            draws: 0,
            money: STARTING_MONEY,
            deck_size: FULL_DECK_SIZE,
            combo: 0,
            total_wins: 0,
            royal_flush: BTreeMap::new(),
            has_dog: false,
            prestige_level: 0,
            prestige_points: 0,
            lifetime_money: 0,
            stats: Statistics::default(),
            last_daily_bonus: None,
            daily_bonus_streak: 0,
            achievements: BTreeMap::new(),
            upgrades: BTreeMap::new(),
        }
    }
}

impl SaveData {
    /// Snapshot the persisted part of a session.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            draws: state.draws,
            money: state.money,
            deck_size: state.deck_size,
            combo: state.combo,
            total_wins: state.total_wins,
            royal_flush: state
                .royal_flush
                .iter()
                .map(|(rank, slot)| (rank.label().to_string(), slot))
                .collect(),
            has_dog: state.has_dog,
            prestige_level: state.prestige_level,
            prestige_points: state.prestige_points,
            lifetime_money: state.lifetime_money,
            stats: state.stats.clone(),
            last_daily_bonus: state.daily.last_claimed,
            daily_bonus_streak: state.daily.streak,
            achievements: ALL_ACHIEVEMENTS
                .iter()
                .map(|def| {
                    let unlocked = state.achievements.is_unlocked(def.id);
                    (def.id.key().to_string(), unlocked)
                })
                .collect(),
            upgrades: state
                .upgrades
                .iter()
                .map(|(id, level)| (id.key().to_string(), level))
                .collect(),
        }
    }

    /// Rebuild a session. Unknown keys are dropped, levels are clamped to
    /// their maximum and the deck size is re-derived.
    pub fn into_state(self) -> GameState {
        let mut upgrades = Upgrades::new();
        for (key, level) in &self.upgrades {
            if let Some(id) = UpgradeId::from_key(key) {
                upgrades.set_level(id, *level);
            }
        }

        let mut achievements = Achievements::default();
        for (key, unlocked) in &self.achievements {
            if let (true, Some(id)) = (*unlocked, AchievementId::from_key(key)) {
                achievements.unlock(id);
            }
        }

        let royal_flush = RoyalFlushProgress::from_slots(
            self.royal_flush
                .iter()
                .filter_map(|(label, slot)| Rank::from_label(label).map(|rank| (rank, *slot))),
        );

        let mut state = GameState {
            draws: self.draws,
            money: self.money,
            deck_size: self.deck_size,
            combo: self.combo,
            total_wins: self.total_wins,
            royal_flush,
            has_dog: self.has_dog,
            prestige_level: self.prestige_level,
            prestige_points: self.prestige_points,
            lifetime_money: self.lifetime_money,
            stats: self.stats,
            daily: DailyBonusState {
                last_claimed: self.last_daily_bonus,
                streak: self.daily_bonus_streak,
            },
            achievements,
            upgrades,
            ..GameState::new()
        };
        state.recompute_deck_size();
        state
    }

    pub fn encode(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn decode(blob: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(blob)?)
    }
}

/// Serialize a session to a save blob.
pub fn encode_state(state: &GameState) -> Result<String, SaveError> {
    SaveData::from_state(state).encode()
}

/// Load a session from a blob, falling back to a new game if it is corrupt.
pub fn decode_state_or_default(blob: &str) -> GameState {
    match SaveData::decode(blob) {
        Ok(data) => data.into_state(),
        Err(e) => {
            warn!(error = %e, "corrupt save, starting a new game");
            GameState::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blob_is_new_game() {
        let state = decode_state_or_default("{}");
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_missing_version_is_zero() {
        let data = SaveData::decode(r#"{"money": 75}"#).unwrap();
        assert_eq!(data.version, 0);
        assert_eq!(data.money, 75);
        assert_eq!(data.deck_size, 52);
    }

    #[test]
    fn test_encode_writes_current_version() {
        let blob = encode_state(&GameState::new()).unwrap();
        assert_eq!(SaveData::decode(&blob).unwrap().version, SAVE_VERSION);
    }

    #[test]
    fn test_stale_deck_size_is_rederived() {
        let blob = r#"{"deckSize": 12, "upgrades": {"deckReduction": 3}}"#;
        let state = decode_state_or_default(blob);
        assert_eq!(state.deck_size, 40);
        assert_eq!(state.upgrades.level(UpgradeId::DeckReduction), 3);
    }

    #[test]
    fn test_false_and_unknown_achievements_stay_locked() {
        let blob = r#"{"achievements": {"firstWin": true, "wins10": false, "retired": true}}"#;
        let state = decode_state_or_default(blob);
        assert!(state.achievements.is_unlocked(AchievementId::FirstWin));
        assert!(!state.achievements.is_unlocked(AchievementId::Wins10));
        assert_eq!(state.achievements.unlocked_count(), 1);
    }

    #[test]
    fn test_partial_stats_merge_with_defaults() {
        let blob = r#"{"stats": {"totalDraws": 40}}"#;
        let state = decode_state_or_default(blob);
        assert_eq!(state.stats.total_draws, 40);
        assert_eq!(state.stats.cards_collected, 0);
        assert_eq!(state.stats.fastest_win_draws, None);
    }

    #[test]
    fn test_royal_flush_slots_by_label() {
        let blob = r#"{"royalFlush": {"J": {"found": true, "suit": "hearts"}, "Q": {"found": false, "suit": null}}}"#;
        let state = decode_state_or_default(blob);
        assert!(state.royal_flush.is_found(Rank::Jack));
        assert!(!state.royal_flush.is_found(Rank::Queen));
        assert_eq!(state.royal_flush.found_count(), 1);
    }

    #[test]
    fn test_upgrade_levels_clamped() {
        let state = decode_state_or_default(r#"{"upgrades": {"dog": 4}}"#);
        assert_eq!(state.upgrades.level(UpgradeId::Dog), 1);
    }

    #[test]
    fn test_corrupt_blob_falls_back() {
        assert_eq!(decode_state_or_default("not json"), GameState::new());
        assert_eq!(decode_state_or_default(r#"{"money": "lots"}"#), GameState::new());
    }

    #[test]
    fn test_daily_bonus_fields() {
        let blob = r#"{"lastDailyBonus": "2024-03-09", "dailyBonusStreak": 4}"#;
        let state = decode_state_or_default(blob);
        assert_eq!(
            state.daily.last_claimed,
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(state.daily.streak, 4);
    }
}
