use super::constants::{FULL_DECK_SIZE, STARTING_MONEY};
use crate::achievements::Achievements;
use crate::cards::deck::derived_deck_size;
use crate::cards::{Card, RoyalFlushProgress};
use crate::progression::{DailyBonusState, Statistics};
use crate::shop::Upgrades;

/// Where the table is within a round.
///
/// `Idle -> Shuffling -> CardsLaidOut -> Revealing -> Clearing -> Idle`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    Idle,
    Shuffling,
    CardsLaidOut {
        cards: Vec<Card>,
    },
    /// A card was picked and is being flipped.
    Revealing {
        index: usize,
        card: Card,
    },
    /// Result shown, waiting for the table to clear.
    Clearing,
}

/// The whole session: economy, progress, shop, achievements and the table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Draws since the last round/prestige/full reset.
    pub draws: u64,
    pub money: u64,
    pub deck_size: u32,
    pub combo: u32,
    /// Flushes completed since the last prestige.
    pub total_wins: u32,
    pub royal_flush: RoyalFlushProgress,
    pub has_dog: bool,
    pub prestige_level: u32,
    pub prestige_points: u64,
    pub lifetime_money: u64,
    pub stats: Statistics,
    pub daily: DailyBonusState,
    pub achievements: Achievements,
    pub upgrades: Upgrades,
    /// Table state (transient, not saved)
    pub phase: RoundPhase,
    /// Bumped whenever the table is reset so stale timers can be ignored
    /// (transient, not saved)
    pub round_epoch: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new session with default values
    pub fn new() -> Self {
        Self {
            draws: 0,
            money: STARTING_MONEY,
            deck_size: FULL_DECK_SIZE,
            combo: 0,
            total_wins: 0,
            royal_flush: RoyalFlushProgress::new(),
            has_dog: false,
            prestige_level: 0,
            prestige_points: 0,
            lifetime_money: 0,
            stats: Statistics::default(),
            daily: DailyBonusState::default(),
            achievements: Achievements::default(),
            upgrades: Upgrades::new(),
            phase: RoundPhase::Idle,
            round_epoch: 0,
        }
    }

    /// Re-derive the deck size from the Deck Trimmer level.
    pub fn recompute_deck_size(&mut self) {
        self.deck_size = derived_deck_size(&self.upgrades);
    }

    pub fn is_shuffling(&self) -> bool {
        self.phase == RoundPhase::Shuffling
    }

    pub fn cards_laid_out(&self) -> Option<&[Card]> {
        match &self.phase {
            RoundPhase::CardsLaidOut { cards } => Some(cards),
            _ => None,
        }
    }

    /// Return the table to idle and invalidate any pending timers.
    pub fn clear_table(&mut self) {
        self.phase = RoundPhase::Idle;
        self.round_epoch += 1;
    }

    /// Start a fresh round: clear the flush, combo and draw counter.
    pub fn reset_round(&mut self) {
        self.royal_flush.reset();
        self.combo = 0;
        self.draws = 0;
        self.clear_table();
    }

    /// Wipe the current run back to an empty wallet.
    ///
    /// Prestige, lifetime totals, statistics, achievements and the daily
    /// streak are kept.
    pub fn full_reset(&mut self) {
        self.reset_round();
        self.money = 0;
        self.has_dog = false;
        self.upgrades.reset();
        self.recompute_deck_size();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::shop::UpgradeId;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.draws, 0);
        assert_eq!(state.money, 50);
        assert_eq!(state.deck_size, 52);
        assert_eq!(state.combo, 0);
        assert_eq!(state.total_wins, 0);
        assert_eq!(state.royal_flush.found_count(), 0);
        assert!(!state.has_dog);
        assert_eq!(state.prestige_level, 0);
        assert_eq!(state.phase, RoundPhase::Idle);
    }

    #[test]
    fn test_reset_round_keeps_economy() {
        let mut state = GameState::new();
        state.money = 300;
        state.draws = 14;
        state.combo = 2;
        state.royal_flush.mark_found(Rank::Jack);
        state.upgrades.set_level(UpgradeId::Luck, 2);

        state.reset_round();
        assert_eq!(state.money, 300);
        assert_eq!(state.draws, 0);
        assert_eq!(state.combo, 0);
        assert_eq!(state.royal_flush.found_count(), 0);
        assert_eq!(state.upgrades.level(UpgradeId::Luck), 2);
        assert_eq!(state.round_epoch, 1);
    }

    #[test]
    fn test_full_reset() {
        let mut state = GameState::new();
        state.money = 300;
        state.total_wins = 3;
        state.prestige_level = 2;
        state.lifetime_money = 900;
        state.has_dog = true;
        state.upgrades.set_level(UpgradeId::DeckReduction, 4);
        state.recompute_deck_size();

        state.full_reset();
        assert_eq!(state.money, 0);
        assert_eq!(state.deck_size, 52);
        assert!(!state.has_dog);
        assert_eq!(state.upgrades.level(UpgradeId::DeckReduction), 0);
        assert_eq!(state.total_wins, 3);
        assert_eq!(state.prestige_level, 2);
        assert_eq!(state.lifetime_money, 900);
    }

    #[test]
    fn test_cards_laid_out() {
        let mut state = GameState::new();
        assert!(state.cards_laid_out().is_none());
        state.phase = RoundPhase::Shuffling;
        assert!(state.is_shuffling());
        state.phase = RoundPhase::CardsLaidOut { cards: vec![] };
        assert_eq!(state.cards_laid_out().map(|c| c.len()), Some(0));
    }
}
