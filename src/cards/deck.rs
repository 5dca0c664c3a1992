//! Weighted deck construction.
//!
//! Each round the deck is rebuilt from scratch: one or more "luck copies" of
//! every hearts royal card still missing, then uniformly random filler up to
//! the target size. The Suit Converter upgrade may turn any filler card into
//! a heart.

use super::types::{Card, Rank, RoyalFlushProgress, Suit};
use crate::core::constants::{
    FLOOR_EPSILON, FULL_DECK_SIZE, LUCK_COPIES_SCALE, MIN_DECK_SIZE, PRESTIGE_LUCK_PER_LEVEL,
};
use crate::core::game_state::GameState;
use crate::shop::{UpgradeId, Upgrades};
use rand::Rng;

/// Deck size implied by the Deck Trimmer level: `52 - level * effect`.
///
/// This is the authoritative derivation; the stored deck size is always
/// recomputed from it after upgrade levels change.
pub fn derived_deck_size(upgrades: &Upgrades) -> u32 {
    let removed = upgrades.total_effect(UpgradeId::DeckReduction).round() as u32;
    FULL_DECK_SIZE.saturating_sub(removed)
}

/// Number of cards actually dealt into the pool, never below five.
pub fn target_deck_size(deck_size: u32) -> u32 {
    deck_size.max(MIN_DECK_SIZE)
}

/// `luck.level * luck.effect + prestige_level * 0.02`
pub fn luck_bonus(upgrades: &Upgrades, prestige_level: u32) -> f64 {
    upgrades.total_effect(UpgradeId::Luck) + prestige_level as f64 * PRESTIGE_LUCK_PER_LEVEL
}

/// Copies of each missing hearts royal card: `1 + floor(luck_bonus * 10)`.
pub fn luck_copies(luck_bonus: f64) -> usize {
    1 + (luck_bonus * LUCK_COPIES_SCALE + FLOOR_EPSILON).floor().max(0.0) as usize
}

/// Chance that a filler card is converted to hearts.
pub fn suit_filter_chance(upgrades: &Upgrades) -> f64 {
    upgrades.total_effect(UpgradeId::SuitFilter)
}

/// Everything the deck builder needs, captured from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckRecipe {
    pub target_size: usize,
    pub luck_copies: usize,
    pub suit_filter_chance: f64,
    pub missing: Vec<Rank>,
}

impl DeckRecipe {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            target_size: target_deck_size(state.deck_size) as usize,
            luck_copies: luck_copies(luck_bonus(&state.upgrades, state.prestige_level)),
            suit_filter_chance: suit_filter_chance(&state.upgrades),
            missing: state.royal_flush.missing().collect(),
        }
    }

    /// Recipe for a session with the given flush progress and upgrades.
    pub fn new(progress: &RoyalFlushProgress, upgrades: &Upgrades, prestige_level: u32) -> Self {
        Self {
            target_size: target_deck_size(derived_deck_size(upgrades)) as usize,
            luck_copies: luck_copies(luck_bonus(upgrades, prestige_level)),
            suit_filter_chance: suit_filter_chance(upgrades),
            missing: progress.missing().collect(),
        }
    }
}

/// Build this round's card pool.
///
/// If the luck copies alone exceed the target size they are all kept and no
/// filler is added.
pub fn build_deck<R: Rng>(recipe: &DeckRecipe, rng: &mut R) -> Vec<Card> {
    let mut deck = Vec::with_capacity(recipe.target_size.max(recipe.missing.len() * recipe.luck_copies));

    for rank in &recipe.missing {
        for _ in 0..recipe.luck_copies {
            deck.push(Card::new(*rank, Suit::Hearts));
        }
    }

    while deck.len() < recipe.target_size {
        let rank = Rank::ALL[rng.gen_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[rng.gen_range(0..Suit::ALL.len())];
        let suit = if rng.gen::<f64>() < recipe.suit_filter_chance {
            Suit::Hearts
        } else {
            suit
        };
        deck.push(Card::new(rank, suit));
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn upgrades_with(id: UpgradeId, level: u32) -> Upgrades {
        let mut upgrades = Upgrades::new();
        upgrades.set_level(id, level);
        upgrades
    }

    #[test]
    fn test_deck_size_for_every_trimmer_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for level in 0..=UpgradeId::DeckReduction.max_level() {
            let upgrades = upgrades_with(UpgradeId::DeckReduction, level);
            let recipe = DeckRecipe::new(&RoyalFlushProgress::new(), &upgrades, 0);
            let deck = build_deck(&recipe, &mut rng);
            let expected = 5.max(52 - level as i64 * 4) as usize;
            assert_eq!(deck.len(), expected, "trimmer level {}", level);
        }
    }

    #[test]
    fn test_target_size_never_below_five() {
        assert_eq!(target_deck_size(0), 5);
        assert_eq!(target_deck_size(4), 5);
        assert_eq!(target_deck_size(12), 12);
    }

    #[test]
    fn test_luck_copies_example() {
        let upgrades = upgrades_with(UpgradeId::Luck, 3);
        let bonus = luck_bonus(&upgrades, 0);
        assert!((bonus - 0.15).abs() < 1e-9);
        assert_eq!(luck_copies(bonus), 2);
    }

    #[test]
    fn test_luck_copies_include_prestige() {
        // 0.02 per prestige level: five levels add one copy
        let upgrades = Upgrades::new();
        assert_eq!(luck_copies(luck_bonus(&upgrades, 0)), 1);
        assert_eq!(luck_copies(luck_bonus(&upgrades, 4)), 1);
        assert_eq!(luck_copies(luck_bonus(&upgrades, 5)), 2);
    }

    #[test]
    fn test_luck_copies_exact_multiples_do_not_round_down() {
        let upgrades = upgrades_with(UpgradeId::Luck, 6);
        assert_eq!(luck_copies(luck_bonus(&upgrades, 0)), 4);
    }

    #[test]
    fn test_deck_contains_luck_copies_of_missing_ranks() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut progress = RoyalFlushProgress::new();
        progress.mark_found(Rank::Ace);
        let upgrades = upgrades_with(UpgradeId::Luck, 3);
        let recipe = DeckRecipe::new(&progress, &upgrades, 0);
        let deck = build_deck(&recipe, &mut rng);

        // Luck copies are laid down first
        for (i, rank) in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
            .iter()
            .enumerate()
        {
            assert_eq!(deck[i * 2], Card::new(*rank, Suit::Hearts));
            assert_eq!(deck[i * 2 + 1], Card::new(*rank, Suit::Hearts));
        }
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn test_luck_copies_can_exceed_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let recipe = DeckRecipe {
            target_size: 5,
            luck_copies: 3,
            suit_filter_chance: 0.0,
            missing: Rank::ROYAL.to_vec(),
        };
        let deck = build_deck(&recipe, &mut rng);
        assert_eq!(deck.len(), 15);
        assert!(deck.iter().all(|c| c.suit == Suit::Hearts && c.rank.is_royal()));
    }

    #[test]
    fn test_full_suit_filter_makes_everything_hearts() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let recipe = DeckRecipe {
            target_size: 40,
            luck_copies: 1,
            suit_filter_chance: 1.0,
            missing: vec![],
        };
        let deck = build_deck(&recipe, &mut rng);
        assert_eq!(deck.len(), 40);
        assert!(deck.iter().all(|c| c.suit == Suit::Hearts));
    }

    #[test]
    fn test_partial_suit_filter_raises_hearts_share() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let recipe = DeckRecipe {
            target_size: 2000,
            luck_copies: 4,
            suit_filter_chance: 0.25,
            missing: Rank::ROYAL.to_vec(),
        };
        let deck = build_deck(&recipe, &mut rng);
        assert_eq!(deck.len(), 2000);

        // Luck copies fill the front and count toward the target
        let (copies, filler) = deck.split_at(20);
        assert!(copies
            .iter()
            .all(|c| c.suit == Suit::Hearts && c.rank.is_royal()));
        assert_eq!(filler.len(), 1980);

        // 0.25 + 0.75 * 0.25 = 0.4375 expected
        let hearts = filler.iter().filter(|c| c.suit == Suit::Hearts).count();
        let share = hearts as f64 / filler.len() as f64;
        assert!(share > 0.38 && share < 0.50, "hearts share {}", share);
    }

    #[test]
    fn test_derived_deck_size() {
        assert_eq!(derived_deck_size(&Upgrades::new()), 52);
        assert_eq!(
            derived_deck_size(&upgrades_with(UpgradeId::DeckReduction, 10)),
            12
        );
    }
}
