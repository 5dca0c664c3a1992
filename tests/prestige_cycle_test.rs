//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: earn wins -> prestige -> verify what resets and
//! what carries over.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use royal_flush::achievements::AchievementId;
use royal_flush::cards::Rank;
use royal_flush::core::ManualScheduler;
use royal_flush::progression::{can_prestige, prestige_points_for};
use royal_flush::shop::{next_cost, UpgradeId};
use royal_flush::{apply, Command, GameEvent, GameState, RejectedAction, RoundPhase};

fn prestige(state: &mut GameState) -> Vec<GameEvent> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut scheduler = ManualScheduler::new();
    apply(state, Command::Prestige, &mut rng, &mut scheduler).events
}

fn ready_state() -> GameState {
    let mut state = GameState::new();
    state.total_wins = 5;
    state.money = 900;
    state.draws = 12;
    state.combo = 2;
    state.has_dog = true;
    state.royal_flush.mark_found(Rank::King);
    state.upgrades.set_level(UpgradeId::DeckReduction, 6);
    state.upgrades.set_level(UpgradeId::Dog, 1);
    state.recompute_deck_size();
    state.stats.total_wins = 5;
    state.stats.total_draws = 400;
    state
}

#[test]
fn test_first_prestige() {
    let mut state = ready_state();
    assert!(can_prestige(&state));
    assert_eq!(prestige_points_for(&state), 1);

    let events = prestige(&mut state);
    assert!(events.contains(&GameEvent::PrestigeCompleted {
        level: 1,
        points: 1
    }));
    assert!(events.contains(&GameEvent::MoneyChanged { old: 900, new: 75 }));
    assert!(events.contains(&GameEvent::AchievementUnlocked {
        id: AchievementId::Prestige1
    }));

    assert_eq!(state.prestige_level, 1);
    assert_eq!(state.prestige_points, 1);
    assert_eq!(state.money, 75);
    assert_eq!(state.total_wins, 0);
    assert_eq!(state.draws, 0);
    assert_eq!(state.combo, 0);
    assert_eq!(state.deck_size, 52);
    assert!(!state.has_dog);
    assert_eq!(state.royal_flush.found_count(), 0);
    for id in UpgradeId::ALL {
        assert_eq!(state.upgrades.level(id), 0, "{:?}", id);
    }
    assert_eq!(state.phase, RoundPhase::Idle);
}

#[test]
fn test_prestige_keeps_lifetime_progress() {
    let mut state = ready_state();
    state.lifetime_money = 25_000;
    state.achievements.unlock(AchievementId::DogOwner);
    prestige(&mut state);

    // 5 wins and 25k lifetime money
    assert_eq!(state.prestige_points, 3);
    assert_eq!(state.lifetime_money, 25_000);
    assert_eq!(state.stats.total_wins, 5);
    assert_eq!(state.stats.total_draws, 400);
    assert!(state.achievements.is_unlocked(AchievementId::DogOwner));
}

#[test]
fn test_prestige_locked_below_five_wins() {
    let mut state = ready_state();
    state.total_wins = 4;
    let before = state.clone();

    let events = prestige(&mut state);
    assert_eq!(
        events,
        vec![GameEvent::ActionRejected {
            reason: RejectedAction::PrestigeLocked {
                wins: 4,
                required: 5
            }
        }]
    );
    assert_eq!(state, before);
}

#[test]
fn test_repeated_prestige_bonuses() {
    let mut state = GameState::new();
    for level in 1..=5 {
        state.total_wins = 10;
        prestige(&mut state);
        assert_eq!(state.prestige_level, level);
        assert_eq!(state.money, 50 + 25 * level as u64);
    }
    assert_eq!(state.prestige_points, 10);
    assert!(state.achievements.is_unlocked(AchievementId::Prestige5));

    // 25% off at prestige 5
    assert_eq!(next_cost(&state, UpgradeId::Luck), Some(15));
}

#[test]
fn test_prestige_abandons_the_table() {
    let mut state = ready_state();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut scheduler = ManualScheduler::new();
    apply(&mut state, Command::StartShuffle, &mut rng, &mut scheduler);
    apply(&mut state, Command::Prestige, &mut rng, &mut scheduler);
    assert_eq!(state.phase, RoundPhase::Idle);

    let stale = scheduler.fire_next().unwrap();
    let result = apply(&mut state, Command::TimerElapsed(stale), &mut rng, &mut scheduler);
    assert!(result.events.is_empty());
    assert!(state.cards_laid_out().is_none());
}
