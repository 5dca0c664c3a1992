//! Integration test: save blobs, stores and resuming a session

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use royal_flush::achievements::AchievementId;
use royal_flush::cards::Rank;
use royal_flush::core::constants::{SAVE_KEY, SAVE_VERSION};
use royal_flush::persistence::{
    self, decode_state_or_default, encode_state, FileStore, MemoryStore, SaveData, SaveStore,
};
use royal_flush::shop::UpgradeId;
use royal_flush::{Command, GameLoop, GameState};

/// A session with every persisted field away from its default.
fn played_state() -> GameState {
    let mut state = GameState::new();
    state.draws = 17;
    state.money = 4321;
    state.combo = 2;
    state.total_wins = 3;
    state.royal_flush.mark_found(Rank::Ten);
    state.royal_flush.mark_found(Rank::Ace);
    state.has_dog = true;
    state.prestige_level = 2;
    state.prestige_points = 5;
    state.lifetime_money = 88_000;
    state.stats.total_draws = 950;
    state.stats.total_wins = 31;
    state.stats.total_money = 88_000;
    state.stats.cards_collected = 160;
    state.stats.wrong_cards = 790;
    state.stats.games_played = 31;
    state.stats.time_played = 7200;
    state.stats.highest_combo = 5;
    state.stats.best_streak = 5;
    state.stats.current_streak = 2;
    state.stats.fastest_win_draws = Some(9);
    state.daily.last_claimed = NaiveDate::from_ymd_opt(2024, 6, 30);
    state.daily.streak = 8;
    state.achievements.unlock(AchievementId::FirstWin);
    state.achievements.unlock(AchievementId::Speedrun);
    state.upgrades.set_level(UpgradeId::DeckReduction, 5);
    state.upgrades.set_level(UpgradeId::Luck, 3);
    state.upgrades.set_level(UpgradeId::Dog, 1);
    state.recompute_deck_size();
    state
}

#[test]
fn test_round_trip_restores_every_field() {
    let state = played_state();
    let blob = encode_state(&state).unwrap();
    assert_eq!(decode_state_or_default(&blob), state);
}

#[test]
fn test_round_trip_through_file_store() {
    let dir = std::env::temp_dir().join(format!("royal_flush_it_{}", std::process::id()));
    let mut store = FileStore::with_dir(&dir);
    let state = played_state();

    persistence::save(&mut store, &state).unwrap();
    assert!(dir.join(format!("{}.json", SAVE_KEY)).exists());
    assert_eq!(persistence::load_or_default(&store), state);

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_blob_without_achievements_loads_none_unlocked() {
    let blob = encode_state(&played_state()).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    json.as_object_mut().unwrap().remove("achievements");

    let state = decode_state_or_default(&json.to_string());
    assert_eq!(state.achievements.unlocked_count(), 0);
    assert_eq!(state.money, 4321);
}

#[test]
fn test_old_blob_gets_defaults() {
    // Written before versioning, upgrades and stats existed
    let blob = r#"{
        "draws": 4,
        "money": 210,
        "deckSize": 40,
        "totalWins": 1,
        "royalFlush": {"K": {"found": true, "suit": "hearts"}}
    }"#;
    let data = SaveData::decode(blob).unwrap();
    assert_eq!(data.version, 0);

    let state = data.into_state();
    assert_eq!(state.money, 210);
    assert_eq!(state.total_wins, 1);
    assert!(state.royal_flush.is_found(Rank::King));
    // No deck trimmer levels were saved, so the stale size is ignored
    assert_eq!(state.deck_size, 52);
    assert_eq!(state.stats.total_draws, 0);
    assert_eq!(state.daily.last_claimed, None);
    assert_eq!(state.prestige_level, 0);
}

#[test]
fn test_blob_records_schema_version() {
    let blob = encode_state(&GameState::new()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["version"], SAVE_VERSION);
    assert_eq!(json["upgrades"]["deckReduction"], 0);
    assert_eq!(json["achievements"]["firstWin"], false);
    assert_eq!(json["royalFlush"]["10"]["found"], false);
}

#[test]
fn test_corrupt_blob_starts_new_game() {
    let mut store = MemoryStore::new();
    store.write(SAVE_KEY, "{\"money\": [1, 2").unwrap();
    assert_eq!(persistence::load_or_default(&store), GameState::new());
}

#[test]
fn test_session_resumes_after_restart() {
    let mut game = GameLoop::load(MemoryStore::new(), ChaCha8Rng::seed_from_u64(1));
    game.dispatch(Command::PurchaseUpgrade {
        id: UpgradeId::DeckReduction,
    });
    game.dispatch(Command::ClaimDailyBonus {
        today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    });
    let expected = game.state().clone();

    let store = game.store().clone();
    let resumed = GameLoop::load(store, ChaCha8Rng::seed_from_u64(2));
    assert_eq!(resumed.state(), &expected);
    assert_eq!(resumed.state().deck_size, 48);
}

#[test]
fn test_table_state_is_not_saved() {
    let mut game = GameLoop::load(MemoryStore::new(), ChaCha8Rng::seed_from_u64(1));
    game.dispatch(Command::StartShuffle);
    game.settle();
    assert!(game.state().cards_laid_out().is_some());
    assert!(game.save());

    let resumed = GameLoop::load(game.store().clone(), ChaCha8Rng::seed_from_u64(1));
    assert!(resumed.state().cards_laid_out().is_none());
}
