//! Save and load of the session.
//!
//! The session is stored as a single JSON blob under [`SAVE_KEY`]. Loading
//! never fails: a missing blob starts a new game and a corrupt or unreadable
//! one is logged and replaced by a new game.

pub mod save;
pub mod store;

pub use save::{decode_state_or_default, encode_state, SaveData};
pub use store::{default_save_dir, FileStore, MemoryStore, SaveStore};

use crate::core::constants::SAVE_KEY;
use crate::core::game_state::GameState;
use crate::error::SaveError;
use tracing::warn;

/// Load the session from `store`, or a new game if there is none.
pub fn load_or_default<S: SaveStore + ?Sized>(store: &S) -> GameState {
    match store.read(SAVE_KEY) {
        Ok(Some(blob)) => decode_state_or_default(&blob),
        Ok(None) => GameState::new(),
        Err(e) => {
            warn!(error = %e, "could not read save, starting a new game");
            GameState::new()
        }
    }
}

/// Write the session to `store`.
pub fn save<S: SaveStore + ?Sized>(store: &mut S, state: &GameState) -> Result<(), SaveError> {
    let blob = encode_state(state)?;
    store.write(SAVE_KEY, &blob)?;
    Ok(())
}

/// Delete the stored session.
pub fn delete<S: SaveStore + ?Sized>(store: &mut S) -> Result<(), SaveError> {
    store.remove(SAVE_KEY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(load_or_default(&store), GameState::new());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut state = GameState::new();
        state.money = 1234;
        state.total_wins = 3;
        save(&mut store, &state).unwrap();
        assert_eq!(load_or_default(&store), state);

        delete(&mut store).unwrap();
        assert_eq!(load_or_default(&store), GameState::new());
    }

    #[test]
    fn test_corrupt_store_loads_default() {
        let mut store = MemoryStore::new();
        store.write(SAVE_KEY, "{{{").unwrap();
        assert_eq!(load_or_default(&store), GameState::new());
    }
}
