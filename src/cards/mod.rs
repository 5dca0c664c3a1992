//! Cards, the weighted deck builder and the draw engine.

pub mod deck;
pub mod draw;
pub mod types;

pub use deck::{build_deck, DeckRecipe};
pub use draw::{draw_round, resolve_pick, PickOutcome};
pub use types::{Card, FlushSlot, Rank, RoyalFlushProgress, Suit};
