//! Card, rank and suit types plus the royal flush tracker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card suits. Only hearts ever counts toward the flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

/// Card ranks, two through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The five ranks of a royal flush, in display order.
    pub const ROYAL: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

    pub fn is_royal(&self) -> bool {
        *self >= Rank::Ten
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub fn from_label(label: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Position within [`Rank::ROYAL`], `None` for non-royal ranks.
    fn royal_index(&self) -> Option<usize> {
        Rank::ROYAL.iter().position(|r| r == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// One slot of the flush tracker.
///
/// `suit` is `Some` exactly when the rank has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlushSlot {
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub suit: Option<Suit>,
}

/// Which royal ranks have been collected this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoyalFlushProgress {
    slots: [FlushSlot; 5],
}

impl RoyalFlushProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_found(&self, rank: Rank) -> bool {
        rank.royal_index()
            .map(|i| self.slots[i].found)
            .unwrap_or(false)
    }

    /// Slot for a royal rank, `None` for non-royal ranks.
    pub fn slot(&self, rank: Rank) -> Option<FlushSlot> {
        rank.royal_index().map(|i| self.slots[i])
    }

    /// Record a collected hearts card. Returns false for non-royal ranks.
    pub fn mark_found(&mut self, rank: Rank) -> bool {
        match rank.royal_index() {
            Some(i) => {
                self.slots[i] = FlushSlot {
                    found: true,
                    suit: Some(Suit::Hearts),
                };
                true
            }
            None => false,
        }
    }

    pub fn found_count(&self) -> usize {
        self.slots.iter().filter(|s| s.found).count()
    }

    pub fn missing(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ROYAL
            .iter()
            .copied()
            .filter(move |r| !self.is_found(*r))
    }

    pub fn is_complete(&self) -> bool {
        self.found_count() == Rank::ROYAL.len()
    }

    pub fn reset(&mut self) {
        self.slots = [FlushSlot::default(); 5];
    }

    /// Rebuild from persisted slots, repairing any slot whose suit and found
    /// flag disagree.
    pub fn from_slots(slots: impl IntoIterator<Item = (Rank, FlushSlot)>) -> Self {
        let mut progress = Self::new();
        for (rank, slot) in slots {
            if slot.found && slot.suit == Some(Suit::Hearts) {
                progress.mark_found(rank);
            }
        }
        progress
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, FlushSlot)> + '_ {
        Rank::ROYAL.iter().copied().zip(self.slots.iter().copied())
    }
}
