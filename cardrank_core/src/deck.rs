//! # Deck Module
//!
//! This module provides the [`Deck`] struct for the standard 52-card French
//! deck and the 36-card short deck (Six through Ace), with shuffling and
//! dealing.
//!
//! ## Examples
//!
//! ```rust
//! use cardrank_core::Deck;
//! use rand::SeedableRng;
//!
//! let mut deck = Deck::new();
//! assert_eq!(deck.remaining(), 52);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(52);
//! deck.shuffle(&mut rng);
//!
//! let pocket = deck.deal(2);
//! let board = deck.deal(5);
//! assert_eq!(pocket.len(), 2);
//! assert_eq!(board.len(), 5);
//! assert_eq!(deck.remaining(), 45);
//! ```

use crate::card::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};

/// A deck of cards not yet dealt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card French deck in unshuffled order.
    pub fn new() -> Self {
        Self::from_ranks(&Rank::ALL)
    }

    /// Creates a 36-card short deck, Six through Ace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardrank_core::Deck;
    ///
    /// assert_eq!(Deck::short().remaining(), 36);
    /// ```
    pub fn short() -> Self {
        Self::from_ranks(&Rank::ALL[Rank::Six.index() as usize..])
    }

    fn from_ranks(ranks: &[Rank]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * 4);
        for &suit in &[Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club] {
            for &rank in ranks {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Shuffles the deck with the provided random number generator.
    pub fn shuffle<R: rand::Rng>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;
        self.cards.shuffle(rng);
    }

    /// Deals a single card from the top of the deck, or `None` when empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals up to `count` cards from the top of the deck.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardrank_core::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let cards = deck.deal(7);
    /// assert_eq!(cards.len(), 7);
    /// assert_eq!(deck.remaining(), 45);
    /// ```
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            match self.deal_one() {
                Some(card) => dealt.push(card),
                None => break,
            }
        }
        dealt
    }

    /// Returns the number of cards remaining.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top of the deck last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
