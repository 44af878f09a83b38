//! # cardrank_core
//!
//! Playing-card and poker hand-evaluation library. Given a pocket and a
//! board, it computes the hand's rank under a chosen poker variant,
//! selects the best five-card subset (and the best qualifying low hand
//! where the variant splits the pot), produces a human-readable
//! description, and orders many players' hands into winners and ties.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardrank_core::{hi_order, parse_cards, Variant};
//!
//! let board = parse_cards("As 7d Ad 6s 6d").unwrap();
//! let hands = Variant::ShortDeck.rank_hands(
//!     &[
//!         parse_cards("8d Td").unwrap(),
//!         parse_cards("Ac 5h").unwrap(),
//!     ],
//!     &board,
//! );
//!
//! // Short deck: the flush beats the full house.
//! let (winners, pivot) = hi_order(&hands);
//! assert_eq!((winners[0], pivot), (0, 1));
//! assert_eq!(hands[0].description(), "Flush, Ace-high");
//! assert_eq!(hands[1].description(), "Full House, Aces full of Sixes");
//! ```
//!
//! ## Features
//!
//! - **Variants**: Holdem, short-deck (six-plus), Omaha, Omaha hi/lo,
//!   stud, stud hi/lo, razz, badugi and deuce-to-seven lowball, each
//!   driven by an immutable descriptor record.
//! - **Canonical ranks**: the classical five-card rank space (1..7462)
//!   with fixed category boundaries, generated at first use; no embedded
//!   data tables required.
//! - **Best-five witnesses**: evaluation returns the best five cards and
//!   the unused cards alongside the rank.
//! - **Optional fast path**: the seven-card two-plus-two lookup table
//!   loads at init when present and falls back to subset enumeration when
//!   not (`two-plus-two` feature).
//! - **Serialization ready**: cards and variants round-trip through their
//!   text forms via serde.

/// Core playing card representation in the Cactus-Kev layout
pub mod card;

/// Deck of cards with shuffle and deal functionality
pub mod deck;

/// Human-readable hand descriptions and display arrangement
mod describe;

/// Structured error types
pub mod errors;

/// Hand ranking engine: tables, rankers and subset enumeration
pub mod evaluator;

/// Evaluated hands and player ordering
pub mod hand;

/// Hand rank values and fixed categories
pub mod rank;

/// Street naming helper
pub mod street;

/// Poker variant descriptors
pub mod variant;

pub use card::{parse_cards, Card, Cards, Rank, Suit};
pub use deck::Deck;
pub use errors::Error;
pub use evaluator::{
    rank_ace_five_low, rank_cactus, rank_eight_or_better, rank_lowball, rank_of, rank_razz,
    rank_short_deck, rank_six_plus, rank_standard, RankFiveFn,
};
pub use hand::{hi_order, lo_order, Hand};
pub use rank::{HandRank, RankCategory, EIGHT_OR_BETTER_MAX, LOW_MAX};
pub use street::{numbered_streets, Street};
pub use variant::Variant;

#[cfg(feature = "two-plus-two")]
pub use evaluator::{TwoPlusTwo, TABLE_ENTRIES};
