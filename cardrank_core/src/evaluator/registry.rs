//! # Ranker Registry
//!
//! One-time selection of the process-wide N-card rankers.
//!
//! At first use the registry decides, once, whether the seven-card
//! two-plus-two fast path is available:
//!
//! - With the `two-plus-two` feature, the loader reads the thirteen chunk
//!   files from the directory named by the `CARDRANK_TWOPLUSTWO_DIR`
//!   environment variable. On success, standard-hand ranking becomes the
//!   hybrid: five- and six-card hands stay on the Cactus path, seven-card
//!   hands walk the table.
//! - When the variable is unset, the files are missing, or the feature is
//!   disabled, every hand is ranked by subset enumeration. Results are
//!   identical, only slower.
//! - With `two-plus-two-required`, a missing or corrupt table is a panic
//!   at first use instead of a silent fallback.
//!
//! After initialization the registry is read-only; all lookups are
//! lock-free.

#[cfg(feature = "two-plus-two")]
use once_cell::sync::Lazy;

use crate::card::Card;
use crate::evaluator::rankers::{rank_cactus, rank_of, rank_six_plus};
use crate::rank::HandRank;

#[cfg(feature = "two-plus-two")]
use crate::evaluator::two_plus_two::TwoPlusTwo;

#[cfg(feature = "two-plus-two")]
static TWO_PLUS_TWO: Lazy<Option<TwoPlusTwo>> = Lazy::new(|| {
    let dir = match std::env::var_os("CARDRANK_TWOPLUSTWO_DIR") {
        Some(dir) => std::path::PathBuf::from(dir),
        None => {
            if cfg!(feature = "two-plus-two-required") {
                panic!("CARDRANK_TWOPLUSTWO_DIR is not set and the two-plus-two table is required");
            }
            return None;
        }
    };
    match TwoPlusTwo::load(&dir) {
        Ok(table) => Some(table),
        Err(err) => {
            if cfg!(feature = "two-plus-two-required") {
                panic!("failed to load required two-plus-two table: {}", err);
            }
            None
        }
    }
});

/// Returns the loaded two-plus-two table, when one is available.
#[cfg(feature = "two-plus-two")]
pub fn two_plus_two() -> Option<&'static TwoPlusTwo> {
    TWO_PLUS_TWO.as_ref()
}

/// Ranks a 5-, 6- or 7-card standard hand.
///
/// Uses the two-plus-two fast path for seven-card hands when the table
/// loaded; otherwise enumerates subsets over the Cactus ranker.
///
/// # Panics
///
/// Panics when `hand` has fewer than 5 or more than 7 cards.
pub fn rank_standard(hand: &[Card]) -> HandRank {
    #[cfg(feature = "two-plus-two")]
    if hand.len() == 7 {
        if let Some(table) = two_plus_two() {
            return table.rank(hand);
        }
    }
    rank_of(rank_cactus, hand)
}

/// Ranks a 5-, 6- or 7-card short-deck hand.
///
/// The short-deck remap applies at every five-card evaluation, so this
/// path always enumerates subsets.
///
/// # Panics
///
/// Panics when `hand` has fewer than 5 or more than 7 cards.
pub fn rank_short_deck(hand: &[Card]) -> HandRank {
    rank_of(rank_six_plus, hand)
}
