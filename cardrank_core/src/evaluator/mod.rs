//! # Hand Evaluation Engine
//!
//! The ranking core: five-card rank functions over init-generated lookup
//! tables, subset enumeration for 6- and 7-card hands, and the optional
//! two-plus-two seven-card fast path.
//!
//! ## Layers
//!
//! - [`tables`]: one-time generation of the canonical Cactus-Kev tables and
//!   the deuce-to-seven lowball table.
//! - [`rankers`]: the pure five-card rank functions, the N-card minimum
//!   combinator and the witness subset tables used for best-five selection.
//! - [`two_plus_two`] (feature `two-plus-two`): loader and state-machine
//!   walk for the precomputed seven-card table.
//! - [`registry`]: process-wide ranker selection at first use, with
//!   graceful fallback to subset enumeration when the table is absent.
//!
//! All tables are immutable after initialization and shared for the
//! lifetime of the process; every rank function is reentrant.

pub mod rankers;
pub mod registry;
pub mod tables;

#[cfg(feature = "two-plus-two")]
pub mod two_plus_two;

pub use rankers::{
    rank_ace_five_low, rank_cactus, rank_eight_or_better, rank_lowball, rank_of, rank_razz,
    rank_six_plus, RankFiveFn, T4C2, T5C3, T6C5, T7C5,
};
pub use registry::{rank_short_deck, rank_standard};

#[cfg(feature = "two-plus-two")]
pub use two_plus_two::{TwoPlusTwo, TABLE_ENTRIES};
