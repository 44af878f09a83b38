//! # Two-Plus-Two Seven-Card Fast Path
//!
//! Loader and evaluator for the 2+2 poker forum state-machine lookup table,
//! which resolves a seven-card hand in seven array dereferences and returns
//! Cactus-Kev values.
//!
//! The table ships as thirteen raw little-endian `u32` chunk files,
//! `twoplustwo00.dat` through `twoplustwo12.dat`, concatenated in order to
//! exactly [`TABLE_ENTRIES`] entries. The files are large (≈130 MB decoded)
//! and distributed separately from the crate; the loader reads them from a
//! directory at init; any length or decode mismatch is a recoverable
//! [`Error::TableCorrupt`], and the caller falls back to subset
//! enumeration.
//!
//! ## Evaluation
//!
//! Evaluation walks the state machine from index 53, stepping once per card
//! with `i = table[i + card_index(c)]`. Hands of fewer than seven cards
//! take one extra dereference to reach their terminal state. The final
//! word splits into a category (top bits) and an offset (low 12 bits);
//! the hand rank is `anchor[category] - offset + 1`, with the ten anchors
//! being exactly the fixed category boundaries.

use std::fs;
use std::path::Path;

use crate::card::Card;
use crate::errors::Error;
use crate::rank::{HandRank, RankCategory};

/// Total number of `u32` entries in the decoded table.
pub const TABLE_ENTRIES: usize = 32_487_834;

/// Entries per chunk file; the final chunk is short.
const CHUNK_ENTRIES: usize = 2_621_440;
const LAST_CHUNK_ENTRIES: usize = 1_030_554;
const CHUNKS: usize = 13;

/// Category anchors indexed by the table's category nibble.
const ANCHORS: [u32; 10] = [
    u16::MAX as u32, // Invalid
    RankCategory::Nothing.max_rank() as u32,
    RankCategory::Pair.max_rank() as u32,
    RankCategory::TwoPair.max_rank() as u32,
    RankCategory::ThreeOfAKind.max_rank() as u32,
    RankCategory::Straight.max_rank() as u32,
    RankCategory::Flush.max_rank() as u32,
    RankCategory::FullHouse.max_rank() as u32,
    RankCategory::FourOfAKind.max_rank() as u32,
    RankCategory::StraightFlush.max_rank() as u32,
];

/// The loaded two-plus-two lookup table.
#[derive(Debug)]
pub struct TwoPlusTwo {
    table: Vec<u32>,
}

impl TwoPlusTwo {
    /// Loads the thirteen chunk files from `dir`.
    ///
    /// Each chunk must hold a whole number of little-endian `u32` entries
    /// with the documented per-chunk counts; the concatenation must come to
    /// exactly [`TABLE_ENTRIES`] entries.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let mut table = Vec::with_capacity(TABLE_ENTRIES);
        for chunk in 0..CHUNKS {
            let path = dir.join(format!("twoplustwo{:02}.dat", chunk));
            let buf = fs::read(&path)?;
            let expected = if chunk == CHUNKS - 1 {
                LAST_CHUNK_ENTRIES
            } else {
                CHUNK_ENTRIES
            };
            if buf.len() % 4 != 0 || buf.len() / 4 != expected {
                return Err(Error::TableCorrupt {
                    reason: format!(
                        "twoplustwo{:02}.dat: expected {} entries, has {} bytes",
                        chunk,
                        expected,
                        buf.len()
                    ),
                });
            }
            table.extend(
                buf.chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            );
        }
        if table.len() != TABLE_ENTRIES {
            return Err(Error::TableCorrupt {
                reason: format!("expected {} entries, got {}", TABLE_ENTRIES, table.len()),
            });
        }
        Ok(Self { table })
    }

    /// Ranks a 5-, 6- or 7-card hand by walking the state machine.
    ///
    /// # Panics
    ///
    /// Panics when `hand` has fewer than 5 or more than 7 cards.
    pub fn rank(&self, hand: &[Card]) -> HandRank {
        assert!(
            (5..=7).contains(&hand.len()),
            "invalid hand size: {}",
            hand.len()
        );
        let mut i = 53u32;
        for &card in hand {
            i = self.table[(i + card_index(card)) as usize];
        }
        if hand.len() < 7 {
            i = self.table[i as usize];
        }
        HandRank((ANCHORS[(i >> 12) as usize] - (i & 0xfff) + 1) as u16)
    }
}

/// Maps a card to its 1..52 table index: rank-major ascending from Two,
/// suits ordered Spade, Heart, Club, Diamond within each rank.
pub(crate) fn card_index(card: Card) -> u32 {
    use crate::card::Suit;
    let suit_pos = match card.suit() {
        Suit::Spade => 0,
        Suit::Heart => 1,
        Suit::Club => 2,
        Suit::Diamond => 3,
    };
    card.rank().index() as u32 * 4 + suit_pos + 1
}
