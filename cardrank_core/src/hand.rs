//! # Evaluated Hand Module
//!
//! This module provides [`Hand`], the result of evaluating a pocket and
//! board under a poker variant, and the player-ordering functions
//! [`hi_order`] and [`lo_order`].
//!
//! A `Hand` is immutable after construction. It carries the original
//! pocket and board, the hi rank with its realizing best five and unused
//! cards, the qualifying lo side where the variant has one, and cached
//! description strings.
//!
//! ## Examples
//!
//! ```rust
//! use cardrank_core::{parse_cards, Variant};
//!
//! let pocket = parse_cards("As Ks").unwrap();
//! let board = parse_cards("Qs Js Ts 7h 3d").unwrap();
//! let hand = Variant::Holdem.rank_hand(&pocket, &board);
//! assert_eq!(hand.description(), "Straight Flush, Ace-high, Royal");
//! assert_eq!(hand.hi_best().len(), 5);
//! assert_eq!(hand.hi_unused().len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::card::{Card, Cards};
use crate::describe::{
    arrange_hi, arrange_low, arrange_unused, hi_description, low_description, rank_counts,
};
use crate::errors::Error;
use crate::evaluator::rankers::{best_badugi, best_five, best_two_plus_three, BestFive};
use crate::rank::{HandRank, RankCategory, LOW_MAX};
use crate::variant::{SubsetRule, Variant};

/// An evaluated hand: ranks, best-five selections, unused cards and
/// descriptions for one player's pocket against a board.
#[derive(Debug, Clone)]
pub struct Hand {
    variant: Variant,
    pocket: Vec<Card>,
    board: Vec<Card>,
    hi_rank: HandRank,
    hi_best: Vec<Card>,
    hi_unused: Vec<Card>,
    hi_desc: String,
    lo_rank: Option<HandRank>,
    lo_best: Vec<Card>,
    lo_unused: Vec<Card>,
    lo_desc: Option<String>,
}

impl Hand {
    /// Evaluates `pocket` and `board` under `variant`.
    ///
    /// Returns [`Error::InvalidHandSize`] when the card counts do not fit
    /// the variant's rules.
    pub fn new(variant: Variant, pocket: Vec<Card>, board: Vec<Card>) -> Result<Hand, Error> {
        let desc = variant.descriptor();
        let total = pocket.len() + board.len();
        match desc.rule {
            SubsetRule::Open => {
                if !(5..=7).contains(&total) {
                    return Err(Error::InvalidHandSize { size: total });
                }
            }
            SubsetRule::ExactTwoThree => {
                if pocket.len() != 4 {
                    return Err(Error::InvalidHandSize { size: pocket.len() });
                }
                if board.len() != 5 {
                    return Err(Error::InvalidHandSize { size: board.len() });
                }
            }
            SubsetRule::Badugi => {
                if pocket.len() != 4 || !board.is_empty() {
                    return Err(Error::InvalidHandSize { size: total });
                }
            }
            SubsetRule::PocketOnly => {
                if pocket.len() != 5 || !board.is_empty() {
                    return Err(Error::InvalidHandSize { size: total });
                }
            }
        }

        let mut hand = Hand {
            variant,
            pocket,
            board,
            hi_rank: HandRank::INVALID,
            hi_best: Vec::new(),
            hi_unused: Vec::new(),
            hi_desc: String::new(),
            lo_rank: None,
            lo_best: Vec::new(),
            lo_unused: Vec::new(),
            lo_desc: None,
        };
        hand.evaluate();
        Ok(hand)
    }

    fn evaluate(&mut self) {
        let desc = self.variant.descriptor();
        match desc.rule {
            SubsetRule::Open if desc.low_game => self.evaluate_razz(),
            SubsetRule::Open => self.evaluate_open(),
            SubsetRule::ExactTwoThree => self.evaluate_two_three(),
            SubsetRule::Badugi => self.evaluate_badugi(),
            SubsetRule::PocketOnly => self.evaluate_lowball(),
        }
    }

    /// Any five of pocket and board, with the cards pre-sorted rank
    /// descending (suit ascending within a rank) so the witness row comes
    /// out in canonical order.
    fn evaluate_open(&mut self) {
        let desc = self.variant.descriptor();
        let mut cards: Vec<Card> = self.pocket.iter().chain(&self.board).copied().collect();
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(a.suit().cmp(&b.suit())));

        let hi = best_five(desc.hi, &cards);
        self.set_hi(hi, true);

        if let Some((lo_fn, cap)) = desc.lo {
            let lo = best_five(lo_fn, &cards);
            self.set_lo(lo, cap);
        }
    }

    /// Razz ranks the cards as given; qualifying lows display in low
    /// order, busted lows keep their subset order under stable grouping.
    fn evaluate_razz(&mut self) {
        let desc = self.variant.descriptor();
        let cards: Vec<Card> = self.pocket.iter().chain(&self.board).copied().collect();
        let razz = best_five(desc.hi, &cards);

        self.hi_rank = HandRank(razz.rank);
        self.hi_best = razz.best;
        self.hi_unused = razz.unused;
        arrange_unused(&mut self.hi_unused, &rank_counts(&cards));
        if razz.rank < LOW_MAX {
            arrange_low(&mut self.hi_best);
            self.hi_desc = low_description(&self.hi_best);
        } else {
            // The rank is the inverted classical rank of the best five.
            let category = HandRank(u16::MAX - razz.rank).category();
            arrange_hi(&mut self.hi_best, category, false);
            self.hi_desc = hi_description(category, &self.hi_best, false);
        }
    }

    /// Exactly two of four pocket cards and three of five board cards;
    /// pocket and board keep their dealt order, unused cards are the
    /// pocket leftovers then the board leftovers.
    fn evaluate_two_three(&mut self) {
        let desc = self.variant.descriptor();
        let hi = best_two_plus_three(desc.hi, &self.pocket, &self.board);
        self.hi_rank = HandRank(hi.rank);
        self.hi_best = hi.best;
        self.hi_unused = hi.unused;
        let category = self.hi_rank.category();
        arrange_hi(&mut self.hi_best, category, true);
        self.hi_desc = hi_description(category, &self.hi_best, desc.short_deck);

        if let Some((lo_fn, cap)) = desc.lo {
            let lo = best_two_plus_three(lo_fn, &self.pocket, &self.board);
            self.set_lo(lo, cap);
        }
    }

    fn evaluate_badugi(&mut self) {
        let mut cards = self.pocket.clone();
        cards.sort_by(|a, b| {
            b.rank()
                .low_index()
                .cmp(&a.rank().low_index())
                .then(b.suit().cmp(&a.suit()))
        });
        let badugi = best_badugi(&cards);
        self.hi_rank = HandRank(badugi.rank);
        self.hi_best = badugi.best;
        self.hi_unused = badugi.unused;
        self.hi_desc = low_description(&self.hi_best);
    }

    fn evaluate_lowball(&mut self) {
        let desc = self.variant.descriptor();
        let mut best = self.pocket.clone();
        let rank = (desc.hi)(best[0], best[1], best[2], best[3], best[4]);
        self.hi_rank = HandRank(rank);
        // The dense 2-7 space opens with the unpaired non-straight
        // non-flush hands; anything beyond describes as the high hand it
        // makes. Aces are high here, so the wheel pattern stays in the
        // opening block.
        let category = lowball_category(rank);
        if category == RankCategory::Nothing {
            best.sort_by(|a, b| b.rank().cmp(&a.rank()));
            self.hi_desc = lowball_description(&best);
        } else {
            arrange_hi(&mut best, category, true);
            self.hi_desc = hi_description(category, &best, false);
        }
        self.hi_best = best;
    }

    fn set_hi(&mut self, hi: BestFive, by_suit: bool) {
        let desc = self.variant.descriptor();
        self.hi_rank = HandRank(hi.rank);
        self.hi_best = hi.best;
        self.hi_unused = hi.unused;
        let category = self.hi_rank.category();
        let counts = {
            let cards: Vec<Card> = self.pocket.iter().chain(&self.board).copied().collect();
            rank_counts(&cards)
        };
        arrange_hi(&mut self.hi_best, category, by_suit);
        arrange_unused(&mut self.hi_unused, &counts);
        self.hi_desc = hi_description(category, &self.hi_best, desc.short_deck);
    }

    fn set_lo(&mut self, lo: BestFive, cap: u16) {
        if lo.rank <= cap {
            self.lo_rank = Some(HandRank(lo.rank));
            self.lo_best = lo.best;
            self.lo_unused = lo.unused;
            arrange_low(&mut self.lo_best);
            self.lo_desc = Some(low_description(&self.lo_best));
        }
    }

    /// The variant this hand was evaluated under.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The player's pocket cards, as dealt.
    pub fn pocket(&self) -> &[Card] {
        &self.pocket
    }

    /// The community cards, as dealt.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The hi rank.
    pub fn hi_rank(&self) -> HandRank {
        self.hi_rank
    }

    /// The cards realizing the hi rank, in display order.
    pub fn hi_best(&self) -> &[Card] {
        &self.hi_best
    }

    /// The cards not used by the hi hand.
    pub fn hi_unused(&self) -> &[Card] {
        &self.hi_unused
    }

    /// The hi description, e.g. `"Two Pair, Sixes over Fives, kicker Jack"`.
    pub fn description(&self) -> &str {
        &self.hi_desc
    }

    /// Whether this hand made a qualifying low.
    pub fn low_valid(&self) -> bool {
        self.lo_rank.is_some()
    }

    /// The qualifying lo rank, when the hand made one.
    pub fn lo_rank(&self) -> Option<HandRank> {
        self.lo_rank
    }

    /// The cards realizing the lo rank, in display order.
    pub fn lo_best(&self) -> &[Card] {
        &self.lo_best
    }

    /// The cards not used by the lo hand.
    pub fn lo_unused(&self) -> &[Card] {
        &self.lo_unused
    }

    /// The lo description, e.g. `"Seven-low"`, when the hand made a low.
    pub fn lo_description(&self) -> Option<&str> {
        self.lo_desc.as_deref()
    }

    /// Compares two hands' hi sides; `Less` is the better hand.
    ///
    /// For short-deck hands the comparison applies the variant's rank
    /// swap, placing flushes above full houses.
    pub fn hi_comp(&self, other: &Hand) -> Ordering {
        self.hi_key().cmp(&other.hi_key())
    }

    /// The hi ordering key. The rank already encodes the full tie-break
    /// within a category; short deck additionally swaps the flush and
    /// full-house categories.
    fn hi_key(&self) -> u32 {
        let rank = self.hi_rank.0 as u32;
        if !self.variant.descriptor().short_deck {
            return rank;
        }
        let order: u32 = match self.hi_rank.category() {
            RankCategory::StraightFlush => 0,
            RankCategory::FourOfAKind => 1,
            RankCategory::Flush => 2,
            RankCategory::FullHouse => 3,
            RankCategory::Straight => 4,
            RankCategory::ThreeOfAKind => 5,
            RankCategory::TwoPair => 6,
            RankCategory::Pair => 7,
            RankCategory::Nothing => 8,
            RankCategory::Invalid => 9,
        };
        (order << 16) | rank
    }

    /// Compares two hands' lo sides; hands without a low order last.
    pub fn lo_comp(&self, other: &Hand) -> Ordering {
        match (self.lo_rank, other.lo_rank) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} {:#}", self.hi_desc, Cards(&self.hi_best))
        } else {
            write!(f, "{} {}", self.hi_desc, Cards(&self.hi_best))
        }
    }
}

/// Orders hands by their hi rank.
///
/// Returns the permutation of indices, best hand first, and the pivot:
/// the count of hands tied for first. The sort is stable, so tied hands
/// keep their original player order.
pub fn hi_order(hands: &[Hand]) -> (Vec<usize>, usize) {
    let mut perm: Vec<usize> = (0..hands.len()).collect();
    perm.sort_by_key(|&i| hands[i].hi_key());
    let pivot = match perm.first() {
        Some(&first) => perm
            .iter()
            .take_while(|&&i| hands[i].hi_key() == hands[first].hi_key())
            .count(),
        None => 0,
    };
    (perm, pivot)
}

/// Orders hands by their lo rank.
///
/// Hands without a qualifying low sort after every qualifying hand, and a
/// pivot of 0 means no hand qualified. The sort is stable.
pub fn lo_order(hands: &[Hand]) -> (Vec<usize>, usize) {
    let mut perm: Vec<usize> = (0..hands.len()).collect();
    perm.sort_by_key(|&i| lo_sort_key(&hands[i]));
    let pivot = match perm.first() {
        Some(&first) if hands[first].low_valid() => perm
            .iter()
            .take_while(|&&i| hands[i].lo_rank == hands[first].lo_rank)
            .count(),
        _ => 0,
    };
    (perm, pivot)
}

fn lo_sort_key(hand: &Hand) -> u32 {
    match hand.lo_rank {
        Some(rank) => rank.0 as u32,
        None => u32::MAX,
    }
}

/// The class blocks of the dense deuce-to-seven rank space, fixed by the
/// lowball table's construction order.
fn lowball_category(rank: u16) -> RankCategory {
    match rank {
        1..=1278 => RankCategory::Nothing,
        1279..=4138 => RankCategory::Pair,
        4139..=4996 => RankCategory::TwoPair,
        4997..=5854 => RankCategory::ThreeOfAKind,
        5855..=5863 => RankCategory::Straight,
        5864..=7141 => RankCategory::Flush,
        7142..=7297 => RankCategory::FullHouse,
        7298..=7453 => RankCategory::FourOfAKind,
        7454..=7462 => RankCategory::StraightFlush,
        _ => RankCategory::Invalid,
    }
}

/// Deuce-to-seven `"<top>-low"` description; aces read high.
fn lowball_description(best: &[Card]) -> String {
    let top = best
        .iter()
        .map(|c| c.rank())
        .max()
        .expect("non-empty lowball hand");
    format!("{}-low", top.word())
}
