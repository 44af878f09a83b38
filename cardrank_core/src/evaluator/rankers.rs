//! # Five-Card Rankers and Subset Enumeration
//!
//! The pure rank functions at the bottom of the evaluation stack, and the
//! combinators that lift them over 6- and 7-card hands.
//!
//! Every five-card ranker has the signature
//! `fn(Card, Card, Card, Card, Card) -> u16`, lower is better:
//!
//! - [`rank_cactus`]: classical high-hand ranking, canonical 1..7462.
//! - [`rank_six_plus`]: short-deck wrapper over cactus; remaps exactly the
//!   9-8-7-6-A straight flush (747 → 6) and straight (6610 → 1605).
//! - [`rank_eight_or_better`]: eight-or-better low; values above
//!   [`EIGHT_OR_BETTER_MAX`](crate::EIGHT_OR_BETTER_MAX) do not qualify.
//! - [`rank_ace_five_low`]: generic ace-to-five low, no qualifier mask.
//! - [`rank_razz`]: ace-to-five low that ranks paired hands as inverted
//!   high hands, so every razz hand is totally ordered.
//! - [`rank_lowball`]: deuce-to-seven low via the dense lowball table.
//!
//! The subset tables ([`T7C5`], [`T6C5`], [`T5C3`], [`T4C2`]) double as
//! witnesses: the leading columns index the chosen cards, the trailing
//! columns the leftovers, so one argmin pass yields rank, best and unused.

use crate::card::Card;
use crate::evaluator::tables::{CACTUS, LOWBALL};
use crate::rank::{HandRank, LOW_MAX};

/// A five-card rank function.
pub type RankFiveFn = fn(Card, Card, Card, Card, Card) -> u16;

/// Ranks five cards with the classical Cactus-Kev ranking.
pub fn rank_cactus(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    CACTUS.rank(c0, c1, c2, c3, c4)
}

/// Ranks five cards for short-deck (six-plus) play.
///
/// In the short deck A-6-7-8-9 plays as a straight, and the classical
/// ranking already places flushes above full houses there, so the wrapper
/// remaps exactly two outputs and passes everything else through.
pub fn rank_six_plus(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    match rank_cactus(c0, c1, c2, c3, c4) {
        747 => 6,     // Straight Flush, 9 8 7 6 A
        6610 => 1605, // Straight, 9 8 7 6 A
        r => r,
    }
}

/// Ranks five cards as an eight-or-better low.
pub fn rank_eight_or_better(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    low_rank(0xff00, c0, c1, c2, c3, c4)
}

/// Ranks five cards as a generic ace-to-five low.
pub fn rank_ace_five_low(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    low_rank(0, c0, c1, c2, c3, c4)
}

/// Ranks five cards for razz.
///
/// Unpaired hands rank as ace-to-five lows. Paired hands do not make a low;
/// they are ordered below every low by inverting the classical rank, so the
/// weakest high hand is the strongest remaining razz hand.
pub fn rank_razz(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    let r = rank_ace_five_low(c0, c1, c2, c3, c4);
    if r < LOW_MAX {
        r
    } else {
        u16::MAX - rank_cactus(c0, c1, c2, c3, c4)
    }
}

/// Ranks five cards as a deuce-to-seven (2-7) low.
pub fn rank_lowball(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    LOWBALL.rank(c0, c1, c2, c3, c4)
}

/// Bit-packs a low rank over five cards.
///
/// Each card sets the bit of its ace-low rank position; a repeated rank ORs
/// in the `0x8000` disqualifier. The seed `mask` pre-disqualifies ranks:
/// `0xff00` rejects Nine and above for eight-or-better, 0 accepts all.
fn low_rank(mask: u16, c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
    let mut mask = mask;
    let mut rank = 0u16;
    for card in [c0, c1, c2, c3, c4] {
        let bit = 1u16 << card.rank().low_index();
        if mask & bit != 0 {
            rank |= 0x8000;
        }
        rank |= bit;
        mask |= bit;
    }
    rank
}

/// Take-7-choose-5 witness table: columns 0..5 are the chosen cards,
/// columns 5..7 the leftovers.
pub const T7C5: [[usize; 7]; 21] = [
    [0, 1, 2, 3, 4, 5, 6],
    [0, 1, 2, 3, 5, 4, 6],
    [0, 1, 2, 3, 6, 4, 5],
    [0, 1, 2, 4, 5, 3, 6],
    [0, 1, 2, 4, 6, 3, 5],
    [0, 1, 2, 5, 6, 3, 4],
    [0, 1, 3, 4, 5, 2, 6],
    [0, 1, 3, 4, 6, 2, 5],
    [0, 1, 3, 5, 6, 2, 4],
    [0, 1, 4, 5, 6, 2, 3],
    [0, 2, 3, 4, 5, 1, 6],
    [0, 2, 3, 4, 6, 1, 5],
    [0, 2, 3, 5, 6, 1, 4],
    [0, 2, 4, 5, 6, 1, 3],
    [0, 3, 4, 5, 6, 1, 2],
    [1, 2, 3, 4, 5, 0, 6],
    [1, 2, 3, 4, 6, 0, 5],
    [1, 2, 3, 5, 6, 0, 4],
    [1, 2, 4, 5, 6, 0, 3],
    [1, 3, 4, 5, 6, 0, 2],
    [2, 3, 4, 5, 6, 0, 1],
];

/// Take-6-choose-5 witness table: columns 0..5 chosen, column 5 leftover.
pub const T6C5: [[usize; 6]; 6] = [
    [0, 1, 2, 3, 4, 5],
    [0, 1, 2, 3, 5, 4],
    [0, 1, 2, 4, 5, 3],
    [0, 1, 3, 4, 5, 2],
    [0, 2, 3, 4, 5, 1],
    [1, 2, 3, 4, 5, 0],
];

/// Take-5-choose-3 witness table: columns 0..3 chosen, columns 3..5 leftover.
pub const T5C3: [[usize; 5]; 10] = [
    [0, 1, 2, 3, 4],
    [0, 1, 3, 2, 4],
    [0, 1, 4, 2, 3],
    [0, 2, 3, 1, 4],
    [0, 2, 4, 1, 3],
    [0, 3, 4, 1, 2],
    [1, 2, 3, 0, 4],
    [1, 2, 4, 0, 3],
    [1, 3, 4, 0, 2],
    [2, 3, 4, 0, 1],
];

/// Take-4-choose-2 witness table: columns 0..2 chosen, columns 2..4 leftover.
pub const T4C2: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 2, 1, 3],
    [0, 3, 1, 2],
    [1, 2, 0, 3],
    [1, 3, 0, 2],
    [2, 3, 0, 1],
];

/// Ranks a 5-, 6- or 7-card hand as the minimum of `f` over every 5-subset.
///
/// # Panics
///
/// Panics when `hand` has fewer than 5 or more than 7 cards.
pub fn rank_of(f: RankFiveFn, hand: &[Card]) -> HandRank {
    match hand.len() {
        5 => HandRank(f(hand[0], hand[1], hand[2], hand[3], hand[4])),
        6 => {
            let mut rank = u16::MAX;
            for row in &T6C5 {
                let r = f(hand[row[0]], hand[row[1]], hand[row[2]], hand[row[3]], hand[row[4]]);
                rank = rank.min(r);
            }
            HandRank(rank)
        }
        7 => {
            let mut rank = u16::MAX;
            for row in &T7C5 {
                let r = f(hand[row[0]], hand[row[1]], hand[row[2]], hand[row[3]], hand[row[4]]);
                rank = rank.min(r);
            }
            HandRank(rank)
        }
        n => panic!("invalid hand size: {}", n),
    }
}

/// Result of a best-five selection: the rank, the five cards realizing it
/// (in witness order), and the leftovers (in witness order).
pub(crate) struct BestFive {
    pub rank: u16,
    pub best: Vec<Card>,
    pub unused: Vec<Card>,
}

/// Selects the best five cards of a 5-, 6- or 7-card hand under `f`,
/// using the witness tables so that one pass yields rank, best and unused.
///
/// # Panics
///
/// Panics when `hand` has fewer than 5 or more than 7 cards.
pub(crate) fn best_five(f: RankFiveFn, hand: &[Card]) -> BestFive {
    match hand.len() {
        5 => BestFive {
            rank: f(hand[0], hand[1], hand[2], hand[3], hand[4]),
            best: hand.to_vec(),
            unused: Vec::new(),
        },
        6 => {
            let (mut rank, mut row) = (u16::MAX, &T6C5[0]);
            for candidate in &T6C5 {
                let r = f(
                    hand[candidate[0]],
                    hand[candidate[1]],
                    hand[candidate[2]],
                    hand[candidate[3]],
                    hand[candidate[4]],
                );
                if r < rank {
                    rank = r;
                    row = candidate;
                }
            }
            BestFive {
                rank,
                best: row[..5].iter().map(|&i| hand[i]).collect(),
                unused: row[5..].iter().map(|&i| hand[i]).collect(),
            }
        }
        7 => {
            let (mut rank, mut row) = (u16::MAX, &T7C5[0]);
            for candidate in &T7C5 {
                let r = f(
                    hand[candidate[0]],
                    hand[candidate[1]],
                    hand[candidate[2]],
                    hand[candidate[3]],
                    hand[candidate[4]],
                );
                if r < rank {
                    rank = r;
                    row = candidate;
                }
            }
            BestFive {
                rank,
                best: row[..5].iter().map(|&i| hand[i]).collect(),
                unused: row[5..].iter().map(|&i| hand[i]).collect(),
            }
        }
        n => panic!("invalid hand size: {}", n),
    }
}

/// Selects the best exactly-2-of-pocket + 3-of-board five cards under `f`.
///
/// Enumerates the 6 × 10 = 60 combinations through [`T4C2`] and [`T5C3`].
/// Unused cards are the pocket leftovers followed by the board leftovers,
/// each in their original order.
///
/// # Panics
///
/// Panics unless `pocket` has exactly 4 cards and `board` exactly 5.
pub(crate) fn best_two_plus_three(f: RankFiveFn, pocket: &[Card], board: &[Card]) -> BestFive {
    assert_eq!(pocket.len(), 4, "invalid hand size: {}", pocket.len());
    assert_eq!(board.len(), 5, "invalid hand size: {}", board.len());
    let (mut rank, mut best_p, mut best_b) = (u16::MAX, &T4C2[0], &T5C3[0]);
    for p in &T4C2 {
        for b in &T5C3 {
            let r = f(
                pocket[p[0]],
                pocket[p[1]],
                board[b[0]],
                board[b[1]],
                board[b[2]],
            );
            if r < rank {
                rank = r;
                best_p = p;
                best_b = b;
            }
        }
    }
    BestFive {
        rank,
        best: vec![
            pocket[best_p[0]],
            pocket[best_p[1]],
            board[best_b[0]],
            board[best_b[1]],
            board[best_b[2]],
        ],
        unused: best_p[2..]
            .iter()
            .map(|&i| pocket[i])
            .chain(best_b[3..].iter().map(|&i| board[i]))
            .collect(),
    }
}

/// Ranks a badugi hand and selects its best cards.
///
/// The best badugi is the largest subset with pairwise distinct ranks and
/// pairwise distinct suits; the rank packs the missing-card count into the
/// high bits and the ace-low rank bits below:
/// `((4 - size) << 13) | rank_bits`. The caller passes cards pre-sorted in
/// display order; among equal-rank subsets the first in lexicographic
/// enumeration wins, and the unused cards keep that order.
///
/// # Panics
///
/// Panics unless `hand` has exactly 4 cards.
pub(crate) fn best_badugi(hand: &[Card]) -> BestFive {
    assert_eq!(hand.len(), 4, "invalid hand size: {}", hand.len());
    let mut best: Option<(u16, Vec<usize>)> = None;
    for size in (1..=4usize).rev() {
        for subset in index_subsets(4, size) {
            if !badugi_playable(hand, &subset) {
                continue;
            }
            let bits = subset
                .iter()
                .fold(0u16, |acc, &i| acc | (1 << hand[i].rank().low_index()));
            let rank = ((4 - size as u16) << 13) | bits;
            if best.as_ref().map_or(true, |(r, _)| rank < *r) {
                best = Some((rank, subset));
            }
        }
        if best.is_some() {
            break;
        }
    }
    let (rank, chosen) = best.expect("a single card is always playable");
    BestFive {
        rank,
        best: chosen.iter().map(|&i| hand[i]).collect(),
        unused: (0..4).filter(|i| !chosen.contains(i)).map(|i| hand[i]).collect(),
    }
}

fn badugi_playable(hand: &[Card], subset: &[usize]) -> bool {
    for (n, &i) in subset.iter().enumerate() {
        for &j in &subset[n + 1..] {
            if hand[i].rank() == hand[j].rank() || hand[i].suit() == hand[j].suit() {
                return false;
            }
        }
    }
    true
}

/// All k-subsets of 0..n in lexicographic order.
fn index_subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn recurse(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            recurse(i + 1, n, k, current, out);
            current.pop();
        }
    }
    recurse(0, n, k, &mut current, &mut out);
    out
}
