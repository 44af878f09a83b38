//! # Rank Lookup Tables
//!
//! Init-time generation of the five-card lookup tables:
//!
//! - [`CactusTable`]: the canonical Cactus-Kev rank space (1..7462). Flush
//!   hands resolve through an 8192-entry table indexed by the OR of the
//!   hand's rank bits; every other hand resolves through a binary search
//!   over (prime product, rank) pairs.
//! - [`LowballTable`]: the same two structures populated in deuce-to-seven
//!   order, where aces are always high, there is no wheel, and straights
//!   and flushes count against the hand. Rank 1 is 7-5-4-3-2 offsuit.
//!
//! Both tables enumerate every equivalence class once, in order of
//! strength, so that rank values are dense and the fixed category
//! boundaries hold exactly.

use once_cell::sync::Lazy;

use crate::card::Card;

/// Per-rank primes, Two first. Mirrors the card encoding's low byte.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Straight rank-bit patterns, strongest first, wheel last.
const STRAIGHT_MASKS: [u16; 10] = [
    0b1_1111_0000_0000, // A K Q J T
    0b0_1111_1000_0000, // K Q J T 9
    0b0_0111_1100_0000, // Q J T 9 8
    0b0_0011_1110_0000, // J T 9 8 7
    0b0_0001_1111_0000, // T 9 8 7 6
    0b0_0000_1111_1000, // 9 8 7 6 5
    0b0_0000_0111_1100, // 8 7 6 5 4
    0b0_0000_0011_1110, // 7 6 5 4 3
    0b0_0000_0001_1111, // 6 5 4 3 2
    0b1_0000_0000_1111, // 5 4 3 2 A
];

/// The shared process-long Cactus table.
pub(crate) static CACTUS: Lazy<CactusTable> = Lazy::new(CactusTable::new);

/// The shared process-long deuce-to-seven table.
pub(crate) static LOWBALL: Lazy<LowballTable> = Lazy::new(LowballTable::new);

/// Canonical Cactus-Kev lookup tables.
pub struct CactusTable {
    flush_lookup: Vec<u16>,
    unique: Vec<(u32, u16)>,
}

impl CactusTable {
    /// Generates the tables, class by class from best to worst.
    pub fn new() -> Self {
        let mut flush_lookup = vec![0u16; 8192];
        let mut unique = Vec::with_capacity(6175);
        let mut rank = 1u16;

        // Straight flushes, royal down to the steel wheel.
        for mask in STRAIGHT_MASKS {
            flush_lookup[mask as usize] = rank;
            rank += 1;
        }

        // Four of a kind, then full houses.
        for quad in (0..13).rev() {
            for kicker in (0..13).rev() {
                if kicker != quad {
                    unique.push((PRIMES[quad].pow(4) * PRIMES[kicker], rank));
                    rank += 1;
                }
            }
        }
        for trips in (0..13).rev() {
            for pair in (0..13).rev() {
                if pair != trips {
                    unique.push((PRIMES[trips].pow(3) * PRIMES[pair].pow(2), rank));
                    rank += 1;
                }
            }
        }

        // Flushes: every distinct-rank combination that is not a straight.
        for combo in combos_desc(5) {
            if !is_straight(&combo) {
                flush_lookup[rank_mask(&combo) as usize] = rank;
                rank += 1;
            }
        }

        // Straights.
        for mask in STRAIGHT_MASKS {
            unique.push((mask_prime_product(mask), rank));
            rank += 1;
        }

        // Three of a kind.
        for trips in (0..13).rev() {
            for kickers in combos_desc(2) {
                if !kickers.contains(&trips) {
                    let product =
                        PRIMES[trips].pow(3) * PRIMES[kickers[0]] * PRIMES[kickers[1]];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // Two pair.
        for pairs in combos_desc(2) {
            for kicker in (0..13).rev() {
                if !pairs.contains(&kicker) {
                    let product =
                        PRIMES[pairs[0]].pow(2) * PRIMES[pairs[1]].pow(2) * PRIMES[kicker];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // One pair.
        for pair in (0..13).rev() {
            for kickers in combos_desc(3) {
                if !kickers.contains(&pair) {
                    let product = PRIMES[pair].pow(2)
                        * PRIMES[kickers[0]]
                        * PRIMES[kickers[1]]
                        * PRIMES[kickers[2]];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // High cards.
        for combo in combos_desc(5) {
            if !is_straight(&combo) {
                unique.push((combo.iter().map(|&r| PRIMES[r]).product(), rank));
                rank += 1;
            }
        }

        debug_assert_eq!(rank, 7463);
        unique.sort_unstable_by_key(|&(product, _)| product);
        Self {
            flush_lookup,
            unique,
        }
    }

    /// Ranks five cards in the canonical Cactus-Kev space.
    ///
    /// # Panics
    ///
    /// Panics when the five cards do not form a 52-card-deck hand (for
    /// example, an impossible five-of-a-kind built from duplicate cards).
    pub fn rank(&self, c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
        let suit_and = c0.value() & c1.value() & c2.value() & c3.value() & c4.value() & 0xf000;
        if suit_and != 0 {
            let bits =
                c0.rank_bits() | c1.rank_bits() | c2.rank_bits() | c3.rank_bits() | c4.rank_bits();
            return self.flush_lookup[bits as usize];
        }
        let product = c0.prime() * c1.prime() * c2.prime() * c3.prime() * c4.prime();
        lookup(&self.unique, product)
    }
}

impl Default for CactusTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Deuce-to-seven lowball lookup tables.
///
/// Ranks are dense over the same 7462 equivalence classes, 1 = 7-5-4-3-2
/// offsuit, growing through high cards, pairs, two pairs, trips, straights,
/// flushes, full houses, quads and straight flushes.
pub struct LowballTable {
    flush_lookup: Vec<u16>,
    unique: Vec<(u32, u16)>,
}

impl LowballTable {
    /// Generates the table, class by class from best low to worst.
    pub fn new() -> Self {
        let mut flush_lookup = vec![0u16; 8192];
        let mut unique = Vec::with_capacity(6175);
        let mut rank = 1u16;

        // Aces are always high: only the nine ace-high-consecutive runs
        // count as straights; the wheel pattern stays a high card.
        let straights: Vec<u16> = STRAIGHT_MASKS[..9].to_vec();
        let is_27_straight = |combo: &[usize; 5]| straights.contains(&rank_mask(combo));

        // High cards, weakest high hand first.
        for combo in combos_asc(5) {
            if !is_27_straight(&combo) {
                unique.push((combo.iter().map(|&r| PRIMES[r]).product(), rank));
                rank += 1;
            }
        }

        // One pair.
        for pair in 0..13 {
            for kickers in combos_asc(3) {
                if !kickers.contains(&pair) {
                    let product = PRIMES[pair].pow(2)
                        * PRIMES[kickers[0]]
                        * PRIMES[kickers[1]]
                        * PRIMES[kickers[2]];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // Two pair.
        for pairs in combos_asc(2) {
            for kicker in 0..13 {
                if !pairs.contains(&kicker) {
                    let product =
                        PRIMES[pairs[0]].pow(2) * PRIMES[pairs[1]].pow(2) * PRIMES[kicker];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // Three of a kind.
        for trips in 0..13 {
            for kickers in combos_asc(2) {
                if !kickers.contains(&trips) {
                    let product =
                        PRIMES[trips].pow(3) * PRIMES[kickers[0]] * PRIMES[kickers[1]];
                    unique.push((product, rank));
                    rank += 1;
                }
            }
        }

        // Straights, six-high first.
        for &mask in straights.iter().rev() {
            unique.push((mask_prime_product(mask), rank));
            rank += 1;
        }

        // Flushes, including the suited wheel pattern.
        for combo in combos_asc(5) {
            if !is_27_straight(&combo) {
                flush_lookup[rank_mask(&combo) as usize] = rank;
                rank += 1;
            }
        }

        // Full houses, then quads.
        for trips in 0..13 {
            for pair in 0..13 {
                if pair != trips {
                    unique.push((PRIMES[trips].pow(3) * PRIMES[pair].pow(2), rank));
                    rank += 1;
                }
            }
        }
        for quad in 0..13 {
            for kicker in 0..13 {
                if kicker != quad {
                    unique.push((PRIMES[quad].pow(4) * PRIMES[kicker], rank));
                    rank += 1;
                }
            }
        }

        // Straight flushes, six-high first.
        for &mask in straights.iter().rev() {
            flush_lookup[mask as usize] = rank;
            rank += 1;
        }

        debug_assert_eq!(rank, 7463);
        unique.sort_unstable_by_key(|&(product, _)| product);
        Self {
            flush_lookup,
            unique,
        }
    }

    /// Ranks five cards in deuce-to-seven low order.
    ///
    /// # Panics
    ///
    /// Panics when the five cards do not form a 52-card-deck hand.
    pub fn rank(&self, c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> u16 {
        let suit_and = c0.value() & c1.value() & c2.value() & c3.value() & c4.value() & 0xf000;
        if suit_and != 0 {
            let bits =
                c0.rank_bits() | c1.rank_bits() | c2.rank_bits() | c3.rank_bits() | c4.rank_bits();
            return self.flush_lookup[bits as usize];
        }
        let product = c0.prime() * c1.prime() * c2.prime() * c3.prime() * c4.prime();
        lookup(&self.unique, product)
    }
}

impl Default for LowballTable {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(unique: &[(u32, u16)], product: u32) -> u16 {
    let index = unique
        .binary_search_by_key(&product, |&(p, _)| p)
        .unwrap_or_else(|_| panic!("no hand class for prime product {}", product));
    unique[index].1
}

/// Rank-bit mask of a distinct-rank combination.
fn rank_mask(combo: &[usize; 5]) -> u16 {
    combo.iter().fold(0u16, |mask, &r| mask | (1 << r))
}

fn mask_prime_product(mask: u16) -> u32 {
    (0..13)
        .filter(|&r| mask & (1 << r) != 0)
        .map(|r| PRIMES[r])
        .product()
}

/// Is the ascending rank combination a straight (including the wheel)?
fn is_straight(combo: &[usize; 5]) -> bool {
    let mask = rank_mask(combo);
    STRAIGHT_MASKS.contains(&mask)
}

/// All k-subsets of the 13 ranks, strongest hand first: descending
/// lexicographic on the sorted-descending rank tuple.
fn combos(k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn recurse(start: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for r in (0..start).rev() {
            current.push(r);
            recurse(r, k, current, out);
            current.pop();
        }
    }
    recurse(13, k, &mut current, &mut out);
    out
}

fn combos_desc(k: usize) -> Vec<[usize; 5]> {
    combos(k).into_iter().map(pad).collect()
}

fn combos_asc(k: usize) -> Vec<[usize; 5]> {
    let mut v = combos_desc(k);
    v.reverse();
    v
}

/// Pads a descending combination into a fixed-size array; unused slots
/// repeat the last rank so `rank_mask` and kicker indexing stay valid for
/// k < 5 only through the first k slots.
fn pad(combo: Vec<usize>) -> [usize; 5] {
    let mut out = [combo[combo.len() - 1]; 5];
    out[..combo.len()].copy_from_slice(&combo);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    fn cactus(s: &str) -> u16 {
        let h = parse_cards(s).unwrap();
        CACTUS.rank(h[0], h[1], h[2], h[3], h[4])
    }

    fn lowball(s: &str) -> u16 {
        let h = parse_cards(s).unwrap();
        LOWBALL.rank(h[0], h[1], h[2], h[3], h[4])
    }

    #[test]
    fn test_combo_counts() {
        assert_eq!(combos(5).len(), 1287);
        assert_eq!(combos(3).len(), 286);
        assert_eq!(combos(2).len(), 78);
    }

    #[test]
    fn test_combo_order() {
        let all = combos(5);
        // Strongest first: A K Q J T; weakest last: 6 5 4 3 2.
        assert_eq!(all[0], vec![12, 11, 10, 9, 8]);
        assert_eq!(all[1], vec![12, 11, 10, 9, 7]);
        assert_eq!(all[all.len() - 1], vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_cactus_table_shape() {
        assert_eq!(CACTUS.unique.len(), 6175);
        let populated = CACTUS.flush_lookup.iter().filter(|&&r| r != 0).count();
        assert_eq!(populated, 1287);
    }

    #[test]
    fn test_cactus_known_ranks() {
        assert_eq!(cactus("As Ks Qs Js Ts"), 1);
        assert_eq!(cactus("3d 5d 2d 4d Ad"), 10);
        assert_eq!(cactus("As Ac Ad Ah 5h"), 0x0013);
        assert_eq!(cactus("6s 6c 6d 5s 5h"), 0x010f);
        assert_eq!(cactus("Ts 7s 4s 3s 2s"), 0x0606);
        assert_eq!(cactus("As Ks Qd Jh Td"), 0x0640);
        assert_eq!(cactus("4s 5s 2d 3h Ac"), 0x0649);
        assert_eq!(cactus("As Ac Ad Jd 5d"), 0x0664);
        assert_eq!(cactus("Jd 6s 6c 5c 5d"), 0x0c93);
        assert_eq!(cactus("As Ac Jc 7h 5d"), 0x0d78);
        assert_eq!(cactus("As Ks Jc 7h 5d"), 0x186c);
        // Worst hand in the deck.
        assert_eq!(cactus("7s 5c 4d 3h 2s"), 7462);
    }

    #[test]
    fn test_cactus_short_deck_inputs() {
        // The two hands the short-deck wrapper remaps.
        assert_eq!(cactus("9d 8d 7d 6d Ad"), 747);
        assert_eq!(cactus("9d 8c 7d 6d Ad"), 6610);
    }

    #[test]
    fn test_lowball_table_shape() {
        assert_eq!(LOWBALL.unique.len(), 6175);
        let populated = LOWBALL.flush_lookup.iter().filter(|&&r| r != 0).count();
        assert_eq!(populated, 1287);
    }

    #[test]
    fn test_lowball_first_ranks() {
        assert_eq!(lowball("7h 5h 4h 3h 2c"), 1);
        assert_eq!(lowball("7h 6h 4h 3h 2c"), 2);
        assert_eq!(lowball("7h 6h 5h 3h 2c"), 3);
        assert_eq!(lowball("7h 6h 5h 4h 2c"), 4);
        assert_eq!(lowball("8h 5h 4h 3h 2c"), 5);
        assert_eq!(lowball("8h 6h 5h 4h 3c"), 9);
        assert_eq!(lowball("8h 7h 6h 5h 3c"), 18);
        assert_eq!(lowball("9h 5h 4h 3h 2c"), 19);
    }

    #[test]
    fn test_lowball_penalties() {
        // Straights, flushes and the ace count against the hand.
        let wheelish = lowball("5h 4h 3h 2h Ac"); // ace-high, not a straight
        let straight = lowball("6h 5h 4h 3h 2c");
        let flush = lowball("7h 5h 4h 3h 2h");
        let pair = lowball("7h 7c 4h 3h 2c");
        assert!(lowball("7h 5h 4h 3h 2c") < pair);
        assert!(pair < straight);
        assert!(straight < flush);
        // The best ace-high still loses to every king-high.
        assert!(lowball("Kh Qh Jh Th 8c") < wheelish);
        // Royal flush is the worst deuce-to-seven hand.
        assert_eq!(lowball("As Ks Qs Js Ts"), 7462);
    }
}
