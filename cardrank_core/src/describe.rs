//! Display arrangement of best-five cards and the human-readable hand
//! descriptions built from them.
//!
//! The formatter is table-driven off the rank category; the strings are
//! enumerable and pinned by tests, e.g.
//! `"Two Pair, Sixes over Fives, kicker Jack"` and
//! `"Straight Flush, Five-high, Steel Wheel"`.

use crate::card::{Card, Rank};
use crate::rank::RankCategory;

/// Plural rank word, e.g. `"Sixes"`, `"Aces"`, `"Twos"`.
pub(crate) fn plural(rank: Rank) -> String {
    match rank {
        Rank::Six => "Sixes".to_string(),
        r => format!("{}s", r.word()),
    }
}

/// Arranges a best five for display.
///
/// Straights show rank-descending with the wheel rotated to 5-4-3-2-A;
/// everything else groups by multiplicity descending, then rank
/// descending. With `by_suit`, ties within a rank order by suit ascending
/// (Clubs first); without it the incoming order is preserved (stable).
pub(crate) fn arrange_hi(best: &mut [Card], category: RankCategory, by_suit: bool) {
    match category {
        RankCategory::Straight | RankCategory::StraightFlush => {
            best.sort_by(|a, b| b.rank().cmp(&a.rank()).then(a.suit().cmp(&b.suit())));
            rotate_wheel(best);
        }
        _ => {
            let counts = rank_counts(best);
            if by_suit {
                best.sort_by(|a, b| {
                    counts[b.rank().index() as usize]
                        .cmp(&counts[a.rank().index() as usize])
                        .then(b.rank().cmp(&a.rank()))
                        .then(a.suit().cmp(&b.suit()))
                });
            } else {
                best.sort_by(|a, b| {
                    counts[b.rank().index() as usize]
                        .cmp(&counts[a.rank().index() as usize])
                        .then(b.rank().cmp(&a.rank()))
                });
            }
        }
    }
}

/// Arranges a low hand for display: rank descending with the ace low.
pub(crate) fn arrange_low(best: &mut [Card]) {
    best.sort_by(|a, b| b.rank().low_index().cmp(&a.rank().low_index()));
}

/// Sorts unused cards for display: multiplicity within the whole
/// evaluated hand descending, then rank descending, stable.
pub(crate) fn arrange_unused(unused: &mut [Card], counts: &[u8; 13]) {
    unused.sort_by(|a, b| {
        counts[b.rank().index() as usize]
            .cmp(&counts[a.rank().index() as usize])
            .then(b.rank().cmp(&a.rank()))
    });
}

/// Rotates a sorted-descending ace-low straight so the ace reads last:
/// the wheel as 5-4-3-2-A, the short-deck nine-high straight as 9-8-7-6-A.
fn rotate_wheel(best: &mut [Card]) {
    let ranks: Vec<Rank> = best.iter().map(|c| c.rank()).collect();
    if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]
        || ranks == [Rank::Ace, Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six]
    {
        best.rotate_left(1);
    }
}

pub(crate) fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank().index() as usize] += 1;
    }
    counts
}

/// Describes an arranged high hand.
///
/// `short_deck` enables the Iron Maiden name for the nine-high straight
/// flush.
pub(crate) fn hi_description(category: RankCategory, best: &[Card], short_deck: bool) -> String {
    match category {
        RankCategory::StraightFlush => {
            let high = best[0].rank();
            match high {
                Rank::Ace => format!("Straight Flush, {}-high, Royal", high.word()),
                Rank::Five => format!("Straight Flush, {}-high, Steel Wheel", high.word()),
                Rank::Nine if short_deck => {
                    format!("Straight Flush, {}-high, Iron Maiden", high.word())
                }
                _ => format!("Straight Flush, {}-high", high.word()),
            }
        }
        RankCategory::FourOfAKind => format!(
            "Four of a Kind, {}, kicker {}",
            plural(best[0].rank()),
            best[4].rank().word()
        ),
        RankCategory::FullHouse => format!(
            "Full House, {} full of {}",
            plural(best[0].rank()),
            plural(best[3].rank())
        ),
        RankCategory::Flush => format!("Flush, {}-high", best[0].rank().word()),
        RankCategory::Straight => format!("Straight, {}-high", best[0].rank().word()),
        RankCategory::ThreeOfAKind => format!(
            "Three of a Kind, {}, kickers {}, {}",
            plural(best[0].rank()),
            best[3].rank().word(),
            best[4].rank().word()
        ),
        RankCategory::TwoPair => format!(
            "Two Pair, {} over {}, kicker {}",
            plural(best[0].rank()),
            plural(best[2].rank()),
            best[4].rank().word()
        ),
        RankCategory::Pair => format!(
            "Pair, {}, kickers {}, {}, {}",
            plural(best[0].rank()),
            best[2].rank().word(),
            best[3].rank().word(),
            best[4].rank().word()
        ),
        RankCategory::Nothing => format!(
            "Nothing, {}-high, kickers {}, {}, {}, {}",
            best[0].rank().word(),
            best[1].rank().word(),
            best[2].rank().word(),
            best[3].rank().word(),
            best[4].rank().word()
        ),
        RankCategory::Invalid => "Invalid".to_string(),
    }
}

/// Describes an arranged low hand as `"<top>-low"`, ace low.
pub(crate) fn low_description(best: &[Card]) -> String {
    let top = best
        .iter()
        .map(|c| c.rank())
        .max_by_key(|r| r.low_index())
        .expect("non-empty low hand");
    format!("{}-low", top.word())
}
