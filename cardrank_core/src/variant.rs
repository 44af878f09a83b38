//! # Poker Variant Module
//!
//! This module provides the [`Variant`] enum and the immutable descriptor
//! records behind it. A descriptor specifies how many pocket cards are
//! dealt, the board size, the subset-selection rule, the hi ranker, the
//! optional lo ranker with its qualifier cap, and whether the variant
//! plays from the 36-card short deck. The descriptor drives dealing,
//! ranking, description and comparison; after process start it is never
//! mutated.
//!
//! ## Examples
//!
//! ```rust
//! use cardrank_core::{parse_cards, Variant};
//! use rand::SeedableRng;
//!
//! // Deal and rank a six-player holdem game.
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1928);
//! let (pockets, board) = Variant::Holdem.deal(&mut rng, 6);
//! let hands = Variant::Holdem.rank_hands(&pockets, &board);
//! assert_eq!(hands.len(), 6);
//!
//! // Or rank fixed cards directly.
//! let hand = Variant::Omaha.rank_hand(
//!     &parse_cards("As Ah Qh 3s").unwrap(),
//!     &parse_cards("Td 2c Jd 4c 5c").unwrap(),
//! );
//! assert_eq!(hand.description(), "Straight, Five-high");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::card::Card;
use crate::deck::Deck;
use crate::errors::Error;
use crate::evaluator::rankers::{
    rank_ace_five_low, rank_cactus, rank_eight_or_better, rank_lowball, rank_razz, rank_six_plus,
    RankFiveFn,
};
use crate::hand::Hand;
use crate::rank::EIGHT_OR_BETTER_MAX;

/// A poker variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Texas holdem: 2 pocket cards, 5 board cards, any five play.
    Holdem,
    /// Short-deck (six-plus) holdem: 36-card deck, flushes beat full
    /// houses and A-6-7-8-9 plays as a straight.
    ShortDeck,
    /// Omaha: 4 pocket cards, exactly 2 must play with 3 board cards.
    Omaha,
    /// Omaha hi/lo split with an eight-or-better low qualifier.
    OmahaHiLo,
    /// Seven-card stud, modeled as 7 pocket cards and no board.
    Stud,
    /// Seven-card stud hi/lo split with an eight-or-better low qualifier.
    StudHiLo,
    /// Razz: seven-card stud played for the ace-to-five low only.
    Razz,
    /// Badugi: 4 pocket cards, largest distinct-rank distinct-suit subset.
    Badugi,
    /// Deuce-to-seven (2-7) lowball: 5 pocket cards, aces high, straights
    /// and flushes count against the hand.
    Lowball,
    /// Fusion. Declared for text round-trip; plays as an open hi game.
    Fusion,
}

/// How a variant selects the five (or fewer) cards that play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubsetRule {
    /// Any five of pocket and board.
    Open,
    /// Exactly two of four pocket cards and three of five board cards.
    ExactTwoThree,
    /// The largest playable badugi subset of four pocket cards.
    Badugi,
    /// All five pocket cards, no board.
    PocketOnly,
}

/// Immutable per-variant configuration record.
pub(crate) struct Descriptor {
    pub pocket: usize,
    pub board: usize,
    pub rule: SubsetRule,
    pub hi: RankFiveFn,
    pub lo: Option<(RankFiveFn, u16)>,
    pub short_deck: bool,
    /// The hi side is a low game (razz): ranks come from the low ranker
    /// and descriptions switch to the `"<rank>-low"` form.
    pub low_game: bool,
}

const HOLDEM: Descriptor = Descriptor {
    pocket: 2,
    board: 5,
    rule: SubsetRule::Open,
    hi: rank_cactus,
    lo: None,
    short_deck: false,
    low_game: false,
};

const SHORT_DECK: Descriptor = Descriptor {
    pocket: 2,
    board: 5,
    rule: SubsetRule::Open,
    hi: rank_six_plus,
    lo: None,
    short_deck: true,
    low_game: false,
};

const OMAHA: Descriptor = Descriptor {
    pocket: 4,
    board: 5,
    rule: SubsetRule::ExactTwoThree,
    hi: rank_cactus,
    lo: None,
    short_deck: false,
    low_game: false,
};

const OMAHA_HI_LO: Descriptor = Descriptor {
    pocket: 4,
    board: 5,
    rule: SubsetRule::ExactTwoThree,
    hi: rank_cactus,
    lo: Some((rank_eight_or_better, EIGHT_OR_BETTER_MAX)),
    short_deck: false,
    low_game: false,
};

const STUD: Descriptor = Descriptor {
    pocket: 7,
    board: 0,
    rule: SubsetRule::Open,
    hi: rank_cactus,
    lo: None,
    short_deck: false,
    low_game: false,
};

const STUD_HI_LO: Descriptor = Descriptor {
    pocket: 7,
    board: 0,
    rule: SubsetRule::Open,
    hi: rank_cactus,
    lo: Some((rank_eight_or_better, EIGHT_OR_BETTER_MAX)),
    short_deck: false,
    low_game: false,
};

const RAZZ: Descriptor = Descriptor {
    pocket: 7,
    board: 0,
    rule: SubsetRule::Open,
    hi: rank_razz,
    lo: None,
    short_deck: false,
    low_game: true,
};

const BADUGI: Descriptor = Descriptor {
    pocket: 4,
    board: 0,
    rule: SubsetRule::Badugi,
    // The badugi selector packs the same ace-low rank bits; the five-card
    // form is kept for the record but the rule drives evaluation.
    hi: rank_ace_five_low,
    lo: None,
    short_deck: false,
    low_game: false,
};

const LOWBALL: Descriptor = Descriptor {
    pocket: 5,
    board: 0,
    rule: SubsetRule::PocketOnly,
    hi: rank_lowball,
    lo: None,
    short_deck: false,
    low_game: false,
};

const FUSION: Descriptor = Descriptor {
    pocket: 2,
    board: 5,
    rule: SubsetRule::Open,
    hi: rank_cactus,
    lo: None,
    short_deck: false,
    low_game: false,
};

impl Variant {
    /// All variants in declaration order.
    pub const ALL: [Variant; 10] = [
        Variant::Holdem,
        Variant::ShortDeck,
        Variant::Omaha,
        Variant::OmahaHiLo,
        Variant::Stud,
        Variant::StudHiLo,
        Variant::Razz,
        Variant::Badugi,
        Variant::Lowball,
        Variant::Fusion,
    ];

    pub(crate) fn descriptor(self) -> &'static Descriptor {
        match self {
            Variant::Holdem => &HOLDEM,
            Variant::ShortDeck => &SHORT_DECK,
            Variant::Omaha => &OMAHA,
            Variant::OmahaHiLo => &OMAHA_HI_LO,
            Variant::Stud => &STUD,
            Variant::StudHiLo => &STUD_HI_LO,
            Variant::Razz => &RAZZ,
            Variant::Badugi => &BADUGI,
            Variant::Lowball => &LOWBALL,
            Variant::Fusion => &FUSION,
        }
    }

    /// The canonical variant tag, e.g. `"OmahaHiLo"`, `"Short"`.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Holdem => "Holdem",
            Variant::ShortDeck => "Short",
            Variant::Omaha => "Omaha",
            Variant::OmahaHiLo => "OmahaHiLo",
            Variant::Stud => "Stud",
            Variant::StudHiLo => "StudHiLo",
            Variant::Razz => "Razz",
            Variant::Badugi => "Badugi",
            Variant::Lowball => "Lowball",
            Variant::Fusion => "Fusion",
        }
    }

    /// Number of pocket cards dealt per player.
    pub fn pocket_size(self) -> usize {
        self.descriptor().pocket
    }

    /// Number of community cards dealt.
    pub fn board_size(self) -> usize {
        self.descriptor().board
    }

    /// Whether this variant deals from the 36-card short deck.
    pub fn uses_short_deck(self) -> bool {
        self.descriptor().short_deck
    }

    /// Whether this variant splits the pot with a qualifying low hand.
    pub fn has_low(self) -> bool {
        self.descriptor().lo.is_some()
    }

    /// Shuffles a fresh deck and deals pockets and board.
    ///
    /// Each player's pocket is dealt as a consecutive block, then the
    /// board. Deterministic for a given seeded RNG.
    ///
    /// # Panics
    ///
    /// Panics when the deck cannot cover `players` pockets plus the board.
    pub fn deal<R: rand::Rng>(self, rng: &mut R, players: usize) -> (Vec<Vec<Card>>, Vec<Card>) {
        let desc = self.descriptor();
        let mut deck = if desc.short_deck {
            Deck::short()
        } else {
            Deck::new()
        };
        assert!(
            players >= 1 && players * desc.pocket + desc.board <= deck.remaining(),
            "cannot deal {} players of {}",
            players,
            self.name()
        );
        deck.shuffle(rng);
        let pockets = (0..players).map(|_| deck.deal(desc.pocket)).collect();
        let board = deck.deal(desc.board);
        (pockets, board)
    }

    /// Evaluates one pocket against a board.
    ///
    /// # Panics
    ///
    /// Panics when the card counts do not fit the variant (see
    /// [`Hand::new`] for the fallible form).
    pub fn rank_hand(self, pocket: &[Card], board: &[Card]) -> Hand {
        Hand::new(self, pocket.to_vec(), board.to_vec())
            .unwrap_or_else(|err| panic!("{}: {}", self.name(), err))
    }

    /// Evaluates every player's pocket against a shared board.
    ///
    /// # Panics
    ///
    /// Panics when any pocket's card count does not fit the variant.
    pub fn rank_hands(self, pockets: &[Vec<Card>], board: &[Card]) -> Vec<Hand> {
        pockets
            .iter()
            .map(|pocket| self.rank_hand(pocket, board))
            .collect()
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "holdem" => Ok(Variant::Holdem),
            "short" | "shortdeck" => Ok(Variant::ShortDeck),
            "omaha" => Ok(Variant::Omaha),
            "omahahilo" => Ok(Variant::OmahaHiLo),
            "stud" => Ok(Variant::Stud),
            "studhilo" => Ok(Variant::StudHiLo),
            "razz" => Ok(Variant::Razz),
            "badugi" => Ok(Variant::Badugi),
            "lowball" => Ok(Variant::Lowball),
            "fusion" => Ok(Variant::Fusion),
            _ => Err(Error::InvalidVariant {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_case_insensitive() {
        let cases = [
            ("HOLDEM", Variant::Holdem),
            ("omaha", Variant::Omaha),
            ("studHiLo", Variant::StudHiLo),
            ("razz", Variant::Razz),
            ("BaDUGI", Variant::Badugi),
            ("fusIon", Variant::Fusion),
            ("short", Variant::ShortDeck),
            ("ShortDeck", Variant::ShortDeck),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Variant>().unwrap(), expected, "{}", input);
        }
        assert!("pineapple".parse::<Variant>().is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            let back: Variant = serde_json::from_str(&json).unwrap();
            assert_eq!(back, variant);
        }
        assert_eq!(serde_json::to_string(&Variant::ShortDeck).unwrap(), "\"Short\"");
    }

    #[test]
    fn test_descriptor_sizes() {
        assert_eq!(Variant::Holdem.pocket_size(), 2);
        assert_eq!(Variant::Holdem.board_size(), 5);
        assert_eq!(Variant::Omaha.pocket_size(), 4);
        assert_eq!(Variant::Stud.pocket_size(), 7);
        assert_eq!(Variant::Stud.board_size(), 0);
        assert_eq!(Variant::Badugi.pocket_size(), 4);
        assert_eq!(Variant::Lowball.pocket_size(), 5);
        assert!(Variant::ShortDeck.uses_short_deck());
        assert!(Variant::OmahaHiLo.has_low());
        assert!(Variant::StudHiLo.has_low());
        assert!(!Variant::Razz.has_low());
    }

    #[test]
    fn test_deal_shapes() {
        use rand::SeedableRng;
        for variant in Variant::ALL {
            let mut rng = rand::rngs::StdRng::seed_from_u64(42);
            let (pockets, board) = variant.deal(&mut rng, 2);
            assert_eq!(pockets.len(), 2);
            for pocket in &pockets {
                assert_eq!(pocket.len(), variant.pocket_size());
            }
            assert_eq!(board.len(), variant.board_size());

            // No card appears twice across the whole deal.
            let mut seen = HashSet::new();
            for card in pockets.iter().flatten().chain(&board) {
                assert!(seen.insert(*card), "{} dealt twice", card);
            }
        }
    }

    #[test]
    fn test_deal_deterministic() {
        use rand::SeedableRng;
        let mut rng_a = rand::rngs::StdRng::seed_from_u64(1928);
        let mut rng_b = rand::rngs::StdRng::seed_from_u64(1928);
        let (pockets_a, board_a) = Variant::Holdem.deal(&mut rng_a, 6);
        let (pockets_b, board_b) = Variant::Holdem.deal(&mut rng_b, 6);
        assert_eq!(pockets_a, pockets_b);
        assert_eq!(board_a, board_b);
    }

    #[test]
    #[should_panic(expected = "cannot deal")]
    fn test_deal_too_many_players() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        // 8 stud players would need 56 cards.
        Variant::Stud.deal(&mut rng, 8);
    }
}
