//! # Card Module
//!
//! This module provides the core [`Card`], [`Rank`] and [`Suit`] types.
//!
//! ## Card Representation
//!
//! A card is a single `u32` in the Cactus-Kev layout, so that the five-card
//! rankers can work on it directly without any per-card decoding:
//!
//! ```text
//! +--------+--------+--------+--------+
//! |xxxAKQJT|98765432|CDHSrrrr|xxpppppp|
//! +--------+--------+--------+--------+
//! ```
//!
//! - bits 16..29: one-hot rank bit
//! - bits 12..15: one-hot suit bit
//! - bits 8..11: rank ordinal (0 = Two .. 12 = Ace)
//! - bits 0..7: per-rank prime (2, 3, 5, ..., 41)
//!
//! ## Examples
//!
//! ```rust
//! use cardrank_core::{Card, Rank, Suit};
//! use std::str::FromStr;
//!
//! let ace = Card::from_str("Ah").unwrap();
//! assert_eq!(ace.rank(), Rank::Ace);
//! assert_eq!(ace.suit(), Suit::Heart);
//! assert_eq!(ace.to_string(), "Ah");
//! assert_eq!(format!("{:#}", ace), "A♥");
//!
//! // Unicode suit glyphs parse too
//! assert_eq!(Card::from_str("T♦").unwrap(), Card::new(Rank::Ten, Suit::Diamond));
//! ```

use crate::errors::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Per-rank primes used by the Cactus-Kev encoding, Two first.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A card rank, Two low through Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Converts a zero-based ordinal (0 = Two .. 12 = Ace) to a rank.
    pub fn from_index(index: u8) -> Option<Rank> {
        Rank::ALL.get(index as usize).copied()
    }

    /// The rank's zero-based ordinal.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The rank's position in the ace-to-five low order, Ace lowest at 0.
    pub fn low_index(self) -> u8 {
        (self as u8 + 1) % 13
    }

    /// The rank character, `'2'`-`'9'`, `'T'`, `'J'`, `'Q'`, `'K'`, `'A'`.
    pub fn to_char(self) -> char {
        b"23456789TJQKA"[self as usize] as char
    }

    /// Parses a rank character. Letters are accepted in either case.
    pub fn from_char(c: char) -> Option<Rank> {
        let index = match c.to_ascii_uppercase() {
            '2' => 0,
            '3' => 1,
            '4' => 2,
            '5' => 3,
            '6' => 4,
            '7' => 5,
            '8' => 6,
            '9' => 7,
            'T' => 8,
            'J' => 9,
            'Q' => 10,
            'K' => 11,
            'A' => 12,
            _ => return None,
        };
        Rank::from_index(index)
    }

    /// The English rank word, e.g. `"Ace"`, `"Ten"`, `"Three"`.
    pub fn word(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// A card suit.
///
/// Discriminants follow the within-rank display order, Clubs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// All four suits in display order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// The one-hot suit mask of the Cactus-Kev layout.
    pub fn mask(self) -> u32 {
        match self {
            Suit::Spade => 0x1000,
            Suit::Heart => 0x2000,
            Suit::Diamond => 0x4000,
            Suit::Club => 0x8000,
        }
    }

    /// The ASCII suit character, `'s'`, `'h'`, `'d'` or `'c'`.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }

    /// The Unicode suit glyph.
    pub fn glyph(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }

    /// Parses an ASCII suit character (case-insensitive) or a suit glyph.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Some(Suit::Spade),
            'h' | '♥' => Some(Suit::Heart),
            'd' | '♦' => Some(Suit::Diamond),
            'c' | '♣' => Some(Suit::Club),
            _ => None,
        }
    }
}

/// A playing card in the Cactus-Kev `u32` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u32);

impl Card {
    /// Creates a card from a rank and suit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cardrank_core::{Card, Rank, Suit};
    ///
    /// let c = Card::new(Rank::King, Suit::Diamond);
    /// assert_eq!(c.to_string(), "Kd");
    /// ```
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let r = rank as u32;
        Card((1 << (16 + r)) | suit.mask() | (r << 8) | PRIMES[r as usize])
    }

    /// The card's rank.
    pub fn rank(self) -> Rank {
        Rank::from_index(((self.0 >> 8) & 0xf) as u8).expect("valid rank nibble")
    }

    /// The card's suit.
    pub fn suit(self) -> Suit {
        match self.0 & 0xf000 {
            0x1000 => Suit::Spade,
            0x2000 => Suit::Heart,
            0x4000 => Suit::Diamond,
            _ => Suit::Club,
        }
    }

    /// The per-rank prime from the low byte.
    pub fn prime(self) -> u32 {
        self.0 & 0xff
    }

    /// The one-hot rank bits, bit 0 = Two.
    pub fn rank_bits(self) -> u32 {
        self.0 >> 16
    }

    /// The raw encoded value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => {
                return Err(Error::InvalidCard {
                    input: s.to_string(),
                })
            }
        };
        let rank = Rank::from_char(rank_char).ok_or(Error::InvalidRankChar { ch: rank_char })?;
        let suit = Suit::from_char(suit_char).ok_or(Error::InvalidSuitChar { ch: suit_char })?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank().to_char(), self.suit().glyph())
        } else {
            write!(f, "{}{}", self.rank().to_char(), self.suit().to_char())
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then(self.suit().cmp(&other.suit()))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Parses a whitespace-separated list of cards.
///
/// Any token that does not parse as a card fails the whole list.
///
/// # Examples
///
/// ```rust
/// use cardrank_core::parse_cards;
///
/// let hand = parse_cards("As Ks Jc 7h 5d").unwrap();
/// assert_eq!(hand.len(), 5);
/// assert!(parse_cards("As Xx").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, Error> {
    s.split_whitespace().map(str::parse).collect()
}

/// Display adapter rendering a card slice as `[As Ks]`, or `[A♠ K♠]` with
/// the alternate flag.
pub struct Cards<'a>(pub &'a [Card]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if f.alternate() {
                write!(f, "{:#}", card)?;
            } else {
                write!(f, "{}", card)?;
            }
        }
        write!(f, "]")
    }
}
