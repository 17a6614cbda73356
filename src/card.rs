//! Card types (Suit/Rank/Card).
//!
//! These are "zero-cost" abstractions: small enums and a small struct that
//! compile down to integer operations. A card's identity is the (rank, suit)
//! pair; ordering between cards only ever looks at the rank.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A playing card suit. Suits carry no ordering, only identity.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Unicode suit symbol.
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }

    pub const fn ascii(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Relabel this suit: `perm[s]` is the image of suit `s`.
    #[inline(always)]
    pub const fn permute(self, perm: &[Suit; 4]) -> Suit {
        perm[self as usize]
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'c' | 'C' | '\u{2663}' => Some(Suit::Clubs),
            'd' | 'D' | '\u{2666}' => Some(Suit::Diamonds),
            'h' | 'H' | '\u{2665}' => Some(Suit::Hearts),
            's' | 'S' | '\u{2660}' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card rank.
///
/// We store ranks as 0..12 (Two..Ace). This matches a 13-bit mask naturally.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        let r = match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(r)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A card = rank + suit.
///
/// Equality is identity (both fields). `Card` deliberately has no `Ord`:
/// poker ordering compares ranks only, which would disagree with `Eq`.
/// Use [`Card::cmp_rank`] to order cards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[inline(always)]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Standard 0..51 card id mapping:
    /// suit = id / 13, rank = id % 13.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Self {
        let suit = Suit::from_u8(id / 13);
        let rank = Rank::from_u8(id % 13);
        Self { rank, suit }
    }

    /// Convert to 0..51 id (inverse of from_id).
    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8)
    }

    /// Rank-only ordering. Two cards of equal rank compare `Equal`
    /// regardless of suit.
    #[inline(always)]
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    #[inline(always)]
    pub const fn permute(self, perm: &[Suit; 4]) -> Card {
        Card::new(self.rank, self.suit.permute(perm))
    }

    /// ASCII form, e.g. `As`, `Td`.
    pub fn to_ascii(self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.ascii())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let rank = chars.next().and_then(Rank::from_char);
        let suit = chars.next().and_then(Suit::from_char);
        match (rank, suit, chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Card::new(rank, suit)),
            _ => Err(EngineError::InvalidCard(s.to_string())),
        }
    }
}

/// Parse a whitespace or comma separated card list, e.g. `"As Kd, 7h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;
    use Suit::*;

    #[test]
    fn id_roundtrip_covers_universe() {
        for id in 0u8..52 {
            assert_eq!(Card::from_id(id).id(), id);
        }
        assert_eq!(Card::new(Ace, Spades).id(), 51);
    }

    #[test]
    fn ordering_ignores_suit() {
        let a = Card::new(Queen, Hearts);
        let b = Card::new(Queen, Clubs);
        assert_eq!(a.cmp_rank(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(Card::new(Two, Spades).cmp_rank(&a), Ordering::Less);
    }

    #[test]
    fn display_and_parse() {
        let c = Card::new(Ten, Diamonds);
        assert_eq!(c.to_string(), "T\u{2666}");
        assert_eq!(c.to_ascii(), "Td");
        assert_eq!("Td".parse::<Card>().unwrap(), c);
        assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
        assert!("Tx".parse::<Card>().is_err());
        assert!("Tdd".parse::<Card>().is_err());
        assert!(matches!("1c".parse::<Card>(), Err(EngineError::InvalidCard(_))));
    }

    #[test]
    fn parse_list() {
        let cards = parse_cards("As Kd, 7h").unwrap();
        assert_eq!(
            cards,
            vec![Card::new(Ace, Spades), Card::new(King, Diamonds), Card::new(Seven, Hearts)]
        );
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn permutation_relabels_suit_only() {
        let perm = [Spades, Hearts, Diamonds, Clubs];
        let c = Card::new(Nine, Clubs).permute(&perm);
        assert_eq!(c, Card::new(Nine, Spades));
    }
}
