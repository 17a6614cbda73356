//! Starting hands (two pocket cards) and their canonical enumerations.

use std::fmt;

use crate::bitboard::CardSet;
use crate::card::{Card, Rank, Suit};

/// Number of distinct two-card starting hands.
pub const ALL_COUNT: usize = 1326;
/// Number of starting hand classes (rank pair x suited/off-suit).
pub const SIGNIFICANT_COUNT: usize = 169;

/// Two pocket cards. The order of the cards carries no meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingHand {
    pub first: Card,
    pub second: Card,
}

impl StartingHand {
    pub const fn new(first: Card, second: Card) -> Self {
        Self { first, second }
    }

    pub const fn cards(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    pub fn mask(&self) -> CardSet {
        CardSet::from_cards(self.cards())
    }

    pub fn is_suited(&self) -> bool {
        self.first.suit == self.second.suit
    }

    pub fn is_pair(&self) -> bool {
        self.first.rank == self.second.rank
    }

    /// Whether the two hands share a card.
    pub fn overlaps(&self, other: &StartingHand) -> bool {
        self.mask().intersects(other.mask())
    }

    pub fn permute(&self, perm: &[Suit; 4]) -> StartingHand {
        StartingHand::new(self.first.permute(perm), self.second.permute(perm))
    }

    /// Class label such as `AA`, `AKs` or `T9o`.
    pub fn class_name(&self) -> String {
        let (hi, lo) = if self.first.rank >= self.second.rank {
            (self.first.rank, self.second.rank)
        } else {
            (self.second.rank, self.first.rank)
        };
        match (self.is_pair(), self.is_suited()) {
            (true, _) => format!("{}{}", hi, lo),
            (false, true) => format!("{}{}s", hi, lo),
            (false, false) => format!("{}{}o", hi, lo),
        }
    }

    /// The 1,326 starting hands in canonical order: descending first rank,
    /// descending second rank, then suit pairs. Pairs appear once per
    /// unordered suit pair.
    pub fn all() -> Vec<StartingHand> {
        let mut hands = Vec::with_capacity(ALL_COUNT);
        for &r1 in Rank::ALL.iter().rev() {
            for &r2 in Rank::ALL.iter().rev().filter(|r| **r <= r1) {
                for s1 in Suit::ALL {
                    for s2 in Suit::ALL {
                        if r1 == r2 && s2.idx() >= s1.idx() {
                            continue;
                        }
                        hands.push(StartingHand::new(Card::new(r1, s1), Card::new(r2, s2)));
                    }
                }
            }
        }
        hands
    }

    /// One representative per starting hand class: the off-suit hand with
    /// suits `off` / `other`, plus the suited hand in `off` for non-pairs.
    pub fn significant_with(off: Suit, other: Suit) -> Vec<StartingHand> {
        debug_assert_ne!(off, other);
        let mut hands = Vec::with_capacity(SIGNIFICANT_COUNT);
        for &r1 in Rank::ALL.iter().rev() {
            for &r2 in Rank::ALL.iter().rev().filter(|r| **r <= r1) {
                hands.push(StartingHand::new(Card::new(r1, off), Card::new(r2, other)));
                if r1 != r2 {
                    hands.push(StartingHand::new(Card::new(r1, off), Card::new(r2, off)));
                }
            }
        }
        hands
    }

    pub fn significant() -> Vec<StartingHand> {
        Self::significant_with(Suit::Diamonds, Suit::Spades)
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

const NO_INDEX: u16 = u16::MAX;

/// The canonical list of all starting hands plus a card-pair index into it.
///
/// Built once by the caller and passed to whatever needs it.
#[derive(Clone, Debug)]
pub struct StartingHands {
    hands: Vec<StartingHand>,
    index: Vec<u16>,
}

impl Default for StartingHands {
    fn default() -> Self {
        Self::new()
    }
}

impl StartingHands {
    pub fn new() -> Self {
        let hands = StartingHand::all();
        let mut index = vec![NO_INDEX; 52 * 52];
        for (i, h) in hands.iter().enumerate() {
            let (a, b) = (h.first.id() as usize, h.second.id() as usize);
            index[a * 52 + b] = i as u16;
            index[b * 52 + a] = i as u16;
        }
        Self { hands, index }
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn as_slice(&self) -> &[StartingHand] {
        &self.hands
    }

    pub fn get(&self, i: usize) -> Option<&StartingHand> {
        self.hands.get(i)
    }

    /// Position of the hand holding these two cards, in either order.
    #[inline(always)]
    pub fn index_of_cards(&self, a: Card, b: Card) -> Option<usize> {
        match self.index[a.id() as usize * 52 + b.id() as usize] {
            NO_INDEX => None,
            i => Some(i as usize),
        }
    }

    pub fn index_of(&self, hand: &StartingHand) -> Option<usize> {
        self.index_of_cards(hand.first, hand.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank::*, Suit::*};
    use std::collections::HashSet;

    #[test]
    fn all_has_every_card_pair_once() {
        let hands = StartingHand::all();
        assert_eq!(hands.len(), ALL_COUNT);
        let masks: HashSet<u64> = hands.iter().map(|h| h.mask().bits()).collect();
        assert_eq!(masks.len(), ALL_COUNT);
        assert!(hands.iter().all(|h| h.mask().len() == 2));
    }

    #[test]
    fn canonical_order_starts_with_aces() {
        let hands = StartingHand::all();
        assert!(hands[..6].iter().all(|h| h.is_pair() && h.first.rank == Ace));
        assert_eq!(hands[6], StartingHand::new(Card::new(Ace, Clubs), Card::new(King, Clubs)));
        assert!(hands[ALL_COUNT - 6..].iter().all(|h| h.is_pair() && h.first.rank == Two));
        for w in hands.windows(2) {
            assert!(w[0].first.rank >= w[1].first.rank);
        }
    }

    #[test]
    fn significant_has_169_classes() {
        let hands = StartingHand::significant();
        assert_eq!(hands.len(), SIGNIFICANT_COUNT);
        let classes: HashSet<String> = hands.iter().map(StartingHand::class_name).collect();
        assert_eq!(classes.len(), SIGNIFICANT_COUNT);
        assert_eq!(hands.iter().filter(|h| h.is_pair()).count(), 13);
        assert_eq!(hands.iter().filter(|h| h.is_suited()).count(), 78);
    }

    #[test]
    fn index_lookup_is_order_free() {
        let table = StartingHands::new();
        for (i, h) in table.as_slice().iter().enumerate() {
            assert_eq!(table.index_of(h), Some(i));
            assert_eq!(table.index_of_cards(h.second, h.first), Some(i));
        }
        let same = Card::new(Nine, Hearts);
        assert_eq!(table.index_of_cards(same, same), None);
    }

    #[test]
    fn overlap_and_class_names() {
        let a = StartingHand::new(Card::new(Ace, Spades), Card::new(King, Spades));
        let b = StartingHand::new(Card::new(King, Spades), Card::new(Two, Clubs));
        let c = StartingHand::new(Card::new(Ten, Hearts), Card::new(Nine, Clubs));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.class_name(), "AKs");
        assert_eq!(c.class_name(), "T9o");
        assert_eq!(StartingHand::new(Card::new(Two, Clubs), Card::new(Two, Hearts)).class_name(), "22");
        assert_eq!(b.class_name(), "K2o");
    }
}
