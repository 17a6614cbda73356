//! 52-bit card set: one bit per card id (suit * 13 + rank).
//!
//! Used for deck availability, dead-card masks and collision checks. Copying
//! a set is copying a `u64`, which is what makes deck clones independent.

use crate::card::{Card, Suit};

pub const MASK52: u64 = (1u64 << 52) - 1;
pub const MASK13: u16 = (1u16 << 13) - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct CardSet(u64);

impl CardSet {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    /// All 52 cards.
    #[inline(always)]
    pub const fn full() -> Self {
        Self(MASK52)
    }

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & MASK52)
    }

    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub fn from_cards<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut s = Self::new();
        for c in iter {
            let _ = s.add_card(c);
        }
        s
    }

    /// Returns true if card was already present.
    #[inline(always)]
    pub fn add_card(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let already = (self.0 & bit) != 0;
        self.0 |= bit;
        already
    }

    /// Returns true if the card was present.
    #[inline(always)]
    pub fn remove_card(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let present = (self.0 & bit) != 0;
        self.0 &= !bit;
        present
    }

    #[inline(always)]
    pub const fn contains(self, card: Card) -> bool {
        (self.0 >> card.id()) & 1 == 1
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn union(self, other: CardSet) -> CardSet {
        CardSet(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn minus(self, other: CardSet) -> CardSet {
        CardSet(self.0 & !other.0)
    }

    #[inline(always)]
    pub const fn intersects(self, other: CardSet) -> bool {
        self.0 & other.0 != 0
    }

    /// The `n`-th card (by ascending id) in the set.
    #[inline]
    pub fn nth(self, n: usize) -> Option<Card> {
        let mut bits = self.0;
        for _ in 0..n {
            if bits == 0 {
                return None;
            }
            bits &= bits - 1;
        }
        (bits != 0).then(|| Card::from_id(bits.trailing_zeros() as u8))
    }

    /// 13-bit rank mask of one suit.
    #[inline(always)]
    pub const fn suit_mask(self, suit: Suit) -> u16 {
        ((self.0 >> (suit as u64 * 13)) as u16) & MASK13
    }

    /// Relabel suits of every card in the set.
    pub fn permute(self, perm: &[Suit; 4]) -> CardSet {
        let mut out = 0u64;
        for suit in Suit::ALL {
            out |= (self.suit_mask(suit) as u64) << (suit.permute(perm) as u64 * 13);
        }
        CardSet(out)
    }

    pub fn iter(self) -> CardSetIter {
        CardSetIter(self.0)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

/// Ascending-id iterator over a [`CardSet`].
pub struct CardSetIter(u64);

impl Iterator for CardSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let id = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Card::from_id(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardSetIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank::*, Suit::*};

    #[test]
    fn add_contains_remove_idempotent() {
        let mut b = CardSet::new();
        let c = Card::new(Ace, Spades);

        assert_eq!(b.add_card(c), false);
        assert_eq!(b.add_card(c), true);
        assert!(b.contains(c));

        assert!(b.remove_card(c));
        assert!(!b.remove_card(c));
        assert_eq!(b.add_card(c), false);
    }

    #[test]
    fn full_set_has_every_card_once() {
        let all = CardSet::full();
        assert_eq!(all.len(), 52);
        assert_eq!(all.iter().count(), 52);
        assert_eq!(all.nth(0), Some(Card::from_id(0)));
        assert_eq!(all.nth(51), Some(Card::from_id(51)));
        assert_eq!(all.nth(52), None);
    }

    #[test]
    fn nth_skips_missing_cards() {
        let s = CardSet::from_cards([Card::new(Two, Clubs), Card::new(King, Hearts), Card::new(Ace, Spades)]);
        assert_eq!(s.nth(1), Some(Card::new(King, Hearts)));
        assert_eq!(s.nth(2), Some(Card::new(Ace, Spades)));
        assert_eq!(s.nth(3), None);
    }

    #[test]
    fn suit_masks_and_permutation() {
        let s = CardSet::from_cards([Card::new(Two, Clubs), Card::new(Four, Clubs), Card::new(Ace, Hearts)]);
        assert_eq!(s.suit_mask(Clubs), 0b101);
        assert_eq!(s.suit_mask(Hearts), 1 << 12);

        let perm = [Hearts, Diamonds, Clubs, Spades];
        let p = s.permute(&perm);
        assert_eq!(p, CardSet::from_cards([Card::new(Two, Hearts), Card::new(Four, Hearts), Card::new(Ace, Clubs)]));
    }
}
