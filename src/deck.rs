//! A 52-card deck that tracks which cards are still available.
//!
//! Availability lives in a [`CardSet`], so cloning a deck copies a `u64` and
//! the clone shares no mutable state with its source. Each deck carries its
//! own RNG; clones get a fresh one so parallel workers never replay the same
//! draws.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bitboard::CardSet;
use crate::card::{Card, Rank, Suit};
use crate::error::{EngineError, Result};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

const fn build_universe() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE];
    let mut id = 0;
    while id < DECK_SIZE {
        cards[id] = Card::from_id(id as u8);
        id += 1;
    }
    cards
}

/// Every card of a standard deck, indexed by card id.
pub const UNIVERSE: [Card; DECK_SIZE] = build_universe();

pub struct Deck {
    available: CardSet,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone keeps the availability but draws from a fresh entropy-seeded
/// RNG, so cloning a seeded deck is not reproducible. Use [`Deck::fork`]
/// for a reproducible copy.
impl Clone for Deck {
    fn clone(&self) -> Self {
        Self {
            available: self.available,
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.available.len())
            .field("available", &self.available)
            .finish()
    }
}

impl Deck {
    /// A full deck with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            available: CardSet::full(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// A full deck whose random draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            available: CardSet::full(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Independent copy with the same availability and a seeded RNG.
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            available: self.available,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The fixed 52-card universe.
    pub fn universe(&self) -> &'static [Card; DECK_SIZE] {
        &UNIVERSE
    }

    pub fn available(&self) -> CardSet {
        self.available
    }

    /// Cards removed from this deck so far.
    pub fn taken(&self) -> CardSet {
        CardSet::full().minus(self.available)
    }

    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    pub fn is_available(&self, card: Card) -> bool {
        self.available.contains(card)
    }

    /// Resolve a card (possibly obtained from another deck) to this deck's card.
    pub fn card_like(&self, card: Card) -> Card {
        UNIVERSE[card.id() as usize]
    }

    /// Take a specific card.
    pub fn take(&mut self, rank: Rank, suit: Suit) -> Result<Card> {
        self.take_card(Card::new(rank, suit))
    }

    pub fn take_card(&mut self, card: Card) -> Result<Card> {
        if self.available.remove_card(card) {
            Ok(self.card_like(card))
        } else {
            Err(EngineError::CardUnavailable(card))
        }
    }

    /// Take one uniformly random available card.
    pub fn take_random(&mut self) -> Result<Card> {
        let n = self.available.len();
        if n == 0 {
            return Err(EngineError::DeckExhausted);
        }
        let i = self.rng.random_range(0..n);
        let card = self.available.nth(i).ok_or(EngineError::DeckExhausted)?;
        self.available.remove_card(card);
        Ok(card)
    }

    /// Take `n` random cards. Fails as a whole if the deck runs dry; the
    /// cards drawn before the failure stay removed from the deck.
    pub fn take_n(&mut self, n: usize) -> Result<Vec<Card>> {
        (0..n).map(|_| self.take_random()).collect()
    }

    /// Take specific cards in order. Stops at the first unavailable card;
    /// cards taken before it stay taken.
    pub fn take_many(&mut self, cards: &[Card]) -> Result<()> {
        for &card in cards {
            self.take_card(card)?;
        }
        Ok(())
    }

    /// Make every card available again.
    pub fn reset(&mut self) {
        self.available = CardSet::full();
    }

    /// Make exactly the cards outside `taken` available.
    pub fn reset_to(&mut self, taken: CardSet) {
        self.available = CardSet::full().minus(taken);
    }
}
