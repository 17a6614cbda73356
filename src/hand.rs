//! A showdown hand: five cards plus the category they form.

use std::fmt;

use crate::card::Card;
use crate::category::HandCategory;
use crate::error::{EngineError, Result};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Five cards sorted by descending rank, tagged with their category.
///
/// For a wheel (A-5-4-3-2 straight or straight flush) the Ace sits in the
/// last slot since it plays low.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: HandCategory,
}

impl Hand {
    pub(crate) const fn from_parts(cards: [Card; HAND_SIZE], category: HandCategory) -> Self {
        Self { cards, category }
    }

    /// Classify exactly five cards. Any other count is rejected.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| EngineError::InvalidHandSize(cards.len()))?;
        Ok(crate::evaluator::classify_five(cards))
    }

    /// The cards by descending rank, except that a wheel lists its Ace last.
    #[inline(always)]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    #[inline(always)]
    pub const fn category(&self) -> HandCategory {
        self.category
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        write!(f, "{}", self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    #[test]
    fn rejects_wrong_sizes() {
        let six = parse_cards("As Ks Qs Js Ts 9s").unwrap();
        assert_eq!(Hand::new(&six), Err(EngineError::InvalidHandSize(6)));
        assert_eq!(Hand::new(&six[..4]), Err(EngineError::InvalidHandSize(4)));
        assert_eq!(Hand::new(&[]), Err(EngineError::InvalidHandSize(0)));
    }

    #[test]
    fn display_lists_cards_then_category() {
        let hand = Hand::new(&parse_cards("Ts Js Qs Ks As").unwrap()).unwrap();
        assert_eq!(
            hand.to_string(),
            "A\u{2660} K\u{2660} Q\u{2660} J\u{2660} T\u{2660} Royal Flush"
        );
    }
}
