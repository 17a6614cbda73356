//! Texas Hold'em hand classification and equity computation.

pub mod card;
pub mod bitboard;
pub mod deck;
pub mod category;
pub mod hand;
pub mod evaluator;
pub mod score;
pub mod combinations;
pub mod outcome;
pub mod starting;
pub mod isomorphism;
pub mod situation;
pub mod config;
pub mod error;
pub mod equity;
pub mod exhaustive;

pub use card::{parse_cards, Card, Rank, Suit};
pub use bitboard::CardSet;
pub use deck::Deck;
pub use category::HandCategory;
pub use hand::Hand;
pub use evaluator::{best_hand, best_of_seven, classify, classify_five, compare};
pub use score::Score;
pub use outcome::{Outcome, OutcomeMatrix, Showdown};
pub use starting::{StartingHand, StartingHands};
pub use situation::{Pocket, Situation};
pub use config::EngineConfig;
pub use error::{EngineError, Result, Role};
pub use equity::EquityEngine;
pub use exhaustive::BOARD_COUNT;
