use std::fmt;

use thiserror::Error;

use crate::card::Card;

/// Slot a known card was declared in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Pocket { player: usize, slot: usize },
    Board(usize),
    Dead(usize),
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pocket { player, slot } => write!(f, "pocket card {} of player {}", slot + 1, player + 1),
            Role::Board(slot) => write!(f, "community card {}", slot + 1),
            Role::Dead(i) => write!(f, "dead card {}", i + 1),
        }
    }
}

/// Errors raised by the card model and the equity engine.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum EngineError {
    #[error("a hand consists of exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("card was already taken from the deck: {0}")]
    CardUnavailable(Card),

    #[error("all cards have been taken already")]
    DeckExhausted,

    #[error("card {card} declared twice: as {first} and as {second}")]
    DuplicateCardInSituation { card: Card, first: Role, second: Role },

    #[error("situation needs {needed} random cards but only {available} remain")]
    InsufficientCards { needed: usize, available: usize },

    #[error("situation has no players")]
    NoPlayers,

    #[error("at most 5 community cards, got {0}")]
    TooManyBoardCards(usize),

    #[error("exact enumeration needs known pocket cards, player {} has an unknown card", .player + 1)]
    UnknownPocketCard { player: usize },

    #[error("invalid card: {0:?}")]
    InvalidCard(String),

    #[error("worker {worker} failed: {source}")]
    WorkerFailure {
        worker: usize,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Wrap an error raised inside worker `worker`. Already wrapped errors
    /// are kept as they are.
    pub fn in_worker(self, worker: usize) -> Self {
        match self {
            e @ EngineError::WorkerFailure { .. } => e,
            e => EngineError::WorkerFailure { worker, source: Box::new(e) },
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
