//! Engine input: who holds what, which community cards are out, which cards
//! are dead.

use crate::bitboard::CardSet;
use crate::card::Card;
use crate::deck::DECK_SIZE;
use crate::error::{EngineError, Result, Role};

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Two pocket slots, `None` meaning "dealt at random".
pub type Pocket = [Option<Card>; 2];

/// A showdown to evaluate.
///
/// Unknown pocket cards and the missing community cards are completed at
/// random (Monte Carlo) or enumerated (exact mode). Building a situation
/// never fails; [`Situation::validate`] checks it before any work starts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Situation {
    players: Vec<Pocket>,
    board: Vec<Card>,
    dead: Vec<Card>,
}

impl Situation {
    pub fn new() -> Self {
        Self::default()
    }

    /// `players` players whose pockets are all unknown, on an empty board.
    pub fn random(players: usize) -> Self {
        Self {
            players: vec![[None, None]; players],
            ..Self::default()
        }
    }

    /// One known pocket against `opponents` random pockets.
    pub fn heads_up(pocket: [Card; 2], opponents: usize) -> Self {
        let mut s = Self::new().with_known_player(pocket[0], pocket[1]);
        s.players.extend(std::iter::repeat([None, None]).take(opponents));
        s
    }

    pub fn with_player(mut self, pocket: Pocket) -> Self {
        self.players.push(pocket);
        self
    }

    pub fn with_known_player(self, first: Card, second: Card) -> Self {
        self.with_player([Some(first), Some(second)])
    }

    pub fn with_random_player(self) -> Self {
        self.with_player([None, None])
    }

    /// Append known community cards.
    pub fn with_board(mut self, cards: &[Card]) -> Self {
        self.board.extend_from_slice(cards);
        self
    }

    /// Append cards that are out of play for everybody.
    pub fn with_dead(mut self, cards: &[Card]) -> Self {
        self.dead.extend_from_slice(cards);
        self
    }

    pub fn players(&self) -> &[Pocket] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn dead(&self) -> &[Card] {
        &self.dead
    }

    /// Community cards still to come.
    pub fn missing_board(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.board.len())
    }

    /// Pocket slots dealt at random.
    pub fn unknown_pockets(&self) -> usize {
        self.players.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// Cards drawn at random per showdown.
    pub fn random_cards(&self) -> usize {
        self.unknown_pockets() + self.missing_board()
    }

    pub fn is_fully_known(&self) -> bool {
        self.random_cards() == 0
    }

    /// Every declared card with the slot it was declared in: pockets in
    /// player order, then the board, then dead cards.
    pub fn known_cards(&self) -> Vec<(Card, Role)> {
        let pockets = self.players.iter().enumerate().flat_map(|(player, pocket)| {
            pocket
                .iter()
                .enumerate()
                .filter_map(move |(slot, c)| c.map(|c| (c, Role::Pocket { player, slot })))
        });
        let board = self.board.iter().enumerate().map(|(i, &c)| (c, Role::Board(i)));
        let dead = self.dead.iter().enumerate().map(|(i, &c)| (c, Role::Dead(i)));
        pockets.chain(board).chain(dead).collect()
    }

    /// Check the situation against a full deck and return the set of
    /// declared cards.
    pub fn validate(&self) -> Result<CardSet> {
        self.validate_against(CardSet::new())
    }

    /// Like [`Situation::validate`], with `unavailable` cards additionally
    /// out of play. Declared cards inside `unavailable` are not an error
    /// here; drawing them fails later, inside the workers.
    pub fn validate_against(&self, unavailable: CardSet) -> Result<CardSet> {
        if self.players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        if self.board.len() > BOARD_SIZE {
            return Err(EngineError::TooManyBoardCards(self.board.len()));
        }

        let mut known = CardSet::new();
        let mut roles: Vec<Option<Role>> = vec![None; DECK_SIZE];
        for (card, role) in self.known_cards() {
            let slot = &mut roles[card.id() as usize];
            match *slot {
                Some(first) => {
                    return Err(EngineError::DuplicateCardInSituation { card, first, second: role });
                }
                None => *slot = Some(role),
            }
            known.add_card(card);
        }

        let needed = self.random_cards();
        let available = known.union(unavailable).len();
        let available = DECK_SIZE - available;
        if needed > available {
            return Err(EngineError::InsufficientCards { needed, available });
        }
        Ok(known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn heads_up_shape() {
        let aa = cards("Ac Ad");
        let s = Situation::heads_up([aa[0], aa[1]], 3);
        assert_eq!(s.player_count(), 4);
        assert_eq!(s.unknown_pockets(), 6);
        assert_eq!(s.random_cards(), 11);
        assert_eq!(s.validate().unwrap().len(), 2);
    }

    #[test]
    fn duplicate_reports_both_roles() {
        let c = cards("As Kd 7h 8h 9h");
        let s = Situation::new()
            .with_known_player(c[0], c[1])
            .with_random_player()
            .with_board(&c[2..])
            .with_dead(&[c[3]]);
        match s.validate() {
            Err(EngineError::DuplicateCardInSituation { card, first, second }) => {
                assert_eq!(card, c[3]);
                assert_eq!(first, Role::Board(1));
                assert_eq!(second, Role::Dead(0));
            }
            other => panic!("unexpected {other:?}"),
        }

        let s = Situation::new().with_known_player(c[0], c[1]).with_player([Some(c[1]), None]);
        assert!(matches!(
            s.validate(),
            Err(EngineError::DuplicateCardInSituation {
                first: Role::Pocket { player: 0, slot: 1 },
                second: Role::Pocket { player: 1, slot: 0 },
                ..
            })
        ));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(Situation::new().validate(), Err(EngineError::NoPlayers));
        let six = cards("2c 3c 4c 5c 6c 7c");
        let s = Situation::random(2).with_board(&six);
        assert_eq!(s.validate(), Err(EngineError::TooManyBoardCards(6)));
        // 24 players need 48 pocket cards plus 5 board cards
        assert_eq!(
            Situation::random(24).validate(),
            Err(EngineError::InsufficientCards { needed: 53, available: 52 })
        );
        assert!(Situation::random(23).validate().is_ok());
    }

    #[test]
    fn unavailable_cards_shrink_the_deck() {
        let s = Situation::random(23);
        let gone = CardSet::from_cards(cards("2c 3c"));
        assert_eq!(
            s.validate_against(gone),
            Err(EngineError::InsufficientCards { needed: 51, available: 50 })
        );
    }
}
