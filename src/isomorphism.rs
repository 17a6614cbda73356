//! Suit relabeling symmetry.
//!
//! Permuting the four suits uniformly across pockets and board never changes
//! a showdown. A board's orbit is the set of distinct boards reachable by a
//! permutation; its canonical member is the one with the smallest card mask.

use crate::bitboard::CardSet;
use crate::card::Suit;
use crate::starting::StartingHands;

pub const PERMUTATION_COUNT: usize = 24;

const fn build_permutations() -> [[Suit; 4]; PERMUTATION_COUNT] {
    let mut out = [[Suit::Clubs; 4]; PERMUTATION_COUNT];
    let mut n = 0;
    let mut code = 0u16;
    // every 4-digit base-4 number whose digits are distinct
    while code < 256 {
        let c = code as u8;
        let d = [c >> 6 & 3, c >> 4 & 3, c >> 2 & 3, c & 3];
        if d[0] != d[1] && d[0] != d[2] && d[0] != d[3] && d[1] != d[2] && d[1] != d[3] && d[2] != d[3] {
            out[n] = [Suit::from_u8(d[0]), Suit::from_u8(d[1]), Suit::from_u8(d[2]), Suit::from_u8(d[3])];
            n += 1;
        }
        code += 1;
    }
    out
}

/// All 24 suit permutations; `perm[s]` is the image of suit `s`.
/// Index 0 is the identity.
pub const SUIT_PERMUTATIONS: [[Suit; 4]; PERMUTATION_COUNT] = build_permutations();

/// Whether `board` is the smallest member of its orbit.
pub fn is_canonical(board: CardSet) -> bool {
    SUIT_PERMUTATIONS.iter().all(|p| board.permute(p) >= board)
}

/// Distinct images of `board`, each paired with the index of one
/// permutation producing it. The board itself comes first.
pub fn orbit(board: CardSet) -> Vec<(usize, CardSet)> {
    let mut images: Vec<(usize, CardSet)> = Vec::with_capacity(PERMUTATION_COUNT);
    for (i, p) in SUIT_PERMUTATIONS.iter().enumerate() {
        let image = board.permute(p);
        if images.iter().all(|(_, seen)| *seen != image) {
            images.push((i, image));
        }
    }
    images
}

/// For every suit permutation, where each starting hand index lands.
#[derive(Clone, Debug)]
pub struct HandPermutations {
    tables: Vec<Vec<u16>>,
}

impl HandPermutations {
    pub fn new(hands: &StartingHands) -> Self {
        let tables = SUIT_PERMUTATIONS
            .iter()
            .map(|p| {
                hands
                    .as_slice()
                    .iter()
                    .map(|h| {
                        let image = h.permute(p);
                        hands.index_of(&image).unwrap_or_default() as u16
                    })
                    .collect()
            })
            .collect();
        Self { tables }
    }

    /// Index table of permutation `perm`.
    #[inline(always)]
    pub fn table(&self, perm: usize) -> &[u16] {
        &self.tables[perm]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{parse_cards, Card};
    use crate::combinations::Combinations;
    use std::collections::HashSet;

    #[test]
    fn permutations_are_distinct_bijections() {
        let set: HashSet<[u8; 4]> = SUIT_PERMUTATIONS.iter().map(|p| p.map(|s| s as u8)).collect();
        assert_eq!(set.len(), PERMUTATION_COUNT);
        assert_eq!(SUIT_PERMUTATIONS[0], Suit::ALL);
    }

    #[test]
    fn orbit_sizes_sum_to_all_boards() {
        // three-card boards keep the test fast; the argument is the same for five
        let mut total = 0usize;
        for idx in Combinations::<3>::new(52) {
            let board = CardSet::from_cards(idx.map(|i| Card::from_id(i as u8)));
            if is_canonical(board) {
                let images = orbit(board);
                assert_eq!(images[0].1, board);
                assert!(images.iter().all(|(_, b)| *b >= board));
                total += images.len();
            }
        }
        assert_eq!(total, 22_100);
    }

    #[test]
    fn monotone_board_has_four_images() {
        let board = CardSet::from_cards(parse_cards("2h 7h 9h Jh Kh").unwrap());
        assert_eq!(orbit(board).len(), 4);
        let rainbow = CardSet::from_cards(parse_cards("2c 2d 2h 2s 5c").unwrap());
        assert_eq!(orbit(rainbow).len(), 4);
    }

    #[test]
    fn hand_tables_are_permutations() {
        let hands = StartingHands::new();
        let perms = HandPermutations::new(&hands);
        for p in 0..PERMUTATION_COUNT {
            let image: HashSet<u16> = perms.table(p).iter().copied().collect();
            assert_eq!(image.len(), hands.len());
        }
        assert!(perms.table(0).iter().enumerate().all(|(i, &j)| i == j as usize));
    }
}
