//! Packed u32 hand strength.
//!
//! Layout:
//! bits 20..23 : category strength (0 = high card .. 9 = royal flush)
//! bits 16..19 : r0
//! bits 12..15 : r1
//! bits  8..11 : r2
//! bits  4..7  : r3
//! bits  0..3  : r4
//!
//! Each r* is a 4-bit rank index (0..12) holding the category's tie-break
//! ranks in significance order. Unused slots are 0. Comparing two scores as
//! integers gives the same answer as [`crate::evaluator::compare`], which is
//! what the exhaustive mode relies on to rank 1,326 hands per board cheaply.

use crate::category::HandCategory;
use crate::evaluator::{pair_rank, quad_ranks};
use crate::hand::Hand;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub u32);

#[inline(always)]
fn pack(cat: HandCategory, r: [u8; 5]) -> Score {
    Score(
        ((cat.strength() as u32) << 20)
            | ((r[0] as u32) << 16)
            | ((r[1] as u32) << 12)
            | ((r[2] as u32) << 8)
            | ((r[3] as u32) << 4)
            | ((r[4] as u32) & 0xF),
    )
}

/// The first `N` ranks that differ from `skip`, in order.
#[inline(always)]
fn kickers<const N: usize>(ranks: [u8; 5], skip: u8) -> [u8; N] {
    let mut out = [0u8; N];
    let mut n = 0;
    for r in ranks {
        if r != skip && n < N {
            out[n] = r;
            n += 1;
        }
    }
    out
}

impl Score {
    pub fn of(hand: &Hand) -> Score {
        let c = hand.cards();
        let ranks = c.map(|x| x.rank.idx());
        let cat = hand.category();
        match cat {
            HandCategory::RoyalFlush => pack(cat, [0; 5]),
            HandCategory::FourOfAKind => {
                let (q, k) = quad_ranks(c);
                pack(cat, [q.idx(), k.idx(), 0, 0, 0])
            }
            HandCategory::FullHouse => {
                let t = ranks[2];
                let p = if ranks[0] == t { ranks[4] } else { ranks[0] };
                pack(cat, [t, p, 0, 0, 0])
            }
            HandCategory::ThreeOfAKind => {
                let t = ranks[2];
                let k: [u8; 2] = kickers(ranks, t);
                pack(cat, [t, k[0], k[1], 0, 0])
            }
            HandCategory::TwoPair => {
                let (hi, lo, k) = if ranks[0] != ranks[1] {
                    (ranks[1], ranks[3], ranks[0])
                } else if ranks[2] != ranks[3] {
                    (ranks[0], ranks[3], ranks[2])
                } else {
                    (ranks[0], ranks[2], ranks[4])
                };
                pack(cat, [hi, lo, k, 0, 0])
            }
            HandCategory::Pair => {
                let p = pair_rank(c).idx();
                let k: [u8; 3] = kickers(ranks, p);
                pack(cat, [p, k[0], k[1], k[2], 0])
            }
            HandCategory::StraightFlush
            | HandCategory::Flush
            | HandCategory::Straight
            | HandCategory::HighCard => pack(cat, ranks),
        }
    }

    pub fn category(self) -> HandCategory {
        let strength = ((self.0 >> 20) & 0xF) as usize;
        HandCategory::ALL[(HandCategory::COUNT - 1).saturating_sub(strength)]
    }
}

impl From<&Hand> for Score {
    fn from(hand: &Hand) -> Self {
        Score::of(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{parse_cards, Card};
    use crate::evaluator::{best_of_seven, classify_five, compare};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn hand(s: &str) -> Hand {
        Hand::new(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn category_roundtrips_through_score() {
        for s in ["As Ks Qs Js Ts", "5c 4c 3c 2c Ac", "2s 2h 2d 7c 9h", "Js Qh 4d 2c 9c"] {
            let h = hand(s);
            assert_eq!(Score::of(&h).category(), h.category());
        }
    }

    #[test]
    fn score_order_agrees_with_comparator() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut ids: Vec<u8> = (0..52).collect();
        let draw = |rng: &mut StdRng, ids: &mut Vec<u8>| {
            ids.shuffle(rng);
            let c: Vec<Card> = ids[..7].iter().map(|&i| Card::from_id(i)).collect();
            best_of_seven(&[c[0], c[1], c[2], c[3], c[4]], [c[5], c[6]])
        };
        for _ in 0..5_000 {
            let a = draw(&mut rng, &mut ids);
            let b = draw(&mut rng, &mut ids);
            assert_eq!(Score::of(&a).cmp(&Score::of(&b)), compare(&a, &b), "{a} vs {b}");
        }
    }

    #[test]
    fn score_order_agrees_on_same_category_five_card_hands() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut ids: Vec<u8> = (0..52).collect();
        let mut checked = 0;
        while checked < 3_000 {
            ids.shuffle(&mut rng);
            let a = classify_five([0, 1, 2, 3, 4].map(|i| Card::from_id(ids[i])));
            ids.shuffle(&mut rng);
            let b = classify_five([0, 1, 2, 3, 4].map(|i| Card::from_id(ids[i])));
            if a.category() != b.category() {
                continue;
            }
            assert_eq!(Score::of(&a).cmp(&Score::of(&b)), compare(&a, &b), "{a} vs {b}");
            checked += 1;
        }
    }
}
