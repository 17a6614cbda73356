//! Five-card classification, showdown comparison and best-of-N selection.
//!
//! The classifier sorts the five cards by descending rank and then tests
//! the categories from best to worst; the first predicate that matches wins.
//! Some predicates (two pair, royal flush) rely on that precedence.

use std::cmp::Ordering;

use crate::card::{Card, Rank};
use crate::category::HandCategory;
use crate::combinations::for_each_five;
use crate::error::{EngineError, Result};
use crate::hand::{Hand, HAND_SIZE};

/// Fewest and most cards [`best_hand`] accepts.
pub const MIN_CARDS: usize = HAND_SIZE;
pub const MAX_CARDS: usize = 7;

#[inline(always)]
fn same_rank(c: &[Card]) -> bool {
    c.iter().all(|x| x.rank == c[0].rank)
}

#[inline(always)]
fn is_flush(c: &[Card; 5]) -> bool {
    c.iter().all(|x| x.suit == c[0].suit)
}

/// A-5-4-3-2 in sorted order.
#[inline(always)]
fn is_wheel(c: &[Card; 5]) -> bool {
    c[0].rank == Rank::Ace
        && c[1].rank == Rank::Five
        && c[2].rank == Rank::Four
        && c[3].rank == Rank::Three
        && c[4].rank == Rank::Two
}

#[inline(always)]
fn is_straight(c: &[Card; 5]) -> bool {
    let descending = c.windows(2).all(|w| w[0].rank.idx() == w[1].rank.idx() + 1);
    descending || is_wheel(c)
}

#[inline(always)]
fn is_four_of_a_kind(c: &[Card; 5]) -> bool {
    same_rank(&c[0..4]) || same_rank(&c[1..5])
}

#[inline(always)]
fn is_full_house(c: &[Card; 5]) -> bool {
    (same_rank(&c[0..2]) && same_rank(&c[2..5])) || (same_rank(&c[0..3]) && same_rank(&c[3..5]))
}

#[inline(always)]
fn is_three_of_a_kind(c: &[Card; 5]) -> bool {
    same_rank(&c[0..3]) || same_rank(&c[1..4]) || same_rank(&c[2..5])
}

#[inline(always)]
fn is_two_pair(c: &[Card; 5]) -> bool {
    !is_three_of_a_kind(c)
        && ((same_rank(&c[0..2]) && (same_rank(&c[2..4]) || same_rank(&c[3..5])))
            || (same_rank(&c[1..3]) && same_rank(&c[3..5])))
}

#[inline(always)]
fn is_pair(c: &[Card; 5]) -> bool {
    c.windows(2).any(|w| w[0].rank == w[1].rank)
}

fn category_of(c: &[Card; 5]) -> HandCategory {
    let flush = is_flush(c);
    let straight = is_straight(c);
    if flush && straight && c[0].rank == Rank::Ace && c[1].rank == Rank::King {
        HandCategory::RoyalFlush
    } else if flush && straight {
        HandCategory::StraightFlush
    } else if is_four_of_a_kind(c) {
        HandCategory::FourOfAKind
    } else if is_full_house(c) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if is_three_of_a_kind(c) {
        HandCategory::ThreeOfAKind
    } else if is_two_pair(c) {
        HandCategory::TwoPair
    } else if is_pair(c) {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

/// Classify five cards into a [`Hand`]. Infallible since the size is fixed.
pub fn classify_five(mut cards: [Card; 5]) -> Hand {
    cards.sort_unstable_by(|a, b| b.cmp_rank(a));
    let category = category_of(&cards);
    let wheel = matches!(category, HandCategory::Straight | HandCategory::StraightFlush) && is_wheel(&cards);
    if wheel {
        cards.rotate_left(1);
    }
    Hand::from_parts(cards, category)
}

/// Category of exactly five cards, in any order.
pub fn classify(cards: &[Card]) -> Result<HandCategory> {
    Hand::new(cards).map(|h| h.category())
}

/// Walk both sorted hands from the top, first rank mismatch decides.
#[inline(always)]
fn compare_positional(a: &[Card; 5], b: &[Card; 5]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.cmp_rank(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Ranks of the upper pair, the lower pair and the kicker of a two pair hand.
#[inline(always)]
fn two_pair_ranks(c: &[Card; 5]) -> (Rank, Rank, Rank) {
    if c[0].rank != c[1].rank {
        (c[1].rank, c[3].rank, c[0].rank)
    } else if c[2].rank != c[3].rank {
        (c[0].rank, c[3].rank, c[2].rank)
    } else {
        (c[0].rank, c[2].rank, c[4].rank)
    }
}

/// Rank of the single pair in a pair hand.
#[inline(always)]
pub(crate) fn pair_rank(c: &[Card; 5]) -> Rank {
    c.windows(2)
        .find(|w| w[0].rank == w[1].rank)
        .map(|w| w[0].rank)
        .unwrap_or(c[0].rank)
}

/// Quad rank and kicker. Sorted position 1 is always part of the quad.
#[inline(always)]
pub(crate) fn quad_ranks(c: &[Card; 5]) -> (Rank, Rank) {
    let quad = c[1].rank;
    let kicker = if c[0].rank == quad { c[4].rank } else { c[0].rank };
    (quad, kicker)
}

/// Total order over hands: `Greater` means `a` wins the showdown.
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    let by_category = a.category().cmp(&b.category());
    if by_category.is_ne() {
        return by_category;
    }
    let (x, y) = (a.cards(), b.cards());
    match a.category() {
        HandCategory::RoyalFlush => Ordering::Equal,
        HandCategory::FourOfAKind => {
            let (qx, kx) = quad_ranks(x);
            let (qy, ky) = quad_ranks(y);
            qx.cmp(&qy).then(kx.cmp(&ky))
        }
        HandCategory::FullHouse | HandCategory::ThreeOfAKind => {
            x[2].cmp_rank(&y[2]).then_with(|| compare_positional(x, y))
        }
        HandCategory::TwoPair => {
            let (hx, lx, kx) = two_pair_ranks(x);
            let (hy, ly, ky) = two_pair_ranks(y);
            hx.cmp(&hy).then(lx.cmp(&ly)).then(kx.cmp(&ky))
        }
        HandCategory::Pair => pair_rank(x)
            .cmp(&pair_rank(y))
            .then_with(|| compare_positional(x, y)),
        HandCategory::StraightFlush
        | HandCategory::Flush
        | HandCategory::Straight
        | HandCategory::HighCard => compare_positional(x, y),
    }
}

/// Best hand over every five-card subset of 5 to 7 cards. Among equally
/// strong subsets the first one enumerated is returned.
pub fn best_hand(cards: &[Card]) -> Result<Hand> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        return Err(EngineError::InvalidHandSize(cards.len()));
    }
    let mut best: Option<Hand> = None;
    for_each_five(cards.len(), |idx| {
        let hand = classify_five(idx.map(|i| cards[i]));
        match best {
            Some(b) if compare(&hand, &b).is_le() => {}
            _ => best = Some(hand),
        }
    });
    best.ok_or(EngineError::InvalidHandSize(cards.len()))
}

/// Best hand formed by a full board plus two pocket cards.
#[inline]
pub fn best_of_seven(board: &[Card; 5], pocket: [Card; 2]) -> Hand {
    let seven = [board[0], board[1], board[2], board[3], board[4], pocket[0], pocket[1]];
    let mut best = classify_five([seven[0], seven[1], seven[2], seven[3], seven[4]]);
    for_each_five(7, |idx| {
        let hand = classify_five(idx.map(|i| seven[i]));
        if compare(&hand, &best).is_gt() {
            best = hand;
        }
    });
    best
}
