//! The full starting hand matrix: every starting hand against every other.
//!
//! The exhaustive sweep visits every five-card board in the lexicographic
//! order of their card ids. Only canonical boards (see
//! [`crate::isomorphism`]) are evaluated; the results on each of their suit
//! images are copied through the matching hand permutation. A board range
//! therefore selects the orbits whose canonical member lies in the range.
//!
//! The sampled matrix runs one heads-up Monte Carlo per suit-equivalence
//! class of hand pairs and copies it to every equivalent pair.

use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

use crate::bitboard::CardSet;
use crate::card::Card;
use crate::combinations::{binomial, partition, partition_weighted, Combinations};
use crate::deck::Deck;
use crate::equity::{dispatch, simulate, EquityEngine};
use crate::error::Result;
use crate::evaluator::best_of_seven;
use crate::isomorphism::{is_canonical, orbit, HandPermutations, PERMUTATION_COUNT};
use crate::outcome::{Outcome, OutcomeMatrix, Showdown};
use crate::score::Score;
use crate::situation::{Situation, BOARD_SIZE};
use crate::starting::StartingHands;

/// Number of five-card boards.
pub const BOARD_COUNT: u64 = binomial(52, BOARD_SIZE);

/// A canonical board and the number of distinct boards in its orbit.
#[derive(Copy, Clone, Debug)]
struct Canonical {
    board: [Card; BOARD_SIZE],
    images: u64,
}

/// Canonical boards whose lexicographic rank lies in `boards`, in order.
fn canonical_boards(boards: Range<u64>) -> Vec<Canonical> {
    Combinations::<BOARD_SIZE>::range(52, boards.start, boards.end)
        .filter_map(|idx| {
            let board = idx.map(|i| Card::from_id(i as u8));
            let mask = CardSet::from_cards(board);
            is_canonical(mask).then(|| Canonical { board, images: orbit(mask).len() as u64 })
        })
        .collect()
}

/// Contiguous slices of `boards` with about the same number of image
/// boards each, one per worker.
fn balance(boards: &[Canonical], workers: usize) -> Vec<Range<usize>> {
    let weights: Vec<u64> = boards.iter().map(|b| b.images).collect();
    partition_weighted(&weights, workers)
}

impl EquityEngine {
    /// Head-to-head outcomes of all starting hands over all boards.
    /// `matrix.get(i, j)` is hand `i`'s record against hand `j`, indices
    /// following `hands`.
    pub fn run_exhaustive_all(&self, hands: &StartingHands) -> Result<OutcomeMatrix> {
        self.run_exhaustive_boards(hands, 0..BOARD_COUNT)
    }

    /// Like [`EquityEngine::run_exhaustive_all`], restricted to the orbits
    /// whose canonical board has its lexicographic rank in `boards`.
    pub fn run_exhaustive_boards(&self, hands: &StartingHands, boards: Range<u64>) -> Result<OutcomeMatrix> {
        let boards = boards.start.min(BOARD_COUNT)..boards.end.min(BOARD_COUNT);
        let canonical = canonical_boards(boards.clone());
        let workers = self.workers_for(canonical.len() as u64);
        let slices = balance(&canonical, workers);
        let permutations = HandPermutations::new(hands);
        let progress_every = self.config().progress_every.max(1);

        log::info!(
            "exhaustive: boards {:?}, {} canonical, on {} workers",
            boards,
            canonical.len(),
            workers
        );
        let started = Instant::now();

        let parts = dispatch(workers, |w| {
            let slice = &canonical[slices[w].clone()];
            log::debug!(
                "worker {} starting on {} canonical boards ({} images)",
                w,
                slice.len(),
                slice.iter().map(|b| b.images).sum::<u64>()
            );
            let matrix = Sweep { hands, permutations: &permutations }.run(w, slice, progress_every);
            log::debug!("worker {} done", w);
            Ok(matrix)
        })?;

        let mut parts = parts.into_iter();
        let mut total = parts.next().unwrap_or_else(|| OutcomeMatrix::new(hands.len()));
        for part in parts {
            total.merge(&part);
        }
        log::info!("exhaustive finished in {:.2?}", started.elapsed());
        Ok(total)
    }

    /// Heads-up Monte Carlo outcomes of all starting hands against each
    /// other, `iterations` showdowns per pair on a random board.
    ///
    /// One pair per suit-equivalence class is simulated; every equivalent
    /// pair gets a copy of its result. Pairs sharing a card stay empty.
    pub fn run_monte_carlo_matrix(&self, hands: &StartingHands, iterations: u64) -> Result<OutcomeMatrix> {
        let n = hands.len();
        let permutations = HandPermutations::new(hands);
        let pairs = representative_pairs(hands, &permutations);
        let workers = self.workers_for(pairs.len() as u64);
        let slices = partition(pairs.len() as u64, workers);
        let track = self.config().track_categories;

        log::info!(
            "monte carlo matrix: {} representative pairs, {} iterations each, on {} workers",
            pairs.len(),
            iterations,
            workers
        );
        let started = Instant::now();

        let parts = dispatch(workers, |w| {
            let slice = &pairs[slices[w].start as usize..slices[w].end as usize];
            log::debug!("worker {} simulating {} pairs", w, slice.len());
            let mut deck = self.worker_deck(&Deck::new(), w);
            let base = deck.taken();
            slice
                .iter()
                .map(|&(i, j)| {
                    let (a, b) = (hands.as_slice()[i], hands.as_slice()[j]);
                    let situation = Situation::new()
                        .with_known_player(a.first, a.second)
                        .with_known_player(b.first, b.second);
                    let known = [a.first, a.second, b.first, b.second];
                    simulate(&mut deck, base, &situation, &known, iterations, track)
                })
                .collect::<Result<Vec<Vec<Outcome>>>>()
        })?;

        let mut matrix = OutcomeMatrix::new(n);
        let mut filled = vec![false; n * n];
        let results = parts.into_iter().flatten();
        for (&(i, j), outcomes) in pairs.iter().zip(results) {
            for perm in 0..PERMUTATION_COUNT {
                let table = permutations.table(perm);
                let (pi, pj) = (table[i] as usize, table[j] as usize);
                if filled[pi * n + pj] {
                    continue;
                }
                *matrix.get_mut(pi, pj) = outcomes[0].clone();
                *matrix.get_mut(pj, pi) = outcomes[1].clone();
                filled[pi * n + pj] = true;
                filled[pj * n + pi] = true;
            }
        }
        log::info!("monte carlo matrix finished in {:.2?}", started.elapsed());
        Ok(matrix)
    }
}

/// First pair `(i, j)`, `i < j`, of every suit-equivalence class of
/// disjoint hand pairs, in row-major order.
fn representative_pairs(hands: &StartingHands, permutations: &HandPermutations) -> Vec<(usize, usize)> {
    let n = hands.len();
    let masks: Vec<CardSet> = hands.as_slice().iter().map(|h| h.mask()).collect();
    let mut seen = vec![false; n * n];
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if seen[i * n + j] || masks[i].intersects(masks[j]) {
                continue;
            }
            pairs.push((i, j));
            for perm in 0..PERMUTATION_COUNT {
                let table = permutations.table(perm);
                let (pi, pj) = (table[i] as usize, table[j] as usize);
                seen[pi * n + pj] = true;
                seen[pj * n + pi] = true;
            }
        }
    }
    pairs
}

struct Sweep<'a> {
    hands: &'a StartingHands,
    permutations: &'a HandPermutations,
}

impl Sweep<'_> {
    fn run(&self, worker: usize, boards: &[Canonical], progress_every: u64) -> OutcomeMatrix {
        let hands = self.hands.as_slice();
        let masks: Vec<CardSet> = hands.iter().map(|h| h.mask()).collect();
        let mut matrix = OutcomeMatrix::new(hands.len());
        let mut scores = vec![Score::default(); hands.len()];
        let mut live: Vec<usize> = Vec::with_capacity(hands.len());
        let len = boards.len() as u64;

        for (k, canonical) in boards.iter().enumerate() {
            let k = k as u64 + 1;
            if k % progress_every == 0 {
                log::debug!("worker {}: {:.1}% of its boards", worker, 100.0 * k as f64 / len as f64);
            }

            let board = canonical.board;
            let mask = CardSet::from_cards(board);

            live.clear();
            for (i, hand) in hands.iter().enumerate() {
                if !masks[i].intersects(mask) {
                    scores[i] = Score::of(&best_of_seven(&board, hand.cards()));
                    live.push(i);
                }
            }

            for (perm, _) in orbit(mask) {
                let table = self.permutations.table(perm);
                for (a, &i) in live.iter().enumerate() {
                    for &j in &live[a + 1..] {
                        if masks[i].intersects(masks[j]) {
                            continue;
                        }
                        let result = match scores[i].cmp(&scores[j]) {
                            Ordering::Greater => Showdown::Win,
                            Ordering::Equal => Showdown::Split,
                            Ordering::Less => Showdown::Loss,
                        };
                        matrix.record_pair(
                            table[i] as usize,
                            table[j] as usize,
                            result,
                            scores[i].category(),
                            scores[j].category(),
                        );
                    }
                }
            }
        }
        matrix
    }
}
