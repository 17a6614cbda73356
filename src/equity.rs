//! Equity calculation: Monte Carlo simulation and exact enumeration.
//!
//! Every run is split into a fixed number of worker tasks. Each task owns its
//! deck and its accumulators and returns them whole; the driver joins all
//! tasks and merges the partial results index-wise. With the `parallel`
//! feature the tasks run on a rayon pool scoped to the call, without it they
//! run one after another in worker order. Both give identical counts for a
//! seeded configuration.

use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

use crate::bitboard::CardSet;
use crate::card::Card;
use crate::combinations::{binomial, partition, Combinations};
use crate::config::EngineConfig;
use crate::deck::Deck;
use crate::error::{EngineError, Result};
use crate::evaluator::{best_of_seven, compare};
use crate::hand::Hand;
use crate::outcome::{Outcome, Showdown};
use crate::situation::{Situation, BOARD_SIZE};
use crate::starting::{StartingHand, StartingHands};

/// Run `job(w)` for every worker `w` in `0..workers` and collect the results
/// in worker order. The failure of the lowest failing worker is returned,
/// wrapped in [`EngineError::WorkerFailure`].
pub(crate) fn dispatch<T, F>(workers: usize, job: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync,
{
    run_workers(workers, &job)
        .into_iter()
        .enumerate()
        .map(|(w, r)| r.map_err(|e| e.in_worker(w)))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_workers<T, F>(workers: usize, job: &F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync,
{
    use rayon::prelude::*;

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| (0..workers).into_par_iter().map(job).collect()),
        Err(e) => {
            log::warn!("could not start {} worker threads ({}), running sequentially", workers, e);
            (0..workers).map(job).collect()
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn run_workers<T, F>(workers: usize, job: &F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync,
{
    (0..workers).map(job).collect()
}

/// Score one showdown: the strictly best hand wins, hands tied for best
/// split, everybody else loses.
#[inline(always)]
fn settle(hands: &[Hand], outcomes: &mut [Outcome]) {
    let mut best = 0;
    let mut tied = 1;
    for i in 1..hands.len() {
        match compare(&hands[i], &hands[best]) {
            Ordering::Greater => {
                best = i;
                tied = 1;
            }
            Ordering::Equal => tied += 1,
            Ordering::Less => {}
        }
    }
    for (hand, outcome) in hands.iter().zip(outcomes.iter_mut()) {
        let result = if compare(hand, &hands[best]) != Ordering::Equal {
            Showdown::Loss
        } else if tied == 1 {
            Showdown::Win
        } else {
            Showdown::Split
        };
        outcome.record(result, hand.category());
    }
}

fn merge_workers(parts: Vec<Vec<Outcome>>, players: usize, track: bool) -> Vec<Outcome> {
    let mut total = vec![Outcome::tracking(track); players];
    for part in &parts {
        Outcome::merge_rows(&mut total, part);
    }
    total
}

/// Computes showdown equities for [`Situation`]s.
#[derive(Clone, Debug, Default)]
pub struct EquityEngine {
    config: EngineConfig,
}

impl EquityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Workers actually used for `units` independent work units.
    pub(crate) fn workers_for(&self, units: u64) -> usize {
        let workers = self.config.workers.max(1);
        let capped = (units.max(1)).min(workers as u64) as usize;
        if capped < workers {
            log::warn!("only {} work units, using {} of {} workers", units, capped, workers);
        }
        capped
    }

    pub(crate) fn worker_deck(&self, base: &Deck, worker: usize) -> Deck {
        match self.config.worker_seed(worker) {
            Some(seed) => base.fork(seed),
            None => base.clone(),
        }
    }

    /// Simulate `iterations` random completions of `situation` on a full
    /// deck. Returns one outcome per player, in declaration order.
    pub fn run_monte_carlo(&self, situation: &Situation, iterations: u64) -> Result<Vec<Outcome>> {
        self.run_monte_carlo_on(&Deck::new(), situation, iterations)
    }

    /// Like [`EquityEngine::run_monte_carlo`], drawing from clones of
    /// `deck`. Cards already taken from `deck` are out of play; a declared
    /// card among them fails the run.
    pub fn run_monte_carlo_on(&self, deck: &Deck, situation: &Situation, iterations: u64) -> Result<Vec<Outcome>> {
        situation.validate_against(deck.taken())?;
        let known: Vec<Card> = situation.known_cards().into_iter().map(|(c, _)| c).collect();
        let workers = self.workers_for(iterations);
        let ranges = partition(iterations, workers);
        let track = self.config.track_categories;

        log::info!(
            "monte carlo: {} players, {} iterations on {} workers",
            situation.player_count(),
            iterations,
            workers
        );
        let started = Instant::now();

        let parts = dispatch(workers, |w| {
            let n = ranges[w].end - ranges[w].start;
            log::debug!("worker {} simulating {} showdowns", w, n);
            let mut own = self.worker_deck(deck, w);
            let base = own.taken();
            let outcomes = simulate(&mut own, base, situation, &known, n, track)?;
            log::debug!("worker {} done", w);
            Ok(outcomes)
        })?;

        let total = merge_workers(parts, situation.player_count(), track);
        log::info!("monte carlo finished in {:.2?}", started.elapsed());
        Ok(total)
    }

    /// Enumerate every completion of the community cards. All pocket
    /// cards must be known.
    pub fn run_exact(&self, situation: &Situation) -> Result<Vec<Outcome>> {
        if let Some(player) = situation.players().iter().position(|p| p.iter().any(Option::is_none)) {
            return Err(EngineError::UnknownPocketCard { player });
        }
        let known = situation.validate()?;
        let pockets: Vec<[Card; 2]> = situation
            .players()
            .iter()
            .filter_map(|p| Some([p[0]?, p[1]?]))
            .collect();
        let rest: Vec<Card> = CardSet::full().minus(known).iter().collect();
        let missing = situation.missing_board();
        let boards = binomial(rest.len(), missing);
        let workers = self.workers_for(boards);
        let ranges = partition(boards, workers);
        let track = self.config.track_categories;

        log::info!(
            "exact: {} players, {} boards on {} workers",
            situation.player_count(),
            boards,
            workers
        );
        let started = Instant::now();

        let parts = dispatch(workers, |w| {
            let range = ranges[w].clone();
            log::debug!("worker {} enumerating boards {:?}", w, range);
            let table = Enumeration { pockets: &pockets, board: situation.board(), rest: &rest, track };
            Ok(match missing {
                0 => table.run::<0>(range),
                1 => table.run::<1>(range),
                2 => table.run::<2>(range),
                3 => table.run::<3>(range),
                4 => table.run::<4>(range),
                _ => table.run::<5>(range),
            })
        })?;

        let total = merge_workers(parts, situation.player_count(), track);
        log::info!("exact finished in {:.2?}", started.elapsed());
        Ok(total)
    }

    /// Monte Carlo equity of every starting hand class against `opponents`
    /// random hands.
    pub fn significant_hands(&self, opponents: usize, iterations: u64) -> Result<Vec<(StartingHand, Outcome)>> {
        StartingHand::significant()
            .into_iter()
            .map(|hand| {
                let situation = Situation::heads_up(hand.cards(), opponents);
                let mut outcomes = self.run_monte_carlo(&situation, iterations)?;
                log::debug!("{} ({}): {}", hand.class_name(), hand, outcomes[0]);
                Ok((hand, outcomes.swap_remove(0)))
            })
            .collect()
    }

    /// Monte Carlo equity of every suit-specific starting hand in `hands`
    /// against `opponents` random hands, in the order of `hands`.
    pub fn all_hands(&self, hands: &StartingHands, opponents: usize, iterations: u64) -> Result<Vec<(StartingHand, Outcome)>> {
        hands
            .as_slice()
            .iter()
            .map(|&hand| {
                let situation = Situation::heads_up(hand.cards(), opponents);
                let mut outcomes = self.run_monte_carlo(&situation, iterations)?;
                Ok((hand, outcomes.swap_remove(0)))
            })
            .collect()
    }

    /// How often each category is the best hand of seven random cards.
    /// The counts live in the per-category breakdown of the result.
    pub fn category_frequencies(&self, iterations: u64) -> Result<Outcome> {
        let engine = EquityEngine::new(self.config.with_categories(true));
        let mut outcomes = engine.run_monte_carlo(&Situation::random(1), iterations)?;
        Ok(outcomes.swap_remove(0))
    }
}

/// Run `iterations` showdowns of `situation` on `deck`. The deck is first
/// reset to have exactly `base` taken, then the `known` cards are taken.
pub(crate) fn simulate(
    deck: &mut Deck,
    base: CardSet,
    situation: &Situation,
    known: &[Card],
    iterations: u64,
    track: bool,
) -> Result<Vec<Outcome>> {
    deck.reset_to(base);
    deck.take_many(known)?;
    let start = deck.taken();

    let players = situation.players();
    let known_board = situation.board();
    let mut outcomes = vec![Outcome::tracking(track); players.len()];
    let mut pockets = vec![[Card::from_id(0); 2]; players.len()];
    let mut board = [Card::from_id(0); BOARD_SIZE];
    let mut hands: Vec<Hand> = Vec::with_capacity(players.len());

    for _ in 0..iterations {
        deck.reset_to(start);
        for (pocket, declared) in pockets.iter_mut().zip(players) {
            for (card, slot) in pocket.iter_mut().zip(declared) {
                *card = match slot {
                    Some(c) => *c,
                    None => deck.take_random()?,
                };
            }
        }
        board[..known_board.len()].copy_from_slice(known_board);
        for card in &mut board[known_board.len()..] {
            *card = deck.take_random()?;
        }

        hands.clear();
        hands.extend(pockets.iter().map(|p| best_of_seven(&board, *p)));
        settle(&hands, &mut outcomes);
    }
    Ok(outcomes)
}

/// Shared input of the exact-mode workers.
struct Enumeration<'a> {
    pockets: &'a [[Card; 2]],
    board: &'a [Card],
    rest: &'a [Card],
    track: bool,
}

impl Enumeration<'_> {
    fn run<const K: usize>(&self, range: Range<u64>) -> Vec<Outcome> {
        let mut outcomes = vec![Outcome::tracking(self.track); self.pockets.len()];
        let mut board = [Card::from_id(0); BOARD_SIZE];
        board[..self.board.len()].copy_from_slice(self.board);
        let mut hands: Vec<Hand> = Vec::with_capacity(self.pockets.len());

        for idx in Combinations::<K>::range(self.rest.len(), range.start, range.end) {
            for (slot, i) in board[self.board.len()..].iter_mut().zip(idx) {
                *slot = self.rest[i];
            }
            hands.clear();
            hands.extend(self.pockets.iter().map(|p| best_of_seven(&board, *p)));
            settle(&hands, &mut outcomes);
        }
        outcomes
    }
}
