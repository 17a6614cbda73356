//! Win/split/loss accumulators.
//!
//! Everything here is purely additive: merging partial results in any order
//! or grouping gives the same totals.

use std::fmt;

use crate::category::HandCategory;

/// Result of one showdown from one player's point of view.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Showdown {
    Win,
    Split,
    Loss,
}

impl Showdown {
    #[inline(always)]
    const fn idx(self) -> usize {
        match self {
            Showdown::Win => 0,
            Showdown::Split => 1,
            Showdown::Loss => 2,
        }
    }
}

/// Per-category win/split/loss counters, indexed by [`HandCategory::idx`].
type Breakdown = [[u64; 3]; HandCategory::COUNT];

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    win: u64,
    split: u64,
    loss: u64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    categories: Option<Box<Breakdown>>,
}

#[inline(always)]
fn ratio(a: u64, b: u64) -> f64 {
    if b == 0 {
        0.0
    } else {
        a as f64 / b as f64
    }
}

impl Outcome {
    /// Empty accumulator without the per-category breakdown.
    pub const fn new() -> Self {
        Self { win: 0, split: 0, loss: 0, categories: None }
    }

    /// Empty accumulator that also counts per hand category.
    pub fn with_categories() -> Self {
        Self {
            categories: Some(Box::new([[0; 3]; HandCategory::COUNT])),
            ..Self::new()
        }
    }

    /// Empty accumulator, with or without breakdown.
    pub fn tracking(categories: bool) -> Self {
        if categories {
            Self::with_categories()
        } else {
            Self::new()
        }
    }

    pub const fn from_counts(win: u64, split: u64, loss: u64) -> Self {
        Self { win, split, loss, categories: None }
    }

    #[inline(always)]
    pub fn record(&mut self, result: Showdown, category: HandCategory) {
        match result {
            Showdown::Win => self.win += 1,
            Showdown::Split => self.split += 1,
            Showdown::Loss => self.loss += 1,
        }
        if let Some(table) = self.categories.as_deref_mut() {
            table[category.idx()][result.idx()] += 1;
        }
    }

    pub fn add_win(&mut self, category: HandCategory) {
        self.record(Showdown::Win, category);
    }

    pub fn add_split(&mut self, category: HandCategory) {
        self.record(Showdown::Split, category);
    }

    pub fn add_loss(&mut self, category: HandCategory) {
        self.record(Showdown::Loss, category);
    }

    /// Add another outcome into this one. Returns `self` for chaining.
    pub fn merge(&mut self, other: &Outcome) -> &mut Self {
        self.win += other.win;
        self.split += other.split;
        self.loss += other.loss;
        if let Some(theirs) = other.categories.as_deref() {
            let mine = self
                .categories
                .get_or_insert_with(|| Box::new([[0; 3]; HandCategory::COUNT]));
            for (m, t) in mine.iter_mut().zip(theirs.iter()) {
                for k in 0..3 {
                    m[k] += t[k];
                }
            }
        }
        self
    }

    /// Sum of any number of outcomes.
    pub fn sum<'a>(outcomes: impl IntoIterator<Item = &'a Outcome>) -> Outcome {
        let mut total = Outcome::new();
        for o in outcomes {
            total.merge(o);
        }
        total
    }

    /// Merge equally long outcome vectors index-wise.
    pub fn merge_rows(into: &mut [Outcome], from: &[Outcome]) {
        for (a, b) in into.iter_mut().zip(from) {
            a.merge(b);
        }
    }

    pub const fn win(&self) -> u64 {
        self.win
    }

    pub const fn split(&self) -> u64 {
        self.split
    }

    pub const fn loss(&self) -> u64 {
        self.loss
    }

    /// Number of recorded showdowns.
    pub const fn total(&self) -> u64 {
        self.win + self.split + self.loss
    }

    pub fn tracks_categories(&self) -> bool {
        self.categories.is_some()
    }

    pub fn win_rate(&self) -> f64 {
        ratio(self.win, self.total())
    }

    pub fn split_rate(&self) -> f64 {
        ratio(self.split, self.total())
    }

    pub fn loss_rate(&self) -> f64 {
        ratio(self.loss, self.total())
    }

    /// Pot share: wins plus half of the splits, over all showdowns.
    pub fn equity(&self) -> f64 {
        let t = self.total();
        if t == 0 {
            return 0.0;
        }
        (self.win as f64 + 0.5 * self.split as f64) / t as f64
    }

    fn cell(&self, category: HandCategory, result: Showdown) -> u64 {
        self.categories
            .as_deref()
            .map_or(0, |t| t[category.idx()][result.idx()])
    }

    /// Showdowns in which the player held `category`.
    pub fn category_count(&self, category: HandCategory) -> u64 {
        self.cell(category, Showdown::Win) + self.cell(category, Showdown::Split) + self.cell(category, Showdown::Loss)
    }

    /// How often the player held `category`, over all showdowns.
    pub fn category_rate(&self, category: HandCategory) -> f64 {
        ratio(self.category_count(category), self.total())
    }

    /// Share of the wins that came with `category`.
    pub fn win_rate_for(&self, category: HandCategory) -> f64 {
        ratio(self.cell(category, Showdown::Win), self.win)
    }

    /// Share of the splits that came with `category`.
    pub fn split_rate_for(&self, category: HandCategory) -> f64 {
        ratio(self.cell(category, Showdown::Split), self.split)
    }

    /// Share of the losses that came with `category`.
    pub fn loss_rate_for(&self, category: HandCategory) -> f64 {
        ratio(self.cell(category, Showdown::Loss), self.loss)
    }

    /// Multi-line summary with the category frequencies.
    pub fn to_table(&self) -> String {
        let mut out = self.to_string();
        for category in HandCategory::ALL {
            out.push_str(&format!("\n{:.4} \t{}", self.category_rate(category), category));
        }
        out
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Win {:.6} \tSplit {:.6}", self.win_rate(), self.split_rate())
    }
}

/// Square matrix of outcomes, row `i` holding hand `i`'s results against
/// every column hand. Stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeMatrix {
    dimension: usize,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Outcome::new(); dimension * dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> &Outcome {
        &self.cells[i * self.dimension + j]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut Outcome {
        &mut self.cells[i * self.dimension + j]
    }

    pub fn row(&self, i: usize) -> &[Outcome] {
        &self.cells[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Record one head-to-head showdown between row hand `i` and column
    /// hand `j`, filling both `[i][j]` and the mirrored `[j][i]`.
    #[inline(always)]
    pub fn record_pair(&mut self, i: usize, j: usize, result: Showdown, category_i: HandCategory, category_j: HandCategory) {
        let mirrored = match result {
            Showdown::Win => Showdown::Loss,
            Showdown::Split => Showdown::Split,
            Showdown::Loss => Showdown::Win,
        };
        self.get_mut(i, j).record(result, category_i);
        self.get_mut(j, i).record(mirrored, category_j);
    }

    /// Add another matrix of the same dimension cell by cell.
    pub fn merge(&mut self, other: &OutcomeMatrix) -> &mut Self {
        debug_assert_eq!(self.dimension, other.dimension);
        for (a, b) in self.cells.iter_mut().zip(&other.cells) {
            a.merge(b);
        }
        self
    }

    /// Whether hand `i` wins more head-to-head showdowns against `j` than
    /// `j` wins against `i`.
    pub fn beats(&self, i: usize, j: usize) -> bool {
        self.get(i, j).win() > self.get(j, i).win()
    }
}
