//! k-subset enumeration in lexicographic order.
//!
//! Boards are enumerated as strictly increasing index tuples over a list of
//! remaining cards. `unrank` jumps straight to the n-th tuple, which is what
//! lets the exhaustive modes hand contiguous ranges to independent workers.

/// Binomial coefficient `n` over `k` (0 when `k > n`).
pub const fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut b: u64 = 1;
    let mut i = 1;
    while i <= k {
        b = b * (n - k + i) as u64 / i as u64;
        i += 1;
    }
    b
}

/// Call `f` for every 5-subset of `0..n`, as increasing index arrays.
/// Specialized nested loops; `n < 5` yields nothing.
#[inline]
pub fn for_each_five(n: usize, mut f: impl FnMut([usize; 5])) {
    for a in 0..n.saturating_sub(4) {
        for b in (a + 1)..n.saturating_sub(3) {
            for c in (b + 1)..n.saturating_sub(2) {
                for d in (c + 1)..n.saturating_sub(1) {
                    for e in (d + 1)..n {
                        f([a, b, c, d, e]);
                    }
                }
            }
        }
    }
}

/// The `rank`-th (0-based, lexicographic) `K`-subset of `0..n`.
/// Returns `None` when `rank >= binomial(n, K)`.
pub fn unrank<const K: usize>(n: usize, mut rank: u64) -> Option<[usize; K]> {
    if rank >= binomial(n, K) {
        return None;
    }
    let mut out = [0usize; K];
    let mut next = 0usize;
    for (slot, item) in out.iter_mut().enumerate() {
        let left = K - slot - 1;
        loop {
            // subsets that start with `next` at this slot
            let block = binomial(n - next - 1, left);
            if rank < block {
                break;
            }
            rank -= block;
            next += 1;
        }
        *item = next;
        next += 1;
    }
    Some(out)
}

/// Advance `idx` to the next increasing tuple over `0..n`.
/// Returns false (leaving `idx` untouched) after the last one.
#[inline]
pub fn advance<const K: usize>(idx: &mut [usize; K], n: usize) -> bool {
    let mut i = K;
    while i > 0 {
        i -= 1;
        if idx[i] < n - K + i {
            idx[i] += 1;
            for j in (i + 1)..K {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Iterator over the lexicographic range `[start, end)` of `K`-subsets of `0..n`.
pub struct Combinations<const K: usize> {
    n: usize,
    idx: [usize; K],
    left: u64,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        Self::range(n, 0, binomial(n, K))
    }

    pub fn range(n: usize, start: u64, end: u64) -> Self {
        let end = end.min(binomial(n, K));
        match unrank::<K>(n, start) {
            Some(idx) if start < end => Self { n, idx, left: end - start },
            _ => Self { n, idx: [0; K], left: 0 },
        }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        let current = self.idx;
        self.left -= 1;
        if self.left > 0 {
            advance(&mut self.idx, self.n);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.left as usize;
        (n, Some(n))
    }
}

/// Split `total` units into `parts` contiguous ranges of `total / parts`,
/// the remainder going to the last range.
pub fn partition(total: u64, parts: usize) -> Vec<std::ops::Range<u64>> {
    let parts = parts.max(1) as u64;
    let base = total / parts;
    (0..parts)
        .map(|p| {
            let start = p * base;
            let end = if p == parts - 1 { total } else { start + base };
            start..end
        })
        .collect()
}

/// Split `weights` into `parts` contiguous index ranges whose weight sums
/// are as even as a contiguous cut allows. Trailing ranges may be empty.
pub fn partition_weighted(weights: &[u64], parts: usize) -> Vec<std::ops::Range<usize>> {
    let parts = parts.max(1);
    let total: u64 = weights.iter().sum();
    let mut out = Vec::with_capacity(parts);
    let mut start = 0;
    let mut acc = 0u64;
    for (i, &w) in weights.iter().enumerate() {
        if out.len() + 1 == parts {
            break;
        }
        acc += w;
        // cut once the running sum reaches the next 1/parts share
        if acc * parts as u64 >= total * (out.len() as u64 + 1) {
            out.push(start..i + 1);
            start = i + 1;
        }
    }
    while out.len() + 1 < parts {
        out.push(start..start);
    }
    out.push(start..weights.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomials() {
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(52, 2), 1326);
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(4, 5), 0);
        assert_eq!(binomial(0, 0), 1);
    }

    #[test]
    fn five_subsets_are_unique_and_counted() {
        let mut seen = std::collections::HashSet::new();
        for_each_five(7, |idx| {
            assert!(idx.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(idx));
        });
        assert_eq!(seen.len(), 21);

        let mut n = 0;
        for_each_five(5, |_| n += 1);
        assert_eq!(n, 1);
        for_each_five(4, |_| n += 1);
        assert_eq!(n, 1);
    }

    #[test]
    fn unrank_matches_sequential_order() {
        let all: Vec<[usize; 3]> = Combinations::<3>::new(8).collect();
        assert_eq!(all.len(), 56);
        for (r, c) in all.iter().enumerate() {
            assert_eq!(unrank::<3>(8, r as u64), Some(*c));
        }
        assert_eq!(unrank::<3>(8, 56), None);
        assert_eq!(all[0], [0, 1, 2]);
        assert_eq!(all[55], [5, 6, 7]);
    }

    #[test]
    fn ranges_tile_the_whole_sequence() {
        let whole: Vec<[usize; 5]> = Combinations::<5>::new(12).collect();
        let total = binomial(12, 5);
        let mut tiled = Vec::new();
        for r in partition(total, 7) {
            tiled.extend(Combinations::<5>::range(12, r.start, r.end));
        }
        assert_eq!(tiled, whole);
    }

    #[test]
    fn partition_gives_remainder_to_last() {
        let parts = partition(10, 3);
        assert_eq!(parts, vec![0..3, 3..6, 6..10]);
        let parts = partition(2, 4);
        assert_eq!(parts, vec![0..0, 0..0, 0..0, 0..2]);
        assert_eq!(partition(5, 0), vec![0..5]);
    }

    #[test]
    fn empty_ranges_yield_nothing() {
        assert_eq!(Combinations::<5>::range(10, 4, 4).count(), 0);
        assert_eq!(Combinations::<5>::range(4, 0, 10).count(), 0);
        assert_eq!(Combinations::<0>::new(3).collect::<Vec<_>>(), vec![[0usize; 0]]);
    }

    #[test]
    fn weighted_partition_evens_out_load() {
        assert_eq!(partition_weighted(&[1; 10], 3), vec![0..4, 4..7, 7..10]);
        assert_eq!(partition_weighted(&[10, 1, 1, 1], 2), vec![0..1, 1..4]);
        assert_eq!(partition_weighted(&[], 3), vec![0..0, 0..0, 0..0]);

        // heavy items up front, light ones behind
        let weights: Vec<u64> = (0..1_000).map(|i| if i < 300 { 24 } else { 4 }).collect();
        let parts = partition_weighted(&weights, 8);
        assert_eq!(parts.len(), 8);
        assert_eq!(parts[0].start, 0);
        assert_eq!(parts[7].end, weights.len());
        assert!(parts.windows(2).all(|w| w[0].end == w[1].start));
        let total: u64 = weights.iter().sum();
        for r in parts {
            let load: u64 = weights[r].iter().sum();
            assert!(load * 8 <= total + 8 * 24, "load {load} of {total}");
        }
    }
}
