use std::cmp::Ordering;

use crate::stats::{SortKind, SortStats};

sort_impl!("mergesort_naive_stable");

pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    MergeSortNaive::new().sort(data);
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    MergeSortNaive::new().sort_by(data, compare);
}

/// Merge sort that allocates fresh sequences for every recursive split and
/// every merge, instead of reusing one scratch buffer. Stable. Slower and
/// allocation-heavy; it stays in the catalog as a reference point for the
/// access-count profile of the buffered variant.
pub struct MergeSortNaive {
    stats: SortStats,
}

impl MergeSortNaive {
    pub fn new() -> Self {
        Self {
            stats: SortStats::new("mergesort_naive_stable", SortKind::Merge),
        }
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub fn sort<T: Ord + Clone>(&mut self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F>(&mut self, v: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.stats.reset(v.len());
        if v.len() < 2 {
            return;
        }

        let merged = self.sort_vec(v.to_vec(), &mut compare);
        for (slot, value) in v.iter_mut().zip(merged) {
            *slot = value;
        }
    }

    fn sort_vec<T, F>(&mut self, mut input: Vec<T>, compare: &mut F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if input.len() <= 1 {
            return input;
        }
        self.stats.add_index_access();

        let right = input.split_off(input.len() / 2);
        let left = self.sort_vec(input, compare);
        let right = self.sort_vec(right, compare);
        self.merge(left, right, compare)
    }

    fn merge<T, F>(&mut self, left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        while left.peek().is_some() || right.peek().is_some() {
            self.stats.add_index_access();
            let from_left = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => {
                    self.stats.add_compare_count();
                    // Ties take the left run to keep the merge stable.
                    compare(a, b) != Ordering::Greater
                }
                (Some(_), None) => true,
                (None, _) => false,
            };

            let item = if from_left { left.next() } else { right.next() };
            self.stats.add_swap_count();
            merged.extend(item);
        }

        merged
    }
}
