use std::cmp::Ordering;

use crate::stats::{SortKind, SortStats};
use crate::unstable::heapsort::HeapSort;
use crate::unstable::smallsort::InsertionSort;

sort_impl!("introsort_median9_unstable");

/// Ranges with `right - left` at or below this are handed to insertion sort.
const INTRO_THRESHOLD: usize = 16;

pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    IntroSortMedian9::new().sort(data);
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    IntroSortMedian9::new().sort_by(data, compare);
}

/// Introspective quicksort with median-of-nine pivot selection.
///
/// Partitions until the depth budget of `2 * floor(log2(n))` runs out, then
/// falls back to heapsort for the remaining range to keep the worst case at
/// `O(n log n)`. Ranges at or below [`INTRO_THRESHOLD`] are finished by
/// insertion sort. Not stable.
///
/// The descent recurses into the right side of each partition and loops on
/// the left side, so the native stack depth is bounded by the depth budget
/// rather than by the number of partition steps.
pub struct IntroSortMedian9 {
    stats: SortStats,
    heap_sort: HeapSort,
    insert_sort: InsertionSort,
}

impl IntroSortMedian9 {
    pub fn new() -> Self {
        Self {
            stats: SortStats::new("introsort_median9_unstable", SortKind::Hybrid),
            heap_sort: HeapSort::new(),
            insert_sort: InsertionSort::new(),
        }
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub fn heap_sort_stats(&self) -> &SortStats {
        self.heap_sort.stats()
    }

    pub fn insertion_sort_stats(&self) -> &SortStats {
        self.insert_sort.stats()
    }

    pub fn sort<T: Ord + Clone>(&mut self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F>(&mut self, v: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = v.len();
        self.stats.reset(len);
        // Reset the strategies up front, otherwise a call that never
        // delegates would absorb counts left over from the previous run.
        self.heap_sort.reset(len);
        self.insert_sort.reset(len);

        if len > 1 {
            let depth_limit = 2 * len.ilog2();
            self.sort_range(v, 0, len - 1, depth_limit, &mut compare);
        }

        self.stats.absorb(self.heap_sort.stats());
        self.stats.absorb(self.insert_sort.stats());
    }

    fn sort_range<T, F>(
        &mut self,
        v: &mut [T],
        left: usize,
        mut right: usize,
        mut depth_limit: u32,
        compare: &mut F,
    ) where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        while right - left > INTRO_THRESHOLD {
            if depth_limit == 0 {
                self.heap_sort.sort_range(&mut v[left..=right], compare);
                return;
            }
            depth_limit -= 1;

            self.stats.add_index_access();
            let pivot = self.median9(v, left, right, compare);
            let partition = self.partition(v, left, right, &pivot, compare);
            self.sort_range(v, partition, right, depth_limit, compare);
            right = partition;
        }

        self.insert_sort.sort_range(&mut v[left..=right], compare);
    }

    /// Hoare-style partition around the pivot value. Returns the crossing
    /// point: everything left of it compares less-or-equal against the
    /// pivot, everything from it on compares greater-or-equal.
    fn partition<T, F>(
        &mut self,
        v: &mut [T],
        left: usize,
        right: usize,
        pivot: &T,
        compare: &mut F,
    ) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut l = left;
        let mut r = right;
        loop {
            while compare(&v[l], pivot) == Ordering::Less {
                self.stats.add_index_access();
                self.stats.add_compare_count();
                l += 1;
            }
            r -= 1;
            while compare(pivot, &v[r]) == Ordering::Less {
                self.stats.add_index_access();
                self.stats.add_compare_count();
                r -= 1;
            }

            if l >= r {
                return l;
            }

            self.stats.add_swap_count();
            v.swap(l, r);
            l += 1;
        }
    }

    /// Median of three medians of three, sampled at the endpoints and the
    /// quarter/eighth offsets of the range.
    fn median9<T, F>(&mut self, v: &[T], low: usize, high: usize, compare: &mut F) -> T
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let m2 = (high - low) / 2;
        let m4 = m2 / 2;
        let m8 = m4 / 2;
        let a = v[low].clone();
        let b = v[low + m8].clone();
        let c = v[low + m4].clone();
        let d = v[low + m2 - m8].clone();
        let e = v[low + m2].clone();
        let f = v[low + m2 + m8].clone();
        let g = v[high - m4].clone();
        let h = v[high - m8].clone();
        let i = v[high].clone();

        let first = self.median3(a, b, c, compare);
        let second = self.median3(d, e, f, compare);
        let third = self.median3(g, h, i, compare);
        self.median3(first, second, third, compare)
    }

    // The comparison nesting resolves ties the same way in every branch;
    // keep it as is so the compare counts stay comparable across runs.
    fn median3<T, F>(&mut self, low: T, mid: T, high: T, compare: &mut F) -> T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.stats.add_compare_count();
        if compare(&low, &mid) == Ordering::Greater {
            self.stats.add_compare_count();
            if compare(&mid, &high) == Ordering::Greater {
                mid
            } else {
                self.stats.add_compare_count();
                if compare(&low, &high) == Ordering::Greater {
                    high
                } else {
                    low
                }
            }
        } else {
            self.stats.add_compare_count();
            if compare(&mid, &high) == Ordering::Greater {
                self.stats.add_compare_count();
                if compare(&low, &high) == Ordering::Greater {
                    low
                } else {
                    high
                }
            } else {
                mid
            }
        }
    }
}
