use std::cmp::Ordering;

use crate::stats::{SortKind, SortStats};

sort_impl!("heapsort_unstable");

pub fn sort<T: Ord>(data: &mut [T]) {
    HeapSort::new().sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    HeapSort::new().sort_by(data, compare);
}

/// Max-heap sift-down heapsort. Not stable, in place, `O(n log n)` worst
/// case, which is what makes it the introsort's exhausted-budget fallback.
pub struct HeapSort {
    stats: SortStats,
}

impl HeapSort {
    pub fn new() -> Self {
        Self {
            stats: SortStats::new("heapsort_unstable", SortKind::Selection),
        }
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub(crate) fn reset(&mut self, size: usize) {
        self.stats.reset(size);
    }

    pub fn sort<T: Ord>(&mut self, v: &mut [T]) {
        self.sort_by(v, |a, b| a.cmp(b));
    }

    pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(&mut self, v: &mut [T], mut compare: F) {
        self.stats.reset(v.len());
        self.sort_range(v, &mut compare);
    }

    /// Sorts `v` without resetting the recorder, accumulating counts across
    /// calls. The introspective sort hands exhausted ranges here as
    /// subslices.
    pub fn sort_range<T, F: FnMut(&T, &T) -> Ordering>(&mut self, v: &mut [T], compare: &mut F) {
        let len = v.len();
        if len < 2 {
            return;
        }

        for root in (0..len / 2).rev() {
            self.sift_down(v, root, len, compare);
        }

        for end in (1..len).rev() {
            self.stats.add_swap_count();
            v.swap(0, end);
            self.sift_down(v, 0, end, compare);
        }
    }

    fn sift_down<T, F: FnMut(&T, &T) -> Ordering>(
        &mut self,
        v: &mut [T],
        mut root: usize,
        end: usize,
        compare: &mut F,
    ) {
        loop {
            let mut child = 2 * root + 1;
            if child >= end {
                return;
            }

            if child + 1 < end {
                self.stats.add_index_access();
                self.stats.add_compare_count();
                if compare(&v[child], &v[child + 1]) == Ordering::Less {
                    child += 1;
                }
            }

            self.stats.add_index_access();
            self.stats.add_compare_count();
            if compare(&v[root], &v[child]) == Ordering::Less {
                self.stats.add_swap_count();
                v.swap(root, child);
                root = child;
            } else {
                return;
            }
        }
    }
}
