use std::cell::Cell;

use rand::prelude::*;
use rand::rngs::StdRng;
use sort_classics_rs::stable::mergesort::MergeSort;
#[cfg(feature = "naive_mergesort")]
use sort_classics_rs::stable::mergesort_naive::MergeSortNaive;
use sort_classics_rs::stats::{SortKind, SortStats};
use sort_classics_rs::unstable::heapsort::HeapSort;
use sort_classics_rs::unstable::introsort_median9::IntroSortMedian9;
use sort_classics_rs::unstable::smallsort::InsertionSort;
use sort_test_tools::patterns;

#[test]
fn absorb_adds_counts_and_keeps_metadata() {
    let mut parent = SortStats::new("parent", SortKind::Hybrid);
    parent.reset(10);
    parent.add_compare_count();
    parent.add_swap_count();

    let mut child = SortStats::new("child", SortKind::Selection);
    child.reset(4);
    child.add_compare_count();
    child.add_compare_count();
    child.add_index_access();

    parent.absorb(&child);

    assert_eq!(parent.name, "parent");
    assert_eq!(parent.kind, SortKind::Hybrid);
    assert_eq!(parent.size, 10);
    assert_eq!(parent.compare_count, 3);
    assert_eq!(parent.swap_count, 1);
    assert_eq!(parent.index_access_count, 1);
}

#[test]
fn recorder_carries_name_kind_and_size() {
    let mut intro = IntroSortMedian9::new();
    intro.sort(&mut patterns::random(100));
    assert_eq!(intro.stats().name, "introsort_median9_unstable");
    assert_eq!(intro.stats().kind, SortKind::Hybrid);
    assert_eq!(intro.stats().size, 100);

    let mut merge = MergeSort::new();
    merge.sort(&mut patterns::random(100));
    assert_eq!(merge.stats().name, "mergesort_stable");
    assert_eq!(merge.stats().kind, SortKind::Merge);
    assert_eq!(merge.stats().size, 100);
}

// Sorting the same input twice must report the same counts both times;
// anything else means a previous run leaked into the recorder.
#[test]
fn reset_starts_every_sort_fresh() {
    let input = patterns::random(1000);

    let mut intro = IntroSortMedian9::new();
    intro.sort(&mut input.clone());
    let first = intro.stats().clone();
    intro.sort(&mut input.clone());
    assert_eq!(intro.stats(), &first);

    let mut merge = MergeSort::new();
    merge.sort(&mut input.clone());
    let first = merge.stats().clone();
    merge.sort(&mut input.clone());
    assert_eq!(merge.stats(), &first);
}

#[test]
fn empty_and_single_inputs_only_reset_the_recorder() {
    fn assert_only_reset(stats: &SortStats, size: usize) {
        assert_eq!(stats.size, size);
        assert_eq!(stats.compare_count, 0);
        assert_eq!(stats.swap_count, 0);
        assert_eq!(stats.index_access_count, 0);
    }

    let mut empty: Vec<i32> = Vec::new();
    let mut single = vec![9];

    let mut intro = IntroSortMedian9::new();
    intro.sort(&mut empty);
    assert_only_reset(intro.stats(), 0);
    intro.sort(&mut single);
    assert_only_reset(intro.stats(), 1);

    let mut heap = HeapSort::new();
    heap.sort(&mut empty);
    assert_only_reset(heap.stats(), 0);
    heap.sort(&mut single);
    assert_only_reset(heap.stats(), 1);

    let mut insert = InsertionSort::new();
    insert.sort(&mut empty);
    assert_only_reset(insert.stats(), 0);
    insert.sort(&mut single);
    assert_only_reset(insert.stats(), 1);

    let mut merge = MergeSort::new();
    merge.sort(&mut empty);
    assert_only_reset(merge.stats(), 0);
    merge.sort(&mut single);
    assert_only_reset(merge.stats(), 1);

    #[cfg(feature = "naive_mergesort")]
    {
        let mut naive = MergeSortNaive::new();
        naive.sort(&mut empty);
        assert_only_reset(naive.stats(), 0);
        naive.sort(&mut single);
        assert_only_reset(naive.stats(), 1);
    }

    assert_eq!(single, [9]);
}

// The introsort finishes every small range with insertion sort, so the
// strategy recorder must end up non-empty and folded into the totals.
#[test]
fn introsort_absorbs_strategy_counts() {
    let mut intro = IntroSortMedian9::new();
    intro.sort(&mut patterns::random(1000));

    let insertion = intro.insertion_sort_stats();
    assert!(insertion.compare_count > 0);
    assert!(intro.stats().compare_count >= insertion.compare_count);

    let heap = intro.heap_sort_stats();
    assert!(intro.stats().compare_count >= heap.compare_count);
}

// Depth-limit property: even on partition-unfriendly inputs the total
// comparator work must stay within a constant multiple of n log2 n, which
// is only possible if the heapsort fallback bounds the descent.
#[test]
fn introsort_work_stays_within_n_log_n() {
    let n: usize = 4096;
    let bound = 20 * n as u64 * u64::from(n.ilog2());

    let mut shuffled: Vec<i32> = (0..n as i32).collect();
    shuffled.shuffle(&mut StdRng::seed_from_u64(patterns::random_init_seed()));

    let organ_pipe: Vec<i32> = (0..n as i32 / 2).chain((0..n as i32 / 2).rev()).collect();

    let inputs = [
        patterns::descending(n),
        patterns::ascending(n),
        patterns::all_equal(n),
        patterns::random_zipf(n, 1.0),
        organ_pipe,
        shuffled,
    ];

    for input in inputs {
        let calls = Cell::new(0u64);
        let mut v = input.clone();
        IntroSortMedian9::new().sort_by(&mut v, |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });

        let mut expected = input;
        expected.sort();
        assert_eq!(v, expected);
        assert!(
            calls.get() <= bound,
            "comparator calls {} exceed bound {}, seed: {}",
            calls.get(),
            bound,
            patterns::random_init_seed()
        );
    }
}

#[test]
fn mergesort_counts_look_like_n_log_n() {
    let n: usize = 1000;
    let mut merge = MergeSort::new();
    merge.sort(&mut patterns::random(n));

    let bound = 2 * n as u64 * u64::from(n.ilog2()) + n as u64;
    assert!(merge.stats().compare_count > 0);
    assert!(merge.stats().compare_count <= bound);
    assert!(merge.stats().swap_count > 0);
    assert!(merge.stats().index_access_count > 0);

    #[cfg(feature = "naive_mergesort")]
    {
        let mut naive = MergeSortNaive::new();
        naive.sort(&mut patterns::random(n));
        assert!(naive.stats().compare_count > 0);
        assert!(naive.stats().compare_count <= bound);
        assert!(naive.stats().index_access_count > 0);
    }
}
