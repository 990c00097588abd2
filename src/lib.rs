//! Instrumented catalog of classical comparison sorts.
//!
//! Every algorithm sorts in place over a three-way comparator and records
//! comparisons, swaps and index accesses into a [`stats::SortStats`]
//! recorder while it runs.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl {}

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                self::sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> ::std::cmp::Ordering,
            {
                self::sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod stats;
pub mod unstable;
