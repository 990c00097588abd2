pub mod mergesort;

// Allocation-per-call reference variant, kept for access-count comparison.
#[cfg(feature = "naive_mergesort")]
pub mod mergesort_naive;
