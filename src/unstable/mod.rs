// Strategies the introspective sort delegates to. Each owns its recorder
// so the parent can absorb the counts after the descent returns.
pub mod heapsort;
pub mod smallsort;

pub mod introsort_median9;
