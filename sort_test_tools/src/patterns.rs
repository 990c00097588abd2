use std::env;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();
static CALL_NONCE: AtomicU64 = AtomicU64::new(0);

/// Seed shared by every pattern call in one process. Set `OVERRIDE_SEED` to
/// reproduce a failing run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(value) => value.parse().expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

// Every call advances a nonce, so repeated calls yield fresh data while the
// whole sequence stays reproducible from one seed.
fn new_rng() -> StdRng {
    let nonce = CALL_NONCE.fetch_add(1, Ordering::Relaxed);
    StdRng::seed_from_u64(random_init_seed() ^ nonce.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// `len` values drawn from the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// `len` values drawn uniformly from `range`.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian-distributed ranks, heavy on duplicates of the low values.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len.max(1), exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
