// src/shuffle.rs

use rand::Rng;

/// Uniform Fisher-Yates: for each index from the back, swap with a
/// uniformly chosen index in [0, i]. Length 0 and 1 are left as-is.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy; the caller's slice survives unmodified.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    fisher_yates(&mut copy, &mut rand::thread_rng());
    copy
}
