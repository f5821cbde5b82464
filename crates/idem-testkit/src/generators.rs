//! Seeded element generators
//!
//! Closures accepted by [`SampleStrategy::generated`](idem_verify::SampleStrategy::generated).
//! Bounds keep `i128` arithmetic far from overflow for the products the
//! catalogue evaluates.

use crate::rings::{Mat2, ZMod};
use idem_verify::ChaCha8Rng;
use rand::Rng;

/// Integers in `-bound..=bound`.
pub fn integers(bound: i128) -> impl Fn(&mut ChaCha8Rng) -> i128 + Clone {
    move |rng| rng.gen_range(-bound..=bound)
}

/// Uniform elements of `ring`.
pub fn zmod(ring: ZMod) -> impl Fn(&mut ChaCha8Rng) -> u64 + Clone {
    move |rng| rng.gen_range(0..ring.modulus())
}

/// Integer matrices with entries in `-bound..=bound`.
pub fn int_matrices(bound: i128) -> impl Fn(&mut ChaCha8Rng) -> Mat2<i128> + Clone {
    move |rng| {
        Mat2::new(
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
        )
    }
}

/// `[[1 - km, m], [k(1 - km), km]]`, idempotent for every integer `k`, `m`.
pub fn idempotent_matrix(k: i128, m: i128) -> Mat2<i128> {
    let km = k * m;
    Mat2::new(1 - km, m, k * (1 - km), km)
}

/// Rank-one integer idempotents with parameters in `-bound..=bound`.
pub fn idempotent_int_matrices(bound: i128) -> impl Fn(&mut ChaCha8Rng) -> Mat2<i128> + Clone {
    move |rng| idempotent_matrix(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound))
}

/// Matrices over `ring` with uniform entries.
pub fn zmod_matrices(ring: ZMod) -> impl Fn(&mut ChaCha8Rng) -> Mat2<u64> + Clone {
    let entry = zmod(ring);
    move |rng| Mat2::new(entry(rng), entry(rng), entry(rng), entry(rng))
}

/// Fair booleans.
pub fn booleans() -> impl Fn(&mut ChaCha8Rng) -> bool + Clone {
    |rng| rng.gen_bool(0.5)
}
