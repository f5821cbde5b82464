//! Property test strategies for ring elements
//!
//! Composable proptest strategies over the rings in [`crate::rings`]. Entry
//! ranges are small so products stay exact.

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use crate::generators::idempotent_matrix;
use crate::rings::Mat2;

/// Residues modulo `modulus`.
pub fn arb_zmod_elem(modulus: u64) -> impl Strategy<Value = u64> {
    0..modulus
}

/// Integer matrices with entries in `-bound..=bound`.
pub fn arb_int_matrix(bound: i128) -> impl Strategy<Value = Mat2<i128>> {
    let entry = -bound..=bound;
    let entries = (entry.clone(), entry.clone(), entry.clone(), entry);
    entries.prop_map(|(a, b, c, d)| Mat2::new(a, b, c, d))
}

/// Integer idempotent matrices: `0`, `I`, and the rank-one family `P(k, m)`.
pub fn arb_idempotent_int_matrix(bound: i128) -> impl Strategy<Value = Mat2<i128>> {
    prop_oneof![
        1 => Just(Mat2::new(0, 0, 0, 0)),
        1 => Just(Mat2::new(1, 0, 0, 1)),
        8 => (-bound..=bound, -bound..=bound).prop_map(|(k, m)| idempotent_matrix(k, m)),
    ]
}

/// Pairs of commuting integer idempotents.
///
/// Draws `p` from [`arb_idempotent_int_matrix`] and pairs it with one of
/// `p`, `0`, `I` or `I - p`, all of which commute with `p`.
pub fn arb_commuting_idempotent_pair(
    bound: i128,
) -> impl Strategy<Value = (Mat2<i128>, Mat2<i128>)> {
    (arb_idempotent_int_matrix(bound), 0u8..4).prop_map(|(p, pick)| {
        let q = match pick {
            0 => p.clone(),
            1 => Mat2::new(0, 0, 0, 0),
            2 => Mat2::new(1, 0, 0, 1),
            _ => {
                let [[a, b], [c, d]] = p.0;
                Mat2::new(1 - a, -b, -c, 1 - d)
            }
        };
        (p, q)
    })
}
