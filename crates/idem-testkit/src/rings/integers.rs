//! The integers

use idem_core::{Axiom, Capabilities, RingCapability};

/// `ℤ` over `i128`. Torsion-free and commutative; the only idempotents are 0 and 1.
///
/// Arithmetic is unchecked beyond `i128`, so keep sampled values small.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integers;

impl RingCapability for Integers {
    type Elem = i128;

    fn zero(&self) -> i128 {
        0
    }

    fn one(&self) -> i128 {
        1
    }

    fn add(&self, a: &i128, b: &i128) -> i128 {
        a + b
    }

    fn mul(&self, a: &i128, b: &i128) -> i128 {
        a * b
    }

    fn neg(&self, a: &i128) -> Option<i128> {
        Some(-a)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::commutative_ring().with(Axiom::TorsionFree)
    }
}
