//! Minimal rings for unit tests. Layer 1 does not use idem-testkit to keep unit
//! tests free of a second copy of this crate.

use crate::ring::{Axiom, Capabilities, RingCapability};

/// Integers mod n.
pub(crate) struct Mod(pub(crate) u64);

impl RingCapability for Mod {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1 % self.0
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        (a + b) % self.0
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        (a * b) % self.0
    }

    fn neg(&self, a: &u64) -> Option<u64> {
        Some((self.0 - a % self.0) % self.0)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::commutative_ring()
    }
}

/// Integers, small values only.
pub(crate) struct Int;

impl RingCapability for Int {
    type Elem = i64;

    fn zero(&self) -> i64 {
        0
    }

    fn one(&self) -> i64 {
        1
    }

    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }

    fn neg(&self, a: &i64) -> Option<i64> {
        Some(-a)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::commutative_ring().with(Axiom::TorsionFree)
    }
}

/// Boolean semiring (or, and).
pub(crate) struct Bool;

impl RingCapability for Bool {
    type Elem = bool;

    fn zero(&self) -> bool {
        false
    }

    fn one(&self) -> bool {
        true
    }

    fn add(&self, a: &bool, b: &bool) -> bool {
        *a || *b
    }

    fn mul(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }

    fn neg(&self, _a: &bool) -> Option<bool> {
        None
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::semiring().with(Axiom::Commutative)
    }
}
