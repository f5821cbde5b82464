//! Integers modulo n

use idem_core::{Capabilities, RingCapability};
use idem_verify::FiniteRing;

/// `ℤ/nℤ` with canonical representatives `0..n`.
///
/// Never torsion-free for `n > 1` (`n•1 = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZMod {
    modulus: u64,
}

impl ZMod {
    /// Integers mod `modulus`; `modulus` must be positive.
    pub fn new(modulus: u64) -> Self {
        assert!(modulus > 0, "modulus must be positive");
        Self { modulus }
    }

    /// The modulus.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Canonical representative of `value`.
    pub fn reduce(&self, value: i128) -> u64 {
        let n = i128::from(self.modulus);
        // rem_euclid lands in 0..n, which fits u64
        value.rem_euclid(n) as u64
    }

    /// Idempotents of the ring, ascending.
    pub fn idempotents(&self) -> Vec<u64> {
        self.elements()
            .into_iter()
            .filter(|a| self.mul(a, a) == *a)
            .collect()
    }
}

impl RingCapability for ZMod {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1 % self.modulus
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        ((u128::from(*a) + u128::from(*b)) % u128::from(self.modulus)) as u64
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        ((u128::from(*a) * u128::from(*b)) % u128::from(self.modulus)) as u64
    }

    fn neg(&self, a: &u64) -> Option<u64> {
        Some((self.modulus - a % self.modulus) % self.modulus)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::commutative_ring()
    }
}

impl FiniteRing for ZMod {
    fn elements(&self) -> Vec<u64> {
        (0..self.modulus).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotents_of_small_moduli() {
        assert_eq!(ZMod::new(6).idempotents(), vec![0, 1, 3, 4]);
        assert_eq!(ZMod::new(12).idempotents(), vec![0, 1, 4, 9]);
        assert_eq!(ZMod::new(7).idempotents(), vec![0, 1]);
        assert_eq!(ZMod::new(1).idempotents(), vec![0]);
    }

    #[test]
    fn test_reduce_and_neg() {
        let ring = ZMod::new(6);
        assert_eq!(ring.reduce(-1), 5);
        assert_eq!(ring.reduce(13), 1);
        assert_eq!(ring.neg(&0), Some(0));
        assert_eq!(ring.sub(&1, &3), Some(4));
    }
}
