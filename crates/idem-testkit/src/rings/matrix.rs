//! 2×2 matrices over a base ring
//!
//! The smallest non-commutative rings with interesting idempotents: over `ℤ`,
//! every `P(k, m) = [[1 - km, m], [k(1 - km), km]]` is idempotent, and over
//! `ℤ/2` the ring has sixteen elements so it can be enumerated.

use idem_core::{Axiom, Capabilities, RingCapability};
use idem_verify::FiniteRing;
use std::fmt;

/// A 2×2 matrix, row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Mat2<E>(pub [[E; 2]; 2]);

impl<E> Mat2<E> {
    /// Build from rows.
    pub fn new(a: E, b: E, c: E, d: E) -> Self {
        Self([[a, b], [c, d]])
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> &E {
        &self.0[row][col]
    }
}

impl<E: fmt::Debug> fmt::Debug for Mat2<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = &self.0;
        write!(f, "[[{a:?}, {b:?}], [{c:?}, {d:?}]]")
    }
}

/// `M₂(B)` for a base ring `B`.
///
/// Declares the base ring's axioms minus commutativity. Negation is only
/// available when the base ring has it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixRing<B> {
    base: B,
}

impl<B: RingCapability> MatrixRing<B> {
    /// Matrices over `base`.
    pub fn new(base: B) -> Self {
        Self { base }
    }

    /// The base ring.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// `diag(a, d)`.
    pub fn diag(&self, a: B::Elem, d: B::Elem) -> Mat2<B::Elem> {
        Mat2::new(a, self.base.zero(), self.base.zero(), d)
    }

    /// Matrix unit `E_ij`: one in `(row, col)`, zero elsewhere.
    pub fn unit(&self, row: usize, col: usize) -> Mat2<B::Elem> {
        let mut m = self.zero();
        m.0[row][col] = self.base.one();
        m
    }

    fn entrywise(&self, a: &Mat2<B::Elem>, b: &Mat2<B::Elem>) -> Mat2<B::Elem> {
        let add = |i: usize, j: usize| self.base.add(&a.0[i][j], &b.0[i][j]);
        Mat2([[add(0, 0), add(0, 1)], [add(1, 0), add(1, 1)]])
    }
}

impl<B: RingCapability> RingCapability for MatrixRing<B> {
    type Elem = Mat2<B::Elem>;

    fn zero(&self) -> Self::Elem {
        self.diag(self.base.zero(), self.base.zero())
    }

    fn one(&self) -> Self::Elem {
        self.diag(self.base.one(), self.base.one())
    }

    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.entrywise(a, b)
    }

    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let base = &self.base;
        let cell = |i: usize, j: usize| {
            base.add(
                &base.mul(&a.0[i][0], &b.0[0][j]),
                &base.mul(&a.0[i][1], &b.0[1][j]),
            )
        };
        Mat2([[cell(0, 0), cell(0, 1)], [cell(1, 0), cell(1, 1)]])
    }

    fn neg(&self, a: &Self::Elem) -> Option<Self::Elem> {
        let [[p, q], [r, s]] = &a.0;
        Some(Mat2::new(
            self.base.neg(p)?,
            self.base.neg(q)?,
            self.base.neg(r)?,
            self.base.neg(s)?,
        ))
    }

    fn capabilities(&self) -> Capabilities {
        self.base.capabilities().without(Axiom::Commutative)
    }
}

impl<B: FiniteRing> FiniteRing for MatrixRing<B> {
    fn elements(&self) -> Vec<Self::Elem> {
        let entries = self.base.elements();
        let mut out = Vec::with_capacity(entries.len().pow(4));
        for a in &entries {
            for b in &entries {
                for c in &entries {
                    for d in &entries {
                        out.push(Mat2::new(a.clone(), b.clone(), c.clone(), d.clone()));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::{Integers, ZMod};
    use idem_core::is_idempotent;

    #[test]
    fn test_matrix_units_do_not_commute() {
        let ring = MatrixRing::new(Integers);
        let e12 = ring.unit(0, 1);
        let e21 = ring.unit(1, 0);
        assert_eq!(ring.mul(&e12, &e21), ring.unit(0, 0));
        assert_eq!(ring.mul(&e21, &e12), ring.unit(1, 1));
        assert!(!ring.capabilities().has(Axiom::Commutative));
        assert!(ring.capabilities().has(Axiom::TorsionFree));
    }

    #[test]
    fn test_mod_two_matrices_enumerate() {
        let ring = MatrixRing::new(ZMod::new(2));
        let elements = ring.elements();
        assert_eq!(elements.len(), 16);
        let idempotents = elements.iter().filter(|m| is_idempotent(&ring, m)).count();
        // 0, I, and the six rank-one projections
        assert_eq!(idempotents, 8);
    }

    #[test]
    fn test_debug_is_compact() {
        let ring = MatrixRing::new(Integers);
        assert_eq!(format!("{:?}", ring.diag(1, 0)), "[[1, 0], [0, 0]]");
    }
}
