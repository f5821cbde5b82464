//! Rings that lie about their axioms

use idem_core::{Capabilities, RingCapability};
use idem_verify::FiniteRing;

/// Wraps a ring and reports `declared` instead of its real capabilities.
///
/// Arithmetic is untouched, so identities unlocked by a false declaration
/// fail with `AxiomViolation` and show up in verification reports.
#[derive(Debug, Clone)]
pub struct Mislabeled<R> {
    inner: R,
    declared: Capabilities,
}

impl<R: RingCapability> Mislabeled<R> {
    /// Wrap `inner`, claiming `declared`.
    pub fn new(inner: R, declared: Capabilities) -> Self {
        Self { inner, declared }
    }

    /// The wrapped ring.
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: RingCapability> RingCapability for Mislabeled<R> {
    type Elem = R::Elem;

    fn zero(&self) -> R::Elem {
        self.inner.zero()
    }

    fn one(&self) -> R::Elem {
        self.inner.one()
    }

    fn add(&self, a: &R::Elem, b: &R::Elem) -> R::Elem {
        self.inner.add(a, b)
    }

    fn mul(&self, a: &R::Elem, b: &R::Elem) -> R::Elem {
        self.inner.mul(a, b)
    }

    fn neg(&self, a: &R::Elem) -> Option<R::Elem> {
        self.inner.neg(a)
    }

    fn capabilities(&self) -> Capabilities {
        self.declared.clone()
    }
}

impl<R: FiniteRing> FiniteRing for Mislabeled<R> {
    fn elements(&self) -> Vec<R::Elem> {
        self.inner.elements()
    }
}
