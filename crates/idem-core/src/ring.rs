//! Ring capability interface
//!
//! A supplier implements [`RingCapability`] over some carrier type and declares,
//! through [`Capabilities`], which axioms its operations satisfy. Nothing here
//! checks the declared axioms; identities check the *declaration* at their call
//! site and trust it afterwards.
//!
//! Tiers are presets over the axiom set:
//! - non-associative ring: `{Unital, AdditiveInverse}`
//! - semiring: `{Associative, Unital}`
//! - ring: semiring + `AdditiveInverse`
//! - commutative ring: ring + `Commutative`
//!
//! `TorsionFree` is orthogonal to the tiers and is added with [`Capabilities::with`].
//! Distributivity and the additive structure (`+` associative, commutative, with
//! `0`) are assumed of every supplier.

use crate::errors::{IdemError, Result};
use crate::identities::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Debug};

/// A single algebraic law a ring supplier may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axiom {
    /// `(a*b)*c = a*(b*c)`
    Associative,
    /// `1*a = a = a*1`
    Unital,
    /// every `a` has `-a` with `a + (-a) = 0`
    AdditiveInverse,
    /// `a*b = b*a`
    Commutative,
    /// `n•x = 0` with `n > 0` implies `x = 0`
    TorsionFree,
}

/// Named axiom tiers, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxiomTier {
    /// Unital ring without associative multiplication
    NonAssociativeRing,
    /// Associative, unital, no guaranteed additive inverse
    Semiring,
    /// Semiring with additive inverses
    Ring,
    /// Ring with commutative multiplication
    CommutativeRing,
}

impl AxiomTier {
    /// Axioms this tier consists of.
    pub fn capabilities(self) -> Capabilities {
        match self {
            AxiomTier::NonAssociativeRing => Capabilities::non_associative_ring(),
            AxiomTier::Semiring => Capabilities::semiring(),
            AxiomTier::Ring => Capabilities::ring(),
            AxiomTier::CommutativeRing => Capabilities::commutative_ring(),
        }
    }
}

/// Set of axioms a ring supplier declares (or an identity requires).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    axioms: BTreeSet<Axiom>,
}

impl Capabilities {
    /// No axioms beyond the distributive additive structure.
    pub fn none() -> Self {
        Self::default()
    }

    /// Unital ring with additive inverses, multiplication not associative.
    pub fn non_associative_ring() -> Self {
        Self::none()
            .with(Axiom::Unital)
            .with(Axiom::AdditiveInverse)
    }

    /// Associative unital semiring.
    pub fn semiring() -> Self {
        Self::none().with(Axiom::Associative).with(Axiom::Unital)
    }

    /// Associative unital ring.
    pub fn ring() -> Self {
        Self::semiring().with(Axiom::AdditiveInverse)
    }

    /// Commutative ring.
    pub fn commutative_ring() -> Self {
        Self::ring().with(Axiom::Commutative)
    }

    /// Add an axiom.
    pub fn with(mut self, axiom: Axiom) -> Self {
        self.axioms.insert(axiom);
        self
    }

    /// Drop an axiom.
    pub fn without(mut self, axiom: Axiom) -> Self {
        self.axioms.remove(&axiom);
        self
    }

    /// Whether the axiom is declared.
    pub fn has(&self, axiom: Axiom) -> bool {
        self.axioms.contains(&axiom)
    }

    /// Whether every axiom in `required` is declared.
    pub fn satisfies(&self, required: &Capabilities) -> bool {
        required.axioms.is_subset(&self.axioms)
    }

    /// Axioms in `required` that are not declared, in order.
    pub fn missing(&self, required: &Capabilities) -> Vec<Axiom> {
        required.axioms.difference(&self.axioms).copied().collect()
    }

    /// Declared axioms, in order.
    pub fn axioms(&self) -> Vec<Axiom> {
        self.axioms.iter().copied().collect()
    }

    /// Fail with [`IdemError::CapabilityMismatch`] unless `required` is satisfied.
    pub fn require(&self, identity: Identity, required: &Capabilities) -> Result<()> {
        let missing = self.missing(required);
        if missing.is_empty() {
            return Ok(());
        }
        tracing::trace!(%identity, ?missing, "identity refused by declared capabilities");
        Err(IdemError::capability_mismatch(identity, missing, self.axioms()))
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.axioms.iter().map(|a| format!("{a:?}")).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Operations of a (possibly non-associative, possibly non-unital) ring over a
/// fixed carrier, plus the axioms the implementation claims to satisfy.
///
/// Implementations must be referentially transparent: equal inputs give equal
/// outputs. Operations never fail for well-typed inputs.
pub trait RingCapability {
    /// Carrier type.
    type Elem: Clone + PartialEq + Debug;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity. Only meaningful when [`Axiom::Unital`] is declared.
    fn one(&self) -> Self::Elem;

    /// Addition.
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Multiplication.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// Additive inverse, `None` when the carrier has none (semiring tier).
    fn neg(&self, a: &Self::Elem) -> Option<Self::Elem>;

    /// Declared axioms.
    fn capabilities(&self) -> Capabilities;

    /// `a - b`, when additive inverses exist.
    fn sub(&self, a: &Self::Elem, b: &Self::Elem) -> Option<Self::Elem> {
        self.neg(b).map(|nb| self.add(a, &nb))
    }

    /// Whether `a` is the additive identity.
    fn is_zero(&self, a: &Self::Elem) -> bool {
        *a == self.zero()
    }
}

/// Commutation witness: `a*b = b*a`.
pub fn commutes<R: RingCapability>(ring: &R, a: &R::Elem, b: &R::Elem) -> bool {
    ring.mul(a, b) == ring.mul(b, a)
}

/// Anticommutation witness: `a*b + b*a = 0`.
pub fn anticommutes<R: RingCapability>(ring: &R, a: &R::Elem, b: &R::Elem) -> bool {
    ring.is_zero(&ring.add(&ring.mul(a, b), &ring.mul(b, a)))
}

/// `n•x`, the n-fold sum of `x` (`0•x = 0`).
pub fn nsmul<R: RingCapability>(ring: &R, n: u32, x: &R::Elem) -> R::Elem {
    (0..n).fold(ring.zero(), |acc, _| ring.add(&acc, x))
}

/// `x^n` for `n ≥ 1` by left-nested repeated multiplication, `None` for `n = 0`
/// (no unit is assumed).
pub fn pow<R: RingCapability>(ring: &R, x: &R::Elem, n: u32) -> Option<R::Elem> {
    if n == 0 {
        return None;
    }
    Some((1..n).fold(x.clone(), |acc, _| ring.mul(&acc, x)))
}
