//! Identity catalogue
//!
//! Each identity is a function that checks the declared capabilities, checks
//! any relational precondition eagerly, evaluates the derived value and
//! confirms the stated conclusion before returning it. A conclusion that fails
//! on a ring honoring its declared axioms is impossible, so it surfaces as
//! [`IdemError::AxiomViolation`](crate::IdemError::AxiomViolation).
//!
//! | Identity | Capabilities | Precondition |
//! |---|---|---|
//! | `complement-involution` | ring | — |
//! | `complement-of-zero` / `complement-of-one` | ring | — |
//! | `annihilates-complement` | ring | — |
//! | `idempotent-iff-{left,right}-annihilates` | ring | — |
//! | `complement-iff` | ring | — |
//! | `orthogonal-decomposition` | semiring | `a*b = 0`, `a+b = 1` |
//! | `commuting-combination` | ring | `a*b = b*a` |
//! | `commutative-combination` | commutative ring | — |
//! | `commuting-product` | associative | `a*b = b*a` |
//! | `power-stable` | associative | `n ≥ 1` |
//! | `anticommuting-sum` | — | `a*b + b*a = 0` |
//! | `anticommuting-product-vanishes` | associative, torsion-free | `a*b + b*a = 0` |
//! | `anticommutation-forces-commutation` | associative, torsion-free | `a*b + b*a = 0` |

mod anticommuting;
mod combination;
mod complement;

pub use anticommuting::{
    anticommutation_forces_commutation, anticommuting_product_vanishes, anticommuting_sum,
};
pub use combination::{
    commutative_combination, commuting_combination, commuting_product, orthogonal_decomposition,
    power_stable,
};
pub use complement::{
    annihilates_complement, complement, complement_iff, complement_involution, complement_of_one,
    complement_of_zero, idempotent_iff_left_annihilates, idempotent_iff_right_annihilates,
};

use crate::errors::{render_operands, IdemError, Result};
use crate::idempotent::{is_idempotent, Idempotent};
use crate::ring::{Axiom, Capabilities, RingCapability};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a catalogue entry or checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Identity {
    /// `Idempotent::new`
    Idempotent,
    /// `0*0 = 0`
    ZeroIdempotent,
    /// `1*1 = 1`
    OneIdempotent,
    /// `1 - e`
    Complement,
    /// `complement(complement(e)) = e`
    ComplementInvolution,
    /// `complement(0) = 1`
    ComplementOfZero,
    /// `complement(1) = 0`
    ComplementOfOne,
    /// `e*(1-e) = 0 = (1-e)*e`
    AnnihilatesComplement,
    /// `a*a = a ⇔ a*(1-a) = 0`
    IdempotentIffLeftAnnihilates,
    /// `a*a = a ⇔ (1-a)*a = 0`
    IdempotentIffRightAnnihilates,
    /// `(1-a) idempotent ⇔ a idempotent`
    ComplementIff,
    /// `a*b = 0 ∧ a+b = 1 ⇒ a, b idempotent`
    OrthogonalDecomposition,
    /// commuting idempotents: `a + b - a*b` idempotent
    CommutingCombination,
    /// commutative ring: `a + b - a*b` idempotent
    CommutativeCombination,
    /// commuting idempotents: `a*b` idempotent
    CommutingProduct,
    /// `e^n = e` for `n ≥ 1`
    PowerStable,
    /// anticommuting idempotents: `a + b` idempotent
    AnticommutingSum,
    /// anticommuting with an idempotent `a`: `a*b = 0`
    AnticommutingProductVanishes,
    /// anticommuting with an idempotent `a`: `a*b = b*a`
    AnticommutationForcesCommutation,
}

impl Identity {
    /// Catalogue rows, in evaluation order (constructors excluded).
    pub const CATALOGUE: [Identity; 15] = [
        Identity::ComplementInvolution,
        Identity::ComplementOfZero,
        Identity::ComplementOfOne,
        Identity::AnnihilatesComplement,
        Identity::IdempotentIffLeftAnnihilates,
        Identity::IdempotentIffRightAnnihilates,
        Identity::ComplementIff,
        Identity::OrthogonalDecomposition,
        Identity::CommutingCombination,
        Identity::CommutativeCombination,
        Identity::CommutingProduct,
        Identity::PowerStable,
        Identity::AnticommutingSum,
        Identity::AnticommutingProductVanishes,
        Identity::AnticommutationForcesCommutation,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Identity::Idempotent => "idempotent",
            Identity::ZeroIdempotent => "zero-idempotent",
            Identity::OneIdempotent => "one-idempotent",
            Identity::Complement => "complement",
            Identity::ComplementInvolution => "complement-involution",
            Identity::ComplementOfZero => "complement-of-zero",
            Identity::ComplementOfOne => "complement-of-one",
            Identity::AnnihilatesComplement => "annihilates-complement",
            Identity::IdempotentIffLeftAnnihilates => "idempotent-iff-left-annihilates",
            Identity::IdempotentIffRightAnnihilates => "idempotent-iff-right-annihilates",
            Identity::ComplementIff => "complement-iff",
            Identity::OrthogonalDecomposition => "orthogonal-decomposition",
            Identity::CommutingCombination => "commuting-combination",
            Identity::CommutativeCombination => "commutative-combination",
            Identity::CommutingProduct => "commuting-product",
            Identity::PowerStable => "power-stable",
            Identity::AnticommutingSum => "anticommuting-sum",
            Identity::AnticommutingProductVanishes => "anticommuting-product-vanishes",
            Identity::AnticommutationForcesCommutation => "anticommutation-forces-commutation",
        }
    }

    /// Axioms the ring must declare before the identity is evaluated.
    pub fn required_capabilities(self) -> Capabilities {
        match self {
            Identity::Idempotent | Identity::ZeroIdempotent | Identity::AnticommutingSum => {
                Capabilities::none()
            }
            Identity::OneIdempotent => Capabilities::none().with(Axiom::Unital),
            Identity::Complement
            | Identity::ComplementInvolution
            | Identity::ComplementOfZero
            | Identity::ComplementOfOne
            | Identity::AnnihilatesComplement
            | Identity::IdempotentIffLeftAnnihilates
            | Identity::IdempotentIffRightAnnihilates
            | Identity::ComplementIff
            | Identity::CommutingCombination => Capabilities::ring(),
            Identity::OrthogonalDecomposition => Capabilities::semiring(),
            Identity::CommutativeCombination => Capabilities::commutative_ring(),
            Identity::CommutingProduct | Identity::PowerStable => {
                Capabilities::none().with(Axiom::Associative)
            }
            // Halving 2·(a*b*a) = 0 needs the absence of 2-torsion.
            Identity::AnticommutingProductVanishes | Identity::AnticommutationForcesCommutation => {
                Capabilities::none()
                    .with(Axiom::Associative)
                    .with(Axiom::TorsionFree)
            }
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check the ring's declaration against what `identity` needs.
pub(crate) fn require<R: RingCapability>(ring: &R, identity: Identity) -> Result<()> {
    let required = identity.required_capabilities();
    ring.capabilities().require(identity, &required)
}

/// Fail unless `b` is idempotent in the ring `a` lives in.
///
/// Pair identities evaluate in `a.ring()`; a `b` wrapped over another ring
/// value carries no guarantee there.
pub(crate) fn require_partner<R: RingCapability>(
    a: &Idempotent<'_, R>,
    b: &Idempotent<'_, R>,
    identity: Identity,
) -> Result<()> {
    if is_idempotent(a.ring(), b.value()) {
        return Ok(());
    }
    let operands = render_operands(&[a.value(), b.value()]);
    Err(IdemError::precondition(identity, "b must be idempotent in a's ring", operands))
}

/// `1 - a`. A ring that declares additive inverses but yields none is treated
/// as not declaring them.
pub(crate) fn one_minus<R: RingCapability>(
    ring: &R,
    a: &R::Elem,
    identity: Identity,
) -> Result<R::Elem> {
    ring.sub(&ring.one(), a).ok_or_else(|| {
        IdemError::capability_mismatch(
            identity,
            vec![Axiom::AdditiveInverse],
            ring.capabilities().axioms(),
        )
    })
}
