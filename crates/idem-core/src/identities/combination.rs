//! Idempotents built from pairs: orthogonal decompositions of unity,
//! `a + b - a*b` for commuting pairs, products and powers.

use super::{require, require_partner, Identity};
use crate::errors::{render_operands, IdemError, Result};
use crate::idempotent::Idempotent;
use crate::ring::{commutes, pow, Axiom, RingCapability};

/// If `a*b = 0` and `a + b = 1`, both `a` and `b` are idempotent.
///
/// `a = a*(a+b) = a*a + a*b = a*a`, symmetrically for `b`.
pub fn orthogonal_decomposition<'r, R: RingCapability>(
    ring: &'r R,
    a: &R::Elem,
    b: &R::Elem,
) -> Result<(Idempotent<'r, R>, Idempotent<'r, R>)> {
    let identity = Identity::OrthogonalDecomposition;
    require(ring, identity)?;
    let operands = render_operands(&[a, b]);
    if !ring.is_zero(&ring.mul(a, b)) {
        return Err(IdemError::precondition(identity, "a*b must be 0", operands));
    }
    if ring.add(a, b) != ring.one() {
        return Err(IdemError::precondition(identity, "a+b must be 1", operands));
    }
    Ok((
        Idempotent::derived(ring, a.clone(), identity, operands.clone())?,
        Idempotent::derived(ring, b.clone(), identity, operands)?,
    ))
}

/// `a + b - a*b` for commuting idempotents.
pub fn commuting_combination<'r, R: RingCapability>(
    a: &Idempotent<'r, R>,
    b: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::CommutingCombination;
    let ring = a.ring();
    require(ring, identity)?;
    require_partner(a, b, identity)?;
    require_commuting(ring, identity, a.value(), b.value())?;
    union_like(a, b, identity)
}

/// `a + b - a*b` in a commutative ring, where every pair commutes.
pub fn commutative_combination<'r, R: RingCapability>(
    a: &Idempotent<'r, R>,
    b: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::CommutativeCombination;
    require(a.ring(), identity)?;
    require_partner(a, b, identity)?;
    union_like(a, b, identity)
}

fn union_like<'r, R: RingCapability>(
    a: &Idempotent<'r, R>,
    b: &Idempotent<'r, R>,
    identity: Identity,
) -> Result<Idempotent<'r, R>> {
    let ring = a.ring();
    let operands = render_operands(&[a.value(), b.value()]);
    let sum = ring.add(a.value(), b.value());
    let product = ring.mul(a.value(), b.value());
    let value = ring.sub(&sum, &product).ok_or_else(|| {
        let declared = ring.capabilities().axioms();
        IdemError::capability_mismatch(identity, vec![Axiom::AdditiveInverse], declared)
    })?;
    Idempotent::derived(ring, value, identity, operands)
}

/// `a*b` for commuting idempotents.
pub fn commuting_product<'r, R: RingCapability>(
    a: &Idempotent<'r, R>,
    b: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::CommutingProduct;
    let ring = a.ring();
    require(ring, identity)?;
    require_partner(a, b, identity)?;
    require_commuting(ring, identity, a.value(), b.value())?;
    let operands = render_operands(&[a.value(), b.value()]);
    Idempotent::derived(ring, ring.mul(a.value(), b.value()), identity, operands)
}

/// `e^n`, confirmed equal to `e`, for `n ≥ 1`.
pub fn power_stable<'r, R: RingCapability>(
    e: &Idempotent<'r, R>,
    n: u32,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::PowerStable;
    let ring = e.ring();
    require(ring, identity)?;
    let power = match pow(ring, e.value(), n) {
        Some(power) => power,
        None => {
            let detail = "exponent must be at least 1";
            return Err(IdemError::precondition(identity, detail, vec![n.to_string()]));
        }
    };
    if power != *e.value() {
        let operands = vec![format!("{:?}", e.value()), n.to_string()];
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok(e.clone())
}

fn require_commuting<R: RingCapability>(
    ring: &R,
    identity: Identity,
    a: &R::Elem,
    b: &R::Elem,
) -> Result<()> {
    if commutes(ring, a, b) {
        return Ok(());
    }
    let operands = render_operands(&[a, b]);
    Err(IdemError::precondition(identity, "a*b must equal b*a", operands))
}
