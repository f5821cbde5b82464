//! Complement `1 - e` and the laws tying it to idempotence

use super::{one_minus, require, Identity};
use crate::errors::{render_operands, IdemError, Result};
use crate::idempotent::{is_idempotent, Idempotent};
use crate::ring::RingCapability;

/// `1 - e`, again idempotent.
pub fn complement<'r, R: RingCapability>(e: &Idempotent<'r, R>) -> Result<Idempotent<'r, R>> {
    complement_as(e, Identity::Complement)
}

fn complement_as<'r, R: RingCapability>(
    e: &Idempotent<'r, R>,
    identity: Identity,
) -> Result<Idempotent<'r, R>> {
    let ring = e.ring();
    require(ring, identity)?;
    let value = one_minus(ring, e.value(), identity)?;
    Idempotent::derived(ring, value, identity, render_operands(&[e.value()]))
}

/// `complement(complement(e))`, confirmed equal to `e`.
pub fn complement_involution<'r, R: RingCapability>(
    e: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::ComplementInvolution;
    let twice = complement_as(&complement_as(e, identity)?, identity)?;
    if twice != *e {
        let operands = render_operands(&[e.value(), twice.value()]);
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok(twice)
}

/// `complement(0)`, confirmed equal to `1`.
pub fn complement_of_zero<R: RingCapability>(ring: &R) -> Result<Idempotent<'_, R>> {
    complement_of_constant(ring, Identity::ComplementOfZero, ring.zero(), ring.one())
}

/// `complement(1)`, confirmed equal to `0`.
pub fn complement_of_one<R: RingCapability>(ring: &R) -> Result<Idempotent<'_, R>> {
    complement_of_constant(ring, Identity::ComplementOfOne, ring.one(), ring.zero())
}

fn complement_of_constant<R: RingCapability>(
    ring: &R,
    identity: Identity,
    from: R::Elem,
    expected: R::Elem,
) -> Result<Idempotent<'_, R>> {
    require(ring, identity)?;
    let start = Idempotent::derived(ring, from, identity, Vec::new())?;
    let image = complement_as(&start, identity)?;
    if *image.value() != expected {
        let operands = render_operands(&[start.value(), image.value()]);
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok(image)
}

/// `1 - e`, confirmed orthogonal to `e` on both sides: `e*(1-e) = 0 = (1-e)*e`.
pub fn annihilates_complement<'r, R: RingCapability>(
    e: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::AnnihilatesComplement;
    let ring = e.ring();
    let f = complement_as(e, identity)?;
    let left = ring.mul(e.value(), f.value());
    let right = ring.mul(f.value(), e.value());
    if !ring.is_zero(&left) || !ring.is_zero(&right) {
        let operands = render_operands(&[e.value(), &left, &right]);
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok(f)
}

/// Whether `a` is idempotent, decided both directly and as `a*(1-a) = 0`; the two must agree.
pub fn idempotent_iff_left_annihilates<R: RingCapability>(ring: &R, a: &R::Elem) -> Result<bool> {
    let identity = Identity::IdempotentIffLeftAnnihilates;
    annihilation_agrees(ring, a, identity, |ring, a, f| ring.mul(a, f))
}

/// Whether `a` is idempotent, decided both directly and as `(1-a)*a = 0`; the two must agree.
pub fn idempotent_iff_right_annihilates<R: RingCapability>(ring: &R, a: &R::Elem) -> Result<bool> {
    let identity = Identity::IdempotentIffRightAnnihilates;
    annihilation_agrees(ring, a, identity, |ring, a, f| ring.mul(f, a))
}

fn annihilation_agrees<R, F>(ring: &R, a: &R::Elem, identity: Identity, product: F) -> Result<bool>
where
    R: RingCapability,
    F: Fn(&R, &R::Elem, &R::Elem) -> R::Elem,
{
    require(ring, identity)?;
    let f = one_minus(ring, a, identity)?;
    let direct = is_idempotent(ring, a);
    let annihilated = ring.is_zero(&product(ring, a, &f));
    if direct != annihilated {
        return Err(IdemError::axiom_violation(identity, render_operands(&[a])));
    }
    Ok(direct)
}

/// Whether `a` is idempotent, decided both directly and through `1 - a`; the two must agree.
pub fn complement_iff<R: RingCapability>(ring: &R, a: &R::Elem) -> Result<bool> {
    let identity = Identity::ComplementIff;
    require(ring, identity)?;
    let f = one_minus(ring, a, identity)?;
    let direct = is_idempotent(ring, a);
    if direct != is_idempotent(ring, &f) {
        return Err(IdemError::axiom_violation(identity, render_operands(&[a, &f])));
    }
    Ok(direct)
}
