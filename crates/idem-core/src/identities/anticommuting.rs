//! Anticommuting pairs `a*b + b*a = 0`
//!
//! With `a` idempotent, `a*(a*b + b*a)*a = 2·(a*b*a) = 0`. Cancelling the 2
//! needs a torsion-free ring; then `a*b + a*b*a = a*(a*b + b*a) = 0` gives
//! `a*b = 0`, and the anticommutation equation gives `b*a = 0`. In
//! characteristic 2 every commuting pair anticommutes (e.g. `1` with itself),
//! so neither conclusion is asserted without [`Axiom::TorsionFree`](crate::Axiom::TorsionFree).

use super::{require, require_partner, Identity};
use crate::errors::{render_operands, IdemError, Result};
use crate::idempotent::Idempotent;
use crate::ring::{anticommutes, commutes, RingCapability};

/// `a + b` for anticommuting idempotents: `(a+b)^2 = a + (a*b + b*a) + b`.
pub fn anticommuting_sum<'r, R: RingCapability>(
    a: &Idempotent<'r, R>,
    b: &Idempotent<'r, R>,
) -> Result<Idempotent<'r, R>> {
    let identity = Identity::AnticommutingSum;
    let ring = a.ring();
    require(ring, identity)?;
    require_partner(a, b, identity)?;
    require_anticommuting(ring, identity, a.value(), b.value())?;
    let operands = render_operands(&[a.value(), b.value()]);
    Idempotent::derived(ring, ring.add(a.value(), b.value()), identity, operands)
}

/// `a*b`, confirmed `0`, for idempotent `a` anticommuting with `b`.
pub fn anticommuting_product_vanishes<R: RingCapability>(
    a: &Idempotent<'_, R>,
    b: &R::Elem,
) -> Result<R::Elem> {
    product_vanishes_as(a, b, Identity::AnticommutingProductVanishes)
}

/// The products `(a*b, b*a)`, confirmed equal (both `0`), for idempotent `a`
/// anticommuting with `b`.
///
/// Established through [`anticommuting_product_vanishes`]: once `a*b = 0`,
/// anticommutation leaves `b*a = 0` as well.
pub fn anticommutation_forces_commutation<R: RingCapability>(
    a: &Idempotent<'_, R>,
    b: &R::Elem,
) -> Result<(R::Elem, R::Elem)> {
    let identity = Identity::AnticommutationForcesCommutation;
    let ring = a.ring();
    let ab = product_vanishes_as(a, b, identity)?;
    let ba = ring.mul(b, a.value());
    if !ring.is_zero(&ba) || !commutes(ring, a.value(), b) {
        let operands = render_operands(&[a.value(), b, &ab, &ba]);
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok((ab, ba))
}

fn product_vanishes_as<R: RingCapability>(
    a: &Idempotent<'_, R>,
    b: &R::Elem,
    identity: Identity,
) -> Result<R::Elem> {
    let ring = a.ring();
    require(ring, identity)?;
    require_anticommuting(ring, identity, a.value(), b)?;
    let ab = ring.mul(a.value(), b);
    if !ring.is_zero(&ab) {
        let operands = render_operands(&[a.value(), b, &ab]);
        return Err(IdemError::axiom_violation(identity, operands));
    }
    Ok(ab)
}

fn require_anticommuting<R: RingCapability>(
    ring: &R,
    identity: Identity,
    a: &R::Elem,
    b: &R::Elem,
) -> Result<()> {
    if anticommutes(ring, a, b) {
        return Ok(());
    }
    let operands = render_operands(&[a, b]);
    Err(IdemError::precondition(identity, "a*b + b*a must be 0", operands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Int, Mod};
    use crate::Axiom;

    #[test]
    fn test_anticommuting_sum_in_characteristic_2() {
        let ring = Mod(2);
        let one = Idempotent::one(&ring).unwrap();
        let zero = Idempotent::zero(&ring).unwrap();
        assert_eq!(*anticommuting_sum(&one, &zero).unwrap().value(), 1);
        // 1*1 + 1*1 = 2 ≡ 0
        assert_eq!(*anticommuting_sum(&one, &one).unwrap().value(), 0);
    }

    #[test]
    fn test_anticommuting_sum_rejects_non_anticommuting() {
        let ring = Mod(6);
        let one = Idempotent::one(&ring).unwrap();
        let err = anticommuting_sum(&one, &one).unwrap_err();
        let expected = IdemError::precondition(
            Identity::AnticommutingSum,
            "a*b + b*a must be 0",
            vec!["1".into(), "1".into()],
        );
        assert_eq!(err, expected);
    }

    #[test]
    fn test_anticommuting_sum_rejects_foreign_partner() {
        let five = Mod(5);
        let twelve = Mod(12);
        let zero = Idempotent::zero(&five).unwrap();
        let nine = Idempotent::new(&twelve, 9).unwrap();

        let err = anticommuting_sum(&zero, &nine).unwrap_err();
        let expected = IdemError::precondition(
            Identity::AnticommutingSum,
            "b must be idempotent in a's ring",
            vec!["0".into(), "9".into()],
        );
        assert_eq!(err, expected);
    }

    #[test]
    fn test_product_vanishes_refused_with_2_torsion() {
        let ring = Mod(2);
        let one = Idempotent::one(&ring).unwrap();
        let err = anticommuting_product_vanishes(&one, &1).unwrap_err();
        match err {
            IdemError::CapabilityMismatch {
                identity, missing, ..
            } => {
                assert_eq!(identity, Identity::AnticommutingProductVanishes);
                assert_eq!(missing, vec![Axiom::TorsionFree]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let result = anticommutation_forces_commutation(&one, &1);
        assert!(matches!(
            result,
            Err(IdemError::CapabilityMismatch {
                identity: Identity::AnticommutationForcesCommutation,
                ..
            })
        ));
    }

    #[test]
    fn test_product_vanishes_over_integers() {
        let ring = Int;
        let zero = Idempotent::zero(&ring).unwrap();
        let one = Idempotent::one(&ring).unwrap();
        assert_eq!(anticommuting_product_vanishes(&zero, &5).unwrap(), 0);
        assert_eq!(anticommuting_product_vanishes(&one, &0).unwrap(), 0);
        let pair = anticommutation_forces_commutation(&zero, &-7).unwrap();
        assert_eq!(pair, (0, 0));
        let result = anticommuting_product_vanishes(&one, &3);
        assert!(matches!(result, Err(IdemError::PreconditionViolation { .. })));
    }
}
