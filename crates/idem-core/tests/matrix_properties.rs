//! Property tests over integer 2×2 matrices

use idem_core::identities::{
    annihilates_complement, anticommutation_forces_commutation, anticommuting_product_vanishes,
    commuting_combination, commuting_product, complement_iff, complement_involution,
    idempotent_iff_left_annihilates, idempotent_iff_right_annihilates, power_stable,
};
use idem_core::{is_idempotent, Idempotent, RingCapability};
use idem_testkit::rings::{Integers, MatrixRing, ZMod};
use idem_testkit::strategies::{
    arb_commuting_idempotent_pair, arb_idempotent_int_matrix, arb_int_matrix, arb_zmod_elem,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrapping_returns_the_original(p in arb_idempotent_int_matrix(8)) {
        let ring = MatrixRing::new(Integers);
        let e = Idempotent::new(&ring, p.clone()).unwrap();
        prop_assert_eq!(e.into_value(), p);
    }

    #[test]
    fn wrapping_accepts_exactly_the_idempotents(a in arb_zmod_elem(30)) {
        let ring = ZMod::new(30);
        prop_assert_eq!(Idempotent::new(&ring, a).is_ok(), is_idempotent(&ring, &a));
    }

    #[test]
    fn complement_laws_hold(p in arb_idempotent_int_matrix(6)) {
        let ring = MatrixRing::new(Integers);
        let e = Idempotent::new(&ring, p).unwrap();

        prop_assert_eq!(complement_involution(&e).unwrap(), e.clone());
        let f = annihilates_complement(&e).unwrap();
        prop_assert_eq!(ring.mul(e.value(), f.value()), ring.zero());
    }

    #[test]
    fn powers_are_stable(p in arb_idempotent_int_matrix(6), n in 1u32..6) {
        let ring = MatrixRing::new(Integers);
        let e = Idempotent::new(&ring, p).unwrap();
        prop_assert_eq!(power_stable(&e, n).unwrap(), e);
    }

    #[test]
    fn characterisations_agree(a in arb_int_matrix(3)) {
        let ring = MatrixRing::new(Integers);
        let expected = is_idempotent(&ring, &a);
        let left = idempotent_iff_left_annihilates(&ring, &a).unwrap();
        let right = idempotent_iff_right_annihilates(&ring, &a).unwrap();
        prop_assert_eq!(left, expected);
        prop_assert_eq!(right, expected);
        prop_assert_eq!(complement_iff(&ring, &a).unwrap(), expected);
    }

    #[test]
    fn commuting_pairs_combine((p, q) in arb_commuting_idempotent_pair(5)) {
        let ring = MatrixRing::new(Integers);
        let a = Idempotent::new(&ring, p).unwrap();
        let b = Idempotent::new(&ring, q).unwrap();
        prop_assert!(commuting_combination(&a, &b).is_ok());
        prop_assert!(commuting_product(&a, &b).is_ok());
    }

    #[test]
    fn anticommuting_partners_are_orthogonal(
        p in arb_idempotent_int_matrix(4),
        x in arb_int_matrix(3)
    ) {
        let ring = MatrixRing::new(Integers);
        let e = Idempotent::new(&ring, p).unwrap();
        let f = e.complement().unwrap();
        // (1-p) x (1-p) is killed by p on both sides, so it anticommutes with p
        let b = ring.mul(&ring.mul(f.value(), &x), f.value());

        prop_assert_eq!(anticommuting_product_vanishes(&e, &b).unwrap(), ring.zero());
        let pair = anticommutation_forces_commutation(&e, &b).unwrap();
        prop_assert_eq!(pair, (ring.zero(), ring.zero()));
    }
}
