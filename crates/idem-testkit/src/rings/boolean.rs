//! Boolean semiring

use idem_core::{Axiom, Capabilities, RingCapability};
use idem_verify::FiniteRing;

/// `({false, true}, ∨, ∧)`: commutative semiring without additive inverses.
/// Every element is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSemiring;

impl RingCapability for BooleanSemiring {
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

impl FiniteRing for BooleanSemiring {
    fn elements(&self) -> Vec<bool> {
        vec![false, true]
    }
}
