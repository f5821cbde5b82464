//! Idempotent predicate and the checked [`Idempotent`] wrapper

use crate::errors::{render_operands, IdemError, Result};
use crate::identities::{self, Identity};
use crate::ring::{Capabilities, RingCapability};
use std::fmt;

/// `a*a = a`, using the ring's equality.
pub fn is_idempotent<R: RingCapability>(ring: &R, a: &R::Elem) -> bool {
    ring.mul(a, a) == *a
}

/// A ring element together with the ring it is idempotent in.
///
/// The only way to build one is [`Idempotent::new`] (or the constructors that
/// delegate to it), so `value * value == value` holds for every instance.
/// Instances are never mutated; every combination yields a fresh value.
pub struct Idempotent<'r, R: RingCapability> {
    ring: &'r R,
    value: R::Elem,
}

impl<'r, R: RingCapability> Idempotent<'r, R> {
    /// Wrap `value`, failing with [`IdemError::PreconditionViolation`] unless it is idempotent.
    pub fn new(ring: &'r R, value: R::Elem) -> Result<Self> {
        Self::checked(ring, value, Identity::Idempotent)
    }

    /// Wrap a value an identity derived; failure means the ring broke its axioms.
    pub(crate) fn derived(
        ring: &'r R,
        value: R::Elem,
        identity: Identity,
        operands: Vec<String>,
    ) -> Result<Self> {
        if is_idempotent(ring, &value) {
            Ok(Self { ring, value })
        } else {
            Err(IdemError::axiom_violation(identity, operands))
        }
    }

    fn checked(ring: &'r R, value: R::Elem, identity: Identity) -> Result<Self> {
        if !is_idempotent(ring, &value) {
            return Err(IdemError::precondition(
                identity,
                "element is not idempotent",
                render_operands(&[&value]),
            ));
        }
        Ok(Self { ring, value })
    }

    /// The idempotent `0`.
    pub fn zero(ring: &'r R) -> Result<Self> {
        Self::checked(ring, ring.zero(), Identity::ZeroIdempotent)
    }

    /// The idempotent `1`; requires a unital ring.
    pub fn one(ring: &'r R) -> Result<Self> {
        let identity = Identity::OneIdempotent;
        let caps = ring.capabilities();
        caps.require(identity, &identity.required_capabilities())?;
        Self::checked(ring, ring.one(), identity)
    }

    /// `1 - self`; requires ring tier.
    pub fn complement(&self) -> Result<Self> {
        identities::complement(self)
    }

    /// The wrapped element.
    pub fn value(&self) -> &R::Elem {
        &self.value
    }

    /// Unwrap to the element.
    pub fn into_value(self) -> R::Elem {
        self.value
    }

    /// The ring this element is idempotent in.
    pub fn ring(&self) -> &'r R {
        self.ring
    }

    /// Declared capabilities of the underlying ring.
    pub fn capabilities(&self) -> Capabilities {
        self.ring.capabilities()
    }
}

impl<R: RingCapability> Clone for Idempotent<'_, R> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            value: self.value.clone(),
        }
    }
}

impl<R: RingCapability> PartialEq for Idempotent<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: RingCapability> fmt::Debug for Idempotent<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Idempotent").field(&self.value).finish()
    }
}
