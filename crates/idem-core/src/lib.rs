//! Idem Core - idempotent elements of rings
//!
//! Pure algebra with no I/O. A caller supplies a ring through
//! [`RingCapability`], wraps idempotent elements (`a*a = a`) in the checked
//! [`Idempotent`] type, and evaluates the identities of the catalogue in
//! [`identities`].
//!
//! # Layers
//!
//! - [`ring`]: the capability interface, declared axioms, commutation witnesses
//! - [`idempotent`]: `is_idempotent` and the checked wrapper with `complement`
//! - [`identities`]: the identity catalogue, one function per law
//! - [`errors`]: the unified error type
//!
//! # Example
//!
//! ```rust,no_run
//! use idem_core::{identities, IdemError};
//! use idem_testkit::rings::ZMod;
//!
//! fn main() -> Result<(), IdemError> {
//!     let ring = ZMod::new(6);
//!     let (a, b) = identities::orthogonal_decomposition(&ring, &3, &4)?;
//!     assert_eq!(a.complement()?, b);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Idempotent predicate and checked wrapper
pub mod idempotent;

/// Identity catalogue
pub mod identities;

/// Ring capability interface
pub mod ring;

#[cfg(test)]
mod test_utils;

pub use errors::{IdemError, Result as IdemResult};
pub use idempotent::{is_idempotent, Idempotent};
pub use identities::Identity;
pub use ring::{anticommutes, commutes, nsmul, pow, Axiom, AxiomTier, Capabilities, RingCapability};
