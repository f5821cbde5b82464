//! Idem Verify - property verification of the identity catalogue
//!
//! Given a concrete ring and a [`SampleStrategy`], [`PropertyVerifier`]
//! filters the sampled elements to idempotents, evaluates every catalogue
//! identity the ring's declared capabilities admit, and returns a
//! [`VerificationReport`] listing checks, skipped identities and violations
//! with their operands.
//!
//! ```rust,no_run
//! use idem_testkit::rings::ZMod;
//! use idem_verify::{PropertyVerifier, SampleStrategy, VerifierConfig};
//!
//! fn main() -> Result<(), idem_core::IdemError> {
//!     let ring = ZMod::new(12);
//!     let verifier = PropertyVerifier::new(VerifierConfig::default())?;
//!     let report = verifier.verify(&ring, SampleStrategy::exhaustive(&ring));
//!     assert!(report.is_success());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

/// Verifier configuration
pub mod config;

/// Verification report
pub mod report;

/// Sample strategies
pub mod sampling;

/// Verification driver
pub mod verifier;

pub use config::VerifierConfig;
pub use report::{SkippedIdentity, VerificationReport, Violation};
pub use sampling::{ElementGenerator, FiniteRing, SampleStrategy};
pub use verifier::PropertyVerifier;

// Re-exported so generators can name the RNG without a direct dependency.
pub use rand_chacha::ChaCha8Rng;
