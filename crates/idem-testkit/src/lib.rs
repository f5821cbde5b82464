//! Idem Testing Infrastructure
//!
//! Concrete rings, seeded element generators, proptest strategies and
//! assertion helpers shared by the idem crates' integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! idem-testkit = { path = "../idem-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use idem_testkit::rings::ZMod;
//! use idem_testkit::{assert_report_clean, verify_exhaustive};
//!
//! #[test]
//! fn zmod_twelve_is_clean() {
//!     let report = verify_exhaustive(&ZMod::new(12));
//!     assert_report_clean(&report);
//! }
//! ```

pub mod assertions;
pub mod generators;
pub mod rings;
pub mod strategies;

pub use assertions::*;

// Re-export the crates under test for convenience
pub use idem_core;
pub use idem_verify;

use idem_verify::{FiniteRing, PropertyVerifier, SampleStrategy, VerificationReport};

/// Install a test-writer `tracing` subscriber. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Run the default verifier over every element of a finite ring.
pub fn verify_exhaustive<R: FiniteRing>(ring: &R) -> VerificationReport {
    PropertyVerifier::default().verify(ring, SampleStrategy::exhaustive(ring))
}
