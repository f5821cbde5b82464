//! Unified error type for idempotent-algebra operations
//!
//! Every failure names the catalogue identity involved and carries the `Debug`
//! renderings of the operands, so the same call reproduces the same failure.

use crate::identities::Identity;
use crate::ring::Axiom;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Unified error type for all idem operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum IdemError {
    /// An operand failed the invariant or relational witness an operation requires
    #[error("Precondition violated for {identity}: {detail} (operands: {operands:?})")]
    PreconditionViolation {
        /// Identity (or constructor) whose precondition failed
        identity: Identity,
        /// What was expected of the operands
        detail: String,
        /// Debug renderings of the offending operands
        operands: Vec<String>,
    },

    /// The ring does not declare an axiom the identity depends on
    #[error("Capability mismatch for {identity}: missing {missing:?} (declared {declared:?})")]
    CapabilityMismatch {
        /// Identity that was refused
        identity: Identity,
        /// Axioms required but not declared
        missing: Vec<Axiom>,
        /// Axioms the ring declares
        declared: Vec<Axiom>,
    },

    /// A derived value broke a guaranteed law; the ring violates its declared axioms
    #[error("Axiom violation detected by {identity} (operands: {operands:?})")]
    AxiomViolation {
        /// Identity whose conclusion failed
        identity: Identity,
        /// Debug renderings of the operands that produced the bad value
        operands: Vec<String>,
    },

    /// A verification run found a counterexample
    #[error("Verification failed for {identity}: {detail} (operands: {operands:?})")]
    VerificationFailure {
        /// Identity that failed
        identity: Identity,
        /// Description of the mismatch
        detail: String,
        /// Debug renderings of the counterexample
        operands: Vec<String>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },
}

impl IdemError {
    /// Create a precondition violation error
    pub fn precondition(
        identity: Identity,
        detail: impl Into<String>,
        operands: Vec<String>,
    ) -> Self {
        Self::PreconditionViolation {
            identity,
            detail: detail.into(),
            operands,
        }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch(
        identity: Identity,
        missing: Vec<Axiom>,
        declared: Vec<Axiom>,
    ) -> Self {
        Self::CapabilityMismatch {
            identity,
            missing,
            declared,
        }
    }

    /// Create an axiom violation error
    pub fn axiom_violation(identity: Identity, operands: Vec<String>) -> Self {
        Self::AxiomViolation { identity, operands }
    }

    /// Create a verification failure error
    pub fn verification(
        identity: Identity,
        detail: impl Into<String>,
        operands: Vec<String>,
    ) -> Self {
        Self::VerificationFailure {
            identity,
            detail: detail.into(),
            operands,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Identity this error refers to, if any
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Self::PreconditionViolation { identity, .. }
            | Self::CapabilityMismatch { identity, .. }
            | Self::AxiomViolation { identity, .. }
            | Self::VerificationFailure { identity, .. } => Some(*identity),
            Self::Serialization { .. } | Self::Config { .. } => None,
        }
    }
}

/// Standard Result type for idem operations
pub type Result<T> = std::result::Result<T, IdemError>;

/// Render operands for error payloads.
pub fn render_operands<E: Debug>(operands: &[&E]) -> Vec<String> {
    operands.iter().map(|op| format!("{op:?}")).collect()
}

impl From<std::io::Error> for IdemError {
    fn from(err: std::io::Error) -> Self {
        Self::config(err.to_string())
    }
}
