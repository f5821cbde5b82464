//! Verification report

use idem_core::{Axiom, Capabilities, IdemError, IdemResult, Identity};
use serde::Serialize;
use std::collections::BTreeMap;

/// One failed evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Identity that failed
    pub identity: Identity,
    /// Debug renderings of the operands
    pub operands: Vec<String>,
    /// Error reported by the catalogue
    pub detail: String,
}

impl Violation {
    fn weight(&self) -> usize {
        self.operands.iter().map(String::len).sum()
    }
}

/// An identity not evaluated because the ring does not declare what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedIdentity {
    /// Identity skipped
    pub identity: Identity,
    /// Axioms the ring lacks
    pub missing: Vec<Axiom>,
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    declared: Capabilities,
    samples: usize,
    idempotents: usize,
    checks: BTreeMap<Identity, usize>,
    skipped: Vec<SkippedIdentity>,
    violations: Vec<Violation>,
    suppressed: usize,
}

impl VerificationReport {
    pub(crate) fn new(declared: Capabilities, samples: usize, idempotents: usize) -> Self {
        Self {
            declared,
            samples,
            idempotents,
            ..Self::default()
        }
    }

    pub(crate) fn record_check(&mut self, identity: Identity) {
        *self.checks.entry(identity).or_insert(0) += 1;
    }

    pub(crate) fn touch(&mut self, identity: Identity) {
        self.checks.entry(identity).or_insert(0);
    }

    pub(crate) fn record_skip(&mut self, identity: Identity, missing: Vec<Axiom>) {
        self.skipped.push(SkippedIdentity { identity, missing });
    }

    pub(crate) fn record_violation(&mut self, violation: Violation, cap: usize) {
        if self.violations.len() < cap {
            self.violations.push(violation);
        } else {
            self.suppressed += 1;
        }
    }

    /// No identity was violated.
    pub fn is_success(&self) -> bool {
        self.violations.is_empty() && self.suppressed == 0
    }

    /// Capabilities the ring declared.
    pub fn declared(&self) -> &Capabilities {
        &self.declared
    }

    /// Distinct sampled elements.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Sampled elements that were idempotent.
    pub fn idempotent_count(&self) -> usize {
        self.idempotents
    }

    /// Successful evaluations of `identity`; `None` if it was never attempted.
    pub fn checks(&self, identity: Identity) -> Option<usize> {
        self.checks.get(&identity).copied()
    }

    /// Identities skipped for missing axioms.
    pub fn skipped(&self) -> &[SkippedIdentity] {
        &self.skipped
    }

    /// Whether `identity` was skipped.
    pub fn was_skipped(&self, identity: Identity) -> bool {
        self.skipped.iter().any(|s| s.identity == identity)
    }

    /// Recorded violations, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations beyond the configured cap.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// The recorded violation of `identity` with the shortest operand rendering.
    pub fn minimal_counterexample(&self, identity: Identity) -> Option<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.identity == identity)
            .min_by_key(|v| v.weight())
    }

    /// `Err(VerificationFailure)` carrying the smallest counterexample overall.
    pub fn into_result(self) -> IdemResult<Self> {
        match self.violations.iter().min_by_key(|v| v.weight()) {
            Some(v) => {
                let operands = v.operands.clone();
                Err(IdemError::verification(v.identity, v.detail.clone(), operands))
            }
            None => Ok(self),
        }
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> IdemResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IdemError::serialization(e.to_string()))
    }
}
