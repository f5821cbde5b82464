//! Property verifier
//!
//! Drives sampled elements of a concrete ring through every catalogue identity
//! the ring's declared capabilities admit. Relational preconditions select the
//! operands (commuting pairs, anticommuting pairs, orthogonal pairs summing to
//! one); each evaluation that returns an error becomes a [`Violation`].

use crate::config::VerifierConfig;
use crate::report::{VerificationReport, Violation};
use crate::sampling::SampleStrategy;
use idem_core::errors::render_operands;
use idem_core::{
    anticommutes, commutes, identities, IdemResult, Idempotent, Identity, RingCapability,
};

/// Verifier entry point.
#[derive(Debug, Clone, Default)]
pub struct PropertyVerifier {
    config: VerifierConfig,
}

impl PropertyVerifier {
    /// Create a verifier, rejecting an invalid configuration.
    pub fn new(config: VerifierConfig) -> IdemResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Check every applicable identity against samples of `ring`.
    pub fn verify<R: RingCapability>(
        &self,
        ring: &R,
        strategy: SampleStrategy<R::Elem>,
    ) -> VerificationReport {
        let samples = strategy.draw(&self.config);
        let idempotents: Vec<Idempotent<'_, R>> = samples
            .iter()
            .filter_map(|a| Idempotent::new(ring, a.clone()).ok())
            .collect();

        let declared = ring.capabilities();
        let mut run = Run {
            ring,
            config: &self.config,
            report: VerificationReport::new(declared.clone(), samples.len(), idempotents.len()),
            samples,
            idempotents,
        };

        for identity in Identity::CATALOGUE {
            if self.config.fail_fast && !run.report.is_success() {
                tracing::debug!(%identity, "fail-fast: remaining identities not evaluated");
                break;
            }
            let missing = declared.missing(&identity.required_capabilities());
            if !missing.is_empty() {
                tracing::debug!(%identity, ?missing, "identity skipped");
                run.report.record_skip(identity, missing);
                continue;
            }
            run.report.touch(identity);
            run.check(identity);
            tracing::debug!(
                %identity,
                checks = run.report.checks(identity).unwrap_or(0),
                "identity evaluated"
            );
        }

        let report = run.report;
        tracing::info!(
            declared = %report.declared(),
            samples = report.sample_count(),
            idempotents = report.idempotent_count(),
            skipped = report.skipped().len(),
            violations = report.violations().len() + report.suppressed(),
            "verification finished"
        );
        report
    }
}

struct Run<'r, 'c, R: RingCapability> {
    ring: &'r R,
    config: &'c VerifierConfig,
    report: VerificationReport,
    samples: Vec<R::Elem>,
    idempotents: Vec<Idempotent<'r, R>>,
}

impl<'r, R: RingCapability> Run<'r, '_, R> {
    fn check(&mut self, identity: Identity) {
        let ring = self.ring;
        match identity {
            Identity::ComplementInvolution => {
                for e in self.idempotents.clone() {
                    let result = identities::complement_involution(&e);
                    self.record(identity, result, &[e.value()]);
                }
            }
            Identity::ComplementOfZero => {
                self.record(identity, identities::complement_of_zero(ring), &[]);
            }
            Identity::ComplementOfOne => {
                self.record(identity, identities::complement_of_one(ring), &[]);
            }
            Identity::AnnihilatesComplement => {
                for e in self.idempotents.clone() {
                    let result = identities::annihilates_complement(&e);
                    self.record(identity, result, &[e.value()]);
                }
            }
            Identity::IdempotentIffLeftAnnihilates => {
                for a in self.samples.clone() {
                    let result = identities::idempotent_iff_left_annihilates(ring, &a);
                    self.record(identity, result, &[&a]);
                }
            }
            Identity::IdempotentIffRightAnnihilates => {
                for a in self.samples.clone() {
                    let result = identities::idempotent_iff_right_annihilates(ring, &a);
                    self.record(identity, result, &[&a]);
                }
            }
            Identity::ComplementIff => {
                for a in self.samples.clone() {
                    self.record(identity, identities::complement_iff(ring, &a), &[&a]);
                }
            }
            Identity::OrthogonalDecomposition => {
                for (a, b) in self.orthogonal_pairs() {
                    let result = identities::orthogonal_decomposition(ring, &a, &b);
                    self.record(identity, result, &[&a, &b]);
                }
            }
            Identity::CommutingCombination => {
                for (a, b) in self.idempotent_pairs(|a, b| commutes(ring, a, b)) {
                    let result = identities::commuting_combination(&a, &b);
                    self.record(identity, result, &[a.value(), b.value()]);
                }
            }
            Identity::CommutativeCombination => {
                for (a, b) in self.idempotent_pairs(|_, _| true) {
                    let result = identities::commutative_combination(&a, &b);
                    self.record(identity, result, &[a.value(), b.value()]);
                }
            }
            Identity::CommutingProduct => {
                for (a, b) in self.idempotent_pairs(|a, b| commutes(ring, a, b)) {
                    let result = identities::commuting_product(&a, &b);
                    self.record(identity, result, &[a.value(), b.value()]);
                }
            }
            Identity::PowerStable => {
                for e in self.idempotents.clone() {
                    for n in 1..=self.config.max_power {
                        let result = identities::power_stable(&e, n);
                        let operands = vec![format!("{:?}", e.value()), n.to_string()];
                        self.record_with(identity, result, operands);
                    }
                }
            }
            Identity::AnticommutingSum => {
                for (a, b) in self.idempotent_pairs(|a, b| anticommutes(ring, a, b)) {
                    let result = identities::anticommuting_sum(&a, &b);
                    self.record(identity, result, &[a.value(), b.value()]);
                }
            }
            Identity::AnticommutingProductVanishes => {
                for (a, b) in self.anticommuting_mixed_pairs() {
                    let result = identities::anticommuting_product_vanishes(&a, &b);
                    self.record(identity, result, &[a.value(), &b]);
                }
            }
            Identity::AnticommutationForcesCommutation => {
                for (a, b) in self.anticommuting_mixed_pairs() {
                    let result = identities::anticommutation_forces_commutation(&a, &b);
                    self.record(identity, result, &[a.value(), &b]);
                }
            }
            Identity::Idempotent
            | Identity::ZeroIdempotent
            | Identity::OneIdempotent
            | Identity::Complement => {}
        }
    }

    fn record<T>(&mut self, identity: Identity, result: IdemResult<T>, operands: &[&R::Elem]) {
        self.record_with(identity, result, render_operands(operands));
    }

    fn record_with<T>(&mut self, identity: Identity, result: IdemResult<T>, operands: Vec<String>) {
        match result {
            Ok(_) => self.report.record_check(identity),
            Err(err) => {
                tracing::warn!(%identity, ?operands, error = %err, "identity violated");
                self.report.record_violation(
                    Violation {
                        identity,
                        operands,
                        detail: err.to_string(),
                    },
                    self.config.max_violations,
                );
            }
        }
    }

    fn idempotent_pairs<F>(&self, keep: F) -> Vec<(Idempotent<'r, R>, Idempotent<'r, R>)>
    where
        F: Fn(&R::Elem, &R::Elem) -> bool,
    {
        index_pairs(self.idempotents.len(), self.config.max_pairs)
            .map(|(i, j)| (&self.idempotents[i], &self.idempotents[j]))
            .filter(|(a, b)| keep(a.value(), b.value()))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    fn anticommuting_mixed_pairs(&self) -> Vec<(Idempotent<'r, R>, R::Elem)> {
        let ring = self.ring;
        self.idempotents
            .iter()
            .flat_map(|a| self.samples.iter().map(move |b| (a, b)))
            .take(self.config.max_pairs)
            .filter(|(a, b)| anticommutes(ring, a.value(), b))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }

    /// Sampled pairs with `a*b = 0` and `a + b = 1`, plus `(e, 1 - e)` for
    /// each sampled idempotent when the ring can subtract.
    fn orthogonal_pairs(&self) -> Vec<(R::Elem, R::Elem)> {
        let ring = self.ring;
        let one = ring.one();
        let candidates = index_pairs(self.samples.len(), self.config.max_pairs);
        let mut pairs: Vec<(R::Elem, R::Elem)> = candidates
            .map(|(i, j)| (&self.samples[i], &self.samples[j]))
            .filter(|(a, b)| ring.is_zero(&ring.mul(a, b)) && ring.add(a, b) == one)
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        for e in &self.idempotents {
            if let Some(f) = ring.sub(&one, e.value()) {
                let pair = (e.value().clone(), f);
                if !pairs.contains(&pair) {
                    pairs.push(pair);
                }
            }
        }
        pairs
    }
}

/// Ordered pairs `(i, j)` of indices below `len`, at most `max`.
fn index_pairs(len: usize, max: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len)
        .flat_map(move |i| (0..len).map(move |j| (i, j)))
        .take(max)
}
