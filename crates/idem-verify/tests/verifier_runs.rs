//! End-to-end verification runs over concrete rings

use assert_matches::assert_matches;
use idem_core::{Axiom, Capabilities, IdemError, Identity, RingCapability};
use idem_testkit::generators::{
    booleans, idempotent_int_matrices, int_matrices, integers, zmod_matrices,
};
use idem_testkit::rings::{BooleanSemiring, Integers, MatrixRing, Mislabeled, ZMod};
use idem_testkit::{
    assert_checked_at_least, assert_report_clean, init_test_logging, verify_exhaustive,
};
use idem_verify::{PropertyVerifier, SampleStrategy, VerifierConfig};
use std::io::Write;

fn lying_mod_two() -> Mislabeled<ZMod> {
    Mislabeled::new(
        ZMod::new(2),
        Capabilities::commutative_ring().with(Axiom::TorsionFree),
    )
}

#[test]
fn test_zmod_twelve_is_clean() {
    init_test_logging();
    let report = verify_exhaustive(&ZMod::new(12));

    assert_report_clean(&report);
    assert_eq!(report.sample_count(), 12);
    assert_eq!(report.idempotent_count(), 4);
    // every ordered pair of {0, 1, 4, 9}
    assert_eq!(report.checks(Identity::CommutativeCombination), Some(16));
    assert_eq!(report.checks(Identity::ComplementIff), Some(12));
    assert!(report.was_skipped(Identity::AnticommutingProductVanishes));
    assert!(report.was_skipped(Identity::AnticommutationForcesCommutation));
    assert_eq!(report.skipped().len(), 2);
}

#[test]
fn test_mod_two_matrices_are_clean() {
    init_test_logging();
    let ring = MatrixRing::new(ZMod::new(2));
    let report = verify_exhaustive(&ring);

    assert_report_clean(&report);
    assert_eq!(report.sample_count(), 16);
    assert_eq!(report.idempotent_count(), 8);
    assert_checked_at_least(&report, Identity::AnticommutingSum, 1);
    assert_checked_at_least(&report, Identity::CommutingCombination, 1);

    let skipped: Vec<_> = report.skipped().iter().map(|s| s.identity).collect();
    assert_eq!(
        skipped,
        vec![
            Identity::CommutativeCombination,
            Identity::AnticommutingProductVanishes,
            Identity::AnticommutationForcesCommutation,
        ]
    );
    assert_eq!(report.skipped()[0].missing, vec![Axiom::Commutative]);
    assert_eq!(report.skipped()[1].missing, vec![Axiom::TorsionFree]);
}

#[test]
fn test_boolean_semiring_skips_complements() {
    let report = verify_exhaustive(&BooleanSemiring);

    assert_report_clean(&report);
    assert!(report.was_skipped(Identity::ComplementInvolution));
    assert!(report.was_skipped(Identity::CommutativeCombination));
    assert_eq!(report.checks(Identity::OrthogonalDecomposition), Some(2));
    assert_eq!(report.checks(Identity::PowerStable), Some(2 * 8));
    assert_checked_at_least(&report, Identity::AnticommutingSum, 3);
}

#[test]
fn test_false_torsion_claim_is_caught() {
    init_test_logging();
    let ring = lying_mod_two();
    let report = verify_exhaustive(&ring);

    assert!(!report.is_success());
    assert!(report.skipped().is_empty());
    let minimal = report
        .minimal_counterexample(Identity::AnticommutingProductVanishes)
        .unwrap();
    assert_eq!(minimal.operands, vec!["1", "1"]);
    assert!(minimal.detail.contains("Axiom violation"));
    assert!(report
        .minimal_counterexample(Identity::AnticommutationForcesCommutation)
        .is_some());

    assert_matches!(
        report.into_result(),
        Err(IdemError::VerificationFailure {
            identity: Identity::AnticommutingProductVanishes,
            operands,
            ..
        }) if operands == vec!["1".to_string(), "1".to_string()]
    );
}

#[test]
fn test_fail_fast_stops_after_first_failing_identity() {
    let ring = lying_mod_two();
    let config = VerifierConfig {
        fail_fast: true,
        ..VerifierConfig::default()
    };
    let report = PropertyVerifier::new(config)
        .unwrap()
        .verify(&ring, SampleStrategy::exhaustive(&ring));

    assert_eq!(report.violations().len(), 1);
    let checks = report.checks(Identity::AnticommutationForcesCommutation);
    assert_eq!(checks, None);
    assert!(!report.was_skipped(Identity::AnticommutationForcesCommutation));
}

#[test]
fn test_violation_cap_counts_the_rest() {
    let ring = lying_mod_two();
    let config = VerifierConfig {
        max_violations: 1,
        ..VerifierConfig::default()
    };
    let report = PropertyVerifier::new(config)
        .unwrap()
        .verify(&ring, SampleStrategy::exhaustive(&ring));

    assert_eq!(report.violations().len(), 1);
    assert_eq!(report.suppressed(), 1);
    assert!(!report.is_success());
}

#[test]
fn test_generated_integer_matrices_are_clean() {
    init_test_logging();
    let ring = MatrixRing::new(Integers);
    let config = VerifierConfig {
        random_samples: 24,
        max_pairs: 1024,
        ..VerifierConfig::default()
    };
    let strategy = SampleStrategy::Combined(vec![
        SampleStrategy::Enumerated(vec![ring.zero(), ring.one(), ring.diag(1, 0)]),
        SampleStrategy::generated(idempotent_int_matrices(4)),
        SampleStrategy::generated(int_matrices(2)),
    ]);
    let verifier = PropertyVerifier::new(config).unwrap();
    let report = verifier.verify(&ring, strategy);

    assert_report_clean(&report);
    assert!(report.idempotent_count() >= 3);
    // 0 anticommutes with everything
    assert_checked_at_least(&report, Identity::AnticommutingProductVanishes, 3);
    assert_checked_at_least(&report, Identity::AnticommutationForcesCommutation, 3);
    assert!(report.was_skipped(Identity::CommutativeCombination));
}

#[test]
fn test_generated_mod_three_matrices_are_clean() {
    let base = ZMod::new(3);
    let ring = MatrixRing::new(base);
    let strategy = SampleStrategy::generated(zmod_matrices(base));
    let report = PropertyVerifier::default().verify(&ring, strategy);

    assert_report_clean(&report);
    assert!(report.sample_count() <= 64);
    assert!(report.was_skipped(Identity::AnticommutingProductVanishes));
}

#[test]
fn test_generated_booleans_collapse_to_two_samples() {
    let strategy = SampleStrategy::generated(booleans());
    let report = PropertyVerifier::default().verify(&BooleanSemiring, strategy);
    assert_eq!(report.sample_count(), 2);
    assert_report_clean(&report);
}

#[test]
fn test_same_seed_same_report() {
    let run = || {
        let strategy = SampleStrategy::Combined(vec![
            SampleStrategy::Enumerated(vec![0, 1]),
            SampleStrategy::generated(integers(50)),
        ]);
        PropertyVerifier::default()
            .verify(&Integers, strategy)
            .to_json()
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_config_file_drives_the_run() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "random_samples = 8\nseed = 5\nmax_power = 2").unwrap();

    let config = VerifierConfig::load_from_file(file.path()).unwrap();
    let verifier = PropertyVerifier::new(config).unwrap();
    let report = verifier.verify(&Integers, SampleStrategy::generated(integers(1000)));

    assert!(report.sample_count() <= 8);
    assert_report_clean(&report);
    let idempotents = report.idempotent_count();
    assert_eq!(report.checks(Identity::PowerStable), Some(idempotents * 2));
}

#[test]
fn test_report_json_names_identities() {
    let report = verify_exhaustive(&MatrixRing::new(ZMod::new(2)));
    let json = report.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["samples"], 16);
    assert_eq!(value["checks"]["complement-of-zero"], 1);
    assert_eq!(value["skipped"][0]["identity"], "commutative-combination");
    assert!(value["violations"].as_array().unwrap().is_empty());
}
