//! Standard assertion helpers for tests

use idem_verify::VerificationReport;

/// Assert that `value` is idempotent in `ring`
#[macro_export]
macro_rules! assert_idempotent {
    ($ring:expr, $value:expr) => {{
        let value = &$value;
        assert!(
            $crate::idem_core::is_idempotent(&$ring, value),
            "Expected {:?} to be idempotent",
            value
        )
    }};
}

/// Assert that a result failed with `CapabilityMismatch` listing exactly `missing`
#[macro_export]
macro_rules! assert_capability_mismatch {
    ($result:expr, $missing:expr) => {
        match $result {
            Err($crate::idem_core::IdemError::CapabilityMismatch { missing, .. }) => {
                assert_eq!(missing, $missing, "Unexpected missing axioms")
            }
            Err(other) => panic!("Expected CapabilityMismatch, got error: {other}"),
            Ok(value) => panic!("Expected CapabilityMismatch, got Ok({:?})", value),
        }
    };
}

/// Assert that a verification run found no violations
///
/// Prints the full JSON report on failure.
pub fn assert_report_clean(report: &VerificationReport) {
    assert!(
        report.is_success(),
        "Verification reported violations:\n{}",
        report.to_json().unwrap_or_default()
    );
}

/// Assert that `identity` was evaluated at least `min` times
pub fn assert_checked_at_least(
    report: &VerificationReport,
    identity: idem_core::Identity,
    min: usize,
) {
    let checks = report.checks(identity).unwrap_or(0);
    assert!(
        checks >= min,
        "Expected at least {min} checks of {identity}, found {checks}"
    );
}
