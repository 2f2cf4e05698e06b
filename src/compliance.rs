//! Compliance comparison between agreed fee and reference value.
//!
//! The agreed fee falls back to the reference value when absent or
//! unparseable; the comparison against the statutory minimum drives the
//! Legge 49/2023 compliance verdict.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ComplianceStatus, ComplianceVerdict};

/// Compares an agreed fee against the computed reference and minimum.
///
/// - The effective agreed fee is `agreed` when present, else `reference`.
/// - `delta` is agreed minus reference, when both are known.
/// - `percent_delta` is computed only for a non-zero reference and rounded
///   to two decimals.
/// - The status is below-threshold when the effective fee is under the
///   minimum (or, lacking a minimum, when the delta is negative);
///   undetermined when neither an agreed fee nor a delta is computable.
///
/// # Examples
///
/// ```
/// use compenso_engine::compliance::compare_compliance;
/// use compenso_engine::models::ComplianceStatus;
/// use rust_decimal::Decimal;
///
/// let verdict = compare_compliance(
///     Some(Decimal::from(1000)),
///     Some(Decimal::from(800)),
///     Some(Decimal::from(700)),
/// );
/// assert_eq!(verdict.status, ComplianceStatus::BelowThreshold);
/// assert_eq!(verdict.delta, Some(Decimal::from(-300)));
/// ```
pub fn compare_compliance(
    reference: Option<Decimal>,
    minimum: Option<Decimal>,
    agreed: Option<Decimal>,
) -> ComplianceVerdict {
    let effective = agreed.or(reference);

    let delta = match (effective, reference) {
        (Some(fee), Some(reference)) => Some(fee - reference),
        _ => None,
    };

    let percent_delta = match (delta, reference) {
        (Some(delta), Some(reference)) if !reference.is_zero() => Some(
            (delta / reference * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ),
        _ => None,
    };

    let below_threshold = match (effective, minimum) {
        (Some(fee), Some(minimum)) => fee < minimum,
        _ => delta.map(|d| d < Decimal::ZERO).unwrap_or(false),
    };

    let status = if effective.is_some() && (minimum.is_some() || delta.is_some()) {
        if below_threshold {
            ComplianceStatus::BelowThreshold
        } else {
            ComplianceStatus::Compliant
        }
    } else {
        ComplianceStatus::Undetermined
    };

    ComplianceVerdict {
        delta,
        percent_delta,
        status,
    }
}
