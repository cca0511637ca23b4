//! Text rendering of estimator results.
//!
//! Rounding to one decimal place and the small-sample warning live
//! here; the estimator itself returns full precision.

use hrvnorm_estimator::{NormativeRange, PercentileResult};

/// Cohorts below this size get a warning line in the report.
const SMALL_SAMPLE_THRESHOLD: u32 = 100;

/// Formats one percentile estimate as a human-readable report.
///
/// The metric is printed under whatever name the caller supplied, so
/// interactive input echoes back exactly what the user typed.
pub(crate) fn percentile_report(
    age: i32,
    gender: &str,
    metric: &str,
    value: f64,
    result: &PercentileResult,
) -> String {
    let mut report = format!(
        "For a {age}-year-old {gender}, an {metric} value of {value} is at the \
         {:.1}th percentile (95% CI: {:.1}-{:.1}th percentile)\n  \
         Sample size: n={}, Reliability: {}",
        result.percentile, result.ci_lower, result.ci_upper, result.n, result.reliability
    );
    if result.n < SMALL_SAMPLE_THRESHOLD {
        report.push_str("\n  Warning: Small sample size may affect reliability");
    }
    report
}

/// Formats one normative band as a single report line.
pub(crate) fn range_report(metric: &str, range: &NormativeRange) -> String {
    format!(
        "{metric} normative range (5th-95th percentile): {:.1} - {:.1}",
        range.p5, range.p95
    )
}
