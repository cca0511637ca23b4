use hrvnorm_reference::{LookupKey, NormsError, VOSS_2015};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Qualitative grade for how large the reference cohort behind an
/// estimate was.
///
/// Tiers are ordered: `Low < Moderate < Good < High`.
///
/// # Examples
///
/// ```
/// use hrvnorm_estimator::Reliability;
///
/// assert_eq!(Reliability::from_sample_size(330), Reliability::High);
/// assert!(Reliability::Low < Reliability::High);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
pub enum Reliability {
    /// Fewer than 50 subjects.
    #[display("Low")]
    Low,
    /// 50 to 99 subjects.
    #[display("Moderate")]
    Moderate,
    /// 100 to 199 subjects.
    #[display("Good")]
    Good,
    /// 200 subjects or more.
    #[display("High")]
    High,
}

impl Reliability {
    /// Grades a cohort sample size.
    #[must_use]
    pub fn from_sample_size(n: u32) -> Self {
        if n < 50 {
            Self::Low
        } else if n < 100 {
            Self::Moderate
        } else if n < 200 {
            Self::Good
        } else {
            Self::High
        }
    }
}

/// Where a measured value falls within its reference cohort.
///
/// All fields carry full precision; rounding for display is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileResult {
    /// Percentile rank of the measured value (0-100).
    pub percentile: f64,
    /// Lower bound of the 95% confidence interval on the rank.
    pub ci_lower: f64,
    /// Upper bound of the 95% confidence interval on the rank.
    pub ci_upper: f64,
    /// Number of subjects in the reference cohort.
    pub n: u32,
    /// Sample-size grade for the cohort.
    pub reliability: Reliability,
}

/// Ranks a measured HRV value against its reference cohort.
///
/// The percentile is the share of the cohort expected to fall below
/// `value`, from a normal model of the cohort distribution. The
/// confidence interval reflects uncertainty in the cohort *mean*
/// (t-distribution on the standard error of the mean), mapped onto the
/// percentile scale so that the band widens toward the tails rather
/// than narrowing.
///
/// # Examples
///
/// ```
/// use hrvnorm_estimator::{Reliability, estimate};
///
/// let result = estimate(30, "male", "sdNN", 50.0).unwrap();
/// assert_eq!(format!("{:.1}", result.percentile), "50.2");
/// assert_eq!(result.reliability, Reliability::High);
/// ```
///
/// Requests outside the reference population are rejected:
///
/// ```
/// use hrvnorm_estimator::{NormsError, estimate};
///
/// assert_eq!(
///     estimate(80, "male", "sdNN", 50.0),
///     Err(NormsError::AgeOutOfRange)
/// );
/// ```
pub fn estimate(
    age: i32,
    gender: &str,
    metric: &str,
    value: f64,
) -> Result<PercentileResult, NormsError> {
    let key = LookupKey::resolve(age, gender, metric)?;
    let cohort = VOSS_2015.cohort(key.gender, key.band);
    let entry = cohort.entry(key.metric);
    let n = cohort.n;
    if entry.sd == 0.0 {
        return Err(NormsError::DegenerateVariance);
    }

    let standard = Normal::standard();
    let z = (value - entry.mean) / entry.sd;
    let percentile = standard.cdf(z) * 100.0;

    // 95% confidence band on the cohort mean.
    let sem = entry.sd / f64::from(n).sqrt();
    let t_critical = students_t_975(n);
    let ci_lower_mean = entry.mean - t_critical * sem;
    let ci_upper_mean = entry.mean + t_critical * sem;

    // Re-ranking against the shifted means swaps the bounds: the higher
    // mean estimate yields the lower rank.
    let ci_lower = standard.cdf((value - ci_upper_mean) / entry.sd) * 100.0;
    let ci_upper = standard.cdf((value - ci_lower_mean) / entry.sd) * 100.0;

    Ok(PercentileResult {
        percentile,
        ci_lower,
        ci_upper,
        n,
        reliability: Reliability::from_sample_size(n),
    })
}

/// Two-sided 95% critical value of Student's t with `n - 1` degrees of
/// freedom.
fn students_t_975(n: u32) -> f64 {
    // Every cohort in the reference table has n well above 1, so the
    // distribution is always constructible.
    let dist = StudentsT::new(0.0, 1.0, f64::from(n - 1)).unwrap();
    dist.inverse_cdf(0.975)
}
