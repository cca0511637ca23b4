//! Normative heart-rate-variability reference data.
//!
//! This crate holds the population table that the estimator crates rank
//! measurements against, plus the key-normalization helpers that turn
//! raw caller input (an age in years, a gender name, a metric name)
//! into table coordinates:
//!
//! - [`cohort`]: [`Gender`] and [`AgeBand`] — who the reference cohorts are
//! - [`metric`]: [`Metric`] — which HRV measures are tabulated
//! - [`table`]: [`ReferenceTable`] and the [`VOSS_2015`] norms
//!
//! # Examples
//!
//! ## Resolving raw input into a lookup key
//!
//! ```
//! use hrvnorm_reference::{AgeBand, Gender, LookupKey, Metric};
//!
//! let key = LookupKey::resolve(30, "Male", "sdnn").unwrap();
//! assert_eq!(key.gender, Gender::Male);
//! assert_eq!(key.band, AgeBand::Age25To34);
//! assert_eq!(key.metric, Metric::SdNn);
//! ```
//!
//! ## Reading the reference table
//!
//! ```
//! use hrvnorm_reference::{LookupKey, VOSS_2015};
//!
//! let key = LookupKey::resolve(40, "female", "RMSSD").unwrap();
//! let entry = VOSS_2015.lookup(key.gender, key.band, key.metric);
//! assert_eq!(entry.mean, 30.7);
//! ```

pub use self::{
    cohort::{AgeBand, Gender},
    metric::Metric,
    table::{CohortStats, NormEntry, ReferenceTable, VOSS_2015},
};

pub mod cohort;
pub mod metric;
pub mod table;

/// Why a request could not be resolved against the reference data.
///
/// Every failure is caller-recoverable; none of these abort anything
/// beyond the single request that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NormsError {
    /// The age falls outside the bands covered by the reference data.
    #[display("age is outside the study's range (25-74 years)")]
    AgeOutOfRange,
    /// The gender is not one of the reference cohort genders.
    #[display("gender must be 'male' or 'female'")]
    InvalidGender,
    /// The metric has no entry in the reference data.
    #[display("the metric is not available in the reference data")]
    MetricUnavailable,
    /// The resolved entry has zero standard deviation, so no z-score
    /// exists for it.
    #[display("standard deviation is zero, cannot compute a percentile")]
    DegenerateVariance,
}

/// Fully resolved request key: cohort coordinates plus metric.
///
/// Constructed per request from raw caller input and consumed
/// immediately; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupKey {
    /// Gender of the cohort.
    pub gender: Gender,
    /// Age band of the cohort.
    pub band: AgeBand,
    /// Metric to read.
    pub metric: Metric,
}

impl LookupKey {
    /// Resolves raw caller input into a key.
    ///
    /// Checks run in order: age first, then gender, then metric, so a
    /// request that is wrong in several ways reports the earliest
    /// failure.
    pub fn resolve(age: i32, gender: &str, metric: &str) -> Result<Self, NormsError> {
        let band = AgeBand::from_age(age).ok_or(NormsError::AgeOutOfRange)?;
        let gender = Gender::parse(gender).ok_or(NormsError::InvalidGender)?;
        let metric = Metric::normalize(metric).ok_or(NormsError::MetricUnavailable)?;
        Ok(Self {
            gender,
            band,
            metric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_mixed_case_input() {
        let key = LookupKey::resolve(55, "FEMALE", "Hf").unwrap();
        assert_eq!(key.gender, Gender::Female);
        assert_eq!(key.band, AgeBand::Age55To64);
        assert_eq!(key.metric, Metric::Hf);
    }

    #[test]
    fn resolve_reports_the_earliest_failure() {
        // All three inputs are bad; the age check wins.
        assert_eq!(
            LookupKey::resolve(80, "martian", "LF"),
            Err(NormsError::AgeOutOfRange)
        );
        // Valid age, bad gender and metric; the gender check wins.
        assert_eq!(
            LookupKey::resolve(30, "martian", "LF"),
            Err(NormsError::InvalidGender)
        );
        assert_eq!(
            LookupKey::resolve(30, "male", "LF"),
            Err(NormsError::MetricUnavailable)
        );
    }

    #[test]
    fn resolve_rejects_ages_just_outside_the_bands() {
        assert_eq!(
            LookupKey::resolve(24, "male", "sdNN"),
            Err(NormsError::AgeOutOfRange)
        );
        assert_eq!(
            LookupKey::resolve(75, "male", "sdNN"),
            Err(NormsError::AgeOutOfRange)
        );
    }
}
