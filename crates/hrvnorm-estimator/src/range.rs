use hrvnorm_reference::{LookupKey, Metric, NormsError, VOSS_2015};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// The normative 5th-95th percentile band of a reference cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormativeRange {
    /// Value at the 5th percentile, after the metric's physiological
    /// floor.
    pub p5: f64,
    /// Value at the 95th percentile. Never floored.
    pub p95: f64,
}

/// Computes the normative 5th-95th percentile band for a cohort.
///
/// The lower bound is clamped to a small metric-specific floor: none of
/// these metrics can be at or below zero in a living subject. The upper
/// bound is left untouched.
///
/// # Examples
///
/// ```
/// use hrvnorm_estimator::normative_range;
///
/// let range = normative_range(40, "female", "RMSSD").unwrap();
/// assert_eq!(format!("{:.1}", range.p5), "5.9");
/// assert_eq!(format!("{:.1}", range.p95), "55.5");
/// ```
pub fn normative_range(age: i32, gender: &str, metric: &str) -> Result<NormativeRange, NormsError> {
    let key = LookupKey::resolve(age, gender, metric)?;
    let entry = VOSS_2015.lookup(key.gender, key.band, key.metric);

    let standard = Normal::standard();
    let z5 = standard.inverse_cdf(0.05);
    let z95 = standard.inverse_cdf(0.95);

    let p5 = (entry.mean + z5 * entry.sd).max(range_floor(key.metric));
    let p95 = entry.mean + z95 * entry.sd;
    Ok(NormativeRange { p5, p95 })
}

/// Computes only the value at the cohort's 5th percentile.
///
/// Unlike [`normative_range`], the lower clamp here is plain zero, not
/// the per-metric floor. The two operations deliberately keep their
/// distinct clamps.
///
/// # Examples
///
/// ```
/// use hrvnorm_estimator::fifth_percentile_value;
///
/// let bound = fifth_percentile_value(40, "female", "RMSSD").unwrap();
/// assert_eq!(format!("{bound:.1}"), "5.9");
/// ```
pub fn fifth_percentile_value(age: i32, gender: &str, metric: &str) -> Result<f64, NormsError> {
    let key = LookupKey::resolve(age, gender, metric)?;
    let entry = VOSS_2015.lookup(key.gender, key.band, key.metric);

    let z5 = Normal::standard().inverse_cdf(0.05);
    Ok((entry.mean + z5 * entry.sd).max(0.0))
}

/// Measurement-precision floor for the lower reference bound.
const fn range_floor(metric: Metric) -> f64 {
    match metric {
        Metric::SdNn => 0.1,
        Metric::Rmssd => 1.0,
        Metric::Hf => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use hrvnorm_reference::{AgeBand, Gender};

    use super::*;

    const BAND_AGES: [(i32, AgeBand); 5] = [
        (30, AgeBand::Age25To34),
        (40, AgeBand::Age35To44),
        (50, AgeBand::Age45To54),
        (60, AgeBand::Age55To64),
        (70, AgeBand::Age65To74),
    ];

    #[test]
    fn forty_year_old_female_rmssd_band() {
        let range = normative_range(40, "female", "RMSSD").unwrap();
        assert!((range.p5 - 5.86).abs() < 0.01);
        assert!((range.p95 - 55.54).abs() < 0.01);
    }

    #[test]
    fn negative_raw_bounds_floor_at_the_metric_minimum() {
        // HF for the female 55-64 cohort: 35 - 1.6449 * 53 is far below
        // zero, so the band starts at the HF floor.
        let range = normative_range(60, "female", "HF").unwrap();
        assert_eq!(range.p5, 5.0);
        assert!(range.p95 > 100.0);
    }

    #[test]
    fn lower_bounds_never_dip_below_their_floors() {
        for gender in Gender::ALL {
            for (age, _) in BAND_AGES {
                for metric in Metric::ALL {
                    let range =
                        normative_range(age, &gender.to_string(), &metric.to_string()).unwrap();
                    assert!(
                        range.p5 >= range_floor(metric),
                        "{gender} {age} {metric}: p5 {} under floor",
                        range.p5
                    );
                    assert!(range.p95 > range.p5);
                }
            }
        }
    }

    #[test]
    fn upper_bound_is_never_floored() {
        for gender in Gender::ALL {
            for (age, band) in BAND_AGES {
                for metric in Metric::ALL {
                    let entry = VOSS_2015.lookup(gender, band, metric);
                    let range =
                        normative_range(age, &gender.to_string(), &metric.to_string()).unwrap();
                    let expected = entry.mean + 1.644_853_6 * entry.sd;
                    assert!((range.p95 - expected).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn single_bound_clamps_at_zero_instead() {
        // HF for the male 65-74 cohort: 22 - 1.6449 * 29 is negative.
        let bound = fifth_percentile_value(70, "male", "HF").unwrap();
        assert_eq!(bound, 0.0);

        // The band operation floors the same quantity at 5.0.
        let range = normative_range(70, "male", "HF").unwrap();
        assert_eq!(range.p5, 5.0);
    }

    #[test]
    fn single_bound_matches_the_unfloored_quantile_when_positive() {
        let bound = fifth_percentile_value(30, "male", "sdNN").unwrap();
        // 49.9 - 1.6449 * 19.8
        assert!((bound - 17.33).abs() < 0.01);
    }

    #[test]
    fn range_requests_share_the_estimator_failure_taxonomy() {
        assert_eq!(
            normative_range(80, "male", "sdNN"),
            Err(NormsError::AgeOutOfRange)
        );
        assert_eq!(
            normative_range(40, "martian", "sdNN"),
            Err(NormsError::InvalidGender)
        );
        assert_eq!(
            normative_range(40, "male", "pNN50"),
            Err(NormsError::MetricUnavailable)
        );
        assert_eq!(
            fifth_percentile_value(20, "male", "sdNN"),
            Err(NormsError::AgeOutOfRange)
        );
    }

    #[test]
    fn metric_names_are_case_insensitive() {
        let canonical = normative_range(40, "female", "RMSSD").unwrap();
        let lower = normative_range(40, "female", "rmssd").unwrap();
        assert_eq!(canonical, lower);
    }
}
