use crate::{
    cohort::{AgeBand, Gender},
    metric::Metric,
};

/// Population mean and standard deviation for one (gender, age band,
/// metric) cell of the reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormEntry {
    /// Population mean.
    pub mean: f64,
    /// Population standard deviation. Non-negative in every shipped
    /// entry; a zero here makes the entry unusable for ranking.
    pub sd: f64,
}

/// Normative statistics for one (gender, age band) cohort.
///
/// The sample size is shared across all metrics of the cohort: the same
/// subjects contributed every metric in the source study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortStats {
    /// Number of subjects in the cohort.
    pub n: u32,
    entries: [NormEntry; Metric::LEN],
}

impl CohortStats {
    /// Returns the entry for a metric.
    #[must_use]
    pub fn entry(&self, metric: Metric) -> &NormEntry {
        &self.entries[metric.as_usize()]
    }
}

/// Immutable normative table keyed by gender and age band.
///
/// Constructed once as a `static` and never mutated afterwards, so it
/// can be read from any number of threads without coordination.
///
/// # Examples
///
/// ```
/// use hrvnorm_reference::{AgeBand, Gender, Metric, VOSS_2015};
///
/// let entry = VOSS_2015.lookup(Gender::Male, AgeBand::Age25To34, Metric::SdNn);
/// assert_eq!(entry.mean, 49.9);
/// assert_eq!(entry.sd, 19.8);
/// assert_eq!(VOSS_2015.sample_size(Gender::Male, AgeBand::Age25To34), 330);
/// ```
#[derive(Debug)]
pub struct ReferenceTable {
    cohorts: [[CohortStats; AgeBand::LEN]; Gender::LEN],
}

impl ReferenceTable {
    /// Returns the full record for a cohort.
    #[must_use]
    pub fn cohort(&self, gender: Gender, band: AgeBand) -> &CohortStats {
        &self.cohorts[gender.as_usize()][band.as_usize()]
    }

    /// Looks up the normative entry for a cohort and metric.
    #[must_use]
    pub fn lookup(&self, gender: Gender, band: AgeBand, metric: Metric) -> &NormEntry {
        self.cohort(gender, band).entry(metric)
    }

    /// Returns the number of subjects behind a cohort's entries.
    #[must_use]
    pub fn sample_size(&self, gender: Gender, band: AgeBand) -> u32 {
        self.cohort(gender, band).n
    }
}

const fn entry(mean: f64, sd: f64) -> NormEntry {
    NormEntry { mean, sd }
}

const fn cohort(n: u32, sd_nn: NormEntry, rmssd: NormEntry, hf: NormEntry) -> CohortStats {
    CohortStats {
        n,
        entries: [sd_nn, rmssd, hf],
    }
}

/// Short-term HRV norms from Voss A, Schroeder R, Heitmann A, Peters A,
/// Perz S (2015) "Short-Term Heart Rate Variability — Influence of
/// Gender and Age in Healthy Subjects", PLoS ONE 10(3): e0118308.
///
/// 1,906 healthy subjects from the KORA S4 study (782 female, 1,124
/// male), tabulated as mean and SD per ten-year age band. Rows are
/// `[sdNN, RMSSD, HF]` per cohort.
pub static VOSS_2015: ReferenceTable = ReferenceTable {
    cohorts: [
        // female
        [
            cohort(208, entry(45.4, 18.0), entry(36.1, 18.4), entry(161.0, 167.0)),
            cohort(259, entry(42.1, 16.8), entry(30.7, 15.1), entry(121.0, 145.0)),
            cohort(158, entry(36.6, 14.7), entry(24.5, 12.3), entry(62.0, 83.0)),
            cohort(95, entry(32.2, 13.5), entry(20.3, 10.8), entry(35.0, 53.0)),
            cohort(62, entry(31.6, 13.6), entry(19.4, 10.1), entry(29.0, 38.0)),
        ],
        // male
        [
            cohort(330, entry(49.9, 19.8), entry(36.2, 18.1), entry(133.0, 174.0)),
            cohort(292, entry(44.8, 18.1), entry(30.6, 15.4), entry(89.0, 118.0)),
            cohort(235, entry(41.3, 17.6), entry(26.8, 13.7), entry(41.0, 49.0)),
            cohort(183, entry(38.3, 17.0), entry(23.4, 12.0), entry(29.0, 38.0)),
            cohort(84, entry(34.9, 15.9), entry(21.1, 11.0), entry(22.0, 29.0)),
        ],
    ],
};
