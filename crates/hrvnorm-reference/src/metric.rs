use serde::{Deserialize, Serialize};

/// A heart-rate-variability metric covered by the reference data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Metric {
    /// Standard deviation of all NN intervals (overall variability), in ms.
    #[display("sdNN")]
    #[serde(rename = "sdNN")]
    SdNn = 0,
    /// Root mean square of successive differences (short-term
    /// beat-to-beat variability), in ms.
    #[display("RMSSD")]
    #[serde(rename = "RMSSD")]
    Rmssd = 1,
    /// High-frequency spectral power, in ms².
    #[display("HF")]
    #[serde(rename = "HF")]
    Hf = 2,
}

impl Metric {
    /// Number of metrics tabulated per cohort.
    pub const LEN: usize = 3;
    /// All metrics, in table order.
    pub const ALL: [Metric; Metric::LEN] = [Metric::SdNn, Metric::Rmssd, Metric::Hf];

    /// Maps a metric name to its canonical tag, ignoring ASCII case.
    ///
    /// Names the reference data does not cover yield `None`; the caller
    /// decides how to classify that miss.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrvnorm_reference::Metric;
    ///
    /// assert_eq!(Metric::normalize("sdnn"), Some(Metric::SdNn));
    /// assert_eq!(Metric::normalize("RMSSD"), Some(Metric::Rmssd));
    /// assert_eq!(Metric::normalize("hf"), Some(Metric::Hf));
    /// assert_eq!(Metric::normalize("LF"), None);
    /// ```
    #[must_use]
    pub fn normalize(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("sdnn") {
            Some(Self::SdNn)
        } else if name.eq_ignore_ascii_case("rmssd") {
            Some(Self::Rmssd)
        } else if name.eq_ignore_ascii_case("hf") {
            Some(Self::Hf)
        } else {
            None
        }
    }

    pub(crate) const fn as_usize(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(Metric::normalize("sdNN"), Some(Metric::SdNn));
        assert_eq!(Metric::normalize("SDNN"), Some(Metric::SdNn));
        assert_eq!(Metric::normalize("rmssd"), Some(Metric::Rmssd));
        assert_eq!(Metric::normalize("rMSSD"), Some(Metric::Rmssd));
        assert_eq!(Metric::normalize("Hf"), Some(Metric::Hf));
    }

    #[test]
    fn uncovered_metric_names_do_not_normalize() {
        assert_eq!(Metric::normalize(""), None);
        assert_eq!(Metric::normalize("sdann"), None);
        assert_eq!(Metric::normalize("LF"), None);
        assert_eq!(Metric::normalize("pNN50"), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::normalize(&metric.to_string()), Some(metric));
        }
    }
}
