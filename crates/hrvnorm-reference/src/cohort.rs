use serde::{Deserialize, Serialize};

/// Gender of a reference cohort.
///
/// The reference data tabulates every metric separately for female and
/// male cohorts; no other categories exist in the source study.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female cohort.
    #[display("female")]
    Female = 0,
    /// Male cohort.
    #[display("male")]
    Male = 1,
}

impl Gender {
    /// Number of genders covered by the reference data.
    pub const LEN: usize = 2;
    /// All genders, in table order.
    pub const ALL: [Gender; Gender::LEN] = [Gender::Female, Gender::Male];

    /// Parses a gender name, ignoring ASCII case.
    ///
    /// Only `"male"` and `"female"` are recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrvnorm_reference::Gender;
    ///
    /// assert_eq!(Gender::parse("Female"), Some(Gender::Female));
    /// assert_eq!(Gender::parse("MALE"), Some(Gender::Male));
    /// assert_eq!(Gender::parse("martian"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else if name.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else {
            None
        }
    }

    pub(crate) const fn as_usize(self) -> usize {
        self as usize
    }
}

/// Ten-year age band of a reference cohort.
///
/// The five bands are contiguous and inclusive on both ends, covering
/// ages 25 through 74. Ages outside that span have no cohort.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum AgeBand {
    /// Ages 25-34.
    #[display("25-34")]
    #[serde(rename = "25-34")]
    Age25To34 = 0,
    /// Ages 35-44.
    #[display("35-44")]
    #[serde(rename = "35-44")]
    Age35To44 = 1,
    /// Ages 45-54.
    #[display("45-54")]
    #[serde(rename = "45-54")]
    Age45To54 = 2,
    /// Ages 55-64.
    #[display("55-64")]
    #[serde(rename = "55-64")]
    Age55To64 = 3,
    /// Ages 65-74.
    #[display("65-74")]
    #[serde(rename = "65-74")]
    Age65To74 = 4,
}

impl AgeBand {
    /// Number of age bands covered by the reference data.
    pub const LEN: usize = 5;
    /// All age bands, youngest first.
    pub const ALL: [AgeBand; AgeBand::LEN] = [
        AgeBand::Age25To34,
        AgeBand::Age35To44,
        AgeBand::Age45To54,
        AgeBand::Age55To64,
        AgeBand::Age65To74,
    ];
    /// Youngest age covered by the reference data.
    pub const MIN_AGE: i32 = 25;
    /// Oldest age covered by the reference data.
    pub const MAX_AGE: i32 = 74;

    /// Resolves an age in years to its band by inclusive range
    /// membership.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrvnorm_reference::AgeBand;
    ///
    /// assert_eq!(AgeBand::from_age(30), Some(AgeBand::Age25To34));
    /// assert_eq!(AgeBand::from_age(34), Some(AgeBand::Age25To34));
    /// assert_eq!(AgeBand::from_age(35), Some(AgeBand::Age35To44));
    /// assert_eq!(AgeBand::from_age(74), Some(AgeBand::Age65To74));
    /// assert_eq!(AgeBand::from_age(24), None);
    /// assert_eq!(AgeBand::from_age(75), None);
    /// ```
    #[must_use]
    pub fn from_age(age: i32) -> Option<Self> {
        match age {
            25..=34 => Some(Self::Age25To34),
            35..=44 => Some(Self::Age35To44),
            45..=54 => Some(Self::Age45To54),
            55..=64 => Some(Self::Age55To64),
            65..=74 => Some(Self::Age65To74),
            _ => None,
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
    fn gender_parsing_is_case_insensitive() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
        assert_eq!(Gender::parse("fEmAlE"), Some(Gender::Female));
    }

    #[test]
    fn unknown_genders_do_not_parse() {
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("m"), None);
        assert_eq!(Gender::parse("males"), None);
        assert_eq!(Gender::parse("martian"), None);
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(AgeBand::from_age(25), Some(AgeBand::Age25To34));
        assert_eq!(AgeBand::from_age(34), Some(AgeBand::Age25To34));
        assert_eq!(AgeBand::from_age(44), Some(AgeBand::Age35To44));
        assert_eq!(AgeBand::from_age(45), Some(AgeBand::Age45To54));
        assert_eq!(AgeBand::from_age(64), Some(AgeBand::Age55To64));
        assert_eq!(AgeBand::from_age(65), Some(AgeBand::Age65To74));
        assert_eq!(AgeBand::from_age(74), Some(AgeBand::Age65To74));
    }

    #[test]
    fn ages_outside_the_study_have_no_band() {
        assert_eq!(AgeBand::from_age(-1), None);
        assert_eq!(AgeBand::from_age(0), None);
        assert_eq!(AgeBand::from_age(24), None);
        assert_eq!(AgeBand::from_age(75), None);
        assert_eq!(AgeBand::from_age(120), None);
    }

    #[test]
    fn every_covered_age_maps_to_exactly_one_band() {
        for age in AgeBand::MIN_AGE..=AgeBand::MAX_AGE {
            assert!(AgeBand::from_age(age).is_some(), "age {age} has no band");
        }
    }

    #[test]
    fn display_labels_match_the_source_study() {
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(AgeBand::Age25To34.to_string(), "25-34");
        assert_eq!(AgeBand::Age65To74.to_string(), "65-74");
    }
}
