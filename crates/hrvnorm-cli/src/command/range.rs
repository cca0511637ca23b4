use hrvnorm_estimator::{NormativeRange, normative_range};
use hrvnorm_reference::{AgeBand, Gender, Metric, NormsError};
use serde::Serialize;

use crate::render;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RangeArg {
    /// Age in years (25-74)
    age: i32,
    /// Gender of the reference cohort (male/female)
    gender: String,
    /// Metrics to report (defaults to all of sdNN, RMSSD, HF)
    metrics: Vec<String>,
    /// Emit the ranges as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RangeReport {
    age: i32,
    gender: Gender,
    age_band: AgeBand,
    ranges: Vec<MetricRange>,
}

#[derive(Debug, Serialize)]
struct MetricRange {
    metric: Metric,
    #[serde(flatten)]
    range: NormativeRange,
}

pub(crate) fn run(arg: &RangeArg) -> anyhow::Result<()> {
    let RangeArg {
        age,
        gender,
        metrics,
        json,
    } = arg;

    let names = if metrics.is_empty() {
        Metric::ALL.iter().map(ToString::to_string).collect()
    } else {
        metrics.clone()
    };

    if *json {
        return print_json(*age, gender, &names);
    }

    for name in &names {
        match normative_range(*age, gender, name) {
            Ok(range) => println!("{}", render::range_report(name, &range)),
            Err(err) => println!("Error: {err}"),
        }
    }
    Ok(())
}

fn print_json(age: i32, gender: &str, names: &[String]) -> anyhow::Result<()> {
    let band = AgeBand::from_age(age).ok_or(NormsError::AgeOutOfRange)?;
    let cohort_gender = Gender::parse(gender).ok_or(NormsError::InvalidGender)?;

    let ranges = names
        .iter()
        .map(|name| {
            let metric = Metric::normalize(name).ok_or(NormsError::MetricUnavailable)?;
            let range = normative_range(age, gender, name)?;
            Ok(MetricRange { metric, range })
        })
        .collect::<Result<Vec<_>, NormsError>>()?;

    let report = RangeReport {
        age,
        gender: cohort_gender,
        age_band: band,
        ranges,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
