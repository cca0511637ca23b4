use hrvnorm_estimator::{PercentileResult, estimate, fifth_percentile_value};
use hrvnorm_reference::{AgeBand, Gender, Metric, NormsError};
use serde::Serialize;

use crate::render;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EstimateArg {
    /// Age in years (25-74)
    age: i32,
    /// Gender of the reference cohort (male/female)
    gender: String,
    /// Measured sdNN value in ms
    sdnn: f64,
    /// Measured RMSSD value in ms
    rmssd: f64,
    /// Measured HF power in ms^2
    hf: Option<f64>,
    /// Emit the reports as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct EstimateReport {
    age: i32,
    gender: Gender,
    age_band: AgeBand,
    metrics: Vec<MetricReport>,
}

#[derive(Debug, Serialize)]
struct MetricReport {
    metric: Metric,
    value: f64,
    #[serde(flatten)]
    result: PercentileResult,
    fifth_percentile: f64,
}

pub(crate) fn run(arg: &EstimateArg) -> anyhow::Result<()> {
    let EstimateArg {
        age,
        gender,
        sdnn,
        rmssd,
        hf,
        json,
    } = arg;

    let mut readings = vec![(Metric::SdNn, *sdnn), (Metric::Rmssd, *rmssd)];
    if let Some(hf) = hf {
        readings.push((Metric::Hf, *hf));
    }

    if *json {
        return print_json(*age, gender, &readings);
    }

    println!("HRV Percentile Calculator");
    println!("{}", "=".repeat(25));
    for &(metric, value) in &readings {
        match estimate(*age, gender, &metric.to_string(), value) {
            Ok(result) => {
                println!(
                    "{}",
                    render::percentile_report(*age, gender, &metric.to_string(), value, &result)
                );
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    println!();
    println!("5th Percentile Values:");
    println!("{}", "-".repeat(25));
    for metric in Metric::ALL {
        if let Ok(bound) = fifth_percentile_value(*age, gender, &metric.to_string()) {
            println!("{metric} 5th percentile: {bound:.1}");
        }
    }
    Ok(())
}

fn print_json(age: i32, gender: &str, readings: &[(Metric, f64)]) -> anyhow::Result<()> {
    let band = AgeBand::from_age(age).ok_or(NormsError::AgeOutOfRange)?;
    let cohort_gender = Gender::parse(gender).ok_or(NormsError::InvalidGender)?;

    let metrics = readings
        .iter()
        .map(|&(metric, value)| {
            let result = estimate(age, gender, &metric.to_string(), value)?;
            let fifth_percentile = fifth_percentile_value(age, gender, &metric.to_string())?;
            Ok(MetricReport {
                metric,
                value,
                result,
                fifth_percentile,
            })
        })
        .collect::<Result<Vec<_>, NormsError>>()?;

    let report = EstimateReport {
        age,
        gender: cohort_gender,
        age_band: band,
        metrics,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
