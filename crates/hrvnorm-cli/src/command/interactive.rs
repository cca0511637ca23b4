use std::io::{self, BufRead as _, Write as _};

use anyhow::Context as _;
use hrvnorm_estimator::{estimate, fifth_percentile_value};
use hrvnorm_reference::Metric;

use crate::render;

pub(crate) fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("HRV Percentile Calculator");
    println!("{}", "=".repeat(25));
    println!("Available HRV metrics: sdNN, RMSSD, HF");
    println!();

    let age = loop {
        let line = prompt(&mut lines, "Enter your age (25-74): ")?;
        match line.trim().parse::<i32>() {
            Ok(age) => break age,
            Err(_) => println!("Invalid value. Please enter a whole number."),
        }
    };
    let gender = prompt(&mut lines, "Enter your gender (male/female): ")?
        .trim()
        .to_owned();

    println!();
    println!("You can enter multiple metrics (type 'done' when finished)");
    let mut readings = Vec::new();
    loop {
        let metric = prompt(&mut lines, "Enter HRV metric name (or 'done' to finish): ")?
            .trim()
            .to_owned();
        if metric.eq_ignore_ascii_case("done") {
            break;
        }
        if metric.is_empty() {
            continue;
        }
        let value = prompt(&mut lines, &format!("Enter your {metric} value: "))?;
        match value.trim().parse::<f64>() {
            Ok(value) => readings.push((metric, value)),
            Err(_) => println!("Invalid value. Please enter a number."),
        }
    }

    if readings.is_empty() {
        println!("No metrics entered. Exiting.");
        return Ok(());
    }

    println!();
    println!("Results:");
    println!("{}", "-".repeat(50));
    for (metric, value) in &readings {
        match estimate(age, &gender, metric, *value) {
            Ok(result) => {
                println!(
                    "{}",
                    render::percentile_report(age, &gender, metric, *value, &result)
                );
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    println!();
    println!("5th Percentile Values:");
    println!("{}", "-".repeat(25));
    for metric in Metric::ALL {
        if let Ok(bound) = fifth_percentile_value(age, &gender, &metric.to_string()) {
            println!("{metric} 5th percentile: {bound:.1}");
        }
    }
    Ok(())
}

fn prompt<I>(lines: &mut I, message: &str) -> anyhow::Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{message}");
    io::stdout().flush()?;
    let line = lines.next().context("input stream closed")??;
    Ok(line)
}
