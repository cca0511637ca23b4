use clap::{Parser, Subcommand};

use self::{estimate::EstimateArg, range::RangeArg};

mod estimate;
mod interactive;
mod range;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Rank measured HRV values against the reference population
    Estimate(#[clap(flatten)] EstimateArg),
    /// Print normative 5th-95th percentile ranges
    Range(#[clap(flatten)] RangeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Some(Mode::Estimate(arg)) => estimate::run(&arg),
        Some(Mode::Range(arg)) => range::run(&arg),
        None => interactive::run(),
    }
}
