use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Irish remote-working days and tax relief estimator.
#[derive(Parser)]
#[command(
    name = "wfhrelief",
    version,
    about = "Working days and remote-working tax relief for Ireland"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a JSON configuration file. Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the observed public holidays of a year.
    Holidays(YearArgs),
    /// Break a year down into weekend, holiday, vacation and working days.
    Breakdown(BreakdownArgs),
    /// Estimate the tax relief for a year.
    Relief(ReliefArgs),
}

#[derive(clap::Args)]
pub struct YearArgs {
    /// Calendar year.
    #[arg(short, long)]
    pub year: String,
}

/// Arguments for the `breakdown` subcommand.
#[derive(clap::Args)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub year: YearArgs,

    /// Number of vacation days taken.
    #[arg(long, default_value = "0")]
    pub vacation: String,

    /// Days per week worked from home (0 to 5, half days allowed).
    #[arg(long = "remote-days", default_value = "5")]
    pub remote_days: String,
}

/// Arguments for the `relief` subcommand.
#[derive(clap::Args)]
pub struct ReliefArgs {
    #[command(flatten)]
    pub breakdown: BreakdownArgs,

    /// Yearly electricity bill.
    #[arg(long, default_value = "")]
    pub electricity: String,

    /// Yearly internet bill.
    #[arg(long, default_value = "")]
    pub internet: String,

    /// Yearly heating bill.
    #[arg(long, default_value = "")]
    pub heating: String,

    /// Remote working allowance paid by the employer.
    #[arg(long, default_value = "")]
    pub allowance: String,
}
