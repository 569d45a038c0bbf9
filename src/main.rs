mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use wfhrelief::breakdown::vacationdays::VacationDays;
use wfhrelief::configuration::Configuration;
use wfhrelief::estimate::ReliefEstimator;
use wfhrelief::form::formcontext::FormContext;
use wfhrelief::form::formdata::FormUpdate;
use wfhrelief::input::inputparser::{
    InputField,
    parse_field,
    parse_remote_days,
    parse_vacation_days,
    parse_year
};
use wfhrelief::relief::householdcosts::HouseholdCosts;

use crate::cli::{BreakdownArgs, Cli, Command, ReliefArgs, YearArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration: {}", path.display()))?,
        None => Configuration::new(),
    };
    let estimator = configuration.estimator().context("no usable holiday calendar")?;

    match cli.command {
        Command::Holidays(args) => {
            let year = selected_year(&args, &configuration)?;
            print_json(&estimator.public_holidays(year))
        }
        Command::Breakdown(args) => breakdown(&args, &configuration, &estimator),
        Command::Relief(args) => relief(&args, &configuration, &estimator),
    }
}

fn selected_year(args: &YearArgs, configuration: &Configuration) -> Result<i32> {
    Ok(parse_year(&args.year, configuration.supported_years())?)
}

fn vacation_input(args: &BreakdownArgs, year: i32, estimator: &ReliefEstimator) -> Result<VacationDays> {
    let pool = estimator.breakdown(year, &VacationDays::default());
    Ok(VacationDays::Count(parse_vacation_days(&args.vacation, &pool)?))
}

fn breakdown(args: &BreakdownArgs, configuration: &Configuration, estimator: &ReliefEstimator) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct BreakdownOutput {
        year: i32,
        breakdown: wfhrelief::breakdown::yearbreakdown::YearBreakdown,
        remote_working_days: u32,
    }

    let year = selected_year(&args.year, configuration)?;
    let vacation = vacation_input(args, year, estimator)?;
    let remote_days = parse_remote_days(&args.remote_days)?;
    let breakdown = estimator.breakdown(year, &vacation);
    print_json(&BreakdownOutput {
        year,
        breakdown,
        remote_working_days: remote_days.scale(breakdown.working_days()),
    })
}

fn relief(args: &ReliefArgs, configuration: &Configuration, estimator: &ReliefEstimator) -> Result<()> {
    let year = selected_year(&args.breakdown.year, configuration)?;
    let vacation = vacation_input(&args.breakdown, year, estimator)?;
    let remote_days = parse_remote_days(&args.breakdown.remote_days)?;
    let costs = HouseholdCosts::new(
        parse_field(InputField::ElectricityCost, &args.electricity)?,
        parse_field(InputField::InternetCost, &args.internet)?,
        parse_field(InputField::HeatingCost, &args.heating)?,
    );

    let mut form = FormContext::default();
    form.update(FormUpdate::worked_from_home(true));
    form.update(FormUpdate::costs(&costs));
    form.update(FormUpdate::remote_allowance(parse_field(InputField::RemoteAllowance, &args.allowance)?));

    print_json(&estimator.estimate(year, &vacation, remote_days, form.data()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
