mod cli;
mod cmd;

use chrono::Local;
use clap::Parser;
use cli::{CalcAction, Cli, Commands, ConfigAction, ProfileAction};
use slimtrack::models::config::Config;
use slimtrack::{error, output};
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug".to_string()
        } else {
            Config::load().map(|c| c.log.level).unwrap_or_else(|_| "warn".to_string())
        };
        EnvFilter::new(level)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Profile { .. } => "profile",
        Commands::Log { .. } => "log",
        Commands::History { .. } => "history",
        Commands::Delete { .. } => "delete",
        Commands::Calc { .. } => "calc",
        Commands::Progress => "progress",
        Commands::Status => "status",
        Commands::Config { .. } => "config",
        Commands::Reset { .. } => "reset",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let human = cli.human;
    let name = command_name(&cli.command);

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip, today),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd::profile::run_show(human),
            ProfileAction::Set(args) => cmd::profile::run_set(&args, today, human),
        },
        Commands::Log { weight } => cmd::weight::run_log(weight, today, human),
        Commands::History { last } => cmd::weight::run_history(last, human),
        Commands::Delete { entry_date } => cmd::weight::run_delete(entry_date, human),
        Commands::Calc { action } => match action {
            CalcAction::Bmi { weight, height } => cmd::calc::run_bmi(weight, height, human),
            CalcAction::Bmr(body) => cmd::calc::run_bmr(&body, human),
            CalcAction::Deficit { body, pace } => {
                cmd::calc::run_deficit(&body, pace.as_deref(), human)
            }
            CalcAction::Ideal { height, sex } => {
                cmd::calc::run_ideal(height, sex.as_deref(), human)
            }
        },
        Commands::Progress => cmd::progress::run(today, human),
        Commands::Status => cmd::status::run(today, human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Reset { yes } => cmd::reset::run(yes, human),
        Commands::Completions { shell } => {
            cmd::completions::run(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error(name, error::code_of(&e), &e.to_string());
        eprintln!("{err}");
        process::exit(1);
    }
}
