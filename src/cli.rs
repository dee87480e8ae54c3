use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "slimtrack",
    version,
    about = "Weight-loss tracker and health metric calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and data directory
    Init {
        /// Skip interactive profile setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Show or replace the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Record a weight (kg) for today or --date
    Log {
        /// Weight in kg
        weight: f64,
    },

    /// Show weight history, oldest first
    History {
        /// Only the most recent N entries
        #[arg(long)]
        last: Option<usize>,
    },

    /// Delete the weight entry for a date
    Delete {
        /// Entry date (YYYY-MM-DD)
        entry_date: NaiveDate,
    },

    /// Health metric calculators
    Calc {
        #[command(subcommand)]
        action: CalcAction,
    },

    /// Progress towards the target weight with a time estimate
    Progress,

    /// Dashboard overview
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Delete the profile and the whole weight history
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Save the profile (replaces any existing one)
    Set(ProfileArgs),
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub age: u32,
    /// m/male or f/female
    #[arg(long)]
    pub sex: String,
    /// Height in cm
    #[arg(long)]
    pub height: f64,
    /// Starting weight in kg
    #[arg(long)]
    pub initial_weight: f64,
    /// Target weight in kg
    #[arg(long)]
    pub target_weight: f64,
    /// sedentary, light, moderate, intense, very_intense
    #[arg(long)]
    pub activity: Option<String>,
    /// slow, moderate, fast
    #[arg(long)]
    pub pace: Option<String>,
}

/// Body measurements; omitted values come from the profile and latest weight.
#[derive(Args)]
pub struct BodyArgs {
    /// Weight in kg
    #[arg(long)]
    pub weight: Option<f64>,
    /// Height in cm
    #[arg(long)]
    pub height: Option<f64>,
    #[arg(long)]
    pub age: Option<u32>,
    /// m/male or f/female
    #[arg(long)]
    pub sex: Option<String>,
    /// sedentary, light, moderate, intense, very_intense
    #[arg(long)]
    pub activity: Option<String>,
}

#[derive(Subcommand)]
pub enum CalcAction {
    /// Body mass index
    Bmi {
        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Height in meters
        #[arg(long)]
        height: Option<f64>,
    },
    /// Basal metabolic rate and daily energy expenditure
    Bmr(BodyArgs),
    /// Caloric deficit plan
    Deficit {
        #[command(flatten)]
        body: BodyArgs,
        /// slow, moderate, fast
        #[arg(long)]
        pace: Option<String>,
    },
    /// Ideal weight estimates
    Ideal {
        /// Height in meters
        #[arg(long)]
        height: Option<f64>,
        /// m/male or f/female
        #[arg(long)]
        sex: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. defaults.goal_pace, dashboard.recent_entries, alias.sed)
        key: String,
        /// Config value
        value: String,
    },
}
