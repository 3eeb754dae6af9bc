use crate::report::{
    run_national, run_risks, run_school, run_schools, NationalArgs, RisksArgs, SchoolArgs,
    SchoolsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use school_health::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "School Health Dashboard",
    about = "Classify boarding school infrastructure health and serve the dashboard API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print national status counts
    National(NationalArgs),
    /// List every school with its overall and headline statuses
    Schools(SchoolsArgs),
    /// Show the full health breakdown for one school
    School(SchoolArgs),
    /// Print the risk register of schools with urgent flags
    Risks(RisksArgs),
}

/// Dataset location shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct DataArgs {
    /// Path to the school dataset JSON (overrides SCHOOL_DATA_PATH)
    #[arg(long = "data", value_name = "PATH")]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::National(args) => run_national(args),
        Command::Schools(args) => run_schools(args),
        Command::School(args) => run_school(args),
        Command::Risks(args) => run_risks(args),
    }
}
