use crate::demo::{run_demo, run_profiles, run_report, DemoArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hirego::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HireGo Assessment Engine",
    about = "Map candidate assessment results onto job-profile skill reports",
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
    /// List the job-profile templates in the catalog
    Profiles,
    /// Generate an assessment report from a JSON file of results
    Report(ReportArgs),
    /// Generate reports from built-in sample assessments
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Profiles => run_profiles(),
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
