use crate::commands::{run_dashboard, run_import, DashboardArgs, ImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use woning_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "woning-ai",
    about = "Score, filter, and rank scraped property listings from the command line",
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
    /// Print a ranked dashboard page for a snapshot file
    Dashboard(DashboardArgs),
    /// Normalize a scraped listing export and print it as JSON
    Import(ImportArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Import(args) => run_import(args),
    }
}
