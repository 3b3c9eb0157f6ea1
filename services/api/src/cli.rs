use crate::assess::{run_assess, run_catalog, AssessArgs, CatalogArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use router_checklist::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Home Router Security Checklist",
    about = "Score a home Wi-Fi router against the hardening checklist, or serve the checklist API",
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
    /// List the checklist controls grouped by category
    Catalog(CatalogArgs),
    /// Score a checklist from the command line and print the brief
    Assess(AssessArgs),
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
        Command::Catalog(args) => run_catalog(args),
        Command::Assess(args) => run_assess(args),
    }
}
