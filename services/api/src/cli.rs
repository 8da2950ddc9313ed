use crate::demo::{run_check, run_demo, CheckArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use nova_advisory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Nova Advisory Platform",
    about = "Run and demonstrate the study-abroad advisory workflows from the command line",
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
    /// Eligibility assessment utilities
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Run an end-to-end CLI demo covering assessment and review workflows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Score an eligibility form from a JSON file and print the result
    Check(CheckArgs),
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
        Command::Eligibility {
            command: EligibilityCommand::Check(args),
        } => run_check(args),
        Command::Demo(args) => run_demo(args),
    }
}
