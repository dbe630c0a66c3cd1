use crate::demo::{run_demo, run_triage_rank, DemoArgs, TriageRankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Intake Service",
    about = "Run and exercise the lead intake and triage service from the command line",
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
    /// Score exported lead sheets without a running server
    Triage {
        #[command(subcommand)]
        command: TriageCommand,
    },
    /// Run an end-to-end CLI demo over a handful of sample leads
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TriageCommand {
    /// Score a CSV lead export and print the ranked triage table
    Rank(TriageRankArgs),
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
        Command::Triage {
            command: TriageCommand::Rank(args),
        } => run_triage_rank(args),
        Command::Demo(args) => run_demo(args),
    }
}
