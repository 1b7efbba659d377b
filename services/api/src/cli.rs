use crate::demo::{run_demo, run_evaluate, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tricuspid_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Concomitant Tricuspid Repair Evaluator",
    about = "Evaluate tricuspid repair recommendations from the command line or run the HTTP service",
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
    /// Evaluate a single clinical assessment supplied via flags
    Evaluate(EvaluateArgs),
    /// Run the canned clinical scenarios and print each outcome
    Demo,
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo => run_demo(),
    }
}
