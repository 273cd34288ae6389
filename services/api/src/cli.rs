use crate::demo::{run_allocate, run_demo, AllocateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use room_allocation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Room Allocation Service",
    about = "Allocate rooms by preference, seniority and pair claims from the command line or over HTTP",
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
    /// Allocate rooms from applicant and room JSON files
    Allocate(AllocateArgs),
    /// Run a built-in allocation round showing contention, a pair claim and a cascade
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
        Command::Allocate(args) => run_allocate(args),
        Command::Demo(args) => run_demo(args),
    }
}
