use crate::commands::{run_extract, run_screen, ExtractArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use resume_screener::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Resume Screener",
    about = "Extract, score and explain resume matches against job postings",
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
    /// Screen one resume against the job catalog and print the ranked matches
    Screen(ScreenArgs),
    /// Print the structured profile extracted from one resume
    Extract(ExtractArgs),
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
        Command::Screen(args) => run_screen(args),
        Command::Extract(args) => run_extract(args),
    }
}
