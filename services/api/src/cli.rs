use crate::demo::{run_assess, run_chat, AssessArgs, ChatArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindwell::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mindwell Support Platform",
    about = "Run the Mindwell support service or exercise its scoring and chat engines from the command line",
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
    /// Score an assessment from the command line
    Assess(AssessArgs),
    /// Send one message through the support chat classifier
    Chat(ChatArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Chat(args) => run_chat(args),
    }
}
