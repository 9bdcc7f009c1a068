use crate::demo::{run_demo, run_profile_status, DemoArgs, ProfileStatusArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gigexecs::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GigExecs Profile Service",
    about = "Run and demonstrate the GigExecs profile progression service from the command line",
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
    /// Inspect profile progression without the HTTP layer
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Run an end-to-end CLI demo walking a consultant through the tiers
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Compute a completeness and status report for supplied profile data
    Status(ProfileStatusArgs),
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
        Command::Profile {
            command: ProfileCommand::Status(args),
        } => run_profile_status(args),
        Command::Demo(args) => run_demo(args),
    }
}
