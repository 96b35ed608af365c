use crate::demo::{run_candidates, run_demo, run_navigate, run_theme, CandidatesArgs, ThemeArgs};
use clap::{Args, Parser, Subcommand};
use hireboard::config::AppConfig;
use hireboard::error::AppError;
use hireboard::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Hireboard",
    about = "Drive the recruiting board state model from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the candidate marketplace
    Candidates(CandidatesArgs),
    /// Walk the page router through a sequence of page identifiers
    Navigate(NavigateArgs),
    /// Show or change the persisted theme preference
    Theme(ThemeArgs),
    /// Run a scripted walkthrough: search, navigation, job wizard, save and publish (default command)
    Demo,
}

#[derive(Args, Debug)]
pub(crate) struct NavigateArgs {
    /// Page identifiers such as `employerJobs`; `back` pops the history
    #[arg(required = true)]
    pub(crate) identifiers: Vec<String>,
    /// Print each rendered view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Candidates(args) => run_candidates(args),
        Command::Navigate(args) => run_navigate(args),
        Command::Theme(args) => run_theme(args, &config),
        Command::Demo => run_demo(&config).await,
    }
}
