mod commands;
mod helpers;

use clap::Parser;
use swap_core::domain::{SwapError, SwapErrorCategory};
use swap_core::DocumentError;

const SUCCESS_EXIT: i32 = SwapErrorCategory::Success.exit_code();

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error.diagnostic_line());
            if let Some(summary_line) = error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("swap-rs".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(SUCCESS_EXIT)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "swap-rs", about = "Validate, render and parse SWAP model input files")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Parse and validate the SWAP input files in a directory
    Check(commands::CheckArgs),
    /// Build a model from a JSON document and write its input files
    Render(commands::RenderArgs),
    /// Parse a directory and write it back in canonical form
    Normalize(commands::NormalizeArgs),
    /// Parse a directory into a JSON document
    Export(commands::ExportArgs),
    /// Summarise the log and csv output of a SWAP run
    Result(commands::ResultArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Check(args) => commands::run_check_command(args),
        CliCommand::Render(args) => commands::run_render_command(args),
        CliCommand::Normalize(args) => commands::run_normalize_command(args),
        CliCommand::Export(args) => commands::run_export_command(args),
        CliCommand::Result(args) => commands::run_result_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Swap(#[from] SwapError),
    #[error("{0}")]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn category(&self) -> SwapErrorCategory {
        match self {
            Self::Usage(_) | Self::Document(DocumentError::Parse { .. }) => {
                SwapErrorCategory::InputValidationError
            }
            Self::Swap(error) => error.category(),
            Self::Document(DocumentError::Read { .. }) | Self::Internal(_) => {
                SwapErrorCategory::IoSystemError
            }
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Usage(_) => "INPUT.CLI_USAGE",
            Self::Swap(error) => error.placeholder(),
            Self::Document(DocumentError::Read { .. }) => "IO.DOCUMENT",
            Self::Document(DocumentError::Parse { .. }) => "INPUT.DOCUMENT",
            Self::Internal(_) => "IO.CLI",
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    /// `ERROR: [PLACEHOLDER] message`, cut to the first line of the message.
    pub fn diagnostic_line(&self) -> String {
        if let Self::Swap(error) = self {
            return error.diagnostic_line();
        }
        let message = match self {
            Self::Internal(error) => format!("{error:#}"),
            other => other.to_string(),
        };
        let first_line = message.lines().next().unwrap_or_default();
        format!("ERROR: [{}] {}", self.placeholder(), first_line)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category()
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}
