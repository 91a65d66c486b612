mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_text;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use txsift_client::ClientError;
use txsift_client::logging::{DEFAULT_LOG_DIRECTIVE, log_directive};

const ROOT_HELP: &str = "txsift - filter a transaction feed by date range and status

Usage:
  txsift <command>

Start here:
  txsift transactions feed.json
  txsift transactions feed.json --preset last-7-days --status pending
  txsift preset this-month
  txsift wallet wallet.json

Run `txsift <command> --help` for command usage.
";

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

/// Logs go to stderr so stdout stays parseable under `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_new(log_directive())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return report_parse_error(&err, &raw_args),
    };
    let mode = output::mode_for_command(&cli.command);
    debug!(?mode, "parsed command line");

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn report_parse_error(err: &clap::Error, raw_args: &[String]) -> Result<ExitCode, ExitCode> {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        if write_stdout_text(&err.to_string()).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let clean_message = strip_clap_boilerplate(&err.to_string());
    let parse_error =
        ClientError::invalid_argument_for_command(&clean_message, command_from_args(raw_args));
    if output::print_failure(&parse_error, infer_requested_output_mode(raw_args)).is_err() {
        return Err(ExitCode::from(2));
    }
    Err(ExitCode::from(1))
}

/// Drops clap's trailing usage block so the recovery steps are the only
/// guidance printed.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))
        .and_then(|value| match value.as_str() {
            "transactions" => Some("transactions"),
            "preset" => Some("preset"),
            "wallet" => Some("wallet"),
            _ => None,
        })
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}
