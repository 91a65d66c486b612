mod error_text;
mod format;
mod json;
mod mode;
mod summary_text;
mod transactions_text;

use std::io;

use txsift_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    let body = match success.command.as_str() {
        "transactions" => transactions_text::render_transactions(&success.data)?,
        "preset" => summary_text::render_preset(&success.data)?,
        "wallet" => summary_text::render_wallet(&success.data)?,
        _ => {
            return Err(io::Error::other(format!(
                "unsupported text output command `{}`",
                success.command
            )));
        }
    };

    if success.warnings.is_empty() {
        return Ok(body);
    }
    let warnings = success
        .warnings
        .iter()
        .map(|warning| format!("Warning: {}", warning.message))
        .collect::<Vec<String>>();
    Ok(format!("{body}\n\n{}", warnings.join("\n")))
}
