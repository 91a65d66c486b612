use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|index| bytes[*index].is_ascii_digit());
    if !shaped {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `txsift transactions --help`.
pub const TRANSACTIONS_AFTER_HELP: &str = "\
Feed format:
  JSON: one top-level array of transaction objects.
  CSV:  one header row; `amount` and `date` are required.

  <path> is a local file path. Use `-` (or omit it) to read stdin.
  Example: cat feed.json | txsift transactions --status pending

  JSON example:
  [
    {
      \"payment_reference\": \"TXN001\",
      \"amount\": \"100.00\",
      \"date\": \"2025-10-20T10:00:00Z\",
      \"status\": \"successful\",
      \"type\": \"payment\",
      \"metadata\": { \"product_name\": \"Product A\", \"name\": \"John Doe\" }
    }
  ]

Filtering rules:
  Dates match by calendar day in the configured zone (TXSIFT_TZ).
  Both ends of the range are inclusive; a reversed range matches nothing.
  `--preset` fills both bounds; `--from`/`--to` override one of them.
  Without a preset, `--from` and `--to` must be given together.
  Dates after today cannot be selected.
  `--status` may repeat; a row matches when its status is any of them.
  Rows without a status are shown as completed and never match `--status`.

Presets:
  today, last-7-days, this-month, last-3-months
";

#[derive(Debug, Parser)]
#[command(
    name = "txsift",
    version,
    about = "filter a transaction feed by date range and status",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter a transaction feed and show the matching rows
    #[command(after_long_help = TRANSACTIONS_AFTER_HELP)]
    Transactions {
        /// Path to a JSON or CSV feed (use `-` or omit for stdin)
        path: Option<String>,
        /// Quick range: today, last-7-days, this-month, last-3-months
        #[arg(long)]
        preset: Option<String>,
        /// Start of the date range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<IsoDate>,
        /// End of the date range (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<IsoDate>,
        /// Keep rows with this status (successful, failed, pending); repeatable
        #[arg(long = "status")]
        statuses: Vec<String>,
        /// Treat this day as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show the date range a quick preset resolves to
    Preset {
        /// Preset slug or label (e.g. last-7-days, "This month")
        preset: String,
        /// Treat this day as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Summarize a wallet balance file
    Wallet {
        /// Path to a wallet JSON object (use `-` for stdin)
        path: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
