use txsift_client::commands;
use txsift_client::commands::transactions::TransactionsRunOptions;
use txsift_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, IsoDate};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Transactions {
            path,
            preset,
            from,
            to,
            statuses,
            today,
            ..
        } => commands::transactions::run_with_options(TransactionsRunOptions {
            path: path.clone(),
            preset: preset.clone(),
            from: owned(from.as_ref()),
            to: owned(to.as_ref()),
            statuses: statuses.clone(),
            today: owned(today.as_ref()),
            ..TransactionsRunOptions::default()
        }),
        Commands::Preset { preset, today, .. } => {
            commands::preset::run(preset, today.as_ref().map(IsoDate::as_str))
        }
        Commands::Wallet { path, .. } => commands::wallet::run(Some(path.as_str())),
    }
}

fn owned(value: Option<&IsoDate>) -> Option<String> {
    value.map(|date| date.as_str().to_string())
}
