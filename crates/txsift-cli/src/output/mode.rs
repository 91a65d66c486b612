use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Transactions { json, .. }
        | Commands::Preset { json, .. }
        | Commands::Wallet { json, .. } => OutputMode::from_flag(*json),
    }
}
