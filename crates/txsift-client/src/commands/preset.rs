use crate::commands::common::{interval_data, load_config, resolve_today};
use crate::config::ClientConfig;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::PresetData;
use crate::filter::DateRangePreset;
use crate::filter::date::format_iso_date;
use crate::{ClientError, ClientResult};

const COMMAND: &str = "preset";

#[derive(Debug, Default)]
pub struct PresetRunOptions {
    pub preset: String,
    pub today: Option<String>,
    pub config_override: Option<ClientConfig>,
}

pub fn run(preset: &str, today: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(PresetRunOptions {
        preset: preset.to_string(),
        today: today.map(std::string::ToString::to_string),
        config_override: None,
    })
}

#[doc(hidden)]
pub fn run_with_options(options: PresetRunOptions) -> ClientResult<SuccessEnvelope> {
    let preset = DateRangePreset::parse(&options.preset)
        .ok_or_else(|| ClientError::unknown_preset(&options.preset, COMMAND))?;
    let config = load_config(options.config_override)?;
    let today = resolve_today(options.today.as_deref(), &config.zone, COMMAND)?;
    let interval = preset.resolve_on(today);

    let data = PresetData {
        preset: preset.slug().to_string(),
        label: preset.label().to_string(),
        today: format_iso_date(&today),
        interval: interval_data(&interval),
        day_count: interval.day_count(),
    };

    success(COMMAND, data)
}
