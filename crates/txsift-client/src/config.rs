use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};

use crate::{ClientError, ClientResult};

pub const CURRENCY_ENV: &str = "TXSIFT_CURRENCY";
pub const TIME_ZONE_ENV: &str = "TXSIFT_TZ";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Zone in which calendar days are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl ZoneSetting {
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Some(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Some(Self::Utc);
        }
        parse_offset(trimmed).map(Self::Fixed)
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Utc => Utc::now().date_naive(),
            Self::Fixed(offset) => Utc::now().with_timezone(offset).date_naive(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Local => "local".to_string(),
            Self::Utc => "utc".to_string(),
            Self::Fixed(offset) => offset.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub currency: String,
    pub zone: ZoneSetting,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            zone: ZoneSetting::Local,
        }
    }
}

pub fn resolve_config() -> ClientResult<ClientConfig> {
    resolve_config_from(
        std::env::var(CURRENCY_ENV).ok().as_deref(),
        std::env::var(TIME_ZONE_ENV).ok().as_deref(),
    )
}

pub fn resolve_config_from(
    currency: Option<&str>,
    zone: Option<&str>,
) -> ClientResult<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(value) = currency.filter(|value| !value.trim().is_empty()) {
        let code = value.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ClientError::config_invalid(
                CURRENCY_ENV,
                value,
                "a 3-letter currency code such as USD",
            ));
        }
        config.currency = code.to_ascii_uppercase();
    }

    if let Some(value) = zone.filter(|value| !value.trim().is_empty()) {
        config.zone = ZoneSetting::parse(value).ok_or_else(|| {
            ClientError::config_invalid(TIME_ZONE_ENV, value, "`local`, `utc`, or an offset like +01:00")
        })?;
    }

    Ok(config)
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let probe = format!("2000-01-01T00:00:00{value}");
    DateTime::parse_from_rfc3339(&probe)
        .ok()
        .map(|parsed| *parsed.offset())
}
