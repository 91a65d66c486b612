//! Filter directives shared by every binary that embeds the client.

pub const LOG_ENV: &str = "TXSIFT_LOG";
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Directive string for the tracing subscriber: `TXSIFT_LOG` when set and
/// non-empty, otherwise `warn`.
pub fn log_directive() -> String {
    directive_from(std::env::var(LOG_ENV).ok().as_deref())
}

pub fn directive_from(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .to_string()
}
