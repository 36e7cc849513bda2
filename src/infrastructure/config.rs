use crate::domain::chart::DEFAULT_MAX_LABELS;
use crate::domain::history::TimestampPolicy;
use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.simcotools.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE: &str = "config/fetch";
const ENV_PREFIX: &str = "COMPANY_FETCH";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistorySettings {
    #[serde(default)]
    pub timestamp_policy: TimestampPolicy,
    pub max_labels: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            timestamp_policy: TimestampPolicy::default(),
            max_labels: DEFAULT_MAX_LABELS,
        }
    }
}

/// Defaults, then `config/fetch.*` if present, then `COMPANY_FETCH__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    // timestamp_policy falls back through its serde default
    let api = ApiSettings::default();
    let history = HistorySettings::default();
    Ok(builder
        .set_default("api.base_url", api.base_url)?
        .set_default("api.timeout_secs", api.timeout_secs)?
        .set_default("history.max_labels", history.max_labels as u64)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = load_from_toml("").unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.history.timestamp_policy, TimestampPolicy::Strict);
        assert_eq!(config.history.max_labels, DEFAULT_MAX_LABELS);
    }

    #[test]
    fn test_builder_defaults_match_settings_default() {
        let config = load_from_toml("").unwrap();

        assert_eq!(config.api, ApiSettings::default());
        assert_eq!(config.history, HistorySettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = load_from_toml(
            r#"
            [api]
            base_url = "http://localhost:9000"
            timeout_secs = 5

            [history]
            timestamp_policy = "lenient"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.history.timestamp_policy, TimestampPolicy::Lenient);
        assert_eq!(config.history.max_labels, DEFAULT_MAX_LABELS);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = load_from_toml(
            r#"
            [history]
            timestamp_policy = "sloppy"
            "#,
        );

        assert!(result.is_err());
    }
}
