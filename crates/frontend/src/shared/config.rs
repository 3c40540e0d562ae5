use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL prepended to every relative endpoint. Empty means same-origin.
    pub base_url: String,
    pub upload_endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    pub greeting: String,
    pub reply_delay_ms: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:3000"
upload_endpoint = "/upload"

[chat]
greeting = "Hello! What would you like to know?"
reply_delay_ms = 1000
"#;

/// Load configuration
///
/// The browser has no process environment, so overrides are captured when
/// the bundle is built:
/// 1. `API_URL` replaces `api.base_url` (an empty value keeps the default)
/// 2. `UPLOAD_ENDPOINT` replaces `api.upload_endpoint`
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_with(option_env!("API_URL"), option_env!("UPLOAD_ENDPOINT"))
}

fn load_config_with(
    api_url: Option<&str>,
    upload_endpoint: Option<&str>,
) -> Result<Config, ConfigError> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
        log::debug!("API base URL overridden at build time: {}", url);
        config.api.base_url = url.to_string();
    }
    if let Some(endpoint) = upload_endpoint.map(str::trim).filter(|e| !e.is_empty()) {
        config.api.upload_endpoint = endpoint.to_string();
    }

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Embedded defaults; parsing them cannot fail at runtime once tests pass.
pub fn default_config() -> Config {
    Config {
        api: ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            upload_endpoint: "/upload".to_string(),
        },
        chat: ChatConfig {
            greeting: "Hello! What would you like to know?".to_string(),
            reply_delay_ms: 1000,
        },
    }
}
