use std::{collections::HashMap, env, fs};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("predictor.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("request_timeout_secs") {
                if let Ok(parsed) = v.parse::<u64>() {
                    settings.request_timeout_secs = parsed;
                }
            }
        }
    }

    if let Ok(v) = env::var("PREDICTOR_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Ok(v) = env::var("PREDICTOR_REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
    if let Ok(v) = env::var("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    settings
}

/// Trim and validate a configured service URL.
///
/// Trailing slashes are stripped so endpoint paths can be appended uniformly.
pub fn normalize_server_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("server url must not be empty");
    }
    let parsed =
        Url::parse(trimmed).with_context(|| format!("invalid server url '{trimmed}'"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => bail!("unsupported server url scheme '{other}' in '{trimmed}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_point_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
        assert_eq!(settings.request_timeout_secs, 10);
    }

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_server_url("http://127.0.0.1:5000/").expect("normalize"),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn normalize_accepts_https() {
        assert_eq!(
            normalize_server_url("https://predict.example.com").expect("normalize"),
            "https://predict.example.com"
        );
    }

    #[test]
    fn normalize_rejects_non_http_schemes() {
        assert!(normalize_server_url("ftp://predict.example.com").is_err());
    }

    #[test]
    fn normalize_rejects_garbage() {
        assert!(normalize_server_url("not a url").is_err());
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert!(normalize_server_url("   ").is_err());
    }
}
