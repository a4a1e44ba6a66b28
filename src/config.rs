//! Environment-driven settings with per-field defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::polish::GeminiPolisher;

/// Errors raised while resolving settings from the environment.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime settings for the server binary.
///
/// Every field has a default; the only optional capability is the polish
/// pass, which is enabled solely by the presence of `GEMINI_API_KEY`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory of seed `*.txt` documents. `PATHSMITH_SEEDS_DIR`.
    pub seeds_dir: PathBuf,
    /// Listen address. `PATHSMITH_BIND_ADDR`.
    pub bind_addr: SocketAddr,
    /// API key enabling the polish pass. `GEMINI_API_KEY`.
    pub gemini_api_key: Option<String>,
    /// Polish endpoint base, overridable for testing. `GEMINI_API_BASE`.
    pub gemini_api_base: Url,
    /// Model name for the polish call. `GEMINI_MODEL`.
    pub gemini_model: String,
    /// Upper bound on the single polish attempt.
    /// `PATHSMITH_POLISH_TIMEOUT_SECS`.
    pub polish_timeout: Duration,
}

impl Settings {
    pub const DEFAULT_SEEDS_DIR: &'static str = "data/seeds";
    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:3000";
    pub const DEFAULT_POLISH_TIMEOUT_SECS: u64 = 10;

    /// Resolves settings from the process environment, reading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let seeds_dir = PathBuf::from(
            std::env::var("PATHSMITH_SEEDS_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_SEEDS_DIR.to_string()),
        );

        let bind_addr = std::env::var("PATHSMITH_BIND_ADDR")
            .unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::Invalid {
                key: "PATHSMITH_BIND_ADDR",
                message: err.to_string(),
            })?;

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let gemini_api_base = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| GeminiPolisher::DEFAULT_API_BASE.to_string())
            .parse()
            .map_err(|err: url::ParseError| SettingsError::Invalid {
                key: "GEMINI_API_BASE",
                message: err.to_string(),
            })?;

        let gemini_model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| GeminiPolisher::DEFAULT_MODEL.to_string());

        let polish_timeout_secs = match std::env::var("PATHSMITH_POLISH_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|err: std::num::ParseIntError| {
                SettingsError::Invalid {
                    key: "PATHSMITH_POLISH_TIMEOUT_SECS",
                    message: err.to_string(),
                }
            })?,
            Err(_) => Self::DEFAULT_POLISH_TIMEOUT_SECS,
        };

        Ok(Self {
            seeds_dir,
            bind_addr,
            gemini_api_key,
            gemini_api_base,
            gemini_model,
            polish_timeout: Duration::from_secs(polish_timeout_secs),
        })
    }
}
