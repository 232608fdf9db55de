use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// A missing Gemini key is tolerated at startup; `/analyze` reports it per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// JSON category list replacing the built-in rubric.
    pub rubric_path: Option<PathBuf>,
    pub roast_enabled: bool,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            rubric_path: None,
            roast_enabled: true,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY"),
            port: match get("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            rubric_path: get("RUBRIC_PATH").map(PathBuf::from),
            roast_enabled: match get("ROAST_ENABLED") {
                Some(v) => parse_bool(&v).context("ROAST_ENABLED must be true or false")?,
                None => defaults.roast_enabled,
            },
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => defaults.max_upload_bytes,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized boolean '{other}'"),
    }
}
