use std::env;
use std::str::FromStr;

use crate::errors::SummarizerError;
use crate::sizing::SizingParams;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://legal-ai-pack.vercel.app";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub sizing: SizingParams,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// [`AppConfig::from_env`] with the error lifted into the crate error type.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Config`] when a variable is missing or invalid.
    pub fn load() -> Result<Self, SummarizerError> {
        Self::from_env().map_err(SummarizerError::Config)
    }

    /// # Errors
    ///
    /// Returns [`SummarizerError::Config`] when a variable is missing or invalid.
    pub fn load_with<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).map_err(SummarizerError::Config)
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GOOGLE_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| "GOOGLE_API_KEY: environment variable not found".to_string())?;

        let gemini_base_url = lookup("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        url::Url::parse(&gemini_base_url).map_err(|e| format!("GEMINI_BASE_URL: {e}"))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        let defaults = SizingParams::default();
        let sizing = SizingParams {
            compression_ratio: parse_or(
                &lookup,
                "SUMMARY_COMPRESSION_RATIO",
                defaults.compression_ratio,
            )?,
            words_per_page: parse_or(&lookup, "SUMMARY_WORDS_PER_PAGE", defaults.words_per_page)?,
            words_per_sentence: parse_or(
                &lookup,
                "SUMMARY_WORDS_PER_SENTENCE",
                defaults.words_per_sentence,
            )?,
            chars_per_word: parse_or(&lookup, "SUMMARY_CHARS_PER_WORD", defaults.chars_per_word)?,
        };
        if !(sizing.compression_ratio.is_finite() && sizing.compression_ratio > 0.0) {
            return Err("SUMMARY_COMPRESSION_RATIO: must be a positive number".to_string());
        }

        Ok(Self {
            google_api_key,
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url,
            gemini_timeout_secs: parse_or(
                &lookup,
                "GEMINI_TIMEOUT_SECS",
                DEFAULT_GEMINI_TIMEOUT_SECS,
            )?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            allowed_origins,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            sizing,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| format!("{key}: {e}")),
        None => Ok(default),
    }
}
