// src/config/mod.rs

use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_FALLBACK_DELAY_MS: u64 = 1500;

/// Runtime configuration for the generator: endpoint, key, model.
/// A missing key is not an error; it routes every request to the
/// local fallback pool.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub fallback_delay: Duration,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
        }
    }

    /// Reads GEMINI_API_ENDPOINT, GEMINI_API_KEY, GEMINI_MODEL and
    /// HAIKU_FALLBACK_DELAY_MS, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("GEMINI_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
            api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            fallback_delay: delay_from(env::var("HAIKU_FALLBACK_DELAY_MS").ok()),
        }
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.into();
        self
    }

    pub fn without_delay(mut self) -> Self {
        self.fallback_delay = Duration::ZERO;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn delay_from(raw: Option<String>) -> Duration {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS))
}
