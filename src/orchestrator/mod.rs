// src/orchestrator/mod.rs

use std::thread;

use crate::config::GeneratorConfig;
use crate::generator::gemini::GeminiSource;
use crate::generator::{FallbackPool, GenerationError, HaikuSource};
use crate::memory::{AttemptLog, Memory};
use crate::session::{BusyGuard, HaikuSession, SAMPLE_THEMES};
use crate::validation::validate_theme;

/// Banner text when a failure carries no message of its own.
pub const GENERIC_ERROR: &str = "Haiku generation failed. Please try again.";

/// What a single attempt produced. A degraded attempt carries both a
/// fallback haiku and an error message; the two are shown together.
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub haiku: Option<String>,
    pub error: Option<String>,
}

impl AttemptOutcome {
    pub fn success(haiku: &str) -> Self {
        Self {
            haiku: Some(haiku.trim().to_string()),
            error: None,
        }
    }

    /// Fallback paths that are not user-visible errors (no key, rate
    /// limited).
    pub fn offline(haiku: String) -> Self {
        Self {
            haiku: Some(haiku),
            error: None,
        }
    }

    pub fn degraded(haiku: String, error: &str) -> Self {
        let message = if error.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            error.to_string()
        };
        Self {
            haiku: Some(haiku),
            error: Some(message),
        }
    }
}

/// Ties validation, the remote source, and the fallback pool to the
/// session state the presentation layer renders.
pub struct Orchestrator {
    pub config: GeneratorConfig,
    pub remote: Option<Box<dyn HaikuSource + Send + Sync>>,
    pub fallback: FallbackPool,
    pub memory: AttemptLog,
    pub session: HaikuSession,
}

impl Orchestrator {
    /// Wires the remote source from config when a key is present;
    /// without one, every attempt goes to the fallback pool.
    pub fn new(config: GeneratorConfig) -> Self {
        let remote = GeminiSource::from_config(&config)
            .map(|source| Box::new(source) as Box<dyn HaikuSource + Send + Sync>);
        Self {
            config,
            remote,
            fallback: FallbackPool::new(),
            memory: AttemptLog::new(),
            session: HaikuSession::new(),
        }
    }

    pub fn with_source(mut self, source: Box<dyn HaikuSource + Send + Sync>) -> Self {
        self.remote = Some(source);
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPool) -> Self {
        self.fallback = fallback;
        self
    }

    /// One full submission: validate, attempt, apply the outcome.
    pub fn submit(&mut self, raw: &str) {
        if self.session.is_busy() {
            return;
        }

        let theme = match validate_theme(raw) {
            Ok(theme) => theme,
            Err(err) => {
                self.session.error = Some(err.user_message().to_string());
                return;
            }
        };

        let Self {
            config,
            remote,
            fallback,
            memory,
            session,
        } = self;

        session.theme = theme.clone();
        session.error = None;

        let outcome = {
            let _busy = BusyGuard::acquire(&mut session.status);
            attempt(config, remote.as_deref(), fallback, memory, &theme)
        };

        session.haiku = outcome.haiku;
        session.error = outcome.error;
    }

    /// Sample words populate the input and clear any stale error
    /// without generating.
    pub fn select_sample(&mut self, index: usize) -> Option<&'static str> {
        let word = SAMPLE_THEMES.get(index).copied()?;
        self.session.apply_sample(word);
        Some(word)
    }

    pub fn toggle_info(&mut self) {
        self.session.toggle_info();
    }
}

fn attempt(
    config: &GeneratorConfig,
    remote: Option<&(dyn HaikuSource + Send + Sync)>,
    fallback: &mut FallbackPool,
    memory: &mut AttemptLog,
    theme: &str,
) -> AttemptOutcome {
    let Some(source) = remote else {
        // No key configured: hold for a moment as if a request were in
        // flight, then serve a local haiku. Not an error.
        thread::sleep(config.fallback_delay);
        memory.log("config", "no api key, serving local haiku");
        return AttemptOutcome::offline(fallback.compose(theme));
    };

    match source.generate(theme) {
        Ok(text) => {
            memory.log(source.name(), "haiku generated");
            AttemptOutcome::success(&text)
        }
        Err(GenerationError::RateLimited) => {
            memory.log(source.name(), "rate limited, serving local haiku");
            AttemptOutcome::offline(fallback.compose(theme))
        }
        Err(err) => {
            memory.log(source.name(), &format!("generation failed: {err}"));
            AttemptOutcome::degraded(fallback.compose(theme), &err.to_string())
        }
    }
}
