// src/generator/mod.rs

use thiserror::Error;

pub mod fallback;
pub mod gemini;

pub use fallback::{FallbackPool, RandomSource};
pub use gemini::GeminiSource;

/// Why a remote attempt failed. Classified inside the remote wrapper
/// from the HTTP status or transport error, never by inspecting error
/// text downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("rate limited by the generation API")]
    RateLimited,
    #[error("generation API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("generation API response carried no text")]
    Malformed,
}

/// A source that can turn a theme into haiku text.
pub trait HaikuSource {
    fn name(&self) -> &str;
    fn generate(&self, theme: &str) -> Result<String, GenerationError>;
}
