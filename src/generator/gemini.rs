// src/generator/gemini.rs

use crate::config::GeneratorConfig;
use crate::generator::{GenerationError, HaikuSource};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Remote source backed by the Gemini generateContent REST endpoint.
pub struct GeminiSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiSource {
    pub fn new(endpoint: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// None when no key is configured; the caller routes to the
    /// fallback pool instead.
    pub fn from_config(config: &GeneratorConfig) -> Option<Self> {
        config
            .api_key
            .as_ref()
            .map(|key| Self::new(&config.endpoint, key, &config.model))
    }
}

impl HaikuSource for GeminiSource {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, theme: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let prompt = build_prompt(theme);
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let body: Value = response
            .json()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        extract_text(&body)
    }
}

/// Prompt sent to the model. The 5-7-5 shape is requested, never
/// verified locally.
pub fn build_prompt(theme: &str) -> String {
    format!(
        "Write a traditional haiku (5-7-5 syllables) about \"{theme}\". \
         Respond with only the haiku text, each line on its own line."
    )
}

fn classify_status(status: u16, body: &str) -> GenerationError {
    if status == 429 {
        GenerationError::RateLimited
    } else {
        GenerationError::Http {
            status,
            body: body.trim().to_string(),
        }
    }
}

/// Pulls the generated text out of a generateContent response body.
fn extract_text(body: &Value) -> Result<String, GenerationError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .ok_or(GenerationError::Malformed)?;

    let cleaned = clean_response(text);
    if cleaned.is_empty() {
        return Err(GenerationError::Malformed);
    }
    Ok(cleaned)
}

/// Models sometimes fence the haiku or pad it with blank lines;
/// strip both before display.
fn clean_response(raw: &str) -> String {
    let unfenced = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");

    Regex::new(r"\n{2,}")
        .unwrap()
        .replace_all(&unfenced, "\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_theme_and_shape() {
        let prompt = build_prompt("ocean");
        assert!(prompt.contains("\"ocean\""));
        assert!(prompt.contains("5-7-5"));
        assert!(prompt.contains("only the haiku text"));
    }

    #[test]
    fn request_body_matches_the_wire_shape() {
        let prompt = build_prompt("joy");
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value.pointer("/contents/0/parts/0/text").and_then(|v| v.as_str()),
            Some(prompt.as_str())
        );
    }

    #[test]
    fn extracts_candidate_text() {
        let body: Value = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Line1\nLine2\nLine3\n"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&body).unwrap(), "Line1\nLine2\nLine3");
    }

    #[test]
    fn missing_text_is_malformed() {
        let body: Value = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_text(&body), Err(GenerationError::Malformed));
    }

    #[test]
    fn blank_text_is_malformed() {
        let body: Value = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  \n\n "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&body), Err(GenerationError::Malformed));
    }

    #[test]
    fn cleanup_strips_fences_and_collapses_blank_runs() {
        let raw = "```\nsoft rain on the roof\n\nthe garden drinks in silence\n\n\nmorning holds its breath\n```\n";
        assert_eq!(
            clean_response(raw),
            "soft rain on the roof\nthe garden drinks in silence\nmorning holds its breath"
        );
    }

    #[test]
    fn status_429_classifies_as_rate_limited() {
        assert_eq!(
            classify_status(429, "quota exceeded"),
            GenerationError::RateLimited
        );
    }

    #[test]
    fn other_statuses_classify_as_http() {
        match classify_status(500, " internal error \n") {
            GenerationError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("Expected Http, got {:?}", other),
        }
    }

    #[test]
    fn source_is_built_only_when_a_key_is_present() {
        let without_key = GeneratorConfig::new();
        assert!(GeminiSource::from_config(&without_key).is_none());

        let with_key = GeneratorConfig::new().with_api_key("secret");
        let source = GeminiSource::from_config(&with_key).unwrap();
        assert_eq!(source.name(), "gemini");
        assert_eq!(source.model, "gemini-2.5-flash");
    }
}
