//! # Ad-Copy Generation
//!
//! Ad copy comes from a local text-generation server (Ollama's
//! `/api/generate`). The server is optional: when it is unreachable, answers
//! with an error status, or returns something unusable, callers still get a
//! deterministic templated copy built from the campaign name and interests.
//!
//! ## Wire Contract
//!
//! ```text
//! POST http://localhost:11434/api/generate
//! {"model": "mistral", "prompt": "...", "stream": false}
//!
//! 200 OK
//! {"model": "mistral", "created_at": "...", "response": "Headline: ...", "done": true}
//! ```
//!
//! ## Layers
//!
//! - [`TextGenerator`]: one prompt in, one text out, or a [`GenerationError`].
//! - [`OllamaClient`]: the HTTP implementation (blocking, with timeouts).
//! - [`AdCopyClient`]: builds the prompt, calls the generator, and falls back
//!   to [`fallback_ad_copy`]. It never fails; [`AdCopy::source`] records which
//!   path produced the text.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "mistral";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("generator answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("response has no generated text")]
    MissingResponse,
}

pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdCopySource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdCopy {
    pub text: String,
    pub source: AdCopySource,
}

impl AdCopy {
    pub fn is_fallback(&self) -> bool {
        self.source == AdCopySource::Fallback
    }
}

pub fn build_prompt(campaign_name: &str, interests: &[String]) -> String {
    format!(
        "Generate a short ad headline and one-line description for a campaign named \"{}\" targeted at people interested in {}. Format as \"Headline: [headline]\nDescription: [description]\"",
        campaign_name,
        interests.join(", ")
    )
}

/// Templated copy used whenever generation is unavailable.
pub fn fallback_ad_copy(campaign_name: &str, interests: &[String]) -> String {
    let primary = interests.first().map(String::as_str).unwrap_or("specific");
    format!(
        "Headline: {name} - Perfect for {all} enthusiasts\nDescription: Discover what makes {name} the perfect choice for your {primary} needs today!",
        name = campaign_name,
        all = interests.join(" & "),
        primary = primary,
    )
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Decode a `/api/generate` body into the generated text.
pub fn parse_generate_response(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedBody(e.to_string()))?;
    match parsed.response {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GenerationError::MissingResponse),
    }
}

pub struct OllamaClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENDPOINT,
            DEFAULT_MODEL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&request)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, _)) => return Err(GenerationError::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                return Err(GenerationError::Transport(transport.to_string()))
            }
        };
        if !(200..=299).contains(&response.status()) {
            return Err(GenerationError::Status(response.status()));
        }
        let body = response
            .into_string()
            .map_err(|e| GenerationError::MalformedBody(e.to_string()))?;
        parse_generate_response(&body)
    }
}

pub struct AdCopyClient<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> AdCopyClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generate_ad_copy(&self, campaign_name: &str, interests: &[String]) -> AdCopy {
        let prompt = build_prompt(campaign_name, interests);
        match self.generator.generate(&prompt) {
            Ok(text) => AdCopy {
                text,
                source: AdCopySource::Generated,
            },
            Err(e) => {
                tracing::warn!(error = %e, campaign = campaign_name, "Ad copy generation failed, using fallback");
                AdCopy {
                    text: fallback_ad_copy(campaign_name, interests),
                    source: AdCopySource::Fallback,
                }
            }
        }
    }
}
