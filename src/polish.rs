//! Optional best-effort polish of the deterministic answer.
//!
//! The polish collaborator is an external text-rewriting call. It must never
//! be load-bearing: the deterministic synthesizer output is complete on its
//! own, and any polish failure falls back to it silently. Failures surface
//! as a [`PolishError`] for the caller to log, never as a panic and never
//! across the service boundary.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Instruction prepended to the draft answer. Asks the model to keep the
/// section structure intact so downstream pattern-matching still works.
pub const POLISH_PROMPT: &str = "Polish the following career guidance into a crisp, friendly \
    reply. Preserve sections (Summary, Recommended skills, Next Steps, Sample Projects, \
    (if present) 12-week plan). Keep bullets.";

/// Failures of the polish pass. All of them are recoverable by design; the
/// caller logs a warning and returns the unpolished draft.
#[derive(Debug, Error)]
pub enum PolishError {
    /// The polish endpoint URL could not be assembled.
    #[error("invalid polish endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// The HTTP request failed (connect, timeout, non-success status, body).
    #[error("polish request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The call succeeded but carried no usable text.
    #[error("polish response contained no text")]
    EmptyResponse,
}

/// A best-effort rewriter for synthesized answers.
///
/// One attempt per answer, no retries. Implementations should bound the
/// call with a timeout; the deterministic draft is always a valid result.
#[async_trait]
pub trait Polisher: Send + Sync {
    async fn polish(&self, draft: &str) -> Result<String, PolishError>;
}

/// Polisher backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiPolisher {
    client: reqwest::Client,
    base: Url,
    model: String,
    api_key: String,
}

impl GeminiPolisher {
    /// Default public API base.
    pub const DEFAULT_API_BASE: &'static str = "https://generativelanguage.googleapis.com/";
    /// Model used when none is configured.
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-pro";

    /// Builds a client bound by `timeout`. `base` lets tests point the
    /// polisher at a mock server.
    pub fn new(
        base: Url,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PolishError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> Result<Url, PolishError> {
        Ok(self
            .base
            .join(&format!("v1beta/models/{}:generateContent", self.model))?)
    }
}

#[async_trait]
impl Polisher for GeminiPolisher {
    async fn polish(&self, draft: &str) -> Result<String, PolishError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: format!("{POLISH_PROMPT}\n\n{draft}"),
                }],
            }],
        };

        let response: GenerateContentResponse = self
            .client
            .post(self.endpoint()?)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .find(|text| !text.is_empty())
            .ok_or(PolishError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
