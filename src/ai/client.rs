//! Generative model (Gemini) API client module
//!
//! Encapsulates all outbound calls to the text-generation API and resolves the
//! heterogeneous response shapes into a [`GenerationResponse`] at the boundary.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Substrings of an API error body that mean the system instruction field
/// itself was rejected, rather than the request as a whole.
const SYSTEM_INSTRUCTION_FIELDS: &[&str] = &["systeminstruction", "system_instruction"];
const UNSUPPORTED_MARKERS: &[&str] = &[
    "unknown name",
    "cannot find field",
    "not supported",
    "unsupported",
    "invalid",
];
const DEVELOPER_INSTRUCTION_DISABLED: &str = "developer instruction is not enabled";

/// One call to the text-generation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub content: String,
    pub system_instruction: Option<String>,
}

/// Response of a generation call, resolved once from the wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResponse {
    /// The response exposed its text directly.
    DirectText(String),
    /// Text of the first part of the first candidate.
    CandidateText(String),
    /// Neither shape matched; holds the raw response rendered as a string.
    Opaque(String),
}

impl GenerationResponse {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<WireResponse>(value.clone()) {
            Ok(WireResponse {
                text: Some(text), ..
            }) => Self::DirectText(text),
            Ok(wire) => wire
                .candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .and_then(|content| content.parts.into_iter().next())
                .and_then(|part| part.text)
                .map_or_else(|| Self::Opaque(value.to_string()), Self::CandidateText),
            Err(_) => Self::Opaque(value.to_string()),
        }
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::DirectText(text) | Self::CandidateText(text) | Self::Opaque(text) => text,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The API rejected the separate system instruction parameter.
    #[error("System instruction not supported: {0}")]
    UnsupportedParameter(String),

    #[error("{0}")]
    Failed(String),
}

/// Seam between the summarizer and the concrete generation API.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError>;
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent<'a>>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WireTextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct WireTextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WirePart>,
}

#[derive(Debug, Deserialize)]
struct WirePart {
    #[serde(default)]
    text: Option<String>,
}

impl<'a> WireRequest<'a> {
    fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![WireContent {
                role: Some("user"),
                parts: vec![WireTextPart {
                    text: &request.content,
                }],
            }],
            system_instruction: request.system_instruction.as_deref().map(|text| WireContent {
                role: None,
                parts: vec![WireTextPart { text }],
            }),
        }
    }
}

// ============================================================================
// Gemini client
// ============================================================================

/// Gemini `generateContent` client. Holds no per-request state and can be
/// shared freely across requests.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.google_api_key.clone(),
            &config.gemini_base_url,
            Duration::from_secs(config.gemini_timeout_secs),
        )
    }

    #[must_use]
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{API_VERSION}/models/{model}:generateContent",
            self.base_url
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerateError> {
        let body = WireRequest::from_request(request);

        #[cfg(feature = "debug-logs")]
        tracing::debug!(
            endpoint = %self.endpoint(&request.model),
            system_instruction_chars = request
                .system_instruction
                .as_deref()
                .map_or(0, |text| text.chars().count()),
            "Gemini request body prepared"
        );

        info!(
            model = %request.model,
            content_chars = request.content.chars().count(),
            has_system_instruction = request.system_instruction.is_some(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Failed(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(classify_error(
                status,
                &error_text,
                request.system_instruction.is_some(),
            ));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| GenerateError::Failed(format!("Failed to parse Gemini response: {e}")))?;

        let resolved = GenerationResponse::from_value(value);
        if let GenerationResponse::Opaque(_) = resolved {
            warn!("Gemini response carried no text; returning raw response");
        }
        Ok(resolved)
    }
}

/// Maps a non-success API response onto a [`GenerateError`].
fn classify_error(status: StatusCode, body: &str, sent_system_instruction: bool) -> GenerateError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    if sent_system_instruction
        && status.is_client_error()
        && rejects_system_instruction(&message)
    {
        return GenerateError::UnsupportedParameter(message);
    }

    GenerateError::Failed(format!("Gemini API error (status {status}): {message}"))
}

fn rejects_system_instruction(message: &str) -> bool {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains(DEVELOPER_INSTRUCTION_DISABLED) {
        return true;
    }
    SYSTEM_INSTRUCTION_FIELDS.iter().any(|f| lowered.contains(f))
        && UNSUPPORTED_MARKERS.iter().any(|m| lowered.contains(m))
}
