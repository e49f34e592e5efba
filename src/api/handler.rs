//! Request handlers.
//!
//! `POST /api/summarize` accepts a multipart form with an optional `file`
//! and an optional `text` field, sizes the summary from the document and
//! delegates generation to the [`LegalSummarizer`](crate::ai::LegalSummarizer).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use serde_json::{Value, json};
use tracing::{debug, info};
use uuid::Uuid;

use super::state::AppState;
use crate::core::models::SummarizeResponse;
use crate::errors::SummarizerError;
use crate::extract::{ExtractedDocument, extract_document};
use crate::sizing::{SizingParams, SummaryTargetSpec};

/// Word budget used when nothing could be sized.
pub const DEFAULT_TARGET_WORDS: u64 = 1000;

const FILE_FIELD: &str = "file";
const TEXT_FIELD: &str = "text";

/// An uploaded file as received from the form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Content to summarize together with its sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDocument {
    pub content: String,
    pub summary_totals: Option<SummaryTargetSpec>,
}

impl PreparedDocument {
    #[must_use]
    pub fn target_words(&self) -> u64 {
        self.summary_totals
            .map_or(DEFAULT_TARGET_WORDS, |totals| totals.total_words)
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Legal Document Summarizer API" }))
}

/// # Errors
///
/// Returns a 400 response when the form is malformed or carries no text, a
/// 413 response when the upload exceeds the body limit, and a 500 response
/// when extraction or generation fails.
#[tracing::instrument(level = "info", skip_all, fields(correlation_id = %Uuid::new_v4()))]
pub async fn summarize_document(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummarizeResponse>, SummarizerError> {
    let (upload, text) = read_form(multipart?).await?;
    info!(
        has_file = upload.is_some(),
        has_text = text.is_some(),
        "API received summarize request"
    );

    let extracted = match upload {
        Some(upload) => Some(extract_document(upload.filename.as_deref(), upload.bytes).await?),
        None => None,
    };

    let prepared = prepare_document(state.sizing(), extracted, text);
    if prepared.content.trim().is_empty() {
        return Err(SummarizerError::EmptyContent);
    }

    info!(summary_totals = ?prepared.summary_totals, "Computed summary target");

    let summary = state
        .summarizer()
        .summarize(&prepared.content, prepared.target_words())
        .await?;

    info!(summary_chars = summary.chars().count(), "Summary generated");
    Ok(Json(SummarizeResponse::success(
        summary,
        prepared.summary_totals,
    )))
}

/// Combines an extracted file and free text into the content to summarize.
///
/// A PDF is sized from its page count and other files from their word count.
/// Text is appended to file content when there is any; on its own it becomes
/// the content and is sized from its word count.
#[must_use]
pub fn prepare_document(
    sizing: &SizingParams,
    extracted: Option<ExtractedDocument>,
    text: Option<String>,
) -> PreparedDocument {
    let mut content = String::new();
    let mut summary_totals = None;

    if let Some(document) = extracted {
        let pages = match document.page_count {
            Some(count) => f64::from(count),
            None => sizing.estimate_pages(&document.text),
        };
        summary_totals = Some(sizing.estimate(pages));
        content = document.text;
    }

    if let Some(text) = text {
        if content.is_empty() {
            summary_totals = Some(sizing.estimate(sizing.estimate_pages(&text)));
            content = text;
        } else {
            content.push_str("\n\n");
            content.push_str(&text);
        }
    }

    PreparedDocument {
        content,
        summary_totals,
    }
}

async fn read_form(
    mut multipart: Multipart,
) -> Result<(Option<Upload>, Option<String>), SummarizerError> {
    let mut upload = None;
    let mut text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                // Browsers send an empty part when no file was chosen.
                if filename.is_some() || !bytes.is_empty() {
                    upload = Some(Upload { filename, bytes });
                }
            }
            Some(TEXT_FIELD) => {
                let value = field.text().await?;
                if !value.is_empty() {
                    text = Some(value);
                }
            }
            other => debug!("Ignoring unexpected form field {:?}", other),
        }
    }

    Ok((upload, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_document(text: &str) -> ExtractedDocument {
        ExtractedDocument {
            page_count: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_pdf_sized_from_page_count() {
        let document = ExtractedDocument {
            page_count: Some(10),
            text: "\n--- Page 1 ---\n\nshort".to_string(),
        };
        let prepared = prepare_document(&SizingParams::default(), Some(document), None);
        let totals = prepared.summary_totals.unwrap();
        assert_eq!(totals.total_words, 600);
        assert!((totals.original_pages - 10.0).abs() < f64::EPSILON);
        assert_eq!(prepared.target_words(), 600);
    }

    #[test]
    fn test_text_file_sized_from_word_count() {
        let body = "word ".repeat(1500);
        let prepared = prepare_document(&SizingParams::default(), Some(text_document(&body)), None);
        let totals = prepared.summary_totals.unwrap();
        assert!((totals.original_pages - 5.0).abs() < f64::EPSILON);
        assert_eq!(totals.total_words, 300);
        assert_eq!(prepared.content, body);
    }

    #[test]
    fn test_text_appended_to_file_keeps_file_sizing() {
        let document = ExtractedDocument {
            page_count: Some(5),
            text: "file body".to_string(),
        };
        let prepared = prepare_document(
            &SizingParams::default(),
            Some(document),
            Some("extra notes".to_string()),
        );
        assert_eq!(prepared.content, "file body\n\nextra notes");
        assert_eq!(prepared.summary_totals.unwrap().total_words, 300);
    }

    #[test]
    fn test_text_alone_is_sized() {
        let text = "word ".repeat(3000);
        let prepared = prepare_document(&SizingParams::default(), None, Some(text.clone()));
        assert_eq!(prepared.content, text);
        assert_eq!(prepared.summary_totals.unwrap().total_words, 600);
    }

    #[test]
    fn test_text_replaces_empty_file_content() {
        let prepared = prepare_document(
            &SizingParams::default(),
            Some(text_document("")),
            Some("word ".repeat(300)),
        );
        assert_eq!(prepared.summary_totals.unwrap().total_words, 60);
        assert!(!prepared.content.starts_with("\n\n"));
    }

    #[test]
    fn test_nothing_supplied_uses_default_budget() {
        let prepared = prepare_document(&SizingParams::default(), None, None);
        assert!(prepared.content.is_empty());
        assert_eq!(prepared.summary_totals, None);
        assert_eq!(prepared.target_words(), DEFAULT_TARGET_WORDS);
    }
}
