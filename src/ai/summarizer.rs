//! Legal document summarization on top of a [`GenerativeModel`].

use std::sync::Arc;
use tracing::{error, info, warn};

use super::client::{GenerateError, GenerationRequest, GenerativeModel};
use crate::errors::SummarizerError;
use crate::prompt::{build_combined_prompt, build_system_instruction, build_user_content};

pub struct LegalSummarizer {
    model: Arc<dyn GenerativeModel>,
    model_name: String,
}

impl LegalSummarizer {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>, model_name: String) -> Self {
        Self { model, model_name }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Summarizes `document` in roughly `target_words` words.
    ///
    /// The first attempt sends the system instruction separately. If the
    /// model rejects that parameter, one more attempt is made with a single
    /// combined prompt. Every other failure is returned as
    /// [`SummarizerError::Generation`] without retrying.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Generation`] when no attempt produced output.
    pub async fn summarize(
        &self,
        document: &str,
        target_words: u64,
    ) -> Result<String, SummarizerError> {
        let system_instruction = build_system_instruction(target_words);
        let user_content = build_user_content(document);

        info!(
            model = %self.model_name,
            target_words,
            "Generating legal summary"
        );

        let first = self
            .model
            .generate(&GenerationRequest {
                model: self.model_name.clone(),
                content: user_content.clone(),
                system_instruction: Some(system_instruction.clone()),
            })
            .await;

        let response = match first {
            Ok(response) => response,
            Err(GenerateError::UnsupportedParameter(reason)) => {
                warn!(
                    "System instruction rejected ({}); retrying with combined prompt",
                    reason
                );
                self.model
                    .generate(&GenerationRequest {
                        model: self.model_name.clone(),
                        content: build_combined_prompt(&system_instruction, &user_content),
                        system_instruction: None,
                    })
                    .await
                    .map_err(generation_error)?
            }
            Err(e) => return Err(generation_error(e)),
        };

        Ok(response.into_text())
    }
}

fn generation_error(error: GenerateError) -> SummarizerError {
    error!("Summary generation failed: {}", error);
    SummarizerError::Generation(error.to_string())
}
