use std::sync::Arc;

use crate::ai::{GeminiClient, GenerativeModel, LegalSummarizer};
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;
use crate::sizing::SizingParams;

/// Immutable state shared by every request handler.
pub struct AppState {
    config: AppConfig,
    summarizer: LegalSummarizer,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, model: Arc<dyn GenerativeModel>) -> Self {
        let summarizer = LegalSummarizer::new(model, config.gemini_model.clone());
        Self { config, summarizer }
    }

    /// Builds the state with a Gemini client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self, SummarizerError> {
        let client = GeminiClient::from_config(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn sizing(&self) -> &SizingParams {
        &self.config.sizing
    }

    pub fn summarizer(&self) -> &LegalSummarizer {
        &self.summarizer
    }
}
