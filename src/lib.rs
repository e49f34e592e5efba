/// LexBrief - an HTTP service that summarizes legal documents with Gemini.
///
/// A request carries a PDF, a text file and/or raw text. The service extracts
/// the text, derives a target summary length from the document's size and asks
/// the generative model for a six-section structured legal summary.
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface (`POST /api/summarize`)
/// - lopdf for PDF page counting and text extraction
/// - reqwest for the Gemini `generateContent` API
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use lexbrief::ai::{GeminiClient, LegalSummarizer};
/// use lexbrief::core::config::AppConfig;
/// use lexbrief::sizing::estimate_summary_target;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     lexbrief::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = GeminiClient::from_config(&config)?;
///     let summarizer = LegalSummarizer::new(Arc::new(client), config.gemini_model.clone());
///
///     // A 12 page judgment gets a summary of about 720 words
///     let target = estimate_summary_target(12.0);
///     let summary = summarizer
///         .summarize("IN THE SUPREME COURT ...", target.total_words)
///         .await?;
///     println!("{summary}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod extract;
pub mod prompt;
pub mod sizing;
pub mod utils;

/// Configure structured JSON logging.
///
/// Installs a tracing-subscriber JSON formatter with targets. The level comes
/// from `RUST_LOG` and defaults to `info`. Calling it again after a subscriber
/// is installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at process start
/// lexbrief::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
