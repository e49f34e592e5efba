//! All AI/LLM functionality

pub mod client;
pub mod summarizer;

// Re-export main types for convenience
pub use client::{GeminiClient, GenerateError, GenerationRequest, GenerationResponse, GenerativeModel};
pub use summarizer::LegalSummarizer;
