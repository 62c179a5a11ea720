//! Error types for the ticket resolution pipeline
//!
//! Internal components fail loudly through these variants. The pipeline
//! orchestrator absorbs every one of them into a fixed fallback response,
//! so the three-key contract object always reaches the caller.

use thiserror::Error;

/// Main error type for the policydesk pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Embedding model errors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector index errors
    #[error("Index error: {0}")]
    Index(String),

    /// Generator invocation errors (spawn failure, non-zero exit, timeout)
    #[error("Generator error: {0}")]
    Generator(String),

    /// Ollama API errors
    #[error("Ollama API error: {0}")]
    OllamaApi(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Pipeline error: {0}")]
    Generic(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Convert anyhow errors to PipelineError
impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Generic(err.to_string())
    }
}
