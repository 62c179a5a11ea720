// Text generation boundary
//
// The pipeline sees one capability: prompt string in, raw text out. The
// boundary can be a local `ollama run` process or the Ollama HTTP API
// without the orchestrator knowing the difference.

pub mod ollama;
pub mod process;

pub use ollama::OllamaHttp;
pub use process::OllamaProcess;

use crate::errors::Result;
use async_trait::async_trait;

/// Opaque text generator: prompt in, raw text out
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a raw text reply for the prompt.
    ///
    /// Fails on process or transport errors; callers decide how failures
    /// fold into their own contract.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
