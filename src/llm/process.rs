//! Subprocess generator
//!
//! Invokes `ollama run <model>` with the prompt on stdin and reads the raw
//! reply from stdout. Stderr is diagnostic-only. Non-zero exit and timeout
//! are generator failures; the timeout bounds the otherwise unbounded
//! latency of a local model call.

use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::errors::{PipelineError, Result};
use crate::llm::Generator;
use async_trait::async_trait;

/// Default time allowed for one generation call
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Generator backed by the `ollama` CLI
pub struct OllamaProcess {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl OllamaProcess {
    /// Create a generator running `ollama run <model>`
    pub fn new(model: &str) -> Self {
        Self {
            command: "ollama".to_string(),
            args: vec!["run".to_string(), model.to_string()],
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the generation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, prompt: &str) -> Result<String> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                PipelineError::Generator(format!("failed to spawn {}: {}", self.command, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| PipelineError::Generator(format!("failed to write prompt: {}", e)))?;
            // Dropping stdin closes the pipe so the model sees end of input
        }

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(PipelineError::Generator(format!(
                    "failed to read generator output: {}",
                    e
                )))
            }
            Err(_) => {
                return Err(PipelineError::Generator(format!(
                    "generation timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(stderr = %stderr.trim(), "Generator diagnostics");
        }

        if !output.status.success() {
            return Err(PipelineError::Generator(format!(
                "{} exited with status {}: {}",
                self.command,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl Generator for OllamaProcess {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.run(prompt).await
    }
}
