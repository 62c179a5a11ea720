//! policydesk - RAG knowledge assistant for support tickets
//!
//! Retrieves policy-document sections relevant to a support ticket,
//! assembles them into a prompt, delegates generation to a local Ollama
//! model, and parses the reply into a structured three-key answer.
//!
//! # Architecture
//!
//! - **ingest**: load policy JSON files into section records
//! - **embedding**: sentence embeddings via a local MiniLM model
//! - **index**: exact nearest-neighbor search over embedded sections
//! - **rag**: retrieval, prompt assembly, output extraction, orchestration
//! - **llm**: the opaque generation boundary (process or HTTP)
//! - **api**: the inbound HTTP surface

pub mod api;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod errors;
pub mod index;
pub mod ingest;
pub mod llm;
pub mod rag;

// Re-export commonly used types
pub use errors::{PipelineError, Result};
pub use rag::{StructuredResponse, TicketPipeline};
