// Retrieval-augmented ticket resolution
//
// This module implements retrieval over the section index, prompt assembly,
// tolerant extraction of structured model output, and the pipeline that
// sequences them.
//
// Components:
// - Retriever: nearest-section lookup for a ticket
// - Prompt: deterministic instruction template around retrieved context
// - Extract: recover the last well-formed JSON object from raw model output
// - Response: the three-key contract object returned to callers
// - Pipeline: end-to-end orchestration with fixed fallbacks

pub mod extract;
pub mod pipeline;
pub mod prompt;
pub mod response;
pub mod retriever;

// Re-export key types
pub use extract::{extract_structured, Extraction};
pub use pipeline::TicketPipeline;
pub use prompt::build_prompt;
pub use response::StructuredResponse;
pub use retriever::{RetrievedDoc, Retriever};
