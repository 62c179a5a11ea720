//! Ticket resolution pipeline
//!
//! Sequences retrieval, prompt construction, generation, and extraction.
//! No state persists between calls. The one invariant the boundary layer
//! depends on: every exit path returns a well-formed three-key response,
//! whatever fails internally.

use std::sync::Arc;
use tracing::{error, info};

use crate::llm::Generator;
use crate::rag::extract::{extract_structured, Extraction};
use crate::rag::prompt::build_prompt;
use crate::rag::response::StructuredResponse;
use crate::rag::retriever::Retriever;

const EMPTY_TICKET_MESSAGE: &str = "Error: Empty ticket provided.";
const NO_DOCUMENTS_MESSAGE: &str = "No relevant documents found to answer the ticket.";
const INCOMPLETE_RESPONSE_MESSAGE: &str = "Error: Incomplete response from LLM.";

/// End-to-end ticket resolution
pub struct TicketPipeline {
    retriever: Retriever,
    generator: Arc<dyn Generator>,
    top_k: usize,
}

impl TicketPipeline {
    /// Create a pipeline over a retriever and a generator
    pub fn new(retriever: Retriever, generator: Arc<dyn Generator>) -> Self {
        Self {
            retriever,
            generator,
            top_k: 1,
        }
    }

    /// Override the default number of sections retrieved per ticket
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Resolve a ticket with the default top-k
    pub async fn resolve(&self, ticket: &str) -> StructuredResponse {
        self.generate_response(ticket, self.top_k).await
    }

    /// Resolve a ticket: retrieve, prompt, generate, extract, validate.
    pub async fn generate_response(&self, ticket: &str, top_k: usize) -> StructuredResponse {
        if ticket.trim().is_empty() {
            return StructuredResponse::fallback(EMPTY_TICKET_MESSAGE);
        }

        let docs = self.retriever.retrieve_docs(ticket, top_k);
        if docs.is_empty() {
            return StructuredResponse::fallback(NO_DOCUMENTS_MESSAGE);
        }

        info!(docs = docs.len(), "Retrieved context for ticket");

        let prompt = build_prompt(ticket, &docs);

        // A failed generator call degrades to empty output so the failure
        // resolves through the extraction fallback, never as an error
        let raw = match self.generator.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Generator call failed");
                String::new()
            }
        };

        match extract_structured(&raw) {
            Extraction::Parsed(map) => StructuredResponse::from_map(map)
                .unwrap_or_else(|| StructuredResponse::fallback(INCOMPLETE_RESPONSE_MESSAGE)),
            Extraction::Fallback(response) => response,
        }
    }

    /// Whether the underlying index has anything to retrieve from
    pub fn retrieval_available(&self) -> bool {
        self.retriever.is_available()
    }
}
