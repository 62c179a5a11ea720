//! Ticket retriever
//!
//! Embeds a ticket with the same embedder used at index build time and maps
//! the nearest index hits back to their sections. Every failure mode (blank
//! ticket, unpopulated index, embedding failure) returns an empty list and
//! logs a diagnostic rather than raising.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

use crate::embedding::TextEmbedder;
use crate::index::SectionIndex;

/// A retrieved section with its distance to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDoc {
    pub policy: String,
    pub section: String,
    pub title: String,
    pub text: String,
    pub distance: f32,
}

/// Nearest-section retrieval over the built index
pub struct Retriever {
    index: Arc<SectionIndex>,
    embedder: Arc<dyn TextEmbedder>,
}

impl Retriever {
    /// Create a retriever over an index and the embedder that built it
    pub fn new(index: Arc<SectionIndex>, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { index, embedder }
    }

    /// Retrieve the `top_k` sections most similar to the ticket.
    ///
    /// Results keep the search order: ascending distance, most similar
    /// first. `top_k` is clamped to the indexed count.
    pub fn retrieve_docs(&self, ticket: &str, top_k: usize) -> Vec<RetrievedDoc> {
        if ticket.trim().is_empty() {
            warn!("Empty or invalid ticket provided to retrieve_docs");
            return Vec::new();
        }

        if !self.index.is_populated() {
            warn!("Section index is not populated");
            return Vec::new();
        }

        let query = match self.embedder.embed(ticket) {
            Ok(query) => query,
            Err(e) => {
                error!(error = %e, "Failed to embed ticket");
                return Vec::new();
            }
        };

        let top_k = top_k.min(self.index.len());

        self.index
            .search(&query, top_k)
            .into_iter()
            .filter_map(|(position, distance)| {
                self.index.section(position).map(|section| RetrievedDoc {
                    policy: section.policy.clone(),
                    section: section.section.clone(),
                    title: section.title.clone(),
                    text: section.text.clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Whether retrieval can return anything at all
    pub fn is_available(&self) -> bool {
        self.index.is_populated()
    }
}
