//! Section index
//!
//! Owns the loaded policy sections and the nearest-neighbor structure over
//! their embeddings, aligned position-for-position. Built once before any
//! request is served; concurrent reads need no locking afterwards.

use tracing::{info, warn};

use crate::embedding::TextEmbedder;
use crate::index::FlatIndex;
use crate::ingest::Section;

/// Immutable index over embedded policy sections
pub struct SectionIndex {
    sections: Vec<Section>,
    index: Option<FlatIndex>,
}

impl SectionIndex {
    /// Build the index from loaded sections.
    ///
    /// Never fails: an empty section list, a batch embedding failure, or an
    /// empty embedding set all produce the explicit empty state in which
    /// search is unavailable and `is_populated` returns false.
    pub fn build(sections: Vec<Section>, embedder: &dyn TextEmbedder) -> Self {
        if sections.is_empty() {
            warn!("No policy sections to index; retrieval is disabled");
            return Self::empty();
        }

        let texts: Vec<&str> = sections.iter().map(|s| s.text.as_str()).collect();

        let embeddings = match embedder.embed_batch(&texts) {
            Ok(embeddings) => embeddings,
            Err(e) => {
                warn!(error = %e, "Embedding policy sections failed; retrieval is disabled");
                return Self::empty();
            }
        };

        if embeddings.is_empty() {
            warn!("Embedder returned no vectors; retrieval is disabled");
            return Self::empty();
        }

        let mut index = FlatIndex::new(embeddings[0].len());
        if let Err(e) = index.add(embeddings) {
            warn!(error = %e, "Indexing section embeddings failed; retrieval is disabled");
            return Self::empty();
        }

        info!(sections = sections.len(), "Built section index");

        Self {
            sections,
            index: Some(index),
        }
    }

    /// The empty "no retrieval possible" state
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
            index: None,
        }
    }

    /// Whether the index holds any searchable vectors
    pub fn is_populated(&self) -> bool {
        self.index.as_ref().is_some_and(|index| !index.is_empty())
    }

    /// Number of indexed sections
    pub fn len(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Section stored at an index position
    pub fn section(&self, position: usize) -> Option<&Section> {
        self.sections.get(position)
    }

    /// Nearest sections to the query vector, ascending by distance.
    ///
    /// Returns an empty list when the index is unpopulated or the query does
    /// not fit the index; positions always refer to stored sections.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        let Some(index) = self.index.as_ref() else {
            return Vec::new();
        };

        match index.search(query, k) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "Section index search failed");
                Vec::new()
            }
        }
    }
}
