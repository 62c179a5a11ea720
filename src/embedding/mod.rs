// Sentence embedding
//
// The index and retriever depend on the TextEmbedder trait rather than a
// concrete model, so the embedding backend is an injected handle instead of
// ambient state and tests can run without a model download.

pub mod engine;

pub use engine::EmbeddingEngine;

use crate::errors::Result;

/// Fixed-dimension text embedding provider
pub trait TextEmbedder: Send + Sync {
    /// Embed a single text
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a batch of texts in one pass
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Output dimensionality of this embedder
    fn dimension(&self) -> usize;
}

#[cfg(test)]
pub mod testing {
    //! Deterministic embedder doubles for unit tests.

    use super::TextEmbedder;
    use crate::errors::{PipelineError, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub const TEST_DIM: usize = 26;

    /// Embeds text as normalized letter frequencies. Identical texts map to
    /// identical vectors, so a query equal to a stored text has distance 0.
    #[derive(Default)]
    pub struct CharFreqEmbedder {
        pub calls: AtomicUsize,
    }

    impl CharFreqEmbedder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TextEmbedder for CharFreqEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut counts = vec![0f32; TEST_DIM];
            let mut total = 0f32;
            for c in text.chars().flat_map(|c| c.to_lowercase()) {
                if c.is_ascii_lowercase() {
                    counts[(c as u8 - b'a') as usize] += 1.0;
                    total += 1.0;
                }
            }
            if total > 0.0 {
                for v in &mut counts {
                    *v /= total;
                }
            }
            Ok(counts)
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }

        fn dimension(&self) -> usize {
            TEST_DIM
        }
    }

    /// Always fails, for exercising the degraded paths.
    pub struct FailingEmbedder;

    impl TextEmbedder for FailingEmbedder {
        fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Err(PipelineError::Embedding("embedder unavailable".to_string()))
        }

        fn embed_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>> {
            Err(PipelineError::Embedding("embedder unavailable".to_string()))
        }

        fn dimension(&self) -> usize {
            TEST_DIM
        }
    }
}
