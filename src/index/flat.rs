//! Flat exact nearest-neighbor index
//!
//! Brute-force squared-Euclidean search over fixed-dimension vectors.
//! Positions are assigned in insertion order and returned with their
//! distances, ascending. Requested k is clamped to the stored count.

use crate::errors::{PipelineError, Result};

/// Exact squared-L2 nearest-neighbor index
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Create an empty index for vectors of the given dimensionality
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    /// Append vectors to the index, assigning consecutive positions
    pub fn add(&mut self, vectors: Vec<Vec<f32>>) -> Result<()> {
        for vector in &vectors {
            if vector.len() != self.dimension {
                return Err(PipelineError::Index(format!(
                    "vector dimension {} does not match index dimension {}",
                    vector.len(),
                    self.dimension
                )));
            }
        }
        self.vectors.extend(vectors);
        Ok(())
    }

    /// Number of indexed vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector dimensionality this index was created for
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Find the k nearest vectors to the query by squared Euclidean distance.
    ///
    /// Returns at most `min(k, len)` `(position, distance)` pairs, ascending
    /// by distance with ties broken by position.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimension {
            return Err(PipelineError::Index(format!(
                "query dimension {} does not match index dimension {}",
                query.len(),
                self.dimension
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (position, squared_l2(query, vector)))
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.truncate(k.min(self.vectors.len()));

        Ok(scored)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn sample_index() -> FlatIndex {
        let mut index = FlatIndex::new(2);
        index
            .add(vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![0.0, 2.0],
                vec![3.0, 3.0],
            ])
            .unwrap();
        index
    }

    #[test]
    fn test_search_orders_by_distance() {
        let index = sample_index();
        let results = index.search(&[0.1, 0.0], 4).unwrap();

        let positions: Vec<usize> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);

        for window in results.windows(2) {
            assert!(window[0].1 <= window[1].1);
        }
    }

    #[test]
    fn test_distances_are_non_negative() {
        let index = sample_index();
        let results = index.search(&[-1.0, -1.0], 4).unwrap();
        assert!(results.iter().all(|(_, d)| *d >= 0.0));
    }

    #[test]
    fn test_exact_match_has_zero_distance() {
        let index = sample_index();
        let results = index.search(&[0.0, 2.0], 1).unwrap();
        assert_eq!(results[0].0, 2);
        assert_eq!(results[0].1, 0.0);
    }

    #[test]
    fn test_k_clamped_to_index_size() {
        let index = sample_index();
        let results = index.search(&[0.0, 0.0], 100).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_k_zero_returns_nothing() {
        let index = sample_index();
        assert!(index.search(&[0.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_empty_index_search() {
        let index = FlatIndex::new(2);
        assert!(index.search(&[0.0, 0.0], 5).unwrap().is_empty());
    }

    #[test]
    fn test_tie_broken_by_position() {
        let mut index = FlatIndex::new(1);
        index
            .add(vec![vec![1.0], vec![-1.0], vec![1.0]])
            .unwrap();

        let results = index.search(&[0.0], 3).unwrap();
        let positions: Vec<usize> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_dimension_mismatch_on_add() {
        let mut index = FlatIndex::new(3);
        let result = index.add(vec![vec![1.0, 2.0]]);
        assert!(result.is_err());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_dimension_mismatch_on_search() {
        let index = sample_index();
        assert!(index.search(&[1.0], 1).is_err());
    }

    #[quickcheck]
    fn prop_search_never_exceeds_len_or_range(k: usize) -> bool {
        let index = sample_index();
        let results = index.search(&[0.5, 0.5], k).unwrap();
        results.len() <= index.len().min(k)
            && results.iter().all(|(p, d)| *p < index.len() && *d >= 0.0)
    }
}
