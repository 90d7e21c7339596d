use std::cmp::Ordering;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

use crate::domain::recommendation::MatchEntry;

/// Dimension of the vectors produced by [`FastembedEmbedder`].
pub const EMBEDDING_DIMENSION: usize = 384;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to initialize embedding model: {0}")]
    Init(String),
    #[error("failed to generate embeddings: {0}")]
    Model(String),
    #[error("embedder returned {actual} vectors for {expected} texts")]
    BatchShape { expected: usize, actual: usize },
    #[error("embedder returned a {actual}-dimensional vector, expected {expected}")]
    VectorShape { expected: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("embedding dimension mismatch for {id}: expected {expected}, found {found}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
}

/// Text-to-vector boundary. Implementations return one vector per input
/// text, in input order, all with the same dimension.
pub trait Embedder: Send {
    fn model_name(&self) -> &str;
    fn dimension(&self) -> usize;
    fn embed(&mut self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Embedder backed by the fastembed MiniLM sentence model.
pub struct FastembedEmbedder {
    model: TextEmbedding,
}

impl FastembedEmbedder {
    pub fn try_new() -> Result<Self, EmbeddingError> {
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::AllMiniLML6V2))
            .map_err(|error| EmbeddingError::Init(format!("{error:?}")))?;

        Ok(Self { model })
    }
}

impl Embedder for FastembedEmbedder {
    fn model_name(&self) -> &str {
        "all-MiniLM-L6-v2"
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn embed(&mut self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.model
            .embed(texts, None)
            .map_err(|error| EmbeddingError::Model(format!("{error:?}")))
    }
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Score every candidate against the query and keep the top `k`.
///
/// The comparison is exhaustive. Results are ordered by descending score;
/// equal scores keep the candidates' original order. An empty candidate set
/// or `k == 0` yields an empty list.
pub fn rank_top_k(
    query: &[f32],
    candidates: &[(String, Vec<f32>)],
    k: usize,
) -> Result<Vec<MatchEntry>, MatchError> {
    if candidates.is_empty() || k == 0 {
        return Ok(Vec::new());
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for (id, vector) in candidates {
        if vector.len() != query.len() {
            return Err(MatchError::DimensionMismatch {
                id: id.clone(),
                expected: query.len(),
                found: vector.len(),
            });
        }

        scored.push(MatchEntry {
            id: id.clone(),
            score: cosine_similarity(query, vector),
        });
    }

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(k);

    Ok(scored)
}
