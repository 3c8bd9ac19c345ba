//! Sentence vectorization
//!
//! Reduces a phrase to a single vector by a running pairwise average of
//! its word vectors. The reduction is intentionally NOT a true mean: the
//! first token seeds the accumulator and every later token folds in as
//! `(accumulator + next) / 2`, so earlier tokens weigh more. Downstream
//! comparisons assume this exact formula; do not replace it.

use semrank_core::{tokenize, Vector, WordEmbeddings};
use serde::{Deserialize, Serialize};

/// What to do with a token missing from the embedding table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownWordPolicy {
    /// Substitute an all-zero vector (the historical behavior)
    #[default]
    ZeroVector,
    /// Drop the token from the reduction entirely
    Skip,
}

/// Turns phrases into vectors against a fixed embedding table
#[derive(Debug, Clone, Copy)]
pub struct SentenceVectorizer<'a> {
    embeddings: &'a WordEmbeddings,
    policy: UnknownWordPolicy,
}

impl<'a> SentenceVectorizer<'a> {
    /// Vectorizer with the default `ZeroVector` policy
    #[must_use]
    pub fn new(embeddings: &'a WordEmbeddings) -> Self {
        Self::with_policy(embeddings, UnknownWordPolicy::default())
    }

    #[must_use]
    pub fn with_policy(embeddings: &'a WordEmbeddings, policy: UnknownWordPolicy) -> Self {
        Self { embeddings, policy }
    }

    #[must_use]
    pub fn policy(&self) -> UnknownWordPolicy {
        self.policy
    }

    /// Running pairwise average of the phrase's word vectors
    ///
    /// An empty phrase (and, under `Skip`, a phrase of only unknown
    /// words) yields the all-zero vector. Infallible.
    #[must_use]
    pub fn average_vector(&self, phrase: &str) -> Vector {
        let dim = self.embeddings.dim();
        let mut accumulator: Option<Vector> = None;

        for word in tokenize(phrase) {
            let next = match self.embeddings.get(&word) {
                Some(v) => v.clone(),
                None => match self.policy {
                    UnknownWordPolicy::ZeroVector => Vector::zeros(dim),
                    UnknownWordPolicy::Skip => continue,
                },
            };

            accumulator = Some(match accumulator {
                None => next,
                Some(acc) => &(&acc + &next) * 0.5,
            });
        }

        accumulator.unwrap_or_else(|| Vector::zeros(dim))
    }
}
