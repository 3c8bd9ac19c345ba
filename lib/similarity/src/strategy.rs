//! Distance strategies
//!
//! Two interchangeable scorings of a (query, candidate) phrase pair over
//! the same embedding table. Both are pure: computing a matrix twice
//! yields identical results, and the strategies share no mutable state.

use crate::mapping::{DistanceMapping, DistanceMatrix};
use crate::vectorize::{SentenceVectorizer, UnknownWordPolicy};
use semrank_core::{tokenize, WordEmbeddings};

/// A scoring of query/candidate phrase pairs, lower is closer
pub trait DistanceStrategy {
    /// Short identifier used in file names and logs
    fn name(&self) -> &'static str;

    /// Distance between a query phrase and a candidate phrase
    fn distance(&self, query: &str, candidate: &str) -> f32;
}

/// Cosine distance between running-average phrase vectors
///
/// `1 - cosine_similarity(avg(query), avg(candidate))`. A phrase whose
/// average vector has zero magnitude makes the cosine NaN; that is left
/// to propagate (the ranker orders incomparable values as equal).
#[derive(Debug, Clone, Copy)]
pub struct BaselineStrategy<'a> {
    vectorizer: SentenceVectorizer<'a>,
}

impl<'a> BaselineStrategy<'a> {
    #[must_use]
    pub fn new(embeddings: &'a WordEmbeddings) -> Self {
        Self {
            vectorizer: SentenceVectorizer::new(embeddings),
        }
    }

    #[must_use]
    pub fn with_policy(embeddings: &'a WordEmbeddings, policy: UnknownWordPolicy) -> Self {
        Self {
            vectorizer: SentenceVectorizer::with_policy(embeddings, policy),
        }
    }
}

impl DistanceStrategy for BaselineStrategy<'_> {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn distance(&self, query: &str, candidate: &str) -> f32 {
        let q = self.vectorizer.average_vector(query);
        let c = self.vectorizer.average_vector(candidate);
        1.0 - q.cosine_similarity(&c)
    }
}

/// Word-mover's distance between token multisets
///
/// Delegates the transport computation to the embedding table. The
/// candidate is passed as the source side, matching the historical
/// argument order; the metric is symmetric either way.
#[derive(Debug, Clone, Copy)]
pub struct WmdStrategy<'a> {
    embeddings: &'a WordEmbeddings,
}

impl<'a> WmdStrategy<'a> {
    #[must_use]
    pub fn new(embeddings: &'a WordEmbeddings) -> Self {
        Self { embeddings }
    }
}

impl DistanceStrategy for WmdStrategy<'_> {
    fn name(&self) -> &'static str {
        "wmd"
    }

    fn distance(&self, query: &str, candidate: &str) -> f32 {
        self.embeddings
            .wmdistance(&tokenize(candidate), &tokenize(query))
    }
}

/// Distance of every query against every candidate
///
/// The matrix keys follow the query list, each inner mapping follows the
/// candidate list.
pub fn compute_distances(
    strategy: &dyn DistanceStrategy,
    queries: &[String],
    candidates: &[String],
) -> DistanceMatrix {
    queries
        .iter()
        .map(|query| {
            let row: DistanceMapping = candidates
                .iter()
                .map(|candidate| (candidate.clone(), strategy.distance(query, candidate)))
                .collect();
            (query.clone(), row)
        })
        .collect()
}
