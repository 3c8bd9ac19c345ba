//! # semrank Similarity
//!
//! Sentence vectorization, distance strategies, and ranking.
//!
//! This crate turns two phrase lists and an embedding table into rank
//! mappings:
//!
//! - **Sentence Vectorizer**: running-pairwise-average phrase vectors
//!   with an explicit [`UnknownWordPolicy`]
//! - **Distance Strategies**: [`BaselineStrategy`] (cosine distance of
//!   average vectors) and [`WmdStrategy`] (word-mover's distance), both
//!   behind the [`DistanceStrategy`] trait
//! - **Ranker**: stable ascending sort of each query's distances into
//!   dense 1..N ranks
//!
//! ## Example
//!
//! ```rust
//! use semrank_core::{Vector, WordEmbeddings};
//! use semrank_similarity::{compute_distances, rank_all, BaselineStrategy};
//!
//! let mut embeddings = WordEmbeddings::new(2);
//! embeddings.insert("dog", Vector::new(vec![1.0, 0.0])).unwrap();
//! embeddings.insert("cat", Vector::new(vec![0.0, 1.0])).unwrap();
//!
//! let queries = vec!["dog".to_string()];
//! let candidates = vec!["cat".to_string(), "dog".to_string()];
//!
//! let strategy = BaselineStrategy::new(&embeddings);
//! let distances = compute_distances(&strategy, &queries, &candidates);
//! let ranks = rank_all(&distances);
//!
//! assert_eq!(ranks.get("dog").unwrap().get("dog"), Some(&1));
//! assert_eq!(ranks.get("dog").unwrap().get("cat"), Some(&2));
//! ```

pub mod mapping;
pub mod rank;
pub mod strategy;
pub mod vectorize;

// Re-export main types for convenience
pub use mapping::{DistanceMapping, DistanceMatrix, OrderedMap, RankMapping, RankMatrix};
pub use rank::{rank, rank_all};
pub use strategy::{compute_distances, BaselineStrategy, DistanceStrategy, WmdStrategy};
pub use vectorize::{SentenceVectorizer, UnknownWordPolicy};
