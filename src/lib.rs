//! # semrank
//!
//! Ranks a fixed set of competence labels against query phrases by
//! semantic similarity and compares two scoring strategies:
//!
//! - **baseline**: cosine distance between running-average phrase vectors
//! - **WMD**: word-mover's distance over the embedding table
//!
//! Each query's candidates are ranked per strategy, the distance and rank
//! matrices are dumped to files, and a comparison table against the known
//! correct ranks is printed.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo install semrank
//! semrank -i queries.txt
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use semrank::prelude::*;
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
//! assert_eq!(ranks.get("dog").unwrap().get("dog"), Some(&1));
//! ```
//!
//! ## Crate Structure
//!
//! - [`semrank-core`](https://docs.rs/semrank-core) - Embedding table,
//!   vector math, word-mover's distance, resource fetching
//! - [`semrank-similarity`](https://docs.rs/semrank-similarity) -
//!   Sentence vectorization, distance strategies, ranking
//! - [`semrank-report`](https://docs.rs/semrank-report) - Dump files and
//!   the comparison table

pub mod input;

// Re-export core types
pub use semrank_core::{
    tokenize, Error, Result, ResourceFetcher, Vector, WordEmbeddings, DEFAULT_RESOURCE,
    EMBEDDING_DIM,
};

// Re-export similarity
pub use semrank_similarity::{
    compute_distances, rank, rank_all, BaselineStrategy, DistanceMapping, DistanceMatrix,
    DistanceStrategy, OrderedMap, RankMapping, RankMatrix, SentenceVectorizer, UnknownWordPolicy,
    WmdStrategy,
};

// Re-export report
pub use semrank_report::{
    dump_path, read_matrix, write_matrix, write_ranking_table, DumpFormat, ReportError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_distances, rank, rank_all, read_matrix, tokenize, write_matrix,
        write_ranking_table, BaselineStrategy, DistanceMapping, DistanceMatrix, DistanceStrategy,
        DumpFormat, OrderedMap, RankMapping, RankMatrix, ResourceFetcher, SentenceVectorizer,
        UnknownWordPolicy, Vector, WmdStrategy, WordEmbeddings,
    };
}
