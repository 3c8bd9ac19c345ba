//! # semrank Core
//!
//! Core library for semrank.
//!
//! This crate provides the embedding side of the pipeline:
//!
//! - [`Vector`] - Dense vector with dot product, norms, and distances
//! - [`WordEmbeddings`] - Read-only pretrained word → vector table with
//!   point lookup and word-mover's distance over token sequences
//! - [`ResourceFetcher`] - Resolves fixed resource names to cached local
//!   files, downloading on first use
//! - [`tokenize`] - The lowercase/whitespace tokenizer shared by every
//!   consumer of the table
//!
//! ## Example
//!
//! ```rust
//! use semrank_core::{tokenize, Vector, WordEmbeddings};
//!
//! let mut embeddings = WordEmbeddings::new(3);
//! embeddings.insert("dog", Vector::new(vec![1.0, 0.0, 0.0])).unwrap();
//! embeddings.insert("cat", Vector::new(vec![0.0, 1.0, 0.0])).unwrap();
//!
//! let tokens = tokenize("Walk a dog");
//! assert_eq!(tokens, vec!["walk", "a", "dog"]);
//! assert!(embeddings.get("dog").is_some());
//! assert!(embeddings.get("a").is_none());
//!
//! let d = embeddings.wmdistance(&tokenize("dog"), &tokenize("cat"));
//! assert!(d > 0.0);
//! ```

pub mod embeddings;
pub mod error;
pub mod fetch;
pub mod tokenize;
pub mod vector;

mod wmd;

pub use embeddings::{WordEmbeddings, EMBEDDING_DIM};
pub use error::{Error, Result};
pub use fetch::{ResourceFetcher, DEFAULT_RESOURCE};
pub use tokenize::tokenize;
pub use vector::Vector;
