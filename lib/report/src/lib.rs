//! # semrank Report
//!
//! Output surface of the pipeline: dump files for the distance and rank
//! matrices, and the printed comparison table against the known correct
//! ranks.
//!
//! ## Example
//!
//! ```rust
//! use semrank_report::{dump_path, read_matrix, write_matrix, DumpFormat};
//! use semrank_similarity::{OrderedMap, RankMapping, RankMatrix};
//!
//! let mut row: RankMapping = OrderedMap::new();
//! row.insert("Walk a dog", 1u32);
//! row.insert("Clean kitchen", 2u32);
//! let mut ranks: RankMatrix = OrderedMap::new();
//! ranks.insert("dog walking", row);
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dump_path(dir.path(), "ranking_baseline", DumpFormat::Text);
//! write_matrix(&path, &ranks, DumpFormat::Text).unwrap();
//!
//! let reread: RankMatrix = read_matrix(&path, DumpFormat::Text).unwrap();
//! assert_eq!(reread, ranks);
//! ```

pub mod dump;
pub mod error;
pub mod table;

pub use dump::{dump_path, read_matrix, read_text, write_matrix, write_text, DumpFormat};
pub use error::{ReportError, Result};
pub use table::write_ranking_table;
