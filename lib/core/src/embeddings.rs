//! Pretrained word-embedding table
//!
//! Loads a word2vec-style word → vector table and exposes point lookup
//! plus word-mover's distance over token sequences. The table is loaded
//! once at startup and never mutated afterwards.

use crate::error::{Error, Result};
use crate::vector::Vector;
use crate::wmd;
use ahash::AHashMap;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Vector dimension of the standard pretrained tables
pub const EMBEDDING_DIM: usize = 300;

/// Read-only mapping from word to embedding vector
#[derive(Debug, Clone)]
pub struct WordEmbeddings {
    dim: usize,
    table: AHashMap<String, Vector>,
}

impl WordEmbeddings {
    /// Create an empty table with a fixed dimension
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            table: AHashMap::new(),
        }
    }

    /// Insert a word vector, enforcing the table dimension
    pub fn insert(&mut self, word: impl Into<String>, vector: Vector) -> Result<()> {
        if vector.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: vector.dim(),
            });
        }
        self.table.insert(word.into(), vector);
        Ok(())
    }

    /// Load a table from disk
    ///
    /// Supports word2vec text format (optional `count dim` header line,
    /// then one `word v1 .. vN` line per entry) and word2vec binary
    /// format (`.bin`). A `.gz` suffix on either is decompressed on the
    /// fly.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let gz = name.ends_with(".gz");
        let binary = name.trim_end_matches(".gz").ends_with(".bin");

        let reader: Box<dyn BufRead> = if gz {
            Box::new(BufReader::new(GzDecoder::new(BufReader::new(file))))
        } else {
            Box::new(BufReader::new(file))
        };

        if binary {
            Self::read_word2vec_binary(reader)
        } else {
            Self::read_text(reader)
        }
    }

    /// Parse the word2vec text format from a reader
    pub fn read_text<R: BufRead>(reader: R) -> Result<Self> {
        let mut dim: Option<usize> = None;
        let mut table = AHashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let values: Vec<&str> = parts.collect();

            // Optional header line: "<count> <dim>"
            if idx == 0 && values.len() == 1 {
                if let (Ok(_), Ok(d)) = (word.parse::<usize>(), values[0].parse::<usize>()) {
                    dim = Some(d);
                    continue;
                }
            }

            let mut data = Vec::with_capacity(values.len());
            for v in &values {
                let x: f32 = v.parse().map_err(|_| Error::Parse {
                    line: line_no,
                    reason: format!("invalid float '{}'", v),
                })?;
                data.push(x);
            }

            match dim {
                Some(d) if d != data.len() => {
                    return Err(Error::Parse {
                        line: line_no,
                        reason: format!("expected {} components, got {}", d, data.len()),
                    });
                }
                Some(_) => {}
                None => dim = Some(data.len()),
            }

            table.insert(word.to_string(), Vector::new(data));
        }

        let dim = dim.ok_or(Error::Parse {
            line: 0,
            reason: "empty embedding file".to_string(),
        })?;

        Ok(Self { dim, table })
    }

    /// Parse the word2vec binary format from a reader
    ///
    /// Layout: an ASCII `<count> <dim>\n` header, then per entry the word
    /// bytes terminated by a space followed by `dim` little-endian f32s.
    pub fn read_word2vec_binary<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;
        let header = String::from_utf8_lossy(&header);
        let mut parts = header.split_whitespace();
        let parse_err = |reason: &str| Error::Parse {
            line: 1,
            reason: reason.to_string(),
        };
        let count: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_err("missing vocabulary count in binary header"))?;
        let dim: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_err("missing dimension in binary header"))?;

        let mut table = AHashMap::with_capacity(count);
        let mut buf = vec![0u8; dim * 4];

        for _ in 0..count {
            let mut word_bytes = Vec::new();
            reader.read_until(b' ', &mut word_bytes)?;
            // Entries may carry a leading newline from the previous record.
            let word = String::from_utf8_lossy(&word_bytes)
                .trim_matches(|c: char| c.is_whitespace())
                .to_string();

            reader.read_exact(&mut buf)?;
            let data: Vec<f32> = buf
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect();

            table.insert(word, Vector::new(data));
        }

        Ok(Self { dim, table })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// Look up the vector for a word
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Vector> {
        self.table.get(word)
    }

    /// Word-mover's distance between two token sequences
    ///
    /// Out-of-vocabulary tokens are dropped from both sides; if either
    /// side has no in-vocabulary token left the distance is `+inf`.
    /// Otherwise this is the exact optimal-transport cost between the two
    /// normalized bag-of-words distributions under the Euclidean ground
    /// metric.
    #[must_use]
    pub fn wmdistance(&self, from: &[String], to: &[String]) -> f32 {
        wmd::word_movers_distance(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn text_fixture() -> &'static str {
        "3 4\n\
         dog 1.0 0.0 0.0 0.0\n\
         cat 0.0 1.0 0.0 0.0\n\
         walk 0.5 0.5 0.0 0.0\n"
    }

    #[test]
    fn test_read_text_with_header() {
        let emb = WordEmbeddings::read_text(Cursor::new(text_fixture())).unwrap();
        assert_eq!(emb.dim(), 4);
        assert_eq!(emb.len(), 3);
        assert_eq!(
            emb.get("dog"),
            Some(&Vector::new(vec![1.0, 0.0, 0.0, 0.0]))
        );
        assert!(!emb.contains("unicorn"));
    }

    #[test]
    fn test_read_text_without_header() {
        let input = "dog 1.0 0.0\ncat 0.0 1.0\n";
        let emb = WordEmbeddings::read_text(Cursor::new(input)).unwrap();
        assert_eq!(emb.dim(), 2);
        assert_eq!(emb.len(), 2);
    }

    #[test]
    fn test_read_text_dimension_mismatch() {
        let input = "dog 1.0 0.0\ncat 0.0 1.0 0.5\n";
        let err = WordEmbeddings::read_text(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_read_text_invalid_float() {
        let input = "dog 1.0 oops\n";
        let err = WordEmbeddings::read_text(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_read_text_empty_file() {
        let err = WordEmbeddings::read_text(Cursor::new("")).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 0, .. }));
    }

    #[test]
    fn test_read_word2vec_binary_roundtrip() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"2 3\n");
        bytes.extend_from_slice(b"dog ");
        for x in [1.0f32, 2.0, 3.0] {
            bytes.extend_from_slice(&x.to_le_bytes());
        }
        bytes.extend_from_slice(b"\ncat ");
        for x in [4.0f32, 5.0, 6.0] {
            bytes.extend_from_slice(&x.to_le_bytes());
        }

        let emb = WordEmbeddings::read_word2vec_binary(Cursor::new(bytes)).unwrap();
        assert_eq!(emb.dim(), 3);
        assert_eq!(emb.len(), 2);
        assert_eq!(emb.get("cat"), Some(&Vector::new(vec![4.0, 5.0, 6.0])));
    }

    #[test]
    fn test_load_gzipped_text() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt.gz");
        let file = File::create(&path).unwrap();
        let mut enc = GzEncoder::new(file, Compression::default());
        enc.write_all(text_fixture().as_bytes()).unwrap();
        enc.finish().unwrap();

        let emb = WordEmbeddings::load(&path).unwrap();
        assert_eq!(emb.len(), 3);
        assert_eq!(emb.dim(), 4);
    }

    #[test]
    fn test_insert_enforces_dimension() {
        let mut emb = WordEmbeddings::new(3);
        assert!(emb.insert("ok", Vector::zeros(3)).is_ok());
        let err = emb.insert("bad", Vector::zeros(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                expected: 3,
                actual: 2
            }
        ));
    }
}
