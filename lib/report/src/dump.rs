//! Matrix dump files
//!
//! Persists distance/rank matrices for inspection, one file per matrix,
//! in either of two layouts:
//!
//! - text: a key line, then one `subkey: value` line per entry, blocks
//!   separated by a blank line
//! - json: nested objects, keys in insertion order
//!
//! Both layouts round-trip through the matching reader.

use crate::error::{ReportError, Result};
use semrank_similarity::OrderedMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// On-disk layout for dump files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// Line-based key/value dump
    #[default]
    Text,
    /// Nested JSON objects
    Json,
}

impl DumpFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            DumpFormat::Text => "txt",
            DumpFormat::Json => "json",
        }
    }
}

/// File path for a dump with the given stem, e.g. `dict_baseline.txt`
#[must_use]
pub fn dump_path(dir: &Path, stem: &str, format: DumpFormat) -> PathBuf {
    dir.join(format!("{}.{}", stem, format.extension()))
}

/// Write a matrix to a file in the chosen format
pub fn write_matrix<V: Display + Serialize>(
    path: &Path,
    matrix: &OrderedMap<OrderedMap<V>>,
    format: DumpFormat,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        DumpFormat::Text => write_text(&mut writer, matrix)?,
        DumpFormat::Json => serde_json::to_writer_pretty(&mut writer, matrix)?,
    }
    writer.flush()?;
    Ok(())
}

/// Read a matrix back from a file
pub fn read_matrix<V>(path: &Path, format: DumpFormat) -> Result<OrderedMap<OrderedMap<V>>>
where
    V: FromStr + DeserializeOwned,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match format {
        DumpFormat::Text => read_text(reader),
        DumpFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

/// Write the line-based text layout
pub fn write_text<V: Display, W: Write>(
    writer: &mut W,
    matrix: &OrderedMap<OrderedMap<V>>,
) -> std::io::Result<()> {
    for (key, row) in matrix.iter() {
        writeln!(writer, "{}", key)?;
        for (subkey, value) in row.iter() {
            writeln!(writer, "{}: {}", subkey, value)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Parse the line-based text layout
pub fn read_text<V: FromStr, R: BufRead>(reader: R) -> Result<OrderedMap<OrderedMap<V>>> {
    let mut matrix: OrderedMap<OrderedMap<V>> = OrderedMap::new();
    let mut current: Option<(String, OrderedMap<V>)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            if let Some((key, row)) = current.take() {
                matrix.insert(key, row);
            }
            continue;
        }

        match current {
            None => current = Some((line, OrderedMap::new())),
            Some((_, ref mut row)) => {
                let (subkey, raw) = line.rsplit_once(": ").ok_or_else(|| ReportError::Parse {
                    line: line_no,
                    reason: "expected 'subkey: value'".to_string(),
                })?;
                let value = raw.parse::<V>().map_err(|_| ReportError::Parse {
                    line: line_no,
                    reason: format!("invalid value '{}'", raw),
                })?;
                row.insert(subkey, value);
            }
        }
    }

    // A final block without a trailing blank line still counts.
    if let Some((key, row)) = current.take() {
        matrix.insert(key, row);
    }

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank_fixture() -> OrderedMap<OrderedMap<u32>> {
        let mut row1 = OrderedMap::new();
        row1.insert("Clean kitchen", 2u32);
        row1.insert("Walk a dog", 1u32);
        let mut row2 = OrderedMap::new();
        row2.insert("Clean kitchen", 1u32);
        row2.insert("Walk a dog", 2u32);
        let mut matrix = OrderedMap::new();
        matrix.insert("dog walking", row1);
        matrix.insert("tidy up", row2);
        matrix
    }

    #[test]
    fn test_text_layout() {
        let matrix = rank_fixture();
        let mut buf = Vec::new();
        write_text(&mut buf, &matrix).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "dog walking\nClean kitchen: 2\nWalk a dog: 1\n\n\
             tidy up\nClean kitchen: 1\nWalk a dog: 2\n\n"
        );
    }

    #[test]
    fn test_text_roundtrip() {
        let matrix = rank_fixture();
        let mut buf = Vec::new();
        write_text(&mut buf, &matrix).unwrap();
        let parsed: OrderedMap<OrderedMap<u32>> = read_text(buf.as_slice()).unwrap();
        assert_eq!(parsed, matrix);
    }

    #[test]
    fn test_text_roundtrip_without_trailing_blank() {
        let input = "q\nA: 1\nB: 2";
        let parsed: OrderedMap<OrderedMap<u32>> = read_text(input.as_bytes()).unwrap();
        assert_eq!(parsed.get("q").unwrap().get("B"), Some(&2));
    }

    #[test]
    fn test_text_roundtrip_float_specials() {
        let mut row = OrderedMap::new();
        row.insert("near", 0.25f32);
        row.insert("far", f32::INFINITY);
        row.insert("broken", f32::NAN);
        let mut matrix = OrderedMap::new();
        matrix.insert("q", row);

        let mut buf = Vec::new();
        write_text(&mut buf, &matrix).unwrap();
        let parsed: OrderedMap<OrderedMap<f32>> = read_text(buf.as_slice()).unwrap();

        let row = parsed.get("q").unwrap();
        assert_eq!(row.get("near"), Some(&0.25));
        assert!(row.get("far").unwrap().is_infinite());
        assert!(row.get("broken").unwrap().is_nan());
    }

    #[test]
    fn test_text_parse_error_carries_line() {
        let input = "q\nno separator here\n";
        let err = read_text::<u32, _>(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_subkey_containing_separator() {
        let mut row = OrderedMap::new();
        row.insert("label: with colon", 3u32);
        let mut matrix = OrderedMap::new();
        matrix.insert("q", row);

        let mut buf = Vec::new();
        write_text(&mut buf, &matrix).unwrap();
        let parsed: OrderedMap<OrderedMap<u32>> = read_text(buf.as_slice()).unwrap();
        assert_eq!(parsed.get("q").unwrap().get("label: with colon"), Some(&3));
    }

    #[test]
    fn test_file_roundtrip_both_formats() {
        let matrix = rank_fixture();
        let dir = tempfile::tempdir().unwrap();

        for format in [DumpFormat::Text, DumpFormat::Json] {
            let path = dump_path(dir.path(), "ranking_baseline", format);
            write_matrix(&path, &matrix, format).unwrap();
            let parsed: OrderedMap<OrderedMap<u32>> = read_matrix(&path, format).unwrap();
            assert_eq!(parsed, matrix, "{:?} did not round-trip", format);
        }
    }

    #[test]
    fn test_dump_path_extensions() {
        let dir = Path::new("/tmp/out");
        assert_eq!(
            dump_path(dir, "dict_wmd", DumpFormat::Text),
            Path::new("/tmp/out/dict_wmd.txt")
        );
        assert_eq!(
            dump_path(dir, "dict_wmd", DumpFormat::Json),
            Path::new("/tmp/out/dict_wmd.json")
        );
    }
}
