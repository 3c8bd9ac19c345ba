//! Comparison table
//!
//! Prints one block per query: the query text, its externally supplied
//! correct rank, then one row per candidate with the candidate's own
//! correct rank, its baseline rank, and its WMD rank. Ranks in the top 3
//! and the candidate whose correct rank matches the query's are flagged
//! with `>`; the markers are cosmetic, the data contract is the dump
//! files.

use crate::error::{ReportError, Result};
use semrank_similarity::RankMatrix;
use std::io::Write;

/// Flag ranks 1-3 with a `>` marker
fn mark_top(rank: u32) -> String {
    if (1..=3).contains(&rank) {
        format!(">{}", rank)
    } else {
        format!(" {}", rank)
    }
}

/// Write the full comparison table
///
/// `queries` pairs each query phrase with its correct rank; `candidates`
/// pairs each candidate label with its known rank. Both rank matrices
/// must cover the full query × candidate cross product.
pub fn write_ranking_table<W: Write>(
    out: &mut W,
    queries: &[(String, i32)],
    candidates: &[(String, u32)],
    baseline: &RankMatrix,
    wmd: &RankMatrix,
) -> Result<()> {
    let lookup = |matrix: &RankMatrix, query: &str, candidate: &str| -> Result<u32> {
        matrix
            .get(query)
            .and_then(|row| row.get(candidate))
            .copied()
            .ok_or_else(|| ReportError::MissingEntry {
                query: query.to_string(),
                candidate: candidate.to_string(),
            })
    };

    for (idx, (query, correct_rank)) in queries.iter().enumerate() {
        writeln!(out, "Query {}: {}", idx + 1, query)?;
        writeln!(out, "Correct rank: {}\n", correct_rank)?;
        writeln!(out, "{:<34}{:<10}{}", " Ranking", " Baseline", " WMD")?;

        for (label, known_rank) in candidates {
            let baseline_rank = mark_top(lookup(baseline, query, label)?);
            let wmd_rank = mark_top(lookup(wmd, query, label)?);
            let known = if i64::from(*correct_rank) == i64::from(*known_rank) {
                format!(">{}", known_rank)
            } else {
                format!(" {}", known_rank)
            };

            writeln!(out, "{:<4}{:<30}{:<10}{}", known, label, baseline_rank, wmd_rank)?;
        }
        writeln!(out, "\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semrank_similarity::{OrderedMap, RankMapping};

    fn matrix(rows: &[(&str, &[(&str, u32)])]) -> RankMatrix {
        let mut matrix: RankMatrix = OrderedMap::new();
        for (query, entries) in rows {
            let row: RankMapping = entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect();
            matrix.insert(query.to_string(), row);
        }
        matrix
    }

    fn render(
        queries: &[(String, i32)],
        candidates: &[(String, u32)],
        baseline: &RankMatrix,
        wmd: &RankMatrix,
    ) -> String {
        let mut buf = Vec::new();
        write_ranking_table(&mut buf, queries, candidates, baseline, wmd).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_block_layout() {
        let queries = vec![("dog walking".to_string(), 2)];
        let candidates = vec![
            ("Clean kitchen".to_string(), 1),
            ("Walk a dog".to_string(), 2),
        ];
        let baseline = matrix(&[("dog walking", &[("Clean kitchen", 2), ("Walk a dog", 1)])]);
        let wmd = matrix(&[("dog walking", &[("Clean kitchen", 4), ("Walk a dog", 1)])]);

        let text = render(&queries, &candidates, &baseline, &wmd);

        assert!(text.starts_with("Query 1: dog walking\nCorrect rank: 2\n\n"));
        assert!(text.contains(" Ranking"));
        assert!(text.contains(" Baseline"));
        assert!(text.contains(" WMD"));
        // Candidate whose known rank matches the query's correct rank is
        // flagged.
        assert!(text.contains(">2  Walk a dog"));
        assert!(text.contains(" 1  Clean kitchen"));
    }

    #[test]
    fn test_top_three_marker() {
        assert_eq!(mark_top(1), ">1");
        assert_eq!(mark_top(3), ">3");
        assert_eq!(mark_top(4), " 4");
        assert_eq!(mark_top(16), " 16");
    }

    #[test]
    fn test_rank_four_not_marked() {
        let queries = vec![("q".to_string(), 9)];
        let candidates = vec![("A".to_string(), 1)];
        let baseline = matrix(&[("q", &[("A", 4)])]);
        let wmd = matrix(&[("q", &[("A", 1)])]);

        let text = render(&queries, &candidates, &baseline, &wmd);
        assert!(text.contains(" 4"));
        assert!(text.contains(">1"));
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let queries = vec![("q".to_string(), 1)];
        let candidates = vec![("A".to_string(), 1), ("B".to_string(), 2)];
        let baseline = matrix(&[("q", &[("A", 1)])]);
        let wmd = matrix(&[("q", &[("A", 1), ("B", 2)])]);

        let mut buf = Vec::new();
        let err =
            write_ranking_table(&mut buf, &queries, &candidates, &baseline, &wmd).unwrap_err();
        assert!(matches!(err, ReportError::MissingEntry { .. }));
    }

    #[test]
    fn test_one_block_per_query() {
        let queries = vec![("first".to_string(), 1), ("second".to_string(), 2)];
        let candidates = vec![("A".to_string(), 1)];
        let ranks = matrix(&[("first", &[("A", 1)]), ("second", &[("A", 1)])]);

        let text = render(&queries, &candidates, &ranks.clone(), &ranks);
        assert!(text.contains("Query 1: first"));
        assert!(text.contains("Query 2: second"));
    }
}
