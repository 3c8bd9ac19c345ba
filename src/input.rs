//! Input loading
//!
//! Queries and competences arrive as tab-separated files: one
//! `phrase<TAB>rank` pair per line. Query ranks are caller-defined and
//! not range-checked; competence ranks must form a permutation of 1..N.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// The built-in competence list with its known correct ranks
#[must_use]
pub fn default_competences() -> Vec<(String, u32)> {
    [
        "Clean kitchen",
        "Teach basic cooking",
        "Chinese gourmet cuisine",
        "Clean outdoor seating",
        "Cultivate garden",
        "Carry out transports",
        "Maintain laundry",
        "Sewing",
        "Do shopping",
        "Baby care",
        "Look after toddlers",
        "Advise child care",
        "Dog training",
        "Walk a dog",
        "Do painting work",
        "Provide knowledge of wine",
    ]
    .iter()
    .enumerate()
    .map(|(idx, label)| (label.to_string(), idx as u32 + 1))
    .collect()
}

/// Load the query file: phrase and expected rank per line
pub fn load_queries(path: &Path) -> Result<Vec<(String, i32)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read query file {}", path.display()))?;

    let mut queries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (phrase, rank) = split_tsv_line(line, idx + 1, path)?;
        let rank: i32 = rank.trim().parse().with_context(|| {
            format!("{}:{}: invalid rank '{}'", path.display(), idx + 1, rank)
        })?;
        queries.push((phrase.to_string(), rank));
    }

    if queries.is_empty() {
        bail!("query file {} contains no entries", path.display());
    }
    Ok(queries)
}

/// Load a competence file and validate its ranks form a permutation
pub fn load_competences(path: &Path) -> Result<Vec<(String, u32)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read competence file {}", path.display()))?;

    let mut competences = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (label, rank) = split_tsv_line(line, idx + 1, path)?;
        let rank: u32 = rank.trim().parse().with_context(|| {
            format!("{}:{}: invalid rank '{}'", path.display(), idx + 1, rank)
        })?;
        competences.push((label.to_string(), rank));
    }

    if competences.is_empty() {
        bail!("competence file {} contains no entries", path.display());
    }

    let mut ranks: Vec<u32> = competences.iter().map(|(_, r)| *r).collect();
    ranks.sort_unstable();
    let expected: Vec<u32> = (1..=competences.len() as u32).collect();
    if ranks != expected {
        bail!(
            "competence ranks in {} must be a permutation of 1..{}",
            path.display(),
            competences.len()
        );
    }

    Ok(competences)
}

fn split_tsv_line<'a>(line: &'a str, line_no: usize, path: &Path) -> Result<(&'a str, &'a str)> {
    match line.split_once('\t') {
        Some((phrase, rank)) => Ok((phrase, rank)),
        None => bail!(
            "{}:{}: expected 'phrase<TAB>rank', got '{}'",
            path.display(),
            line_no,
            line
        ),
    }
}
