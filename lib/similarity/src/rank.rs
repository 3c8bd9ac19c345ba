//! Ranking
//!
//! Converts per-query distance mappings into per-query rank mappings.
//! Ranks are dense 1..N, assigned by ascending distance with a stable
//! sort, so ties keep candidate-list order.

use crate::mapping::{DistanceMapping, DistanceMatrix, RankMapping, RankMatrix};
use std::cmp::Ordering;

/// Rank one query's candidates by ascending distance
///
/// The output keeps the mapping's own (candidate-list) key order and
/// assigns each candidate a distinct rank in 1..N. Incomparable
/// distances (NaN) sort as equal to their neighbors.
#[must_use]
pub fn rank(distances: &DistanceMapping) -> RankMapping {
    let entries: Vec<(&str, f32)> = distances.iter().map(|(k, v)| (k, *v)).collect();

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[a]
            .1
            .partial_cmp(&entries[b].1)
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0u32; entries.len()];
    for (position, &idx) in order.iter().enumerate() {
        ranks[idx] = position as u32 + 1;
    }

    entries
        .iter()
        .zip(ranks)
        .map(|(&(key, _), r)| (key.to_string(), r))
        .collect()
}

/// Rank every query in a distance matrix
#[must_use]
pub fn rank_all(matrix: &DistanceMatrix) -> RankMatrix {
    matrix
        .iter()
        .map(|(query, row)| (query.to_string(), rank(row)))
        .collect()
}
