//! Word-mover's distance
//!
//! Exact optimal transport between the normalized bag-of-words (nBOW)
//! distributions of two token sequences, with Euclidean distance between
//! word embeddings as the ground metric. Solved as a transportation
//! problem via successive-shortest-path min-cost flow. Instances are
//! tiny here (a handful of distinct words per side), so the dense
//! bipartite network is fine.

use crate::embeddings::WordEmbeddings;
use crate::vector::Vector;
use ahash::AHashMap;

/// Distance between the nBOW distributions of `from` and `to`
///
/// Out-of-vocabulary tokens are dropped; if either side empties out the
/// distance is `+inf`.
pub(crate) fn word_movers_distance(
    embeddings: &WordEmbeddings,
    from: &[String],
    to: &[String],
) -> f32 {
    let (from_vectors, from_counts) = in_vocab_counts(embeddings, from);
    let (to_vectors, to_counts) = in_vocab_counts(embeddings, to);

    if from_vectors.is_empty() || to_vectors.is_empty() {
        return f32::INFINITY;
    }

    let n_from: usize = from_counts.iter().sum();
    let n_to: usize = to_counts.iter().sum();

    // Scale both distributions onto a common integer mass of
    // n_from * n_to so the flow network stays exact.
    let supplies: Vec<i64> = from_counts.iter().map(|c| (c * n_to) as i64).collect();
    let demands: Vec<i64> = to_counts.iter().map(|c| (c * n_from) as i64).collect();

    let mut network = FlowNetwork::new(from_vectors.len() + to_vectors.len() + 2);
    let source = 0;
    let sink = from_vectors.len() + to_vectors.len() + 1;

    for (i, &supply) in supplies.iter().enumerate() {
        network.add_edge(source, 1 + i, supply, 0.0);
    }
    for (j, &demand) in demands.iter().enumerate() {
        network.add_edge(1 + from_vectors.len() + j, sink, demand, 0.0);
    }
    for (i, fv) in from_vectors.iter().enumerate() {
        for (j, tv) in to_vectors.iter().enumerate() {
            let ground = f64::from(fv.l2_distance(tv));
            network.add_edge(1 + i, 1 + from_vectors.len() + j, i64::MAX / 4, ground);
        }
    }

    let total = network.min_cost_flow(source, sink);
    (total / (n_from * n_to) as f64) as f32
}

/// Distinct in-vocabulary words in first-occurrence order, as their
/// vectors plus occurrence counts
fn in_vocab_counts<'a>(
    embeddings: &'a WordEmbeddings,
    tokens: &[String],
) -> (Vec<&'a Vector>, Vec<usize>) {
    let mut vectors = Vec::new();
    let mut counts = Vec::new();
    let mut index: AHashMap<&str, usize> = AHashMap::new();

    for token in tokens {
        let Some(vector) = embeddings.get(token) else {
            continue;
        };
        match index.get(token.as_str()) {
            Some(&i) => counts[i] += 1,
            None => {
                index.insert(token, vectors.len());
                vectors.push(vector);
                counts.push(1);
            }
        }
    }

    (vectors, counts)
}

/// Successive-shortest-path min-cost flow with real-valued edge costs
struct FlowNetwork {
    adjacency: Vec<Vec<usize>>,
    to: Vec<usize>,
    capacity: Vec<i64>,
    cost: Vec<f64>,
}

impl FlowNetwork {
    fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            to: Vec::new(),
            capacity: Vec::new(),
            cost: Vec::new(),
        }
    }

    /// Add a directed edge and its residual reverse
    fn add_edge(&mut self, from: usize, to: usize, capacity: i64, cost: f64) {
        self.adjacency[from].push(self.to.len());
        self.to.push(to);
        self.capacity.push(capacity);
        self.cost.push(cost);

        self.adjacency[to].push(self.to.len());
        self.to.push(from);
        self.capacity.push(0);
        self.cost.push(-cost);
    }

    /// Push flow until the source-side supply is exhausted, returning the
    /// total cost. Saturates exactly because total supply equals total
    /// demand by construction.
    fn min_cost_flow(&mut self, source: usize, sink: usize) -> f64 {
        let nodes = self.adjacency.len();
        let mut total = 0.0;

        loop {
            // Bellman-Ford shortest path in the residual network. Costs
            // can turn negative on reverse edges, so Dijkstra without
            // potentials would not be correct.
            let mut dist = vec![f64::INFINITY; nodes];
            let mut prev_edge = vec![usize::MAX; nodes];
            let mut in_queue = vec![false; nodes];
            let mut queue = std::collections::VecDeque::new();
            dist[source] = 0.0;
            queue.push_back(source);
            in_queue[source] = true;

            while let Some(u) = queue.pop_front() {
                in_queue[u] = false;
                for &e in &self.adjacency[u] {
                    if self.capacity[e] == 0 {
                        continue;
                    }
                    let v = self.to[e];
                    let candidate = dist[u] + self.cost[e];
                    if candidate + 1e-12 < dist[v] {
                        dist[v] = candidate;
                        prev_edge[v] = e;
                        if !in_queue[v] {
                            queue.push_back(v);
                            in_queue[v] = true;
                        }
                    }
                }
            }

            if prev_edge[sink] == usize::MAX {
                break;
            }

            // Bottleneck along the shortest path
            let mut bottleneck = i64::MAX;
            let mut node = sink;
            while node != source {
                let e = prev_edge[node];
                bottleneck = bottleneck.min(self.capacity[e]);
                node = self.to[e ^ 1];
            }

            let mut node = sink;
            while node != source {
                let e = prev_edge[node];
                self.capacity[e] -= bottleneck;
                self.capacity[e ^ 1] += bottleneck;
                total += self.cost[e] * bottleneck as f64;
                node = self.to[e ^ 1];
            }
        }

        total
    }
}
