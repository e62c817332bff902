//! Random graph generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::undirected::{UndirectedGraph, Weight};

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of vertices, labeled `0..vertex_count`.
    pub vertex_count: usize,
    /// Requested number of edges; clamped to the complete-graph bound.
    pub edge_count: usize,
    /// Smallest edge weight, inclusive.
    pub min_weight: Weight,
    /// Largest edge weight, inclusive.
    pub max_weight: Weight,
}

impl GeneratorConfig {
    /// Largest edge count a simple undirected graph on `vertex_count` vertices holds.
    pub fn max_edges(&self) -> usize {
        self.vertex_count * self.vertex_count.saturating_sub(1) / 2
    }
}

/// Generates a random graph using the thread-local RNG.
///
/// # Errors
/// Returns [`GraphError::InvalidWeightRange`] if `min_weight > max_weight`.
pub fn generate(config: &GeneratorConfig) -> Result<UndirectedGraph<usize>> {
    generate_with_rng(config, &mut rand::rng())
}

/// Generates a random graph drawing from `rng`.
///
/// All vertices are added first. Random vertex pairs are then drawn until the
/// edge target is met; self-pairs and already-connected pairs are redrawn.
///
/// # Errors
/// Returns [`GraphError::InvalidWeightRange`] if `min_weight > max_weight`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<UndirectedGraph<usize>> {
    if config.min_weight > config.max_weight {
        return Err(GraphError::InvalidWeightRange {
            min: config.min_weight,
            max: config.max_weight,
        });
    }

    let n = config.vertex_count;
    let mut graph = UndirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }

    let target = config.edge_count.min(config.max_edges());
    if target < config.edge_count {
        warn!(
            requested = config.edge_count,
            target, "edge count clamped to complete graph"
        );
    }

    let mut added = 0;
    while added < target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v || graph.are_connected(&u, &v) {
            continue;
        }
        let weight = rng.random_range(config.min_weight..=config.max_weight);
        if graph.add_edge(&u, &v, weight) {
            added += 1;
        }
    }

    debug!(vertices = n, edges = added, "random graph generated");
    Ok(graph)
}
