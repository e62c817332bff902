//! Shortest paths, minimum spanning forest and greedy coloring for
//! [`UndirectedGraph`].
//!
//! Every algorithm reads the graph as it is at call time and returns owned
//! results. Per-vertex results are indexed by the vertex's position in
//! insertion order, as reported by [`UndirectedGraph::vertex`].

use core::hash::{BuildHasher, Hash};

use tracing::debug;

use crate::collections::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::undirected::{UndirectedEdge, UndirectedGraph};

/// Distance from the start vertex; `None` marks an unreachable vertex.
pub type Distance = Option<u64>;

/// Computes single-source shortest path distances from `start`.
///
/// This is the selection-based \(O(V^2)\) form of Dijkstra's algorithm: each
/// round settles the unvisited vertex with the smallest tentative distance,
/// ties going to the earliest vertex in insertion order. Weights are
/// non-negative, so settled distances are final.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
pub fn shortest_paths<K, S>(graph: &UndirectedGraph<K, S>, start: &K) -> Result<Vec<Distance>>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    let order: Vec<&K> = graph.vertices().collect();
    let index = graph.index_table();
    let start = *index.get(start).ok_or(GraphError::VertexNotFound)?;

    let len = order.len();
    let mut distances: Vec<Distance> = vec![None; len];
    let mut visited = vec![false; len];
    distances[start] = Some(0);

    for _ in 0..len {
        let mut nearest: Option<(usize, u64)> = None;
        for (i, distance) in distances.iter().enumerate() {
            if visited[i] {
                continue;
            }
            if let Some(d) = *distance {
                if nearest.map_or(true, |(_, best)| d < best) {
                    nearest = Some((i, d));
                }
            }
        }

        let Some((u, base)) = nearest else {
            break;
        };
        visited[u] = true;

        for edge in graph.edges_of(order[u]) {
            let Some(&v) = index.get(&edge.target) else {
                continue;
            };
            let candidate = base.saturating_add(u64::from(edge.weight));
            if !visited[v] && distances[v].map_or(true, |d| candidate < d) {
                distances[v] = Some(candidate);
            }
        }
    }

    debug!(
        vertices = len,
        reached = distances.iter().filter(|d| d.is_some()).count(),
        "shortest paths computed"
    );
    Ok(distances)
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Candidates are collected vertex by vertex in insertion order, each edge
/// once from its endpoint with the smaller key, so `a < b` in every result
/// edge. They are taken in ascending weight order; equal weights keep the
/// collection order. An edge is accepted when its endpoints are still in
/// different components of a [`DisjointSet`] indexed by vertex position.
/// The result holds `vertex_count - components` edges.
pub fn minimum_spanning_tree<K, S>(graph: &UndirectedGraph<K, S>) -> Vec<UndirectedEdge<K>>
where
    K: Ord + Hash + Clone,
    S: BuildHasher,
{
    let index = graph.index_table();
    let mut candidates: Vec<UndirectedEdge<K>> = graph
        .vertices()
        .flat_map(|u| {
            graph
                .edges_of(u)
                .iter()
                .filter(move |edge| *u < edge.target)
                .map(move |edge| UndirectedEdge {
                    a: u.clone(),
                    b: edge.target.clone(),
                    weight: edge.weight,
                })
        })
        .collect();
    candidates.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::with_singletons(graph.vertex_count());
    let mut forest = Vec::with_capacity(graph.vertex_count().saturating_sub(1));

    for edge in candidates {
        let (Some(&a), Some(&b)) = (index.get(&edge.a), index.get(&edge.b)) else {
            continue;
        };
        if components.union(a, b) {
            forest.push(edge);
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        accepted = forest.len(),
        "minimum spanning forest computed"
    );
    forest
}

/// Colors the graph greedily, first fit, in insertion order.
///
/// Each vertex takes the smallest color not already held by a neighbor
/// colored earlier in the pass. Adjacent vertices never share a color; the
/// number of colors is not minimized.
pub fn greedy_coloring<K, S>(graph: &UndirectedGraph<K, S>) -> Vec<usize>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    let index = graph.index_table();
    let mut colors: Vec<Option<usize>> = vec![None; graph.vertex_count()];

    for (i, vertex) in graph.vertices().enumerate() {
        let edges = graph.edges_of(vertex);
        // A vertex of degree d always finds a free color in 0..=d.
        let mut taken = vec![false; edges.len() + 1];
        for edge in edges {
            let neighbor_color = index.get(&edge.target).and_then(|&j| colors[j]);
            if let Some(color) = neighbor_color.filter(|&c| c < taken.len()) {
                taken[color] = true;
            }
        }
        colors[i] = taken.iter().position(|&used| !used);
    }

    let colors: Vec<usize> = colors.into_iter().map(Option::unwrap_or_default).collect();
    debug!(
        vertices = colors.len(),
        colors = colors.iter().max().map_or(0, |&c| c + 1),
        "greedy coloring computed"
    );
    colors
}

impl<K, S> UndirectedGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// See [`shortest_paths`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn shortest_paths(&self, start: &K) -> Result<Vec<Distance>> {
        shortest_paths(self, start)
    }

    /// See [`greedy_coloring`].
    pub fn greedy_coloring(&self) -> Vec<usize> {
        greedy_coloring(self)
    }
}

impl<K, S> UndirectedGraph<K, S>
where
    K: Ord + Hash + Clone,
    S: BuildHasher,
{
    /// See [`minimum_spanning_tree`].
    pub fn minimum_spanning_tree(&self) -> Vec<UndirectedEdge<K>> {
        minimum_spanning_tree(self)
    }
}
