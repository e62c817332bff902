//! A dynamic undirected weighted graph keyed by vertex value.
//!
//! Vertices keep their insertion order in a `Vec`; that order defines the
//! indices used by every algorithm result. Incident edges live in a
//! [`HashTable`] from vertex key to edge list, and every edge is stored on
//! both endpoints.
//!
//! Mutations are total: adding a duplicate, touching an absent vertex or
//! asking for a self-loop leaves the graph unchanged and returns `false`.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collections::HashTable;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u32;

/// One entry of an adjacency list: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<K> {
    /// The neighbor this edge leads to.
    pub target: K,
    /// Weight of the edge.
    pub weight: Weight,
}

impl<K> Edge<K> {
    /// Creates an edge towards `target`.
    pub fn new(target: K, weight: Weight) -> Self {
        Self { target, weight }
    }
}

/// An undirected edge named by both endpoints.
///
/// `a` precedes `b` in the graph's vertex order at the time it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UndirectedEdge<K> {
    /// Endpoint earlier in vertex order.
    pub a: K,
    /// Endpoint later in vertex order.
    pub b: K,
    /// Weight of the edge.
    pub weight: Weight,
}

impl<K: PartialEq> UndirectedEdge<K> {
    /// Returns `true` if this edge joins `u` and `v`, in either direction.
    pub fn joins(&self, u: &K, v: &K) -> bool {
        (self.a == *u && self.b == *v) || (self.a == *v && self.b == *u)
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: &K) -> bool {
        self.a == *vertex || self.b == *vertex
    }
}

/// An undirected weighted graph with no self-loops and no parallel edges.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) average | hash lookup plus append |
/// | `remove_vertex` | \(O(n + \deg^2)\) | strips neighbors, then shifts the vertex order |
/// | `add_edge` | \(O(\deg)\) | checks for an existing edge first |
/// | `remove_edge` | \(O(\deg)\) | linear scan of both lists |
/// | `are_connected` | \(O(\deg)\) | |
#[derive(Clone)]
pub struct UndirectedGraph<K, S = RandomState> {
    vertices: Vec<K>,
    adjacency: HashTable<K, Vec<Edge<K>>, S>,
}

impl<K> UndirectedGraph<K, RandomState>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph whose adjacency table starts with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K> Default for UndirectedGraph<K, RandomState>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> UndirectedGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an empty graph with the given table capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashTable::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: K) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.vertices.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        trace!(vertices = self.vertices.len(), "vertex added");
        true
    }

    /// Adds the undirected edge `u -- v` with `weight`.
    ///
    /// Returns `false`, leaving the graph unchanged, if either endpoint is
    /// absent, `u == v`, or the two vertices are already connected.
    pub fn add_edge(&mut self, u: &K, v: &K, weight: Weight) -> bool {
        if u == v || !self.adjacency.contains_key(v) {
            return false;
        }
        let Some(edges) = self.adjacency.get_mut(u) else {
            return false;
        };
        if edges.iter().any(|edge| edge.target == *v) {
            return false;
        }
        edges.push(Edge::new(v.clone(), weight));

        if let Some(edges) = self.adjacency.get_mut(v) {
            edges.push(Edge::new(u.clone(), weight));
        }
        trace!(weight, "edge added");
        true
    }

    /// Removes the edge between `u` and `v`.
    ///
    /// Returns `false` if either endpoint is absent or they are not connected.
    pub fn remove_edge(&mut self, u: &K, v: &K) -> bool {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return false;
        }
        let removed = Self::detach(&mut self.adjacency, u, v);
        Self::detach(&mut self.adjacency, v, u);
        if removed {
            trace!("edge removed");
        }
        removed
    }

    /// Removes the first entry pointing at `to` from `from`'s list.
    fn detach(adjacency: &mut HashTable<K, Vec<Edge<K>>, S>, from: &K, to: &K) -> bool {
        let Some(edges) = adjacency.get_mut(from) else {
            return false;
        };
        match edges.iter().position(|edge| edge.target == *to) {
            Some(idx) => {
                edges.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns `false` if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &K) -> bool {
        let Some(edges) = self.adjacency.get(vertex) else {
            return false;
        };
        let neighbors: Vec<K> = edges.iter().map(|edge| edge.target.clone()).collect();
        for neighbor in &neighbors {
            self.remove_edge(vertex, neighbor);
        }

        if let Some(idx) = self.position(vertex) {
            self.vertices.remove(idx);
        }
        self.adjacency.remove(vertex);
        trace!(vertices = self.vertices.len(), "vertex removed");
        true
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &K) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if an edge joins `u` and `v`.
    pub fn are_connected(&self, u: &K, v: &K) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns the weight of the edge joining `u` and `v`, if any.
    pub fn edge_weight(&self, u: &K, v: &K) -> Option<Weight> {
        if !self.adjacency.contains_key(v) {
            return None;
        }
        self.adjacency
            .get(u)?
            .iter()
            .find(|edge| edge.target == *v)
            .map(|edge| edge.weight)
    }

    /// Returns a copy of the edges incident to `vertex`, in insertion order.
    ///
    /// An absent vertex has no edges.
    pub fn adjacent_vertices(&self, vertex: &K) -> Vec<Edge<K>> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    /// Borrowing counterpart of [`adjacent_vertices`](Self::adjacent_vertices)
    /// for the algorithms in this crate.
    pub(crate) fn edges_of(&self, vertex: &K) -> &[Edge<K>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the vertex at `index` in insertion order.
    ///
    /// Valid indices are `0..vertex_count()`; anything else yields `None`.
    pub fn vertex(&self, index: usize) -> Option<K> {
        self.vertices.get(index).cloned()
    }

    /// Returns the current position of `vertex` in insertion order.
    pub fn position(&self, vertex: &K) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &K> {
        self.vertices.iter()
    }

    /// Maps every vertex to its position in insertion order.
    pub(crate) fn index_table(&self) -> HashTable<K, usize> {
        let mut index = HashTable::with_capacity(self.vertices.len().max(1) * 2);
        for (i, vertex) in self.vertices.iter().enumerate() {
            index.insert(vertex.clone(), i);
        }
        index
    }

    /// Lists every undirected edge exactly once.
    ///
    /// Edges are collected vertex by vertex in insertion order, each one from
    /// its endpoint that comes first.
    pub fn edges(&self) -> Vec<UndirectedEdge<K>> {
        let index = self.index_table();
        let mut out = Vec::with_capacity(self.edge_count());
        for (i, u) in self.vertices.iter().enumerate() {
            for edge in self.edges_of(u) {
                if index.get(&edge.target).is_some_and(|&j| i < j) {
                    out.push(UndirectedEdge {
                        a: u.clone(),
                        b: edge.target.clone(),
                        weight: edge.weight,
                    });
                }
            }
        }
        out
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }
}

impl<K, S> core::fmt::Debug for UndirectedGraph<K, S>
where
    K: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UndirectedGraph")
            .field("vertices", &self.vertices)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
