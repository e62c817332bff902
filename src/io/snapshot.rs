//! Owned, serializable snapshots of a graph.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{UndirectedEdge, UndirectedGraph};

/// Vertices in insertion order plus every undirected edge once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<K> {
    /// Vertices in insertion order.
    pub vertices: Vec<K>,
    /// Edges in the order of [`UndirectedGraph::edges`].
    pub edges: Vec<UndirectedEdge<K>>,
}

impl<K> GraphSnapshot<K>
where
    K: Serialize,
{
    /// Encodes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) if a key fails to serialize.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<K> GraphSnapshot<K>
where
    K: DeserializeOwned,
{
    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, S> UndirectedGraph<K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Copies the graph into a [`GraphSnapshot`].
    pub fn snapshot(&self) -> GraphSnapshot<K> {
        GraphSnapshot {
            vertices: self.vertices().cloned().collect(),
            edges: self.edges(),
        }
    }
}

impl<K> UndirectedGraph<K, RandomState>
where
    K: Eq + Hash + Clone,
{
    /// Rebuilds a graph through the regular mutators.
    ///
    /// Duplicate vertices, self-loops, repeated pairs and edges naming unknown
    /// vertices are dropped, exactly as direct calls would drop them.
    pub fn from_snapshot(snapshot: &GraphSnapshot<K>) -> Self {
        let mut graph = Self::with_capacity(snapshot.vertices.len() * 2);
        for vertex in &snapshot.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &snapshot.edges {
            graph.add_edge(&edge.a, &edge.b, edge.weight);
        }
        graph
    }
}
