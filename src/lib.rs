//! # `ugraph` - Undirected Weighted Graphs
//!
//! An in-memory undirected, weighted graph keyed by any hashable vertex type,
//! stored on a purpose-built open-addressing hash table, with three classic
//! algorithms: single-source shortest paths, minimum spanning tree and greedy
//! vertex coloring.
//!
//! ## Guarantees
//!
//! ### Graph Invariants
//! - **Symmetry**: every edge is stored on both endpoints with the same weight.
//! - **Simple graph**: no self-loops and at most one edge per vertex pair.
//! - **Total mutations**: adding a duplicate or touching an absent vertex is a
//!   no-op that reports `false`, never an error or a panic.
//!
//! ### Hash Table Invariants
//! - **No tombstones**: removal re-seats the probe run after the freed slot, so
//!   every live key is reachable from its home slot before any empty slot.
//! - **Bounded load**: the table doubles before exceeding 70% load and halves
//!   after dropping to 25%, never below [`collections::MIN_CAPACITY`].
//!
//! ### Algorithm Results
//! - Per-vertex results are indexed by insertion order at call time.
//! - Shortest paths break ties by insertion order and report unreachable
//!   vertices as `None`.
//! - The spanning tree is a forest on disconnected graphs, with
//!   `vertex_count - components` edges.
//!
//! ## Architecture
//!
//! 1. **Collections** (`HashTable`, `DisjointSet`):
//!    - Slot array of `Option` buckets, values stored inline
//!    - Union-find indexed by vertex position, no hashing
//!
//! 2. **Graph** (`UndirectedGraph<K>`):
//!    - Insertion-ordered vertex list plus a `HashTable<K, Vec<Edge<K>>>`
//!    - All reads hand out owned copies
//!
//! 3. **Algorithms**, **generator** and **exporters** read the graph through
//!    its public query surface.
//!
//! ## Example
//!
//! ```rust
//! use ugraph::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::new();
//! for v in [1, 2, 3] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(&1, &2, 10);
//! graph.add_edge(&2, &3, 5);
//!
//! let distances = graph.shortest_paths(&1).unwrap();
//! assert_eq!(distances, vec![Some(0), Some(10), Some(15)]);
//!
//! graph.add_edge(&1, &3, 1);
//! let tree = graph.minimum_spanning_tree();
//! assert_eq!(tree.iter().map(|e| e.weight).sum::<u32>(), 6);
//!
//! assert_eq!(graph.greedy_coloring(), vec![0, 1, 2]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod io;
pub mod menu;

pub use collections::{DisjointSet, HashTable};
pub use error::{GraphError, Result};
pub use graph::{Distance, Edge, GeneratorConfig, UndirectedEdge, UndirectedGraph, Weight};
pub use io::GraphSnapshot;
pub use menu::{Menu, MenuConfig};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Adjacency entries for small keys stay two words of `u32`.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());

    // An unreachable marker costs no more than a tagged `u64`.
    assert!(mem::size_of::<Distance>() <= 2 * mem::size_of::<u64>());

    assert!(collections::MIN_CAPACITY > 0);
};
