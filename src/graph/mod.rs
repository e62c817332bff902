//! The undirected weighted graph and the algorithms that run over it.
//!
//! - `undirected`: vertex/edge storage and mutation
//! - `algorithms`: shortest paths, minimum spanning forest, greedy coloring
//! - `generate`: random graph construction

pub mod algorithms;
pub mod generate;
pub mod undirected;

// Re-export commonly used types from submodules
pub use algorithms::{greedy_coloring, minimum_spanning_tree, shortest_paths, Distance};
pub use generate::{generate, generate_with_rng, GeneratorConfig};
pub use undirected::{Edge, UndirectedEdge, UndirectedGraph, Weight};
