//! Containers the graph is built on.
//!
//! - `hash_table`: open-addressing map from vertex key to adjacency list
//! - `disjoint_set`: union-find over vertex positions

pub mod disjoint_set;
pub mod hash_table;

pub use disjoint_set::DisjointSet;
pub use hash_table::{HashTable, MIN_CAPACITY};
