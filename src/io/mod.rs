//! Text exports: Graphviz DOT and JSON snapshots.

pub mod dot;
pub mod snapshot;

pub use snapshot::GraphSnapshot;
