//! Graphviz DOT export.
//!
//! Three renderings share one writer: the plain graph, the graph with a
//! vertex coloring as fill colors, and the graph with a spanning forest
//! highlighted. Every undirected edge is written once, from the endpoint
//! that comes first in vertex order.

use core::fmt::{self, Display, Write as _};
use core::hash::{BuildHasher, Hash};
use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{UndirectedEdge, UndirectedGraph};

/// Fill colors handed out by color index; indices past the end render white.
pub const PALETTE: [&str; 20] = [
    "red", "green", "blue", "yellow", "cyan", "magenta", "orange", "pink", "purple", "brown",
    "lime", "teal", "navy", "olive", "maroon", "gray", "black", "gold", "silver", "beige",
];

const FALLBACK_COLOR: &str = "white";
const SPANNING_VERTEX_COLOR: &str = "lightblue";

/// What to emphasize in the exported graph.
#[derive(Debug)]
pub enum Highlight<'a, K> {
    /// Plain vertices and edges.
    None,
    /// Fill every vertex with the palette entry of its color, by vertex position.
    Coloring(&'a [usize]),
    /// Fill vertices touched by the forest and draw forest edges bold red.
    SpanningTree(&'a [UndirectedEdge<K>]),
}

impl<K> Clone for Highlight<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Highlight<'_, K> {}

/// Renders the graph as DOT text.
pub fn to_dot<K, S>(graph: &UndirectedGraph<K, S>) -> String
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
{
    render_dot(graph, Highlight::None)
}

/// Renders the graph with each vertex filled by its color.
pub fn to_dot_colored<K, S>(graph: &UndirectedGraph<K, S>, colors: &[usize]) -> String
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
{
    render_dot(graph, Highlight::Coloring(colors))
}

/// Renders the graph with `forest` highlighted.
pub fn to_dot_with_spanning_tree<K, S>(
    graph: &UndirectedGraph<K, S>,
    forest: &[UndirectedEdge<K>],
) -> String
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
{
    render_dot(graph, Highlight::SpanningTree(forest))
}

/// Renders the graph as DOT text with the requested emphasis.
pub fn render_dot<K, S>(graph: &UndirectedGraph<K, S>, highlight: Highlight<'_, K>) -> String
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(&mut out, graph, highlight);
    out
}

fn write_dot<K, S>(
    out: &mut String,
    graph: &UndirectedGraph<K, S>,
    highlight: Highlight<'_, K>,
) -> fmt::Result
where
    K: Eq + Hash + Clone + Display,
    S: BuildHasher,
{
    writeln!(out, "graph G {{")?;

    for (i, vertex) in graph.vertices().enumerate() {
        let name = Quoted(vertex);
        match highlight {
            Highlight::None => writeln!(out, "  {name};")?,
            Highlight::Coloring(colors) => {
                let fill = colors
                    .get(i)
                    .and_then(|&c| PALETTE.get(c))
                    .copied()
                    .unwrap_or(FALLBACK_COLOR);
                writeln!(out, "  {name} [style=filled, fillcolor=\"{fill}\"];")?;
            }
            Highlight::SpanningTree(forest) => {
                if forest.iter().any(|edge| edge.touches(vertex)) {
                    writeln!(
                        out,
                        "  {name} [style=filled, fillcolor={SPANNING_VERTEX_COLOR}];"
                    )?;
                } else {
                    writeln!(out, "  {name};")?;
                }
            }
        }
    }

    for edge in graph.edges() {
        let (a, b, weight) = (Quoted(&edge.a), Quoted(&edge.b), edge.weight);
        let in_forest = match highlight {
            Highlight::SpanningTree(forest) => forest.iter().any(|f| f.joins(&edge.a, &edge.b)),
            _ => false,
        };
        if in_forest {
            writeln!(
                out,
                "  {a} -- {b} [label=\"{weight}\", color=red, penwidth=2.0];"
            )?;
        } else {
            writeln!(out, "  {a} -- {b} [label=\"{weight}\"];")?;
        }
    }

    writeln!(out, "}}")
}

/// Displays a vertex key as a double-quoted DOT identifier.
struct Quoted<'a, K>(&'a K);

impl<K: Display> Display for Quoted<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        f.write_char('"')?;
        for ch in text.chars() {
            if ch == '"' || ch == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(ch)?;
        }
        f.write_char('"')
    }
}

/// Writes DOT text to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be written.
pub fn save(path: &Path, dot: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, dot)?;
    debug!(path = %path.display(), bytes = dot.len(), "dot file written");
    Ok(())
}

/// Renders a DOT file to PNG with the external `dot` tool.
///
/// # Errors
/// Returns [`GraphError::Render`] if `dot` cannot be started or exits with failure.
pub fn render(dot_path: &Path, png_path: &Path) -> Result<()> {
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .status()
        .map_err(|err| GraphError::Render(format!("could not run dot: {err}")))?;
    if !status.success() {
        return Err(GraphError::Render(format!("dot exited with {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UndirectedGraph<i32> {
        let mut graph = UndirectedGraph::new();
        for v in 1..=3 {
            graph.add_vertex(v);
        }
        graph.add_edge(&1, &2, 10);
        graph.add_edge(&2, &3, 5);
        graph.add_edge(&1, &3, 1);
        graph
    }

    #[test]
    fn test_plain_dot() {
        let dot = to_dot(&sample());
        assert_eq!(
            dot,
            "graph G {\n  \"1\";\n  \"2\";\n  \"3\";\n  \"1\" -- \"2\" [label=\"10\"];\n  \"1\" -- \"3\" [label=\"1\"];\n  \"2\" -- \"3\" [label=\"5\"];\n}\n"
        );
    }

    #[test]
    fn test_colored_dot_falls_back_to_white() {
        let graph = sample();
        let dot = to_dot_colored(&graph, &[0, 25]);
        assert!(dot.contains("\"1\" [style=filled, fillcolor=\"red\"];"));
        assert!(dot.contains("\"2\" [style=filled, fillcolor=\"white\"];"));
        assert!(dot.contains("\"3\" [style=filled, fillcolor=\"white\"];"));
    }

    #[test]
    fn test_spanning_tree_dot_marks_forest_edges() {
        let mut graph = sample();
        graph.add_vertex(4);
        let forest = graph.minimum_spanning_tree();
        let dot = to_dot_with_spanning_tree(&graph, &forest);

        assert!(dot.contains("\"1\" -- \"3\" [label=\"1\", color=red, penwidth=2.0];"));
        assert!(dot.contains("\"2\" -- \"3\" [label=\"5\", color=red, penwidth=2.0];"));
        assert!(dot.contains("\"1\" -- \"2\" [label=\"10\"];"));
        assert!(dot.contains("\"2\" [style=filled, fillcolor=lightblue];"));
        assert!(dot.contains("  \"4\";\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(String::from("a\"b"));
        assert!(to_dot(&graph).contains("\"a\\\"b\";"));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join(format!("ugraph-dot-{}", std::process::id()));
        let path = dir.join("nested").join("graph.dot");
        save(&path, "graph G {\n}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "graph G {\n}\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
