//! Line-oriented command menu over a graph of unsigned integer vertices.
//!
//! Each numeric selection maps onto one graph operation; parameters are read
//! one per line. Invalid selections and unparseable parameters are reported
//! and the menu continues. End of input ends the session.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::graph::{generate_with_rng, GeneratorConfig, UndirectedGraph, Weight};
use crate::io::dot;

/// Vertex key type used by the menu.
pub type MenuVertex = usize;

/// Runtime settings for a [`Menu`] session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Directory that receives exported `.dot` (and rendered `.png`) files.
    pub output_dir: PathBuf,
    /// Render every export to PNG with the external `dot` tool.
    pub render: bool,
    /// Seed for the random graph generator; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            render: false,
            seed: None,
        }
    }
}

const MENU_TEXT: &str = "  Menu:

0. Exit
1. Add vertex
2. Add edge
3. Delete vertex
4. Delete edge
5. Generate random graph
6. Find shortest paths
7. Color graph
8. Find minimum spanning tree
9. Export graph
10. Print graph as JSON

Input number of function:";

/// An interactive session reading commands from `R` and writing to `W`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    config: MenuConfig,
    graph: UndirectedGraph<MenuVertex>,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session over an empty graph.
    pub fn new(input: R, output: W, config: MenuConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            input,
            output,
            config,
            graph: UndirectedGraph::new(),
            rng,
        }
    }

    /// The graph as modified so far.
    pub fn graph(&self) -> &UndirectedGraph<MenuVertex> {
        &self.graph
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `0` is selected or the input ends.
    ///
    /// # Errors
    /// Fails only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU_TEXT}")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(0) => return Ok(()),
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Wrong number of function input\n")?;
                    continue;
                }
            };

            debug!(choice, "menu selection");
            if let Err(err) = self.dispatch(choice) {
                writeln!(self.output, "Error: {err:#}")?;
            }
            writeln!(self.output)?;
        }
    }

    fn dispatch(&mut self, choice: u32) -> Result<()> {
        match choice {
            1 => self.add_vertex(),
            2 => self.add_edge(),
            3 => self.remove_vertex(),
            4 => self.remove_edge(),
            5 => self.generate(),
            6 => self.shortest_paths(),
            7 => self.color(),
            8 => self.spanning_tree(),
            9 => self.export("graph", dot::to_dot(&self.graph)),
            10 => self.print_json(),
            _ => {
                writeln!(self.output, "Wrong number of function input")?;
                Ok(())
            }
        }
    }

    fn add_vertex(&mut self) -> Result<()> {
        let vertex: MenuVertex = self.prompt("Input vertex:")?;
        let changed = self.graph.add_vertex(vertex);
        self.report(changed, format_args!("Vertex {vertex} added."))
    }

    fn add_edge(&mut self) -> Result<()> {
        let u: MenuVertex = self.prompt("Input first vertex:")?;
        let v: MenuVertex = self.prompt("Input second vertex:")?;
        let weight: Weight = self.prompt("Input weight of the edge:")?;
        let changed = self.graph.add_edge(&u, &v, weight);
        self.report(changed, format_args!("Edge {u} -- {v} added."))
    }

    fn remove_vertex(&mut self) -> Result<()> {
        let vertex: MenuVertex = self.prompt("Input vertex to delete:")?;
        let changed = self.graph.remove_vertex(&vertex);
        self.report(changed, format_args!("Vertex {vertex} deleted."))
    }

    fn remove_edge(&mut self) -> Result<()> {
        let u: MenuVertex = self.prompt("Input first vertex:")?;
        let v: MenuVertex = self.prompt("Input second vertex:")?;
        let changed = self.graph.remove_edge(&u, &v);
        self.report(changed, format_args!("Edge {u} -- {v} deleted."))
    }

    fn generate(&mut self) -> Result<()> {
        let config = GeneratorConfig {
            vertex_count: self.prompt("Input number of vertexes:")?,
            edge_count: self.prompt("Input number of edges:")?,
            min_weight: self.prompt("Input minimal weight of edge:")?,
            max_weight: self.prompt("Input maximum weight of edge:")?,
        };
        self.graph = generate_with_rng(&config, &mut self.rng)?;

        writeln!(
            self.output,
            "Generated graph with {} vertices and {} edges.",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        Ok(())
    }

    fn shortest_paths(&mut self) -> Result<()> {
        let start: MenuVertex = self.prompt("Input number of starter vertex:")?;
        let distances = self.graph.shortest_paths(&start)?;
        for (vertex, distance) in self.graph.vertices().zip(&distances) {
            match distance {
                Some(d) => writeln!(self.output, "Minimum distance to vertex {vertex}: {d}")?,
                None => writeln!(self.output, "Minimum distance to vertex {vertex}: infinity")?,
            }
        }
        Ok(())
    }

    fn color(&mut self) -> Result<()> {
        let colors = self.graph.greedy_coloring();
        for (vertex, color) in self.graph.vertices().zip(&colors) {
            writeln!(self.output, "Vertex {vertex} ---> Color {color}")?;
        }
        self.export("colored_graph", dot::to_dot_colored(&self.graph, &colors))
    }

    fn spanning_tree(&mut self) -> Result<()> {
        let forest = self.graph.minimum_spanning_tree();
        writeln!(self.output, "Minimum Spanning Tree:")?;
        for edge in &forest {
            writeln!(
                self.output,
                "Edge {} -- {} with weight {}",
                edge.a, edge.b, edge.weight
            )?;
        }
        self.export(
            "skeleton_of_the_graph",
            dot::to_dot_with_spanning_tree(&self.graph, &forest),
        )
    }

    fn print_json(&mut self) -> Result<()> {
        let json = self.graph.snapshot().to_json()?;
        writeln!(self.output, "{json}")?;
        Ok(())
    }

    /// Saves `text` as `<stem>.dot` in the output directory, rendering it if configured.
    fn export(&mut self, stem: &str, text: String) -> Result<()> {
        let dot_path = self.config.output_dir.join(format!("{stem}.dot"));
        dot::save(&dot_path, &text)
            .with_context(|| format!("failed to write {}", dot_path.display()))?;
        writeln!(
            self.output,
            "Graph has been saved to {} in DOT format.",
            dot_path.display()
        )?;

        if self.config.render {
            let png_path = dot_path.with_extension("png");
            dot::render(&dot_path, &png_path)
                .with_context(|| format!("failed to render {}", png_path.display()))?;
            writeln!(self.output, "Rendered {}.", png_path.display())?;
        }
        Ok(())
    }

    fn report(&mut self, changed: bool, done: core::fmt::Arguments<'_>) -> Result<()> {
        if changed {
            writeln!(self.output, "{done}")?;
        } else {
            writeln!(self.output, "Nothing changed.")?;
        }
        Ok(())
    }

    fn prompt<T>(&mut self, label: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        writeln!(self.output, "{label}")?;
        let Some(line) = self.read_line()? else {
            bail!("unexpected end of input");
        };
        let line = line.trim();
        line.parse()
            .map_err(|err| anyhow::anyhow!("invalid input {line:?}: {err}"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, config: MenuConfig) -> (UndirectedGraph<MenuVertex>, String) {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new(), config);
        menu.run().unwrap();
        let graph = menu.graph().clone();
        let output = String::from_utf8(menu.into_output()).unwrap();
        (graph, output)
    }

    fn temp_config(tag: &str) -> MenuConfig {
        MenuConfig {
            output_dir: std::env::temp_dir().join(format!("ugraph-menu-{tag}-{}", std::process::id())),
            render: false,
            seed: Some(11),
        }
    }

    #[test]
    fn test_builds_graph_and_prints_distances() {
        let script = "1\n1\n1\n2\n1\n3\n2\n1\n2\n10\n2\n2\n3\n5\n6\n1\n0\n";
        let (graph, output) = run(script, MenuConfig::default());

        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.are_connected(&2, &3));
        assert!(output.contains("Minimum distance to vertex 1: 0"));
        assert!(output.contains("Minimum distance to vertex 2: 10"));
        assert!(output.contains("Minimum distance to vertex 3: 15"));
    }

    #[test]
    fn test_reports_unreachable_and_missing_start() {
        let script = "1\n1\n1\n2\n6\n1\n6\n9\n";
        let (_, output) = run(script, MenuConfig::default());
        assert!(output.contains("Minimum distance to vertex 2: infinity"));
        assert!(output.contains("Error: start vertex not found in the graph"));
    }

    #[test]
    fn test_wrong_selection_and_bad_parameter_continue() {
        let script = "42\nabc\n1\nnot-a-number\n1\n5\n0\n";
        let (graph, output) = run(script, MenuConfig::default());
        assert_eq!(output.matches("Wrong number of function input").count(), 2);
        assert!(output.contains("invalid input \"not-a-number\""));
        assert_eq!(graph.vertex(0), Some(5));
    }

    #[test]
    fn test_negative_vertex_is_rejected() {
        let script = "1\n-3\n1\n3\n0\n";
        let (graph, output) = run(script, MenuConfig::default());
        assert!(output.contains("invalid input \"-3\""));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.vertex(0), Some(3));
    }

    #[test]
    fn test_noop_mutations_are_reported() {
        let script = "1\n4\n1\n4\n2\n4\n4\n1\n";
        let (graph, output) = run(script, MenuConfig::default());
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(output.matches("Nothing changed.").count(), 2);
    }

    #[test]
    fn test_generate_color_and_spanning_tree_exports() {
        let config = temp_config("exports");
        let dir = config.output_dir.clone();
        let script = "5\n6\n8\n1\n9\n7\n8\n9\n0\n";
        let (graph, output) = run(script, config);

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert!(output.contains("Vertex 0 ---> Color 0"));
        assert_eq!(
            output.matches("with weight").count(),
            graph.minimum_spanning_tree().len()
        );
        for name in ["colored_graph.dot", "skeleton_of_the_graph.dot", "graph.dot"] {
            let text = std::fs::read_to_string(dir.join(name)).unwrap();
            assert!(text.starts_with("graph G {"));
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prints_json_snapshot() {
        let script = "1\n3\n1\n4\n2\n3\n4\n2\n10\n";
        let (_, output) = run(script, MenuConfig::default());
        assert!(output.contains("\"vertices\""));
        assert!(output.contains("\"weight\": 2"));
    }
}
