use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ugraph::{Menu, MenuConfig};

#[derive(Parser)]
#[command(name = "ugraph")]
#[command(about = "Interactive undirected graph workbench", long_about = None)]
struct Cli {
    /// Directory for exported DOT and PNG files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Render exports to PNG with Graphviz `dot`
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Seed for random graph generation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MenuConfig {
        output_dir: cli.output_dir,
        render: cli.render,
        seed: cli.seed,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config);
    menu.run().context("menu session failed")
}
