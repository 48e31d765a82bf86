use std::path::{Path, PathBuf};

use adjgraph::graph::DuplicateVertexPolicy;
use adjgraph::loader;
use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adjgraph")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Inspect directed graphs described in JSON", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts, adjacency and cycle information for a graph
    Inspect {
        /// Path to the graph document
        path: PathBuf,

        /// What to do when a vertex is listed twice (reject, ignore, replace)
        #[arg(long, default_value = "reject")]
        on_duplicate: DuplicateVertexPolicy,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("adjgraph", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match &cli.command {
        Some(Commands::Inspect { path, on_duplicate }) => inspect(path, *on_duplicate),
        Some(Commands::Version) => {
            println!("adjgraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("adjgraph - directed graph inspector");
            println!("Run 'adjgraph inspect <FILE>' to summarize a graph");
            println!("Run 'adjgraph --help' for more information");
            Ok(())
        }
    }
}

fn inspect(path: &Path, policy: DuplicateVertexPolicy) -> anyhow::Result<()> {
    let (name, graph) = loader::load_file(path, policy)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;

    println!("Graph: {}", name);
    println!("Vertices: {}", graph.num_vertices());
    println!("Edges: {}", graph.num_edges());
    println!();
    print!("{}", graph.to_sorted_string());

    println!();
    if graph.has_cycles() {
        let mut cycles: Vec<Vec<String>> = graph
            .detect_cycles()
            .into_iter()
            .map(|mut cycle| {
                cycle.sort();
                cycle
            })
            .collect();
        cycles.sort();

        println!("Cycles:");
        for cycle in &cycles {
            println!("  {}", cycle.join(", "));
        }
    } else {
        let order = graph.topological_order()?;
        println!("Acyclic. Topological order: {}", order.join(", "));
    }

    Ok(())
}
