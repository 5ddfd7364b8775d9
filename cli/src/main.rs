//! Graphology CLI: an interactive shell over a local graph database
//!
//! Opens (or creates) a graph, optionally bulk-loads JSON node and edge
//! files into it, then reads traversal commands from stdin.

mod command;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use command::Command;
use graphology::{load_files, Catalog, Graph, StoreConfig};
use session::{Flow, OutputFormat, Session};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphology", version, about = "Graphology graph database shell")]
struct Cli {
    /// Directory holding `<name>.db` files (falls back to GRAPHOLOGY_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// YAML config file (`data_dir: ...`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format for query results
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// JSON array of vertices to load at startup
    #[arg(long, requires = "edges")]
    nodes: Option<PathBuf>,

    /// JSON array of edges to load at startup
    #[arg(long, requires = "nodes")]
    edges: Option<PathBuf>,

    /// Existing database to open instead of starting empty
    #[arg(long)]
    db: Option<String>,

    /// Name for a new graph
    #[arg(long, default_value = "default")]
    name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // --data-dir, then the environment, then the config file
    let mut config = StoreConfig {
        data_dir: cli.data_dir,
    }
    .or(StoreConfig::from_env());
    if let Some(path) = &cli.config {
        let file = StoreConfig::from_yaml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        config = config.or(file);
    }

    let catalog = Catalog::new(config)?;
    let mut graph = match &cli.db {
        Some(name) => catalog
            .open(name)
            .with_context(|| format!("opening {}", name))?,
        // In-memory sessions are allowed; `save` reports the missing data directory
        None => Graph::new(&cli.name),
    };

    if let (Some(nodes), Some(edges)) = (&cli.nodes, &cli.edges) {
        let report = load_files(&mut graph, nodes, edges)?;
        if !report.is_clean() {
            warn!("{} records were rejected while loading", report.errors.len());
        }
        eprintln!(
            "Loaded {} vertices and {} edges",
            report.vertex_ids.len(),
            report.edge_ids.len()
        );
    }

    info!("Starting shell on {}", graph.name());
    run_shell(Session::new(catalog, graph, cli.format))
}

fn run_shell(mut session: Session) -> Result<()> {
    eprintln!(
        "Graphology {} on {} (type `help` for commands)",
        graphology::version(),
        session.graph().name()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        eprint!("graphology> ");

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        if line.trim().is_empty() {
            continue;
        }

        let flow = Command::parse(&line).and_then(|cmd| session.execute(cmd, &mut stdout));
        match flow {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    eprintln!("Bye!");
    Ok(())
}
