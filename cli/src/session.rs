//! Shell state: the open graph, the catalog and the traversal being built

use crate::command::{Command, HELP};
use anyhow::{anyhow, Context, Result};
use comfy_table::{ContentArrangement, Table};
use graphology::persistence::codec;
use graphology::{Catalog, Graph, Query, Step, Traversal, Vertex};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    catalog: Catalog,
    graph: Graph,
    traversal: Option<Traversal>,
    format: OutputFormat,
}

impl Session {
    pub fn new(catalog: Catalog, graph: Graph, format: OutputFormat) -> Self {
        Self {
            catalog,
            graph,
            traversal: None,
            format,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Node(name) => {
                self.traversal = Some(Traversal::v(name));
            }
            Command::In(rel) => self.push(Step::In(rel.into()))?,
            Command::Out(rel) => self.push(Step::Out(rel.into()))?,
            Command::Both(rel) => self.push(Step::Both(rel.into()))?,
            Command::Take(n) => self.push(Step::Take(n))?,
            Command::Unique => self.push(Step::Unique)?,
            Command::Except(id) => self.push(Step::Except(id.into()))?,
            Command::Exec => {
                let traversal = self.current()?;
                let query = traversal.run(&self.graph);
                self.print_results(&query, out)?;
            }
            Command::List => {
                for name in self.catalog.list_all() {
                    writeln!(out, "{}", name)?;
                }
            }
            Command::Load(name) => {
                let graph = self
                    .catalog
                    .open(&name)
                    .with_context(|| format!("cannot load {}", name))?;
                writeln!(
                    out,
                    "Loaded {} ({} vertices, {} edges)",
                    graph.name(),
                    graph.vertex_count(),
                    graph.edge_count()
                )?;
                self.graph = graph;
                self.traversal = None;
            }
            Command::Save => {
                let path = self.catalog.save(&self.graph)?;
                writeln!(out, "Saved to {}", path.display())?;
            }
            Command::Print => {
                writeln!(out, "{}", codec::to_json_pretty(&self.graph)?)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn current(&self) -> Result<&Traversal> {
        self.traversal
            .as_ref()
            .ok_or_else(|| anyhow!("no traversal started; use `node <name>` first"))
    }

    fn push(&mut self, step: Step) -> Result<()> {
        let traversal = self
            .traversal
            .as_mut()
            .ok_or_else(|| anyhow!("no traversal started; use `node <name>` first"))?;
        traversal.push(step);
        Ok(())
    }

    fn print_results(&self, query: &Query<'_>, out: &mut impl Write) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", query.to_json()?)?,
            OutputFormat::Table => {
                if query.is_empty() {
                    writeln!(out, "(no results)")?;
                    return Ok(());
                }

                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["id", "label", "name", "props"]);
                for vertex in query.iter() {
                    table.add_row(row(vertex));
                }

                writeln!(out, "{}", table)?;
                writeln!(out, "{} row(s)", query.len())?;
            }
        }
        Ok(())
    }
}

fn row(vertex: &Vertex) -> Vec<String> {
    let labels: Vec<&str> = vertex.labels.iter().map(|l| l.as_str()).collect();
    let props = serde_json::to_string(&vertex.properties).unwrap_or_default();
    vec![
        vertex.id.to_string(),
        labels.join(","),
        vertex.name().unwrap_or_default().to_string(),
        props,
    ]
}
