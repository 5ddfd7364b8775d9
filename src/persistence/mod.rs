//! Persistence layer for graph databases
//!
//! Each graph lives in one flat JSON file, `<data dir>/<name>.db`. The
//! [`Catalog`] owns the data directory and implements create, save, open and
//! list on top of the [`codec`].

pub mod codec;

pub use codec::DatabaseRecord;

use crate::config::StoreConfig;
use crate::graph::{db_name, Graph};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Persistence errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// No data directory configured
    #[error("Database path not set")]
    Configuration,

    /// Database file does not exist
    #[error("Database not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File exists but does not decode
    #[error("Corrupt database {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Named graph databases under one data directory
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: StoreConfig,
}

impl Catalog {
    /// Create a catalog, creating the data directory if one is configured
    pub fn new(config: StoreConfig) -> PersistenceResult<Self> {
        if let Some(dir) = &config.data_dir {
            std::fs::create_dir_all(dir)?;
            info!("Using data directory {:?}", dir);
        }
        Ok(Self { config })
    }

    /// Point the catalog at `path`, creating it (and parents) if needed
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> PersistenceResult<()> {
        let path = path.into();
        std::fs::create_dir_all(&path)?;
        info!("Using data directory {:?}", path);
        self.config.data_dir = Some(path);
        Ok(())
    }

    /// Configured data directory, if any
    pub fn path(&self) -> Option<&Path> {
        self.config.data_dir.as_deref()
    }

    fn root(&self) -> PersistenceResult<&Path> {
        self.path().ok_or(PersistenceError::Configuration)
    }

    /// File backing the database `name` (`.db` appended if missing)
    pub fn db_path(&self, name: &str) -> PersistenceResult<PathBuf> {
        Ok(self.root()?.join(db_name(name)))
    }

    /// Create an empty graph that can later be saved here
    pub fn create_graph(&self, name: &str) -> PersistenceResult<Graph> {
        self.root()?;
        Ok(Graph::new(name))
    }

    /// Write `graph` to `<data dir>/<graph name>`, replacing any previous file
    ///
    /// JSON has no NaN or infinity: non-finite float properties are written
    /// as `null` and read back as [`PropertyValue::Null`](crate::PropertyValue::Null).
    pub fn save(&self, graph: &Graph) -> PersistenceResult<PathBuf> {
        let path = self.db_path(graph.name())?;

        let file = File::create(&path).map_err(|e| {
            warn!("Error saving database {:?}: {}", path, e);
            e
        })?;
        let mut writer = BufWriter::new(file);
        codec::encode(graph, &mut writer).map_err(io::Error::from)?;
        writer.flush()?;

        info!(
            "Saved {} ({} vertices, {} edges) to {:?}",
            graph.name(),
            graph.vertex_count(),
            graph.edge_count(),
            path
        );
        Ok(path)
    }

    /// Load the database `name`, replaying every record through the store
    pub fn open(&self, name: &str) -> PersistenceResult<Graph> {
        let path = self.db_path(name)?;

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound(path));
            }
            Err(e) => {
                warn!("Error opening database {:?}: {}", path, e);
                return Err(e.into());
            }
        };

        let record = codec::decode(BufReader::new(file)).map_err(|source| {
            warn!("Corrupt database {:?}: {}", path, source);
            PersistenceError::Corrupt {
                path: path.clone(),
                source,
            }
        })?;

        let mut graph = self.create_graph(name)?;
        let skipped = record.replay_into(&mut graph);

        info!(
            "Opened {} ({} vertices, {} edges, {} skipped)",
            graph.name(),
            graph.vertex_count(),
            graph.edge_count(),
            skipped
        );
        Ok(graph)
    }

    /// File names (not directories) in the data directory, sorted
    ///
    /// An unreadable or unset directory yields an empty list and a warning.
    pub fn list_all(&self) -> Vec<String> {
        let Some(root) = self.path() else {
            warn!("Error listing databases: database path not set");
            return Vec::new();
        };

        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error listing databases in {:?}: {}", root, e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();

        debug!("Found {} databases in {:?}", names.len(), root);
        names
    }
}
