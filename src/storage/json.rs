//! JSON file storage
//!
//! Crawl artifacts are written with a four-space indent, the article catalog
//! with two spaces. Non-ASCII text is written as-is.

use crate::config::OutputConfig;
use crate::crawler::{CrawlGraph, VisitedPaths};
use crate::extractor::ArticleCatalog;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const CRAWL_INDENT: &[u8] = b"    ";
const CATALOG_INDENT: &[u8] = b"  ";

/// Storage backed by three JSON files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStorage {
    graph_path: PathBuf,
    visited_path: PathBuf,
    catalog_path: PathBuf,
}

impl JsonStorage {
    pub fn new(
        graph_path: impl Into<PathBuf>,
        visited_path: impl Into<PathBuf>,
        catalog_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            graph_path: graph_path.into(),
            visited_path: visited_path.into(),
            catalog_path: catalog_path.into(),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(
            &config.graph_path,
            &config.visited_path,
            &config.catalog_path,
        )
    }

    pub fn graph_path(&self) -> &Path {
        &self.graph_path
    }

    pub fn visited_path(&self) -> &Path {
        &self.visited_path
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }
}

impl Storage for JsonStorage {
    fn save_graph(&mut self, graph: &CrawlGraph) -> StorageResult<()> {
        write_json(&self.graph_path, graph, CRAWL_INDENT)?;
        tracing::info!("Saved crawl graph to {}", self.graph_path.display());
        Ok(())
    }

    fn load_graph(&self) -> StorageResult<CrawlGraph> {
        read_json(&self.graph_path)
    }

    fn save_visited(&mut self, visited: &VisitedPaths) -> StorageResult<()> {
        write_json(&self.visited_path, visited, CRAWL_INDENT)?;
        tracing::info!("Saved visited paths to {}", self.visited_path.display());
        Ok(())
    }

    fn load_visited(&self) -> StorageResult<VisitedPaths> {
        read_json(&self.visited_path)
    }

    fn save_catalog(&mut self, catalog: &ArticleCatalog) -> StorageResult<()> {
        write_json(&self.catalog_path, catalog, CATALOG_INDENT)?;
        tracing::info!(
            "Saved {} articles to {}",
            catalog.len(),
            self.catalog_path.display()
        );
        Ok(())
    }

    fn load_catalog(&self) -> StorageResult<ArticleCatalog> {
        read_json(&self.catalog_path)
    }
}

/// Writes a value as indented JSON, creating parent directories as needed
fn write_json<T: Serialize>(path: &Path, value: &T, indent: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(indent));
    value.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<T> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
