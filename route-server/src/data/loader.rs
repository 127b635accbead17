//! Loading and saving graphs as JSON files.
//!
//! A graph is stored as two files: a JSON array of cities and a JSON array
//! of routes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::records::{CityRecord, GraphData, RouteRecord};
use crate::graph::{Graph, GraphError};

/// Errors from reading or writing graph files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read or written
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not the expected JSON
    #[error("{}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Records are well-formed but do not describe a valid graph
    #[error("invalid graph data: {0}")]
    Graph(#[from] GraphError),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), LoadError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read city and route records without building a graph.
pub fn read_graph_data(cities_path: &Path, routes_path: &Path) -> Result<GraphData, LoadError> {
    let cities: Vec<CityRecord> = read_json(cities_path)?;
    let routes: Vec<RouteRecord> = read_json(routes_path)?;
    debug!(
        cities = cities.len(),
        routes = routes.len(),
        "read graph records"
    );
    Ok(GraphData { cities, routes })
}

/// Load a graph from a cities file and a routes file.
pub fn load_graph_from_files(cities_path: &Path, routes_path: &Path) -> Result<Graph, LoadError> {
    let data = read_graph_data(cities_path, routes_path)?;
    Ok(data.to_graph()?)
}

/// Save a graph as a cities file and a routes file.
///
/// Each bidirectional pair is written once. Parent directories are created
/// if needed.
pub fn save_graph_to_files(
    graph: &Graph,
    cities_path: &Path,
    routes_path: &Path,
) -> Result<(), LoadError> {
    let data = GraphData::from_graph(graph);
    write_json(cities_path, &data.cities)?;
    write_json(routes_path, &data.routes)?;
    Ok(())
}
