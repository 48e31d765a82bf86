//! Loader for JSON graph documents.
//!
//! This module parses graph documents and turns them into a
//! [`DirectedGraph<String>`].

use std::fs;
use std::path::Path;

use log::info;

use super::document::GraphDocument;
use crate::graph::{DirectedGraph, DuplicateVertexPolicy, GraphError};

/// Errors that can occur while loading a graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The document describes an invalid graph.
    #[error("Invalid graph: {0}")]
    GraphError(#[from] GraphError),

    /// The document structure is unusable.
    #[error("Invalid graph document: {0}")]
    InvalidDocument(String),
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Parses a graph document from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use adjgraph::loader::parse_file;
///
/// let doc = parse_file(Path::new("graph.json")).unwrap();
/// println!("Vertices: {:?}", doc.vertices);
/// ```
pub fn parse_file(path: &Path) -> LoadResult<GraphDocument> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a graph document from a string.
///
/// # Example
///
/// ```
/// use adjgraph::loader::parse_str;
///
/// let json = r#"{"name": "deps", "vertices": ["a", "b"], "edges": [["a", "b"]]}"#;
/// let doc = parse_str(json).unwrap();
/// assert_eq!(doc.name, Some("deps".to_string()));
/// assert_eq!(doc.edges.len(), 1);
/// ```
pub fn parse_str(content: &str) -> LoadResult<GraphDocument> {
    let doc: GraphDocument = serde_json::from_str(content)?;
    Ok(doc)
}

/// Validates a parsed document.
///
/// A document must describe at least one vertex or edge.
pub fn validate(doc: &GraphDocument) -> LoadResult<()> {
    if doc.is_empty() {
        return Err(LoadError::InvalidDocument(
            "document has no vertices and no edges".to_string(),
        ));
    }
    Ok(())
}

/// Builds a graph from a document.
///
/// Vertices are added in document order, then edges. Repeated edges are
/// dropped; repeated vertices are handled by `policy`.
///
/// # Example
///
/// ```
/// use adjgraph::graph::DuplicateVertexPolicy;
/// use adjgraph::loader::{build_graph, parse_str};
///
/// let doc = parse_str(r#"{"vertices": ["a", "b"], "edges": [["a", "b"], ["a", "b"]]}"#).unwrap();
/// let graph = build_graph(&doc, DuplicateVertexPolicy::Reject).unwrap();
/// assert_eq!(graph.num_edges(), 1);
/// ```
pub fn build_graph(
    doc: &GraphDocument,
    policy: DuplicateVertexPolicy,
) -> LoadResult<DirectedGraph<String>> {
    let mut graph = DirectedGraph::with_policy(policy);

    for vertex in &doc.vertices {
        graph.add_vertex(vertex.clone())?;
    }

    let mut duplicates = 0;
    for (from, to) in &doc.edges {
        if !graph.add_edge(from, to)? {
            duplicates += 1;
        }
    }

    info!(
        "Loaded {}: {} vertices, {} edges ({} repeated edges dropped)",
        doc.display_name(),
        graph.num_vertices(),
        graph.num_edges(),
        duplicates
    );

    Ok(graph)
}

/// Reads, validates and builds a graph from a file.
///
/// # Returns
///
/// The document's display name and the built graph.
pub fn load_file(
    path: &Path,
    policy: DuplicateVertexPolicy,
) -> LoadResult<(String, DirectedGraph<String>)> {
    let doc = parse_file(path)?;
    validate(&doc)?;
    let graph = build_graph(&doc, policy)?;
    Ok((doc.display_name().to_string(), graph))
}
