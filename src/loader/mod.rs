//! Loader module for graph description files.
//!
//! Graphs are described as JSON documents listing vertices and
//! `[source, target]` edge pairs.
//!
//! # Example
//!
//! ```
//! use adjgraph::graph::DuplicateVertexPolicy;
//! use adjgraph::loader::{build_graph, parse_str, validate};
//!
//! let doc = parse_str(r#"{"vertices": ["A", "B"], "edges": [["A", "B"]]}"#).unwrap();
//! validate(&doc).unwrap();
//!
//! let graph = build_graph(&doc, DuplicateVertexPolicy::Reject).unwrap();
//! assert!(graph.edge_exists(&"A".to_string(), &"B".to_string()).unwrap());
//! ```

pub mod document;
pub mod json;

pub use document::GraphDocument;
pub use json::{build_graph, load_file, parse_file, parse_str, validate, LoadError, LoadResult};
