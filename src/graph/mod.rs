//! Graph module for directed adjacency-list graphs.
//!
//! This module provides the [`DirectedGraph`] struct, a generic directed
//! graph storing the out-neighbors of each vertex in insertion order, plus
//! petgraph-backed structural queries (cycles, topological order).
//!
//! # Example
//!
//! ```rust
//! use adjgraph::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! for v in ["A", "B", "C"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge(&"A", &"C").unwrap();
//! graph.add_edge(&"A", &"B").unwrap();
//!
//! assert_eq!(graph.num_edges(), 2);
//! assert_eq!(graph.neighbors(&"A").unwrap(), &["C", "B"]);
//! ```

mod analysis;
mod directed_graph;

pub use directed_graph::{DirectedGraph, DuplicateVertexPolicy, GraphError, GraphResult};
