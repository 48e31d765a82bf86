//! adjgraph - Adjacency-list directed graphs
//!
//! This crate provides a generic directed graph with ordered out-neighbor
//! lists and a loader for JSON graph documents.

pub mod graph;
pub mod loader;
