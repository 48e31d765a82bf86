//! Serialized graph description.

use serde::{Deserialize, Serialize};

/// A graph as written in a JSON document.
///
/// Edges are `[source, target]` pairs. Every edge endpoint must also be
/// listed in `vertices`, since edges never create vertices.
///
/// # Example
///
/// ```
/// use adjgraph::loader::GraphDocument;
///
/// let json = r#"{"vertices": ["A", "B"], "edges": [["A", "B"]]}"#;
/// let doc: GraphDocument = serde_json::from_str(json).unwrap();
/// assert_eq!(doc.vertices.len(), 2);
/// assert_eq!(doc.edges[0], ("A".to_string(), "B".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GraphDocument {
    /// Optional display name of the graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Vertices in the order they are added.
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Directed edges in the order they are added.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphDocument {
    /// Returns true if the document describes neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Returns the graph name, or `"graph"` when none is set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("graph")
    }
}
