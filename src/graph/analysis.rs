//! Structural queries backed by petgraph.
//!
//! The adjacency lists are mirrored into a petgraph `DiGraph` so cycle
//! detection and ordering can reuse petgraph's algorithms.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use petgraph::algo::{is_cyclic_directed, tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use super::directed_graph::{DirectedGraph, GraphError, GraphResult};

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Copies the graph into a petgraph `DiGraph`.
    ///
    /// # Returns
    ///
    /// The petgraph graph with vertices as node weights, and a map from each
    /// vertex to its node index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(["a", "b"], [("a", "b")]).unwrap();
    /// let (digraph, indices) = graph.to_petgraph();
    ///
    /// assert_eq!(digraph.node_count(), 2);
    /// assert!(digraph.contains_edge(indices["a"], indices["b"]));
    /// ```
    pub fn to_petgraph(&self) -> (DiGraph<V, ()>, HashMap<V, NodeIndex>) {
        let mut digraph = DiGraph::with_capacity(self.num_vertices(), self.num_edges());
        let mut indices = HashMap::with_capacity(self.num_vertices());

        for vertex in self.vertices() {
            let idx = digraph.add_node(vertex.clone());
            indices.insert(vertex.clone(), idx);
        }

        for (from, to) in self.edges() {
            if let (Some(&a), Some(&b)) = (indices.get(from), indices.get(to)) {
                digraph.add_edge(a, b, ());
            }
        }

        (digraph, indices)
    }

    /// Checks if the graph contains a directed cycle. Self-loops count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::from_edges(["a", "b"], [("a", "b")]).unwrap();
    /// assert!(!graph.has_cycles());
    ///
    /// graph.add_edge(&"b", &"a").unwrap();
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        let (digraph, _) = self.to_petgraph();
        is_cyclic_directed(&digraph)
    }

    /// Detects and returns all cycles in the graph.
    ///
    /// Each cycle is a strongly connected component with more than one
    /// vertex, or a single vertex with an edge to itself.
    pub fn detect_cycles(&self) -> Vec<Vec<V>> {
        let (digraph, _) = self.to_petgraph();
        let mut cycles = Vec::new();

        for scc in tarjan_scc(&digraph) {
            if scc.len() > 1 {
                cycles.push(scc.iter().map(|&idx| digraph[idx].clone()).collect());
            } else if let [idx] = scc.as_slice() {
                if digraph.contains_edge(*idx, *idx) {
                    cycles.push(vec![digraph[*idx].clone()]);
                }
            }
        }

        cycles
    }

    /// Returns the vertices in an order where every edge points forward.
    ///
    /// Fails with [`GraphError::Cycle`] if the graph is cyclic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(["c", "b", "a"], [("a", "b"), ("b", "c")]).unwrap();
    /// assert_eq!(graph.topological_order().unwrap(), vec!["a", "b", "c"]);
    /// ```
    pub fn topological_order(&self) -> GraphResult<Vec<V>> {
        let (digraph, _) = self.to_petgraph();

        toposort(&digraph, None)
            .map(|order| order.into_iter().map(|idx| digraph[idx].clone()).collect())
            .map_err(|cycle| GraphError::Cycle(format!("{:?}", digraph[cycle.node_id()])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_petgraph_mirrors_edges() {
        let graph = DirectedGraph::from_edges(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c"), ("c", "c")],
        )
        .unwrap();
        let (digraph, indices) = graph.to_petgraph();

        assert_eq!(digraph.node_count(), 3);
        assert_eq!(digraph.edge_count(), 3);
        assert!(digraph.contains_edge(indices["a"], indices["b"]));
        assert!(!digraph.contains_edge(indices["b"], indices["a"]));
        assert!(digraph.contains_edge(indices["c"], indices["c"]));
    }

    #[test]
    fn test_acyclic_graph() {
        let graph = DirectedGraph::from_edges(
            ["a", "b", "c", "d"],
            [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        )
        .unwrap();

        assert!(!graph.has_cycles());
        assert!(graph.detect_cycles().is_empty());
    }

    #[test]
    fn test_detect_cycles() {
        let graph = DirectedGraph::from_edges(
            ["a", "b", "c", "d", "e"],
            [("a", "b"), ("b", "c"), ("c", "a"), ("a", "d"), ("e", "e")],
        )
        .unwrap();

        assert!(graph.has_cycles());

        let cycles = graph.detect_cycles();
        assert_eq!(cycles.len(), 2);

        let members: Vec<HashSet<&str>> = cycles
            .iter()
            .map(|c| c.iter().copied().collect())
            .collect();
        assert!(members.contains(&HashSet::from(["a", "b", "c"])));
        assert!(members.contains(&HashSet::from(["e"])));
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let graph = DirectedGraph::from_edges(
            [1, 2, 3, 4, 5],
            [(5, 3), (3, 1), (5, 4), (4, 1), (1, 2)],
        )
        .unwrap();

        let order = graph.topological_order().unwrap();
        assert_eq!(order.len(), 5);

        let position: HashMap<i32, usize> =
            order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for (from, to) in graph.edges() {
            assert!(position[from] < position[to]);
        }
    }

    #[test]
    fn test_topological_order_fails_on_cycle() {
        let graph = DirectedGraph::from_edges(["x", "y"], [("x", "y"), ("y", "x")]).unwrap();

        let err = graph.topological_order().unwrap_err();
        assert!(matches!(err, GraphError::Cycle(_)));
    }

    #[test]
    fn test_empty_graph_analysis() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();

        assert!(!graph.has_cycles());
        assert!(graph.detect_cycles().is_empty());
        assert!(graph.topological_order().unwrap().is_empty());
    }
}
