//! Adjacency-list directed graph.
//!
//! Provides a generic directed graph keyed by vertex value, storing each
//! vertex's out-neighbors in insertion order with duplicate edges suppressed.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use log::debug;

/// Errors that can occur during graph operations.
///
/// Vertices are carried in their `Debug` rendering so the error type stays
/// independent of the vertex type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The vertex is already part of the graph.
    #[error("Vertex already exists: {0}")]
    DuplicateVertex(String),

    /// The vertex is not part of the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// The graph contains a cycle through the named vertex.
    #[error("Graph contains a cycle through vertex {0}")]
    Cycle(String),
}

impl GraphError {
    pub(crate) fn duplicate<V: fmt::Debug>(vertex: &V) -> Self {
        Self::DuplicateVertex(format!("{:?}", vertex))
    }

    pub(crate) fn unknown<V: fmt::Debug>(vertex: &V) -> Self {
        Self::UnknownVertex(format!("{:?}", vertex))
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// What [`DirectedGraph::add_vertex`] does when the vertex already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicateVertexPolicy {
    /// Fail with [`GraphError::DuplicateVertex`] and leave the graph untouched.
    #[default]
    Reject,
    /// Leave the existing vertex and its edges as they are.
    Ignore,
    /// Reset the vertex's outgoing edges. Edges into the vertex are kept.
    Replace,
}

impl DuplicateVertexPolicy {
    /// Returns a short label for the policy.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Ignore => "ignore",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for DuplicateVertexPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DuplicateVertexPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" | "error" => Ok(Self::Reject),
            "ignore" | "keep" => Ok(Self::Ignore),
            "replace" | "overwrite" => Ok(Self::Replace),
            _ => Err(format!(
                "Unknown duplicate vertex policy: '{}'. Valid policies: reject, ignore, replace",
                s
            )),
        }
    }
}

/// A directed graph stored as adjacency lists.
///
/// Every vertex owns an ordered list of out-neighbors. Edges only connect
/// vertices that were added beforehand, and adding an edge that already
/// exists is a no-op.
///
/// The graph has no internal locking. Mutation goes through `&mut self`, so
/// sharing it between threads requires wrapping it in a `Mutex` or similar.
///
/// # Example
///
/// ```rust
/// use adjgraph::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_vertex("a").unwrap();
/// graph.add_vertex("b").unwrap();
/// graph.add_edge(&"a", &"b").unwrap();
///
/// assert_eq!(graph.num_vertices(), 2);
/// assert_eq!(graph.num_edges(), 1);
/// assert!(graph.edge_exists(&"a", &"b").unwrap());
/// assert!(!graph.edge_exists(&"b", &"a").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Out-neighbors of each vertex, in insertion order
    adjacency: HashMap<V, Vec<V>>,
    /// Membership set of all vertices
    vertices: HashSet<V>,
    /// Behavior of `add_vertex` for an existing vertex
    policy: DuplicateVertexPolicy,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            vertices: HashSet::new(),
            policy: DuplicateVertexPolicy::default(),
        }
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates a new empty graph that rejects duplicate vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph: DirectedGraph<u32> = DirectedGraph::new();
    /// assert_eq!(graph.num_vertices(), 0);
    /// assert_eq!(graph.num_edges(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertices),
            vertices: HashSet::with_capacity(vertices),
            policy: DuplicateVertexPolicy::default(),
        }
    }

    /// Creates a new empty graph using the given duplicate vertex policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::{DirectedGraph, DuplicateVertexPolicy};
    ///
    /// let mut graph = DirectedGraph::with_policy(DuplicateVertexPolicy::Ignore);
    /// graph.add_vertex(1).unwrap();
    /// assert!(graph.add_vertex(1).is_ok());
    /// assert_eq!(graph.num_vertices(), 1);
    /// ```
    pub fn with_policy(policy: DuplicateVertexPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Builds a graph from a list of vertices and a list of edges.
    ///
    /// Vertices are added first, in order, then edges. The first failing
    /// operation aborts the build.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")]).unwrap();
    /// assert_eq!(graph.num_edges(), 2);
    /// ```
    pub fn from_edges<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }
        for (from, to) in edges {
            graph.add_edge(&from, &to)?;
        }
        Ok(graph)
    }

    /// Returns the duplicate vertex policy in effect.
    pub fn policy(&self) -> DuplicateVertexPolicy {
        self.policy
    }

    /// Adds a vertex with no outgoing edges.
    ///
    /// If the vertex already exists the graph's [`DuplicateVertexPolicy`]
    /// decides the outcome. Under the default `Reject` policy this fails
    /// with [`GraphError::DuplicateVertex`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::{DirectedGraph, GraphError};
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph.add_vertex("a").unwrap();
    /// assert!(matches!(graph.add_vertex("a"), Err(GraphError::DuplicateVertex(_))));
    /// ```
    pub fn add_vertex(&mut self, vertex: V) -> GraphResult<()> {
        if self.vertices.contains(&vertex) {
            return match self.policy {
                DuplicateVertexPolicy::Reject => Err(GraphError::duplicate(&vertex)),
                DuplicateVertexPolicy::Ignore => Ok(()),
                DuplicateVertexPolicy::Replace => {
                    debug!("Resetting outgoing edges of {:?}", vertex);
                    if let Some(neighbors) = self.adjacency.get_mut(&vertex) {
                        neighbors.clear();
                    }
                    Ok(())
                }
            };
        }

        debug!("Adding vertex {:?}", vertex);
        self.adjacency.insert(vertex.clone(), Vec::new());
        self.vertices.insert(vertex);
        Ok(())
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// Both vertices must already exist. Self-loops are allowed.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge was added, `Ok(false)` if it already existed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::{DirectedGraph, GraphError};
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph.add_vertex("a").unwrap();
    /// graph.add_vertex("b").unwrap();
    ///
    /// assert_eq!(graph.add_edge(&"a", &"b"), Ok(true));
    /// assert_eq!(graph.add_edge(&"a", &"b"), Ok(false));
    /// assert!(matches!(graph.add_edge(&"a", &"z"), Err(GraphError::UnknownVertex(_))));
    /// ```
    pub fn add_edge(&mut self, from: &V, to: &V) -> GraphResult<bool> {
        self.require(from)?;
        self.require(to)?;

        let neighbors = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown(from))?;

        if neighbors.contains(to) {
            return Ok(false);
        }

        debug!("Adding edge {:?} -> {:?}", from, to);
        neighbors.push(to.clone());
        Ok(true)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the total number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes every vertex and edge. The duplicate vertex policy is kept.
    pub fn clear(&mut self) {
        debug!("Clearing graph with {} vertices", self.vertices.len());
        self.adjacency.clear();
        self.vertices.clear();
    }

    /// Returns the set of all vertices.
    ///
    /// The set is borrowed from the graph, so it cannot be modified through
    /// the returned reference and the graph cannot change while it is held.
    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    /// Returns the out-neighbors of `vertex` in the order their edges were added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges([1, 2, 3], [(1, 3), (1, 2)]).unwrap();
    /// assert_eq!(graph.neighbors(&1).unwrap(), &[3, 2]);
    /// assert!(graph.neighbors(&4).is_err());
    /// ```
    pub fn neighbors(&self, vertex: &V) -> GraphResult<&[V]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown(vertex))
    }

    /// Checks if a vertex exists in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Checks whether the edge `from -> to` exists.
    ///
    /// Only the given direction is tested. Both vertices must exist.
    pub fn edge_exists(&self, from: &V, to: &V) -> GraphResult<bool> {
        self.require(from)?;
        self.require(to)?;
        Ok(self.neighbors(from)?.contains(to))
    }

    /// Returns the out-degree of `vertex`.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    /// Iterates over every edge as a `(source, target)` pair.
    ///
    /// Edges of one source come out in insertion order; the order of
    /// sources is unspecified.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from, to)))
    }

    fn require(&self, vertex: &V) -> GraphResult<()> {
        if self.vertices.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown(vertex))
        }
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + fmt::Display,
{
    /// Renders the same lines as `Display`, with vertices in ascending order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adjgraph::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(["b", "a"], [("a", "b"), ("b", "a")]).unwrap();
    /// assert_eq!(graph.to_sorted_string(), "a: [b]\nb: [a]\n");
    /// ```
    pub fn to_sorted_string(&self) -> String
    where
        V: Ord,
    {
        let mut vertices: Vec<&V> = self.vertices.iter().collect();
        vertices.sort();

        let mut out = String::new();
        for vertex in vertices {
            out.push_str(&self.adjacency_line(vertex));
        }
        out
    }

    /// Formats one `vertex: [n1, n2]` line, newline-terminated.
    fn adjacency_line(&self, vertex: &V) -> String {
        let neighbors: Vec<String> = self
            .adjacency
            .get(vertex)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(ToString::to_string)
            .collect();
        format!("{}: [{}]\n", vertex, neighbors.join(", "))
    }
}

/// Renders one line per vertex as `vertex: [n1, n2]`.
///
/// Vertices appear in the vertex set's iteration order.
impl<V> fmt::Display for DirectedGraph<V>
where
    V: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            f.write_str(&self.adjacency_line(vertex))?;
        }
        Ok(())
    }
}
