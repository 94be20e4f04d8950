use crate::error::{GraphError, Result};
use crate::graph::*;
use std::borrow::Borrow;
use std::collections::btree_map;

/// A simple graph over vertices of type `V`.
///
/// * `V`: vertices, any `Hash + Ord + Clone` value.
/// * `D`: [Undirected] (the default) or [Directed].
///
/// Graphs are simple: there is never a loop from a vertex to itself,
/// and an edge is either present or not.
/// Each graph owns its vertices and adjacency exclusively;
/// clones and every graph produced by set algebra share nothing with their sources.
///
/// Iterations over vertices and edges follow insertion order of vertices.
pub struct Graph<V, D = Undirected> {
    pub(crate) store: AdjacencyStore<V>,
    name: String,
    _policy: std::marker::PhantomData<D>,
}

/// An undirected graph.
pub type UnGraph<V> = Graph<V, Undirected>;

/// A directed graph.
pub type DiGraph<V> = Graph<V, Directed>;

/// Lazy iterator over vertices of a graph, in insertion order.
pub type Vertices<'a, V> = btree_map::Values<'a, VertexId, V>;

impl<V, D> Clone for Graph<V, D>
where
    V: Vertex,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            name: self.name.clone(),
            _policy: std::marker::PhantomData,
        }
    }
}

impl<V, D> Default for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            store: AdjacencyStore::with_capacity(vertices),
            name: String::new(),
            _policy: std::marker::PhantomData,
        }
    }

    /// Sets the display name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Creates a graph with vertices and no edges.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut res = Self::new();
        res.add_vertices(vertices);
        res
    }

    /// Creates a graph with edges. Their endpoints become vertices.
    pub fn from_edges<E>(edges: E) -> Result<Self, V>
    where
        E: IntoIterator<Item = (V, V)>,
    {
        Self::from_parts(std::iter::empty(), edges)
    }

    /// Creates a graph with vertices and edges.
    ///
    /// Endpoints of edges which are not among `vertices` are added as well.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Result<Self, V>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut res = Self::from_vertices(vertices);
        res.add_edges(edges)?;
        Ok(res)
    }

    /// Creates a graph from a mapping of vertices to their neighbors.
    ///
    /// Vertices are all keys and all values.
    /// Edges are all `(key, value)` pairs.
    /// For undirected graphs, listing both `(u, v)` and `(v, u)` is harmless.
    ///
    /// ```
    /// use giraffe::graph::*;
    ///
    /// let g = DiGraph::from_adjacency_map([(1, vec![2, 3]), (2, vec![4]), (4, vec![2, 5])]).unwrap();
    /// assert_eq!(g.order(), 5);
    /// assert!(g.has_edge(&4, &2));
    /// assert!(!g.has_edge(&3, &1));
    /// ```
    pub fn from_adjacency_map<M, N>(map: M) -> Result<Self, V>
    where
        M: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut vertices = vec![];
        let mut edges = vec![];
        for (u, neighbors) in map {
            for v in neighbors {
                edges.push((u.clone(), v));
            }
            vertices.push(u);
        }
        Self::from_parts(vertices, edges)
    }

    /// Creates a graph equal to, but independent of, `other`.
    pub fn from_graph(other: &Self) -> Self {
        other.clone()
    }

    /// Same as [Graph::from_graph].
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.store.vertex_count()
    }

    /// Same as [Graph::order].
    pub fn len(&self) -> usize {
        self.order()
    }

    /// Whether there is no vertex at all.
    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    /// Number of edges. An undirected edge counts once.
    pub fn size(&self) -> usize {
        D::edge_count(&self.store)
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.store.contains_vertex(v)
    }

    /// Same as [Graph::has_vertex].
    pub fn contains(&self, v: &V) -> bool {
        self.has_vertex(v)
    }

    /// Whether the edge from `source` to `sink` is present.
    /// For undirected graphs, the order of endpoints does not matter.
    pub fn has_edge(&self, source: &V, sink: &V) -> bool {
        self.store.has_link(source, sink)
    }

    /// Number of edges incident to a vertex.
    /// For directed graphs, this is in-degree plus out-degree.
    pub fn degree(&self, v: &V) -> Result<usize, V> {
        D::degree(&self.store, v).ok_or_else(|| GraphError::NoSuchVertex(v.clone()))
    }

    /// Neighbors (out-neighbors if directed) of a vertex.
    pub fn neighbors_of(&self, v: &V) -> Result<&VertexSet<V>, V> {
        self.store.neighbors_of(v)
    }

    /// Neighbors of each of the given vertices.
    ///
    /// Fails with [GraphError::NoSuchVertex] if any of them is absent.
    pub fn neighbors<I>(&self, vertices: I) -> Result<AdjacencyMap<V>, V>
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        let mut res = AdjacencyMap::default();
        for v in vertices {
            let v: &V = v.borrow();
            let neighbors = self.neighbors_of(v)?;
            res.insert(v.clone(), neighbors.clone());
        }
        Ok(res)
    }

    /// Neighbors of every vertex.
    ///
    /// The result is a copy; changing it does not affect the graph.
    pub fn adjacency_map(&self) -> AdjacencyMap<V> {
        self.iter()
            .map(|v| (v.clone(), self.store.successors(v).cloned().unwrap_or_default()))
            .collect()
    }

    /// A copy of the vertex set.
    pub fn vertices(&self) -> VertexSet<V> {
        self.iter().cloned().collect()
    }

    /// A copy of the edge set.
    ///
    /// An undirected edge appears once, with the smaller endpoint as the source.
    /// So the edge sets of two undirected graphs are comparable.
    pub fn edges(&self) -> EdgeSet<V> {
        self.iter_edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect()
    }

    /// Iterates over vertices in insertion order.
    pub fn iter(&self) -> Vertices<'_, V> {
        self.store.iter_vertices()
    }

    /// Iterates over edges, in the same orientation as [Graph::edges].
    pub fn iter_edges(&self) -> Edges<'_, V, D> {
        self.store.iter_links::<D>()
    }
}

impl<V> Graph<V, Directed>
where
    V: Vertex,
{
    /// Number of edges ending at a vertex.
    pub fn in_degree(&self, v: &V) -> Result<usize, V> {
        self.predecessors_of(v).map(|x| x.len())
    }

    /// Number of edges starting from a vertex.
    pub fn out_degree(&self, v: &V) -> Result<usize, V> {
        self.neighbors_of(v).map(|x| x.len())
    }

    /// Vertices with an edge to `v`.
    pub fn predecessors_of(&self, v: &V) -> Result<&VertexSet<V>, V> {
        self.store
            .predecessors(v)
            .ok_or_else(|| GraphError::NoSuchVertex(v.clone()))
    }
}

/// Neighbors of a vertex.
///
/// # Panics
///
/// Panics if the vertex is absent. Use [Graph::neighbors_of] to get an error instead.
impl<V, D> std::ops::Index<&V> for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Output = VertexSet<V>;

    fn index(&self, v: &V) -> &Self::Output {
        match self.store.successors(v) {
            Some(x) => x,
            None => panic!("no such vertex; Graph::neighbors_of reports which one"),
        }
    }
}

impl<V, D> std::fmt::Display for Graph<V, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<'a, V, D> IntoIterator for &'a Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Item = &'a V;
    type IntoIter = Vertices<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, D> FromIterator<V> for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl<V, D> Extend<V> for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.add_vertices(iter)
    }
}
