use std::hash::Hash;

/// Values usable as vertices.
///
/// Anything with consistent `Hash`, `Eq` and `Ord` qualifies.
/// `Ord` only fixes which endpoint of an undirected edge is reported first.
/// Vertices are cloned into the graph, so cheap clones are preferred.
pub trait Vertex: Hash + Ord + Clone {}

impl<T: Hash + Ord + Clone> Vertex for T {}

/// Stamp given to a vertex when it enters a graph.
///
/// Stamps increase with insertion, so they order vertices by insertion.
/// They are private bookkeeping of one graph and mean nothing across graphs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Debug, Clone)]
pub struct VertexIdFactory(usize);

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}
