use crate::graph::*;

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

/// How edges are recorded in an [AdjacencyStore].
///
/// This is the only difference between directed and undirected graphs.
pub trait LinkPolicy: DirectedOrNot {
    /// The matching petgraph edge type, for interop with [petgraph::graphmap::GraphMap].
    type EdgeType: petgraph::EdgeType;

    /// Records an edge between two vertices which are already in the store.
    fn link<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V);
    /// Forgets an edge. It is a no-op if the edge is absent.
    fn unlink<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V);
    /// Degree of a vertex, or `None` if the vertex is absent.
    fn degree<V: Vertex>(store: &AdjacencyStore<V>, v: &V) -> Option<usize>;
    /// Total number of edges.
    fn edge_count<V: Vertex>(store: &AdjacencyStore<V>) -> usize;
    /// Whether a link from `source` to `sink` is reported when edges are exported.
    ///
    /// It depends on the two vertices only,
    /// so equal edges of different graphs are reported alike.
    fn is_canonical<V: Vertex>(source: &V, sink: &V) -> bool;
}

/// Marker of directed graphs: edges are one-directional links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker of undirected graphs: edges are pairs of symmetric links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl DirectedOrNot for Directed {
    const DIRECTED_OR_NOT: bool = true;
}

impl DirectedOrNot for Undirected {
    const DIRECTED_OR_NOT: bool = false;
}

impl LinkPolicy for Directed {
    type EdgeType = petgraph::Directed;

    fn link<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V) {
        store.link_raw(source, sink);
    }

    fn unlink<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V) {
        store.unlink_raw(source, sink);
    }

    fn degree<V: Vertex>(store: &AdjacencyStore<V>, v: &V) -> Option<usize> {
        match (store.successors(v), store.predecessors(v)) {
            (Some(outs), Some(ins)) => Some(outs.len() + ins.len()),
            _ => None,
        }
    }

    fn edge_count<V: Vertex>(store: &AdjacencyStore<V>) -> usize {
        store.link_count()
    }

    fn is_canonical<V: Vertex>(_: &V, _: &V) -> bool {
        true
    }
}

impl LinkPolicy for Undirected {
    type EdgeType = petgraph::Undirected;

    fn link<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V) {
        store.link_raw(source, sink);
        store.link_raw(sink, source);
    }

    fn unlink<V: Vertex>(store: &mut AdjacencyStore<V>, source: &V, sink: &V) {
        store.unlink_raw(source, sink);
        store.unlink_raw(sink, source);
    }

    fn degree<V: Vertex>(store: &AdjacencyStore<V>, v: &V) -> Option<usize> {
        store.successors(v).map(|x| x.len())
    }

    fn edge_count<V: Vertex>(store: &AdjacencyStore<V>) -> usize {
        debug_assert_eq!(store.link_count() % 2, 0);
        store.link_count() / 2
    }

    fn is_canonical<V: Vertex>(source: &V, sink: &V) -> bool {
        source < sink
    }
}
