use super::{Adjacent, LinkPolicy, Vertex, VertexId};
use ahash::RandomState;
use std::collections::{btree_map, hash_set, HashMap, HashSet};

/// A set of vertices.
pub type VertexSet<V> = HashSet<V, RandomState>;

/// A set of edges, each as a `(source, sink)` pair.
///
/// In undirected graphs each edge appears once,
/// with the smaller endpoint as the source.
pub type EdgeSet<V> = HashSet<(V, V), RandomState>;

/// Mapping from vertices to their neighbors (out-neighbors if directed).
pub type AdjacencyMap<V> = HashMap<V, VertexSet<V>, RandomState>;

/// Lazy iterator over edges of a graph, grouped by source in insertion order of sources.
pub struct Edges<'a, V, D> {
    order: btree_map::Values<'a, VertexId, V>,
    entries: &'a HashMap<V, Adjacent<V>, RandomState>,
    current: Option<(&'a V, hash_set::Iter<'a, V>)>,
    _policy: std::marker::PhantomData<D>,
}

impl<'a, V, D> Edges<'a, V, D> {
    pub(crate) fn new(
        order: btree_map::Values<'a, VertexId, V>,
        entries: &'a HashMap<V, Adjacent<V>, RandomState>,
    ) -> Self {
        Self {
            order,
            entries,
            current: None,
            _policy: std::marker::PhantomData,
        }
    }
}

impl<'a, V, D> Iterator for Edges<'a, V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, sinks)) = self.current.as_mut() {
                if let Some(sink) = sinks.find(|sink| D::is_canonical(*source, *sink)) {
                    return Some((*source, sink));
                }
            }
            let v = self.order.next()?;
            self.current = Some((v, self.entries[v].successors.iter()));
        }
    }
}
