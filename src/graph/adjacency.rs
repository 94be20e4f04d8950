use crate::error::{GraphError, Result};
use crate::graph::*;
use ahash::RandomState;
use std::collections::{btree_map, BTreeMap, HashMap};

/// Per-vertex neighbor bookkeeping shared by directed and undirected graphs.
///
/// A link is one-directional: `link_raw(u, v)` puts `v` into successors of `u`
/// and `u` into predecessors of `v`.
/// Undirected graphs record every edge as two opposite links.
///
/// Operations here are primitive and non-atomic.
/// They never create vertices implicitly and never check for loops.
///
/// |                      | Complexity                                                   |
/// | -------------------- | ------------------------------------------------------------ |
/// | `add_vertex_raw`     | amortized $O(1)$                                             |
/// | `remove_vertex_raw`  | $O(\log \|V\| + d)$, where $d$ is the number of links at the vertex |
/// | `link_raw`           | $O(1)$                                                       |
/// | `unlink_raw`         | $O(1)$                                                       |
/// | `contains_vertex`    | $O(1)$                                                       |
/// | `iter_vertices`      | amortized $O(1)$ per step, in insertion order                |
#[derive(Clone)]
pub struct AdjacencyStore<V> {
    vid_factory: VertexIdFactory,
    order: BTreeMap<VertexId, V>,
    entries: HashMap<V, Adjacent<V>, RandomState>,
    links: usize,
}

#[derive(Clone)]
pub(crate) struct Adjacent<V> {
    pub(crate) id: VertexId,
    pub(crate) successors: VertexSet<V>,
    pub(crate) predecessors: VertexSet<V>,
}

impl<V> Default for AdjacencyStore<V>
where
    V: Vertex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AdjacencyStore<V>
where
    V: Vertex,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            order: BTreeMap::new(),
            entries: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
            links: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of one-directional links.
    pub fn link_count(&self) -> usize {
        self.links
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.entries.contains_key(v)
    }

    /// Successors of a vertex, i.e., its neighbor set.
    pub fn neighbors_of(&self, v: &V) -> Result<&VertexSet<V>, V> {
        self.successors(v)
            .ok_or_else(|| GraphError::NoSuchVertex(v.clone()))
    }

    pub fn successors(&self, v: &V) -> Option<&VertexSet<V>> {
        self.entries.get(v).map(|x| &x.successors)
    }

    pub fn predecessors(&self, v: &V) -> Option<&VertexSet<V>> {
        self.entries.get(v).map(|x| &x.predecessors)
    }

    /// When the vertex entered the store.
    pub fn stamp(&self, v: &V) -> Option<VertexId> {
        self.entries.get(v).map(|x| x.id)
    }

    pub fn has_link(&self, source: &V, sink: &V) -> bool {
        self.entries
            .get(source)
            .map_or(false, |x| x.successors.contains(sink))
    }

    /// Adds a vertex without neighbors.
    /// Returns `false`, without touching anything, if it is already present.
    pub fn add_vertex_raw(&mut self, v: V) -> bool {
        if self.entries.contains_key(&v) {
            return false;
        }
        let id = self.vid_factory.one_more();
        self.order.insert(id, v.clone());
        self.entries.insert(
            v,
            Adjacent {
                id,
                successors: VertexSet::default(),
                predecessors: VertexSet::default(),
            },
        );
        true
    }

    /// Removes a vertex together with every link from or to it.
    pub fn remove_vertex_raw(&mut self, v: &V) -> Result<(), V> {
        let entry = self
            .entries
            .remove(v)
            .ok_or_else(|| GraphError::NoSuchVertex(v.clone()))?;
        self.order.remove(&entry.id);
        for w in entry.successors.iter() {
            if let Some(x) = self.entries.get_mut(w) {
                x.predecessors.remove(v);
            }
        }
        for w in entry.predecessors.iter() {
            if let Some(x) = self.entries.get_mut(w) {
                x.successors.remove(v);
            }
        }
        self.links -= entry.successors.len() + entry.predecessors.len();
        log::trace!(
            "detached a vertex from {} successors and {} predecessors",
            entry.successors.len(),
            entry.predecessors.len()
        );
        Ok(())
    }

    /// Links `source` to `sink`. Both must be present.
    /// Returns `false` if the link already exists.
    pub fn link_raw(&mut self, source: &V, sink: &V) -> bool {
        debug_assert!(self.entries.contains_key(source));
        debug_assert!(self.entries.contains_key(sink));
        let fresh = match self.entries.get_mut(source) {
            Some(x) => x.successors.insert(sink.clone()),
            None => false,
        };
        if fresh {
            if let Some(x) = self.entries.get_mut(sink) {
                x.predecessors.insert(source.clone());
            }
            self.links += 1;
        }
        fresh
    }

    /// Unlinks `source` from `sink`.
    /// Returns `false`, without touching anything, if there is no such link.
    pub fn unlink_raw(&mut self, source: &V, sink: &V) -> bool {
        let found = match self.entries.get_mut(source) {
            Some(x) => x.successors.remove(sink),
            None => false,
        };
        if found {
            if let Some(x) = self.entries.get_mut(sink) {
                x.predecessors.remove(source);
            }
            self.links -= 1;
        }
        found
    }

    /// Iterates over vertices in insertion order.
    pub fn iter_vertices(&self) -> btree_map::Values<'_, VertexId, V> {
        self.order.values()
    }

    /// Iterates over links which `D` reports as edges.
    pub fn iter_links<D>(&self) -> Edges<'_, V, D>
    where
        D: LinkPolicy,
    {
        Edges::new(self.order.values(), &self.entries)
    }
}
