//! Conversions between [Graph] and petgraph's [GraphMap].
//!
//! [GraphMap] keys nodes by value too, but requires them to be `Copy + Ord`.
//! Edge weights are dropped on import and are `()` on export.

use crate::error::Result;
use crate::graph::*;
use petgraph::graphmap::{GraphMap, NodeTrait};

impl<V, D> Graph<V, D>
where
    V: Vertex + NodeTrait,
    D: LinkPolicy,
{
    /// Exports vertices and edges into a new [GraphMap].
    pub fn to_graph_map(&self) -> GraphMap<V, (), D::EdgeType> {
        let mut res = GraphMap::with_capacity(self.order(), self.size());
        for v in self.iter() {
            res.add_node(*v);
        }
        for (u, v) in self.iter_edges() {
            res.add_edge(*u, *v, ());
        }
        res
    }

    /// Imports vertices and edges from a [GraphMap].
    ///
    /// Fails with [crate::error::GraphError::EdgeCreatesLoop] if it has a self-loop.
    pub fn from_graph_map<E>(other: &GraphMap<V, E, D::EdgeType>) -> Result<Self, V> {
        Self::from_parts(other.nodes(), other.all_edges().map(|(u, v, _)| (u, v)))
    }
}
