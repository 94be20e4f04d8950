//! Vertex and edge mutation, single and batched.
//!
//! Batches are all-or-nothing: every item is validated in a pure pass
//! before the graph is touched, so a failing batch leaves the graph unchanged.

use crate::error::{GraphError, Result};
use crate::graph::*;
use std::borrow::Borrow;

impl<V, D> Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        self.store.add_vertex_raw(v)
    }

    /// Adds vertices. Present ones are skipped.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for v in vertices {
            self.store.add_vertex_raw(v);
        }
    }

    /// Removes a vertex and all edges incident to it.
    pub fn remove_vertex(&mut self, v: &V) -> Result<(), V> {
        self.store.remove_vertex_raw(v)
    }

    /// Removes vertices and all edges incident to them.
    ///
    /// Fails with [GraphError::NoSuchVertex] on the first absent vertex,
    /// in which case nothing is removed.
    /// Repeated vertices in the batch are removed once.
    pub fn remove_vertices<I>(&mut self, vertices: I) -> Result<(), V>
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        let batch: Vec<I::Item> = vertices.into_iter().collect();
        for (idx, v) in batch.iter().enumerate() {
            let v: &V = v.borrow();
            if !self.store.contains_vertex(v) {
                log::debug!(
                    "remove_vertices rejected: item {} of {} is not a vertex",
                    idx,
                    batch.len()
                );
                return Err(GraphError::NoSuchVertex(v.clone()));
            }
        }
        for v in batch.iter() {
            let v: &V = v.borrow();
            if self.store.contains_vertex(v) {
                self.store.remove_vertex_raw(v)?;
            }
        }
        Ok(())
    }

    /// Adds an edge, adding its endpoints as vertices if they are absent.
    ///
    /// Adding a present edge changes nothing.
    /// A loop is rejected before anything is added.
    pub fn add_edge(&mut self, source: V, sink: V) -> Result<(), V> {
        if source == sink {
            return Err(GraphError::EdgeCreatesLoop(source));
        }
        self.link(source, sink);
        Ok(())
    }

    /// Adds edges as [Graph::add_edge] does.
    ///
    /// If any pair is a loop, fails with [GraphError::EdgeCreatesLoop] without adding anything.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<(), V>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let batch: Vec<(V, V)> = edges.into_iter().collect();
        if let Some(idx) = batch.iter().position(|(u, v)| u == v) {
            log::debug!(
                "add_edges rejected: item {} of {} is a loop",
                idx,
                batch.len()
            );
            return Err(GraphError::EdgeCreatesLoop(batch[idx].0.clone()));
        }
        for (u, v) in batch {
            self.link(u, v);
        }
        Ok(())
    }

    /// Adds edges between consecutive vertices of a sequence.
    ///
    /// `[v0, v1, v2]` adds `(v0, v1)` and `(v1, v2)`.
    /// A sequence with two equal neighbors is rejected as a whole.
    /// A sequence of fewer than two vertices adds nothing, not even its vertex.
    pub fn add_path<I>(&mut self, path: I) -> Result<(), V>
    where
        I: IntoIterator<Item = V>,
    {
        let path: Vec<V> = path.into_iter().collect();
        if let Some(idx) = path.windows(2).position(|w| w[0] == w[1]) {
            log::debug!(
                "add_path rejected: step {} of {} is a loop",
                idx,
                path.len().saturating_sub(1)
            );
            return Err(GraphError::EdgeCreatesLoop(path[idx].clone()));
        }
        for w in path.windows(2) {
            self.link(w[0].clone(), w[1].clone());
        }
        Ok(())
    }

    /// Removes an edge. Its endpoints stay.
    pub fn remove_edge(&mut self, source: &V, sink: &V) -> Result<(), V> {
        if !self.has_edge(source, sink) {
            return Err(GraphError::NoSuchEdge(source.clone(), sink.clone()));
        }
        D::unlink(&mut self.store, source, sink);
        Ok(())
    }

    /// Removes edges.
    ///
    /// Fails with [GraphError::NoSuchEdge] on the first absent edge,
    /// in which case nothing is removed.
    pub fn remove_edges<I, E>(&mut self, edges: I) -> Result<(), V>
    where
        I: IntoIterator<Item = E>,
        E: Borrow<(V, V)>,
    {
        let batch: Vec<E> = edges.into_iter().collect();
        for (idx, e) in batch.iter().enumerate() {
            let (u, v): &(V, V) = e.borrow();
            if !self.has_edge(u, v) {
                log::debug!(
                    "remove_edges rejected: item {} of {} is not an edge",
                    idx,
                    batch.len()
                );
                return Err(GraphError::NoSuchEdge(u.clone(), v.clone()));
            }
        }
        for e in batch.iter() {
            let (u, v): &(V, V) = e.borrow();
            D::unlink(&mut self.store, u, v);
        }
        Ok(())
    }

    fn link(&mut self, source: V, sink: V) {
        debug_assert!(source != sink);
        self.store.add_vertex_raw(source.clone());
        self.store.add_vertex_raw(sink.clone());
        D::link(&mut self.store, &source, &sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_edges() -> UnGraph<i32> {
        UnGraph::from_parts(0..6, [(0, 1), (1, 2), (2, 3), (3, 4), (1, 4)]).unwrap()
    }

    fn edge_set<const N: usize>(edges: [(i32, i32); N]) -> EdgeSet<i32> {
        edges.into_iter().collect()
    }

    #[test]
    fn add_vertices_skips_present() {
        let mut g = UnGraph::from_vertices(["o", "p"]);
        g.add_vertices(["o", "p", "q"]);
        assert_eq!(g.order(), 3);
        assert!(g.contains(&"o"));
        assert!(g.contains(&"q"));
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut g = UnGraph::new();
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.vertices(), [0, 1].into_iter().collect::<VertexSet<_>>());
        assert!(g.has_edge(&0, &1));
        assert!(g.has_edge(&1, &0));
        assert_eq!(g.size(), 1);
        g.add_edge(1, 0).unwrap();
        assert_eq!(g.size(), 1);
        assert_eq!(g.edges(), edge_set([(0, 1)]));
    }

    #[test]
    fn add_edge_rejects_loop() {
        let mut g = UnGraph::from_vertices([1]);
        assert_eq!(g.add_edge(1, 1), Err(GraphError::EdgeCreatesLoop(1)));
        assert_eq!(g.add_edge(2, 2), Err(GraphError::EdgeCreatesLoop(2)));
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);

        let mut dg = DiGraph::new();
        assert_eq!(dg.add_edge('a', 'a'), Err(GraphError::EdgeCreatesLoop('a')));
        assert!(dg.is_empty());
    }

    #[test]
    fn add_edges_is_all_or_nothing() {
        let mut g = five_edges();
        g.add_edges([(3, 1), (5, 3), (5, 4), (4, 2)]).unwrap();
        for (u, v) in [(3, 1), (5, 3), (5, 4), (4, 2)] {
            assert!(g.has_edge(&u, &v));
            assert!(g.has_edge(&v, &u));
        }

        let mut g = five_edges();
        assert_eq!(
            g.add_edges([(7, 8), (9, 9)]),
            Err(GraphError::EdgeCreatesLoop(9))
        );
        assert_eq!(g, five_edges());
        assert!(!g.contains(&7));
    }

    #[test]
    fn add_path() {
        let mut g = UnGraph::from_parts(0..6, [(1, 4)]).unwrap();
        g.add_path(0..6).unwrap();
        assert_eq!(
            g.edges(),
            edge_set([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (1, 4)])
        );

        let mut g = DiGraph::new();
        g.add_path([3, 2, 1]).unwrap();
        assert!(g.has_edge(&3, &2));
        assert!(!g.has_edge(&2, &3));

        let mut g = DiGraph::new();
        g.add_path([7]).unwrap();
        g.add_path([]).unwrap();
        assert!(g.is_empty());
        g.add_vertex(0);
        assert_eq!(g.add_path([1, 2, 2, 3]), Err(GraphError::EdgeCreatesLoop(2)));
        assert_eq!(g.order(), 1);
    }

    #[test]
    fn remove_vertex() {
        let mut g = five_edges();
        g.remove_vertex(&5).unwrap();
        assert_eq!(g.order(), 5);
        assert_eq!(g.edges(), five_edges().edges());

        g.remove_vertex(&1).unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.edges(), edge_set([(2, 3), (3, 4)]));

        assert_eq!(g.remove_vertex(&10), Err(GraphError::NoSuchVertex(10)));
    }

    #[test]
    fn remove_vertices() {
        let mut g = five_edges();
        g.remove_vertices([2, 3]).unwrap();
        assert_eq!(g.edges(), edge_set([(0, 1), (1, 4)]));

        let mut g = five_edges();
        g.remove_vertices(&[2, 2]).unwrap();
        assert_eq!(g.order(), 5);
    }

    #[test]
    fn remove_vertices_is_atomic() {
        let mut g = five_edges();
        assert_eq!(
            g.remove_vertices([8, 10]),
            Err(GraphError::NoSuchVertex(8))
        );
        assert_eq!(
            g.remove_vertices([2, 10]),
            Err(GraphError::NoSuchVertex(10))
        );
        assert!(g.contains(&2));
        assert_eq!(g.edges(), five_edges().edges());
    }

    #[test]
    fn remove_edge() {
        let mut g = five_edges();
        g.remove_edge(&2, &3).unwrap();
        let mut expected = five_edges().edges();
        expected.remove(&(2, 3));
        assert_eq!(g.edges(), expected);
        assert_eq!(g.size(), 4);
        assert!(g.contains(&2));
        assert!(g.contains(&3));

        g.remove_edge(&4, &1).unwrap();
        assert!(!g.has_edge(&1, &4));

        assert_eq!(g.remove_edge(&1, &5), Err(GraphError::NoSuchEdge(1, 5)));
    }

    #[test]
    fn remove_directed_edge_keeps_reverse() {
        let mut g = DiGraph::from_edges([(1, 2), (2, 1)]).unwrap();
        assert_eq!(g.remove_edge(&1, &3), Err(GraphError::NoSuchEdge(1, 3)));
        g.remove_edge(&1, &2).unwrap();
        assert!(g.has_edge(&2, &1));
        assert_eq!(g.size(), 1);
    }

    #[test]
    fn remove_edges() {
        let mut g = five_edges();
        g.remove_edges([(2, 3), (3, 4)]).unwrap();
        assert_eq!(g.edges(), edge_set([(0, 1), (1, 2), (1, 4)]));
    }

    #[test]
    fn remove_edges_is_atomic() {
        let mut g = five_edges();
        assert_eq!(
            g.remove_edges([(0, 1), (1, 3)]),
            Err(GraphError::NoSuchEdge(1, 3))
        );
        assert_eq!(
            g.remove_edges(&[(0, 1), (2, 10)]),
            Err(GraphError::NoSuchEdge(2, 10))
        );
        assert_eq!(g.edges(), five_edges().edges());
    }
}
