//! Set algebra over graphs and the partial order by substructure inclusion.
//!
//! Every operation builds a new graph; operands are never modified.
//! Results are unnamed.

use crate::graph::*;
use std::borrow::Borrow;
use std::cmp::Ordering;

impl<V, D> Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    /// A graph with all vertices and all edges of `self` and `others`.
    ///
    /// ```
    /// use giraffe::graph::*;
    ///
    /// let g = UnGraph::from_edges([(1, 3), (2, 3)]).unwrap();
    /// let h = UnGraph::from_edges([(2, 4), (1, 4)]).unwrap();
    /// let u = g.union([&h]);
    /// assert!(g <= u && h <= u);
    /// assert_eq!(u.size(), 4);
    /// ```
    pub fn union<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut res = self.clone();
        res.set_name("");
        let mut operands = 1;
        for g in others {
            operands += 1;
            res.add_vertices(g.iter().cloned());
            for (u, v) in g.iter_edges() {
                D::link(&mut res.store, u, v);
            }
        }
        log::trace!(
            "union of {} graphs: order {}, size {}",
            operands,
            res.order(),
            res.size()
        );
        res
    }

    /// A graph with vertices and edges common to `self` and all `others`.
    pub fn intersection<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        let mut res = Self::new();
        for v in self.iter() {
            if others.iter().all(|g| g.has_vertex(v)) {
                res.store.add_vertex_raw(v.clone());
            }
        }
        for (u, v) in self.iter_edges() {
            if res.has_vertex(u) && res.has_vertex(v) && others.iter().all(|g| g.has_edge(u, v)) {
                D::link(&mut res.store, u, v);
            }
        }
        log::trace!(
            "intersection of {} graphs: order {}, size {}",
            others.len() + 1,
            res.order(),
            res.size()
        );
        res
    }

    /// `self` without the vertices in any of `removed` and their incident edges.
    ///
    /// Each item of `removed` is a collection of vertices, or another graph.
    ///
    /// ```
    /// use giraffe::graph::*;
    ///
    /// let g = UnGraph::from_edges([(1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]).unwrap();
    /// let d = g.difference([[2], [4]]);
    /// assert_eq!(d, g.difference([vec![2, 4]]));
    /// assert_eq!(d.order(), 2);
    /// assert!(d.has_edge(&1, &3));
    /// ```
    pub fn difference<I, C>(&self, removed: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Borrow<V>,
    {
        let mut gone = VertexSet::default();
        for c in removed {
            for v in c {
                gone.insert(v.borrow().clone());
            }
        }
        let res = self.induce(self.iter().filter(|v| !gone.contains(*v)).cloned());
        log::trace!(
            "difference removing {} vertices: order {}, size {}",
            gone.len(),
            res.order(),
            res.size()
        );
        res
    }

    /// The subgraph induced by some vertices.
    ///
    /// Its vertices are exactly the given ones, present in `self` or not.
    /// Its edges are those edges of `self` whose endpoints are both given.
    pub fn subgraph_on<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<V>,
    {
        self.induce(vertices.into_iter().map(|v| v.borrow().clone()))
    }

    /// Whether all vertices and all edges of `self` are in `other`.
    pub fn is_subgraph_of(&self, other: &Self) -> bool {
        self.order() <= other.order()
            && self.size() <= other.size()
            && self.iter().all(|v| other.has_vertex(v))
            && self.iter_edges().all(|(u, v)| other.has_edge(u, v))
    }

    fn induce<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut res = Self::from_vertices(vertices);
        for (u, v) in self.iter_edges() {
            if res.has_vertex(u) && res.has_vertex(v) {
                D::link(&mut res.store, u, v);
            }
        }
        res
    }
}

/// Graphs are equal if they have the same vertices and the same edges.
/// Names are ignored.
impl<V, D> PartialEq for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order() && self.size() == other.size() && self.is_subgraph_of(other)
    }
}

impl<V, D> Eq for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
}

/// Partial order by substructure inclusion.
///
/// `a <= b` iff [Graph::is_subgraph_of]. Graphs where neither includes the other are incomparable.
impl<V, D> PartialOrd for Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subgraph_of(other), other.is_subgraph_of(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<'a, 'b, V, D> std::ops::BitOr<&'b Graph<V, D>> for &'a Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Output = Graph<V, D>;

    fn bitor(self, rhs: &'b Graph<V, D>) -> Self::Output {
        self.union([rhs])
    }
}

impl<'a, 'b, V, D> std::ops::BitAnd<&'b Graph<V, D>> for &'a Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Output = Graph<V, D>;

    fn bitand(self, rhs: &'b Graph<V, D>) -> Self::Output {
        self.intersection([rhs])
    }
}

impl<'a, 'b, V, D> std::ops::Sub<&'b Graph<V, D>> for &'a Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Output = Graph<V, D>;

    fn sub(self, rhs: &'b Graph<V, D>) -> Self::Output {
        self.difference([rhs])
    }
}

impl<'a, 'b, V, D> std::ops::Sub<&'b [V]> for &'a Graph<V, D>
where
    V: Vertex,
    D: LinkPolicy,
{
    type Output = Graph<V, D>;

    fn sub(self, rhs: &'b [V]) -> Self::Output {
        self.difference([rhs])
    }
}
