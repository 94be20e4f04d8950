//! Directed and undirected simple graphs, and set algebra over them.
//!
//! # Vertices and edges
//!
//! Vertices are values of any type which is `Hash + Ord + Clone`.
//! There is no separate vertex handle: a vertex is identified by its value.
//! Edges are pairs of vertices.
//! Adding an edge adds its endpoints as vertices if they are absent.
//! Removing or looking up things never adds anything.
//!
//! Graphs are simple.
//! An edge from a vertex to itself is rejected with [GraphError::EdgeCreatesLoop].
//! Adding a present edge changes nothing.
//!
//! # Directed and undirected graphs
//!
//! [Graph] is generic over a [LinkPolicy], either [Undirected] or [Directed].
//! [UnGraph] and [DiGraph] are shorthands.
//! Both record edges in an [AdjacencyStore]: a map from each vertex to its neighbors.
//! An undirected edge is two symmetric links, and is reported once by [Graph::edges],
//! with the smaller endpoint as source.
//!
//! # Batches
//!
//! [Graph::remove_vertices], [Graph::remove_edges], [Graph::add_edges] and [Graph::add_path]
//! validate the whole batch before changing anything.
//! If they fail, the graph is left as it was.
//!
//! # Set algebra and order
//!
//! [Graph::union], [Graph::intersection], [Graph::difference] and [Graph::subgraph_on]
//! build new graphs and leave their operands alone.
//! Graphs are partially ordered by inclusion of vertices and edges:
//! `a <= b` iff `a` is a subgraph of `b`.
//!
//! [GraphError::EdgeCreatesLoop]: crate::error::GraphError::EdgeCreatesLoop

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod adjacency;
pub use self::adjacency::*;
mod simple_graph;
pub use self::simple_graph::*;
mod bulk;
mod algebra;
mod graph_debug;
pub use self::graph_debug::*;
mod graph_map;

#[cfg(test)]
pub use self::tests::*;
