//! Simple directed and undirected graphs over arbitrary hashable vertices.
//!
//! Vertices are plain values (anything `Hash + Ord + Clone`).
//! Edges are pairs of vertices.
//! Graphs are *simple*: no self-loops, and at most one edge between two vertices
//! (per direction, for directed graphs).
//!
//! ```
//! use giraffe::graph::*;
//!
//! let mut g = UnGraph::from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
//! assert!(g.has_edge(&2, &1));
//! g.remove_vertex(&1).unwrap();
//! assert_eq!(g.order(), 3);
//! assert_eq!(g.size(), 1);
//! ```
//!
//! Besides mutation and structural queries, graphs form a partial order by
//! substructure inclusion, and can be combined by union, intersection and difference.
//! See [graph] for details.

pub mod error;
pub mod graph;
