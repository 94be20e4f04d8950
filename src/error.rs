//! Errors signaled by graph operations.

use thiserror::Error;

/// Any failure of a graph operation.
///
/// Variants carry the vertices the failing operation referred to.
/// Bulk operations report the first offending item of the batch and leave the graph untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// The vertex is not in the graph.
    #[error("no such vertex: {0:?}")]
    NoSuchVertex(V),
    /// The edge from the first vertex to the second is not in the graph.
    #[error("no such edge: ({0:?}, {1:?})")]
    NoSuchEdge(V, V),
    /// Both endpoints of an edge to add are the same vertex.
    #[error("edge creates a loop on vertex {0:?}")]
    EdgeCreatesLoop(V),
}

pub type Result<T, V> = std::result::Result<T, GraphError<V>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_vertices() {
        assert_eq!(
            GraphError::NoSuchVertex(3).to_string(),
            "no such vertex: 3"
        );
        assert_eq!(
            GraphError::NoSuchEdge("a", "b").to_string(),
            r#"no such edge: ("a", "b")"#
        );
        assert_eq!(
            GraphError::EdgeCreatesLoop(7u8).to_string(),
            "edge creates a loop on vertex 7"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        fn fails() -> std::result::Result<(), Box<dyn std::error::Error>> {
            Err(GraphError::NoSuchVertex(1))?;
            Ok(())
        }
        assert!(fails().is_err());
    }
}
