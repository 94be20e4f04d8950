use crate::graph::*;

/// Lists every vertex followed by its neighbors, one per line.
///
/// ```plain
/// "a"
///   -- "b"
/// "b"
///   -- "a"
/// ```
///
/// Directed graphs use `->` instead of `--`.
pub struct GraphDebug<'a, V, D> {
    graph: &'a Graph<V, D>,
    init_indent: usize,
    indent_step: usize,
}

impl<V, D> Graph<V, D>
where
    V: Vertex + std::fmt::Debug,
    D: LinkPolicy,
{
    pub fn debug(&self) -> GraphDebug<'_, V, D> {
        GraphDebug {
            graph: self,
            init_indent: 0,
            indent_step: 2,
        }
    }
}

impl<'a, V, D> GraphDebug<'a, V, D> {
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, V, D> std::fmt::Debug for GraphDebug<'a, V, D>
where
    V: Vertex + std::fmt::Debug,
    D: LinkPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if D::DIRECTED_OR_NOT { "->" } else { "--" };
        for v in self.graph.iter() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", v)?;
            for w in self.graph[v].iter() {
                self.display_indent(f, 1)?;
                writeln!(f, "{} {:?}", arrow, w)?;
            }
        }
        Ok(())
    }
}

impl<V, D> std::fmt::Debug for Graph<V, D>
where
    V: Vertex + std::fmt::Debug,
    D: LinkPolicy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {:?} {{", self.name())?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        write!(f, "}}")
    }
}
