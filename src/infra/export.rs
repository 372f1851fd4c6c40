//! Export of graphs into external formats.

use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use rustc_hash::FxHashSet;

use crate::{
    core::{id::VertexId, marker::EdgeType},
    graph::Graph,
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter into the [DOT language](https://graphviz.org/doc/info/lang.html)
/// understood by Graphviz.
///
/// A set of edges can be highlighted, which renders them in red. This is
/// handy for displaying the result of an algorithm, such as a spanning tree
/// or a shortest path, on top of the graph it was computed on.
pub struct Dot<V, E> {
    name: String,
    get_vertex_label: Box<dyn Fn(&V) -> String>,
    get_edge_label: Box<dyn Fn(&E) -> String>,
    highlighted: FxHashSet<(VertexId, VertexId)>,
}

impl<V, E> Dot<V, E> {
    pub fn new<FV, FE>(name: Option<String>, get_vertex_label: FV, get_edge_label: FE) -> Self
    where
        FV: Fn(&V) -> String + 'static,
        FE: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
            get_edge_label: Box::new(get_edge_label),
            highlighted: FxHashSet::default(),
        }
    }

    /// Marks the given edges as highlighted. For undirected graphs the
    /// orientation of the pairs does not matter.
    pub fn highlight<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        self.highlighted.extend(edges);
        self
    }

    pub fn to_string<Ty: EdgeType>(&self, graph: &Graph<V, E, Ty>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }

    fn is_highlighted(&self, from: VertexId, to: VertexId, directed: bool) -> bool {
        self.highlighted.contains(&(from, to))
            || (!directed && self.highlighted.contains(&(to, from)))
    }
}

impl<V: Display, E: Display> Dot<V, E> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |v| format!("{v}"), |e| format!("{e}"))
    }
}

impl<V, E, Ty: EdgeType> Export<Graph<V, E, Ty>> for Dot<V, E> {
    fn export<W: Write>(&self, graph: &Graph<V, E, Ty>, out: &mut W) -> io::Result<()> {
        if graph.is_directed() {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (id, value) in graph.vertices() {
            out.write_all(
                format!(
                    "    v{} [label={:?}];\n",
                    id.as_bits(),
                    (self.get_vertex_label)(value)
                )
                .as_bytes(),
            )?;
        }

        let line = if graph.is_directed() { "->" } else { "--" };

        for (from, to, value) in graph.edges(false) {
            let color = if self.is_highlighted(from, to, graph.is_directed()) {
                ", color=red"
            } else {
                ""
            };

            out.write_all(
                format!(
                    "    v{} {} v{} [label={:?}{}];\n",
                    from.as_bits(),
                    line,
                    to.as_bits(),
                    (self.get_edge_label)(value),
                    color,
                )
                .as_bytes(),
            )?;
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
