//! Reading and writing graphs in a simple line-oriented text format.
//!
//! The format consists of a header line with the orientation keyword
//! (`graph` or `digraph`), the vertex count and the edge count, followed by
//! one line per vertex (`<id> <value>`) and one line per edge
//! (`<from> <to> <value>`). Vertex values may contain whitespace, edge
//! values may not. An undirected edge is written once.
//!
//! Vertex identifiers are preserved, so a graph read back from its own
//! serialization compares equal to the original.

use std::{
    fmt::Display,
    io::{self, BufRead, Cursor, Write},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    core::{id::VertexId, marker::EdgeType},
    graph::Graph,
};

/// The error encountered when reading or writing a graph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error")]
    Io(#[from] io::Error),

    /// The input does not conform to the format. The payload is the
    /// 1-based number of the offending line.
    #[error("malformed input on line {0}")]
    Malformed(usize),

    /// The orientation keyword in the header does not match the requested
    /// graph type.
    #[error("orientation of the input does not match the graph type")]
    OrientationMismatch,
}

/// Writes the graph into the given writer.
pub fn write_graph<V, E, Ty, W>(graph: &Graph<V, E, Ty>, out: &mut W) -> Result<(), Error>
where
    V: Display,
    E: Display,
    Ty: EdgeType,
    W: Write,
{
    let keyword = if graph.is_directed() {
        "digraph"
    } else {
        "graph"
    };

    writeln!(
        out,
        "{} {} {}",
        keyword,
        graph.vertex_count(),
        graph.edge_count()
    )?;

    for (id, value) in graph.vertices() {
        writeln!(out, "{} {}", id.as_bits(), value)?;
    }

    for (from, to, value) in graph.edges(false) {
        writeln!(out, "{} {} {}", from.as_bits(), to.as_bits(), value)?;
    }

    Ok(())
}

/// Writes the graph into a string.
pub fn write_to_string<V, E, Ty>(graph: &Graph<V, E, Ty>) -> String
where
    V: Display,
    E: Display,
    Ty: EdgeType,
{
    let mut cursor = Cursor::new(Vec::new());
    write_graph(graph, &mut cursor).expect("writing to vec in cursor does not fail");

    String::from_utf8(cursor.into_inner()).expect("graph format is text format")
}

/// Reads a graph from the given reader. Vertex identifiers are taken from
/// the input rather than assigned anew.
pub fn read_graph<V, E, Ty, R>(input: R) -> Result<Graph<V, E, Ty>, Error>
where
    V: FromStr,
    E: FromStr + Clone,
    Ty: EdgeType,
    R: BufRead,
{
    let mut lines = input.lines().enumerate();

    let (_, header) = lines.next().ok_or(Error::Malformed(1))?;
    let header = header?;
    let mut fields = header.split_whitespace();

    let directed = match fields.next() {
        Some("graph") => false,
        Some("digraph") => true,
        _ => return Err(Error::Malformed(1)),
    };

    if directed != Ty::is_directed() {
        return Err(Error::OrientationMismatch);
    }

    let vertex_count: usize = parse_field(&mut fields, 1)?;
    let edge_count: usize = parse_field(&mut fields, 1)?;

    let mut graph = Graph::new();

    for _ in 0..vertex_count {
        let (index, line) = lines.next().ok_or(Error::Malformed(vertex_count + 1))?;
        let line = line?;
        let line_no = index + 1;

        // The vertex value is the rest of the line, whitespace included.
        let (id, value) = line.split_once(' ').ok_or(Error::Malformed(line_no))?;

        let id = parse_id(id, line_no)?;
        let value = value.parse().map_err(|_| Error::Malformed(line_no))?;

        if !graph.insert_vertex_with_id(id, value) {
            return Err(Error::Malformed(line_no));
        }
    }

    for _ in 0..edge_count {
        let (index, line) = lines
            .next()
            .ok_or(Error::Malformed(vertex_count + edge_count + 1))?;
        let line = line?;
        let line_no = index + 1;

        let mut fields = line.split_whitespace();

        let from = parse_id(fields.next().ok_or(Error::Malformed(line_no))?, line_no)?;
        let to = parse_id(fields.next().ok_or(Error::Malformed(line_no))?, line_no)?;
        let value: E = parse_field(&mut fields, line_no)?;

        if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
            return Err(Error::Malformed(line_no));
        }

        graph.add_edge(from, to, value);
    }

    Ok(graph)
}

/// Reads a graph from a string.
pub fn read_from_str<V, E, Ty>(input: &str) -> Result<Graph<V, E, Ty>, Error>
where
    V: FromStr,
    E: FromStr + Clone,
    Ty: EdgeType,
{
    read_graph(input.as_bytes())
}

fn parse_field<'a, T, I>(fields: &mut I, line_no: usize) -> Result<T, Error>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(Error::Malformed(line_no))
}

fn parse_id(field: &str, line_no: usize) -> Result<VertexId, Error> {
    field
        .parse::<u64>()
        .map(VertexId::from_bits)
        .map_err(|_| Error::Malformed(line_no))
}
