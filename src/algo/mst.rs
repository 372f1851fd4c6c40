//! Find a [minimum spanning tree] of an undirected graph.
//!
//! Both classic algorithms are available: [`kruskal`] grows a forest and
//! works on disconnected graphs, while [`prim`] grows a single tree from a
//! chosen vertex and reports an error when the graph is not connected.
//!
//! Spanning trees are defined for undirected graphs only, which is enforced
//! at compile time by accepting only graphs with the
//! [`Undirected`](crate::core::marker::Undirected) marker.
//!
//! [minimum spanning tree]:
//!     https://en.wikipedia.org/wiki/Minimum_spanning_tree

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::id::VertexId;

mod kruskal;
mod prim;

pub use kruskal::kruskal;
pub use prim::prim;

/// A minimum spanning tree (or forest) with its total weight.
#[derive(Debug, Clone)]
pub struct Mst<W> {
    edges: Vec<(VertexId, VertexId)>,
    total: W,
}

impl<W> Mst<W> {
    /// The edges of the tree, as endpoint pairs in the order they were
    /// accepted by the algorithm.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// The sum of the weights of all accepted edges.
    pub fn total(&self) -> &W {
        &self.total
    }

    /// Returns `true` if the tree contains the edge between the two
    /// endpoints, in either orientation.
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.edges
            .iter()
            .any(|&(u, v)| (u, v) == (from, to) || (u, v) == (to, from))
    }

    /// The vertices spanned by the tree edges.
    pub fn vertices(&self) -> FxHashSet<VertexId> {
        self.edges
            .iter()
            .flat_map(|&(u, v)| [u, v])
            .collect()
    }
}

/// The error encountered during an [`Mst`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The start vertex does not exist in the graph.
    #[error("start vertex does not exist")]
    StartNotFound,

    /// The graph is not connected, so no spanning tree covers all vertices.
    #[error("graph is not connected")]
    Disconnected,
}
