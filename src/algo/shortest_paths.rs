//! Find [single source shortest paths] and their distances in a graph.
//!
//! Note that more efficient algorithms can be applied if the edges do not
//! have negative weights. If you have a graph where nonnegative weights can
//! be guaranteed at compile time, make sure to use an [unsigned
//! type](crate::core::weight::Weight::is_unsigned) like `u8`, `u32` or
//! `usize`.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::shortest_paths::dijkstra, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! let prague = graph.add_vertex("Prague");
//! let bratislava = graph.add_vertex("Bratislava");
//! let vienna = graph.add_vertex("Vienna");
//! let munich = graph.add_vertex("Munich");
//! let nuremberg = graph.add_vertex("Nuremberg");
//! let florence = graph.add_vertex("Florence");
//! let rome = graph.add_vertex("Rome");
//!
//! graph.add_edge(prague, bratislava, 328u32);
//! graph.add_edge(prague, nuremberg, 297);
//! graph.add_edge(prague, vienna, 293);
//! graph.add_edge(bratislava, vienna, 79);
//! graph.add_edge(nuremberg, munich, 170);
//! graph.add_edge(vienna, munich, 402);
//! graph.add_edge(vienna, florence, 863);
//! graph.add_edge(munich, florence, 646);
//! graph.add_edge(florence, rome, 278);
//!
//! let shortest_paths = dijkstra(&graph, prague, Some(rome)).unwrap();
//! let distance = shortest_paths[rome];
//! let path = shortest_paths
//!     .reconstruct(rome)
//!     .map(|v| *graph.vertex(v).unwrap())
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! println!("{distance} km from Prague through {path}");
//! ```

use std::{borrow::Borrow, ops::Index};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::id::VertexId;

mod bellman_ford;
mod bfs;
mod dijkstra;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dijkstra::dijkstra;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<W> {
    source: VertexId,
    // Using HashMaps because the algorithms support early termination when
    // reaching given goal. It is likely that reaching goal means visiting a
    // subgraph which is significantly smaller than the original graph.
    dist: FxHashMap<VertexId, W>,
    pred: FxHashMap<VertexId, VertexId>,
}

impl<W> ShortestPaths<W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not
    /// known: (1) the vertices are not connected, or (2) the goal was reached
    /// before visiting the given vertex.
    pub fn dist<VI>(&self, to: VI) -> Option<&W>
    where
        VI: Borrow<VertexId>,
    {
        self.dist.get(to.borrow())
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The iterator is empty if the
    /// path is not known.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }
}

impl<W, VI> Index<VI> for ShortestPaths<W>
where
    VI: Borrow<VertexId>,
{
    type Output = W;

    fn index(&self, index: VI) -> &Self::Output {
        self.dist(index).unwrap()
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex does not exist in the graph.
    #[error("source vertex does not exist")]
    SourceNotFound,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A negative cycle encountered.
    #[error("negative cycle encountered")]
    NegativeCycle,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a FxHashMap<VertexId, VertexId>,
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).copied()?;
        Some(self.curr)
    }
}
