//! A generic graph data structure with a bundle of classic algorithms:
//! traversal, shortest paths, minimum spanning trees and maximum flow.
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::shortest_paths::dijkstra, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//!
//! graph.add_edge(a, b, 1u32);
//! graph.add_edge(b, c, 2);
//! graph.add_edge(a, c, 5);
//!
//! let paths = dijkstra(&graph, a, None).unwrap();
//!
//! assert_eq!(paths.dist(c), Some(&3));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod visit;

pub use graph::Graph;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{
            marker::{Directed, Undirected},
            VertexId,
        },
        visit::Visitor,
        Graph,
    };
}
