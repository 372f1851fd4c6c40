//! Various graph algorithms.

pub mod flow;
pub mod mst;
pub mod shortest_paths;

pub use flow::{edmonds_karp, MaxFlow};
pub use mst::{kruskal, prim, Mst};
pub use shortest_paths::{bellman_ford, dijkstra, ShortestPaths};
