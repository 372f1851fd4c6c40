use std::cmp::Ordering;

use crate::{
    common::union_find::UnionFind,
    core::{marker::Undirected, weight::Weight},
    graph::Graph,
};

use super::Mst;

/// Runs [Kruskal's
/// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm) on the
/// graph.
///
/// The algorithm never fails. On a disconnected graph it produces a minimum
/// spanning forest, one tree per connected component.
pub fn kruskal<V, W>(graph: &Graph<V, W, Undirected>) -> Mst<W>
where
    W: Weight,
{
    let mut edges = graph.edges(false).collect::<Vec<_>>();

    // A stable sort keeps the id order of equal-weight edges, so the result
    // is deterministic.
    edges.sort_by(|(_, _, a), (_, _, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut sets = UnionFind::new(graph.vertex_ids());
    let mut accepted = Vec::new();
    let mut total = W::zero();

    for (from, to, weight) in edges {
        // The edge is accepted if it connects two components, rejected if it
        // would close a cycle.
        if sets.union(from, to) {
            accepted.push((from, to));
            total = total + weight.clone();
        }
    }

    Mst {
        edges: accepted,
        total,
    }
}
