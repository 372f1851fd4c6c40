use rustc_hash::FxHashSet;

use crate::{
    common::indexed_heap::IndexedHeap,
    core::{
        id::VertexId,
        marker::Undirected,
        weight::{Weight, Weighted},
    },
    graph::Graph,
    visit::VisitSet,
};

use super::{Error, Mst};

/// Runs [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
/// on the graph, growing the tree from `start` (or from an arbitrary vertex
/// when `start` is `None`).
///
/// Unlike [`kruskal`](super::kruskal), the graph must be connected;
/// otherwise [`Error::Disconnected`] is returned.
pub fn prim<V, W>(
    graph: &Graph<V, W, Undirected>,
    start: Option<VertexId>,
) -> Result<Mst<W>, Error>
where
    W: Weight,
{
    let start = match start {
        Some(start) if !graph.contains_vertex(start) => return Err(Error::StartNotFound),
        Some(start) => Some(start),
        None => graph.vertex_ids().next(),
    };

    let Some(start) = start else {
        // Empty graph.
        return Ok(Mst {
            edges: Vec::new(),
            total: W::zero(),
        });
    };

    let mut in_tree = FxHashSet::default();
    let mut edges = Vec::new();
    let mut total = W::zero();

    // The frontier holds candidate edges keyed by weight. Edges whose target
    // joined the tree in the meantime are discarded lazily when popped.
    let mut frontier: IndexedHeap<Weighted<(VertexId, VertexId), W>> = IndexedHeap::min();

    in_tree.visit(start);

    for (to, weight) in graph.edges_from(start) {
        frontier.push(Weighted((start, to), weight.clone()));
    }

    while let Some(Weighted((from, to), weight)) = frontier.pop() {
        if !in_tree.visit(to) {
            continue;
        }

        edges.push((from, to));
        total = total + weight;

        for (next, weight) in graph.edges_from(to) {
            if !in_tree.is_visited(next) {
                frontier.push(Weighted((to, next), weight.clone()));
            }
        }
    }

    if in_tree.visited_count() != graph.vertex_count() {
        return Err(Error::Disconnected);
    }

    Ok(Mst { edges, total })
}
