use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::indexed_heap::{Handle, IndexedHeap},
    core::{
        id::VertexId,
        marker::EdgeType,
        weight::{Weight, Weighted},
    },
    graph::Graph,
    visit::VisitSet,
};

use super::{Error, ShortestPaths};

/// Runs [Dijkstra's
/// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) from the
/// given source vertex, optionally terminating early when the goal is
/// reached.
///
/// Fails with [`Error::NegativeWeight`] when an edge with negative weight is
/// encountered during the search.
pub fn dijkstra<V, W, Ty>(
    graph: &Graph<V, W, Ty>,
    source: VertexId,
    goal: Option<VertexId>,
) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
    Ty: EdgeType,
{
    if !graph.contains_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let mut visited = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();

    // The priority queue addresses its elements by stable handles, so the
    // relaxation can decrease the priority of a queued vertex in place
    // instead of pushing a duplicate entry.
    let mut queue = IndexedHeap::min();
    let mut handles: FxHashMap<VertexId, Handle> = FxHashMap::default();

    dist.insert(source, W::zero());
    handles.insert(source, queue.push(Weighted(source, W::zero())));

    while let Some(Weighted(vertex, vertex_dist)) = queue.pop() {
        handles.remove(&vertex);

        if goal == Some(vertex) {
            // Mark as visited, because below is a test that checks that goal
            // was visited.
            visited.visit(vertex);
            break;
        }

        for (next, edge_dist) in graph.edges_from(vertex) {
            if visited.is_visited(next) {
                continue;
            }

            // The check for unsignedness should eliminate the negativity
            // weight check, because the implementation of `is_unsigned`
            // method is always a constant boolean in practice.
            if !W::is_unsigned() && *edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist.clone() + edge_dist.clone();

            match dist.get(&next) {
                // Relaxation operation. If the distance is better than what
                // we had so far, update it.
                Some(curr_dist) if next_dist < *curr_dist => {
                    dist.insert(next, next_dist.clone());
                    pred.insert(next, vertex);

                    // Any handle stored for an unfinished vertex is live,
                    // handles are discarded when their vertex is popped.
                    let handle = handles[&next];
                    let _ = queue.update(handle, Weighted(next, next_dist));
                }
                Some(_) => {}
                None => {
                    dist.insert(next, next_dist.clone());
                    pred.insert(next, vertex);
                    handles.insert(next, queue.push(Weighted(next, next_dist)));
                }
            }
        }

        // The vertex is finished.
        visited.visit(vertex);
    }

    if let Some(goal) = goal {
        if !visited.is_visited(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
