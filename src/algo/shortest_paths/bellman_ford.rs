use rustc_hash::FxHashMap;

use crate::{
    core::{id::VertexId, marker::EdgeType, weight::Weight},
    graph::Graph,
};

use super::{Error, ShortestPaths};

/// Runs the [Bellman–Ford
/// algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm)
/// from the given source vertex.
///
/// Unlike [`dijkstra`](super::dijkstra), negative edge weights are allowed.
/// If a negative cycle is reachable from the source, the distances are
/// undefined and [`Error::NegativeCycle`] is returned.
pub fn bellman_ford<V, W, Ty>(
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

    // In an undirected graph every edge can relax in both directions.
    let edges = graph
        .edges(true)
        .map(|(from, to, weight)| (from, to, weight.clone()))
        .collect::<Vec<_>>();

    // Absence in the map encodes an infinite distance.
    let mut dist: FxHashMap<VertexId, W> = FxHashMap::default();
    let mut pred = FxHashMap::default();

    dist.insert(source, W::zero());

    let mut terminated_early = false;

    // Try to relax edges |V| - 1 times.
    for _ in 1..graph.vertex_count() {
        let mut relaxed = false;

        for (u, v, weight) in edges.iter() {
            let Some(u_dist) = dist.get(u) else {
                continue;
            };

            let next_dist = u_dist.clone() + weight.clone();

            // Relax if better.
            if dist.get(v).map_or(true, |v_dist| next_dist < *v_dist) {
                dist.insert(*v, next_dist);
                pred.insert(*v, *u);
                relaxed = true;
            }
        }

        // If no distance was improved, then subsequent iterations would not
        // improve as well. So we can terminate early.
        if !relaxed {
            terminated_early = true;
            break;
        }
    }

    // Check for negative cycles. If the main loop was terminated early, then
    // the absence of cycle is guaranteed.
    if !terminated_early {
        for (u, v, weight) in edges.iter() {
            let Some(u_dist) = dist.get(u) else {
                continue;
            };

            let next_dist = u_dist.clone() + weight.clone();

            if dist.get(v).map_or(true, |v_dist| next_dist < *v_dist) {
                return Err(Error::NegativeCycle);
            }
        }
    }

    if let Some(goal) = goal {
        if !dist.contains_key(&goal) {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}
