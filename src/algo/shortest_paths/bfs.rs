use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{id::VertexId, marker::EdgeType},
    graph::Graph,
    visit::VisitSet,
};

use super::{Error, ShortestPaths};

/// Computes shortest paths by breadth-first search, counting every edge as
/// one unit of distance. Edge values are ignored.
pub fn bfs<V, E, Ty>(
    graph: &Graph<V, E, Ty>,
    source: VertexId,
    goal: Option<VertexId>,
) -> Result<ShortestPaths<usize>, Error>
where
    Ty: EdgeType,
{
    if !graph.contains_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    let mut visited = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    dist.insert(source, 0);
    visited.visit(source);
    queue.push_back(source);

    'search: while let Some(vertex) = queue.pop_front() {
        if goal == Some(vertex) {
            break;
        }

        let vertex_dist = dist[&vertex];

        for next in graph.neighbors(vertex) {
            if visited.visit(next) {
                dist.insert(next, vertex_dist + 1);
                pred.insert(next, vertex);

                if goal == Some(next) {
                    break 'search;
                }

                queue.push_back(next);
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
