use std::ops::Sub;

use crate::{
    core::{
        id::VertexId,
        marker::{Directed, EdgeType},
        weight::Weight,
    },
    graph::Graph,
};

use super::{augmenting_path, capacity_graph, residual, Error, MaxFlow, PredMap};

/// Runs the [Edmonds–Karp
/// algorithm](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm)
/// on the graph, computing the maximum flow from `source` to `sink`.
///
/// The algorithm repeatedly finds the shortest augmenting path by
/// breadth-first search and saturates it, which bounds the number of
/// augmentations by O(VE) independently of the capacity values.
pub fn edmonds_karp<V, W, Ty>(
    graph: &Graph<V, W, Ty>,
    source: VertexId,
    sink: VertexId,
) -> Result<MaxFlow<V, W>, Error>
where
    V: Clone,
    W: Weight + Sub<Output = W>,
    Ty: EdgeType,
{
    if !graph.contains_vertex(source) {
        return Err(Error::SourceNotFound);
    }

    if !graph.contains_vertex(sink) {
        return Err(Error::SinkNotFound);
    }

    let capacities = capacity_graph(graph);

    // The flow assignment starts at zero on every edge of the capacity view.
    let mut flow = Graph::new_directed();

    for (id, value) in capacities.vertices() {
        flow.insert_vertex_with_id(id, value.clone());
    }

    let edges = capacities
        .edges(true)
        .map(|(from, to, _)| (from, to))
        .collect::<Vec<_>>();

    for (from, to) in edges {
        flow.add_edge(from, to, W::zero());
    }

    let mut total = W::zero();

    while let Some(pred) = augmenting_path(&capacities, &flow, source, sink) {
        let bottleneck = path_bottleneck(&capacities, &flow, &pred, source, sink);
        augment(&mut flow, &pred, source, sink, bottleneck.clone());
        total = total + bottleneck;
    }

    // The added reverse edges are an artifact of the residual graph, the
    // reported assignment covers the network's own edges only.
    let phantom = flow
        .edges(true)
        .map(|(from, to, _)| (from, to))
        .filter(|&(from, to)| graph.edge(from, to).is_none())
        .collect::<Vec<_>>();

    for (from, to) in phantom {
        flow.remove_edge(from, to);
    }

    Ok(MaxFlow { total, flow })
}

/// The smallest residual capacity along the path recorded in `pred`.
fn path_bottleneck<V, W>(
    capacities: &Graph<V, W, Directed>,
    flow: &Graph<V, W, Directed>,
    pred: &PredMap,
    source: VertexId,
    sink: VertexId,
) -> W
where
    W: Weight + Sub<Output = W>,
{
    let mut bottleneck: Option<W> = None;
    let mut to = sink;

    while to != source {
        let from = pred[&to];

        let capacity = capacities.edge(from, to).cloned().unwrap_or_else(W::zero);
        let forward = flow.edge(from, to).cloned().unwrap_or_else(W::zero);
        let backward = flow.edge(to, from).cloned().unwrap_or_else(W::zero);

        let available = residual(&capacity, &forward, &backward);

        bottleneck = match bottleneck {
            Some(current) if current < available => Some(current),
            _ => Some(available),
        };

        to = from;
    }

    // The path has at least one edge, source and sink are distinct vertices
    // connected by the search.
    bottleneck.unwrap_or_else(W::zero)
}

/// Pushes `amount` of flow along the path recorded in `pred`. Opposite flow
/// is cancelled first so that the forward assignment never exceeds the
/// capacity, which also keeps unsigned arithmetic safe.
fn augment<V, W>(
    flow: &mut Graph<V, W, Directed>,
    pred: &PredMap,
    source: VertexId,
    sink: VertexId,
    amount: W,
) where
    W: Weight + Sub<Output = W>,
{
    let mut to = sink;

    while to != source {
        let from = pred[&to];

        let forward = flow.edge(from, to).cloned().unwrap_or_else(W::zero);
        let backward = flow.edge(to, from).cloned().unwrap_or_else(W::zero);

        // Cancel as much opposite flow as possible, route the rest forward.
        let cancelled = if backward < amount {
            backward.clone()
        } else {
            amount.clone()
        };

        if flow.edge(to, from).is_some() {
            flow.add_edge(to, from, backward - cancelled.clone());
        }

        flow.add_edge(from, to, forward + (amount.clone() - cancelled));

        to = from;
    }
}
