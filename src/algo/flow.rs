//! Find the [maximum flow] between two vertices of a graph with edge
//! capacities.
//!
//! The graph passed to the algorithm is interpreted as a flow network: edge
//! values are capacities and must be nonnegative. Undirected edges are
//! treated as a pair of opposite directed edges with the same capacity.
//!
//! [maximum flow]: https://en.wikipedia.org/wiki/Maximum_flow_problem

use std::{collections::VecDeque, ops::Sub};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{
        id::VertexId,
        marker::{Directed, EdgeType},
        weight::Weight,
    },
    graph::Graph,
};

mod edmonds_karp;

pub use edmonds_karp::edmonds_karp;

/// A maximum flow with its per-edge assignment.
#[derive(Debug, Clone)]
pub struct MaxFlow<V, W> {
    total: W,
    // The flow decomposition as a directed graph over the same vertex ids as
    // the input network. Every edge of the network appears with the amount
    // of flow pushed through it, zero included.
    flow: Graph<V, W, Directed>,
}

impl<V, W> MaxFlow<V, W> {
    /// The value of the flow, that is, the net amount leaving the source.
    pub fn total(&self) -> &W {
        &self.total
    }

    /// The flow assignment as a directed graph sharing vertex ids with the
    /// input network. The edge value is the amount flowing from the edge's
    /// source to its target.
    pub fn flow(&self) -> &Graph<V, W, Directed> {
        &self.flow
    }

    /// The amount flowing through the given edge, or `None` if the network
    /// has no such edge.
    pub fn on_edge(&self, from: VertexId, to: VertexId) -> Option<&W> {
        self.flow.edge(from, to)
    }
}

/// The error encountered during a [`MaxFlow`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex does not exist in the graph.
    #[error("source vertex does not exist")]
    SourceNotFound,

    /// The sink vertex does not exist in the graph.
    #[error("sink vertex does not exist")]
    SinkNotFound,
}

// Shared by the algorithm and its tests.
fn residual<W>(capacity: &W, flow_forward: &W, flow_backward: &W) -> W
where
    W: Weight + Sub<Output = W>,
{
    // Formulated so that the subtraction never underflows for unsigned
    // weights: capacity >= flow_forward holds throughout the algorithm.
    (capacity.clone() - flow_forward.clone()) + flow_backward.clone()
}

/// Builds the directed capacity view of the network: every edge of the input
/// graph in both directions for undirected graphs, plus zero-capacity
/// reverse edges so that the residual graph can redirect flow.
fn capacity_graph<V, W, Ty>(graph: &Graph<V, W, Ty>) -> Graph<V, W, Directed>
where
    V: Clone,
    W: Weight,
    Ty: EdgeType,
{
    let mut capacities = Graph::new_directed();

    for (id, value) in graph.vertices() {
        capacities.insert_vertex_with_id(id, value.clone());
    }

    for (from, to, capacity) in graph.edges(true) {
        capacities.add_edge(from, to, capacity.clone());
    }

    // Zero-capacity reverse edges, unless the opposite direction exists.
    let missing = capacities
        .edges(true)
        .filter(|&(from, to, _)| capacities.edge(to, from).is_none())
        .map(|(from, to, _)| (to, from))
        .collect::<Vec<_>>();

    for (from, to) in missing {
        capacities.add_edge(from, to, W::zero());
    }

    capacities
}

type PredMap = FxHashMap<VertexId, VertexId>;

/// Breadth-first search for an augmenting path from `source` to `sink` in
/// the residual graph. Returns the predecessor map of the search if the sink
/// was reached.
fn augmenting_path<V, W>(
    capacities: &Graph<V, W, Directed>,
    flow: &Graph<V, W, Directed>,
    source: VertexId,
    sink: VertexId,
) -> Option<PredMap>
where
    W: Weight + Sub<Output = W>,
{
    let mut pred = PredMap::default();
    let mut queue = VecDeque::new();

    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        for (next, capacity) in capacities.edges_from(vertex) {
            if next == source || pred.contains_key(&next) {
                continue;
            }

            let forward = flow.edge(vertex, next).cloned().unwrap_or_else(W::zero);
            let backward = flow.edge(next, vertex).cloned().unwrap_or_else(W::zero);

            if residual(capacity, &forward, &backward) > W::zero() {
                pred.insert(next, vertex);

                if next == sink {
                    return Some(pred);
                }

                queue.push_back(next);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::marker::Undirected;

    use super::*;

    // The classic network: source S, sink T and two parallel "columns" with
    // a cross edge between them.
    fn create_network() -> (Graph<&'static str, u32, Directed>, Vec<VertexId>) {
        let mut graph = Graph::new_directed();

        let s = graph.add_vertex("S");
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let d = graph.add_vertex("D");
        let t = graph.add_vertex("T");

        graph.add_edge(s, a, 10);
        graph.add_edge(s, b, 10);
        graph.add_edge(a, b, 2);
        graph.add_edge(a, d, 8);
        graph.add_edge(b, d, 9);
        graph.add_edge(a, c, 4);
        graph.add_edge(d, c, 6);
        graph.add_edge(d, t, 10);
        graph.add_edge(c, t, 10);

        (graph, vec![s, a, b, c, d, t])
    }

    #[test]
    fn edmonds_karp_basic() {
        let (graph, v) = create_network();
        let max_flow = edmonds_karp(&graph, v[0], v[5]).unwrap();

        assert_eq!(*max_flow.total(), 19);
    }

    #[test]
    fn flow_conservation() {
        let (graph, v) = create_network();
        let (source, sink) = (v[0], v[5]);
        let max_flow = edmonds_karp(&graph, source, sink).unwrap();
        let flow = max_flow.flow();

        for u in graph.vertex_ids() {
            if u == source || u == sink {
                continue;
            }

            let outgoing: u32 = flow.edges_from(u).map(|(_, f)| f).sum();
            let incoming: u32 = flow
                .edges(true)
                .filter(|&(_, to, _)| to == u)
                .map(|(_, _, f)| f)
                .sum();

            assert_eq!(outgoing, incoming, "conservation violated at {u:?}");
        }
    }

    #[test]
    fn capacity_respected() {
        let (graph, v) = create_network();
        let max_flow = edmonds_karp(&graph, v[0], v[5]).unwrap();

        for (from, to, capacity) in graph.edges(true) {
            let f = max_flow.on_edge(from, to).unwrap();
            assert!(f <= capacity, "capacity exceeded on {from:?} -> {to:?}");
        }
    }

    #[test]
    fn total_matches_source_outflow() {
        let (graph, v) = create_network();
        let max_flow = edmonds_karp(&graph, v[0], v[5]).unwrap();

        let outflow: u32 = max_flow.flow().edges_from(v[0]).map(|(_, f)| f).sum();

        assert_eq!(*max_flow.total(), outflow);
    }

    #[test]
    fn source_not_found() {
        let (mut graph, v) = create_network();
        graph.remove_vertex(v[0]);

        assert_matches!(
            edmonds_karp(&graph, v[0], v[5]),
            Err(Error::SourceNotFound)
        );
        assert_matches!(
            edmonds_karp(&graph, v[5], v[0]),
            Err(Error::SinkNotFound)
        );
    }

    #[test]
    fn disconnected_sink_gets_zero_flow() {
        let mut graph = Graph::<(), u32, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(s, a, 5);

        let max_flow = edmonds_karp(&graph, s, t).unwrap();

        assert_eq!(*max_flow.total(), 0);
    }

    #[test]
    fn undirected_edges_carry_flow_both_ways() {
        let mut graph = Graph::<(), u32, Undirected>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(s, a, 3);
        graph.add_edge(a, t, 7);

        let max_flow = edmonds_karp(&graph, s, t).unwrap();

        assert_eq!(*max_flow.total(), 3);
    }

    #[test]
    fn signed_capacities_supported() {
        let mut graph = Graph::<(), i64, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(s, a, 4);
        graph.add_edge(a, t, 6);

        let max_flow = edmonds_karp(&graph, s, t).unwrap();

        assert_eq!(*max_flow.total(), 4);
    }

    #[test]
    fn flow_redirection() {
        // A greedy first path S -> A -> B -> T saturates the middle edge and
        // must be partially cancelled to reach the optimum.
        let mut graph = Graph::<(), u32, Directed>::new();

        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let t = graph.add_vertex(());

        graph.add_edge(s, a, 10);
        graph.add_edge(s, b, 10);
        graph.add_edge(a, b, 10);
        graph.add_edge(a, t, 10);
        graph.add_edge(b, t, 10);

        let max_flow = edmonds_karp(&graph, s, t).unwrap();

        assert_eq!(*max_flow.total(), 20);
    }
}
