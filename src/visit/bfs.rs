use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::{
    core::{id::VertexId, marker::EdgeType},
    graph::Graph,
};

use super::{VisitSet, Visitor};

/// Breadth-first traversal visitor.
///
/// Visits the vertices reachable from the start vertex layer by layer. A start
/// vertex that is not present in the graph yields nothing.
///
/// # Examples
///
/// ```
/// use grafo::{visit::{Bfs, Visitor}, Graph};
///
/// let mut graph = Graph::<_, u32, _>::new_undirected();
///
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge(a, b, 1);
/// graph.add_edge(b, c, 1);
///
/// let order = Bfs::new(&graph).start(a).iter(&graph).collect::<Vec<_>>();
/// assert_eq!(order, vec![a, b, c]);
/// ```
pub struct Bfs {
    queue: VecDeque<VertexId>,
    visited: FixedBitSet,
}

impl Bfs {
    pub fn new<V, E, Ty: EdgeType>(graph: &Graph<V, E, Ty>) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
        }
    }

    /// Sets the vertex where the traversal starts.
    #[must_use]
    pub fn start(mut self, root: VertexId) -> Self {
        self.queue.clear();
        self.visited.reset_visited();
        self.queue.push_back(root);
        self
    }
}

impl<V, E, Ty: EdgeType> Visitor<Graph<V, E, Ty>> for Bfs {
    type Item = VertexId;

    fn visit_next(&mut self, graph: &Graph<V, E, Ty>) -> Option<Self::Item> {
        loop {
            let vertex = self.queue.pop_front()?;

            // The queue may contain duplicates of an already visited vertex,
            // and the start vertex may not exist in the graph at all.
            if !graph.contains_vertex(vertex) || !self.visited.visit(vertex) {
                continue;
            }

            for neighbor in graph.neighbors(vertex) {
                if !self.visited.is_visited(neighbor) {
                    self.queue.push_back(neighbor);
                }
            }

            return Some(vertex);
        }
    }
}
