use fixedbitset::FixedBitSet;

use crate::{
    core::{id::VertexId, marker::EdgeType},
    graph::Graph,
};

use super::{VisitSet, Visitor};

/// Depth-first traversal visitor reporting vertices in discovery (pre-order)
/// order.
///
/// A start vertex that is not present in the graph yields nothing.
pub struct Dfs {
    stack: Vec<VertexId>,
    visited: FixedBitSet,
}

impl Dfs {
    pub fn new<V, E, Ty: EdgeType>(graph: &Graph<V, E, Ty>) -> Self {
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
        }
    }

    /// Sets the vertex where the traversal starts.
    #[must_use]
    pub fn start(mut self, root: VertexId) -> Self {
        self.stack.clear();
        self.visited.reset_visited();
        self.stack.push(root);
        self
    }
}

impl<V, E, Ty: EdgeType> Visitor<Graph<V, E, Ty>> for Dfs {
    type Item = VertexId;

    fn visit_next(&mut self, graph: &Graph<V, E, Ty>) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;

            // The stack may contain duplicates of an already visited vertex,
            // and the start vertex may not exist in the graph at all.
            if !graph.contains_vertex(vertex) || !self.visited.visit(vertex) {
                continue;
            }

            for neighbor in graph.neighbors(vertex) {
                if !self.visited.is_visited(neighbor) {
                    self.stack.push(neighbor);
                }
            }

            return Some(vertex);
        }
    }
}

/// Depth-first traversal visitor reporting a vertex only after all vertices
/// discovered through it have been reported (post-order).
pub struct DfsPostOrder {
    // The flag marks vertices whose subtree has already been expanded and
    // which are thus ready to be reported when popped again.
    stack: Vec<(VertexId, bool)>,
    visited: FixedBitSet,
}

impl DfsPostOrder {
    pub fn new<V, E, Ty: EdgeType>(graph: &Graph<V, E, Ty>) -> Self {
        Self {
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(graph.vertex_count()),
        }
    }

    /// Sets the vertex where the traversal starts.
    #[must_use]
    pub fn start(mut self, root: VertexId) -> Self {
        self.stack.clear();
        self.visited.reset_visited();
        self.stack.push((root, false));
        self
    }
}

impl<V, E, Ty: EdgeType> Visitor<Graph<V, E, Ty>> for DfsPostOrder {
    type Item = VertexId;

    fn visit_next(&mut self, graph: &Graph<V, E, Ty>) -> Option<Self::Item> {
        loop {
            let (vertex, expanded) = self.stack.pop()?;

            if expanded {
                return Some(vertex);
            }

            if !graph.contains_vertex(vertex) || !self.visited.visit(vertex) {
                continue;
            }

            self.stack.push((vertex, true));

            for neighbor in graph.neighbors(vertex) {
                if !self.visited.is_visited(neighbor) {
                    self.stack.push((neighbor, false));
                }
            }
        }
    }
}
