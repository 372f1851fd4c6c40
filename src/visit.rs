//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * visitor is lazy and can be stopped without tricks,
//! * visitor state is independent on the graph itself,
//! * traversal is not limited by the size of the program stack.
//!
//! Vertices unreachable from the start vertex are never visited. The order in
//! which the neighbors of a vertex are discovered follows the adjacency
//! mapping, that is, neighbor identifier order.

pub mod bfs;
pub mod dfs;

mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsPostOrder},
    visit_set::VisitSet,
};

/// Trait for a specific graph traversal approach.
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the
    /// graph between individual visitor steps or passing the visitor around
    /// without lifetime problems.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::marker::{Directed, Undirected},
        graph::Graph,
    };

    use super::*;

    fn diamond() -> Graph<(), u32, Undirected> {
        // 0 - 1, 0 - 2, 1 - 3, 2 - 3, isolated 4
        let mut graph = Graph::new_undirected();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let v2 = graph.add_vertex(());
        let v3 = graph.add_vertex(());
        graph.add_vertex(());

        graph.add_edge(v0, v1, 1);
        graph.add_edge(v0, v2, 1);
        graph.add_edge(v1, v3, 1);
        graph.add_edge(v2, v3, 1);

        graph
    }

    #[test]
    fn bfs_layer_order() {
        let graph = diamond();
        let ids = graph.vertex_ids().collect::<Vec<_>>();

        let vertices = Bfs::new(&graph)
            .start(ids[0])
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![ids[0], ids[1], ids[2], ids[3]]);
    }

    #[test]
    fn dfs_preorder() {
        let graph = diamond();
        let ids = graph.vertex_ids().collect::<Vec<_>>();

        let vertices = Dfs::new(&graph)
            .start(ids[0])
            .iter(&graph)
            .collect::<Vec<_>>();

        // The stack discipline continues from the most recently discovered
        // neighbor.
        assert_eq!(vertices, vec![ids[0], ids[2], ids[3], ids[1]]);
    }

    #[test]
    fn dfs_post_order_finishes_children_first() {
        let graph = diamond();
        let ids = graph.vertex_ids().collect::<Vec<_>>();

        let vertices = DfsPostOrder::new(&graph)
            .start(ids[0])
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices.len(), 4);
        // The start vertex is finished last.
        assert_eq!(vertices.last(), Some(&ids[0]));
        // Every vertex is reported after all its tree children.
        let pos =
            |id| vertices.iter().position(|v| *v == id).unwrap();
        assert!(pos(ids[3]) < pos(ids[0]).max(pos(ids[1])).max(pos(ids[2])));
    }

    #[test]
    fn unreachable_vertices_are_not_visited() {
        let graph = diamond();
        let ids = graph.vertex_ids().collect::<Vec<_>>();

        let visited = Bfs::new(&graph)
            .start(ids[0])
            .iter(&graph)
            .collect::<Vec<_>>();

        assert!(!visited.contains(&ids[4]));

        let visited = Dfs::new(&graph)
            .start(ids[0])
            .iter(&graph)
            .collect::<Vec<_>>();

        assert!(!visited.contains(&ids[4]));
    }

    #[test]
    fn absent_start_vertex_yields_nothing() {
        let graph = Graph::<(), u32, Directed>::new();
        let mut bfs = Bfs::new(&graph).start(crate::core::id::VertexId::from_usize(7));

        assert_eq!(bfs.visit_next(&graph), None);
    }

    #[test]
    fn directed_traversal_follows_orientation() {
        let mut graph = Graph::<_, u32, Directed>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 1);

        let from_b = Bfs::new(&graph).start(b).iter(&graph).collect::<Vec<_>>();

        assert_eq!(from_b, vec![b]);
    }
}
