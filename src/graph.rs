//! The adjacency-map graph representation.
//!
//! [`Graph`] owns its vertices and, for every vertex, a mapping from neighbor
//! identifier to edge value. An undirected edge is materialized as two
//! symmetric entries with equal values (a self-loop appears once). Iteration
//! over vertices and adjacency entries follows identifier order, so traversal
//! results are deterministic for a given construction history.

use std::{collections::BTreeMap, marker::PhantomData};

use crate::core::{
    error::{ReplaceEdgeError, ReplaceVertexError},
    id::VertexId,
    marker::{Directed, EdgeType, Undirected},
    weight::Unweight,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<V, E> {
    value: V,
    edges: BTreeMap<VertexId, E>,
}

impl<V, E> Vertex<V, E> {
    fn new(value: V) -> Self {
        Self {
            value,
            edges: BTreeMap::new(),
        }
    }
}

/// A generic in-memory graph parametrized by the vertex value type `V`, the
/// edge value type `E` and the orientation marker `Ty` ([`Directed`] or
/// [`Undirected`]).
///
/// Vertex identifiers are assigned monotonically and never reused after
/// removal. Edges follow mapping semantics: re-adding an edge with the same
/// endpoints overwrites the previous value, the graph is not a multigraph.
///
/// # Examples
///
/// ```
/// use grafo::Graph;
///
/// let mut graph = Graph::new_undirected();
///
/// let prague = graph.add_vertex("Prague");
/// let brno = graph.add_vertex("Brno");
///
/// graph.add_edge(prague, brno, 205u32);
///
/// assert_eq!(graph.edge(prague, brno), Some(&205));
/// assert_eq!(graph.edge(brno, prague), Some(&205));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, E, Ty = Undirected> {
    vertices: BTreeMap<VertexId, Vertex<V, E>>,
    edge_count: usize,
    next_id: u64,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, E, Ty: EdgeType> Graph<V, E, Ty> {
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
            next_id: 0,
            ty: PhantomData,
        }
    }
}

impl<V, E> Graph<V, E, Undirected> {
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E, Directed> {
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<V, E, Ty: EdgeType> Default for Graph<V, E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Ty: EdgeType> Graph<V, E, Ty> {
    /// Returns `true` if the graph is directed.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges in the graph.
    ///
    /// The two symmetric entries of an undirected edge count as one edge.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds a vertex with the given value and returns its identifier.
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        let id = VertexId::from_bits(self.next_id);
        self.next_id += 1;
        self.vertices.insert(id, Vertex::new(value));
        id
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Returns the value of the vertex, or `None` if it does not exist.
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(&id).map(|vertex| &vertex.value)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(&id).map(|vertex| &mut vertex.value)
    }

    /// Replaces the value of the vertex, returning the previous value.
    ///
    /// If the vertex does not exist, the rejected value is handed back in the
    /// error.
    pub fn replace_vertex(&mut self, id: VertexId, value: V) -> Result<V, ReplaceVertexError<V>> {
        match self.vertices.get_mut(&id) {
            Some(vertex) => Ok(std::mem::replace(&mut vertex.value, value)),
            None => Err(ReplaceVertexError(value)),
        }
    }

    /// Removes the vertex and purges every adjacency entry referencing it,
    /// returning its value.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        let vertex = self.vertices.remove(&id)?;
        self.edge_count -= vertex.edges.len();

        let mut incoming = 0;
        for other in self.vertices.values_mut() {
            if other.edges.remove(&id).is_some() {
                incoming += 1;
            }
        }

        // For an undirected graph the symmetric entries purged from the other
        // vertices belong to edges already accounted for above.
        if Ty::is_directed() {
            self.edge_count -= incoming;
        }

        Some(vertex.value)
    }

    /// Adds an edge between the two vertices, overwriting the value of an
    /// existing edge with the same endpoints.
    ///
    /// If either endpoint does not exist, this is a no-op. For an undirected
    /// graph the edge is inserted in both adjacency mappings (a self-loop only
    /// once).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, value: E)
    where
        E: Clone,
    {
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return;
        }

        if !Ty::is_directed() && from != to {
            if let Some(vertex) = self.vertices.get_mut(&to) {
                vertex.edges.insert(from, value.clone());
            }
        }

        if let Some(vertex) = self.vertices.get_mut(&from) {
            if vertex.edges.insert(to, value).is_none() {
                self.edge_count += 1;
            }
        }
    }

    /// Removes the edge (both symmetric entries for an undirected graph) and
    /// returns its value.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<E> {
        let removed = self.vertices.get_mut(&from)?.edges.remove(&to)?;
        self.edge_count -= 1;

        if !Ty::is_directed() && from != to {
            if let Some(vertex) = self.vertices.get_mut(&to) {
                vertex.edges.remove(&from);
            }
        }

        Some(removed)
    }

    /// Returns the value of the edge, or `None` if it does not exist.
    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&E> {
        self.vertices.get(&from)?.edges.get(&to)
    }

    /// Replaces the value of the edge, returning the previous value as stored
    /// in the `from` direction. For an undirected graph both symmetric entries
    /// are updated.
    ///
    /// If the edge does not exist, the rejected value is handed back in the
    /// error.
    pub fn update_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        value: E,
    ) -> Result<E, ReplaceEdgeError<E>>
    where
        E: Clone,
    {
        let slot = self
            .vertices
            .get_mut(&from)
            .and_then(|vertex| vertex.edges.get_mut(&to));

        let old = match slot {
            Some(slot) => std::mem::replace(slot, value.clone()),
            None => return Err(ReplaceEdgeError(value)),
        };

        if !Ty::is_directed() && from != to {
            if let Some(slot) = self
                .vertices
                .get_mut(&to)
                .and_then(|vertex| vertex.edges.get_mut(&from))
            {
                *slot = value;
            }
        }

        Ok(old)
    }

    /// Returns `true` if there is an edge going from `from` to `to`.
    pub fn adjacent(&self, from: VertexId, to: VertexId) -> bool {
        self.edge(from, to).is_some()
    }

    /// Iterates over the identifiers of the neighbors reachable from the
    /// vertex, in identifier order. Yields nothing if the vertex does not
    /// exist.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|vertex| vertex.edges.keys().copied())
    }

    /// Iterates over the outgoing adjacency mapping of the vertex as
    /// `(neighbor, value)` pairs, in identifier order.
    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &E)> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter().map(|(&to, value)| (to, value)))
    }

    /// Iterates over all edges as `(from, to, value)` triples.
    ///
    /// For an undirected graph, `both_directions` controls whether each edge
    /// is reported once (with `from <= to`) or as both of its symmetric
    /// entries. The flag has no effect on a directed graph.
    pub fn edges(&self, both_directions: bool) -> impl Iterator<Item = (VertexId, VertexId, &E)> + '_ {
        self.vertices.iter().flat_map(move |(&from, vertex)| {
            vertex.edges.iter().filter_map(move |(&to, value)| {
                if Ty::is_directed() || both_directions || from <= to {
                    Some((from, to, value))
                } else {
                    None
                }
            })
        })
    }

    /// Iterates over all edges as `(from, to)` endpoint pairs. See
    /// [`Graph::edges`] for the meaning of `both_directions`.
    pub fn edge_endpoints(&self, both_directions: bool) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges(both_directions).map(|(from, to, _)| (from, to))
    }

    /// Iterates over the vertex identifiers in increasing order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Iterates over the vertices as `(id, value)` pairs in identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.vertices.iter().map(|(&id, vertex)| (id, &vertex.value))
    }

    /// Inserts a vertex under a caller-chosen identifier, used when
    /// reconstructing a graph whose identifiers must be preserved.
    ///
    /// Returns `false` if the identifier is already taken.
    pub(crate) fn insert_vertex_with_id(&mut self, id: VertexId, value: V) -> bool {
        if self.vertices.contains_key(&id) || id.is_sentinel() {
            return false;
        }

        self.next_id = self.next_id.max(id.as_bits() + 1);
        self.vertices.insert(id, Vertex::new(value));
        true
    }
}

impl<V, Ty: EdgeType> Graph<V, Unweight, Ty> {
    /// Adds an unweighted edge between the two vertices. A no-op if either
    /// endpoint does not exist.
    pub fn link(&mut self, from: VertexId, to: VertexId) {
        self.add_edge(from, to, Unweight);
    }
}

// Equality covers orientation (through the type), the vertex set with values
// and the edge set with values. The internal identifier counter is excluded so
// that a reconstructed graph compares equal to its original.
impl<V: PartialEq, E: PartialEq, Ty: EdgeType> PartialEq for Graph<V, E, Ty> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<V: Eq, E: Eq, Ty: EdgeType> Eq for Graph<V, E, Ty> {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn add_vertex_then_lookup() {
        let mut graph = Graph::<_, u32, Undirected>::new();

        let v = graph.add_vertex("hello");

        assert_eq!(graph.vertex(v), Some(&"hello"));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut graph = Graph::<_, u32, Directed>::new();

        let v0 = graph.add_vertex(0);
        let v1 = graph.add_vertex(1);
        graph.remove_vertex(v1);
        let v2 = graph.add_vertex(2);

        assert_ne!(v2, v1);
        assert_ne!(v2, v0);
        assert_eq!(graph.vertex(v2), Some(&2));
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 7);

        assert_eq!(graph.edge(a, b), Some(&7));
        assert_eq!(graph.edge(b, a), Some(&7));
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.remove_edge(a, b), Some(7));
        assert_eq!(graph.edge(a, b), None);
        assert_eq!(graph.edge(b, a), None);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn directed_edge_is_one_way() {
        let mut graph = Graph::<_, _, Directed>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 7);

        assert_eq!(graph.edge(a, b), Some(&7));
        assert_eq!(graph.edge(b, a), None);
        assert!(graph.adjacent(a, b));
        assert!(!graph.adjacent(b, a));
    }

    #[test]
    fn add_edge_with_absent_endpoint_is_noop() {
        let mut graph = Graph::<_, _, Directed>::new();

        let a = graph.add_vertex(());
        graph.add_edge(a, VertexId::from_usize(100), 1);
        graph.add_edge(VertexId::from_usize(100), a, 1);

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn readding_edge_overwrites_value() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 1);
        graph.add_edge(a, b, 2);

        assert_eq!(graph.edge(a, b), Some(&2));
        assert_eq!(graph.edge(b, a), Some(&2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_purges_referencing_edges() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 2);
        graph.add_edge(a, c, 3);

        assert_eq!(graph.remove_vertex(b), Some(()));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(a).all(|n| n != b));
        assert!(graph.neighbors(c).all(|n| n != b));
    }

    #[test]
    fn remove_vertex_directed_counts_incoming() {
        let mut graph = Graph::<_, _, Directed>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge(a, b, 1);
        graph.add_edge(c, b, 2);
        graph.add_edge(b, c, 3);

        graph.remove_vertex(b);

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn self_loop_in_undirected_graph_appears_once() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        graph.add_edge(a, a, 5);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.remove_edge(a, a), Some(5));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn update_edge_updates_both_directions() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.add_edge(a, b, 1);

        assert_eq!(graph.update_edge(a, b, 9), Ok(1));
        assert_eq!(graph.edge(a, b), Some(&9));
        assert_eq!(graph.edge(b, a), Some(&9));
    }

    #[test]
    fn update_missing_edge_hands_value_back() {
        let mut graph = Graph::<(), _, Directed>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());

        assert_matches!(graph.update_edge(a, b, 3), Err(ReplaceEdgeError(3)));
    }

    #[test]
    fn replace_vertex_value() {
        let mut graph = Graph::<_, u32, Directed>::new();

        let a = graph.add_vertex("old");

        assert_eq!(graph.replace_vertex(a, "new"), Ok("old"));
        assert_eq!(graph.vertex(a), Some(&"new"));
        assert_matches!(
            graph.replace_vertex(VertexId::sentinel(), "nope"),
            Err(ReplaceVertexError("nope"))
        );
    }

    #[test]
    fn edges_without_duplicates_reports_undirected_edge_once() {
        let mut graph = Graph::<_, _, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 2);

        assert_eq!(graph.edges(false).count(), 2);
        assert_eq!(graph.edges(true).count(), 4);
    }

    #[test]
    fn unweighted_link() {
        let mut graph = Graph::<_, Unweight, Undirected>::new();

        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        graph.link(a, b);

        assert!(graph.adjacent(a, b));
        assert!(graph.adjacent(b, a));
    }

    #[test]
    fn equality_ignores_id_counter() {
        let mut lhs = Graph::<_, _, Undirected>::new();
        let a = lhs.add_vertex("a");
        let b = lhs.add_vertex("b");
        lhs.add_edge(a, b, 1);

        let mut rhs = Graph::<_, _, Undirected>::new();
        let a = rhs.add_vertex("a");
        let b = rhs.add_vertex("b");
        let c = rhs.add_vertex("c");
        rhs.add_edge(a, b, 1);
        rhs.remove_vertex(c);

        assert_eq!(lhs, rhs);
    }
}
