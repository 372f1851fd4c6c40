use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

use fixedbitset::FixedBitSet;

use crate::core::id::VertexId;

/// A set of visited vertices.
pub trait VisitSet {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, id: VertexId) -> bool;

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, id: VertexId) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited vertices to be empty.
    fn reset_visited(&mut self);
}

impl VisitSet for BTreeSet<VertexId> {
    fn visit(&mut self, id: VertexId) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: VertexId) -> bool {
        self.contains(&id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<S: BuildHasher> VisitSet for HashSet<VertexId, S> {
    fn visit(&mut self, id: VertexId) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: VertexId) -> bool {
        self.contains(&id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, id: VertexId) -> bool {
        if self.len() <= id.as_usize() {
            self.grow(id.as_usize() + 1);
        }
        !self.put(id.as_usize())
    }

    fn is_visited(&self, id: VertexId) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(0..self.len())
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}
