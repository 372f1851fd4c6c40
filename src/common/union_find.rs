use rustc_hash::FxHashMap;

use crate::core::id::VertexId;

/// A disjoint-set forest over vertex ids, with path halving and union by
/// size.
///
/// # Examples
///
/// ```
/// use grafo::common::UnionFind;
/// use grafo::core::VertexId;
///
/// let ids = (0..4).map(VertexId::from_usize).collect::<Vec<_>>();
/// let mut sets = UnionFind::new(ids.iter().copied());
///
/// assert!(sets.union(ids[0], ids[1]));
/// assert!(sets.union(ids[2], ids[3]));
/// assert!(!sets.union(ids[1], ids[0]));
///
/// assert_eq!(sets.find(ids[0]), sets.find(ids[1]));
/// assert_ne!(sets.find(ids[0]), sets.find(ids[2]));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: FxHashMap<VertexId, VertexId>,
    size: FxHashMap<VertexId, usize>,
}

impl UnionFind {
    /// Creates a forest of singleton sets, one for each given id.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let parent = ids.into_iter().map(|id| (id, id)).collect::<FxHashMap<_, _>>();
        let size = parent.keys().map(|&id| (id, 1)).collect();

        Self { parent, size }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `id`, or `None` if
    /// the id is not tracked by this forest.
    ///
    /// Applies path halving along the way, so subsequent lookups get
    /// shorter chains.
    pub fn find(&mut self, id: VertexId) -> Option<VertexId> {
        if !self.parent.contains_key(&id) {
            return None;
        }

        let mut current = id;

        loop {
            let parent = self.parent[&current];

            if parent == current {
                return Some(current);
            }

            let grandparent = self.parent[&parent];
            self.parent.insert(current, grandparent);
            current = grandparent;
        }
    }

    /// Merges the sets containing the two ids. Returns `true` if the ids
    /// were in different sets, `false` if they already shared a set or
    /// either id is not tracked.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let (Some(a), Some(b)) = (self.find(a), self.find(b)) else {
            return false;
        };

        if a == b {
            return false;
        }

        // Attach the smaller tree under the larger one.
        let (root, child) = if self.size[&a] >= self.size[&b] {
            (a, b)
        } else {
            (b, a)
        };

        self.parent.insert(child, root);
        *self.size.get_mut(&root).unwrap() += self.size[&child];

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<VertexId> {
        (0..n).map(VertexId::from_usize).collect()
    }

    #[test]
    fn singletons_are_their_own_representatives() {
        let ids = ids(3);
        let mut sets = UnionFind::new(ids.iter().copied());

        assert_eq!(sets.len(), 3);

        for &id in &ids {
            assert_eq!(sets.find(id), Some(id));
        }
    }

    #[test]
    fn union_merges_and_reports_novelty() {
        let ids = ids(4);
        let mut sets = UnionFind::new(ids.iter().copied());

        assert!(sets.union(ids[0], ids[1]));
        assert!(sets.union(ids[2], ids[3]));
        assert!(!sets.union(ids[1], ids[0]));

        assert_eq!(sets.find(ids[0]), sets.find(ids[1]));
        assert_ne!(sets.find(ids[1]), sets.find(ids[2]));

        assert!(sets.union(ids[1], ids[3]));

        let root = sets.find(ids[0]);
        for &id in &ids {
            assert_eq!(sets.find(id), root);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let ids = ids(2);
        let mut sets = UnionFind::new(ids.iter().copied());

        let stranger = VertexId::from_usize(99);

        assert_eq!(sets.find(stranger), None);
        assert!(!sets.union(ids[0], stranger));
        assert!(!sets.union(stranger, ids[1]));

        // A failed union must not merge anything.
        assert_ne!(sets.find(ids[0]), sets.find(ids[1]));
    }

    #[test]
    fn chain_of_unions_compresses_paths() {
        let ids = ids(8);
        let mut sets = UnionFind::new(ids.iter().copied());

        for pair in ids.windows(2) {
            assert!(sets.union(pair[0], pair[1]));
        }

        let root = sets.find(ids[0]).unwrap();

        for &id in &ids {
            assert_eq!(sets.find(id), Some(root));
        }
    }
}
