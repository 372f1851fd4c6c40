//! The vertex identifier type.
//!
//! Identifiers are assigned by the graph monotonically and are never reused
//! after a vertex is removed. Edges have no identity of their own; they are
//! addressed by their `(from, to)` endpoint pair.

/// A unique identification of a vertex in a graph.
///
/// The identifier has a representation for a
/// "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)" value, the
/// maximum value of the backing integer. This avoids the overhead of
/// `Option<VertexId>` in tight algorithm loops while keeping 0 as the natural
/// first identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u64);

impl VertexId {
    /// Conceptually `None` in `Option<VertexId>`, but without using `Option`.
    pub const fn sentinel() -> Self {
        Self(u64::MAX)
    }

    /// Returns `true` if the value represents the sentinel value.
    pub fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }

    /// Converts the identifier into the backing `u64`.
    pub fn as_bits(&self) -> u64 {
        self.0
    }

    /// Converts a `u64` into the corresponding identifier.
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Converts the identifier into the corresponding `usize`.
    pub fn as_usize(&self) -> usize {
        self.0.try_into().expect("id type overflow")
    }

    /// Converts a `usize` into the corresponding identifier.
    pub fn from_usize(index: usize) -> Self {
        Self(index as u64)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self::from_usize(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_a_regular_id() {
        assert!(VertexId::sentinel().is_sentinel());
        assert!(!VertexId::from_usize(0).is_sentinel());
    }

    #[test]
    fn usize_round_trip() {
        let id = VertexId::from_usize(42);
        assert_eq!(id.as_usize(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(VertexId::from(42usize), id);
    }
}
