//! Marker types fixing the orientation of a graph at the type level.
//!
//! Algorithms that are meaningful only for one orientation (e.g., minimum
//! spanning trees on undirected graphs) take the corresponding marker in their
//! signature, so that calling them on the wrong kind of graph is rejected at
//! compile time.

/// Orientation of an undirected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

/// Orientation of a directed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

/// Type-level orientation of a graph. Implemented by [`Directed`] and
/// [`Undirected`] and sealed against further implementations.
pub trait EdgeType: private::Sealed + 'static {
    fn is_directed() -> bool;
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
}
