//! Supporting data structures used by the algorithms.

pub mod indexed_heap;
pub mod union_find;

pub use indexed_heap::{Compare, Handle, IndexedHeap, Max, Min};
pub use union_find::UnionFind;
