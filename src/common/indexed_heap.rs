//! An array-backed binary heap with stable handles.
//!
//! Unlike [`std::collections::BinaryHeap`], this heap supports O(log n)
//! update and removal of an element at an arbitrary position through a
//! [`Handle`] returned on insertion. The handle stays valid across any number
//! of sibling swaps caused by other heap operations, until the element itself
//! is removed.

use std::marker::PhantomData;

/// Ordering discipline injected into [`IndexedHeap`].
///
/// The comparator is expected to be stateless; both heap disciplines are
/// instantiated from the same structure by choosing [`Min`] or [`Max`].
pub trait Compare<T> {
    /// Returns `true` if `a` must be popped before `b`.
    fn before(&self, a: &T, b: &T) -> bool;
}

/// Comparator producing a min-heap: the smallest element is popped first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

/// Comparator producing a max-heap: the largest element is popped first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl<T: PartialOrd> Compare<T> for Min {
    fn before(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: PartialOrd> Compare<T> for Max {
    fn before(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// An opaque, stable reference to an element inside an [`IndexedHeap`].
///
/// A handle addresses the element's slot in an arena, not its current heap
/// position, so it survives reordering caused by other operations. Once the
/// element is removed, the handle becomes stale; a generation counter makes
/// sure that a stale handle is detected instead of silently addressing
/// whatever element reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    slot: usize,
    generation: u32,
}

impl Default for Handle {
    fn default() -> Self {
        Self {
            slot: usize::MAX,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: Option<T>,
    // Current index into the heap array. Kept in sync on every swap.
    pos: usize,
    generation: u32,
}

/// A binary heap with O(log n) update and removal at arbitrary positions via
/// stable [`Handle`]s.
///
/// The ordering is governed by the comparator type `C`; [`Min`] (the default)
/// and [`Max`] cover the common cases.
///
/// # Examples
///
/// ```
/// use grafo::common::IndexedHeap;
///
/// let mut heap = IndexedHeap::min();
///
/// let seven = heap.push(7);
/// heap.push(3);
///
/// assert_eq!(heap.peek(), Some(&3));
///
/// // Decrease 7 to 1 in place.
/// heap.update(seven, 1);
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedHeap<T, C = Min> {
    slots: Vec<Slot<T>>,
    // Heap array of slot indices.
    heap: Vec<usize>,
    free: Vec<usize>,
    cmp: C,
    ty: PhantomData<fn() -> T>,
}

impl<T> IndexedHeap<T, Min> {
    /// Creates an empty min-heap.
    pub fn min() -> Self {
        Self::new()
    }
}

impl<T> IndexedHeap<T, Max> {
    /// Creates an empty max-heap.
    pub fn max() -> Self {
        Self::new()
    }
}

impl<T, C: Default> IndexedHeap<T, C> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            heap: Vec::new(),
            free: Vec::new(),
            cmp: C::default(),
            ty: PhantomData,
        }
    }
}

impl<T, C: Default> Default for IndexedHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for IndexedHeap<T, C> {
    /// Builds the heap in O(n) by inserting all elements and restoring the
    /// heap property bottom-up.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();

        for (pos, item) in iter.into_iter().enumerate() {
            heap.slots.push(Slot {
                item: Some(item),
                pos,
                generation: 0,
            });
            heap.heap.push(pos);
        }

        for pos in (0..heap.heap.len() / 2).rev() {
            heap.sift_down(pos);
        }

        heap
    }
}

impl<T, C: Compare<T>> IndexedHeap<T, C> {
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns a reference to the top element, or `None` if the heap is
    /// empty.
    pub fn peek(&self) -> Option<&T> {
        let slot = *self.heap.first()?;
        self.slots[slot].item.as_ref()
    }

    /// Returns the handle of the top element, or `None` if the heap is empty.
    pub fn peek_handle(&self) -> Option<Handle> {
        let slot = *self.heap.first()?;
        Some(Handle {
            slot,
            generation: self.slots[slot].generation,
        })
    }

    /// Inserts an element and returns a stable handle for it. No other
    /// handles are invalidated.
    pub fn push(&mut self, item: T) -> Handle {
        let pos = self.heap.len();

        let slot = match self.free.pop() {
            Some(slot) => {
                let reused = &mut self.slots[slot];
                reused.item = Some(item);
                reused.pos = pos;
                slot
            }
            None => {
                self.slots.push(Slot {
                    item: Some(item),
                    pos,
                    generation: 0,
                });
                self.slots.len() - 1
            }
        };

        let generation = self.slots[slot].generation;
        self.heap.push(slot);
        self.sift_up(pos);

        Handle { slot, generation }
    }

    /// Removes and returns the top element. Invalidates its handle; handles
    /// to other elements remain valid.
    pub fn pop(&mut self) -> Option<T> {
        let handle = self.peek_handle()?;
        self.remove(handle)
    }

    /// Returns a reference to the element addressed by the handle, or `None`
    /// if the handle is stale.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.slot)?;

        if slot.generation != handle.generation {
            return None;
        }

        slot.item.as_ref()
    }

    /// Replaces the element addressed by the handle and restores the heap
    /// property, sifting in the direction indicated by a comparison with the
    /// parent. Returns the previous value, or `None` if the handle is stale
    /// (in which case the heap is left untouched and the new value dropped).
    pub fn update(&mut self, handle: Handle, item: T) -> Option<T> {
        self.get(handle)?;

        let pos = self.slots[handle.slot].pos;
        let old = self.slots[handle.slot].item.replace(item);

        self.sift(pos);

        old
    }

    /// Removes the element addressed by the handle from any position in the
    /// heap. Invalidates the handle; handles to other elements remain valid.
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.get(handle)?;

        let pos = self.slots[handle.slot].pos;
        let last = self.heap.len() - 1;

        if pos != last {
            self.heap.swap(pos, last);
            self.slots[self.heap[pos]].pos = pos;
        }

        self.heap.pop();

        let removed = &mut self.slots[handle.slot];
        let item = removed.item.take();
        removed.generation = removed.generation.wrapping_add(1);
        self.free.push(handle.slot);

        // Restore the heap property from the vacated position, in whichever
        // direction the replacement element violates it.
        if pos < self.heap.len() {
            self.sift(pos);
        }

        item
    }

    /// Pops all elements in comparator order into a vector.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());

        while let Some(item) = self.pop() {
            sorted.push(item);
        }

        sorted
    }

    fn before(&self, a: usize, b: usize) -> bool {
        match (&self.slots[self.heap[a]].item, &self.slots[self.heap[b]].item) {
            (Some(a), Some(b)) => self.cmp.before(a, b),
            // Occupied heap positions always hold an element.
            _ => false,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]].pos = a;
        self.slots[self.heap[b]].pos = b;
    }

    fn sift(&mut self, pos: usize) {
        if pos > 0 && self.before(pos, (pos - 1) / 2) {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;

            if self.before(pos, parent) {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut first = pos;

            if left < self.heap.len() && self.before(left, first) {
                first = left;
            }

            if right < self.heap.len() && self.before(right, first) {
                first = right;
            }

            if first == pos {
                break;
            }

            self.swap(pos, first);
            pos = first;
        }
    }

    #[cfg(test)]
    fn assert_invariant(&self) {
        for pos in 1..self.heap.len() {
            let parent = (pos - 1) / 2;
            assert!(
                !self.before(pos, parent),
                "element at {pos} compares before its parent"
            );
        }

        for (index, slot) in self.slots.iter().enumerate() {
            if slot.item.is_some() {
                assert_eq!(self.heap[slot.pos], index, "stale position in slot {index}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn push_pop_sorted_order() {
        let mut heap = IndexedHeap::min();

        for value in [5, 1, 4, 2, 3] {
            heap.push(value);
            heap.assert_invariant();
        }

        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn max_discipline() {
        let heap: IndexedHeap<_, Max> = [5, 1, 4, 2, 3].into_iter().collect();

        assert_eq!(heap.into_sorted_vec(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn peek_and_handle_agree() {
        let mut heap = IndexedHeap::min();

        heap.push(2);
        let one = heap.push(1);

        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.peek_handle(), Some(one));
        assert_eq!(heap.get(one), Some(&1));
    }

    #[test]
    fn update_affects_exactly_the_handled_element() {
        let mut heap = IndexedHeap::min();

        let a = heap.push(10);
        let b = heap.push(20);
        let c = heap.push(30);

        // Decrease-key from an arbitrary position.
        assert_eq!(heap.update(c, 5), Some(30));
        heap.assert_invariant();
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.get(a), Some(&10));
        assert_eq!(heap.get(b), Some(&20));

        // Increase-key of the root.
        assert_eq!(heap.update(c, 40), Some(5));
        heap.assert_invariant();
        assert_eq!(heap.peek(), Some(&10));

        assert_eq!(heap.into_sorted_vec(), vec![10, 20, 40]);
    }

    #[test]
    fn remove_from_arbitrary_position() {
        let mut heap = IndexedHeap::min();

        let handles = [3, 1, 4, 1, 5, 9, 2, 6]
            .into_iter()
            .map(|value| heap.push(value))
            .collect::<Vec<_>>();

        assert_eq!(heap.remove(handles[2]), Some(4));
        heap.assert_invariant();
        assert_eq!(heap.remove(handles[5]), Some(9));
        heap.assert_invariant();
        assert_eq!(heap.len(), 6);

        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 3, 5, 6]);
    }

    #[test]
    fn stale_handle_is_rejected() {
        let mut heap = IndexedHeap::min();

        let a = heap.push(1);
        assert_eq!(heap.remove(a), Some(1));

        // The slot is recycled by the next push; the old handle must not
        // reach the new element.
        let b = heap.push(2);
        assert_eq!(heap.get(a), None);
        assert_eq!(heap.update(a, 3), None);
        assert_eq!(heap.remove(a), None);
        assert_eq!(heap.get(b), Some(&2));
    }

    #[test]
    fn pop_invalidates_only_the_top_handle() {
        let mut heap = IndexedHeap::min();

        let a = heap.push(1);
        let b = heap.push(2);

        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.get(a), None);
        assert_eq!(heap.get(b), Some(&2));
    }

    #[test]
    fn clone_preserves_handles_for_both_copies() {
        let mut heap = IndexedHeap::min();

        let a = heap.push(1);
        let b = heap.push(2);

        let mut copy = heap.clone();

        // Mutating the copy does not affect the original.
        copy.update(a, 10);
        assert_eq!(heap.get(a), Some(&1));
        assert_eq!(copy.get(a), Some(&10));
        assert_eq!(copy.get(b), Some(&2));
    }

    #[test]
    fn empty_heap() {
        let mut heap = IndexedHeap::<i32>::min();

        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.peek_handle(), None);
        assert_eq!(heap.pop(), None);
    }

    proptest! {
        #[test]
        fn proptest_pop_yields_sorted_order(values: Vec<i32>) {
            let heap: IndexedHeap<i32> = values.iter().copied().collect();
            heap.assert_invariant();

            let mut sorted = values;
            sorted.sort();

            prop_assert_eq!(heap.into_sorted_vec(), sorted);
        }

        #[test]
        fn proptest_invariant_under_mixed_operations(
            values: Vec<i32>,
            updates: Vec<(prop::sample::Index, i32)>,
        ) {
            let mut heap = IndexedHeap::min();
            let mut handles = Vec::new();

            for value in values {
                handles.push(heap.push(value));
                heap.assert_invariant();
            }

            for (index, value) in updates {
                if handles.is_empty() {
                    break;
                }

                let handle = handles[index.index(handles.len())];

                if value % 2 == 0 {
                    heap.update(handle, value);
                } else if heap.remove(handle).is_some() {
                    handles.retain(|h| *h != handle);
                }

                heap.assert_invariant();
            }
        }
    }
}
