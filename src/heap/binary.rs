//! Binary heap over self-positioning handles.

use super::types::SlotStore;
use std::cmp::Ordering;

#[inline]
fn left(slot: usize) -> usize {
    2 * slot + 1
}

#[inline]
fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

/// Binary min-heap whose elements record their own position.
///
/// The heap stores handles only. Keys and slots live in a [`SlotStore`]
/// passed to every operation, which keeps the heap free of borrows into
/// the store and lets the store relocate its records between calls.
///
/// Ties are resolved conservatively: an element only moves above its
/// parent when strictly smaller, and when both children are candidates the
/// right child is taken only if strictly smaller than the left one.
///
/// Out-of-range slots and `extract_min` on an empty heap are caller errors;
/// they are checked with `debug_assert!` and otherwise panic on indexing.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<H> {
    heap: Vec<H>,
}

impl<H> Default for IndexedMinHeap<H> {
    fn default() -> Self {
        Self { heap: Vec::new() }
    }
}

impl<H: Copy> IndexedMinHeap<H> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Handle with the minimum key, if any.
    pub fn peek(&self) -> Option<H> {
        self.heap.first().copied()
    }

    /// Handle stored at `slot`.
    pub fn handle_at(&self, slot: usize) -> H {
        self.heap[slot]
    }

    /// Handles in backing-storage order.
    pub fn as_slice(&self) -> &[H] {
        &self.heap
    }

    /// Empties the heap, marking every queued element as not queued.
    ///
    /// The backing storage keeps its capacity.
    pub fn reset<S>(&mut self, store: &mut S)
    where
        S: SlotStore<Handle = H>,
    {
        for &h in &self.heap {
            store.set_slot(h, None);
        }
        self.heap.clear();
    }

    /// Queues `h`, which must not already be queued.
    pub fn insert<S>(&mut self, store: &mut S, h: H)
    where
        S: SlotStore<Handle = H>,
    {
        debug_assert!(store.slot(h).is_none(), "element is already queued");

        let slot = self.heap.len();
        self.heap.push(h);
        store.set_slot(h, Some(slot));
        self.sift_up(store, slot);

        debug_assert!(self.is_valid(store));
    }

    /// Removes and returns the element with the minimum key.
    ///
    /// The heap must not be empty.
    pub fn extract_min<S>(&mut self, store: &mut S) -> H
    where
        S: SlotStore<Handle = H>,
    {
        debug_assert!(!self.heap.is_empty(), "extract_min on an empty heap");

        let min = self.heap.swap_remove(0);
        store.set_slot(min, None);
        if let Some(&moved) = self.heap.first() {
            store.set_slot(moved, Some(0));
            self.sift_down(store, 0);
        }

        debug_assert!(self.is_valid(store));
        min
    }

    /// Removes and returns the minimum element, or `None` when empty.
    pub fn pop<S>(&mut self, store: &mut S) -> Option<H>
    where
        S: SlotStore<Handle = H>,
    {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.extract_min(store))
        }
    }

    /// Re-keys the element at `slot` and restores heap order.
    ///
    /// `mutate` applies the new key to the record behind the handle and
    /// returns `old_key.cmp(&new_key)`: `Greater` means the key decreased
    /// and the element sifts up, `Less` means it increased and the element
    /// sifts down, `Equal` leaves it in place.
    pub fn update<S, F>(&mut self, store: &mut S, slot: usize, mutate: F)
    where
        S: SlotStore<Handle = H>,
        F: FnOnce(&mut S, H) -> Ordering,
    {
        debug_assert!(slot < self.heap.len(), "slot {slot} out of range");

        let h = self.heap[slot];
        match mutate(store, h) {
            Ordering::Greater => self.sift_up(store, slot),
            Ordering::Less => self.sift_down(store, slot),
            Ordering::Equal => {}
        }

        debug_assert!(self.is_valid(store));
    }

    /// Removes and returns the element at `slot`.
    ///
    /// The last element fills the hole and moves in whichever direction
    /// its key requires.
    pub fn remove<S>(&mut self, store: &mut S, slot: usize) -> H
    where
        S: SlotStore<Handle = H>,
    {
        debug_assert!(slot < self.heap.len(), "slot {slot} out of range");

        let removed = self.heap.swap_remove(slot);
        store.set_slot(removed, None);
        if slot < self.heap.len() {
            let moved = self.heap[slot];
            store.set_slot(moved, Some(slot));
            match store.compare(removed, moved) {
                Ordering::Greater => self.sift_up(store, slot),
                Ordering::Less => self.sift_down(store, slot),
                Ordering::Equal => {}
            }
        }

        debug_assert!(self.is_valid(store));
        removed
    }

    /// Puts `h` at `slot` in place of the current element and returns the
    /// evicted handle, which is no longer queued.
    pub fn replace<S>(&mut self, store: &mut S, slot: usize, h: H) -> H
    where
        S: SlotStore<Handle = H>,
    {
        debug_assert!(slot < self.heap.len(), "slot {slot} out of range");
        debug_assert!(store.slot(h).is_none(), "element is already queued");

        let old = self.heap[slot];
        let ord = store.compare(old, h);
        store.set_slot(old, None);
        self.heap[slot] = h;
        store.set_slot(h, Some(slot));
        match ord {
            Ordering::Greater => self.sift_up(store, slot),
            Ordering::Less => self.sift_down(store, slot),
            Ordering::Equal => {}
        }

        debug_assert!(self.is_valid(store));
        old
    }

    /// Checks that every element records its true position and that no
    /// child is smaller than its parent.
    pub fn is_valid<S>(&self, store: &S) -> bool
    where
        S: SlotStore<Handle = H>,
    {
        let positions_ok = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, &h)| store.slot(h) == Some(slot));
        let order_ok = (1..self.heap.len())
            .all(|i| store.compare(self.heap[i], self.heap[parent(i)]) != Ordering::Less);
        positions_ok && order_ok
    }

    /// Moves the element at `slot` towards the root while it is strictly
    /// smaller than its parent.
    fn sift_up<S>(&mut self, store: &mut S, mut slot: usize)
    where
        S: SlotStore<Handle = H>,
    {
        let elem = self.heap[slot];
        while slot > 0 {
            let p = parent(slot);
            let above = self.heap[p];
            if store.compare(elem, above) != Ordering::Less {
                break;
            }
            self.heap[slot] = above;
            store.set_slot(above, Some(slot));
            slot = p;
        }
        self.heap[slot] = elem;
        store.set_slot(elem, Some(slot));
    }

    /// Moves the element at `slot` towards the leaves while a child is
    /// strictly smaller.
    fn sift_down<S>(&mut self, store: &mut S, mut slot: usize)
    where
        S: SlotStore<Handle = H>,
    {
        let elem = self.heap[slot];
        while let Some(child) = self.smaller_child(store, elem, slot) {
            let below = self.heap[child];
            self.heap[slot] = below;
            store.set_slot(below, Some(slot));
            slot = child;
        }
        self.heap[slot] = elem;
        store.set_slot(elem, Some(slot));
    }

    /// Position of the smaller child of `slot` if it is strictly smaller
    /// than `elem`. The left child wins ties.
    fn smaller_child<S>(&self, store: &S, elem: H, slot: usize) -> Option<usize>
    where
        S: SlotStore<Handle = H>,
    {
        let len = self.heap.len();
        let l = left(slot);
        if l >= len {
            return None;
        }
        let r = l + 1;
        let mut smallest = l;
        if r < len && store.compare(self.heap[r], self.heap[l]) == Ordering::Less {
            smallest = r;
        }
        (store.compare(self.heap[smallest], elem) == Ordering::Less).then_some(smallest)
    }
}
