//! Capability contract between the heap and the records it orders.

use std::cmp::Ordering;

/// Owner of the records referenced by an [`IndexedMinHeap`](super::IndexedMinHeap).
///
/// The heap never copies records: it stores [`Handle`](SlotStore::Handle)s and
/// asks the store to compare keys and to read or write the slot each record
/// keeps for itself. A slot of `None` means the record is not queued.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_shortpath::heap::{IndexedMinHeap, SlotStore};
///
/// struct Jobs {
///     priority: Vec<u32>,
///     slot: Vec<Option<usize>>,
/// }
///
/// impl SlotStore for Jobs {
///     type Handle = usize;
///
///     fn compare(&self, a: usize, b: usize) -> Ordering {
///         self.priority[a].cmp(&self.priority[b])
///     }
///
///     fn slot(&self, h: usize) -> Option<usize> {
///         self.slot[h]
///     }
///
///     fn set_slot(&mut self, h: usize, slot: Option<usize>) {
///         self.slot[h] = slot;
///     }
/// }
///
/// let mut jobs = Jobs { priority: vec![5, 2, 9], slot: vec![None; 3] };
/// let mut heap = IndexedMinHeap::new();
/// for job in 0..3 {
///     heap.insert(&mut jobs, job);
/// }
/// assert_eq!(heap.extract_min(&mut jobs), 1);
/// assert_eq!(jobs.slot[1], None);
/// ```
pub trait SlotStore {
    /// Reference to a record, typically an index into an arena.
    type Handle: Copy;

    /// Three-way comparison of the keys of two records.
    fn compare(&self, a: Self::Handle, b: Self::Handle) -> Ordering;

    /// Current heap position of a record, `None` when not queued.
    fn slot(&self, h: Self::Handle) -> Option<usize>;

    /// Records the heap position of a record.
    fn set_slot(&mut self, h: Self::Handle, slot: Option<usize>);
}

/// A growable table of `(key, slot)` records addressed by `usize` handles.
///
/// Useful when the keys themselves are the only payload. Keys only need
/// `PartialOrd`; incomparable pairs (e.g. NaN) compare as equal.
///
/// # Examples
///
/// ```
/// use u_shortpath::heap::{IndexedMinHeap, KeyedSlots};
///
/// let mut keys = KeyedSlots::new();
/// let a = keys.push(4.0);
/// let b = keys.push(7.0);
///
/// let mut heap = IndexedMinHeap::new();
/// heap.insert(&mut keys, a);
/// heap.insert(&mut keys, b);
///
/// let slot = keys.slot_of(b).unwrap();
/// heap.update(&mut keys, slot, |keys, h| keys.set_key(h, 1.0));
/// assert_eq!(heap.peek(), Some(b));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyedSlots<K> {
    keys: Vec<K>,
    slots: Vec<Option<usize>>,
}

impl<K: PartialOrd> KeyedSlots<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Appends a record and returns its handle.
    pub fn push(&mut self, key: K) -> usize {
        self.keys.push(key);
        self.slots.push(None);
        self.keys.len() - 1
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key of a record.
    pub fn key(&self, h: usize) -> &K {
        &self.keys[h]
    }

    /// Heap slot of a record.
    pub fn slot_of(&self, h: usize) -> Option<usize> {
        self.slots[h]
    }

    /// Overwrites the key of a record and returns `old.cmp(new)`.
    ///
    /// The result is what [`IndexedMinHeap::update`](super::IndexedMinHeap::update)
    /// expects from its mutation: `Greater` when the key decreased.
    pub fn set_key(&mut self, h: usize, key: K) -> Ordering {
        let ord = self.keys[h].partial_cmp(&key).unwrap_or(Ordering::Equal);
        self.keys[h] = key;
        ord
    }
}

impl<K: PartialOrd> SlotStore for KeyedSlots<K> {
    type Handle = usize;

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.keys[a]
            .partial_cmp(&self.keys[b])
            .unwrap_or(Ordering::Equal)
    }

    fn slot(&self, h: usize) -> Option<usize> {
        self.slots[h]
    }

    fn set_slot(&mut self, h: usize, slot: Option<usize>) {
        self.slots[h] = slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_key_reports_direction() {
        let mut keys = KeyedSlots::new();
        let h = keys.push(10);
        assert_eq!(keys.set_key(h, 3), Ordering::Greater);
        assert_eq!(keys.set_key(h, 8), Ordering::Less);
        assert_eq!(keys.set_key(h, 8), Ordering::Equal);
        assert_eq!(*keys.key(h), 8);
    }

    #[test]
    fn test_nan_compares_equal() {
        let mut keys = KeyedSlots::new();
        let a = keys.push(f64::NAN);
        let b = keys.push(1.0);
        assert_eq!(keys.compare(a, b), Ordering::Equal);
    }

    #[test]
    fn test_new_records_are_not_queued() {
        let mut keys = KeyedSlots::new();
        assert!(keys.is_empty());
        let h = keys.push(1u8);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys.slot_of(h), None);
    }
}
