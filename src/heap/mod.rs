//! Indexed binary min-heap with decrease-key.
//!
//! A priority queue whose elements are lightweight handles into records
//! owned by the caller. Each record stores its own position inside the
//! heap, so an arbitrary element can be re-keyed or removed in O(log n)
//! without searching for it.
//!
//! # Key Components
//!
//! - [`SlotStore`]: the capability contract the record owner implements:
//!   key comparison plus reading and writing the recorded slot.
//! - [`IndexedMinHeap`]: the heap itself, storing handles only.
//! - [`KeyedSlots`]: a ready-made store of `(key, slot)` records.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! 3rd ed., ch. 6.5 (priority queues).

mod binary;
mod types;

pub use binary::IndexedMinHeap;
pub use types::{KeyedSlots, SlotStore};
