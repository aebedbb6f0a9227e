//! Storage trait for slab-like containers with stable keys.
//!
//! Storage provides insert/remove/get operations where keys remain valid
//! until explicitly removed. The linked list keeps its nodes in a storage
//! and links them by key, so a node is never referenced by pointer and a
//! removed node can never be reached through a stale link.

use core::marker::PhantomData;
use core::mem;

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// # Implementations
///
/// - [`Arena<T>`] - growable slot vector with an intrusive free list (in this crate)
/// - `slab::Slab<T>` - growable, heap allocated (feature `slab`)
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    ///
    /// Storage grows as needed; running out of memory aborts.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value.
    fn clear(&mut self);
}

// =============================================================================
// Arena - growable slot vector, intrusive free list
// =============================================================================

/// End-of-free-list marker.
const FREE_NONE: usize = usize::MAX;

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    Vacant { next_free: usize },
}

/// Growable storage with stable keys.
///
/// Slots live in a single `Vec`. Vacated slots form a LIFO free list
/// threaded through the vacant entries, so the most recently freed slot is
/// reused first.
///
/// # Example
///
/// ```
/// use cairn_collections::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::new();
/// let key = arena.insert(42);
/// assert_eq!(arena.get(key), Some(&42));
/// assert_eq!(arena.remove(key), Some(42));
/// assert_eq!(arena.get(key), None);
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, K: Key = u32> {
    entries: Vec<Entry<T>>,
    free_head: usize,
    len: usize,
    _marker: PhantomData<K>,
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: FREE_NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty arena with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: FREE_NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of slots that can be held without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Storage<T> for Arena<T, K> {
    type Key = K;

    fn insert(&mut self, value: T) -> K {
        let index = self.free_head;
        if let Some(Entry::Vacant { next_free }) = self.entries.get(index) {
            self.free_head = *next_free;
            self.entries[index] = Entry::Occupied(value);
            self.len += 1;
            return K::from_usize(index);
        }

        let index = self.entries.len();
        assert!(index < K::NONE.as_usize(), "arena exhausted its key space");
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        K::from_usize(index)
    }

    fn remove(&mut self, key: K) -> Option<T> {
        let index = key.as_usize();
        let entry = match self.entries.get_mut(index) {
            Some(entry @ Entry::Occupied(_)) => entry,
            _ => return None,
        };

        let removed = mem::replace(
            entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = index;
        self.len -= 1;

        match removed {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.entries.get(key.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.entries.get_mut(key.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.free_head = FREE_NONE;
        self.len = 0;
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    fn clear(&mut self) {
        slab::Slab::clear(self);
    }
}
