//! Capability traits shared by the containers.
//!
//! [`Sequence`] is read access by logical index and by value. [`SequenceMut`]
//! adds the uniform insertion/removal contract. Generic code written against
//! these traits works unchanged over [`Array`] and [`List`]:
//!
//! ```
//! use cairn_collections::{Array, List, SequenceMut};
//!
//! fn fill<S: SequenceMut>(seq: &mut S) {
//!     seq.append(2);
//!     seq.prepend(1);
//!     seq.insert_at(3, 2).unwrap();
//! }
//!
//! let mut array = Array::with_capacity(1);
//! let mut list: List = List::new();
//! fill(&mut array);
//! fill(&mut list);
//!
//! assert_eq!(array.as_slice(), &[1, 2, 3]);
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use crate::{Array, Error, Key, List, Node, RingBuffer, Storage, Value};

/// Read access to an ordered container of [`Value`]s.
pub trait Sequence {
    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn get(&self, index: usize) -> Result<Value, Error>;

    /// Returns the logical index of the first element equal to `value`.
    fn index_of(&self, value: Value) -> Option<usize>;

    /// Returns `true` if some element equals `value`.
    #[inline]
    fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }
}

/// The uniform insertion/removal contract.
///
/// Every fallible operation leaves the container unchanged on failure.
pub trait SequenceMut: Sequence {
    /// Adds a value after the last element.
    fn append(&mut self, value: Value);

    /// Adds a value before the first element.
    fn prepend(&mut self, value: Value);

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`.
    fn insert_at(&mut self, value: Value, index: usize) -> Result<(), Error>;

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<Value, Error>;

    /// Removes the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    fn remove(&mut self, value: Value) -> Result<Value, Error> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index),
            None => Err(Error::NotFound(value)),
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if there are no elements.
    fn pop(&mut self) -> Result<Value, Error>;
}

// =============================================================================
// Array
// =============================================================================

impl Sequence for Array {
    #[inline]
    fn len(&self) -> usize {
        Array::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Value, Error> {
        Array::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: Value) -> Option<usize> {
        Array::index_of(self, value)
    }
}

impl SequenceMut for Array {
    #[inline]
    fn append(&mut self, value: Value) {
        Array::append(self, value);
    }

    #[inline]
    fn prepend(&mut self, value: Value) {
        Array::prepend(self, value);
    }

    #[inline]
    fn insert_at(&mut self, value: Value, index: usize) -> Result<(), Error> {
        Array::insert_at(self, value, index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<Value, Error> {
        Array::remove_at(self, index)
    }

    #[inline]
    fn remove(&mut self, value: Value) -> Result<Value, Error> {
        Array::remove(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Result<Value, Error> {
        Array::pop(self)
    }
}

// =============================================================================
// List
// =============================================================================

impl<S, K: Key> Sequence for List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn len(&self) -> usize {
        List::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Value, Error> {
        List::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: Value) -> Option<usize> {
        List::index_of(self, value)
    }
}

impl<S, K: Key> SequenceMut for List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn append(&mut self, value: Value) {
        List::append(self, value);
    }

    #[inline]
    fn prepend(&mut self, value: Value) {
        List::prepend(self, value);
    }

    #[inline]
    fn insert_at(&mut self, value: Value, index: usize) -> Result<(), Error> {
        List::insert_at(self, value, index).map(|_| ())
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<Value, Error> {
        List::remove_at(self, index)
    }

    // Single walk instead of index_of + remove_at
    #[inline]
    fn remove(&mut self, value: Value) -> Result<Value, Error> {
        List::remove(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Result<Value, Error> {
        List::pop(self)
    }
}

// =============================================================================
// RingBuffer
// =============================================================================

impl Sequence for RingBuffer {
    #[inline]
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Value, Error> {
        RingBuffer::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: Value) -> Option<usize> {
        RingBuffer::index_of(self, value)
    }
}
