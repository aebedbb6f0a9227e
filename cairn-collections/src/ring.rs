//! Fixed-capacity ring buffer usable as both a stack and a queue.
//!
//! Values are written at `tail` and read either back from `tail` ([`pop`],
//! LIFO) or from `head` ([`deque`], FIFO). The live elements always occupy
//! the modular range `[head, head + len)`, so mixing both removal styles is
//! legal.
//!
//! The capacity is fixed at construction. Pushing into a full buffer is
//! rejected with [`Full`], handing the value back; nothing is overwritten
//! and the buffer never grows.
//!
//! # Example
//!
//! ```
//! use cairn_collections::RingBuffer;
//!
//! let mut buffer = RingBuffer::with_capacity(5);
//! buffer.push(42).unwrap();
//! buffer.push(9).unwrap();
//! buffer.push(12).unwrap();
//!
//! assert_eq!(buffer.get(0), Ok(42)); // oldest
//! assert_eq!(buffer.pop(), Ok(12)); // newest
//! assert_eq!(buffer.deque(), Ok(42)); // oldest
//! assert_eq!(buffer.len(), 1);
//! ```
//!
//! [`pop`]: RingBuffer::pop
//! [`deque`]: RingBuffer::deque

use core::fmt;

use crate::{Error, Full, Value};

/// A fixed-capacity circular buffer of [`Value`]s.
#[derive(Clone)]
pub struct RingBuffer {
    buffer: Box<[Value]>,
    /// Slot of the oldest element.
    head: usize,
    /// Slot the next push writes to.
    tail: usize,
    len: usize,
}

impl RingBuffer {
    /// Creates an empty buffer holding at most `capacity` values.
    ///
    /// A zero-capacity buffer is always both empty and full: every push is
    /// rejected and every removal reports [`Error::Empty`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if a push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Pushes a value as the newest element.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the buffer is full; the buffer is
    /// unchanged.
    #[inline]
    pub fn push(&mut self, value: Value) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full(value));
        }

        self.buffer[self.tail] = value;
        self.tail = self.wrap_add(self.tail, 1);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the newest element (stack order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<Value, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let index = self.wrap_sub(self.tail, 1);
        self.tail = index;
        self.len -= 1;
        Ok(self.buffer[index])
    }

    /// Removes and returns the oldest element (queue order).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer is empty.
    #[inline]
    pub fn deque(&mut self) -> Result<Value, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        let value = self.buffer[self.head];
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns the element at logical `index`, where 0 is the oldest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<Value, Error> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        Ok(self.buffer[self.wrap_add(self.head, index)])
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn front(&self) -> Option<Value> {
        self.get(0).ok()
    }

    /// Returns the newest element without removing it.
    #[inline]
    pub fn back(&self) -> Option<Value> {
        self.len.checked_sub(1).and_then(|last| self.get(last).ok())
    }

    /// Returns the logical index of the oldest element equal to `value`.
    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Removes every element and resets both cursors.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns an iterator from the oldest to the newest element.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    /// `(slot + n) mod capacity` for `n <= capacity`. Capacity is non-zero
    /// whenever a push or removal gets this far.
    #[inline]
    fn wrap_add(&self, slot: usize, n: usize) -> usize {
        (slot + n) % self.buffer.len()
    }

    /// `(slot - n) mod capacity` for `n <= capacity`, never negative.
    #[inline]
    fn wrap_sub(&self, slot: usize, n: usize) -> usize {
        let capacity = self.buffer.len();
        (slot + capacity - n) % capacity
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over the live elements of a [`RingBuffer`], oldest first.
pub struct Iter<'a> {
    ring: &'a RingBuffer,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        if self.front == self.back {
            return None;
        }

        let value = self.ring.get(self.front).ok();
        self.front += 1;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Value> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        self.ring.get(self.back).ok()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RingBuffer {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let buffer = RingBuffer::with_capacity(5);
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.capacity(), 5);
        assert_eq!(buffer.front(), None);
        assert_eq!(buffer.back(), None);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut buffer = RingBuffer::with_capacity(0);
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.is_empty());
        assert!(buffer.is_full());

        assert_eq!(buffer.push(7), Err(Full(7)));
        assert_eq!(buffer.pop(), Err(Error::Empty));
        assert_eq!(buffer.deque(), Err(Error::Empty));
        assert_eq!(buffer.get(0), Err(Error::out_of_range(0, 0)));
        assert_eq!(buffer.front(), None);
        assert_eq!(buffer.back(), None);
        assert_eq!(buffer.iter().count(), 0);
        assert_eq!(buffer.len(), 0);

        buffer.clear();
        assert_eq!(buffer.push(8), Err(Full(8)));
    }

    #[test]
    fn push_then_pop_is_noop_on_len() {
        let mut buffer = RingBuffer::with_capacity(5);
        buffer.push(1).unwrap();
        let len = buffer.len();

        buffer.push(5).unwrap();
        assert_eq!(buffer.pop(), Ok(5));
        assert_eq!(buffer.len(), len);
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut buffer = RingBuffer::with_capacity(5);
        buffer.push(5).unwrap();
        assert_eq!(buffer.pop(), Ok(5));
        assert_eq!(buffer.pop(), Err(Error::Empty));
        assert_eq!(buffer.deque(), Err(Error::Empty));
    }

    #[test]
    fn pop_wraps_below_slot_zero() {
        let mut buffer = RingBuffer::with_capacity(3);
        buffer.push(1).unwrap();
        buffer.push(2).unwrap();
        buffer.push(3).unwrap();
        // tail wrapped to slot 0
        assert_eq!(buffer.pop(), Ok(3));
        assert_eq!(buffer.pop(), Ok(2));
        assert_eq!(buffer.pop(), Ok(1));
        assert_eq!(buffer.pop(), Err(Error::Empty));
    }

    #[test]
    fn get_by_logical_index() {
        let mut buffer = RingBuffer::with_capacity(5);
        buffer.push(42).unwrap();
        buffer.push(9).unwrap();
        buffer.push(12).unwrap();

        assert_eq!(buffer.get(2), Ok(12));
        assert_eq!(buffer.get(1), Ok(9));
        assert_eq!(buffer.get(0), Ok(42));
        assert_eq!(buffer.get(3), Err(Error::out_of_range(3, 3)));

        assert_eq!(buffer.pop(), Ok(12));
        assert_eq!(buffer.pop(), Ok(9));
        assert_eq!(buffer.pop(), Ok(42));
    }

    #[test]
    fn deque_is_fifo() {
        let mut buffer = RingBuffer::with_capacity(5);
        buffer.push(22).unwrap();
        buffer.push(33).unwrap();
        buffer.push(44).unwrap();

        assert_eq!(buffer.deque(), Ok(22));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.deque(), Ok(33));

        buffer.push(55).unwrap();
        assert_eq!(buffer.pop(), Ok(55));
        assert_eq!(buffer.pop(), Ok(44));
        assert!(buffer.is_empty());
    }

    #[test]
    fn full_rejects_push_without_mutation() {
        let mut buffer = RingBuffer::with_capacity(2);
        buffer.push(1).unwrap();
        buffer.push(2).unwrap();
        assert!(buffer.is_full());

        assert_eq!(buffer.push(3), Err(Full(3)));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn wrap_around_keeps_logical_order() {
        let mut buffer = RingBuffer::with_capacity(5);
        for v in [1, 2, 3] {
            buffer.push(v).unwrap();
        }
        assert_eq!(buffer.pop(), Ok(3));
        assert_eq!(buffer.pop(), Ok(2));
        buffer.push(4).unwrap();
        buffer.push(5).unwrap();
        assert_eq!(buffer.deque(), Ok(1));
        assert_eq!(buffer.deque(), Ok(4));

        // head now at slot 2; push across the end of storage
        for v in [6, 7, 8, 9] {
            buffer.push(v).unwrap();
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
        for (i, expected) in [5, 6, 7, 8, 9].into_iter().enumerate() {
            assert_eq!(buffer.get(i), Ok(expected));
        }
        assert_eq!(buffer.front(), Some(5));
        assert_eq!(buffer.back(), Some(9));
        assert_eq!(buffer.index_of(8), Some(3));
    }

    #[test]
    fn iter_rev() {
        let mut buffer = RingBuffer::with_capacity(4);
        for v in 0..4 {
            buffer.push(v).unwrap();
        }
        buffer.deque().unwrap();
        buffer.push(4).unwrap();

        assert_eq!(buffer.iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(buffer.iter().len(), 4);
    }

    #[test]
    fn clear_resets() {
        let mut buffer = RingBuffer::with_capacity(3);
        buffer.push(1).unwrap();
        buffer.push(2).unwrap();
        buffer.deque().unwrap();
        buffer.clear();

        assert!(buffer.is_empty());
        buffer.push(9).unwrap();
        assert_eq!(buffer.get(0), Ok(9));
    }
}
