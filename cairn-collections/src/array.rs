//! Growable array with manual capacity management.
//!
//! Elements live in a single heap allocation that doubles in place
//! (`realloc`) whenever an insertion would overflow it. Every slot of the
//! allocation is zero-initialized, so the whole capacity can be viewed as a
//! slice while only `[0, len)` is meaningful.
//!
//! # Example
//!
//! ```
//! use cairn_collections::Array;
//!
//! let mut items = Array::with_capacity(2);
//! items.append(5);
//! items.append(7);
//! items.append(9); // grows to capacity 4
//!
//! assert_eq!(items.capacity(), 4);
//! assert_eq!(items.get(2), Ok(9));
//! assert_eq!(items.remove_at(1), Ok(7));
//! assert_eq!(items.as_slice(), &[5, 9]);
//! ```

use core::fmt;
use core::ptr::{self, NonNull};
use std::alloc::{Layout, alloc_zeroed, dealloc, handle_alloc_error, realloc};

use crate::{Error, Value};

/// A growable, contiguous array of [`Value`]s.
pub struct Array {
    /// Start of the allocation (dangling when `capacity == 0`).
    ptr: NonNull<Value>,
    len: usize,
    capacity: usize,
}

impl Array {
    /// Creates an empty array that has not allocated.
    ///
    /// The first insertion grows the capacity to 1.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            capacity: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` values.
    ///
    /// Aborts the process if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::new();
        }

        let layout = layout_for(capacity);
        // Safety: layout has non-zero size
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw as *mut Value) else {
            tracing::error!(capacity, "unable to allocate array");
            handle_alloc_error(layout);
        };

        Self {
            ptr,
            len: 0,
            capacity,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the next insertion has to grow the allocation.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Appends a value at the end.
    ///
    /// Amortized O(1).
    pub fn append(&mut self, value: Value) {
        if self.is_full() {
            self.grow();
        }

        let len = self.len;
        self.slots_mut()[len] = value;
        self.len += 1;
    }

    /// Inserts a value at the front, shifting every element one slot right.
    ///
    /// O(n).
    pub fn prepend(&mut self, value: Value) {
        self.insert_shifting(value, 0);
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`; the array is unchanged.
    pub fn insert_at(&mut self, value: Value, index: usize) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        self.insert_shifting(value, index);
        Ok(())
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<Value, Error> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(Error::out_of_range(index, self.len))
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes and returns the value at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`; the array is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Value, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        let slots = self.slots_mut();
        let value = slots[index];
        slots.copy_within(index + 1..len, index);
        self.len -= 1;
        Ok(value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    pub fn remove(&mut self, value: Value) -> Result<Value, Error> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index),
            None => Err(Error::NotFound(value)),
        }
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the array is empty.
    pub fn pop(&mut self) -> Result<Value, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }

        self.len -= 1;
        Ok(self.slots()[self.len])
    }

    /// Removes every element. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.slots()[..self.len]
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn insert_shifting(&mut self, value: Value, index: usize) {
        if self.is_full() {
            self.grow();
        }

        let len = self.len;
        let slots = self.slots_mut();
        slots.copy_within(index..len, index + 1);
        slots[index] = value;
        self.len += 1;
    }

    /// Doubles the capacity (0 grows to 1), preserving every element.
    ///
    /// Aborts the process if the allocator cannot satisfy the request.
    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity * 2
        };

        if self.capacity == 0 {
            *self = Self::with_capacity(new_capacity);
            tracing::debug!(new_capacity, "array allocated");
            return;
        }

        let old_layout = layout_for(self.capacity);
        let new_layout = layout_for(new_capacity);

        // Safety: ptr was allocated with old_layout; new size is non-zero
        let raw = unsafe { realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) };
        let Some(ptr) = NonNull::new(raw as *mut Value) else {
            tracing::error!(
                capacity = self.capacity,
                new_capacity,
                "unable to expand array"
            );
            handle_alloc_error(new_layout);
        };

        // Safety: [capacity, new_capacity) lies inside the new allocation
        unsafe {
            ptr::write_bytes(
                ptr.as_ptr().add(self.capacity),
                0,
                new_capacity - self.capacity,
            );
        }

        tracing::debug!(capacity = self.capacity, new_capacity, "array expanded");

        self.ptr = ptr;
        self.capacity = new_capacity;
    }

    /// Every allocated slot, including the unused tail.
    #[inline]
    fn slots(&self) -> &[Value] {
        // Safety: ptr is valid for `capacity` zero-initialized values, or
        // dangling and well aligned when capacity is 0
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [Value] {
        // Safety: see `slots`; &mut self guarantees exclusivity
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }
}

/// Layout of an allocation holding `capacity` values.
///
/// Aborts on overflow: there is no fallback for a capacity that cannot
/// be described.
fn layout_for(capacity: usize) -> Layout {
    match Layout::array::<Value>(capacity) {
        Ok(layout) => layout,
        Err(_) => {
            tracing::error!(capacity, "array capacity overflows the address space");
            crate::diagnostic::fatal("array capacity overflow")
        }
    }
}

impl Drop for Array {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // Safety: ptr was allocated with this layout
        unsafe {
            dealloc(self.ptr.as_ptr() as *mut u8, layout_for(self.capacity));
        }
    }
}

impl Clone for Array {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity);
        out.slots_mut()[..self.len].copy_from_slice(self.as_slice());
        out.len = self.len;
        out
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Array {}

impl Extend<Value> for Array {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        out.extend(iter);
        out
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Safety: Array owns its allocation exclusively
unsafe impl Send for Array {}
unsafe impl Sync for Array {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_array_is_empty() {
        let items = Array::with_capacity(4);
        assert!(items.is_empty());
        assert_eq!(items.len(), 0);
        assert_eq!(items.capacity(), 4);
        assert_eq!(items.get(0), Err(Error::out_of_range(0, 0)));
    }

    #[test]
    fn append_within_capacity() {
        let mut items = Array::with_capacity(4);
        items.append(1);
        items.append(2);
        items.append(3);

        assert_eq!(items.len(), 3);
        assert_eq!(items.capacity(), 4);
        assert_eq!(items.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn growth_doubles_and_preserves_contents() {
        let mut items = Array::with_capacity(2);
        for i in 0..9 {
            items.append(i * 10);
        }

        assert_eq!(items.capacity(), 16);
        for i in 0..9 {
            assert_eq!(items.get(i as usize), Ok(i * 10));
        }
    }

    #[test]
    fn zero_capacity_grows_to_one() {
        let mut items = Array::new();
        assert_eq!(items.capacity(), 0);
        assert_eq!(items.pop(), Err(Error::Empty));

        items.append(7);
        assert_eq!(items.capacity(), 1);
        items.append(8);
        assert_eq!(items.capacity(), 2);
        assert_eq!(items.as_slice(), &[7, 8]);
    }

    #[test]
    fn prepend_reverses_order() {
        let mut items = Array::with_capacity(2);
        items.prepend(5);
        items.prepend(7);
        items.prepend(9);

        assert_eq!(items.as_slice(), &[9, 7, 5]);
        assert_eq!(items.get(2), Ok(5));
        assert_eq!(items.get(0), Ok(9));
    }

    #[test]
    fn insert_at_middle_and_ends() {
        let mut items: Array = [1, 3].into_iter().collect();

        items.insert_at(2, 1).unwrap();
        items.insert_at(0, 0).unwrap();
        items.insert_at(4, 4).unwrap();

        assert_eq!(items.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_at_out_of_range_does_not_mutate() {
        let mut items: Array = [1, 2].into_iter().collect();
        let capacity = items.capacity();

        assert_eq!(items.insert_at(9, 3), Err(Error::out_of_range(3, 2)));
        assert_eq!(items.as_slice(), &[1, 2]);
        assert_eq!(items.capacity(), capacity);
    }

    #[test]
    fn insert_at_full_grows() {
        let mut items = Array::with_capacity(2);
        items.append(7);
        items.append(5);
        items.insert_at(3, 1).unwrap();

        assert_eq!(items.capacity(), 4);
        assert_eq!(items.as_slice(), &[7, 3, 5]);
    }

    #[test]
    fn remove_at_scenario() {
        let mut items = Array::with_capacity(2);
        items.append(5);
        items.append(7);
        items.append(9);
        assert_eq!(items.get(2), Ok(9));

        assert_eq!(items.remove_at(1), Ok(7));
        assert_eq!(items.len(), 2);

        items.append(11);
        assert_eq!(items.remove_at(1), Ok(9));
        assert_eq!(items.remove_at(9), Err(Error::out_of_range(9, 2)));
        assert_eq!(items.remove_at(0), Ok(5));
        assert_eq!(items.remove_at(0), Ok(11));
        assert!(items.is_empty());
    }

    #[test]
    fn remove_by_value() {
        let mut items: Array = [9, 7, 5, 7].into_iter().collect();

        assert_eq!(items.remove(7), Ok(7));
        assert_eq!(items.as_slice(), &[9, 5, 7]);
        assert_eq!(items.remove(42), Err(Error::NotFound(42)));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn index_of_returns_first_match() {
        let items: Array = [4, 8, 4].into_iter().collect();
        assert_eq!(items.index_of(4), Some(0));
        assert_eq!(items.index_of(8), Some(1));
        assert_eq!(items.index_of(5), None);
        assert!(items.contains(8));
    }

    #[test]
    fn pop_is_lifo() {
        let mut items: Array = [7, 3, 5].into_iter().collect();
        assert_eq!(items.pop(), Ok(5));
        assert_eq!(items.len(), 2);
        assert_eq!(items.pop(), Ok(3));
        assert_eq!(items.pop(), Ok(7));
        assert_eq!(items.pop(), Err(Error::Empty));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut items: Array = (0..10).collect();
        let capacity = items.capacity();
        items.clear();
        assert!(items.is_empty());
        assert_eq!(items.capacity(), capacity);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: Array = [1, 2, 3].into_iter().collect();
        let b = a.clone();
        a.append(4);

        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(a.len(), 4);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut items = Array::with_capacity(8);
        items.append(1);
        items.append(2);
        assert_eq!(format!("{items:?}"), "[1, 2]");
    }
}
