//! Doubly-linked list over arena storage.
//!
//! The list owns a [`Storage`] holding its nodes and links them by key.
//! `next` is the forward edge, `prev` the back-reference; neither owns
//! anything, the storage does. Removing a node unlinks it, clears both of
//! its links and releases its slot, whatever the list size.
//!
//! Positional access walks from the head and is O(n). Access through a
//! node key (returned by every insertion) is O(1).
//!
//! # Example
//!
//! ```
//! use cairn_collections::List;
//!
//! let mut list: List = List::new();
//!
//! list.append(5);
//! let seven = list.append(7);
//! list.append(9);
//!
//! assert_eq!(list.get(2), Ok(9));
//! assert_eq!(list.index_of(7), Some(1));
//!
//! // O(1) removal through the key
//! assert_eq!(list.remove_node(seven), Some(7));
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![5, 9]);
//! ```
//!
//! # Storage Backends
//!
//! The default backend is [`NodeArena`]. With the `slab` feature enabled,
//! `SlabList` keeps nodes in a `slab::Slab` instead.

use core::fmt;

use crate::{Arena, Error, Key, Storage, Value};

/// Default node storage for [`List`].
pub type NodeArena<K = u32> = Arena<Node<K>, K>;

/// A list whose nodes live in a `slab::Slab`.
#[cfg(feature = "slab")]
pub type SlabList = List<slab::Slab<Node<usize>>, usize>;

/// A node in the linked list.
///
/// Users interact with values through the list; the node structure is an
/// implementation detail exposed only so storage types can be named.
#[derive(Debug, Clone)]
pub struct Node<K: Key = u32> {
    value: Value,
    prev: K,
    next: K,
}

impl<K: Key> Node<K> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(value: Value) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }

    /// Returns the node's value.
    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }
}

/// A doubly-linked list of [`Value`]s.
///
/// # Type Parameters
///
/// - `S`: Node storage (default [`NodeArena`])
/// - `K`: Key type (default `u32`)
#[derive(Clone)]
pub struct List<S = NodeArena, K: Key = u32>
where
    S: Storage<Node<K>, Key = K>,
{
    storage: S,
    head: K,
    tail: K,
    len: usize,
}

impl<S, K: Key> Default for List<S, K>
where
    S: Storage<Node<K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K: Key> List<S, K>
where
    S: Storage<Node<K>, Key = K> + Default,
{
    /// Creates an empty list with fresh storage.
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }
}

impl<S, K: Key> List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    /// Creates an empty list on top of the given storage.
    ///
    /// Any values already in `storage` are discarded.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            storage,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node storage.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head_key(&self) -> Option<K> {
        some_key(self.head)
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn tail_key(&self) -> Option<K> {
        some_key(self.tail)
    }

    /// Returns the key of the node after `key`.
    #[inline]
    pub fn next_key(&self, key: K) -> Option<K> {
        some_key(self.next_of(key))
    }

    /// Returns the key of the node before `key`.
    #[inline]
    pub fn prev_key(&self, key: K) -> Option<K> {
        some_key(self.prev_of(key))
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value at the tail. O(1).
    ///
    /// Returns the key of the new node.
    pub fn append(&mut self, value: Value) -> K {
        let key = self.storage.insert(Node::new(value));
        self.link_back(key);
        key
    }

    /// Prepends a value at the head. O(1).
    ///
    /// Returns the key of the new node.
    pub fn prepend(&mut self, value: Value) -> K {
        let key = self.storage.insert(Node::new(value));
        self.link_front(key);
        key
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Returns the key of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`; the list is unchanged.
    pub fn insert_at(&mut self, value: Value, index: usize) -> Result<K, Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        if index == self.len {
            return Ok(self.append(value));
        }
        if index == 0 {
            return Ok(self.prepend(value));
        }

        let before = self.get_at(index)?;
        let key = self.storage.insert(Node::new(value));
        self.link_before(before, key);
        Ok(key)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the key of the node at position `index`, walking from the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the walk runs past the tail.
    pub fn get_at(&self, index: usize) -> Result<K, Error> {
        let mut key = self.head;
        for _ in 0..index {
            if key.is_none() {
                break;
            }
            key = self.next_of(key);
        }

        some_key(key).ok_or(Error::out_of_range(index, self.len))
    }

    /// Returns the value at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<Value, Error> {
        let key = self.get_at(index)?;
        self.value(key).ok_or(Error::out_of_range(index, self.len))
    }

    /// Returns the value of the node named by `key`. O(1).
    #[inline]
    pub fn value(&self, key: K) -> Option<Value> {
        self.storage.get(key).map(Node::value)
    }

    /// Returns the head value.
    #[inline]
    pub fn front(&self) -> Option<Value> {
        self.value(self.head)
    }

    /// Returns the tail value.
    #[inline]
    pub fn back(&self) -> Option<Value> {
        self.value(self.tail)
    }

    /// Returns the position of the first node holding `value`.
    pub fn index_of(&self, value: Value) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if some node holds `value`.
    #[inline]
    pub fn contains(&self, value: Value) -> bool {
        self.index_of(value).is_some()
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the node named by `key` and returns its value. O(1).
    ///
    /// Returns `None` if `key` does not name a live node.
    pub fn remove_node(&mut self, key: K) -> Option<Value> {
        self.storage.get(key)?;
        let linked = self.unlink(key);
        debug_assert!(linked, "live node outside the chain");
        self.storage.remove(key).map(|node| node.value)
    }

    /// Removes and returns the value at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Value, Error> {
        let len = self.len;
        let key = self.get_at(index)?;
        self.remove_node(key).ok_or(Error::out_of_range(index, len))
    }

    /// Removes the first node holding `value` and returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no node holds `value`.
    pub fn remove(&mut self, value: Value) -> Result<Value, Error> {
        let key = self
            .keys()
            .find(|&key| self.value(key) == Some(value))
            .ok_or(Error::NotFound(value))?;

        self.remove_node(key).ok_or(Error::NotFound(value))
    }

    /// Removes and returns the tail value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop(&mut self) -> Result<Value, Error> {
        self.remove_node(self.tail).ok_or(Error::Empty)
    }

    /// Removes and returns the head value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<Value, Error> {
        self.remove_node(self.head).ok_or(Error::Empty)
    }

    /// Removes every node, releasing all storage slots.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over values from head to tail.
    pub fn iter(&self) -> Iter<'_, S, K> {
        Iter { keys: self.keys() }
    }

    /// Returns an iterator over node keys from head to tail.
    pub fn keys(&self) -> Keys<'_, S, K> {
        Keys {
            storage: &self.storage,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Linking (no alloc/dealloc)
    // ========================================================================

    fn link_back(&mut self, key: K) {
        let tail = self.tail;
        if let Some(node) = self.storage.get_mut(key) {
            node.prev = tail;
            node.next = K::NONE;
        }

        if tail.is_some() {
            self.set_next(tail, key);
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_front(&mut self, key: K) {
        let head = self.head;
        if let Some(node) = self.storage.get_mut(key) {
            node.next = head;
            node.prev = K::NONE;
        }

        if head.is_some() {
            self.set_prev(head, key);
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    fn link_before(&mut self, before: K, key: K) {
        let prev = self.prev_of(before);
        if let Some(node) = self.storage.get_mut(key) {
            node.next = before;
            node.prev = prev;
        }

        self.set_prev(before, key);

        if prev.is_some() {
            self.set_next(prev, key);
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Detaches a node from its neighbours and clears its links.
    ///
    /// Returns `true` if the node was in the list.
    fn unlink(&mut self, key: K) -> bool {
        let Some(node) = self.storage.get(key) else {
            return false;
        };
        let prev = node.prev;
        let next = node.next;

        let in_list = prev.is_some() || next.is_some() || self.head == key;
        if !in_list {
            return false;
        }

        if prev.is_some() {
            self.set_next(prev, next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.set_prev(next, prev);
        } else {
            self.tail = prev;
        }

        if let Some(node) = self.storage.get_mut(key) {
            node.prev = K::NONE;
            node.next = K::NONE;
        }

        self.len -= 1;
        true
    }

    #[inline]
    fn next_of(&self, key: K) -> K {
        self.storage.get(key).map_or(K::NONE, |node| node.next)
    }

    #[inline]
    fn prev_of(&self, key: K) -> K {
        self.storage.get(key).map_or(K::NONE, |node| node.prev)
    }

    #[inline]
    fn set_next(&mut self, key: K, next: K) {
        if let Some(node) = self.storage.get_mut(key) {
            node.next = next;
        }
    }

    #[inline]
    fn set_prev(&mut self, key: K, prev: K) {
        if let Some(node) = self.storage.get_mut(key) {
            node.prev = prev;
        }
    }
}

#[inline]
fn some_key<K: Key>(key: K) -> Option<K> {
    if key.is_none() { None } else { Some(key) }
}

impl<S, K: Key> fmt::Debug for List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S, K: Key> Extend<Value> for List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<S, K: Key> FromIterator<Value> for List<S, K>
where
    S: Storage<Node<K>, Key = K> + Default,
{
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, S, K: Key> IntoIterator for &'a List<S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    type Item = Value;
    type IntoIter = Iter<'a, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over node keys, head to tail.
pub struct Keys<'a, S, K: Key> {
    storage: &'a S,
    front: K,
    back: K,
    remaining: usize,
}

impl<S, K: Key> Iterator for Keys<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.front;
        let node = self.storage.get(key)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S, K: Key> DoubleEndedIterator for Keys<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<K> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.back;
        let node = self.storage.get(key)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(key)
    }
}

impl<S, K: Key> ExactSizeIterator for Keys<'_, S, K> where S: Storage<Node<K>, Key = K> {}

/// Iterator over values, head to tail.
pub struct Iter<'a, S, K: Key> {
    keys: Keys<'a, S, K>,
}

impl<S, K: Key> Iterator for Iter<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    type Item = Value;

    #[inline]
    fn next(&mut self) -> Option<Value> {
        let key = self.keys.next()?;
        self.keys.storage.get(key).map(Node::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<S, K: Key> DoubleEndedIterator for Iter<'_, S, K>
where
    S: Storage<Node<K>, Key = K>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Value> {
        let key = self.keys.next_back()?;
        self.keys.storage.get(key).map(Node::value)
    }
}

impl<S, K: Key> ExactSizeIterator for Iter<'_, S, K> where S: Storage<Node<K>, Key = K> {}
