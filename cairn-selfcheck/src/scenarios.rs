//! Reference scenarios, one per suite.
//!
//! Each scenario terminates the process through `verify!` on the first
//! failed check, so returning at all means the suite passed.

use cairn_collections::{Array, Error, List, RingBuffer, Value, binary_search, bubble_sort, verify};

pub fn array(capacity: usize) {
    let mut items = Array::with_capacity(capacity);

    items.append(5);
    items.append(7);
    items.append(9);
    tracing::debug!(
        capacity = items.capacity(),
        "appended past initial capacity"
    );

    verify!(items.get(2) == Ok(9), "get after growth");
    verify!(items.remove_at(1) == Ok(7), "remove_at middle");
    verify!(items.len() == 2, "length after remove_at");

    items.append(11);

    verify!(items.remove_at(1) == Ok(9), "remove_at shifted element");
    verify!(
        items.remove_at(9) == Err(Error::OutOfRange { index: 9, len: 2 }),
        "remove_at out of range"
    );
    verify!(items.remove_at(0) == Ok(5), "remove_at head");
    verify!(items.remove_at(0) == Ok(11), "remove_at last");
    verify!(items.is_empty(), "empty after removals");

    items.prepend(5);
    items.prepend(7);
    items.prepend(9);

    verify!(items.get(2) == Ok(5), "prepend order, tail");
    verify!(items.get(0) == Ok(9), "prepend order, head");
    verify!(items.remove(9) == Ok(9), "remove by value");
    verify!(items.len() == 2, "length after remove");
    verify!(items.get(0) == Ok(7), "head after remove");

    verify!(items.insert_at(3, 1).is_ok(), "insert_at middle");
    verify!(items.len() == 3, "length after insert_at");
    verify!(items.as_slice() == [7, 3, 5], "order after insert_at");
    verify!(items.index_of(3) == Some(1), "index_of");

    verify!(items.pop() == Ok(5), "pop last");
    verify!(items.len() == 2, "length after pop");
    verify!(items.pop() == Ok(3), "pop second");
    verify!(items.pop() == Ok(7), "pop first");
    verify!(items.pop() == Err(Error::Empty), "pop empty");
}

pub fn list() {
    let mut list: List = List::new();

    list.append(5);
    list.append(7);
    list.append(9);

    verify!(list.get(2) == Ok(9), "get tail");
    verify!(list.remove_at(1) == Ok(7), "remove_at middle");
    verify!(list.len() == 2, "length after remove_at");

    list.append(11);

    verify!(list.remove_at(1) == Ok(9), "remove_at relinked node");
    verify!(
        list.remove_at(9) == Err(Error::OutOfRange { index: 9, len: 2 }),
        "remove_at out of range"
    );
    verify!(list.remove_at(0) == Ok(5), "remove_at head");
    verify!(list.remove_at(0) == Ok(11), "remove_at sole node");
    verify!(list.is_empty(), "empty after removals");
    verify!(
        list.head_key().is_none() && list.tail_key().is_none(),
        "ends cleared after sole node removal"
    );

    list.prepend(5);
    list.prepend(7);
    list.prepend(9);

    verify!(list.get(2) == Ok(5), "prepend order, tail");
    verify!(list.get(0) == Ok(9), "prepend order, head");
    verify!(list.remove(9) == Ok(9), "remove by value");
    verify!(list.len() == 2, "length after remove");
    verify!(list.get(0) == Ok(7), "head after remove");

    verify!(list.insert_at(3, 1).is_ok(), "insert_at middle");
    verify!(list.len() == 3, "length after insert_at");
    verify!(list.get(0) == Ok(7), "insert_at, index 0");
    verify!(list.get(1) == Ok(3), "insert_at, index 1");
    verify!(list.get(2) == Ok(5), "insert_at, index 2");
    verify!(list.index_of(5) == Some(2), "index_of");

    tracing::debug!(?list, "list after scenario");
}

pub fn ring(capacity: u16) {
    let mut buffer = RingBuffer::with_capacity(usize::from(capacity));

    verify!(buffer.push(5).is_ok(), "push");
    verify!(buffer.pop() == Ok(5), "pop single");
    verify!(buffer.pop() == Err(Error::Empty), "pop empty");

    verify!(buffer.push(42).is_ok(), "push");
    verify!(buffer.push(9).is_ok(), "push");
    verify!(buffer.pop() == Ok(9), "pop newest");
    verify!(buffer.pop() == Ok(42), "pop oldest");
    verify!(buffer.pop() == Err(Error::Empty), "pop empty again");

    verify!(buffer.push(42).is_ok(), "push");
    verify!(buffer.push(9).is_ok(), "push");
    verify!(buffer.push(12).is_ok(), "push");

    verify!(buffer.get(2) == Ok(12), "get newest");
    verify!(buffer.get(1) == Ok(9), "get middle");
    verify!(buffer.get(0) == Ok(42), "get oldest");

    verify!(buffer.pop() == Ok(12), "pop 12");
    verify!(buffer.pop() == Ok(9), "pop 9");
    verify!(buffer.pop() == Ok(42), "pop 42");

    verify!(buffer.push(22).is_ok(), "push");
    verify!(buffer.push(33).is_ok(), "push");
    verify!(buffer.push(44).is_ok(), "push");

    verify!(buffer.deque() == Ok(22), "deque oldest");
    verify!(buffer.len() == 2, "length after deque");
    verify!(buffer.deque() == Ok(33), "deque next");

    verify!(buffer.push(55).is_ok(), "push");

    verify!(buffer.pop() == Ok(55), "pop after mixed use");
    verify!(buffer.pop() == Ok(44), "pop remaining");

    // Fill to capacity: the next push is rejected and hands the value back
    for value in 0..Value::from(capacity) {
        verify!(buffer.push(value).is_ok(), "fill");
    }
    verify!(
        buffer.push(-1).map_err(|full| full.into_inner()) == Err(-1),
        "push into full buffer"
    );
    verify!(buffer.len() == usize::from(capacity), "full buffer unchanged");
}

pub fn search() {
    let sorted = [1, 2, 3, 5, 6, 8, 9];

    verify!(
        binary_search(&sorted, 8) == Some(5),
        "Expected index to be 5"
    );
    verify!(
        binary_search(&sorted, 5) == Some(3),
        "Expected index to be 3"
    );
    verify!(
        binary_search(&sorted, 9) == Some(6),
        "Expected index to be 6"
    );
    verify!(
        binary_search(&sorted, 11).is_none(),
        "Expected no index as item is not present"
    );
}

pub fn sort() {
    let mut values = [9, 3, 7, 4, 69, 420, 42];
    bubble_sort(&mut values);

    verify!(values == [3, 4, 7, 9, 42, 69, 420], "Sorted incorrectly");
}
