//! Growable array, doubly linked list and fixed-capacity ring buffer.
//!
//! Three independent containers over a single scalar [`Value`] type, sharing
//! one operation contract:
//!
//! | Container | Storage | Indexed access | Insert / remove at ends |
//! |-----------|---------|----------------|-------------------------|
//! | [`Array`] | one contiguous allocation, doubles when full | O(1) | O(1) amortized append/pop, O(n) prepend |
//! | [`List`] | nodes in an index arena, linked by key | O(n) walk | O(1) |
//! | [`RingBuffer`] | fixed slice, head/tail cursors | O(1) | O(1) push/pop/deque |
//!
//! # Failure Reporting
//!
//! Every fallible operation returns a `Result`. The failure reasons are
//! [`Error::OutOfRange`], [`Error::Empty`] and [`Error::NotFound`]; a failed
//! call never mutates the container. Lookups by value return
//! `Option<usize>`, since "not found" is an ordinary answer there.
//!
//! Pushing into a full ring buffer returns [`Full`] with the rejected value.
//! The buffer has no growth policy: capacity is part of its contract.
//!
//! Running out of memory while growing an [`Array`] or a list's storage
//! aborts the process.
//!
//! # Quick Start
//!
//! ```
//! use cairn_collections::{Array, Error, List, RingBuffer};
//!
//! let mut array = Array::with_capacity(2);
//! array.append(5);
//! array.append(7);
//! array.append(9);
//! assert_eq!(array.remove_at(9), Err(Error::OutOfRange { index: 9, len: 3 }));
//!
//! let mut list: List = List::new();
//! list.prepend(5);
//! list.prepend(9);
//! list.insert_at(7, 1).unwrap();
//! assert_eq!(list.index_of(5), Some(2));
//!
//! let mut ring = RingBuffer::with_capacity(2);
//! ring.push(1).unwrap();
//! ring.push(2).unwrap();
//! assert!(ring.push(3).is_err());
//! assert_eq!(ring.deque(), Ok(1));
//! ```
//!
//! # Shared Interface
//!
//! [`Sequence`] and [`SequenceMut`] describe the common contract so generic
//! code can be written once for every container.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab` and the `SlabList` alias

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod algo;
pub mod array;
pub mod diagnostic;
pub mod error;
pub mod key;
pub mod list;
pub mod ring;
pub mod sequence;
pub mod storage;

/// The scalar element type stored by every container.
pub type Value = i32;

pub use algo::{binary_search, bubble_sort};
pub use array::Array;
pub use error::{Error, Full};
pub use key::Key;
pub use list::{List, Node, NodeArena};
pub use ring::RingBuffer;
pub use sequence::{Sequence, SequenceMut};
pub use storage::{Arena, Storage};

#[cfg(feature = "slab")]
pub use list::SlabList;
