//! A mergeable priority queue backed by a leftist heap
//!
//! This crate provides [`LeftistHeap`], a max-priority queue whose defining
//! feature is an O(log n) *structural* merge: one queue's entire tree is
//! absorbed into another by splicing subtrees, where an array-backed binary
//! heap would have to reinsert every element.
//!
//! # Features
//!
//! - **O(log n) merge**: `a.merge(&mut b)` moves all of `b`'s elements into
//!   `a` and leaves `b` empty, in time logarithmic in both sizes
//! - **O(log n) push and pop**: each is a single node-level merge
//! - **O(1) peek, len, is_empty**
//! - **Configurable ordering**: a max-queue over [`Ord`] by default, or over
//!   any strict-weak "less than" predicate supplied via the [`Compare`]
//!   policy trait
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistHeap;
//!
//! let mut a: LeftistHeap<i32> = [5, 1].into_iter().collect();
//! let mut b: LeftistHeap<i32> = [9, 2].into_iter().collect();
//!
//! a.merge(&mut b);
//! assert!(b.is_empty());
//! assert_eq!(a.len(), 4);
//! assert_eq!(a.peek(), Ok(&9));
//! assert_eq!(a.pop(), Ok(9));
//! ```

pub mod leftist;
pub mod traits;

// Re-export the main types for convenience
pub use leftist::LeftistHeap;
pub use traits::{Compare, FnCompare, HeapError, NaturalOrder};
