//! Ordering policy and error types for the heap
//!
//! The heap does not require its elements to implement [`Ord`] directly.
//! Instead the ordering is a policy value implementing [`Compare`], fixed at
//! construction time; [`NaturalOrder`] is the zero-sized default that falls
//! back to `Ord`, making the queue a max-queue over the natural ordering.
//! Any `Fn(&T, &T) -> bool` closure is also a valid policy, so a min-queue
//! is just the reversed predicate.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element, but the heap is empty
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "operation requires a non-empty heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Ordering policy: a strict-weak "less than" predicate over `T`
///
/// `lt(a, b)` must mean "`a` is strictly lower priority than `b`" and must be
/// a strict weak ordering: irreflexive, transitive, and consistent, with ties
/// defined as neither `lt(a, b)` nor `lt(b, a)`. The heap surfaces the element
/// that no other element beats under this predicate.
///
/// The predicate is infallible by contract. If an implementation panics in
/// the middle of a heap operation, the heap stays memory-safe but its
/// contents become unspecified; see [`LeftistHeap`](crate::LeftistHeap).
pub trait Compare<T> {
    /// Returns true iff `a` is strictly lower priority than `b`
    fn lt(&self, a: &T, b: &T) -> bool;
}

/// The default ordering policy: `Ord`'s `<`
///
/// With this policy the heap is a max-queue over the natural ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn lt(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a binary predicate closure into an ordering policy
///
/// ```rust
/// use leftist_heap::{FnCompare, LeftistHeap};
///
/// // Reversing the predicate turns the max-queue into a min-queue.
/// let mut heap = LeftistHeap::with_comparator(FnCompare(|a: &i32, b: &i32| b < a));
/// heap.extend([5, 3, 8, 1]);
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn lt(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
