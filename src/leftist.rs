//! Leftist heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's right
//! spine is no longer than its left spine (measured by null-path-length).
//! That bias keeps the right spine O(log n) long, and since every operation
//! here is expressed as a merge that only ever descends right spines, the
//! whole API follows:
//!
//! | Operation  | Complexity        |
//! |------------|-------------------|
//! | `push`     | O(log n)          |
//! | `pop`      | O(log n)          |
//! | `peek`     | O(1)              |
//! | `merge`    | O(log n + log m)  |
//! | `len`      | O(1)              |
//!
//! The merge is structural: it splices whole subtrees rather than moving
//! elements one by one, which is what an array-backed binary heap cannot do.

use crate::traits::{Compare, HeapError, NaturalOrder};
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// An owned (possibly absent) subtree. Each child link exclusively owns the
/// subtree below it; merge inputs are disjoint by construction because whole
/// subtrees are moved by value.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn singleton(value: T) -> Link<T> {
        Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }))
    }
}

/// Merges two disjoint leftist subtrees into one.
///
/// The root that is not `lt` the other wins (the left operand wins ties),
/// keeps its left child, absorbs the loser into its right subtree, and then
/// swaps its children to restore the leftist bias. Recursion only ever walks
/// the winners' right spines, so the depth is O(log n + log m).
fn merge_nodes<T, C: Compare<T>>(cmp: &C, a: Link<T>, b: Link<T>) -> Link<T> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(mut a), Some(mut b)) => {
            if cmp.lt(&a.value, &b.value) {
                mem::swap(&mut a, &mut b);
            }
            let right = a.right.take();
            a.right = merge_nodes(cmp, right, Some(b));
            mem::swap(&mut a.left, &mut a.right);
            Some(a)
        }
    }
}

/// Deep-copies a subtree, pre-order. The copy shares no storage with the
/// source.
///
/// Iterative, like teardown: the worklist pairs each source node with the
/// destination link its copy belongs in, so a left-degenerate tree of any
/// size cannot overflow the call stack.
fn clone_subtree<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut root = None;
    let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
    if let Some(src) = link.as_deref() {
        pending.push((src, &mut root));
    }
    while let Some((src, dst)) = pending.pop() {
        let node = Option::insert(
            dst,
            Box::new(Node {
                value: src.value.clone(),
                left: None,
                right: None,
            }),
        );
        // Left on top of the worklist so values clone in pre-order.
        if let Some(right) = src.right.as_deref() {
            pending.push((right, &mut node.right));
        }
        if let Some(left) = src.left.as_deref() {
            pending.push((left, &mut node.left));
        }
    }
    root
}

/// A mergeable max-priority queue backed by a leftist heap
///
/// The queue surfaces the element that no other element beats under the
/// configured [`Compare`] policy ([`NaturalOrder`], i.e. `Ord`'s `<`, by
/// default). Besides the usual push/pop/peek, two heaps over the same policy
/// can be [`merge`](LeftistHeap::merge)d in O(log n + log m), leaving the
/// donor empty.
///
/// Duplicate elements are permitted and preserved; the heap holds a multiset.
///
/// # Panics
///
/// The comparator is infallible by contract. If a user-supplied [`Compare`]
/// or a `Clone` impl panics in the middle of an operation, the panic
/// propagates; the heap stays memory-safe (every node remains owned, nothing
/// leaks or double-frees during unwinding) but its logical contents become
/// unspecified, and `len` may no longer match them. This is the same
/// contract the standard library's ordered collections document for a
/// panicking `Ord`.
///
/// # Example
///
/// ```rust
/// use leftist_heap::{HeapError, LeftistHeap};
///
/// let mut heap = LeftistHeap::new();
/// heap.push(5);
/// heap.push(3);
/// heap.push(8);
///
/// assert_eq!(heap.peek(), Ok(&8));
/// assert_eq!(heap.pop(), Ok(8));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
/// ```
pub struct LeftistHeap<T, C = NaturalOrder> {
    root: Link<T>,
    /// Cached element count; always equals the number of nodes under `root`.
    len: usize,
    cmp: C,
}

impl<T> LeftistHeap<T, NaturalOrder> {
    /// Creates an empty max-queue over the natural ordering
    ///
    /// The policy type is pinned to [`NaturalOrder`] here so that plain
    /// `LeftistHeap::new()` infers; use
    /// [`with_comparator`](LeftistHeap::with_comparator) for any other
    /// policy.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty heap ordered by the given policy
    ///
    /// The policy is fixed for the heap's lifetime. Two heaps can only be
    /// merged when they use the same policy type; it is the caller's
    /// responsibility that policy *values* of the same type agree.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Deep-copies an existing subtree and adopts the given count as-is.
    /// The caller asserts that `len` matches the subtree's node count; it is
    /// not recomputed here.
    fn from_parts(root: &Link<T>, len: usize, cmp: C) -> Self
    where
        T: Clone,
    {
        Self {
            root: clone_subtree(root),
            len,
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap contains no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        match &self.root {
            Some(node) => Ok(&node.value),
            None => Err(HeapError::EmptyContainer),
        }
    }

    /// Removes all elements, releasing every node
    ///
    /// Teardown is iterative, so a left-degenerate tree of any size cannot
    /// overflow the call stack. No-op on an empty heap.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Returns a lazy pre-order traversal (root, then left, then right) of
    /// the heap's elements
    ///
    /// The order is the tree's internal layout, not priority order; this is
    /// a diagnostic view. The iterator borrows the heap and never mutates it.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        Iter { stack }
    }
}

impl<T, C: Compare<T>> LeftistHeap<T, C> {
    /// Inserts an element
    ///
    /// A freshly allocated single-node subtree is merged into the root, so
    /// this is O(log n).
    pub fn push(&mut self, value: T) {
        let root = self.root.take();
        self.root = merge_nodes(&self.cmp, root, Node::singleton(value));
        self.len += 1;
    }

    /// Removes and returns the highest-priority element
    ///
    /// The root node is detached, its two children are merged into the new
    /// root, and the detached node's value is returned by move.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the heap is empty; the heap
    /// is left unchanged.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let node = self.root.take().ok_or(HeapError::EmptyContainer)?;
        let Node { value, left, right } = *node;
        self.root = merge_nodes(&self.cmp, left, right);
        self.len -= 1;
        Ok(value)
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// This is the structural merge: `other`'s whole tree is spliced into
    /// `self`'s in O(log n + log m), with no per-element work and no
    /// copying. Afterwards `other.is_empty()` holds and `other` retains no
    /// reference to any transferred node. Merging an empty heap (in either
    /// direction) is a cheap no-op.
    pub fn merge(&mut self, other: &mut Self) {
        let a = self.root.take();
        let b = other.root.take();
        self.root = merge_nodes(&self.cmp, a, b);
        self.len += mem::take(&mut other.len);
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    /// Deep copy: the clone shares no nodes with the source, and mutating
    /// one never affects the other.
    fn clone(&self) -> Self {
        Self::from_parts(&self.root, self.len, self.cmp.clone())
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for LeftistHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for LeftistHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_comparator(C::default());
        heap.extend(iter);
        heap
    }
}

/// Borrowing pre-order iterator over a heap's elements
///
/// Created by [`LeftistHeap::iter`]. Restartable: calling `iter()` again
/// yields a fresh traversal from the root.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Left child on top so it is visited before the right child.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, C> IntoIterator for &'a LeftistHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming iterator draining a heap in non-increasing priority order
pub struct IntoIter<T, C> {
    heap: LeftistHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}
impl<T, C: Compare<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Compare<T>> IntoIterator for LeftistHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Consumes the heap, yielding its elements highest-priority first
    fn into_iter(self) -> IntoIter<T, C> {
        IntoIter { heap: self }
    }
}
