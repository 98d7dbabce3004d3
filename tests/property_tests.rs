//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap's observable behavior always matches a reference multiset.

use proptest::prelude::*;
use leftist_heap::LeftistHeap;

/// Pops every element, returning the drained sequence
fn drain(heap: &mut LeftistHeap<i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(v) = heap.pop() {
        out.push(v);
    }
    out
}

/// Test that peek always returns the maximum of everything inserted so far
fn test_push_pop_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = LeftistHeap::new();
    let mut reference = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !heap.is_empty() {
            let popped = heap.pop().unwrap();
            let pos = reference
                .iter()
                .position(|&v| v == popped)
                .expect("popped a value that was never pushed");
            reference.remove(pos);
        } else {
            heap.push(value);
            reference.push(value);
        }

        if let Some(max) = reference.iter().max() {
            prop_assert_eq!(heap.peek(), Ok(max));
        } else {
            prop_assert!(heap.is_empty());
        }
    }

    Ok(())
}

/// Test that draining yields a non-increasing sequence holding every element
fn test_pop_order_invariant(mut values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap: LeftistHeap<i32> = values.iter().copied().collect();

    let drained = drain(&mut heap);
    prop_assert!(drained.windows(2).all(|w| w[0] >= w[1]));

    values.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(drained, values);
    Ok(())
}

/// Test that len tracks pushes and successful pops exactly
fn test_len_invariant(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = LeftistHeap::new();
    let mut expected_len = 0usize;

    for (should_pop, value) in ops {
        if should_pop {
            // A pop on an empty heap is an error and must not disturb len
            if heap.pop().is_ok() {
                expected_len -= 1;
            }
        } else {
            heap.push(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Test that merge produces the multiset union and empties the donor
fn test_merge_invariant(lhs: Vec<i32>, rhs: Vec<i32>) -> Result<(), TestCaseError> {
    let mut a: LeftistHeap<i32> = lhs.iter().copied().collect();
    let mut b: LeftistHeap<i32> = rhs.iter().copied().collect();

    a.merge(&mut b);
    prop_assert!(b.is_empty());
    prop_assert_eq!(b.len(), 0);
    prop_assert_eq!(a.len(), lhs.len() + rhs.len());

    let mut expected: Vec<i32> = lhs.iter().chain(rhs.iter()).copied().collect();
    expected.sort_unstable_by(|x, y| y.cmp(x));
    prop_assert_eq!(drain(&mut a), expected);
    Ok(())
}

/// Test that merge is commutative and associative on multiset contents
fn test_merge_algebra_invariant(
    xs: Vec<i32>,
    ys: Vec<i32>,
    zs: Vec<i32>,
) -> Result<(), TestCaseError> {
    let build = |v: &Vec<i32>| -> LeftistHeap<i32> { v.iter().copied().collect() };

    // A merge B vs B merge A
    let (mut ab, mut b) = (build(&xs), build(&ys));
    ab.merge(&mut b);
    let (mut ba, mut a) = (build(&ys), build(&xs));
    ba.merge(&mut a);
    prop_assert_eq!(drain(&mut ab), drain(&mut ba));

    // (A merge B) merge C vs A merge (B merge C)
    let (mut left, mut t1, mut t2) = (build(&xs), build(&ys), build(&zs));
    left.merge(&mut t1);
    left.merge(&mut t2);
    let (mut right, mut mid, mut tail) = (build(&xs), build(&ys), build(&zs));
    mid.merge(&mut tail);
    right.merge(&mut mid);
    prop_assert_eq!(drain(&mut left), drain(&mut right));

    Ok(())
}

/// Test that a clone pops the same sequence and is fully independent
fn test_clone_invariant(values: Vec<i32>, extra: i32) -> Result<(), TestCaseError> {
    let mut source: LeftistHeap<i32> = values.iter().copied().collect();
    let mut copy = source.clone();

    // Mutating the copy leaves the source untouched
    copy.push(extra);
    prop_assert_eq!(source.len(), values.len());

    let _ = copy.pop();
    prop_assert_eq!(copy.len(), values.len());

    // A fresh clone pops exactly the source's sequence
    let mut copy2 = source.clone();
    prop_assert_eq!(drain(&mut source), drain(&mut copy2));
    Ok(())
}

proptest! {
    #[test]
    fn push_pop_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_push_pop_invariant(ops)?;
    }

    #[test]
    fn pop_order_invariant(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_pop_order_invariant(values)?;
    }

    #[test]
    fn len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant(ops)?;
    }

    #[test]
    fn merge_invariant(
        lhs in prop::collection::vec(-100i32..100, 0..50),
        rhs in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_merge_invariant(lhs, rhs)?;
    }

    #[test]
    fn merge_algebra_invariant(
        xs in prop::collection::vec(-100i32..100, 0..30),
        ys in prop::collection::vec(-100i32..100, 0..30),
        zs in prop::collection::vec(-100i32..100, 0..30)
    ) {
        test_merge_algebra_invariant(xs, ys, zs)?;
    }

    #[test]
    fn clone_invariant(
        values in prop::collection::vec(-100i32..100, 0..50),
        extra in -100i32..100
    ) {
        test_clone_invariant(values, extra)?;
    }
}
