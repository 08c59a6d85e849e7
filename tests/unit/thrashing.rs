//! Alternating append/pop around a resize boundary must not reallocate on
//! every call.

use super::common::{filled, filled_with_budget};
use dynarray::INIT_CAP;

/// Count capacity changes while alternating push and pop `rounds` times.
fn resizes_while_alternating(start_len: usize, rounds: usize) -> usize {
    let mut array = filled(start_len);
    let mut resizes = 0;
    let mut cap = array.capacity();

    for round in 0..rounds {
        if round % 2 == 0 {
            array.push(-1).unwrap();
        } else {
            array.pop().unwrap();
        }
        if array.capacity() != cap {
            resizes += 1;
            cap = array.capacity();
        }
    }
    resizes
}

#[test]
fn straddling_the_grow_threshold_resizes_once() {
    // len == cap: the first push grows, later pops and pushes do not
    for len in [4, 8, 16, 64] {
        assert_eq!(resizes_while_alternating(len, 100), 1, "start len {}", len);
    }
}

#[test]
fn straddling_the_shrink_threshold_resizes_at_most_once() {
    // 9 pushes leave cap 16; popping to 4 shrinks to 8, then pushes to 5 must not grow
    let mut array = filled(9);
    while array.len() > 5 {
        array.pop().unwrap();
    }
    let cap = array.capacity();
    let mut resizes = 0;
    let mut last = cap;
    for round in 0..100 {
        if round % 2 == 0 {
            array.pop().unwrap();
        } else {
            array.push(0).unwrap();
        }
        if array.capacity() != last {
            resizes += 1;
            last = array.capacity();
        }
    }
    assert!(resizes <= 1, "{} resizes", resizes);
}

#[test]
fn alternating_needs_no_allocations_after_settling() {
    // cap 8, len 5: neither threshold is reachable with a single step
    let mut array = filled_with_budget(5, 0);
    for _ in 0..1000 {
        array.push(1).unwrap();
        array.pop().unwrap();
    }
    assert_eq!(array.allocator().refused, 0);
    assert_eq!(array.capacity(), 2 * INIT_CAP);
}
