//! Allocation failure must leave the array untouched and usable.

use super::common::{assert_contents, assert_well_formed, filled_with_budget, FailAfter};
use dynarray::{ArrayError, DynamicArray};

#[test]
fn create_reports_failure() {
    let result: Result<DynamicArray<i32, FailAfter>, _> = DynamicArray::try_new_in(FailAfter::new(0));
    assert_eq!(
        result.unwrap_err(),
        ArrayError::AllocationFailure { requested: 4 }
    );
}

#[test]
fn failed_grow_preserves_everything() {
    let mut array = filled_with_budget(4, 0);
    assert_eq!(array.capacity(), 4);

    let err = array.push(4).unwrap_err();
    assert_eq!(err, ArrayError::AllocationFailure { requested: 8 });
    assert_contents(&array, &[0, 1, 2, 3]);
    assert_eq!(array.capacity(), 4);
    assert_well_formed(&array);
    assert_eq!(array.allocator().refused, 1);
}

#[test]
fn array_recovers_once_memory_is_available() {
    let mut array = filled_with_budget(8, 0);
    assert!(array.push(8).is_err());

    array.allocator_mut().allow(1);
    array.push(8).unwrap();
    assert_eq!(array.capacity(), 16);
    assert_contents(&array, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn failed_shrink_keeps_popped_element_in_place() {
    let mut array = filled_with_budget(8, 0);
    for _ in 0..5 {
        array.pop().unwrap();
    }
    assert_contents(&array, &[0, 1, 2]);

    // len 3 -> 2 reaches cap/4 on cap 8, which needs a new buffer
    assert_eq!(
        array.pop(),
        Err(ArrayError::AllocationFailure { requested: 4 })
    );
    assert_contents(&array, &[0, 1, 2]);
    assert_eq!(array.capacity(), 8);
    assert_well_formed(&array);

    array.allocator_mut().allow(1);
    assert_eq!(array.pop(), Ok(2));
    assert_eq!(array.capacity(), 4);
    assert_contents(&array, &[0, 1]);
}

#[test]
fn pops_that_do_not_shrink_need_no_memory() {
    let mut array = filled_with_budget(8, 0);
    for expected in (3..8).rev() {
        assert_eq!(array.pop(), Ok(expected));
    }
    assert_eq!(array.allocator().refused, 0);
}

#[test]
fn empty_pop_does_not_touch_the_allocator() {
    let mut array = filled_with_budget(0, 0);
    assert_eq!(array.pop(), Err(ArrayError::EmptyArray));
    assert_eq!(array.allocator().refused, 0);
}

#[test]
fn every_failure_point_in_a_long_run_is_recoverable() {
    // Refuse the n-th resize for each n, then check the array still matches
    // the prefix of pushes that succeeded.
    for budget in 0..6 {
        let mut array = filled_with_budget(0, budget);
        let mut pushed = Vec::new();
        for value in 0..200 {
            match array.push(value) {
                Ok(()) => pushed.push(value),
                Err(ArrayError::AllocationFailure { .. }) => break,
                Err(other) => panic!("unexpected error {:?}", other),
            }
        }
        assert_contents(&array, &pushed);
        assert_well_formed(&array);
    }
}
