//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::array::{DynamicArray, IntArray};
use crate::buffer::{BufferAllocator, Heap};
use crate::error::ArrayError;

/// Create an array holding `0..n`, in order.
///
/// This is the canonical implementation used across all tests.
pub fn filled(n: usize) -> IntArray {
    let mut array = IntArray::new();
    for value in 0..n {
        array
            .push(value as i32)
            .expect("heap allocation failed while filling a test array");
    }
    array
}

/// Create an array holding a copy of `values`, in order.
pub fn from_values(values: &[i32]) -> IntArray {
    let mut array = IntArray::new();
    for &value in values {
        array
            .push(value)
            .expect("heap allocation failed while filling a test array");
    }
    array
}

/// Allocator that serves a fixed number of requests from the heap, then fails.
///
/// Every allocation the array makes (the initial buffer included) uses up one
/// permit. Once they are gone each request returns
/// [`ArrayError::AllocationFailure`], until more are granted with
/// [`allow`](Self::allow).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailAfter {
    permits: usize,
    /// Number of requests that have been refused.
    pub refused: usize,
}

impl FailAfter {
    pub fn new(permits: usize) -> Self {
        Self { permits, refused: 0 }
    }

    /// Grant `permits` more successful allocations.
    pub fn allow(&mut self, permits: usize) {
        self.permits = self.permits.saturating_add(permits);
    }

    pub fn permits(&self) -> usize {
        self.permits
    }
}

impl BufferAllocator for FailAfter {
    fn allocate<T>(&mut self, capacity: usize) -> Result<Vec<T>, ArrayError> {
        if self.permits == 0 {
            self.refused += 1;
            return Err(ArrayError::AllocationFailure {
                requested: capacity,
            });
        }
        self.permits -= 1;
        Heap.allocate(capacity)
    }
}

/// Create an array over a [`FailAfter`] allocator holding `0..n`, with
/// `spare` permits left for later resizes.
pub fn filled_with_budget(n: usize, spare: usize) -> DynamicArray<i32, FailAfter> {
    let mut array = DynamicArray::try_new_in(FailAfter::new(usize::MAX))
        .expect("unlimited test allocator refused the initial buffer");
    for value in 0..n {
        array
            .push(value as i32)
            .expect("unlimited test allocator refused a resize");
    }
    *array.allocator_mut() = FailAfter::new(spare);
    array
}
