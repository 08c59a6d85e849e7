// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Backing-buffer allocation.
//!
//! The array never lets `Vec` grow on its own. Every buffer comes from a
//! [`BufferAllocator`] with an exact capacity, so running out of memory shows
//! up as an [`ArrayError::AllocationFailure`] instead of an abort, and the
//! array can keep its old buffer when that happens.

use crate::error::ArrayError;

/// Source of empty, exactly-sized backing buffers.
pub trait BufferAllocator {
    /// Return an empty `Vec` that can hold at least `capacity` elements
    /// without reallocating.
    fn allocate<T>(&mut self, capacity: usize) -> Result<Vec<T>, ArrayError>;
}

/// Global-heap allocator backed by `Vec::try_reserve_exact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heap;

impl BufferAllocator for Heap {
    fn allocate<T>(&mut self, capacity: usize) -> Result<Vec<T>, ArrayError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(buffer)
    }
}
