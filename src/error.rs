// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for array operations and invariant checks.
//!
//! Every failure is returned to the immediate caller. Nothing here is retried
//! or swallowed, and none of these errors leave the array in a modified state.

use std::fmt;

/// Recoverable failures of [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// `pop` was called on an array with no elements.
    EmptyArray,
    /// `get`/`at` was called with an index outside `[0, len)`.
    IndexOutOfRange { index: isize, len: usize },
    /// A resize could not obtain a buffer of `requested` elements.
    ///
    /// Also reported when doubling the capacity would overflow `usize`.
    AllocationFailure { requested: usize },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::EmptyArray => write!(f, "the array is empty"),
            ArrayError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            ArrayError::AllocationFailure { requested } => {
                write!(f, "failed to allocate a buffer of {} elements", requested)
            }
        }
    }
}

impl std::error::Error for ArrayError {}

/// Error type for data-model invariant violations, reported by
/// [`DynamicArray::validate`](crate::DynamicArray::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// More elements are present than the buffer can hold.
    LengthExceedsCapacity { len: usize, capacity: usize },
    /// Capacity dropped below the initial minimum.
    CapacityBelowMinimum { capacity: usize, minimum: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthExceedsCapacity { len, capacity } => {
                write!(f, "len {} > capacity {}", len, capacity)
            }
            InvariantError::CapacityBelowMinimum { capacity, minimum } => {
                write!(f, "capacity {} < minimum {}", capacity, minimum)
            }
        }
    }
}

impl std::error::Error for InvariantError {}
