// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The growable array itself.
//!
//! `DynamicArray` owns one contiguous buffer and tracks its logical capacity
//! separately from `Vec`'s. Buffers are only ever obtained through the
//! [`BufferAllocator`], sized exactly by the [`policy`](crate::policy), and
//! swapped in with a single assignment once every element has been moved. A
//! failed allocation therefore returns before anything has changed.
//!
//! ```text
//!   push (len == cap)           pop (len <= cap/4, cap > INIT_CAP)
//!   ┌───────────────┐           ┌───────────────────────────────┐
//!   │ 1 │ 2 │ 3 │ 4 │           │ 1 │ 2 │   │   │   │   │   │   │
//!   └───────────────┘           └───────────────────────────────┘
//!          │ allocate 2·cap                │ allocate max(cap/2, INIT_CAP)
//!          ▼ move, swap, write             ▼ move, swap
//!   ┌───────────────────────────────┐   ┌───────────────┐
//!   │ 1 │ 2 │ 3 │ 4 │ 5 │   │   │   │   │ 1 │ 2 │   │   │
//!   └───────────────────────────────┘   └───────────────┘
//! ```

use serde::Serialize;

use crate::buffer::{BufferAllocator, Heap};
use crate::contracts;
use crate::error::{ArrayError, InvariantError};
use crate::policy::{self, INIT_CAP};

/// Owning, contiguous, growable and shrinkable sequence.
///
/// # Invariants
///
/// - `len() <= capacity()` after every operation
/// - `capacity() >= INIT_CAP`
/// - elements keep their indices across every resize
///
/// # Example
///
/// ```
/// use dynarray::{ArrayError, DynamicArray};
///
/// let mut array = DynamicArray::new();
/// for value in [10, 20, 30] {
///     array.push(value)?;
/// }
/// assert_eq!(array.to_vec(), vec![10, 20, 30]);
/// assert_eq!(array.pop(), Ok(30));
/// assert_eq!(array.get(5), Err(ArrayError::IndexOutOfRange { index: 5, len: 2 }));
/// # Ok::<(), ArrayError>(())
/// ```
pub struct DynamicArray<T, A: BufferAllocator = Heap> {
    buf: Vec<T>,
    cap: usize,
    alloc: A,
}

/// The integer array from the original exercise.
pub type IntArray = DynamicArray<i32>;

/// Serializable, read-only view of an array's logical contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<T> {
    pub len: usize,
    pub capacity: usize,
    pub items: Vec<T>,
}

impl<T> DynamicArray<T, Heap> {
    /// Create an empty array with capacity [`INIT_CAP`].
    ///
    /// Aborts on allocation failure, like `Vec::with_capacity`. Use
    /// [`try_new`](Self::try_new) to get an error instead.
    pub fn new() -> Self {
        let buf = Vec::with_capacity(INIT_CAP);
        Self {
            buf,
            cap: INIT_CAP,
            alloc: Heap,
        }
    }

    /// Create an empty array, reporting allocation failure.
    pub fn try_new() -> Result<Self, ArrayError> {
        Self::try_new_in(Heap)
    }
}

impl<T> Default for DynamicArray<T, Heap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: BufferAllocator> DynamicArray<T, A> {
    /// Create an empty array whose buffers come from `alloc`.
    pub fn try_new_in(mut alloc: A) -> Result<Self, ArrayError> {
        let buf = alloc.allocate(INIT_CAP)?;
        let array = Self {
            buf,
            cap: INIT_CAP,
            alloc,
        };
        array.check_contracts();
        Ok(array)
    }

    /// Append `value` at index `len()`.
    ///
    /// A full buffer is doubled *before* the write. If that allocation fails
    /// the array is left exactly as it was and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        if policy::needs_grow(self.buf.len(), self.cap) {
            let target = policy::grow_target(self.cap).ok_or(ArrayError::AllocationFailure {
                requested: usize::MAX,
            })?;
            let next = self.alloc.allocate(target)?;
            self.adopt(next, target);
        }

        self.buf.push(value);
        self.check_contracts();
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ArrayError::EmptyArray`] without mutating when there is
    /// nothing to pop. When the removal would leave the buffer at a quarter
    /// occupancy or less, the smaller buffer is allocated first; if that
    /// fails, the element stays where it is and the error is returned.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        let remaining = self
            .buf
            .len()
            .checked_sub(1)
            .ok_or(ArrayError::EmptyArray)?;

        let shrunk = match policy::shrink_target(remaining, self.cap) {
            Some(target) => Some((self.alloc.allocate(target)?, target)),
            None => None,
        };

        let value = self.buf.pop().ok_or(ArrayError::EmptyArray)?;
        if let Some((next, target)) = shrunk {
            self.adopt(next, target);
        }

        self.check_contracts();
        Ok(value)
    }

    /// Element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.buf.get(index).ok_or(ArrayError::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len: self.buf.len(),
        })
    }

    /// Element at a signed `index`. Negative indices are out of range; they
    /// do not count from the end.
    pub fn at(&self, index: isize) -> Result<&T, ArrayError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.buf.get(i))
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                len: self.buf.len(),
            })
    }

    /// Number of elements present.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Logical capacity: how many elements fit before the next grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The `len()` live elements, in order. Unused capacity is never exposed.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.alloc
    }

    /// Check the data-model invariants, reporting the first violation.
    ///
    /// Cannot fail for arrays built through this API. Exposed so drivers and
    /// tests can assert it after arbitrary operation sequences.
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.buf.len() > self.cap {
            return Err(InvariantError::LengthExceedsCapacity {
                len: self.buf.len(),
                capacity: self.cap,
            });
        }
        if self.cap < INIT_CAP {
            return Err(InvariantError::CapacityBelowMinimum {
                capacity: self.cap,
                minimum: INIT_CAP,
            });
        }
        Ok(())
    }

    /// Move every live element into `next` and make it the buffer.
    ///
    /// `next` must already hold `cap` elements without growing, so `append`
    /// cannot reallocate and this step cannot fail.
    fn adopt(&mut self, mut next: Vec<T>, cap: usize) {
        contracts::check_buffer_holds_capacity(&next, cap);
        let len_before = self.buf.len();
        next.append(&mut self.buf);
        self.buf = next;
        self.cap = cap;
        contracts::check_resize_preserved(len_before, self.buf.len(), self.cap);
    }

    #[inline]
    fn check_contracts(&self) {
        contracts::check_len_within_capacity(self.buf.len(), self.cap);
        contracts::check_capacity_floor(self.cap);
        contracts::check_buffer_holds_capacity(&self.buf, self.cap);
    }
}

impl<T: Clone, A: BufferAllocator> DynamicArray<T, A> {
    /// Copy of the live elements, in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.clone()
    }

    /// Length, capacity and a copy of the live elements.
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            len: self.buf.len(),
            capacity: self.cap,
            items: self.to_vec(),
        }
    }
}

impl<T: Clone, A: BufferAllocator + Clone> Clone for DynamicArray<T, A> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            cap: self.cap,
            alloc: self.alloc.clone(),
        }
    }
}

impl<T: std::fmt::Debug, A: BufferAllocator> std::fmt::Debug for DynamicArray<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.cap)
            .field("items", &self.buf)
            .finish()
    }
}

impl<T: PartialEq, A: BufferAllocator, B: BufferAllocator> PartialEq<DynamicArray<T, B>>
    for DynamicArray<T, A>
{
    fn eq(&self, other: &DynamicArray<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: BufferAllocator> Eq for DynamicArray<T, A> {}

impl<T: PartialEq, A: BufferAllocator> PartialEq<[T]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: BufferAllocator> PartialEq<&[T]> for DynamicArray<T, A> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, A: BufferAllocator, const N: usize> PartialEq<[T; N]> for DynamicArray<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T, A: BufferAllocator> IntoIterator for &'a DynamicArray<T, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
