//! Runtime contracts for the array's data model.
//!
//! Debug-mode assertions that the array calls after every mutation. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the invariants that [`DynamicArray::validate`] reports at runtime
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_len_within_capacity`  | `len <= cap`                               |
//! | `check_capacity_floor`       | `cap >= INIT_CAP`                          |
//! | `check_buffer_holds_capacity`| backing `Vec` can hold `cap` without growth|
//! | `check_resize_preserved`     | resize keeps every live element            |
//!
//! [`DynamicArray::validate`]: crate::DynamicArray::validate

use crate::policy::INIT_CAP;

/// Check that the logical length fits in the capacity.
///
/// # Panics (debug builds only)
/// Panics if `len > cap`.
#[inline]
pub fn check_len_within_capacity(len: usize, cap: usize) {
    // INVARIANT: len <= cap after every mutation
    debug_assert!(
        len <= cap,
        "Contract violation: len {} > capacity {}",
        len,
        cap
    );
}

/// Check that capacity has not dropped below the initial minimum.
///
/// # Panics (debug builds only)
/// Panics if `cap < INIT_CAP`.
#[inline]
pub fn check_capacity_floor(cap: usize) {
    // INVARIANT: cap >= INIT_CAP, so cap is never zero
    debug_assert!(
        cap >= INIT_CAP,
        "Contract violation: capacity {} < INIT_CAP {}",
        cap,
        INIT_CAP
    );
}

/// Check that the backing buffer really has room for the advertised capacity.
///
/// If this fails, a push below `cap` could make `Vec` reallocate behind the
/// allocator's back.
#[inline]
#[allow(clippy::ptr_arg)]
pub fn check_buffer_holds_capacity<T>(buffer: &Vec<T>, cap: usize) {
    // INVARIANT: the owned buffer is at least as large as the logical capacity
    debug_assert!(
        buffer.capacity() >= cap,
        "Contract violation: buffer capacity {} < logical capacity {}",
        buffer.capacity(),
        cap
    );
}

/// Check that a resize carried every live element into the new buffer.
///
/// # Panics (debug builds only)
/// Panics if the length changed or the new buffer cannot hold it.
#[inline]
pub fn check_resize_preserved(len_before: usize, len_after: usize, new_cap: usize) {
    // INVARIANT: resize preserves contents, so the length is unchanged
    debug_assert!(
        len_before == len_after,
        "Contract violation: resize changed length {} -> {}",
        len_before,
        len_after
    );
    check_len_within_capacity(len_after, new_cap);
}
