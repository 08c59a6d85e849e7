// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resize policy: when the array grows, when it shrinks, and to what size.
//!
//! Capacity doubles when an append finds the buffer full, and halves once
//! occupancy falls to a quarter. The gap between the two thresholds is what
//! keeps an append/pop pair sitting on a boundary from reallocating each time:
//! after a grow from `c` to `2c` the array holds `c + 1` elements, and a shrink
//! back needs it to drop to `c / 2`.
//!
//! These are pure functions so they can be model-checked on their own.

/// Capacity of a freshly created array, and the floor for shrinking.
pub const INIT_CAP: usize = 4;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // INVARIANT: capacity is never zero
    assert!(INIT_CAP >= 1);

    // INVARIANT: a shrink from the smallest shrinkable capacity lands on the floor
    assert!((INIT_CAP * 2) / 2 >= INIT_CAP);

    // INVARIANT: right after a shrink the array is not full, so the next
    // append cannot immediately grow it again
    const CAP: usize = INIT_CAP * 2;
    assert!(CAP / 4 < CAP / 2);
};

/// Whether an append must grow the buffer before writing.
#[inline]
pub fn needs_grow(len: usize, cap: usize) -> bool {
    len >= cap
}

/// Capacity after a grow, or `None` if doubling overflows.
#[inline]
pub fn grow_target(cap: usize) -> Option<usize> {
    cap.max(INIT_CAP).checked_mul(2)
}

/// Capacity after a pop has left `len` elements, or `None` to keep `cap`.
#[inline]
pub fn shrink_target(len: usize, cap: usize) -> Option<usize> {
    if cap > INIT_CAP && len <= cap / 4 {
        Some((cap / 2).max(INIT_CAP))
    } else {
        None
    }
}


// ============================================================================
// KANI PROOFS
// ============================================================================
//
// Run with: cargo kani
//
// Verified properties:
// 1. shrink_target never returns a capacity below INIT_CAP or below len
// 2. A shrunk buffer always has room for one more element
// 3. grow_target never returns a capacity that fails to fit a full buffer

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify the shrink target respects the floor and the live elements.
    #[kani::proof]
    fn verify_shrink_target_bounds() {
        let cap: usize = kani::any_where(|&c| c >= INIT_CAP);
        let len: usize = kani::any_where(|&l| l <= cap);

        if let Some(next) = shrink_target(len, cap) {
            kani::assert(next >= INIT_CAP, "shrink must not go below INIT_CAP");
            kani::assert(next > len, "shrunk buffer must have room for one more");
            kani::assert(next < cap, "shrink must reduce capacity");
        }
    }

    /// Verify growth strictly increases a full buffer's capacity.
    #[kani::proof]
    fn verify_grow_target_fits() {
        let cap: usize = kani::any_where(|&c| c >= INIT_CAP);

        if let Some(next) = grow_target(cap) {
            kani::assert(next > cap, "grow must add room");
            kani::assert(!needs_grow(cap, next), "grown buffer must not be full");
        }
    }
}
