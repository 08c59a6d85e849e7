// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the dynarray resize policy.
//!
//! This standalone crate extracts the grow/shrink policy and models the array
//! as its `(len, cap)` pair, which is all the policy can observe.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Bounds**: `len <= cap` and `cap >= INIT_CAP` after any operation
//! 2. **Occupancy**: outside the floor, `len > cap / 4` after any operation
//! 3. **No thrash**: a push/pop pair from a valid state resizes at most once
//! 4. **Failure is a no-op**: a refused allocation leaves the state unchanged

/// Capacity of a fresh array (copied from src/policy.rs)
pub const INIT_CAP: usize = 4;

// ============================================================================
// RESIZE POLICY (copied from src/policy.rs)
// ============================================================================

pub fn needs_grow(len: usize, cap: usize) -> bool {
    len >= cap
}

pub fn grow_target(cap: usize) -> Option<usize> {
    cap.max(INIT_CAP).checked_mul(2)
}

pub fn shrink_target(len: usize, cap: usize) -> Option<usize> {
    if cap > INIT_CAP && len <= cap / 4 {
        Some((cap / 2).max(INIT_CAP))
    } else {
        None
    }
}

// ============================================================================
// STATE MODEL
// ============================================================================

/// The part of an array the resize policy sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub len: usize,
    pub cap: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    Empty,
    Alloc,
}

impl State {
    pub const fn new() -> Self {
        Self {
            len: 0,
            cap: INIT_CAP,
        }
    }

    /// States reachable from `new` satisfy this.
    pub fn is_valid(&self) -> bool {
        self.len <= self.cap
            && self.cap >= INIT_CAP
            && (self.cap == INIT_CAP || self.len > self.cap / 4)
    }

    /// Model of `push`; `alloc_ok` decides whether a needed allocation succeeds.
    pub fn push(&mut self, alloc_ok: bool) -> Result<(), StepError> {
        if needs_grow(self.len, self.cap) {
            let target = grow_target(self.cap).ok_or(StepError::Alloc)?;
            if !alloc_ok {
                return Err(StepError::Alloc);
            }
            self.cap = target;
        }
        self.len += 1;
        Ok(())
    }

    /// Model of `pop`; the shrink allocation happens before removal.
    pub fn pop(&mut self, alloc_ok: bool) -> Result<(), StepError> {
        let remaining = self.len.checked_sub(1).ok_or(StepError::Empty)?;
        let target = shrink_target(remaining, self.cap);
        if target.is_some() && !alloc_ok {
            return Err(StepError::Alloc);
        }
        self.len = remaining;
        if let Some(target) = target {
            self.cap = target;
        }
        Ok(())
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_valid_state() -> State {
        let cap_exp: u32 = kani::any_where(|&e| e < 40);
        let cap = INIT_CAP << cap_exp;
        let len: usize = kani::any_where(|&l| l <= cap);
        let state = State { len, cap };
        kani::assume(state.is_valid());
        state
    }

    /// Verify push and pop keep every state invariant.
    #[kani::proof]
    fn verify_operations_preserve_validity() {
        let mut state = any_valid_state();
        let is_push: bool = kani::any();
        let alloc_ok: bool = kani::any();

        let _ = if is_push {
            state.push(alloc_ok)
        } else {
            state.pop(alloc_ok)
        };

        kani::assert(state.is_valid(), "operations must preserve validity");
    }

    /// Verify a refused allocation leaves the state unchanged.
    #[kani::proof]
    fn verify_alloc_failure_is_noop() {
        let original = any_valid_state();
        let is_push: bool = kani::any();
        let mut state = original;

        let result = if is_push {
            state.push(false)
        } else {
            state.pop(false)
        };

        if result.is_err() {
            kani::assert(state == original, "failed operation must not mutate");
        }
    }

    /// Verify a push followed by a pop resizes at most once.
    #[kani::proof]
    fn verify_push_pop_no_thrash() {
        let mut state = any_valid_state();
        let start_cap = state.cap;

        kani::assume(state.push(true).is_ok());
        let after_push = state.cap;
        kani::assume(state.pop(true).is_ok());

        let resizes = (after_push != start_cap) as u8 + (state.cap != after_push) as u8;
        kani::assert(resizes <= 1, "push/pop pair must not resize twice");
    }

    /// Verify a pop followed by a push resizes at most once.
    #[kani::proof]
    fn verify_pop_push_no_thrash() {
        let mut state = any_valid_state();
        let start_cap = state.cap;

        kani::assume(state.pop(true).is_ok());
        let after_pop = state.cap;
        kani::assume(state.push(true).is_ok());

        let resizes = (after_pop != start_cap) as u8 + (state.cap != after_pop) as u8;
        kani::assert(resizes <= 1, "pop/push pair must not resize twice");
    }
}
