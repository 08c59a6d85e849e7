// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for allocation failure at arbitrary points.
//!
//! The allocator is refilled with a fuzzer-chosen number of permits between
//! operations. A refused resize must return `AllocationFailure` and leave the
//! array exactly as it was.

#![no_main]

use arbitrary::Arbitrary;
use dynarray::testing::FailAfter;
use dynarray::{ArrayError, DynamicArray};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(i32),
    Pop,
    Allow(u8),
}

fuzz_target!(|input: (u8, Vec<Op>)| {
    let (initial, ops) = input;
    let Ok(mut array) = DynamicArray::try_new_in(FailAfter::new(initial as usize)) else {
        return;
    };

    for op in ops {
        let before = array.as_slice().to_vec();
        let cap_before = array.capacity();

        let result = match op {
            Op::Push(value) => array.push(value),
            Op::Pop => array.pop().map(|_| ()),
            Op::Allow(n) => {
                array.allocator_mut().allow(n as usize);
                Ok(())
            }
        };

        match result {
            Err(ArrayError::AllocationFailure { .. }) => {
                assert_eq!(array.as_slice(), before.as_slice());
                assert_eq!(array.capacity(), cap_before);
            }
            Err(ArrayError::EmptyArray) => assert!(before.is_empty()),
            Err(ArrayError::IndexOutOfRange { .. }) => unreachable!("no indexed access here"),
            Ok(()) => {}
        }
        assert_eq!(array.validate(), Ok(()));
    }
});
