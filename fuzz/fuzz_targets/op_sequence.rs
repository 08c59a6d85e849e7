// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary push/pop/get sequences.
//!
//! Every step is mirrored on a `Vec`. Contents, errors and capacity bounds
//! must agree after each operation, and no sequence may panic.

#![no_main]

use arbitrary::Arbitrary;
use dynarray::{ArrayError, IntArray, INIT_CAP};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(i32),
    Pop,
    Get(isize),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut array = IntArray::new();
    let mut oracle: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Push(value) => {
                array.push(value).expect("heap push failed");
                oracle.push(value);
            }
            Op::Pop => match oracle.pop() {
                Some(expected) => assert_eq!(array.pop(), Ok(expected)),
                None => assert_eq!(array.pop(), Err(ArrayError::EmptyArray)),
            },
            Op::Get(index) => {
                let expected = usize::try_from(index).ok().and_then(|i| oracle.get(i));
                assert_eq!(array.at(index).ok(), expected);
            }
        }

        assert_eq!(array.as_slice(), oracle.as_slice());
        assert!(array.capacity() >= INIT_CAP);
        assert!(array.len() <= array.capacity());
        // occupancy above a quarter unless at the floor
        assert!(array.capacity() == INIT_CAP || array.len() * 4 > array.capacity());
    }
});
