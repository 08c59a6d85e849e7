// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operation scripts for `dynarray run`.
//!
//! Each argument is one operation: `push:<int>`, `pop`, `get:<int>`, `len`
//! or `print`. The whole script is parsed before anything runs, so a typo in
//! the last argument cannot leave half a script applied.

use std::fmt;
use std::str::FromStr;

use dynarray::{ArrayError, DynamicArray, IntArray};

/// One scripted array operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    Pop,
    Get(isize),
    Len,
    Print,
}

/// Why an operation argument could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOpError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for ParseOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operation '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseOpError {}

impl FromStr for Op {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseOpError {
            input: s.to_string(),
            reason,
        };
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        match (name.to_lowercase().as_str(), arg) {
            ("push" | "append" | "add", Some(arg)) => arg
                .parse()
                .map(Op::Push)
                .map_err(|_| err("value must be a 32-bit integer")),
            ("get", Some(arg)) => arg
                .parse()
                .map(Op::Get)
                .map_err(|_| err("index must be an integer")),
            ("push" | "append" | "add" | "get", None) => Err(err("missing ':<int>' argument")),
            ("pop", None) => Ok(Op::Pop),
            ("len" | "length", None) => Ok(Op::Len),
            ("print" | "show", None) => Ok(Op::Print),
            ("pop" | "len" | "length" | "print" | "show", Some(_)) => {
                Err(err("operation takes no argument"))
            }
            _ => Err(err("expected push:<int>, pop, get:<int>, len or print")),
        }
    }
}

/// What a single operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pushed(i32),
    Popped(i32),
    Value { index: isize, value: i32 },
    Len(usize),
    Items(Vec<i32>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pushed(value) => write!(f, "pushed {}", value),
            Outcome::Popped(value) => write!(f, "popped {}", value),
            Outcome::Value { index, value } => write!(f, "[{}] = {}", index, value),
            Outcome::Len(len) => write!(f, "len = {}", len),
            Outcome::Items(items) => write!(f, "{:?}", items),
        }
    }
}

impl Op {
    /// Apply this operation to `array`.
    pub fn apply<A: dynarray::BufferAllocator>(
        self,
        array: &mut DynamicArray<i32, A>,
    ) -> Result<Outcome, ArrayError> {
        match self {
            Op::Push(value) => array.push(value).map(|()| Outcome::Pushed(value)),
            Op::Pop => array.pop().map(Outcome::Popped),
            Op::Get(index) => array
                .at(index)
                .map(|&value| Outcome::Value { index, value }),
            Op::Len => Ok(Outcome::Len(array.len())),
            Op::Print => Ok(Outcome::Items(array.to_vec())),
        }
    }
}

/// Result of running a whole script.
#[derive(Debug)]
pub struct Transcript {
    pub array: IntArray,
    /// Per-operation results, plus the capacity change it caused, if any.
    pub steps: Vec<Step>,
}

#[derive(Debug)]
pub struct Step {
    pub op: Op,
    pub result: Result<Outcome, ArrayError>,
    pub resized: Option<(usize, usize)>,
}

/// Run `ops` against a fresh array. With `strict`, stop after the first
/// failed operation.
pub fn run(ops: &[Op], strict: bool) -> Transcript {
    let mut array = IntArray::new();
    let mut steps = Vec::with_capacity(ops.len());

    for &op in ops {
        let before = array.capacity();
        let result = op.apply(&mut array);
        let after = array.capacity();
        let failed = result.is_err();
        steps.push(Step {
            op,
            result,
            resized: (before != after).then_some((before, after)),
        });
        if strict && failed {
            break;
        }
    }

    Transcript { array, steps }
}
