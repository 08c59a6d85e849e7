// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive menu over an integer array.
//!
//! Reads choices line by line and drives the array through its public
//! operations only. Generic over the reader and both writers so the whole
//! session can be scripted in tests. Failures go to the error writer.

use std::io::{self, BufRead, Write};

use dynarray::{ArrayError, IntArray};

use super::display::{self, Palette};

const OPTIONS: &[(u8, &str)] = &[
    (1, "Add to the array"),
    (2, "Pop from the array"),
    (3, "Print the array"),
    (4, "Get element at index"),
    (5, "Show length and capacity"),
    (6, "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Pop,
    Print,
    Get,
    Stats,
    Quit,
}

impl Choice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Choice::Add),
            2 => Some(Choice::Pop),
            3 => Some(Choice::Print),
            4 => Some(Choice::Get),
            5 => Some(Choice::Stats),
            6 => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// Message for an index the user typed that the array cannot hold.
///
/// Formats the index as entered, so values wider than `isize` are reported
/// unchanged.
fn out_of_range(index: i64, len: usize) -> String {
    format!("index {} out of range for length {}", index, len)
}

/// Interactive session state.
pub struct Menu<R, W, E> {
    input: R,
    output: W,
    errors: E,
    palette: Palette,
    array: IntArray,
}

impl<R: BufRead, W: Write, E: Write> Menu<R, W, E> {
    pub fn new(input: R, output: W, errors: E, palette: Palette) -> Self {
        Self {
            input,
            output,
            errors,
            palette,
            array: IntArray::new(),
        }
    }

    /// Run until the user quits or input ends. Returns the final array.
    pub fn run(mut self) -> io::Result<IntArray> {
        loop {
            writeln!(self.output, "\n{}", display::menu(self.palette, OPTIONS))?;
            let Some(number) = self.read_int("Enter your choice: ")? else {
                break;
            };

            match Choice::from_number(number) {
                Some(Choice::Quit) => break,
                Some(choice) => self.handle(choice)?,
                None => self.fail("Invalid choice, try again...")?,
            }
        }

        writeln!(self.output, "Thank you...")?;
        self.output.flush()?;
        Ok(self.array)
    }

    fn handle(&mut self, choice: Choice) -> io::Result<()> {
        let before = self.array.capacity();
        let palette = self.palette;

        let result: Result<String, String> = match choice {
            Choice::Add => {
                let Some(value) = self.read_int("Enter the element you want to add: ")? else {
                    return Ok(());
                };
                match i32::try_from(value) {
                    Ok(value) => self
                        .array
                        .push(value)
                        .map(|()| format!("Added {}", value))
                        .map_err(|e| e.to_string()),
                    Err(_) => Err(format!("{} does not fit in a 32-bit integer", value)),
                }
            }
            Choice::Pop => self
                .array
                .pop()
                .map(|value| format!("Popped {}", value))
                .map_err(|e| e.to_string()),
            Choice::Print => Ok(display::elements(palette, self.array.as_slice())),
            Choice::Get => {
                let Some(index) = self.read_int("Enter the index: ")? else {
                    return Ok(());
                };
                self.element_at(index)
                    .map(|value| format!("Element at {} - {}", index, value))
            }
            Choice::Stats => Ok(display::stats(palette, &self.array.snapshot())),
            Choice::Quit => return Ok(()),
        };

        match result {
            Ok(line) => {
                let line = match choice {
                    Choice::Add | Choice::Pop => display::success(palette, &line),
                    _ => line,
                };
                writeln!(self.output, "{}", line)?;
            }
            Err(msg) => self.fail(&msg)?,
        }

        let after = self.array.capacity();
        if before != after {
            writeln!(self.output, "{}", display::resize_notice(palette, before, after))?;
        }
        Ok(())
    }

    fn element_at(&self, index: i64) -> Result<i32, String> {
        let Ok(signed) = isize::try_from(index) else {
            return Err(out_of_range(index, self.array.len()));
        };
        match self.array.at(signed) {
            Ok(value) => Ok(*value),
            Err(ArrayError::IndexOutOfRange { len, .. }) => Err(out_of_range(index, len)),
            Err(e) => Err(e.to_string()),
        }
    }

    fn fail(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.errors, "{}", display::failure(self.palette, msg))?;
        self.errors.flush()
    }

    /// Prompt until a whole number is entered. `None` means input ended.
    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.fail("Please enter a whole number.")?,
            }
        }
    }
}
