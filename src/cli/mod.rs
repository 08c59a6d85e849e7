// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dynarray command-line interface.
//!
//! Two subcommands: `menu` for the interactive add/pop/print loop (the default
//! when no subcommand is given), and `run` to apply a list of operations
//! non-interactively and print each result.

pub mod display;
pub mod menu;
pub mod ops;

use clap::{Parser, Subcommand};

use ops::Op;

#[derive(Parser)]
#[command(
    name = "dynarray",
    about = "Drive a growable integer array from the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output (same as setting NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu: add, pop, print, get, show length and capacity
    Menu,

    /// Apply operations in order and print each result
    Run {
        /// Operations: push:<int>, pop, get:<int>, len, print
        #[arg(required = true)]
        ops: Vec<Op>,

        /// Print the final array as JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Stop at the first failed operation and exit with status 1
        #[arg(long)]
        strict: bool,
    },
}
