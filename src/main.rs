// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use dynarray::{IntArray, Snapshot};
use std::io::{self, Write};

mod cli;
use cli::display::{self, Palette};
use cli::menu::Menu;
use cli::ops::{self, Op};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let palette = if cli.no_color {
        Palette::plain()
    } else {
        Palette::detect()
    };

    let code = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(palette),
        Commands::Run { ops, json, strict } => run_ops(&ops, json, strict, palette),
    };
    std::process::exit(code);
}

fn run_menu(palette: Palette) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match Menu::new(stdin.lock(), stdout.lock(), stderr.lock(), palette).run() {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{}", display::failure(palette, &format!("I/O error: {}", e)));
            1
        }
    }
}

fn run_ops(script: &[Op], json: bool, strict: bool, palette: Palette) -> i32 {
    let transcript = ops::run(script, strict);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut failed = false;

    for step in &transcript.steps {
        // With --json, stdout carries the snapshot and nothing else.
        let (line, to_stderr) = match &step.result {
            Ok(outcome) => (display::success(palette, &outcome.to_string()), json),
            Err(e) => {
                failed = true;
                (display::failure(palette, &format!("{:?}: {}", step.op, e)), true)
            }
        };
        let notice = step
            .resized
            .map(|(from, to)| display::resize_notice(palette, from, to));

        let sink: &mut dyn Write = if to_stderr { &mut err } else { &mut out };
        if writeln!(sink, "{}", line).is_err() {
            return 1;
        }
        if let Some(notice) = notice {
            let sink: &mut dyn Write = if json { &mut err } else { &mut out };
            if writeln!(sink, "{}", notice).is_err() {
                return 1;
            }
        }
    }

    let summary = render_final(&transcript.array, json, palette);
    match summary {
        Ok(text) => {
            if writeln!(out, "{}", text).is_err() {
                return 1;
            }
        }
        Err(e) => {
            let _ = writeln!(err, "{}", display::failure(palette, &e));
            return 1;
        }
    }

    if strict && failed {
        1
    } else {
        0
    }
}

fn render_final(array: &IntArray, json: bool, palette: Palette) -> Result<String, String> {
    let snapshot = array.snapshot();
    if json {
        return snapshot_json(&snapshot);
    }
    Ok(format!(
        "{}\n{}",
        display::elements(palette, &snapshot.items),
        display::stats(palette, &snapshot)
    ))
}

#[cfg(feature = "serde_json")]
fn snapshot_json(snapshot: &Snapshot<i32>) -> Result<String, String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| e.to_string())
}

#[cfg(not(feature = "serde_json"))]
fn snapshot_json(_snapshot: &Snapshot<i32>) -> Result<String, String> {
    Err("JSON output requires the serde_json feature".to_string())
}
