// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the dynarray CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `DYNARRAY_THEME` first, then `COLORFGBG`, then defaults to dark. Colour is
//! off when `NO_COLOR` is set or stdout is not a TTY.
//!
//! Everything here returns `String`s instead of printing, so the menu can
//! write to any `io::Write` and tests can read back what it wrote.
//!
//! # Theme detection order
//!
//! 1. `DYNARRAY_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use dynarray::Snapshot;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 40;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("DYNARRAY_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Colour switch carried by everything that writes output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colour on when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            enabled: use_colors(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Apply theme color with optional modifiers
    pub fn themed(&self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Apply modifiers only
    pub fn styled(&self, styles: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", styles.join(""), text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(palette: Palette, label: &str) -> String {
    let colored_label = palette.themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    palette.themed(GRAY, &[], &format!("┌{}{}┐", label_part, "─".repeat(remaining)))
}

/// Content line: │ content          │
pub fn row(palette: Palette, content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!(
        "{}{}{}{}",
        palette.themed(GRAY, &[], "│"),
        content,
        " ".repeat(pad),
        palette.themed(GRAY, &[], "│")
    )
}

/// Section footer: └──────────────────┘
pub fn section_bot(palette: Palette) -> String {
    palette.themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Options box shown before every menu prompt.
pub fn menu(palette: Palette, options: &[(u8, &str)]) -> String {
    let mut lines = vec![section_top(palette, "MENU")];
    for (key, label) in options {
        let key = palette.themed(YELLOW, &[BOLD], &key.to_string());
        lines.push(row(palette, &format!(" {}. {}", key, label)));
    }
    lines.push(section_bot(palette));
    lines.join("\n")
}

/// Element listing, 1-based, or the empty-array notice.
pub fn elements<T: std::fmt::Display>(palette: Palette, items: &[T]) -> String {
    if items.is_empty() {
        return palette.themed(GRAY, &[], "The array is empty.");
    }
    let mut lines = vec!["The elements in the array are:".to_string()];
    for (i, item) in items.iter().enumerate() {
        lines.push(format!(
            "Element {} - {}",
            palette.themed(BLUE, &[], &(i + 1).to_string()),
            item
        ));
    }
    lines.join("\n")
}

/// One-line length/capacity summary.
pub fn stats<T>(palette: Palette, snapshot: &Snapshot<T>) -> String {
    format!(
        "Length: {}  Capacity: {}",
        palette.styled(&[BOLD], &snapshot.len.to_string()),
        palette.styled(&[BOLD], &snapshot.capacity.to_string())
    )
}

/// Notice printed whenever an operation changed the capacity.
pub fn resize_notice(palette: Palette, from: usize, to: usize) -> String {
    let verb = if to > from { "Growing" } else { "Shrinking" };
    format!(
        "{} {} {} → {}",
        palette.themed(CYAN, &[], "↻"),
        palette.styled(&[DIM], &format!("{} array...", verb)),
        from,
        palette.themed(GREEN, &[BOLD], &to.to_string())
    )
}

pub fn success(palette: Palette, text: &str) -> String {
    format!("{} {}", palette.themed(GREEN, &[], "✓"), text)
}

pub fn failure(palette: Palette, text: &str) -> String {
    format!("{} {}", palette.themed(RED, &[BOLD], "❌"), text)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
