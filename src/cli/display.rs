// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sorted-search CLI.
//!
//! `SORTED_SEARCH_THEME=light|dark` picks the palette, falling back to
//! `COLORFGBG` and then dark. Output is plain when stdout is not a TTY, when
//! `NO_COLOR` is set, or when the config turns colors off.

use std::sync::OnceLock;

use sorted_search::{Probe, SearchOutcome, Step};

/// Inner width of the scenario table.
const TABLE_WIDTH: usize = 64;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

static LIGHT: OnceLock<bool> = OnceLock::new();
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

fn light_background() -> bool {
    *LIGHT.get_or_init(|| {
        match std::env::var("SORTED_SEARCH_THEME").as_deref() {
            Ok("light") => return true,
            Ok("dark") => return false,
            _ => {}
        }
        // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is light
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next()?.parse::<u8>().ok())
            .is_some_and(|bg| bg >= 7 && bg != 8)
    })
}

/// Apply the config's color preference. Only the first call takes effect.
pub fn init_colors(enabled: bool) {
    let _ = COLOR_ENABLED.set(enabled);
}

/// Colors only when allowed by config, `NO_COLOR`, and a TTY on stdout.
fn use_colors() -> bool {
    COLOR_ENABLED.get().copied().unwrap_or(true)
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

#[derive(Clone, Copy)]
enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
}

impl Color {
    /// OneDark on dark terminals, One Light otherwise.
    fn rgb(self) -> (u8, u8, u8) {
        match (self, light_background()) {
            (Color::Red, false) => (224, 108, 117),
            (Color::Red, true) => (228, 86, 73),
            (Color::Green, false) => (152, 195, 121),
            (Color::Green, true) => (80, 161, 79),
            (Color::Yellow, false) => (229, 192, 123),
            (Color::Yellow, true) => (193, 132, 1),
            (Color::Cyan, false) => (86, 182, 194),
            (Color::Cyan, true) => (1, 132, 188),
            (Color::Gray, false) => (92, 99, 112),
            (Color::Gray, true) => (160, 161, 167),
        }
    }
}

fn paint(color: Color, style: &str, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = color.rgb();
    format!("{style}\x1b[38;2;{r};{g};{b}m{text}{RESET}")
}

/// Printed width, ignoring ANSI escapes.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// ┌─ TITLE ──────┐
pub fn table_top(title: &str) {
    let head = format!("─ {} ", paint(Color::Cyan, BOLD, title));
    let fill = "─".repeat(TABLE_WIDTH.saturating_sub(visible_len(&head)));
    println!(
        "{}{}{}",
        paint(Color::Gray, "", "┌"),
        head,
        paint(Color::Gray, "", &format!("{fill}┐"))
    );
}

/// │ content      │
pub fn table_row(content: &str) {
    let pad = " ".repeat(TABLE_WIDTH.saturating_sub(visible_len(content) + 1));
    let edge = paint(Color::Gray, "", "│");
    println!("{edge} {content}{pad}{edge}");
}

/// └──────────────┘
pub fn table_bottom() {
    println!("{}", paint(Color::Gray, "", &format!("└{}┘", "─".repeat(TABLE_WIDTH))));
}

pub fn outcome(outcome: SearchOutcome) -> String {
    let color = if outcome.is_found() {
        Color::Green
    } else {
        Color::Yellow
    };
    paint(color, BOLD, &outcome.to_string())
}

pub fn probe(index: usize, probe: &Probe) -> String {
    let step = match probe.step {
        Step::Hit => paint(Color::Green, "", "hit"),
        Step::Left => paint(Color::Cyan, "", "go left"),
        Step::Right => paint(Color::Cyan, "", "go right"),
    };
    format!(
        "{} window [{}, {}] mid {} -> {}",
        paint(Color::Gray, DIM, &format!("#{}", index + 1)),
        probe.left,
        probe.right,
        probe.mid,
        step
    )
}

pub fn verdict(ok: bool) -> String {
    if ok {
        paint(Color::Green, "", "ok")
    } else {
        paint(Color::Red, BOLD, "MISMATCH")
    }
}
