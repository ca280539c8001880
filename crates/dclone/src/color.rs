//! CLI color helpers.
//!
//! Every helper respects `NO_COLOR`, `FORCE_COLOR` and TTY detection through
//! owo-colors' `if_supports_color()`. `--no-color` sets an in-process flag
//! that skips styling entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use dclone_core::Progress;

static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const FROST: Rgb = Rgb::from_hex(0x7CB4C8); // Accent, server names
const VERDANT: Rgb = Rgb::from_hex(0x6B8F5E); // Enabled
const GOLD: Rgb = Rgb::from_hex(0xC49A5C); // Rising progress, warnings
const BLOOD: Rgb = Rgb::from_hex(0xB87060); // Imminent spawn, errors
const ASH: Rgb = Rgb::from_hex(0x5C6370); // Secondary info, borders

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: owo_colors::Stream, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

pub fn frost(text: &str) -> String {
    paint(text, Stdout, FROST)
}

pub fn verdant(text: &str) -> String {
    paint(text, Stdout, VERDANT)
}

pub fn gold(text: &str) -> String {
    paint(text, Stdout, GOLD)
}

pub fn blood(text: &str) -> String {
    paint(text, Stdout, BLOOD)
}

pub fn ash(text: &str) -> String {
    paint(text, Stdout, ASH)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color a progress label by how close the spawn is.
///
/// 0-2 muted, 3-4 gold, 5-6 red. Unknown progress stays plain.
pub fn progress(label: &str, value: Option<Progress>) -> String {
    match value.map(|p| p.get()) {
        Some(0..=2) => ash(label),
        Some(3..=4) => gold(label),
        Some(_) => blood(label),
        None => label.to_string(),
    }
}

/// Color an on/off preference value.
pub fn enabled(label: &str, on: bool) -> String {
    if on { verdant(label) } else { ash(label) }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    paint(text, Stderr, BLOOD)
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    paint(text, Stderr, GOLD)
}

/// Hint styling for secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint(text, Stderr, ASH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let c = Rgb::from_hex(0x7CB4C8);
        assert_eq!((c.r, c.g, c.b), (124, 180, 200));
        let white = Rgb::from_hex(0xFFFFFF);
        assert_eq!((white.r, white.g, white.b), (255, 255, 255));
    }

    #[test]
    fn test_no_color_flag_disables_all_formatting() {
        NO_COLOR_FLAG.store(true, Ordering::Relaxed);

        assert_eq!(frost("x"), "x");
        assert_eq!(verdant("x"), "x");
        assert_eq!(gold("x"), "x");
        assert_eq!(blood("x"), "x");
        assert_eq!(ash("x"), "x");
        assert_eq!(bold("x"), "x");
        assert_eq!(error("x"), "x");
        assert_eq!(warning("x"), "x");
        assert_eq!(hint("x"), "x");

        NO_COLOR_FLAG.store(false, Ordering::Relaxed);
    }

    #[test]
    fn test_progress_keeps_label() {
        for n in 0..=6 {
            let p = Progress::new(n).unwrap();
            assert!(progress(&p.to_string(), Some(p)).contains(&p.to_string()));
        }
        assert_eq!(progress("[?/6]", None), "[?/6]");
    }

    #[test]
    fn test_enabled_keeps_label() {
        assert!(enabled("on", true).contains("on"));
        assert!(enabled("off", false).contains("off"));
    }
}
