//! Styles for the randnote CLI.
//!
//! Output is styled by meaning, not by color: renderers ask for `MUTED` or
//! `WARNING`, never for "yellow". Changing the look means changing this file
//! only.
//!
//! | Style | Used for |
//! |-------|----------|
//! | `TITLE` | Page names in listings |
//! | `MUTED` | Counts, paths and other metadata |
//! | `TIME` | "updated ... ago" columns |
//! | `TAG` | Attribute markers (`journal`, `dangling`, ...) |
//! | `INFO` / `SUCCESS` / `WARNING` | Command messages by level |
//!
//! Styles are built once through `once_cell::sync::Lazy`. Whether they are
//! applied at all is decided per call by the renderer, so tests render plain
//! text.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());

pub static INFO: Lazy<Style> = Lazy::new(Style::new);
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());

/// Apply `style` to `text` when `color` is on.
pub fn paint(style: &Style, text: &str, color: bool) -> String {
    if color {
        style.apply_to(text).force_styling(true).to_string()
    } else {
        text.to_string()
    }
}
