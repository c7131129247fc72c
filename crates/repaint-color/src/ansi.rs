// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for terminal color previews.
//
// Pure string builders — no terminal detection, no state. Callers that
// write to a non-ANSI sink should skip these and print the hex form.

use crate::color::Rgb;

/// Wrap `text` in a 24-bit foreground escape so it renders in `rgb` on a
/// truecolor-capable terminal, resetting attributes afterwards.
#[must_use]
pub fn painted(rgb: Rgb, text: &str) -> String {
    let (r, g, b) = rgb.to_bytes();
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
