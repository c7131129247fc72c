//! Color-transform function calls: `@lighten(#RRGGBB, 20)` and friends.
//!
//! Calls appear in variable values and stylesheet bodies. The two known
//! transforms evaluate through the color model; anything else — unknown
//! name, missing argument, unparsable argument — collapses to the bare
//! color literal, so a template survives a typo'd transform with its
//! colors intact.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use repaint_color::Rgba;

/// `@name(#RRGGBB)` or `@name(#RRGGBB, args)`. Function names are
/// identifier-shaped; the color argument is the full 6-digit form.
static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z_][A-Za-z0-9_]*)\(\s*(#[A-Fa-f0-9]{6})(,[^)]*)?\)")
        .expect("call pattern")
});

/// Evaluate every transform call in `text`.
///
/// `lighten` and `darken` (case-insensitive) with a numeric argument apply
/// the matching lightness adjustment; the argument is a percentage, so
/// `20` means 0.20. Results serialize as alpha-aware uppercase hex. Every
/// other call is replaced by its color literal alone.
#[must_use]
pub fn apply_functions(text: &str) -> String {
    CALL.replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[1];
        let literal = &caps[2];
        let argument = caps.get(3).map(|m| m.as_str()[1..].trim());
        evaluate(name, literal, argument).unwrap_or_else(|| literal.to_string())
    })
    .into_owned()
}

/// Run one transform, or `None` when the call should collapse to its
/// literal.
fn evaluate(name: &str, literal: &str, argument: Option<&str>) -> Option<String> {
    let percent: f64 = argument?.parse().ok()?;
    let amount = percent / 100.0;
    let color = Rgba::from_hex(literal).ok()?;
    let adjusted = if name.eq_ignore_ascii_case("lighten") {
        color.rgb.lighten(amount)
    } else if name.eq_ignore_ascii_case("darken") {
        color.rgb.darken(amount)
    } else {
        tracing::debug!(name, "unknown transform; collapsing to literal");
        return None;
    };
    Some(adjusted.to_hex())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
