//! Whitespace repair for machine-formatted templates.
//!
//! Generic stylesheet formatters do not know about `${name}` interpolation
//! or `:!state` pseudo-selectors and happily explode them across lines.
//! These rewrites undo that damage so a reformatted template still parses:
//!
//! ```text
//! background: $ {          background: ${clr_blue};
//!     clr_blue        →
//! }
//! ;
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A `${name}` reference with stray whitespace anywhere inside or after it.
static SPACED_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*\{\s*(\w+)\s*\}\s*").expect("spaced reference pattern"));

/// A pseudo-selector with space between `:` and `!`.
static SPACED_PSEUDO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*!").expect("spaced pseudo pattern"));

/// Collapse formatter-damaged interpolations and pseudo-selectors.
///
/// Trailing whitespace after a reference is consumed too, so a reference
/// split from its `;` across lines rejoins it.
#[must_use]
pub fn normalize(text: &str) -> String {
    let collapsed =
        SPACED_REFERENCE.replace_all(text, |caps: &Captures<'_>| format!("${{{}}}", &caps[1]));
    SPACED_PSEUDO.replace_all(&collapsed, ":!").into_owned()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
