//! # repaint — theme-to-stylesheet conversion
//!
//! Converts a color theme written for one ecosystem into a stylesheet for
//! another, letting a user's variant theme override a reference palette
//! through perceptual color remapping. The workspace wires together:
//!
//!   repaint-color    → exact RGB/RGBA model, hex parsing, HSL math
//!   repaint-theme    → theme documents, palette instances, remapping
//!   repaint-template → `@def` variables and `${name}`/`@fn()` expansion
//!
//! This crate is the pipeline: [`convert`] takes a reference theme, the
//! reference stylesheet written against it, and a target theme, and
//! produces the stylesheet recolored for the target. All I/O — reading
//! theme files, walking extension directories, writing output — belongs to
//! the surrounding tooling; everything here is text in, text out.
//!
//! Each [`convert`] call is independent and owns all of its state, so a
//! batch over many themes parallelizes by running one call per document.

pub use repaint_color as color;
pub use repaint_template as template;
pub use repaint_theme as theme;

use repaint_theme::ThemeError;

/// The directive a dark reference stylesheet opens with, and what it
/// becomes when the target theme is light.
const DARK_IMPORT: &str = "@importtheme \"dark\";";
const LIGHT_IMPORT: &str = "@importtheme \"_base\";";

/// The result of one theme conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Filesystem-safe name for the converted theme, from the target
    /// document's declared name.
    pub name: String,

    /// The recolored stylesheet.
    pub stylesheet: String,
}

/// Convert `reference_stylesheet` — written against the theme in
/// `reference_theme` — into a stylesheet recolored for `target_theme`.
///
/// Every hex color token in the stylesheet is remapped from the reference
/// palette onto the target palette. When the target declares itself a
/// light theme, the dark base-import directive is rewritten to the neutral
/// base. `fallback_name` names the result when the target document
/// declares no name of its own.
///
/// # Errors
///
/// [`ThemeError`] when either theme document fails to load. Malformed
/// individual color literals never fail a conversion — they are skipped or
/// passed through.
pub fn convert(
    reference_theme: &[u8],
    reference_stylesheet: &str,
    target_theme: &[u8],
    fallback_name: &str,
) -> Result<Conversion, ThemeError> {
    let source = theme::parse(reference_theme)?;
    let target = theme::parse(target_theme)?;

    let mut stylesheet = source.remap_stylesheet(reference_stylesheet, &target);
    if target.document().is_light() {
        stylesheet = stylesheet.replace(DARK_IMPORT, LIGHT_IMPORT);
    }

    Ok(Conversion {
        name: theme_name(&target.document().name, fallback_name),
        stylesheet,
    })
}

/// A name safe to use as a directory component: path separators become
/// underscores, and an unnamed theme falls back to the caller's name, then
/// to a plain placeholder.
fn theme_name(declared: &str, fallback: &str) -> String {
    let sanitized: String = declared
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if !sanitized.is_empty() {
        sanitized
    } else if !fallback.is_empty() {
        fallback.to_string()
    } else {
        "theme".to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
