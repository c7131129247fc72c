//! Template rendering — turning a `@def` header plus stylesheet body into
//! a fully resolved stylesheet.
//!
//! A template is a header of `@def` lines, one blank line, then the body.
//! Rendering resolves every `${name}` reference, evaluates the transform
//! calls that substitution uncovers, and drops blank body lines. A body
//! line that referenced a function-defined variable gets a `/* simplified */`
//! marker after its last statement terminator, so a reader of the output
//! can tell the value was computed, not authored.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::TemplateError;
use crate::functions::apply_functions;
use crate::vars::{REFERENCE, load_variables};

/// Hard ceiling on substitutions per `expand` call. Reference resolution is
/// expected to finish long before this; the ceiling only catches a
/// variable table whose entries feed each other endlessly.
const MAX_SUBSTITUTIONS: usize = 1024;

/// Resolve every `${name}` reference in `text` against `variables`, then
/// evaluate transform calls.
///
/// Substitution replaces all occurrences of one reference per step. An
/// undefined reference stops resolution with a warning and leaves the
/// remaining references literal, as does a substitution that makes no
/// progress — expansion always terminates.
#[must_use]
pub fn expand(text: &str, variables: &IndexMap<String, String>) -> String {
    let mut result = text.to_string();
    let mut budget = MAX_SUBSTITUTIONS;
    loop {
        let (reference, name) = match REFERENCE.captures(&result) {
            Some(caps) => (caps[0].to_string(), caps[1].to_string()),
            None => break,
        };
        let Some(value) = variables.get(&name) else {
            tracing::warn!(variable = %name, "undefined variable; skipping replacement");
            break;
        };
        let updated = result.replace(&reference, value);
        if updated == result {
            tracing::warn!(variable = %name, "substitution makes no progress; stopping");
            break;
        }
        result = updated;

        budget -= 1;
        if budget == 0 {
            tracing::warn!("substitution budget exhausted; leaving remaining references");
            break;
        }
    }
    apply_functions(&result)
}

/// Render a full template document to its resolved body.
///
/// # Errors
///
/// [`TemplateError::MissingSeparator`] when the document has no blank line
/// between the `@def` header and the body.
pub fn render(document: &str) -> Result<String, TemplateError> {
    let lines: Vec<&str> = document.lines().collect();
    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or(TemplateError::MissingSeparator)?;

    let header = lines[..separator].join("\n");
    let variables = load_variables(&header);

    // Variables whose resolved value still changes under function
    // evaluation were function-defined; lines using them get annotated.
    let simplified: HashSet<&str> = variables
        .iter()
        .filter(|(_, value)| apply_functions(value) != **value)
        .map(|(name, _)| name.as_str())
        .collect();

    let mut output: Vec<String> = Vec::new();
    for line in &lines[separator + 1..] {
        if line.trim().is_empty() {
            continue;
        }
        let mut rendered = expand(line, &variables);
        let used_simplified = REFERENCE
            .captures_iter(line)
            .any(|caps| simplified.contains(&caps[1]));
        if used_simplified {
            rendered = annotate(&rendered);
        }
        output.push(rendered);
    }

    Ok(output.join("\n"))
}

/// Insert the simplification marker after the line's last `;`. A line with
/// no terminator at all (an open declaration, a lone selector) is left
/// unmarked.
fn annotate(rendered: &str) -> String {
    let trimmed = rendered.trim_end();
    match trimmed.rfind(';') {
        Some(position) => format!(
            "{} /* simplified */{}",
            &trimmed[..=position],
            &trimmed[position + 1..]
        ),
        None => rendered.to_string(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table(defs: &[(&str, &str)]) -> IndexMap<String, String> {
        defs.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    // ── expand ───────────────────────────────────────────────────────────

    #[test]
    fn expand_replaces_reference() {
        let variables = table(&[("fg", "#FFFFFF")]);
        assert_eq!(expand("color: ${fg};", &variables), "color: #FFFFFF;");
    }

    #[test]
    fn expand_leaves_undefined_reference() {
        let variables = table(&[("fg", "#FFFFFF")]);
        assert_eq!(expand("color: ${unknown};", &variables), "color: ${unknown};");
    }

    #[test]
    fn expand_evaluates_functions_after_substitution() {
        let variables = table(&[("fg", "background: ")]);
        assert_eq!(
            expand("color: ${fg}@func(#FF0000, param);", &variables),
            "color: background: #FF0000;"
        );
    }

    #[test]
    fn expand_resolves_function_defined_variable() {
        let variables = load_variables(
            "@def color-primary #ff5733;\n@def color-background @lighten(#ff5733, 20);",
        );
        let css = ".button {\n  color: ${color-primary};\n  background-color: ${color-background};\n}";
        assert_eq!(
            expand(css, &variables),
            ".button {\n  color: #ff5733;\n  background-color: #FFAB99;\n}"
        );
    }

    #[test]
    fn expand_terminates_on_self_reference() {
        let variables = table(&[("a", "${a}")]);
        assert_eq!(expand("x: ${a};", &variables), "x: ${a};");
    }

    #[test]
    fn expand_terminates_on_mutual_references() {
        // A hand-built table can chase its own tail; the budget stops it.
        let variables = table(&[("a", "${b}"), ("b", "${a}")]);
        let out = expand("x: ${a};", &variables);
        assert!(out.starts_with("x: ${"), "unexpected output: {out}");
    }

    // ── render ───────────────────────────────────────────────────────────

    #[test]
    fn render_full_template() {
        let document = "@def color-primary #ff5733;\n\
                        @def color-background @lighten(#ff5733, 20);\n\
                        @def color-foreground @darken(#ff5733, 20);\n\
                        \n\
                        .button {\n\
                        \x20 color: ${color-primary};\n\
                        \x20 background-color: ${color-background};\n\
                        \x20 border-color: ${color-foreground};\n\
                        }";
        let expected = ".button {\n\
                        \x20 color: #ff5733;\n\
                        \x20 background-color: #FFAB99; /* simplified */\n\
                        \x20 border-color: #CC2400; /* simplified */\n\
                        }";
        assert_eq!(render(document).unwrap(), expected);
    }

    #[test]
    fn render_one_liner_annotates_after_last_terminator() {
        let document = "@def c #ff5733; @def bg @lighten(#ff5733, 20);\n\n.btn{color:${c};background:${bg};}";
        assert_eq!(
            render(document).unwrap(),
            ".btn{color:#ff5733;background:#FFAB99; /* simplified */}"
        );
    }

    #[test]
    fn render_annotates_only_terminated_lines() {
        let document = "@def bg @lighten(#ff5733, 20);\n\nbackground: ${bg};\nborder: ${bg}";
        assert_eq!(
            render(document).unwrap(),
            "background: #FFAB99; /* simplified */\nborder: #FFAB99"
        );
    }

    #[test]
    fn render_passes_functional_notation_through() {
        let document = "@def highlight rgba(80, 80, 00, 0.80);\n\nCustomMemo{\n    line-bg-highlight: ${highlight};\n}";
        assert_eq!(
            render(document).unwrap(),
            "CustomMemo{\n    line-bg-highlight: rgba(80, 80, 00, 0.80);\n}"
        );
    }

    #[test]
    fn render_drops_blank_body_lines() {
        let document = "@def fg #fff;\n\na: ${fg};\n\n\nb: ${fg};";
        assert_eq!(render(document).unwrap(), "a: #fff;\nb: #fff;");
    }

    #[test]
    fn render_requires_separator() {
        let document = "@def fg #fff;\nbody { color: ${fg}; }";
        assert_eq!(render(document), Err(TemplateError::MissingSeparator));
    }

    #[test]
    fn render_ignores_defs_in_body() {
        // Only the header feeds the variable table.
        let document = "@def fg #fff;\n\ncolor: ${fg};\n@def bg #000;\nback: ${bg};";
        assert_eq!(
            render(document).unwrap(),
            "color: #fff;\n@def bg #000;\nback: ${bg};"
        );
    }
}
