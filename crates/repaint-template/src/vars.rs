//! The `@def` variable table.
//!
//! A template header declares variables one per line:
//!
//! ```text
//! @def clr_background #1E1E1E;
//! @def clr_panel ${clr_background};
//! ```
//!
//! Declaration order is semantic. A variable may reference only variables
//! declared strictly before it; those references resolve eagerly while the
//! table is built, so every stored value is already as resolved as it can
//! get. Forward and self references stay literal, and undefined references
//! stay literal with a warning. That ordering rule is also the termination
//! proof: a value only ever absorbs strictly-earlier values that have
//! themselves stopped growing.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// `@def name value;` — name is any run of non-whitespace, value runs to
/// the first `;`.
static DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@def\s+(\S+)\s+(.+?);").expect("definition pattern"));

/// `${name}` — a variable reference.
pub(crate) static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\S+?)\}").expect("reference pattern"));

/// Collect every `@def` declaration in `text`, in order, resolving
/// backward references as described in the module docs.
#[must_use]
pub fn load_variables(text: &str) -> IndexMap<String, String> {
    let mut variables: IndexMap<String, String> = IndexMap::new();
    for caps in DEF.captures_iter(text) {
        variables.insert(caps[1].to_string(), caps[2].to_string());
    }

    for index in 0..variables.len() {
        loop {
            let (reference, name) = {
                let value = &variables[index];
                match REFERENCE.captures(value) {
                    Some(caps) => (caps[0].to_string(), caps[1].to_string()),
                    None => break,
                }
            };
            match variables.get_index_of(&name) {
                Some(earlier) if earlier < index => {
                    let resolved = variables[earlier].clone();
                    let updated = variables[index].replace(&reference, &resolved);
                    if updated == variables[index] {
                        // A substitution that rewrites a reference to
                        // itself would spin forever; stop and leave it.
                        tracing::warn!(
                            variable = %name,
                            "substitution makes no progress; leaving reference literal"
                        );
                        break;
                    }
                    variables[index] = updated;
                }
                Some(_) => break,
                None => {
                    let owner = variables
                        .get_index(index)
                        .map(|(key, _)| key.clone())
                        .unwrap_or_default();
                    tracing::warn!(
                        variable = %owner,
                        reference = %name,
                        "undefined variable referenced; leaving reference literal"
                    );
                    break;
                }
            }
        }
    }

    variables
}

// ─── Tests ───────────────────────────────────────────────────────────────────
