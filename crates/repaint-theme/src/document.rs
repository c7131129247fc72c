//! The theme document — a palette plus per-token-scope styles.
//!
//! Mirrors the on-disk shape: a `name`, a `type` tag (`"light"`, `"dark"`,
//! anything else), a flat map of UI color declarations, and an ordered list
//! of token styles whose `scope` may be a single string or a list. All
//! fields default when absent and unknown fields are ignored — theme files
//! in the wild carry plenty of extras this engine has no use for.

use indexmap::IndexMap;
use serde::Deserialize;

/// A parsed theme document. Color values are kept as the raw declared text;
/// resolving them into actual colors is [`Instance`](crate::Instance)'s job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeDocument {
    pub name: String,

    /// The theme-kind tag. `"light"` gates an import-directive rewrite in
    /// the conversion pipeline; every other value is passed through.
    #[serde(rename = "type")]
    pub kind: String,

    /// Flat UI color declarations, in declaration order.
    pub colors: IndexMap<String, String>,

    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenStyle>,
}

impl ThemeDocument {
    /// Whether the theme declares itself light.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.kind == "light"
    }
}

/// One token-style entry: a display name, the scope(s) it styles, and the
/// style settings applied there.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenStyle {
    pub name: String,
    pub scope: Option<Scope>,
    pub settings: StyleSettings,
}

impl TokenStyle {
    /// The scope strings, normalized to a slice regardless of whether the
    /// document declared one scope or a list.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        match &self.scope {
            Some(Scope::One(scope)) => std::slice::from_ref(scope),
            Some(Scope::Many(scopes)) => scopes,
            None => &[],
        }
    }
}

/// A scope declaration: either one selector string or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    One(String),
    Many(Vec<String>),
}

/// The settings block of a token style. Only the foreground color feeds
/// remapping; the style-flag string rides along for completeness.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub foreground: String,

    #[serde(rename = "fontStyle")]
    pub font_style: String,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_document_deserializes() {
        let doc: ThemeDocument = serde_json::from_str(
            r##"{
                "name": "demo",
                "type": "dark",
                "colors": {"editor.background": "#1E1E1E"},
                "tokenColors": [
                    {
                        "name": "Comments",
                        "scope": ["comment", "punctuation.comment"],
                        "settings": {"foreground": "#6A9955", "fontStyle": "italic"}
                    }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(doc.name, "demo");
        assert_eq!(doc.kind, "dark");
        assert!(!doc.is_light());
        assert_eq!(doc.colors["editor.background"], "#1E1E1E");
        assert_eq!(
            doc.token_colors[0].scopes(),
            ["comment", "punctuation.comment"]
        );
        assert_eq!(doc.token_colors[0].settings.font_style, "italic");
    }

    #[test]
    fn scope_accepts_single_string() {
        let style: TokenStyle = serde_json::from_str(
            r##"{"name": "t", "scope": "keyword", "settings": {"foreground": "#fff"}}"##,
        )
        .unwrap();
        assert_eq!(style.scopes(), ["keyword"]);
    }

    #[test]
    fn missing_fields_default() {
        let doc: ThemeDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.kind, "");
        assert!(doc.colors.is_empty());
        assert!(doc.token_colors.is_empty());

        let style: TokenStyle = serde_json::from_str(r#"{"name": "t"}"#).unwrap();
        assert!(style.scopes().is_empty());
        assert_eq!(style.settings.foreground, "");
    }

    #[test]
    fn unknown_fields_ignored() {
        let doc: ThemeDocument =
            serde_json::from_str(r#"{"name": "x", "semanticHighlighting": true}"#).unwrap();
        assert_eq!(doc.name, "x");
    }

    #[test]
    fn colors_keep_declaration_order() {
        let doc: ThemeDocument = serde_json::from_str(
            r##"{"colors": {"z.last": "#000", "a.first": "#fff", "m.middle": "#888"}}"##,
        )
        .unwrap();
        let keys: Vec<&str> = doc.colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z.last", "a.first", "m.middle"]);
    }
}
