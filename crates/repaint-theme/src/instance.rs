//! The runtime palette derived from a theme document.
//!
//! An [`Instance`] resolves every declared color into an [`Rgba`] and
//! maintains the reverse index — color value to the names that declare it —
//! that remapping keys on. Both maps preserve insertion order because
//! remapping tie-breaks on encounter order.

use indexmap::IndexMap;
use repaint_color::{Rgb, Rgba};

use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::jsonc;

/// A theme document's resolved palette.
///
/// Built once, read-only afterwards. Construction order matters: token
/// scope colors are added first and the flat color map second, so a key
/// declared in both ends at the flat entry's value.
#[derive(Debug, Default)]
pub struct Instance {
    document: ThemeDocument,
    colors: IndexMap<String, Rgba>,
    inverted: IndexMap<Rgb, Vec<String>>,
}

/// Parse raw theme document bytes into an [`Instance`].
///
/// Decodes UTF-8, strips comments (without newline preservation — the
/// document is consumed structurally, not reprinted), deserializes, and
/// resolves the palette.
///
/// # Errors
///
/// [`ThemeError`] when the bytes are not UTF-8 or the stripped text is not
/// valid JSON. Individual unparsable color entries are skipped, not errors.
pub fn parse(data: &[u8]) -> Result<Instance, ThemeError> {
    let text = std::str::from_utf8(data)?;
    let stripped = jsonc::strip_comments(text, false);
    let document: ThemeDocument = serde_json::from_str(&stripped)?;
    Ok(Instance::from_document(document))
}

impl Instance {
    /// Resolve a parsed document into its palette.
    #[must_use]
    pub fn from_document(document: ThemeDocument) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for style in &document.token_colors {
            for scope in style.scopes() {
                entries.push((scope.clone(), style.settings.foreground.clone()));
            }
        }
        for (key, value) in &document.colors {
            entries.push((key.clone(), value.clone()));
        }

        let mut instance = Self {
            document,
            colors: IndexMap::new(),
            inverted: IndexMap::new(),
        };
        for (key, value) in entries {
            instance.add_color(&key, &value);
        }
        instance
    }

    /// Register `raw` under `key`, if it parses.
    ///
    /// Unparsable literals (functional color notations, empty strings) are
    /// dropped silently — the key simply never participates in remapping.
    /// A key added twice keeps its latest color but stays listed in the
    /// reverse index under every color it ever resolved to.
    pub fn add_color(&mut self, key: &str, raw: &str) {
        let Ok(color) = Rgba::from_hex(raw) else {
            tracing::debug!(key, raw, "skipping unparsable color entry");
            return;
        };
        self.colors.insert(key.to_string(), color);
        self.inverted
            .entry(color.rgb)
            .or_default()
            .push(key.to_string());
    }

    /// The document this palette was resolved from.
    #[must_use]
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// The resolved color for `key`, if it parsed.
    #[must_use]
    pub fn color(&self, key: &str) -> Option<Rgba> {
        self.colors.get(key).copied()
    }

    /// The names declaring exactly `color`, in declaration order.
    #[must_use]
    pub fn names_for(&self, color: Rgb) -> Option<&[String]> {
        self.inverted.get(&color).map(Vec::as_slice)
    }

    /// Iterate the distinct palette colors in first-seen order.
    pub fn palette(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.inverted.keys().copied()
    }

    /// Number of resolved color entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no color entry resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_color_updates_both_maps() {
        let mut instance = Instance::default();
        instance.add_color("foo", "#336699");

        let color = instance.color("foo").unwrap();
        assert_eq!(color.to_hex(), "#336699");
        assert_eq!(
            instance.names_for(color.rgb).unwrap(),
            ["foo".to_string()]
        );
    }

    #[test]
    fn add_color_drops_invalid_silently() {
        let mut instance = Instance::default();
        instance.add_color("bad", "zzz");
        instance.add_color("functional", "rgba(80, 80, 0, 0.8)");
        assert!(instance.is_empty());
    }

    #[test]
    fn shared_color_accumulates_names() {
        let mut instance = Instance::default();
        instance.add_color("one", "#112233");
        instance.add_color("two", "#123");
        let rgb = instance.color("one").unwrap().rgb;
        assert_eq!(
            instance.names_for(rgb).unwrap(),
            ["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn parse_indexes_scopes_and_flat_colors() {
        let sample = br##"
        {
          "name": "demo",
          "type": "test",
          "colors": {"x": "#000000"},
          "tokenColors": [
            {"name": "t", "scope": "s", "settings": {"foreground": "#FFFFFF"}}
          ]
        }
        "##;
        let instance = parse(sample).unwrap();
        assert!(instance.color("x").is_some());
        assert!(instance.color("s").is_some());
        assert_eq!(instance.document().name, "demo");
    }

    #[test]
    fn parse_strips_comments_first() {
        let sample = br##"{
          // palette
          "colors": {"a": "#112233" /* primary */}
        }"##;
        let instance = parse(sample).unwrap();
        assert_eq!(instance.color("a").unwrap().to_hex(), "#112233");
    }

    #[test]
    fn flat_color_wins_over_scope_color() {
        let sample = br##"{
          "colors": {"shared": "#222222"},
          "tokenColors": [
            {"name": "t", "scope": "shared", "settings": {"foreground": "#111111"}}
          ]
        }"##;
        let instance = parse(sample).unwrap();
        // Scope colors land first, flat colors second: the flat value wins,
        // but the reverse index remembers both resolutions.
        assert_eq!(instance.color("shared").unwrap().to_hex(), "#222222");
        let old = Rgba::from_hex("#111111").unwrap().rgb;
        assert_eq!(instance.names_for(old).unwrap(), ["shared".to_string()]);
    }

    #[test]
    fn parse_rejects_bad_utf8() {
        assert!(matches!(
            parse(&[0x7B, 0xFF, 0x7D]),
            Err(ThemeError::Encoding(_))
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse(b"{\"colors\": "),
            Err(ThemeError::Document(_))
        ));
    }
}
