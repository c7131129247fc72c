//! Palette remapping — carrying one theme's colors onto another's.
//!
//! The remap answers: "this stylesheet uses color X from the reference
//! theme; what should X become under the user's theme?" Three strategies,
//! tried in order:
//!
//! 1. **Shared names.** If X is a color the reference theme declares, look
//!    up every name declaring it and vote: the target color backed by the
//!    most shared names wins (first-seen group wins ties).
//! 2. **Nearest neighbor.** Otherwise find the reference palette color
//!    closest to X by Euclidean distance and resolve *that* through the
//!    name vote.
//! 3. **Perceptual softening.** A nearest-neighbor substitute can sit far
//!    from X, so nudge the substitute's saturation and lightness a quarter
//!    of the way along the closest-to-X offset before returning it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use repaint_color::{Rgb, Rgba};

use crate::instance::Instance;

/// A hex color literal plus the mandatory `;` terminator the stylesheet
/// grammar puts after every color token.
static HEX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{3,8};").expect("hex token pattern"));

impl Instance {
    /// Remap `color` from this palette onto `target`'s.
    ///
    /// Colors this palette never declared resolve through their nearest
    /// declared neighbor and are softened toward the query (strategy 3).
    /// A color whose shared names all miss the target palette — and any
    /// query against an empty palette — comes back unchanged.
    #[must_use]
    pub fn remap_rgb(&self, color: Rgb, target: &Self) -> Rgb {
        if let Some(names) = self.names_for(color) {
            if let Some(choice) = vote(names, target) {
                return choice;
            }
            tracing::debug!(color = %color, "no shared name resolves in target; keeping color");
            return color;
        }

        let Some(closest) = self.nearest(color) else {
            tracing::warn!(color = %color, "remap against an empty palette; keeping color");
            return color;
        };
        let remapped = self.remap_rgb(closest, target);
        soften(closest, color, remapped)
    }

    /// Rewrite every hex color token in `stylesheet` through
    /// [`remap_rgb`](Self::remap_rgb) against `target`.
    ///
    /// Tokens are the 3/4/6/8-digit hex forms followed by `;`. Each
    /// literal's alpha survives the rewrite. Five- and seven-digit
    /// pseudo-tokens fail to parse and pass through untouched, as does all
    /// other text. Repeated literals are remapped once via a per-call
    /// cache.
    #[must_use]
    pub fn remap_stylesheet(&self, stylesheet: &str, target: &Self) -> String {
        let mut cache: HashMap<Rgb, Rgb> = HashMap::new();
        HEX_TOKEN
            .replace_all(stylesheet, |caps: &regex::Captures<'_>| {
                let token = &caps[0];
                let literal = &token[..token.len() - 1];
                let Ok(color) = Rgba::from_hex(literal) else {
                    return token.to_string();
                };
                let remapped = *cache
                    .entry(color.rgb)
                    .or_insert_with(|| self.remap_rgb(color.rgb, target));
                format!("{};", Rgba::new(remapped, color.alpha).to_hex())
            })
            .into_owned()
    }

    /// The declared palette color nearest to `color` (first-seen wins
    /// ties), or `None` for an empty palette.
    fn nearest(&self, color: Rgb) -> Option<Rgb> {
        let mut best: Option<(Rgb, f64)> = None;
        for candidate in self.palette() {
            let dist = candidate.distance(color);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((candidate, dist));
            }
        }
        best.map(|(rgb, _)| rgb)
    }
}

/// The shared-name vote: group the target colors of every name in `names`
/// and pick the color backed by the most names. The first group to reach
/// the winning count takes ties. `None` when no name resolves in the
/// target.
fn vote(names: &[String], target: &Instance) -> Option<Rgb> {
    let mut groups: indexmap::IndexMap<Rgb, usize> = indexmap::IndexMap::new();
    for name in names {
        if let Some(candidate) = target.color(name) {
            *groups.entry(candidate.rgb).or_insert(0) += 1;
        }
    }

    let mut best: Option<(Rgb, usize)> = None;
    for (&rgb, &count) in &groups {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((rgb, count));
        }
    }
    best.map(|(rgb, _)| rgb)
}

/// Nudge `remapped` a quarter of the way along the `closest`-to-`queried`
/// saturation/lightness offset, reversing a component's direction when the
/// remapped value already sits below the closest source's.
fn soften(closest: Rgb, queried: Rgb, remapped: Rgb) -> Rgb {
    let (_, mut s1, mut l1) = closest.hsl();
    let (_, mut s2, mut l2) = queried.hsl();
    let (h, s, l) = remapped.hsl();
    if s < s1 {
        std::mem::swap(&mut s1, &mut s2);
    }
    if l < l1 {
        std::mem::swap(&mut l1, &mut l2);
    }
    let s = (s2 - s1).mul_add(0.25, s).clamp(0.0, 1.0);
    let l = (l2 - l1).mul_add(0.25, l).clamp(0.0, 1.0);
    Rgb::from_hsl(h, s, l)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
