// SPDX-License-Identifier: MIT
//
// CMYK color representation.
//
// Subtractive counterpart to the RGB model: components measure ink
// coverage, so lightening means scaling every component down and darkening
// means pushing every component toward full coverage. Used for print-style
// tints where HSL lightness shifts would drift the hue balance.

use crate::color::{Rgb, Rgba};

/// A CMYK color with `f64` components in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Create a color from component values in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Convert from RGB.
    ///
    /// Pure black maps to `(0, 0, 0, 1)` — the chromatic components are
    /// undefined there and fixed at zero.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }
        let white = 1.0 - k;
        Self::new(
            (1.0 - rgb.r - k) / white,
            (1.0 - rgb.g - k) / white,
            (1.0 - rgb.b - k) / white,
            k,
        )
    }

    /// Convert back to RGB, fully opaque.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let white = 1.0 - self.k;
        Rgba::opaque(Rgb::new(
            (1.0 - self.c) * white,
            (1.0 - self.m) * white,
            (1.0 - self.y) * white,
        ))
    }

    /// Reduce every component's coverage by the given fraction of itself.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let scale = 1.0 - amount;
        Self::new(
            self.c * scale,
            self.m * scale,
            self.y * scale,
            self.k * scale,
        )
    }

    /// Move every component toward full coverage by the given fraction of
    /// its remaining headroom.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self::new(
            (1.0 - self.c).mul_add(amount, self.c),
            (1.0 - self.m).mul_add(amount, self.m),
            (1.0 - self.y).mul_add(amount, self.y),
            (1.0 - self.k).mul_add(amount, self.k),
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn red_decomposes() {
        let cmyk = Cmyk::from_rgb(Rgb::new(1.0, 0.0, 0.0));
        assert!(approx(cmyk.c, 0.0));
        assert!(approx(cmyk.m, 1.0));
        assert!(approx(cmyk.y, 1.0));
        assert!(approx(cmyk.k, 0.0));
    }

    #[test]
    fn red_recomposes() {
        let rgba = Cmyk::new(0.0, 1.0, 1.0, 0.0).to_rgba();
        assert!(approx(rgba.rgb.r, 1.0));
        assert!(approx(rgba.rgb.g, 0.0));
        assert!(approx(rgba.rgb.b, 0.0));
        assert!(approx(rgba.alpha, 1.0));
    }

    #[test]
    fn black_has_zero_chroma() {
        let cmyk = Cmyk::from_rgb(Rgb::BLACK);
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn lighten_scales_components() {
        let lightened = Cmyk::new(0.5, 0.5, 0.5, 0.5).lighten(0.5);
        assert!(approx(lightened.c, 0.25));
        assert!(approx(lightened.m, 0.25));
        assert!(approx(lightened.y, 0.25));
        assert!(approx(lightened.k, 0.25));
    }

    #[test]
    fn darken_fills_headroom() {
        let darkened = Cmyk::new(0.5, 0.5, 0.5, 0.5).darken(0.5);
        assert!(approx(darkened.c, 0.75));
        assert!(approx(darkened.m, 0.75));
        assert!(approx(darkened.y, 0.75));
        assert!(approx(darkened.k, 0.75));
    }

    #[test]
    fn rgb_roundtrip() {
        let orig = Rgb::from_bytes(0x33, 0x66, 0x99);
        let back = Cmyk::from_rgb(orig).to_rgba();
        assert_eq!(back.rgb, orig);
    }
}
