// SPDX-License-Identifier: MIT

//! # repaint-color — exact-precision color model
//!
//! The value types every other crate in the workspace builds on: [`Rgb`]
//! and [`Rgba`] with hex parsing and serialization, reversible HSL
//! decomposition, lightness adjustment, Euclidean distance, a [`Cmyk`]
//! counterpart, and ANSI truecolor swatches for terminal previews.
//!
//! Everything here is a pure function over its inputs. Parsing either
//! yields a fully specified color or a [`ParseColorError`] — malformed
//! input is never clamped into range.

pub mod ansi;
pub mod cmyk;
pub mod color;

pub use cmyk::Cmyk;
pub use color::{ParseColorError, Rgb, Rgba};
