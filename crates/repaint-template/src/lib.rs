//! # repaint-template — stylesheet template expansion
//!
//! A stylesheet template is a header of `@def name value;` declarations,
//! one blank line, then a body sprinkled with `${name}` references and
//! `@lighten`/`@darken` transform calls. This crate resolves all of it:
//!
//! - [`load_variables`] builds the declaration-ordered variable table
//!   (backward references resolve, forward references stay literal)
//! - [`apply_functions`] evaluates transform calls through the color model
//! - [`expand`] substitutes references into arbitrary text
//! - [`render`] processes a whole document, annotating lines whose values
//!   were computed by a transform
//! - [`normalize`] repairs interpolations mangled by generic formatters
//!
//! Rendering is pure text-to-text; run one [`render`] per document to
//! parallelize a batch.

pub mod error;
pub mod functions;
pub mod normalize;
pub mod render;
pub mod vars;

pub use error::TemplateError;
pub use functions::apply_functions;
pub use normalize::normalize;
pub use render::{expand, render};
pub use vars::load_variables;
