//! # repaint-theme — theme documents and palette remapping
//!
//! Loads comment-annotated theme documents into resolved palettes and
//! remaps colors between two palettes.
//!
//! # Architecture
//!
//! ```text
//! raw bytes
//!     │
//!     ▼
//! jsonc.rs:     strip // and /* */ comments (state machine)
//!     │
//!     ▼
//! document.rs:  deserialize name / type / colors / token styles
//!     │
//!     ▼
//! instance.rs:  resolve colors, build the color → names reverse index
//!     │
//!     ▼
//! remap.rs:     shared-name vote, nearest neighbor, perceptual softening
//! ```
//!
//! Everything is synchronous and owns its data; one [`Instance`] per theme
//! document, read-only after construction. Remapping a stylesheet against a
//! pair of instances is a pure function, so batch conversion parallelizes
//! per document with no shared state.

pub mod document;
pub mod error;
pub mod instance;
pub mod jsonc;
mod remap;

pub use document::{Scope, StyleSettings, ThemeDocument, TokenStyle};
pub use error::ThemeError;
pub use instance::{Instance, parse};
