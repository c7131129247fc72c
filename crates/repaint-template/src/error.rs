//! Error types for template rendering.

/// A template document is structurally unusable.
///
/// Undefined variable references are *not* here — those are recovered
/// locally with a diagnostic so a partially defined template still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// No blank line separates the `@def` header from the body.
    #[error("template has no blank line separating the @def header from the body")]
    MissingSeparator,
}
