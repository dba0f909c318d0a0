#![deny(missing_docs)]
//! Ocean UI core: the best-effort markup normalizer behind the snippet
//! viewer.
//!
//! The normalizer takes a raw text fragment (possibly JSX-flavored,
//! possibly already plain markup) and produces a single, self-contained,
//! root-wrapped markup block suitable for pasting into a markup playground.
//! It is pattern-based text rewriting, not a parser, and every rewrite is
//! total: unrecognized input degrades to a no-op for that step.

/// Dynamic-attribute spelling rewrites.
pub mod attrs;
/// Input classification (already-markup vs component-flavored).
pub mod classify;
/// Non-fatal diagnostics collected while normalizing.
pub mod diagnostics;
/// Dynamic-expression hole stripping.
pub mod expr;
/// Fragment shorthand collapse and self-closing expansion.
pub mod fragment;
/// The ordered normalization pipeline.
pub mod normalize;
/// Definition-scaffolding removal for component-flavored fragments.
pub mod scaffold;
/// Root-wrapper enforcement and the empty-input placeholder.
pub mod wrapper;

pub use classify::{SourceKind, classify_source};
pub use diagnostics::{NormalizeDiagnostics, RewriteWarning};
pub use fragment::VOID_ELEMENTS;
pub use normalize::{
    NormalizeOptions, NormalizePipeline, RewritePass, normalize, normalize_with_diagnostics,
};
pub use wrapper::is_single_root;
