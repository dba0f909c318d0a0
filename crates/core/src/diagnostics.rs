//! Non-fatal diagnostics collected while normalizing a fragment.
//!
//! The normalizer is total: a pattern that fails to match is a skipped
//! rewrite, never an error. These types record the skips that are worth
//! surfacing to a caller (typically as debug logs in the viewer).

use serde::Serialize;

/// A non-fatal warning emitted by a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RewriteWarning {
    /// A definition header was found but its return expression never closed;
    /// the trailing strip was skipped.
    UnbalancedScaffold {
        /// Byte offset of the return-expression opening in the pass input.
        offset: usize,
    },
    /// An expression hole opened with `{` but never closed; it was left as-is.
    UnterminatedExpression {
        /// Byte offset of the opening brace in the pass input.
        offset: usize,
    },
    /// A repeat pattern was found inside an already-collapsed repeat child
    /// and left as-is (only the outermost pattern collapses).
    NestedRepeatSkipped {
        /// Byte offset of the outer pattern in the pass input.
        offset: usize,
    },
}

impl std::fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteWarning::UnbalancedScaffold { offset } => {
                write!(f, "unbalanced definition scaffolding at byte {}", offset)
            }
            RewriteWarning::UnterminatedExpression { offset } => {
                write!(f, "unterminated expression hole at byte {}", offset)
            }
            RewriteWarning::NestedRepeatSkipped { offset } => {
                write!(f, "nested repeat pattern left as-is at byte {}", offset)
            }
        }
    }
}

/// Collection of warnings from a single `normalize` run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizeDiagnostics {
    /// Warnings in the order the passes emitted them.
    pub warnings: Vec<RewriteWarning>,
}

impl NormalizeDiagnostics {
    /// Create an empty diagnostics collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn push(&mut self, warning: RewriteWarning) {
        self.warnings.push(warning);
    }

    /// Check if any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of recorded warnings.
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset() {
        let warning = RewriteWarning::UnterminatedExpression { offset: 42 };
        assert_eq!(
            warning.to_string(),
            "unterminated expression hole at byte 42"
        );
    }

    #[test]
    fn push_and_count() {
        let mut diagnostics = NormalizeDiagnostics::new();
        assert!(!diagnostics.has_warnings());
        diagnostics.push(RewriteWarning::UnbalancedScaffold { offset: 0 });
        assert!(diagnostics.has_warnings());
        assert_eq!(diagnostics.count(), 1);
    }
}
