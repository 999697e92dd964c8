// This module defines the error taxonomy of the front-end framework using the thiserror
// crate. CompileError separates the one fatal class (Defect: a front-end shipped without
// translation logic) from the ordinary, caller-recoverable classes: invalid source
// (Compilation), a target the front-end cannot lower to (UnsupportedTarget) and an
// unknown front-end name (NotFound). Each variant carries the context a caller needs to
// report the failure to an end user. CompileResult<T> is the matching Result alias.

//! Error types for the compiler front-end framework.

use thiserror::Error;

/// Main error type for compilation requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The front-end is incomplete. This is a packaging bug, not bad input.
    #[error("front-end `{frontend}` is defective: {reason}")]
    Defect {
        frontend: String,
        reason: String,
    },

    #[error("{frontend}: {reason}{}: `{fragment}`", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Compilation {
        frontend: String,
        fragment: String,
        line: Option<usize>,
        reason: String,
    },

    #[error("front-end `{frontend}` cannot target `{target}`: {reason}")]
    UnsupportedTarget {
        frontend: String,
        target: String,
        reason: String,
    },

    #[error("no front-end registered as `{name}` (available: {})", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<String>,
    },
}

impl CompileError {
    /// Defect reported when a front-end has no translation step yet.
    pub fn missing_translate(frontend: impl Into<String>) -> Self {
        Self::Defect {
            frontend: frontend.into(),
            reason: "translate must be provided by the front-end".to_string(),
        }
    }

    /// Invalid source, pointing at the offending fragment.
    pub fn compilation(
        frontend: impl Into<String>,
        fragment: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Compilation {
            frontend: frontend.into(),
            fragment: fragment.into(),
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a `Compilation` error.
    ///
    /// Other variants are returned unchanged.
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::Compilation { frontend, fragment, reason, .. } => Self::Compilation {
                frontend,
                fragment,
                line: Some(line_no),
                reason,
            },
            other => other,
        }
    }

    pub fn unsupported_target(
        frontend: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::UnsupportedTarget {
            frontend: frontend.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error marks a broken front-end rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Defect { .. })
    }

    /// Whether the caller can react by changing input, target or front-end name.
    pub fn is_recoverable(&self) -> bool {
        !self.is_defect()
    }
}

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
