//! Common error infrastructure for chase-core.
//!
//! Domain errors (`StageError`, `TerrainError`) live next to the code that
//! raises them. This module provides the shared severity classification.
//!
//! Expected no-ops during play (walking into a wall, moving while frozen) are
//! not errors: they are reported as outcomes by the walk command.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the caller may carry on without the result.
    ///
    /// Examples: no open cell to spawn on
    Recoverable,

    /// Invalid input that should be rejected.
    ///
    /// Examples: unknown glyph in a terrain layout
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    ///
    /// Examples: picking up from an empty cell, moving an unplaced actor
    Internal,

    /// Unrecoverable; the game cannot start or continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all chase-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
