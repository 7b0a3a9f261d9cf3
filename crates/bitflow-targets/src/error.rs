//! Error types for target operations.

use bitflow_flags::TargetKind;

use crate::state::TargetState;

/// Errors that can occur during target selection and lifecycle tracking.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// A requested target name matched no artifact kind.
    #[error("unknown target: '{name}' (expected one of: {valid})")]
    UnknownTarget {
        /// The name as given.
        name: String,
        /// Comma-separated valid names.
        valid: String,
    },

    /// A lifecycle transition that the state machine does not allow.
    #[error("target {kind}: invalid transition {from} -> {to}")]
    InvalidTransition {
        /// The target whose lifecycle was violated.
        kind: TargetKind,
        /// State before the attempted transition.
        from: TargetState,
        /// State the caller tried to enter.
        to: TargetState,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
