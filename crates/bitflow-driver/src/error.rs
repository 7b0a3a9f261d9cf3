//! Error types for toolchain invocation.

use bitflow_targets::TargetError;

/// Errors that can occur while driving the external toolchain.
///
/// A nonzero toolchain exit is not an error here; it marks the target
/// failed and the build moves on. Errors are reserved for not being able
/// to run the toolchain at all.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The toolchain binary could not be spawned.
    #[error("failed to run '{binary}': {source}")]
    Spawn {
        /// The binary that was invoked.
        binary: String,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created.
    #[error("failed to create output directory: {0}")]
    OutputDir(std::io::Error),

    /// A lifecycle transition was violated; indicates a driver bug.
    #[error(transparent)]
    Lifecycle(#[from] TargetError),
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;
