//! Build parameter resolution for bitflow.
//!
//! Turns a sparse set of invocation-time overrides into a complete,
//! immutable [`BuildParameters`] record. Two fields are derived rather
//! than settable: `usm_enabled` comes from the board capability registry
//! and `host_error_handling` from a probe of the build host. Resolution
//! never fails; it normalizes, fills defaults, and reports what it did
//! through [`Notice`] records.

pub mod board;
pub mod host;
pub mod overrides;
pub mod resolve;

pub use board::{builtin_boards, lookup_board, usm_capable, BoardProfile, DEFAULT_BOARD};
pub use overrides::BuildOverrides;
pub use resolve::{BuildParameters, Notice, Severity};
