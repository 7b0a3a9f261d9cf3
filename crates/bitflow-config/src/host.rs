//! Build host probe.

/// Whether the build host requires the explicit structured-exception
/// handling flag in the host pass of the device compiler.
///
/// Only the Windows platform family needs it; this is a platform query,
/// never a user override.
pub fn host_error_handling() -> bool {
    cfg!(windows)
}
