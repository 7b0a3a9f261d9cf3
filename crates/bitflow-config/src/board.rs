//! Board capability registry.
//!
//! Known board descriptors are classified from structured capability
//! records. Descriptors not in the registry fall back to the naming
//! convention used by board support packages: a `usm` marker in the
//! variant part of the descriptor indicates host-shared-memory support.

use serde::{Deserialize, Serialize};

/// Board descriptor used when no override is supplied. Deliberately a
/// non-USM variant: a bare invocation emits no optional tokens.
pub const DEFAULT_BOARD: &str = "intel_s10sx_pac:pac_s10";

/// Marker substring identifying a host-shared-memory board variant.
const USM_MARKER: &str = "usm";

/// Capability record for a known board descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardProfile {
    /// Full descriptor, `<package>:<variant>`.
    pub id: String,
    /// Whether the board supports host-accessible (USM) allocations.
    pub usm_capable: bool,
    /// Human-readable description.
    pub description: String,
}

impl BoardProfile {
    fn new(id: &str, usm_capable: bool, description: &str) -> Self {
        Self {
            id: id.to_string(),
            usm_capable,
            description: description.to_string(),
        }
    }
}

/// Capability records for the boards the flows are routinely run on.
pub fn builtin_boards() -> Vec<BoardProfile> {
    vec![
        BoardProfile::new(
            "intel_a10gx_pac:pac_a10",
            false,
            "Intel Arria 10 GX PAC (device-only memory)",
        ),
        BoardProfile::new(
            "intel_s10sx_pac:pac_s10",
            false,
            "Intel Stratix 10 SX PAC (device-only memory)",
        ),
        BoardProfile::new(
            "intel_s10sx_pac:pac_s10_usm",
            true,
            "Intel Stratix 10 SX PAC (host USM variant)",
        ),
    ]
}

/// Look up the capability record for a known board descriptor.
pub fn lookup_board(id: &str) -> Option<BoardProfile> {
    builtin_boards().into_iter().find(|b| b.id == id)
}

/// Whether a board descriptor indicates host-shared-memory capability.
///
/// Known descriptors answer from their capability record; anything else
/// is classified by the `usm` marker convention on the variant part.
pub fn usm_capable(id: &str) -> bool {
    match lookup_board(id) {
        Some(profile) => profile.usm_capable,
        None => variant_part(id).contains(USM_MARKER),
    }
}

/// The variant part of a descriptor, i.e. everything after the last `:`.
fn variant_part(id: &str) -> &str {
    id.rsplit(':').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_registered_and_not_usm() {
        let profile = lookup_board(DEFAULT_BOARD).unwrap();
        assert!(!profile.usm_capable);
        assert!(!usm_capable(DEFAULT_BOARD));
    }

    #[test]
    fn registered_usm_board() {
        assert!(usm_capable("intel_s10sx_pac:pac_s10_usm"));
    }

    #[test]
    fn registered_non_usm_board() {
        assert!(!usm_capable("intel_a10gx_pac:pac_a10"));
    }

    #[test]
    fn unknown_board_falls_back_to_marker_convention() {
        assert!(usm_capable("x.usm_variant"));
        assert!(usm_capable("vendor_pac:custom_usm"));
        assert!(!usm_capable("vendor_pac:custom"));
    }

    #[test]
    fn marker_only_matches_variant_part() {
        // "usm" in the package part does not make the variant USM-capable.
        assert!(!usm_capable("usm_vendor_pac:plain"));
    }

    #[test]
    fn builtin_boards_have_unique_ids() {
        let boards = builtin_boards();
        for (i, a) in boards.iter().enumerate() {
            for b in &boards[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
