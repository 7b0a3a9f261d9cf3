//! The four artifact kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One producible artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Fast functional emulation binary.
    Emulator,
    /// Static early-image for hardware-usage reporting.
    Report,
    /// Cycle-accurate simulation binary.
    Simulator,
    /// Bitstream-producing hardware binary.
    Hardware,
}

/// All kinds, in canonical order.
pub const ALL_KINDS: [TargetKind; 4] = [
    TargetKind::Emulator,
    TargetKind::Report,
    TargetKind::Simulator,
    TargetKind::Hardware,
];

impl TargetKind {
    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Emulator => "emulator",
            TargetKind::Report => "report",
            TargetKind::Simulator => "simulator",
            TargetKind::Hardware => "hardware",
        }
    }

    /// Suffix appended to the project base name for this artifact.
    pub fn artifact_suffix(self) -> &'static str {
        match self {
            TargetKind::Emulator => ".fpga_emu",
            TargetKind::Report => "_report.a",
            TargetKind::Simulator => ".fpga_sim",
            TargetKind::Hardware => ".fpga",
        }
    }

    /// Toolchain invocations needed to produce the artifact.
    ///
    /// Report is a single combined invocation stopping at the early
    /// image; every other kind is a compile stage then a link stage.
    pub fn invocation_count(self) -> u8 {
        match self {
            TargetKind::Report => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_counts() {
        assert_eq!(TargetKind::Report.invocation_count(), 1);
        for kind in [TargetKind::Emulator, TargetKind::Simulator, TargetKind::Hardware] {
            assert_eq!(kind.invocation_count(), 2);
        }
    }

    #[test]
    fn artifact_suffixes_are_distinct() {
        for (i, a) in ALL_KINDS.iter().enumerate() {
            for b in &ALL_KINDS[i + 1..] {
                assert_ne!(a.artifact_suffix(), b.artifact_suffix());
            }
        }
    }
}
