//! Requested-target selection and the default aggregate.
//!
//! Simulator and Hardware are deliberately outside the default set:
//! cycle-accurate simulation and real synthesis run for hours, so they
//! build only on explicit request. Emulator and Report stay in as the
//! cheap fast-feedback targets.

use bitflow_flags::TargetKind;

use crate::error::{Result, TargetError};

/// The targets built when none are named explicitly.
pub fn default_aggregate() -> &'static [TargetKind] {
    &[TargetKind::Emulator, TargetKind::Report]
}

/// Accepted names per kind: canonical name first, artifact alias second.
const NAMES: [(TargetKind, [&str; 2]); 4] = [
    (TargetKind::Emulator, ["emulator", "fpga_emu"]),
    (TargetKind::Report, ["report", "report_a"]),
    (TargetKind::Simulator, ["simulator", "fpga_sim"]),
    (TargetKind::Hardware, ["hardware", "fpga"]),
];

/// Parse a target name as given on the command line.
pub fn parse_target(name: &str) -> Option<TargetKind> {
    let lower = name.to_ascii_lowercase();
    NAMES
        .iter()
        .find(|(_, aliases)| aliases.contains(&lower.as_str()))
        .map(|(kind, _)| *kind)
}

/// All canonical target names, for listings and error messages.
pub fn target_names() -> Vec<&'static str> {
    NAMES.iter().map(|(kind, _)| kind.name()).collect()
}

/// Resolve a raw selection into kinds.
///
/// An empty selection means the default aggregate. Duplicates collapse;
/// order of first mention is kept so the build order is what the user
/// wrote.
pub fn select_targets(names: &[String]) -> Result<Vec<TargetKind>> {
    if names.is_empty() {
        return Ok(default_aggregate().to_vec());
    }

    let mut kinds = Vec::new();
    for name in names {
        let kind = parse_target(name).ok_or_else(|| TargetError::UnknownTarget {
            name: name.clone(),
            valid: target_names().join(", "),
        })?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aggregate_is_the_cheap_pair() {
        let defaults = default_aggregate();
        assert!(defaults.contains(&TargetKind::Emulator));
        assert!(defaults.contains(&TargetKind::Report));
        assert!(!defaults.contains(&TargetKind::Simulator));
        assert!(!defaults.contains(&TargetKind::Hardware));
    }

    #[test]
    fn parse_accepts_canonical_and_artifact_names() {
        assert_eq!(parse_target("emulator"), Some(TargetKind::Emulator));
        assert_eq!(parse_target("fpga_emu"), Some(TargetKind::Emulator));
        assert_eq!(parse_target("FPGA"), Some(TargetKind::Hardware));
        assert_eq!(parse_target("fpga_sim"), Some(TargetKind::Simulator));
        assert_eq!(parse_target("bitstream"), None);
    }

    #[test]
    fn empty_selection_yields_default_aggregate() {
        let kinds = select_targets(&[]).unwrap();
        assert_eq!(kinds, default_aggregate());
    }

    #[test]
    fn explicit_selection_keeps_order_and_dedupes() {
        let names: Vec<String> = ["fpga", "emulator", "hardware"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let kinds = select_targets(&names).unwrap();
        assert_eq!(kinds, [TargetKind::Hardware, TargetKind::Emulator]);
    }

    #[test]
    fn unknown_name_is_an_error_listing_valid_names() {
        let err = select_targets(&["bitstream".to_string()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bitstream"));
        assert!(msg.contains("hardware"));
    }
}
