//! Override normalization into a complete parameter record.

use serde::{Deserialize, Serialize};

use crate::board::{usm_capable, DEFAULT_BOARD};
use crate::host;
use crate::overrides::BuildOverrides;

/// Severity of a resolution notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Informational, printed to stdout.
    Info,
    /// Suspicious but non-fatal, printed to stderr.
    Warning,
}

/// A message produced while resolving overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// How the caller should surface the message.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The complete, immutable parameter record every flag composition
/// starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildParameters {
    /// Resolved board descriptor, never empty.
    pub board_id: String,
    /// Derived from the board capability registry, never set directly.
    pub usm_enabled: bool,
    /// Derived from the build host platform family.
    pub host_error_handling: bool,
    /// Hardware profiling instrumentation.
    pub profiling_enabled: bool,
    /// Large sensor array geometry.
    pub large_sensor_array: bool,
    /// Explicit sensor count; absent means the flag is omitted.
    pub num_sensors: Option<u32>,
    /// QR-decomposition iteration lower bound; absent means omitted.
    pub qrd_min_iterations: Option<u32>,
    /// Free-form hardware link tokens, appended verbatim and last.
    pub extra_hardware_flags: Vec<String>,
}

impl BuildParameters {
    /// Resolve a sparse override set into a complete record.
    ///
    /// Never fails. Defaults are filled in, derived fields computed, and
    /// everything noteworthy is reported through the returned notices.
    pub fn resolve(overrides: &BuildOverrides) -> (Self, Vec<Notice>) {
        Self::resolve_on_host(overrides, host::host_error_handling())
    }

    /// Resolution with the host probe injected, for tests and callers
    /// that already know the host family.
    pub fn resolve_on_host(
        overrides: &BuildOverrides,
        host_error_handling: bool,
    ) -> (Self, Vec<Notice>) {
        let mut notices = Vec::new();

        let (board_id, from_default) = match overrides.board.as_deref() {
            Some(id) if !id.is_empty() => (id.to_string(), false),
            Some(_) => {
                notices.push(Notice::warning(
                    "empty board descriptor ignored, using the default",
                ));
                (DEFAULT_BOARD.to_string(), true)
            }
            None => (DEFAULT_BOARD.to_string(), true),
        };
        notices.push(Notice::info(format!(
            "board: {board_id}{}",
            if from_default { " (default)" } else { "" }
        )));

        let usm_enabled = usm_capable(&board_id);
        if usm_enabled {
            notices.push(Notice::info(
                "board supports USM host allocations, compiling USM code paths",
            ));
        }

        let num_sensors = positive_or_dropped(overrides.num_sensors, "num-sensors", &mut notices);
        let qrd_min_iterations = positive_or_dropped(
            overrides.qrd_min_iterations,
            "qrd-min-iterations",
            &mut notices,
        );

        let extra_hardware_flags = overrides
            .extra_hardware_flags
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let params = BuildParameters {
            board_id,
            usm_enabled,
            host_error_handling,
            profiling_enabled: overrides.profiling.unwrap_or(false),
            large_sensor_array: overrides.large_sensor_array.unwrap_or(false),
            num_sensors,
            qrd_min_iterations,
            extra_hardware_flags,
        };
        (params, notices)
    }
}

/// Optional counts only ever contribute a flag when positive; a supplied
/// zero is dropped with a warning.
fn positive_or_dropped(
    value: Option<u32>,
    key: &str,
    notices: &mut Vec<Notice>,
) -> Option<u32> {
    match value {
        Some(0) => {
            notices.push(Notice::warning(format!("{key} = 0 ignored")));
            None
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_resolves_to_defaults() {
        let (params, notices) = BuildParameters::resolve_on_host(&BuildOverrides::default(), false);

        assert_eq!(params.board_id, DEFAULT_BOARD);
        assert!(!params.usm_enabled); // default board is the non-USM variant
        assert!(!params.host_error_handling);
        assert!(!params.profiling_enabled);
        assert!(!params.large_sensor_array);
        assert!(params.num_sensors.is_none());
        assert!(params.qrd_min_iterations.is_none());
        assert!(params.extra_hardware_flags.is_empty());

        let board_notice = notices
            .iter()
            .find(|n| n.message.starts_with("board:"))
            .unwrap();
        assert!(board_notice.message.contains("(default)"));
    }

    #[test]
    fn explicit_board_is_not_marked_default() {
        let overrides = BuildOverrides {
            board: Some("intel_a10gx_pac:pac_a10".into()),
            ..Default::default()
        };
        let (params, notices) = BuildParameters::resolve_on_host(&overrides, false);

        assert_eq!(params.board_id, "intel_a10gx_pac:pac_a10");
        assert!(!params.usm_enabled);
        let board_notice = notices
            .iter()
            .find(|n| n.message.starts_with("board:"))
            .unwrap();
        assert!(!board_notice.message.contains("(default)"));
    }

    #[test]
    fn usm_derived_from_convention_for_unknown_board() {
        let overrides = BuildOverrides {
            board: Some("x.usm_variant".into()),
            ..Default::default()
        };
        let (params, notices) = BuildParameters::resolve_on_host(&overrides, false);
        assert!(params.usm_enabled);
        assert!(notices.iter().any(|n| n.message.contains("USM")));
    }

    #[test]
    fn empty_board_falls_back_to_default_with_warning() {
        let overrides = BuildOverrides {
            board: Some(String::new()),
            ..Default::default()
        };
        let (params, notices) = BuildParameters::resolve_on_host(&overrides, false);
        assert_eq!(params.board_id, DEFAULT_BOARD);
        assert!(notices.iter().any(|n| n.severity == Severity::Warning));
    }

    #[test]
    fn zero_counts_are_dropped_with_warning() {
        let overrides = BuildOverrides {
            num_sensors: Some(0),
            qrd_min_iterations: Some(0),
            ..Default::default()
        };
        let (params, notices) = BuildParameters::resolve_on_host(&overrides, false);
        assert!(params.num_sensors.is_none());
        assert!(params.qrd_min_iterations.is_none());
        assert_eq!(
            notices
                .iter()
                .filter(|n| n.severity == Severity::Warning)
                .count(),
            2
        );
    }

    #[test]
    fn positive_counts_pass_through() {
        let overrides = BuildOverrides {
            num_sensors: Some(96),
            qrd_min_iterations: Some(80),
            ..Default::default()
        };
        let (params, _) = BuildParameters::resolve_on_host(&overrides, false);
        assert_eq!(params.num_sensors, Some(96));
        assert_eq!(params.qrd_min_iterations, Some(80));
    }

    #[test]
    fn extra_flags_split_on_whitespace() {
        let overrides = BuildOverrides {
            extra_hardware_flags: Some("-Xsseed=42  -Xsclock=300MHz".into()),
            ..Default::default()
        };
        let (params, _) = BuildParameters::resolve_on_host(&overrides, false);
        assert_eq!(params.extra_hardware_flags, vec!["-Xsseed=42", "-Xsclock=300MHz"]);
    }

    #[test]
    fn host_probe_flows_into_record() {
        let (on_windows, _) = BuildParameters::resolve_on_host(&BuildOverrides::default(), true);
        let (elsewhere, _) = BuildParameters::resolve_on_host(&BuildOverrides::default(), false);
        assert!(on_windows.host_error_handling);
        assert!(!elsewhere.host_error_handling);
    }

    #[test]
    fn resolution_is_deterministic() {
        let overrides = BuildOverrides {
            board: Some("x.usm_variant".into()),
            num_sensors: Some(96),
            extra_hardware_flags: Some("-Xsextra".into()),
            ..Default::default()
        };
        let (a, _) = BuildParameters::resolve_on_host(&overrides, false);
        let (b, _) = BuildParameters::resolve_on_host(&overrides, false);
        assert_eq!(a, b);
    }
}
