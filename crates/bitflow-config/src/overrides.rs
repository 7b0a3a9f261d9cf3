//! The sparse override surface.
//!
//! Overrides arrive from two layers: the `[build]` section of
//! `bitflow.toml` and the command line, the command line winning
//! field-by-field. Every field is optional; [`crate::resolve`] fills in
//! defaults and derived values.

use serde::{Deserialize, Serialize};

/// Invocation-time overrides, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildOverrides {
    /// Target board descriptor.
    #[serde(default)]
    pub board: Option<String>,
    /// Enable hardware profiling instrumentation.
    #[serde(default)]
    pub profiling: Option<bool>,
    /// Compile for the large sensor array geometry.
    #[serde(default)]
    pub large_sensor_array: Option<bool>,
    /// Explicit sensor count constant.
    #[serde(default)]
    pub num_sensors: Option<u32>,
    /// Lower bound on QR-decomposition iterations.
    #[serde(default)]
    pub qrd_min_iterations: Option<u32>,
    /// Free-form flags appended verbatim to the hardware link stage.
    #[serde(default)]
    pub extra_hardware_flags: Option<String>,
}

impl BuildOverrides {
    /// Layer `self` over `base`: fields set here win, unset fields fall
    /// through to `base`.
    pub fn merged_over(self, base: BuildOverrides) -> BuildOverrides {
        BuildOverrides {
            board: self.board.or(base.board),
            profiling: self.profiling.or(base.profiling),
            large_sensor_array: self.large_sensor_array.or(base.large_sensor_array),
            num_sensors: self.num_sensors.or(base.num_sensors),
            qrd_min_iterations: self.qrd_min_iterations.or(base.qrd_min_iterations),
            extra_hardware_flags: self.extra_hardware_flags.or(base.extra_hardware_flags),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == BuildOverrides::default()
    }
}
