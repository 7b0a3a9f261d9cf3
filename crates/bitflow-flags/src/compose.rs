//! Parameter record × artifact kind → fully specified invocation flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bitflow_config::BuildParameters;

use crate::flags::FlagList;
use crate::kind::TargetKind;

/// Device-compilation enable.
const DEVICE_COMPILE: &str = "-fintelfpga";
/// Parser nesting depth limit; deeply nested generated headers exceed
/// the frontend default.
const BRACKET_DEPTH: &str = "-fbracket-depth=512";
/// Compile USM host-allocation code paths.
const USM_DEFINE: &str = "-DUSM_HOST_ALLOCATIONS";
/// Large sensor array geometry.
const LARGE_SENSOR_ARRAY_DEFINE: &str = "-DLARGE_SENSOR_ARRAY";
/// Functional emulation mode.
const EMULATOR_DEFINE: &str = "-DFPGA_EMULATOR";
/// Structured exception handling for the Windows host pass.
const HOST_EH: &str = "/EHsc";
/// Cycle-accurate simulation flow.
const SIMULATION_FLOW: &str = "-Xssimulation";
/// Waveform dump from the simulation flow.
const WAVEFORM_DUMP: &str = "-Xsghdl";
/// Full device synthesis flow.
const HARDWARE_FLOW: &str = "-Xshardware";
/// Hardware profiling instrumentation.
const PROFILING: &str = "-Xsprofile";
/// Stop after early device-image generation.
const EARLY_LINK: &str = "-fsycl-link=early";

/// The synthesis direction a link composition is aimed at.
#[derive(Clone, Copy, PartialEq, Eq)]
enum SynthesisDirection {
    /// Single-stage early image for the report flow.
    EarlyImage,
    /// Full device synthesis producing a bitstream binary.
    FullSynthesis,
}

/// A fully specified toolchain invocation plan for one artifact kind.
///
/// Specs are independent of each other: each is composed from scratch
/// and shares no state with the specs of other kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetSpec {
    /// The artifact kind this spec builds.
    pub kind: TargetKind,
    /// Compile-stage tokens, in invocation order.
    pub compile_flags: FlagList,
    /// Link-stage tokens, in invocation order.
    pub link_flags: FlagList,
    /// 1 for the combined report invocation, 2 for compile-then-link.
    pub invocation_count: u8,
    /// Where the artifact lands.
    pub output_path: PathBuf,
}

/// Compose the invocation plan for one artifact kind.
///
/// Pure: identical inputs yield byte-identical token sequences. Nothing
/// here validates option combinations; malformed combinations pass
/// through and the backend's own diagnostics govern.
pub fn compose(params: &BuildParameters, kind: TargetKind, output_path: &Path) -> TargetSpec {
    let compile_flags = compile_flags(params, kind);
    let link_flags = match kind {
        TargetKind::Emulator => common_link(),
        TargetKind::Simulator => {
            let mut link = common_link();
            link.push(SIMULATION_FLOW);
            link.push(WAVEFORM_DUMP);
            link
        }
        TargetKind::Report => {
            synthesis_link(params, SynthesisDirection::EarlyImage, output_path)
        }
        TargetKind::Hardware => {
            synthesis_link(params, SynthesisDirection::FullSynthesis, output_path)
        }
    };

    TargetSpec {
        kind,
        compile_flags,
        link_flags,
        invocation_count: kind.invocation_count(),
        output_path: output_path.to_path_buf(),
    }
}

/// The compile-stage tokens: common base, then per-kind additions.
fn compile_flags(params: &BuildParameters, kind: TargetKind) -> FlagList {
    let mut flags = FlagList::new();
    flags.push(DEVICE_COMPILE);
    flags.push(BRACKET_DEPTH);
    if params.usm_enabled {
        flags.push(USM_DEFINE);
    }
    if params.large_sensor_array {
        flags.push(LARGE_SENSOR_ARRAY_DEFINE);
    }
    if let Some(n) = params.num_sensors {
        flags.push(format!("-DNUM_SENSORS={n}"));
    }
    if let Some(n) = params.qrd_min_iterations {
        flags.push(format!("-DQRD_MIN_ITERATIONS={n}"));
    }

    if kind == TargetKind::Emulator {
        flags.push(EMULATOR_DEFINE);
        if params.host_error_handling {
            flags.push(HOST_EH);
        }
    }
    flags
}

/// Link base shared by every kind.
fn common_link() -> FlagList {
    let mut flags = FlagList::new();
    flags.push(DEVICE_COMPILE);
    flags
}

/// Link tokens for the synthesis-direction flows.
///
/// Report reuses the hardware rules minus the synthesis-only tokens
/// (the full-synthesis flow selector and the executable-reuse flag).
/// `extra_hardware_flags` always comes last so user tokens win under
/// the backend's last-flag-wins conflict resolution.
fn synthesis_link(
    params: &BuildParameters,
    direction: SynthesisDirection,
    output_path: &Path,
) -> FlagList {
    let mut flags = common_link();
    match direction {
        SynthesisDirection::EarlyImage => flags.push(EARLY_LINK),
        SynthesisDirection::FullSynthesis => flags.push(HARDWARE_FLOW),
    }
    if params.profiling_enabled {
        flags.push(PROFILING);
    }
    flags.push(format!("-Xsboard={}", params.board_id));
    if direction == SynthesisDirection::FullSynthesis {
        // Lets the backend skip device resynthesis when only host code
        // changed; correctness rests on the backend's content addressing.
        flags.push(format!("-reuse-exe={}", output_path.display()));
    }
    flags.extend(params.extra_hardware_flags.iter().cloned());
    flags
}
