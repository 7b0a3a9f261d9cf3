//! External toolchain invocation.
//!
//! Runs the composed invocations of a [`bitflow_targets::BuildPlan`],
//! one target at a time. The toolchain is an opaque collaborator: this
//! layer passes flags, inherits its stdout/stderr so diagnostics reach
//! the user unmodified, and looks at nothing but the exit status. Zero
//! means the stage succeeded, nonzero marks the target failed and the
//! remaining targets still build (they only share the unmodified source
//! unit). No retries.

pub mod error;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use bitflow_flags::{TargetKind, TargetSpec};
use bitflow_targets::{BuildPlan, PlannedTarget, TargetState};

pub use error::{DriverError, Result};

/// The external device compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Binary name or path.
    pub binary: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            binary: "icpx".to_string(),
        }
    }
}

impl Toolchain {
    /// A toolchain invoked by the given binary name or path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// Final outcome for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Which target.
    pub kind: TargetKind,
    /// Terminal lifecycle state, `Built` or `Failed`.
    pub state: TargetState,
    /// Where the artifact was (or would have been) written.
    pub output_path: PathBuf,
}

/// Outcomes of a whole plan run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Per-target outcomes in build order.
    pub outcomes: Vec<TargetOutcome>,
}

impl BuildReport {
    /// Whether any target failed.
    pub fn any_failed(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.state == TargetState::Failed)
    }

    /// Number of failed targets.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == TargetState::Failed)
            .count()
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "  {:<10} {}", outcome.kind.to_string(), outcome.state)?;
        }
        Ok(())
    }
}

/// Drives toolchain invocations for planned targets.
#[derive(Debug, Clone)]
pub struct ArtifactDriver {
    toolchain: Toolchain,
    dry_run: bool,
}

impl ArtifactDriver {
    /// A driver for the given toolchain.
    pub fn new(toolchain: Toolchain) -> Self {
        Self {
            toolchain,
            dry_run: false,
        }
    }

    /// Print invocations instead of executing them; every stage is
    /// treated as succeeding.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run every target in the plan, in order.
    ///
    /// A failing target never stops the others unless `fail_fast` is
    /// set; targets not attempted under fail-fast stay in their
    /// requested state and are absent from the report.
    pub fn run_plan(&self, plan: &mut BuildPlan, fail_fast: bool) -> Result<BuildReport> {
        let mut report = BuildReport::default();
        let source = plan.source.clone();
        for target in &mut plan.targets {
            let outcome = self.run_target(target, &source)?;
            let failed = outcome.state == TargetState::Failed;
            report.outcomes.push(outcome);
            if failed && fail_fast {
                break;
            }
        }
        Ok(report)
    }

    /// Run the invocation stages of one target.
    pub fn run_target(&self, target: &mut PlannedTarget, source: &Path) -> Result<TargetOutcome> {
        if !self.dry_run {
            if let Some(out_dir) = target.spec.output_path.parent() {
                std::fs::create_dir_all(out_dir).map_err(DriverError::OutputDir)?;
            }
        }

        let stages = stage_commands(&target.spec, source);
        target.build.begin_compile()?;
        let mut ok = self.invoke(target.spec.kind, &stages[0])?;
        if ok {
            if let Some(link_stage) = stages.get(1) {
                target.build.begin_link()?;
                ok = self.invoke(target.spec.kind, link_stage)?;
            }
        }
        if ok {
            target.build.mark_built()?;
        } else {
            target.build.mark_failed()?;
        }

        Ok(TargetOutcome {
            kind: target.spec.kind,
            state: target.build.state(),
            output_path: target.spec.output_path.clone(),
        })
    }

    /// Run one stage; `Ok(true)` on exit status zero.
    fn invoke(&self, kind: TargetKind, args: &[String]) -> Result<bool> {
        println!(
            "[{kind}]{} {} {}",
            if self.dry_run { " (dry-run)" } else { "" },
            self.toolchain.binary,
            args.join(" ")
        );
        if self.dry_run {
            return Ok(true);
        }
        let status = Command::new(&self.toolchain.binary)
            .args(args)
            .status()
            .map_err(|source| DriverError::Spawn {
                binary: self.toolchain.binary.clone(),
                source,
            })?;
        Ok(status.success())
    }
}

/// The concrete argument lists for a spec, one per invocation stage.
///
/// Two-stage targets compile the source to a per-target object, then
/// link it; the single-stage report flow does both in one invocation
/// that stops at the early image.
pub fn stage_commands(spec: &TargetSpec, source: &Path) -> Vec<Vec<String>> {
    let source = source.display().to_string();
    let output = spec.output_path.display().to_string();

    if spec.invocation_count == 1 {
        let mut combined: Vec<String> = spec.compile_flags.tokens().to_vec();
        combined.extend(spec.link_flags.tokens().iter().cloned());
        combined.extend([source, "-o".to_string(), output]);
        return vec![combined];
    }

    // Objects are per-target so concurrent target builds never collide.
    let object = format!("{output}.o");
    let mut compile: Vec<String> = spec.compile_flags.tokens().to_vec();
    compile.extend(["-c".to_string(), source, "-o".to_string(), object.clone()]);
    let mut link: Vec<String> = spec.link_flags.tokens().to_vec();
    link.extend([object, "-o".to_string(), output]);
    vec![compile, link]
}
