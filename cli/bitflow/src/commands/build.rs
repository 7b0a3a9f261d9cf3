//! `bitflow build` — resolve, plan, and drive the selected targets.

use std::path::Path;

use anyhow::{bail, Result};

use bitflow_config::{BuildOverrides, BuildParameters};
use bitflow_driver::{ArtifactDriver, BuildReport, Toolchain};
use bitflow_targets::{plan, select_targets, ProjectPaths};

use crate::commands::print_notices;
use crate::manifest::Manifest;

/// Run the build for the requested targets (default aggregate if none).
#[allow(clippy::too_many_arguments)]
pub fn run(
    project_dir: &Path,
    manifest: &Manifest,
    targets: &[String],
    cli_overrides: BuildOverrides,
    toolchain: Option<&str>,
    source: Option<&Path>,
    dry_run: bool,
    fail_fast: bool,
) -> Result<()> {
    let overrides = cli_overrides.merged_over(manifest.build.clone());
    let (params, notices) = BuildParameters::resolve(&overrides);
    print_notices(&notices);

    let kinds = select_targets(targets)?;
    let source = source.or(manifest.project.source.as_deref());
    let paths = ProjectPaths::conventional(project_dir, &manifest.project.name, source);
    let mut plan = plan(&params, &kinds, &paths)?;

    let binary = toolchain
        .or_else(|| manifest.toolchain_binary())
        .map(Toolchain::new)
        .unwrap_or_default();
    let driver = ArtifactDriver::new(binary).dry_run(dry_run);
    let report = driver.run_plan(&mut plan, fail_fast)?;

    print_summary(&report);
    if report.any_failed() {
        bail!(
            "{} of {} target(s) failed",
            report.failed_count(),
            report.outcomes.len()
        );
    }
    Ok(())
}

fn print_summary(report: &BuildReport) {
    println!();
    println!("Build summary:");
    print!("{report}");
}
