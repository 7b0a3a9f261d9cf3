//! Build plan assembly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bitflow_config::BuildParameters;
use bitflow_flags::{compose, TargetKind, TargetSpec};

use crate::error::Result;
use crate::state::TargetBuild;

/// Filesystem layout of the project being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// Base name every artifact is derived from.
    pub base_name: String,
    /// The single source compilation unit.
    pub source: PathBuf,
    /// Directory artifacts land in.
    pub out_dir: PathBuf,
}

impl ProjectPaths {
    /// Conventional layout: `src/<base>.cpp` in, `out/` out.
    pub fn conventional(project_dir: &Path, base_name: &str, source: Option<&Path>) -> Self {
        Self {
            base_name: base_name.to_string(),
            source: source
                .map(Path::to_path_buf)
                .unwrap_or_else(|| project_dir.join("src").join(format!("{base_name}.cpp"))),
            out_dir: project_dir.join("out"),
        }
    }

    /// Artifact path for a kind: `<out>/<base><suffix>`.
    pub fn output_path(&self, kind: TargetKind) -> PathBuf {
        self.out_dir
            .join(format!("{}{}", self.base_name, kind.artifact_suffix()))
    }
}

/// One selected target with its composed invocation plan and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTarget {
    /// The fully composed invocation plan.
    pub spec: TargetSpec,
    /// Lifecycle tracker, already in the requested state.
    pub build: TargetBuild,
}

/// A resolved build: the source unit plus the selected targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// The single source compilation unit all targets depend on.
    pub source: PathBuf,
    /// Selected targets, in build order.
    pub targets: Vec<PlannedTarget>,
}

/// Compose specs for every selected kind.
///
/// The composer runs once per target from the same immutable record, so
/// the resulting specs share no state.
pub fn plan(
    params: &BuildParameters,
    selection: &[TargetKind],
    paths: &ProjectPaths,
) -> Result<BuildPlan> {
    let mut targets = Vec::with_capacity(selection.len());
    for &kind in selection {
        let spec = compose(params, kind, &paths.output_path(kind));
        let mut build = TargetBuild::new(kind);
        build.request()?;
        targets.push(PlannedTarget { spec, build });
    }
    Ok(BuildPlan {
        source: paths.source.clone(),
        targets,
    })
}
