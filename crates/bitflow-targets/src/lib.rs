//! Target graph for bitflow.
//!
//! Declares the four artifact targets, which of them belong to the
//! default aggregate, how a requested selection becomes a [`BuildPlan`],
//! and the lifecycle each target moves through while it is built. Every
//! target depends on exactly one node, the single source unit; there are
//! no target-to-target dependencies, so targets never interfere with
//! each other.

pub mod error;
pub mod plan;
pub mod selection;
pub mod state;

pub use error::{Result, TargetError};
pub use plan::{plan, BuildPlan, PlannedTarget, ProjectPaths};
pub use selection::{default_aggregate, parse_target, select_targets, target_names};
pub use state::{TargetBuild, TargetState};
