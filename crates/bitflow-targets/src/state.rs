//! Per-target lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use bitflow_flags::TargetKind;

use crate::error::{Result, TargetError};

/// Where a target is in its build lifecycle.
///
/// `NotRequested -> Requested -> Compiling -> Linking -> Built`, with
/// `Failed` reachable from the two working states. Report collapses
/// compile and link into one combined stage, so it goes `Compiling ->
/// Built` without ever entering `Linking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetState {
    /// Declared but not part of the current selection.
    NotRequested,
    /// Selected for this build.
    Requested,
    /// Compile stage (for Report: the single combined stage) running.
    Compiling,
    /// Link stage running.
    Linking,
    /// Artifact produced.
    Built,
    /// A toolchain invocation exited nonzero.
    Failed,
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TargetState::NotRequested => "not-requested",
            TargetState::Requested => "requested",
            TargetState::Compiling => "compiling",
            TargetState::Linking => "linking",
            TargetState::Built => "built",
            TargetState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Lifecycle tracker for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBuild {
    /// The tracked artifact kind.
    pub kind: TargetKind,
    state: TargetState,
}

impl TargetBuild {
    /// A declared target, not yet part of any selection.
    pub fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            state: TargetState::NotRequested,
        }
    }

    /// Current state.
    pub fn state(&self) -> TargetState {
        self.state
    }

    /// Mark the target as selected for this build.
    pub fn request(&mut self) -> Result<()> {
        self.transition(TargetState::Requested)
    }

    /// Enter the compile stage (for Report: the combined stage).
    pub fn begin_compile(&mut self) -> Result<()> {
        self.transition(TargetState::Compiling)
    }

    /// Enter the link stage. Invalid for Report, whose single invocation
    /// already covers linking.
    pub fn begin_link(&mut self) -> Result<()> {
        self.transition(TargetState::Linking)
    }

    /// Record a successful final stage.
    pub fn mark_built(&mut self) -> Result<()> {
        self.transition(TargetState::Built)
    }

    /// Record a nonzero toolchain exit.
    pub fn mark_failed(&mut self) -> Result<()> {
        self.transition(TargetState::Failed)
    }

    fn transition(&mut self, to: TargetState) -> Result<()> {
        if self.allows(to) {
            self.state = to;
            Ok(())
        } else {
            Err(TargetError::InvalidTransition {
                kind: self.kind,
                from: self.state,
                to,
            })
        }
    }

    fn allows(&self, to: TargetState) -> bool {
        use TargetState::*;
        match (self.state, to) {
            (NotRequested, Requested) => true,
            (Requested, Compiling) => true,
            // Report never has a separate link stage.
            (Compiling, Linking) => self.kind.invocation_count() == 2,
            (Compiling, Built) => self.kind.invocation_count() == 1,
            (Linking, Built) => true,
            (Compiling, Failed) | (Linking, Failed) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_stage_happy_path() {
        let mut build = TargetBuild::new(TargetKind::Emulator);
        build.request().unwrap();
        build.begin_compile().unwrap();
        build.begin_link().unwrap();
        build.mark_built().unwrap();
        assert_eq!(build.state(), TargetState::Built);
    }

    #[test]
    fn report_combined_stage_path() {
        let mut build = TargetBuild::new(TargetKind::Report);
        build.request().unwrap();
        build.begin_compile().unwrap();
        build.mark_built().unwrap();
        assert_eq!(build.state(), TargetState::Built);
    }

    #[test]
    fn report_never_enters_linking() {
        let mut build = TargetBuild::new(TargetKind::Report);
        build.request().unwrap();
        build.begin_compile().unwrap();
        assert!(build.begin_link().is_err());
    }

    #[test]
    fn two_stage_cannot_skip_linking() {
        let mut build = TargetBuild::new(TargetKind::Hardware);
        build.request().unwrap();
        build.begin_compile().unwrap();
        assert!(build.mark_built().is_err());
    }

    #[test]
    fn failure_from_either_working_state() {
        let mut build = TargetBuild::new(TargetKind::Simulator);
        build.request().unwrap();
        build.begin_compile().unwrap();
        build.mark_failed().unwrap();
        assert_eq!(build.state(), TargetState::Failed);

        let mut build = TargetBuild::new(TargetKind::Simulator);
        build.request().unwrap();
        build.begin_compile().unwrap();
        build.begin_link().unwrap();
        build.mark_failed().unwrap();
        assert_eq!(build.state(), TargetState::Failed);
    }

    #[test]
    fn cannot_fail_before_work_starts() {
        let mut build = TargetBuild::new(TargetKind::Emulator);
        assert!(build.mark_failed().is_err());
        build.request().unwrap();
        assert!(build.mark_failed().is_err());
    }

    #[test]
    fn terminal_states_reject_transitions() {
        let mut build = TargetBuild::new(TargetKind::Report);
        build.request().unwrap();
        build.begin_compile().unwrap();
        build.mark_built().unwrap();
        assert!(build.begin_compile().is_err());
        assert!(build.mark_failed().is_err());
    }
}
