//! Turning a confirmed cleanup selection into a plan.

use crate::cleanup::CleanupCandidate;

use super::plan::{OperationPlan, PlanAction};

/// Builds cleanup plans.
pub struct CleanupPlan;

impl CleanupPlan {
    /// One removal per selected candidate; unselected ones are skipped.
    ///
    /// Run the result with [`super::PlanExecutor::execute_batch`] so one
    /// failure does not stop the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::cleanup::{CandidateKind, CleanupCandidate};
    /// use pathman::operations::{CleanupPlan, PlanAction};
    /// use pathman::Priority;
    ///
    /// let candidate = CleanupCandidate {
    ///     kind: CandidateKind::MissingDirectory,
    ///     identity: "/opt/gone".into(),
    ///     location: "/opt/gone".into(),
    ///     priority: Priority::Back,
    ///     reason: "Directory does not exist".into(),
    ///     selected: true,
    /// };
    /// let plan = CleanupPlan::from_candidates(&[candidate]);
    /// assert_eq!(plan.actions, vec![PlanAction::RemoveDirectory("/opt/gone".into())]);
    /// ```
    #[must_use]
    pub fn from_candidates(candidates: &[CleanupCandidate]) -> OperationPlan {
        candidates
            .iter()
            .filter(|c| c.selected)
            .fold(OperationPlan::new("Clean up"), |plan, c| {
                let action = if c.kind.is_symlink() {
                    PlanAction::PruneLink {
                        location: c.location.clone(),
                        priority: c.priority,
                    }
                } else {
                    PlanAction::RemoveDirectory(c.location.clone())
                };
                plan.add_action(action)
            })
    }
}
