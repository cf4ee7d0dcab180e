use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{MilestoneId, PhaseId};
use crate::model::phase::Phase;
use crate::model::resources::ResourceGroup;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("roadmap must contain at least one phase")]
    NoPhases,

    #[error("duplicate phase id: {0}")]
    DuplicatePhase(PhaseId),

    #[error("duplicate milestone id: {0}")]
    DuplicateMilestone(MilestoneId),

    #[error("phase {0} has no milestones")]
    EmptyPhase(PhaseId),
}

/// The immutable curriculum: ordered phases plus the reference link hub.
///
/// Construction checks the content invariants once (unique phase ids, unique
/// milestone ids across all phases, non-empty milestone lists), so every
/// percentage derived from it has a known, non-zero denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    phases: Vec<Phase>,
    resource_groups: Vec<ResourceGroup>,
    total_milestones: usize,
}

impl Roadmap {
    /// Build a roadmap from validated phases.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` when any content invariant is violated.
    pub fn new(
        phases: Vec<Phase>,
        resource_groups: Vec<ResourceGroup>,
    ) -> Result<Self, RoadmapError> {
        if phases.is_empty() {
            return Err(RoadmapError::NoPhases);
        }

        let mut phase_ids = HashSet::with_capacity(phases.len());
        let mut milestone_ids = HashSet::new();
        for phase in &phases {
            if !phase_ids.insert(phase.id()) {
                return Err(RoadmapError::DuplicatePhase(phase.id()));
            }
            if phase.milestones().is_empty() {
                return Err(RoadmapError::EmptyPhase(phase.id()));
            }
            for id in phase.milestone_ids() {
                if !milestone_ids.insert(id.clone()) {
                    return Err(RoadmapError::DuplicateMilestone(id.clone()));
                }
            }
        }

        Ok(Self {
            total_milestones: milestone_ids.len(),
            phases,
            resource_groups,
        })
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn resource_groups(&self) -> &[ResourceGroup] {
        &self.resource_groups
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id() == id)
    }

    /// Look up a phase, falling back to the first one for unknown ids.
    #[must_use]
    pub fn phase_or_first(&self, id: PhaseId) -> &Phase {
        self.phase(id).unwrap_or(&self.phases[0])
    }

    #[must_use]
    pub fn first_phase_id(&self) -> PhaseId {
        self.phases[0].id()
    }

    /// Number of milestones across every phase.
    #[must_use]
    pub fn total_milestones(&self) -> usize {
        self.total_milestones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::phase::{Milestone, PhaseDraft, Project};

    fn phase(id: u32, milestone_ids: &[&str]) -> Phase {
        PhaseDraft {
            id: PhaseId::new(id),
            month: id,
            title: format!("Phase {id}"),
            focus: String::new(),
            description: String::new(),
            icon: String::new(),
            topics: Vec::new(),
            milestones: milestone_ids
                .iter()
                .map(|m| Milestone::new(*m, "title", "desc"))
                .collect(),
            labs: Vec::new(),
            project: Project::new("p", "d", ["x"]),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_milestones_across_phases() {
        let err = Roadmap::new(vec![phase(1, &["a"]), phase(2, &["a"])], Vec::new()).unwrap_err();
        assert_eq!(err, RoadmapError::DuplicateMilestone(MilestoneId::new("a")));
    }

    #[test]
    fn rejects_duplicate_phase_ids() {
        let err = Roadmap::new(vec![phase(1, &["a"]), phase(1, &["b"])], Vec::new()).unwrap_err();
        assert_eq!(err, RoadmapError::DuplicatePhase(PhaseId::new(1)));
    }

    #[test]
    fn rejects_empty_roadmap() {
        assert_eq!(Roadmap::new(Vec::new(), Vec::new()).unwrap_err(), RoadmapError::NoPhases);
    }

    #[test]
    fn counts_milestones_and_falls_back_to_first_phase() {
        let roadmap =
            Roadmap::new(vec![phase(1, &["a", "b"]), phase(2, &["c"])], Vec::new()).unwrap();
        assert_eq!(roadmap.total_milestones(), 3);
        assert_eq!(roadmap.phase_or_first(PhaseId::new(42)).id(), PhaseId::new(1));
    }
}
