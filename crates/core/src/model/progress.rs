use std::collections::HashSet;

use crate::model::ids::MilestoneId;
use crate::model::phase::Phase;

/// Completed-milestone set for the current process.
///
/// Starts empty and is never persisted. Percentages round half up, matching
/// how the header and progress bar display them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    completed: HashSet<MilestoneId>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns `true` if the milestone is now complete.
    pub fn toggle(&mut self, id: &MilestoneId) -> bool {
        if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, id: &MilestoneId) -> bool {
        self.completed.contains(id)
    }

    /// Share of `phase` milestones that are complete, in whole percent.
    ///
    /// A phase without milestones reports 0.
    #[must_use]
    pub fn percent_for(&self, phase: &Phase) -> u8 {
        let total = phase.milestones().len();
        let done = phase
            .milestone_ids()
            .filter(|id| self.completed.contains(*id))
            .count();
        rounded_percent(done, total)
    }

    /// Share of all milestones that are complete, in whole percent.
    ///
    /// `total_milestones` comes from `Roadmap::total_milestones`.
    #[must_use]
    pub fn total_percent(&self, total_milestones: usize) -> u8 {
        rounded_percent(self.completed.len(), total_milestones)
    }
}

/// `round(100 * part / whole)` in integers, clamped to `0..=100`.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    let scaled = (part * 100 + whole / 2) / whole;
    u8::try_from(scaled).unwrap_or(100)
}
