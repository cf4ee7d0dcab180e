use roadmap_core::model::{MilestoneId, Phase, PhaseId, Progress, Roadmap};

/// Where a click on a milestone row landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneTarget {
    /// The completion checkbox.
    Checkbox,
    /// Anywhere else on the row.
    Body,
}

/// What a milestone click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MilestoneClick {
    Toggled { completed: bool },
    Expanded,
    Collapsed,
}

/// Phase selection, expansion cursors and completion for the roadmap screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapVm {
    active_phase: PhaseId,
    expanded_milestone: Option<MilestoneId>,
    expanded_topic: Option<String>,
    progress: Progress,
}

impl RoadmapVm {
    #[must_use]
    pub fn new(roadmap: &Roadmap) -> Self {
        Self {
            active_phase: roadmap.first_phase_id(),
            expanded_milestone: None,
            expanded_topic: None,
            progress: Progress::new(),
        }
    }

    #[must_use]
    pub fn active_phase_id(&self) -> PhaseId {
        self.active_phase
    }

    /// The active phase, or the first one if the id is unknown.
    #[must_use]
    pub fn active_phase<'a>(&self, roadmap: &'a Roadmap) -> &'a Phase {
        roadmap.phase_or_first(self.active_phase)
    }

    #[must_use]
    pub fn expanded_milestone(&self) -> Option<&MilestoneId> {
        self.expanded_milestone.as_ref()
    }

    #[must_use]
    pub fn expanded_topic(&self) -> Option<&str> {
        self.expanded_topic.as_deref()
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Switch phases; no expanded detail carries over.
    pub fn select_phase(&mut self, id: PhaseId) {
        self.active_phase = id;
        self.expanded_milestone = None;
        self.expanded_topic = None;
    }

    pub fn click_milestone(&mut self, id: &MilestoneId, target: MilestoneTarget) -> MilestoneClick {
        match target {
            MilestoneTarget::Checkbox => MilestoneClick::Toggled {
                completed: self.progress.toggle(id),
            },
            MilestoneTarget::Body => {
                if self.expanded_milestone.as_ref() == Some(id) {
                    self.expanded_milestone = None;
                    MilestoneClick::Collapsed
                } else {
                    self.expanded_milestone = Some(id.clone());
                    MilestoneClick::Expanded
                }
            }
        }
    }

    /// Open `name`, or close it if it is already open. Returns whether it is open.
    pub fn click_topic(&mut self, name: &str) -> bool {
        if self.expanded_topic.as_deref() == Some(name) {
            self.expanded_topic = None;
            false
        } else {
            self.expanded_topic = Some(name.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, id: &MilestoneId) -> bool {
        self.progress.is_completed(id)
    }

    #[must_use]
    pub fn phase_percent(&self, roadmap: &Roadmap) -> u8 {
        self.progress.percent_for(self.active_phase(roadmap))
    }

    #[must_use]
    pub fn total_percent(&self, roadmap: &Roadmap) -> u8 {
        self.progress.total_percent(roadmap.total_milestones())
    }
}
