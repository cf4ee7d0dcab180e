use thiserror::Error;

use crate::model::ids::{MilestoneId, PhaseId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PhaseError {
    #[error("phase title cannot be empty")]
    EmptyTitle,

    #[error("phase {phase} has no milestones")]
    NoMilestones { phase: PhaseId },

    #[error("phase month must be > 0")]
    InvalidMonth,
}

//
// ─── LEAF RECORDS ──────────────────────────────────────────────────────────────
//

/// A study topic with curated resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    tooltip: Option<String>,
    resources: Vec<String>,
}

impl Topic {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tooltip: None,
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }
}

/// A single checkable learning objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    id: MilestoneId,
    title: String,
    description: String,
    guide: Option<Vec<String>>,
}

impl Milestone {
    #[must_use]
    pub fn new(
        id: impl Into<MilestoneId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            guide: None,
        }
    }

    #[must_use]
    pub fn with_guide<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guide = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn id(&self) -> &MilestoneId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn guide(&self) -> Option<&[String]> {
        self.guide.as_deref()
    }
}

/// Lab difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A hands-on lab exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    title: String,
    tools: Vec<String>,
    objective: String,
    difficulty: Difficulty,
    tooltip: Option<String>,
}

impl Lab {
    #[must_use]
    pub fn new<I, S>(
        title: impl Into<String>,
        tools: I,
        objective: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            tools: tools.into_iter().map(Into::into).collect(),
            objective: objective.into(),
            difficulty,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

/// Capstone project closing a phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    title: String,
    description: String,
    deliverables: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, deliverables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            deliverables: deliverables.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn deliverables(&self) -> &[String] {
        &self.deliverables
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated phase input, used by the content catalog.
#[derive(Debug, Clone)]
pub struct PhaseDraft {
    pub id: PhaseId,
    pub month: u32,
    pub title: String,
    pub focus: String,
    pub description: String,
    pub icon: String,
    pub topics: Vec<Topic>,
    pub milestones: Vec<Milestone>,
    pub labs: Vec<Lab>,
    pub project: Project,
}

impl PhaseDraft {
    /// Validate the draft into an immutable `Phase`.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError::EmptyTitle` for a blank title,
    /// `PhaseError::InvalidMonth` for month 0, and
    /// `PhaseError::NoMilestones` when the milestone list is empty.
    pub fn validate(self) -> Result<Phase, PhaseError> {
        if self.title.trim().is_empty() {
            return Err(PhaseError::EmptyTitle);
        }
        if self.month == 0 {
            return Err(PhaseError::InvalidMonth);
        }
        if self.milestones.is_empty() {
            return Err(PhaseError::NoMilestones { phase: self.id });
        }

        Ok(Phase {
            id: self.id,
            month: self.month,
            title: self.title,
            focus: self.focus,
            description: self.description,
            icon: self.icon,
            topics: self.topics,
            milestones: self.milestones,
            labs: self.labs,
            project: self.project,
        })
    }
}

/// One month-long curriculum unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    id: PhaseId,
    month: u32,
    title: String,
    focus: String,
    description: String,
    icon: String,
    topics: Vec<Topic>,
    milestones: Vec<Milestone>,
    labs: Vec<Lab>,
    project: Project,
}

impl Phase {
    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.id
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn focus(&self) -> &str {
        &self.focus
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    #[must_use]
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn milestone_ids(&self) -> impl Iterator<Item = &MilestoneId> {
        self.milestones.iter().map(Milestone::id)
    }
}
