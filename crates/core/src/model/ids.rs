use std::fmt;

/// Unique identifier for a curriculum Phase
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhaseId(u32);

impl PhaseId {
    /// Creates a new `PhaseId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Unique identifier for a Milestone.
///
/// Milestone ids are human-authored strings (`m1-1`, `m2-3`, ...) and must be
/// unique across the whole roadmap.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MilestoneId(String);

impl MilestoneId {
    /// Creates a new `MilestoneId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

impl fmt::Debug for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MilestoneId({})", self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MilestoneId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for MilestoneId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
