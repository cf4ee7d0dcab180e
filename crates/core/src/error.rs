use thiserror::Error;

use crate::model::{ChatSettingsError, CredentialsError, PhaseError, RoadmapError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Phase(#[from] PhaseError),
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    ChatSettings(#[from] ChatSettingsError),
}
