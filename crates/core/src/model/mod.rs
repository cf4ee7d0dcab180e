mod chat;
mod ids;
mod phase;
mod progress;
mod resources;
mod roadmap;
mod session;

pub use chat::{
    ChatMessage, ChatRole, ChatSettings, ChatSettingsDraft, ChatSettingsError,
    DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL,
};
pub use ids::{MilestoneId, PhaseId};

pub use phase::{Difficulty, Lab, Milestone, Phase, PhaseDraft, PhaseError, Project, Topic};
pub use progress::Progress;
pub use resources::{ResourceGroup, ResourceLink};
pub use roadmap::{Roadmap, RoadmapError};
pub use session::{
    ActiveSession, Credentials, CredentialsError, LockoutDate, LogoutReason, decode_started_at,
    encode_started_at,
};
