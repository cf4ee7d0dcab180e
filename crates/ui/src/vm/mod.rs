mod chat_vm;
mod login_vm;
mod roadmap_vm;
mod time_fmt;

pub use chat_vm::{CHAT_GREETING, ChatTicket, ChatVm};
pub use login_vm::{
    AUTH_DELAY, CREDENTIALS_REQUIRED, LoginPhase, agent_label, check_form, login_error_message,
};
pub use roadmap_vm::{MilestoneClick, MilestoneTarget, RoadmapVm};
pub use time_fmt::format_remaining;
