mod chat;
mod login;
mod roadmap;
mod state;
mod tooltip;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatWidget;
pub use login::{LockoutView, LoginView};
pub use roadmap::RoadmapView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tooltip::Tooltip;
