use dioxus::prelude::*;
use tracing::warn;

use roadmap_core::model::ActiveSession;
use services::SessionStatus;

use crate::context::AppContext;
use crate::views::{
    LockoutView, LoginView, RoadmapView, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::ChatVm;

/// Which screen the login gate shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    SignedOut,
    LockedOut,
    Active(ActiveSession),
}

impl From<SessionStatus> for Gate {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Active(session) => Self::Active(session),
            SessionStatus::LockedOut => Self::LockedOut,
            SessionStatus::SignedOut => Self::SignedOut,
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "CyberShield Roadmap" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Restores the persisted session once, then follows login/logout transitions.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let session = ctx.session();
    let mut chat = use_context_provider(|| Signal::new(ChatVm::new()));
    let mut gate = use_signal(|| None::<Gate>);

    let restore = use_resource(move || {
        let session = session.clone();
        async move {
            session.restore().await.map(Gate::from).map_err(|err| {
                warn!(error = %err, "session restore failed");
                ViewError::from(err)
            })
        }
    });

    let state = match gate() {
        Some(current) => ViewState::Ready(current),
        None => view_state_from_resource(&restore),
    };

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "boot mono", "ESTABLISHING SECURE LINK..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "boot",
                p { "{err.message()}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut restore = restore;
                        restore.restart();
                    },
                    "Retry"
                }
            }
        },
        ViewState::Ready(Gate::SignedOut) => rsx! {
            LoginView {
                on_login: move |session: ActiveSession| gate.set(Some(Gate::Active(session))),
                on_locked: move |_| gate.set(Some(Gate::LockedOut)),
            }
        },
        ViewState::Ready(Gate::LockedOut) => rsx! {
            LockoutView {}
        },
        ViewState::Ready(Gate::Active(session)) => rsx! {
            RoadmapView {
                session,
                on_exit: move |next: Gate| {
                    chat.write().end_session();
                    gate.set(Some(next));
                },
            }
        },
    }
}
