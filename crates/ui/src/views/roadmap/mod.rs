use dioxus::prelude::*;
use tracing::warn;

use roadmap_core::model::{ActiveSession, LogoutReason};
use services::{Countdown, TickOutcome};

use crate::app::Gate;
use crate::context::AppContext;
use crate::views::chat::ChatWidget;
use crate::vm::{RoadmapVm, format_remaining};

mod detail;
mod header;
mod intel;
mod phases;

use detail::{LabGrid, MilestoneList, PhaseProgress, ProjectPanel, TopicList};
use header::RoadmapHeader;
use intel::IntelHub;
use phases::PhaseSelector;

const FOOTER_TEXT: &str =
    "The14Hacker © 2024 CYBERSHIELD SEC // SYSTEM_UPTIME: 99.9% // [FOR EDUCATIONAL PURPOSES ONLY]";

/// The logged-in screen. Runs the session countdown while mounted.
#[component]
pub fn RoadmapView(session: ActiveSession, on_exit: EventHandler<Gate>) -> Element {
    let ctx = use_context::<AppContext>();
    let roadmap = ctx.roadmap();
    let manager = ctx.session();

    let vm = use_signal({
        let roadmap = roadmap.clone();
        move || RoadmapVm::new(&roadmap)
    });
    let mut remaining = use_signal({
        let now = manager.clock().now();
        let session = session.clone();
        move || session.remaining_at(now)
    });

    let countdown_manager = manager.clone();
    use_future(move || {
        let countdown = Countdown::new((*countdown_manager).clone());
        async move {
            let outcome = countdown
                .run(|outcome| {
                    if let TickOutcome::Running { remaining: left } = outcome {
                        remaining.set(*left);
                    }
                })
                .await;
            match outcome {
                Ok(TickOutcome::Expired) => on_exit.call(Gate::LockedOut),
                Ok(_) => on_exit.call(Gate::SignedOut),
                Err(err) => {
                    warn!(error = %err, "session countdown aborted");
                    on_exit.call(Gate::SignedOut);
                }
            }
        }
    });

    let logout = move |_: ()| {
        let manager = manager.clone();
        spawn(async move {
            if let Err(err) = manager.logout(LogoutReason::User).await {
                warn!(error = %err, "logout failed");
            }
            on_exit.call(Gate::SignedOut);
        });
    };

    let state = vm.read();
    let phase = state.active_phase(&roadmap).clone();
    let phase_percent = state.phase_percent(&roadmap);
    let total_percent = state.total_percent(&roadmap);
    drop(state);
    let session_clock = format_remaining(remaining());
    let identity = session.identity().to_string();

    rsx! {
        div { class: "roadmap-page",
            RoadmapHeader {
                identity,
                session_clock,
                total_percent,
                on_logout: logout,
            }

            main { class: "roadmap-main",
                PhaseSelector { vm }

                div { class: "detail-grid",
                    div { class: "detail-main",
                        MilestoneList { vm }
                        LabGrid { labs: phase.labs().to_vec() }
                    }
                    div { class: "detail-side",
                        ProjectPanel { project: phase.project().clone() }
                        TopicList { vm }
                        PhaseProgress { percent: phase_percent }
                    }
                }

                IntelHub {}
            }

            ChatWidget {}

            footer { class: "roadmap-footer mono", "{FOOTER_TEXT}" }
        }
    }
}
