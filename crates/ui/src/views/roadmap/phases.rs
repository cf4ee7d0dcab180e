use dioxus::prelude::*;

use roadmap_core::model::{Phase, PhaseId};

use crate::context::AppContext;
use crate::vm::RoadmapVm;

#[component]
pub fn PhaseSelector(vm: Signal<RoadmapVm>) -> Element {
    let roadmap = use_context::<AppContext>().roadmap();
    let mut vm = vm;
    let active = vm.read().active_phase_id();

    rsx! {
        div { class: "phase-grid",
            for (id, phase) in roadmap.phases().iter().map(|phase| (phase.id(), phase.clone())) {
                PhaseCard {
                    key: "{id}",
                    active: id == active,
                    phase,
                    on_select: move |id: PhaseId| vm.write().select_phase(id),
                }
            }
        }
    }
}

#[component]
fn PhaseCard(phase: Phase, active: bool, on_select: EventHandler<PhaseId>) -> Element {
    let id = phase.id();

    rsx! {
        div {
            class: if active { "phase-card active" } else { "phase-card" },
            onclick: move |_| on_select.call(id),
            div { class: "glass phase-card-inner",
                div { class: "phase-card-top",
                    span { class: "phase-icon", "{phase.icon()}" }
                    span { class: "month-badge", "Month {phase.month()}" }
                }
                h3 { class: "phase-title", "{phase.title()}" }
                p { class: "phase-focus", "{phase.focus()}" }
                p { class: "phase-description", "{phase.description()}" }
                if active {
                    div { class: "phase-marker" }
                }
            }
        }
    }
}
