use dioxus::prelude::*;

use roadmap_core::model::{Difficulty, Lab, Milestone, Project, Topic};

use crate::context::AppContext;
use crate::views::tooltip::Tooltip;
use crate::vm::{MilestoneTarget, RoadmapVm};

const DEFAULT_LAB_TOOLTIP: &str = "Hands-on virtual environment exercise.";
const DEFAULT_TOPIC_TOOLTIP: &str = "Click to view curated study materials.";

#[component]
pub fn MilestoneList(vm: Signal<RoadmapVm>) -> Element {
    let roadmap = use_context::<AppContext>().roadmap();
    let rows: Vec<(Milestone, bool, bool)> = {
        let state = vm.read();
        state
            .active_phase(&roadmap)
            .milestones()
            .iter()
            .map(|milestone| {
                let completed = state.is_completed(milestone.id());
                let expanded = state.expanded_milestone() == Some(milestone.id());
                (milestone.clone(), completed, expanded)
            })
            .collect()
    };

    rsx! {
        section { class: "glass panel cyber-border",
            h2 { class: "panel-title",
                span { class: "accent-blue", "#" }
                " Learning Milestones"
            }
            div { class: "milestone-list",
                for (milestone, completed, expanded) in rows {
                    MilestoneRow {
                        key: "{milestone.id()}",
                        milestone,
                        completed,
                        expanded,
                        vm,
                    }
                }
            }
        }
    }
}

#[component]
fn MilestoneRow(
    milestone: Milestone,
    completed: bool,
    expanded: bool,
    vm: Signal<RoadmapVm>,
) -> Element {
    let mut vm = vm;
    let body_id = milestone.id().clone();
    let check_id = body_id.clone();
    let guide = milestone.guide().map(<[String]>::to_vec);
    let has_guide = guide.is_some();

    rsx! {
        div {
            class: if completed { "milestone completed" } else { "milestone" },
            "data-milestone": "{milestone.id()}",
            onclick: move |_| {
                vm.write().click_milestone(&body_id, MilestoneTarget::Body);
            },
            div {
                class: "milestone-check",
                role: "checkbox",
                aria_checked: "{completed}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    vm.write().click_milestone(&check_id, MilestoneTarget::Checkbox);
                },
                if completed {
                    span { class: "check-mark", "✓" }
                }
            }
            div { class: "milestone-body",
                div { class: "milestone-head",
                    h4 { class: "milestone-title", "{milestone.title()}" }
                    if has_guide {
                        span { class: if expanded { "chevron open" } else { "chevron" }, "▾" }
                    }
                }
                p { class: "milestone-description", "{milestone.description()}" }

                if expanded {
                    if let Some(steps) = guide {
                        div { class: "guide",
                            h5 { class: "guide-title", "Tactical Insights" }
                            ol { class: "guide-steps",
                                for (idx, step) in steps.into_iter().enumerate() {
                                    li { key: "{idx}", class: "guide-step",
                                        span { class: "guide-index", "{idx + 1}." }
                                        "{step}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LabGrid(labs: Vec<Lab>) -> Element {
    rsx! {
        section { class: "lab-grid",
            for (idx, lab) in labs.into_iter().enumerate() {
                LabCard { key: "{idx}", lab }
            }
        }
    }
}

#[component]
fn LabCard(lab: Lab) -> Element {
    let difficulty = lab.difficulty();
    let badge = match difficulty {
        Difficulty::Easy => "difficulty easy",
        Difficulty::Medium => "difficulty medium",
        Difficulty::Hard => "difficulty hard",
    };
    let tooltip = lab.tooltip().unwrap_or(DEFAULT_LAB_TOOLTIP).to_string();

    rsx! {
        div { class: "glass lab-card",
            div { class: "lab-top",
                Tooltip { text: tooltip,
                    span { class: "{badge}", "{difficulty} Lab" }
                }
                div { class: "lab-tools mono",
                    for tool in lab.tools().iter() {
                        span { key: "{tool}", class: "lab-tool", "{tool}" }
                    }
                }
            }
            h3 { class: "lab-title", "{lab.title()}" }
            p { class: "lab-objective", "{lab.objective()}" }
            Tooltip { text: "Spin up instance and deploy tools.",
                button { class: "btn-link", r#type: "button", "START LAB →" }
            }
        }
    }
}

#[component]
pub fn ProjectPanel(project: Project) -> Element {
    rsx! {
        section { class: "project-panel",
            h2 { class: "project-kicker", "Final Capstone Project" }
            h3 { class: "project-title", "{project.title()}" }
            p { class: "project-description", "{project.description()}" }
            div { class: "deliverables",
                for (idx, deliverable) in project.deliverables().iter().enumerate() {
                    div { key: "{idx}", class: "deliverable",
                        span { class: "bullet" }
                        "{deliverable}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TopicList(vm: Signal<RoadmapVm>) -> Element {
    let roadmap = use_context::<AppContext>().roadmap();
    let rows: Vec<(Topic, bool)> = {
        let state = vm.read();
        state
            .active_phase(&roadmap)
            .topics()
            .iter()
            .map(|topic| {
                let expanded = state.expanded_topic() == Some(topic.name());
                (topic.clone(), expanded)
            })
            .collect()
    };

    rsx! {
        section { class: "glass panel",
            h3 { class: "panel-subtitle", "Core Topics" }
            div { class: "topic-list",
                for (topic, expanded) in rows {
                    TopicRow { key: "{topic.name()}", topic, expanded, vm }
                }
            }
        }
    }
}

#[component]
fn TopicRow(topic: Topic, expanded: bool, vm: Signal<RoadmapVm>) -> Element {
    let mut vm = vm;
    let name = topic.name().to_string();
    let tooltip = topic.tooltip().unwrap_or(DEFAULT_TOPIC_TOOLTIP).to_string();

    rsx! {
        div { class: "topic",
            Tooltip { text: tooltip,
                button {
                    class: if expanded { "topic-header open" } else { "topic-header" },
                    r#type: "button",
                    onclick: move |_| {
                        vm.write().click_topic(&name);
                    },
                    span { class: "topic-name", "{topic.name()}" }
                    span { class: if expanded { "chevron open" } else { "chevron" }, "▾" }
                }
            }
            if expanded {
                div { class: "topic-materials",
                    p { class: "materials-label", "Study Materials" }
                    ul {
                        for resource in topic.resources().iter() {
                            li { key: "{resource}", class: "material", "{resource}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PhaseProgress(percent: u8) -> Element {
    rsx! {
        section { class: "glass panel progress-panel",
            p { class: "progress-label", "Current Phase Progress" }
            div { class: "progress-value", "{percent}%" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
        }
    }
}
