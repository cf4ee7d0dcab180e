use dioxus::prelude::*;

use crate::views::tooltip::Tooltip;
use crate::vm::agent_label;

/// Lab subnet address shown in the header badge.
const LAB_IP: &str = "192.168.1.104";
const TARGET_DAYS: u32 = 90;

#[component]
pub fn RoadmapHeader(
    identity: String,
    session_clock: String,
    total_percent: u8,
    on_logout: EventHandler<()>,
) -> Element {
    let agent = agent_label(&identity);

    rsx! {
        header { class: "roadmap-header",
            div { class: "header-inner",
                div { class: "header-intro",
                    div { class: "badge-row",
                        Tooltip { text: "Initial rank for new security trainees.",
                            span { class: "badge badge-rank mono", "Level 0: Recruit" }
                        }
                        span { class: "badge badge-agent mono", "{agent}" }
                        Tooltip { text: "Your local lab subnet address.",
                            span { class: "badge badge-ip mono", "IP: {LAB_IP}" }
                        }
                        div { class: "badge badge-session mono",
                            span { class: "pulse" }
                            "SESSION: {session_clock}"
                        }
                        button {
                            class: "btn btn-disconnect mono",
                            r#type: "button",
                            onclick: move |_| on_logout.call(()),
                            "DISCONNECT"
                        }
                    }
                    h1 { class: "roadmap-title",
                        "CyberShield "
                        span { class: "accent-blue", "Roadmap" }
                    }
                    p { class: "roadmap-tagline",
                        "Your tactical path from fundamental networking to professional penetration testing. 90 days of intense growth."
                    }
                }
                div { class: "stat-row",
                    Tooltip { text: "Overall mastery across all 3 months.",
                        div { class: "glass stat stat-blue",
                            div { class: "stat-value", "{total_percent}%" }
                            div { class: "stat-label", "Total Completion" }
                        }
                    }
                    Tooltip { text: "Standard training window for core proficiency.",
                        div { class: "glass stat stat-green",
                            div { class: "stat-value", "{TARGET_DAYS}" }
                            div { class: "stat-label", "Target Days" }
                        }
                    }
                }
            }
        }
    }
}
