use dioxus::prelude::*;

use roadmap_core::model::{ResourceGroup, ResourceLink};

use crate::context::AppContext;

#[component]
pub fn IntelHub() -> Element {
    let roadmap = use_context::<AppContext>().roadmap();
    let groups = roadmap.resource_groups().to_vec();

    rsx! {
        section { class: "intel-hub",
            div { class: "intel-heading",
                div { class: "rule" }
                h2 { class: "intel-title mono", "Cyber Intelligence Hub" }
                div { class: "rule" }
            }
            div { class: "intel-grid",
                for group in groups {
                    IntelGroup { key: "{group.title()}", group }
                }
            }
        }
    }
}

#[component]
fn IntelGroup(group: ResourceGroup) -> Element {
    rsx! {
        div { class: "glass intel-group",
            div { class: "intel-group-head",
                span { class: "intel-icon", "{group.icon()}" }
                h3 { class: "intel-group-title", "{group.title()}" }
            }
            ul { class: "intel-links",
                for link in group.links().iter().cloned() {
                    IntelLink { key: "{link.url()}", link }
                }
            }
        }
    }
}

#[component]
fn IntelLink(link: ResourceLink) -> Element {
    let opener = use_context::<AppContext>().link_opener();
    let url = link.url().to_string();

    rsx! {
        li {
            a {
                class: "intel-link",
                href: "{link.url()}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    opener.open_url(&url);
                },
                span { class: "intel-link-name", "{link.name()}" }
                span { class: "intel-link-arrow", "↗" }
            }
        }
    }
}
