use dioxus::prelude::*;

/// Hover hint rendered next to its anchor.
#[component]
pub fn Tooltip(text: String, children: Element) -> Element {
    rsx! {
        span { class: "tooltip", title: "{text}",
            {children}
            span { class: "tooltip-text", role: "tooltip", "{text}" }
        }
    }
}
