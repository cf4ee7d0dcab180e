use dioxus::prelude::*;
use tracing::debug;

use roadmap_core::model::ChatRole;

use crate::context::AppContext;
use crate::vm::ChatVm;

/// Floating mentor chat. Conversation state lives in the shell so a logout
/// can invalidate replies still in flight.
#[component]
pub fn ChatWidget() -> Element {
    let relay = use_context::<AppContext>().chat();
    let mut chat = use_context::<Signal<ChatVm>>();
    let mut draft = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let prompt = draft.read().trim().to_string();
        let Some((ticket, history)) = chat.write().begin_send(&prompt) else {
            return;
        };
        draft.set(String::new());

        let relay = relay.clone();
        spawn(async move {
            let reply = relay.send(&prompt, &history).await;
            if !chat.write().apply_reply(ticket, reply) {
                debug!(seq = ticket.seq(), "dropped reply from an ended session");
            }
        });
    };

    let state = chat.read();
    let open = state.is_open();
    let thinking = state.is_thinking();
    let messages = state.messages().to_vec();
    drop(state);

    rsx! {
        div { class: "chat-widget",
            if open {
                div { class: "glass chat-panel",
                    div { class: "chat-head",
                        span { class: "chat-title mono", "MENTOR UPLINK" }
                        button {
                            class: "chat-close",
                            r#type: "button",
                            onclick: move |_| chat.write().toggle_open(),
                            "×"
                        }
                    }
                    div { class: "chat-messages",
                        for (idx, message) in messages.into_iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: match message.role {
                                    ChatRole::User => "chat-message user",
                                    ChatRole::Model => "chat-message model",
                                },
                                "{message.text}"
                            }
                        }
                        if thinking {
                            div { class: "chat-message model thinking", "Analyzing..." }
                        }
                    }
                    form { class: "chat-input", onsubmit: submit,
                        input {
                            class: "field-input",
                            r#type: "text",
                            placeholder: "Ask your mentor...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: thinking || draft.read().trim().is_empty(),
                            "Send"
                        }
                    }
                }
            }
            button {
                class: "chat-toggle",
                r#type: "button",
                aria_label: "Toggle mentor chat",
                onclick: move |_| chat.write().toggle_open(),
                if open { "×" } else { "💬" }
            }
        }
    }
}
