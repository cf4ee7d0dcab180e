use dioxus::prelude::*;
use tracing::warn;

use roadmap_core::model::ActiveSession;
use services::SessionError;

use crate::context::AppContext;
use crate::vm::{AUTH_DELAY, LoginPhase, check_form, login_error_message};

#[component]
pub fn LoginView(on_login: EventHandler<ActiveSession>, on_locked: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut identity = use_signal(String::new);
    let mut secret = use_signal(String::new);
    let mut phase = use_signal(|| LoginPhase::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if phase.read().is_busy() {
            return;
        }
        if let Err(message) = check_form(&identity.read(), &secret.read()) {
            phase.set(LoginPhase::Failed(message));
            return;
        }
        phase.set(LoginPhase::Authenticating);

        let session = ctx.session();
        spawn(async move {
            tokio::time::sleep(AUTH_DELAY).await;
            let result = session.login(&identity(), &secret()).await;
            match result {
                Ok(active) => on_login.call(active),
                Err(SessionError::LockedOut) => on_locked.call(()),
                Err(err) => {
                    warn!(error = %err, "login failed");
                    phase.set(LoginPhase::Failed(login_error_message(&err)));
                }
            }
        });
    };

    let busy = phase.read().is_busy();
    let error = phase.read().error();

    rsx! {
        div { class: "login-page",
            div { class: "login-panel",
                AuthBanner { locked: false }

                form { class: "glass login-form", onsubmit: submit,
                    label { class: "field-label mono", r#for: "operator-id", "Operator ID" }
                    input {
                        id: "operator-id",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "AGENT_00",
                        value: "{identity}",
                        oninput: move |evt| identity.set(evt.value()),
                    }

                    label { class: "field-label mono", r#for: "access-key", "Access Key" }
                    input {
                        id: "access-key",
                        class: "field-input",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: "{secret}",
                        oninput: move |evt| secret.set(evt.value()),
                    }

                    if let Some(message) = error {
                        div { class: "login-error mono", role: "alert", "{message}" }
                    }

                    button {
                        class: if busy { "btn btn-connect busy" } else { "btn btn-connect" },
                        r#type: "submit",
                        disabled: busy,
                        if busy {
                            span { class: "dots", aria_label: "Authenticating",
                                span { class: "dot" }
                                span { class: "dot" }
                                span { class: "dot" }
                            }
                        } else {
                            "ESTABLISH CONNECTION"
                        }
                    }
                }

                p { class: "login-footnote mono",
                    "RESTRICTED ACCESS // AUTHORIZED PERSONNEL ONLY"
                    br {}
                    "BY LOGGING IN YOU AGREE TO THE E.U.L.A."
                }
            }
        }
    }
}

/// Shown instead of the form while today's lockout holds.
#[component]
pub fn LockoutView() -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-panel",
                AuthBanner { locked: true }

                div { class: "glass login-form locked",
                    div { class: "lockout",
                        h3 { class: "lockout-title mono", "System Lockdown Active" }
                        p { class: "lockout-text",
                            "You have exceeded the 4-hour daily training quota. Access will be restored at 00:00 UTC. Take some rest, operator."
                        }
                    }
                }

                p { class: "login-footnote mono",
                    "TERMINAL LOCKED // RE-ESTABLISH TOMORROW"
                    br {}
                    "BY LOGGING IN YOU AGREE TO THE E.U.L.A."
                }
            }
        }
    }
}

#[component]
fn AuthBanner(locked: bool) -> Element {
    rsx! {
        div { class: "auth-banner",
            h1 { class: "auth-title mono",
                "CYBERSHIELD "
                span { class: if locked { "accent-red" } else { "accent-blue" }, "AUTH" }
            }
            p { class: "auth-subtitle mono",
                if locked {
                    "Quota Exceeded for Today"
                } else {
                    "Secure Terminal Access Required"
                }
            }
        }
    }
}
