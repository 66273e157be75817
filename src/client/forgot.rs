#![allow(non_snake_case)]

use crate::client;

use client::log_to_console;
use client::top_bar;
use client::Route;
use dioxus::prelude::*;

#[component]
pub fn ForgotPassword() -> Element {
    let mut sent = use_signal(|| false);

    rsx! {
        { top_bar() }
        div {
            class: "auth-card",
            if sent() {
                h2 { "Check your inbox" }
                p { class: "muted",
                    "If that address has an account, a reset link is on its way."
                }
                div {
                    class: "auth-links",
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            } else {
                h2 { "Reset your password" }
                p { class: "muted", "Enter your email and we'll send you a reset link" }
                form {
                    onsubmit: move |event| {
                        let values = event.data().values();
                        let email = values
                            .get("email")
                            .map(|v| v.as_value())
                            .unwrap_or_default();
                        log_to_console(("password reset requested", &email));
                        sent.set(true);
                    },
                    div { class: "form-group",
                        label { r#for: "reset-email", "Email" }
                        input {
                            id: "reset-email",
                            name: "email",
                            r#type: "email",
                            autocomplete: "email",
                            placeholder: "Email address",
                            required: true,
                        }
                    }
                    div { class: "form-group",
                        button {
                            class: "mybutton",
                            r#type: "submit",
                            "Send reset link"
                        }
                    }
                }
                div {
                    class: "auth-links",
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
