#![allow(non_snake_case)]

use crate::client;

use client::log_to_console;
use client::top_bar;
use client::Route;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();

    rsx! {
        { top_bar() }
        div {
            class: "auth-card",
            h2 { "Welcome Back" }
            p { class: "muted", "Sign in to continue your journey" }
            form {
                onsubmit: move |event| {
                    let values = event.data().values();
                    let email = values
                        .get("email")
                        .map(|v| v.as_value())
                        .unwrap_or_default();
                    log_to_console(("login submitted", &email));
                    navigator.replace(Route::Browse {});
                },
                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        name: "email",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "Email address",
                        required: true,
                    }
                }
                div { class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                    }
                }
                div { class: "form-group",
                    button {
                        class: "mybutton",
                        r#type: "submit",
                        "Sign in"
                    }
                }
            }
            div {
                class: "auth-links",
                Link { to: Route::ForgotPassword {}, "Forgot password?" }
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
