#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::log_to_console;
use client::top_bar;
use client::Route;
use common::Gender;
use dioxus::prelude::*;
use std::ops::Deref;
use strum::IntoEnumIterator;

struct Registration {
    name: String,
    email: String,
    password: String,
    gender: Gender,
    age: u32,
}

impl TryFrom<&FormData> for Registration {
    type Error = String;

    fn try_from(form: &FormData) -> Result<Self, Self::Error> {
        let data = form.values();
        let field = |key: &str| {
            data.get(key)
                .map(|value| value.as_value())
                .unwrap_or_default()
        };

        let password = field("password");
        if password != field("confirm") {
            return Err("Passwords do not match".to_string());
        }

        let gender: Gender = field("gender")
            .parse()
            .map_err(|_| "Select a gender".to_string())?;
        let age: u32 = field("age")
            .parse()
            .map_err(|_| "Select your age".to_string())?;

        Ok(Self {
            name: field("name"),
            email: field("email"),
            password,
            gender,
            age,
        })
    }
}

#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    let gender_options: Vec<(String, String)> = Gender::iter()
        .map(|gender| (format!("{:?}", gender).to_lowercase(), gender.to_string()))
        .collect();

    rsx! {
        { top_bar() }
        div {
            class: "auth-card",
            h2 { "Join HeartLink" }
            p { class: "muted", "Create your account and find your perfect match" }
            form {
                onsubmit: move |event| {
                    match Registration::try_from(event.data().deref()) {
                        Ok(registration) => {
                            log_to_console((
                                "registration submitted",
                                &registration.name,
                                &registration.email,
                            ));
                            error.set(None);
                            navigator.replace(Route::CompleteProfile {});
                        }
                        Err(reason) => {
                            log_to_console(("registration rejected", &reason));
                            error.set(Some(reason));
                        }
                    }
                },
                div { class: "form-group",
                    label { r#for: "name", "Full name" }
                    input {
                        id: "name",
                        name: "name",
                        r#type: "text",
                        autocomplete: "name",
                        placeholder: "Full Name",
                        required: true,
                    }
                }
                div { class: "form-group",
                    label { r#for: "reg-email", "Email" }
                    input {
                        id: "reg-email",
                        name: "email",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "Email address",
                        required: true,
                    }
                }
                div { class: "form-group",
                    label { r#for: "reg-password", "Password" }
                    input {
                        id: "reg-password",
                        name: "password",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                    }
                }
                div { class: "form-group",
                    label { r#for: "confirm", "Confirm password" }
                    input {
                        id: "confirm",
                        name: "confirm",
                        r#type: "password",
                        placeholder: "Confirm password",
                        required: true,
                    }
                }
                div { class: "form-group",
                    label { r#for: "gender", "Gender" }
                    select {
                        id: "gender",
                        name: "gender",
                        required: true,
                        for (value, label) in gender_options {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { r#for: "age", "Age" }
                    select {
                        id: "age",
                        name: "age",
                        required: true,
                        for age in 18..=80 {
                            option { value: "{age}", "{age}" }
                        }
                    }
                }
                {
                    match error() {
                        Some(reason) => rsx! { p { class: "field-error", "{reason}" } },
                        None => rsx! { "" },
                    }
                }
                div { class: "form-group",
                    button {
                        class: "mybutton",
                        r#type: "submit",
                        "Create account"
                    }
                }
            }
            div {
                class: "auth-links",
                Link { to: Route::Login {}, "Already have an account? Sign in" }
            }
        }
    }
}
