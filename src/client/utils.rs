#![allow(non_snake_case)]

use crate::common;
use common::ErrorMap;
use common::Field;

use crate::client::Route;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[component]
pub fn Invalid() -> Element {
    rsx! {
        div {
            class: "navmargin",
            p {
                "We couldn't find that page or conversation."
            }
            div {
                Link {
                    to: Route::Home {},
                    "Back to main page"
                }
            }
        }
    }
}

// Call this function to log a message
pub fn log_to_console(message: impl std::fmt::Debug) {
    let message = format!("{:?}", message);
    console::log_1(&JsValue::from_str(&message));
}

/// Wall-clock "HH:MM" stamp for outgoing chat messages.
pub fn now_stamp() -> String {
    let date = js_sys::Date::new_0();
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

/// Inline error line under a wizard input, or nothing when the field is
/// currently fine.
pub fn field_error(errors: &ErrorMap, field: Field) -> Element {
    match errors.get(&field) {
        Some(msg) => rsx! { p { class: "field-error", "{msg}" } },
        None => rsx! { "" },
    }
}

pub fn footer() -> Element {
    rsx! {
        div {
            class: "footer",
            div {
                display: "flex",
                flex_direction: "row",
                align_items: "center",
                font_size: "0.8em",
                color: "#666",
                div {
                    "HeartLink — find your person. "
                    Link {
                        to: Route::Login {},
                        "Sign in"
                    }
                    " or "
                    Link {
                        to: Route::Register {},
                        "create an account"
                    }
                    "."
                }
            }
        }
    }
}
