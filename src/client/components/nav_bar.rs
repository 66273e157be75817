#![allow(non_snake_case)]

use crate::client;
use client::Route;

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NavTab {
    Browse,
    Matches,
    Chat,
}

pub fn top_bar() -> Element {
    rsx! {
        div {
            background_color: "#7c2869",
            width: "100%",
            margin: "0",
            padding: "20px 0",
            height: "100px",
            display: "flex",
            align_items: "center",
            justify_content: "center",

            div {
                display: "flex",
                align_items: "center",
                justify_content: "center",

                Link {
                    to: Route::Home {},
                    img {
                        src: "logo.svg",
                        alt: "HeartLink Logo",
                        width: "80px",
                        height: "80px",
                        margin_right: "20px",
                    }
                }

                div {
                    font_size: "2.5em",
                    color: "white",
                    margin: "0",
                    "HeartLink"
                }
            }
        }
    }
}

#[component]
pub fn Navbar(active: NavTab) -> Element {
    rsx! {
        nav {
            position: "fixed",
            z_index: "1000",

            ul {
                Link {
                    to: Route::Home {},
                    img {
                        src: "logo.svg",
                        alt: "HeartLink Logo",
                        class: "logo",
                    }
                }
                li {
                    Link {
                        to: Route::Browse {},
                        "Browse",
                        class: if active == NavTab::Browse { "active" } else { "" }
                    }
                }
                li {
                    Link {
                        to: Route::Matches {},
                        "Matches",
                        class: if active == NavTab::Matches { "active" } else { "" }
                    }
                }
            }
        }
    }
}
