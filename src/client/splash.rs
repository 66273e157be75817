use super::*;

use crate::client;
use client::Route;

/// The logged-out landing page: hero copy, a short feature list and the two
/// calls to action.
#[component]
pub fn Splash() -> Element {
    let navigator = use_navigator();

    let buttons = rsx! {div {
        class: "bottom-section",
            div {
                class: "main-box",
                onclick: move |_| {navigator.push(Route::Register{});},
                h2 { "Get started!" }
            }
            div {
                class: "main-box",
                onclick: move |_| {navigator.push(Route::Login{});},
                h2 { "Sign in" }
            }
    }};

    let text_part = rsx! {
            div {
                flex: "1",
                width: "100%",
                display: "flex",
                align_items: "center",
                padding: "10px",
                flex_direction: "column",
                justify_content: "right",

                h2 { "Find Your Person" }
                p { "HeartLink pairs you with people near you who share what you love, not just how you look." }
                p { "Complete your profile once, browse at your own pace, and chat when it clicks. No games, no noise." }
            }
    };

    let features = rsx! {
        div {
            display: "flex",
            justify_content: "center",
            flex_direction: "row",
            flex_wrap: "wrap",

            { feature_box("Real profiles", "A guided profile with photos, interests and a proper bio, so everyone shows up as themselves.") }
            { feature_box("Browse your way", "One card at a time. Like or pass, nothing happens without you.") }
            { feature_box("Chat when it clicks", "Matched? Say hello. Conversations live right here.") }
        }
    };

    rsx! {
    div {
        class: "landing-container",
        { top_bar() }
        div {
            flex: "1",
            width: "1000px",
            display: "flex",
            align_items: "top",
            padding: "20px",
            flex_direction: "row",

            {text_part},
            { buttons },
            }
        { features }
        }
    }
}

fn feature_box(title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        div {
            class: "feature-box",
            h3 { "{title}" }
            p { "{blurb}" }
        }
    }
}
