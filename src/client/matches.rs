#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::NavTab;
use client::Navbar;
use client::Route;
use common::mock::MATCHES;
use common::MatchEntry;

use dioxus::prelude::*;

#[component]
pub fn Matches() -> Element {
    let count = MATCHES.len();

    rsx! {
        Navbar { active: NavTab::Matches }
        div {
            class: "navmargin",
            h1 { "Your Matches" }
            p { class: "muted", "{count} people liked you back" }
            div {
                class: "match-grid",
                for entry in MATCHES.iter() {
                    { match_card(entry) }
                }
            }
        }
    }
}

fn match_card(entry: &MatchEntry) -> Element {
    rsx! {
        div {
            class: "match-card",
            if entry.new_match {
                span { class: "badge-new", "NEW!" }
            }
            img { src: "{entry.photo}", alt: "{entry.name}" }
            div {
                class: "match-body",
                h3 { "{entry.name}, {entry.age}" }
                p { class: "muted", "{entry.tagline}" }
                p { class: "muted small", "Matched {entry.matched_at}" }
                Link {
                    to: Route::Chat { id: entry.id.clone() },
                    class: "mybutton",
                    "Say hello"
                }
            }
        }
    }
}
