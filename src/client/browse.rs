#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::log_to_console;
use client::NavTab;
use client::Navbar;
use common::mock::BROWSE_PROFILES;
use common::BrowseProfile;
use common::Deck;
use common::Swipe;

use dioxus::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};

/// Page-local deck state. Recreated on every visit, so browsing always
/// starts from the first card again.
#[derive(Clone)]
struct DeckState {
    inner: Arc<Mutex<DeckInner>>,
}

struct DeckInner {
    deck: Deck,
    cursor: Signal<usize>,
}

impl DeckState {
    fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DeckInner {
                deck: Deck::new(BROWSE_PROFILES.len()),
                cursor: Signal::new(0),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DeckInner> {
        self.inner.lock().unwrap()
    }

    fn cursor_signal(&self) -> Signal<usize> {
        self.lock().cursor.clone()
    }

    fn swipe(&self, swipe: Swipe) {
        let mut lock = self.lock();
        if let Some(profile) = BROWSE_PROFILES.get(lock.deck.cursor()) {
            log_to_console((swipe.verb(), &profile.name));
        }
        lock.deck.swipe(swipe);
        let cursor = lock.deck.cursor();
        *lock.cursor.write() = cursor;
    }

    fn restart(&self) {
        let mut lock = self.lock();
        lock.deck.restart();
        *lock.cursor.write() = 0;
    }
}

#[component]
pub fn Browse() -> Element {
    let deck = use_hook(DeckState::new);
    let cursor = deck.cursor_signal();
    let cursor = cursor();

    rsx! {
        Navbar { active: NavTab::Browse }
        div {
            class: "navmargin",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            {
                match BROWSE_PROFILES.get(cursor) {
                    Some(profile) => profile_card(deck.clone(), profile),
                    None => empty_deck(deck.clone()),
                }
            }

            div {
                class: "deck-dots",
                for index in 0..BROWSE_PROFILES.len() {
                    div {
                        class: if index < cursor {
                            "dot done"
                        } else if index == cursor {
                            "dot current"
                        } else {
                            "dot"
                        },
                    }
                }
            }
        }
    }
}

fn profile_card(deck: DeckState, profile: &BrowseProfile) -> Element {
    let pass_deck = deck.clone();
    let like_deck = deck;

    rsx! {
        div {
            class: "deck-card",
            div {
                class: "deck-photo",
                img { src: "{profile.photo}", alt: "{profile.name}" }
                div {
                    class: "deck-name",
                    h2 { "{profile.name}, {profile.age}" }
                }
            }
            div {
                class: "deck-body",
                p { "{profile.bio}" }
                p { class: "muted", "{profile.location}" }
                div {
                    class: "chip-grid",
                    for interest in &profile.interests {
                        span { class: "chip selected", "{interest}" }
                    }
                }
            }
            div {
                class: "deck-actions",
                button {
                    prevent_default: "onclick",
                    class: "mybutton danger",
                    onclick: move |_| pass_deck.swipe(Swipe::Pass),
                    "Pass"
                }
                button {
                    prevent_default: "onclick",
                    class: "mybutton confirm",
                    onclick: move |_| like_deck.swipe(Swipe::Like),
                    "Like"
                }
            }
        }
    }
}

fn empty_deck(deck: DeckState) -> Element {
    rsx! {
        div {
            class: "deck-card empty",
            h2 { "That's everyone for now!" }
            p { "You've seen all available profiles. Check back later for new connections!" }
            button {
                prevent_default: "onclick",
                class: "mybutton",
                onclick: move |_| deck.restart(),
                "Start Over"
            }
        }
    }
}
