#![allow(non_snake_case)]

use crate::common;
use common::ProfileCard;

use dioxus::prelude::*;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

mod browse;
mod chat;
mod complete_profile;
mod components;
mod forgot;
mod login;
mod matches;
mod register;
mod splash;
pub mod utils;

use browse::*;
use chat::*;
use complete_profile::*;
use components::nav_bar::*;
use forgot::*;
use login::*;
use matches::*;
use register::*;
use splash::*;
use utils::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    launch(App);
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/complete-profile")]
    CompleteProfile {},
    #[route("/browse")]
    Browse {},
    #[route("/matches")]
    Matches {},
    #[route("/chat/:id")]
    Chat { id: String },
    #[route("/invalid")]
    Invalid {},
}

impl Route {
    fn on_chat(&self) -> bool {
        matches!(self, Route::Chat { .. })
    }
}

#[component]
fn Wrapper() -> Element {
    let on_chat_window = use_route::<Route>().on_chat();

    rsx! {
        style { { include_str!("styles.css") } }
        Outlet::<Route> {}
        div {
            display: "flex",
            justify_content: "center",
            if !on_chat_window {
                { footer() }
            }
        }
    }
}

fn App() -> Element {
    use_context_provider(State::load);

    rsx!(Router::<Route> {})
}

#[component]
fn Home() -> Element {
    let state = use_context::<State>();

    if state.profile().is_some() {
        return Browse();
    } else {
        return Splash();
    }
}

/// Session-wide state: a per-tab visitor id and the profile card once the
/// wizard completes. Nothing here survives the tab.
#[derive(Clone, Default)]
pub struct State {
    inner: Arc<Mutex<InnerState>>,
}

#[derive(Default)]
struct InnerState {
    profile: Option<ProfileCard>,
    visitor_id: Uuid,
}

impl State {
    pub fn load() -> Self {
        let s = Self::default();
        s.inner.lock().unwrap().visitor_id = Uuid::new_v4();
        log_to_console(("session started", s.id()));
        s
    }

    pub fn id(&self) -> Uuid {
        self.inner.lock().unwrap().visitor_id
    }

    pub fn profile(&self) -> Option<ProfileCard> {
        self.inner.lock().unwrap().profile.clone()
    }

    pub fn set_profile(&self, card: ProfileCard) {
        self.inner.lock().unwrap().profile = Some(card);
    }
}
