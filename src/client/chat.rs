#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::log_to_console;
use client::now_stamp;
use client::utils::Invalid;
use client::NavTab;
use client::Navbar;
use client::Route;
use common::mock;
use common::ChatMessage;
use common::Conversation;
use common::MatchEntry;
use common::CONFIG;

use dioxus::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};
use wasm_bindgen_futures::spawn_local;

/// One chat screen's state: the transcript plus the input box and typing
/// indicator. Page-local, so leaving the screen discards it.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<Mutex<ChatInner>>,
}

struct ChatInner {
    convo: Conversation,
    messages: Signal<Vec<ChatMessage>>,
    input: Signal<String>,
    typing: Signal<bool>,
}

impl ChatSession {
    fn new() -> Self {
        let convo = Conversation::with_cap(mock::opener_messages(), CONFIG.reply_cap);
        let messages = Signal::new(convo.messages().to_vec());

        Self {
            inner: Arc::new(Mutex::new(ChatInner {
                convo,
                messages,
                input: Signal::new(String::new()),
                typing: Signal::new(false),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChatInner> {
        self.inner.lock().unwrap()
    }

    fn signals(&self) -> (Signal<Vec<ChatMessage>>, Signal<String>, Signal<bool>) {
        let lock = self.lock();
        (
            lock.messages.clone(),
            lock.input.clone(),
            lock.typing.clone(),
        )
    }

    /// Appends the outgoing message and reports whether the canned reply
    /// should follow.
    fn send(&self, content: String) -> bool {
        let mut lock = self.lock();
        let reply_due = lock.convo.send(content, now_stamp());
        let transcript = lock.convo.messages().to_vec();
        *lock.messages.write() = transcript;
        lock.input.set(String::new());
        reply_due
    }

    fn set_typing(&self, typing: bool) {
        let mut lock = self.lock();
        *lock.typing.write() = typing;
    }

    fn deliver_reply(&self) {
        let mut lock = self.lock();
        lock.convo.push_reply(now_stamp());
        let transcript = lock.convo.messages().to_vec();
        *lock.messages.write() = transcript;
    }
}

/// Waits out the configured delays, then swaps the typing indicator for the
/// canned reply.
fn schedule_reply(session: ChatSession) {
    spawn_local(async move {
        session.set_typing(true);
        gloo_timers::future::sleep(std::time::Duration::from_millis(CONFIG.typing_millis)).await;
        session.set_typing(false);
        gloo_timers::future::sleep(std::time::Duration::from_millis(CONFIG.reply_millis)).await;
        session.deliver_reply();
    });
}

#[component]
pub fn Chat(id: String) -> Element {
    let Some(partner) = mock::match_by_id(&id) else {
        return Invalid();
    };

    let session = use_hook(ChatSession::new);
    let (messages, mut input, typing) = session.signals();
    let submit_session = session.clone();

    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            height: "95vh",

            Navbar { active: NavTab::Chat }
            div {
                class: "navmargin chat-window",

                { chat_header(partner) }

                div {
                    class: "message-scroll",
                    MessageList { messages: messages.read().to_vec() }
                    if typing() {
                        div { class: "message match typing",
                            span { "{partner.name} is typing…" }
                        }
                    }
                }

                form {
                    onsubmit: move |event| {
                        let msg = event.data().values().get("msg").unwrap().as_value();
                        if msg.trim().is_empty() {
                            return;
                        }
                        let reply_due = submit_session.send(msg);
                        log_to_console(("message submitted, reply due:", reply_due));
                        if reply_due {
                            schedule_reply(submit_session.clone());
                        }
                    },
                    div { class: "form-group",
                        div { class: "input-group",
                            input {
                                r#type: "text",
                                name: "msg",
                                value: input(),
                                autocomplete: "off",
                                placeholder: "Type a message...",
                                oninput: move |event| input.set(event.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "confirm",
                                "Send"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn chat_header(partner: &MatchEntry) -> Element {
    rsx! {
        div {
            class: "chat-header",
            Link {
                to: Route::Matches {},
                "← Matches"
            }
            img { src: "{partner.photo}", alt: "{partner.name}" }
            div {
                h3 { "{partner.name}" }
                p { class: "muted small", "{partner.tagline}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct MessageProps {
    content: String,
    stamp: String,
    class: &'static str,
}

fn Message(msg: MessageProps) -> Element {
    rsx!(
        div {
            class: "{msg.class}",
            span { "{msg.content}" }
            span { class: "stamp", "{msg.stamp}" }
        }
    )
}

#[derive(Props, PartialEq, Clone)]
struct MessageListProps {
    messages: Vec<ChatMessage>,
}

fn MessageList(msgs: MessageListProps) -> Element {
    rsx!(
        div {
            class: "message-list",
            for msg in msgs.messages {
                Message {
                    class: msg.origin.class(),
                    content: msg.content,
                    stamp: msg.stamp,
                }
            }
        }
    )
}
