//! The project assistant's chat window.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::chat::{QUICK_PROMPTS, REPLY_DELAY};
use space_core::{ChatMessage, Transcript};

use crate::browser::now_ms;

/// Chat box; `input` is shared so project cards can pre-fill a question.
#[component]
pub fn ChatWidget(input: Signal<String>, on_close: EventHandler<()>) -> Element {
    let mut input = input;
    let mut transcript = use_signal(|| Transcript::new(now_ms()));
    // Replies still inside their typing delay
    let mut pending = use_signal(|| 0usize);
    let mut bottom: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Keep the newest bubble in view
    use_effect(move || {
        let _ = transcript.read().len();
        let _ = pending();
        if let Some(anchor) = bottom.peek().clone() {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let question = input();
        if transcript.write().ask(&question, now_ms()).is_none() {
            return;
        }
        input.set(String::new());
        *pending.write() += 1;
        spawn(async move {
            sleep(REPLY_DELAY).await;
            transcript.write().answer(&question, now_ms());
            *pending.write() -= 1;
        });
    };

    let messages = transcript.read().messages().to_vec();

    rsx! {
        div { class: "chat-box", role: "dialog", "aria-label": "AI project guide",
            div { class: "chat-header",
                div { class: "chat-info",
                    span { class: "chat-avatar", "🤖" }
                    div {
                        h4 { "AI Project Guide" }
                        p { span { class: "online" } "Online" }
                    }
                }
                button {
                    class: "close-btn",
                    "aria-label": "Close chat",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div { class: "chat-body",
                for (i, message) in messages.into_iter().enumerate() {
                    Bubble { key: "{i}", message }
                }
                if pending() > 0 {
                    div { class: "msg bot",
                        span { class: "msg-avatar", "🤖" }
                        div { class: "typing", span {} span {} span {} }
                    }
                }
                div { onmounted: move |e| bottom.set(Some(e.data())) }
            }

            form { class: "chat-form", onsubmit: send,
                input {
                    r#type: "text",
                    class: "chat-input",
                    placeholder: "Ask about projects...",
                    value: "{input}",
                    oninput: move |e| input.set(e.value()),
                }
                button { r#type: "submit", class: "send-btn", "aria-label": "Send", "→" }
            }

            div { class: "quick-btns",
                for (label, question) in QUICK_PROMPTS {
                    button {
                        key: "{label}",
                        r#type: "button",
                        onclick: move |_| input.set(question.to_string()),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn Bubble(message: ChatMessage) -> Element {
    let avatar = message.sender.avatar();
    let time = message.time_label();

    rsx! {
        div { class: "msg {message.sender.class()}",
            if message.is_from_bot() {
                span { class: "msg-avatar", "{avatar}" }
            }
            div { class: "msg-content",
                p { "{message.text}" }
                span { class: "msg-time", "{time}" }
            }
            if !message.is_from_bot() {
                span { class: "msg-avatar", "{avatar}" }
            }
        }
    }
}
