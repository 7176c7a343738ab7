//! Chat feed, example chips and the question input.

use crate::state::AppState;
use dioxus::prelude::*;
use velora_chat::suggestions::{dataset_example_queries, input_placeholder};
use velora_chat::Role;

/// A chat message prepared for rendering.
#[derive(Clone, PartialEq)]
struct FeedItem {
    class: String,
    avatar: &'static str,
    text: String,
}

/// Left-hand chat panel. Input is disabled while a query is in flight.
#[component]
pub fn ChatPanel() -> Element {
    let mut state = use_context::<AppState>();
    let (items, loading) = {
        let dispatcher = state.dispatcher.read();
        let conversation = dispatcher.conversation();
        let items: Vec<FeedItem> = conversation
            .messages()
            .iter()
            .map(|msg| {
                let (role, avatar) = match msg.role {
                    Role::User => ("user", "👤"),
                    Role::Ai => ("ai", "🌊"),
                };
                FeedItem {
                    class: if msg.is_error {
                        format!("message {} error", role)
                    } else {
                        format!("message {}", role)
                    },
                    avatar,
                    text: msg.text.clone(),
                }
            })
            .collect();
        (items, conversation.is_loading())
    };
    let input = (state.input)();
    let placeholder = input_placeholder();
    let examples = dataset_example_queries();
    let send_disabled = loading || input.trim().is_empty();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.send_query((state.input)());
    };

    let on_input = move |evt: Event<FormData>| {
        state.input.set(evt.value());
    };

    rsx! {
        aside {
            class: "chat-panel",
            div {
                class: "glass chat-card",
                div { class: "chat-label", "Ask Velora" }

                div {
                    class: "chat-feed",
                    if items.is_empty() {
                        div {
                            class: "chat-welcome",
                            div { class: "chat-welcome-icon", "🤖" }
                            div { class: "chat-welcome-title", "Ask me about ocean data" }
                            div {
                                class: "example-list",
                                for question in examples.iter() {
                                    button {
                                        key: "{question}",
                                        class: "example-chip",
                                        onclick: {
                                            let question = question.clone();
                                            move |_| state.send_query(question.clone())
                                        },
                                        "{question}"
                                    }
                                }
                            }
                        }
                    }

                    for (i, item) in items.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "{item.class}",
                            div { class: "message-avatar", "{item.avatar}" }
                            div { class: "message-bubble", "{item.text}" }
                        }
                    }

                    if loading {
                        div {
                            class: "message ai",
                            div { class: "message-avatar", "🌊" }
                            div {
                                class: "message-bubble loading-bubble",
                                span { class: "dot-1", "●" }
                                span { class: "dot-2", "●" }
                                span { class: "dot-3", "●" }
                            }
                        }
                    }
                }

                form {
                    class: "chat-input-row",
                    onsubmit: on_submit,
                    input {
                        r#type: "text",
                        class: "chat-input",
                        placeholder: "{placeholder}",
                        value: "{input}",
                        disabled: loading,
                        oninput: on_input,
                    }
                    button {
                        class: "send-btn",
                        r#type: "submit",
                        disabled: send_disabled,
                        if loading {
                            span { class: "mini-spinner" }
                        } else {
                            "→"
                        }
                    }
                }
            }
        }
    }
}
