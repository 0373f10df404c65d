use dioxus::prelude::*;

use crate::components::message::MessageView;
use crate::components::session::ExplorerSession;

/// Chat simulator for the selected platform
#[component]
pub fn ChatPanel(session: Signal<ExplorerSession>, on_submit: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    let state = session.read();
    let platform = state.platform();
    let accent = platform.color.clone();
    let is_processing = state.is_processing();
    let quick_actions = state.catalog().quick_actions.clone();

    let status_line = state
        .active_flow()
        .and_then(|flow| flow.current_stage())
        .map(|stage| stage.label.clone())
        .unwrap_or_else(|| "Processing...".to_string());

    let mut send_message = move |_| {
        let text = input.read().trim().to_string();
        if text.is_empty() || session.peek().is_processing() {
            return;
        }
        input.set(String::new());
        on_submit.call(text);
    };

    // Handle Enter key
    let mut send_message_ref = send_message.clone();
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key().to_string() == "Enter" && !evt.modifiers().shift() {
            evt.prevent_default();
            send_message_ref(());
        }
    };

    rsx! {
        div { class: "chat-container",
            div { class: "chat-header",
                div { class: "chat-dot", style: "background: {accent};" }
                span { class: "chat-title", "{platform.name} Simulator" }
                span { class: "chat-channel", "{platform.channel}" }
            }

            div { class: "chat-messages",
                if state.conversation().is_empty() {
                    div { class: "empty-chat",
                        div { class: "empty-chat-subtitle",
                            "Type a customer query to see the architecture in action"
                        }
                        for action in quick_actions {
                            button {
                                key: "{action}",
                                class: "quick-action",
                                onclick: {
                                    let action = action.clone();
                                    move |_| input.set(action.clone())
                                },
                                "\"{action}\""
                            }
                        }
                    }
                } else {
                    for message in state.conversation().iter() {
                        MessageView {
                            key: "{message.id}",
                            message: message.clone(),
                            accent: accent.clone(),
                        }
                    }
                }
                if is_processing {
                    div { class: "processing-indicator",
                        div { class: "pulse-dot", style: "background: {accent};" }
                        "{status_line}"
                    }
                }
            }

            div { class: "chat-input-container",
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Type a customer query...",
                    value: "{input}",
                    disabled: is_processing,
                    oninput: move |evt| input.set(evt.value().clone()),
                    onkeydown: handle_keydown,
                }
                button {
                    class: "chat-send-button",
                    style: "background: {accent};",
                    disabled: is_processing || input.read().trim().is_empty(),
                    onclick: move |_| send_message(()),
                    "Send"
                }
            }
        }
    }
}
