use dioxus::prelude::*;
use regex::Regex;
use std::sync::LazyLock;

static INLINE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(?P<strong>.+?)\*\*|_(?P<em>[^_]+)_").expect("inline markup pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// Which tool produced an assistant turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnMeta {
    pub tool: String,
    pub servers: String,
    pub latency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub meta: Option<TurnMeta>,
}

impl Message {
    pub fn new(role: MessageRole, content: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: chrono::Utc::now(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: TurnMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Hour and minute the turn was recorded, e.g. `14:05`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// A run of assistant text with its inline emphasis
#[derive(Debug, Clone, PartialEq)]
pub enum InlineSpan {
    Plain(String),
    Strong(String),
    Emphasis(String),
}

/// Split one line into plain, `**strong**` and `_emphasis_` runs
pub fn inline_spans(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in INLINE_MARKUP.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            spans.push(InlineSpan::Plain(line[cursor..whole.start()].to_string()));
        }
        if let Some(strong) = caps.name("strong") {
            spans.push(InlineSpan::Strong(strong.as_str().to_string()));
        } else if let Some(em) = caps.name("em") {
            spans.push(InlineSpan::Emphasis(em.as_str().to_string()));
        }
        cursor = whole.end();
    }

    if cursor < line.len() {
        spans.push(InlineSpan::Plain(line[cursor..].to_string()));
    }
    spans
}

#[component]
pub fn MessageView(message: Message, accent: String) -> Element {
    let role_class = match message.role {
        MessageRole::User => "user-message",
        MessageRole::Assistant => "assistant-message",
    };
    let time = message.time_label();
    let sender = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "Assistant",
    };
    let bubble_style = match message.role {
        MessageRole::User => format!("background: {accent}20;"),
        MessageRole::Assistant => String::new(),
    };

    rsx! {
        div {
            class: "message {role_class}",
            div {
                class: "message-header",
                div {
                    class: "message-sender",
                    "{sender}"
                }
                div {
                    class: "message-time",
                    "{time}"
                }
            }
            div {
                class: "message-text",
                style: "{bubble_style}",
                for (idx, line) in message.content.lines().enumerate() {
                    if line.trim().is_empty() {
                        div { key: "{idx}", class: "message-spacer" }
                    } else if message.role == MessageRole::User {
                        div { key: "{idx}", class: "message-line", "{line}" }
                    } else {
                        div {
                            key: "{idx}",
                            class: "message-line",
                            for span in inline_spans(line) {
                                match span {
                                    InlineSpan::Plain(text) => rsx! { span { "{text}" } },
                                    InlineSpan::Strong(text) => rsx! { strong { "{text}" } },
                                    InlineSpan::Emphasis(text) => rsx! { em { "{text}" } },
                                }
                            }
                        }
                    }
                }
            }
            if let Some(meta) = &message.meta {
                div {
                    class: "message-meta",
                    span { style: "color: {accent};", "{meta.tool}()" }
                    span { "→ {meta.servers}" }
                    span { "{meta.latency}" }
                }
            }
        }
    }
}
