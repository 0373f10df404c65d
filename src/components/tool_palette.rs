use dioxus::prelude::*;

use crate::catalog::OperationKind;
use crate::components::session::{ExplorerSession, Selection, SessionEvent};

/// Grid of every catalog tool, dimmed where the current platform has no access
#[component]
pub fn ToolPalette(session: Signal<ExplorerSession>, on_event: EventHandler<SessionEvent>) -> Element {
    let session = session.read();
    let catalog = session.catalog();
    let platform = session.platform();
    let available = catalog.tools_for(platform).count();
    let active_tool = session.active_flow().map(|f| f.tool.clone());

    rsx! {
        div { class: "tool-palette",
            div { class: "section-caption",
                "{platform.name.to_uppercase()} TOOLS ({available} of {catalog.tools.len()})"
            }
            div { class: "tool-grid",
                for tool in catalog.tools.iter() {
                    {
                        let id = tool.id.clone();
                        let has_access = platform.allows(&tool.id);
                        let is_active = active_tool.as_deref() == Some(tool.id.as_str());
                        let kind_class = match tool.kind {
                            OperationKind::Read => "kind-badge read",
                            OperationKind::Write => "kind-badge write",
                            OperationKind::Action => "kind-badge action",
                        };
                        let class = match (has_access, is_active) {
                            (_, true) => "tool-card active",
                            (true, false) => "tool-card",
                            (false, false) => "tool-card locked",
                        };
                        rsx! {
                            div {
                                key: "{tool.id}",
                                class: "{class}",
                                onclick: move |_| {
                                    if has_access {
                                        on_event.call(SessionEvent::SelectComponent(Selection::Tool(id.clone())));
                                    }
                                },
                                div { class: "tool-card-name", "{tool.id}" }
                                div { class: "tool-card-meta",
                                    span { class: "{kind_class}", "{tool.kind.as_str()}" }
                                    span { class: "tool-card-server", "{tool.server_summary(\"+\")}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
