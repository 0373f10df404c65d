use dioxus::prelude::*;

use crate::catalog::GATEWAY_SERVER;
use crate::components::flow::StageTarget;
use crate::components::session::{ExplorerSession, Selection, SessionEvent};

#[derive(PartialEq, Props, Clone)]
pub struct ArchitectureDiagramProps {
    pub session: Signal<ExplorerSession>,
    pub on_event: EventHandler<SessionEvent>,
}

/// Live diagram: platforms → gateway → data source servers → legacy layer → sources
#[component]
pub fn ArchitectureDiagram(props: ArchitectureDiagramProps) -> Element {
    let session = props.session.read();
    let catalog = session.catalog();
    let current = session.platform();
    let flow = session.active_flow();
    let flowing = flow.is_some_and(|f| f.step > 0);

    let gateway_lit = flow.is_some_and(|f| f.is_at(&StageTarget::Gateway));
    let legacy_lit = flow.is_some_and(|f| f.is_at(&StageTarget::Legacy));
    let source_lit = flow.is_some_and(|f| f.is_at(&StageTarget::Source));

    let on_event = props.on_event;

    rsx! {
        div { class: "architecture",
            div { class: "section-caption", "LIVE ARCHITECTURE — CLICK ANY COMPONENT" }

            div { class: "platform-row",
                for platform in catalog.platforms.iter() {
                    {
                        let id = platform.id.clone();
                        let is_current = platform.id == current.id;
                        let class = platform_node_class(is_current, flowing);
                        let style = if is_current {
                            format!("border-color: {c}; background: {c}20;", c = platform.color)
                        } else {
                            String::new()
                        };
                        rsx! {
                            div {
                                key: "{platform.id}",
                                class: "{class}",
                                style: "{style}",
                                onclick: move |_| {
                                    on_event.call(SessionEvent::SelectPlatform(id.clone()));
                                    on_event.call(SessionEvent::SelectComponent(Selection::Platform(id.clone())));
                                },
                                div { class: "platform-name", "{platform.name}" }
                                div { class: "platform-channel", "{platform.channel}" }
                            }
                        }
                    }
                }
            }

            div { class: if flowing { "connector lit" } else { "connector" } }

            div {
                class: if gateway_lit { "gateway-node lit" } else { "gateway-node" },
                onclick: move |_| on_event.call(SessionEvent::SelectComponent(Selection::Server(GATEWAY_SERVER.to_string()))),
                div { class: "gateway-title", "⚡ MCP Gateway" }
                div { class: "gateway-subtitle", "{catalog.edition.label()} • Tool Filtering • Orchestration" }
                if let Some(active) = flow {
                    div { class: "gateway-active-tool", "{active.tool}()" }
                }
            }

            div { class: "connector" }

            div { class: "server-row",
                for server in catalog.data_sources() {
                    {
                        let id = server.id.clone();
                        let used = flow.is_some_and(|f| f.uses_server(&server.id));
                        let lit = flow.is_some_and(|f| f.is_at(&StageTarget::Server(server.id.clone())));
                        let class = server_node_class(lit, used);
                        let style = if lit || used {
                            format!("border-color: {};", server.color)
                        } else {
                            String::new()
                        };
                        rsx! {
                            div {
                                key: "{server.id}",
                                class: "{class}",
                                style: "{style}",
                                onclick: move |_| on_event.call(SessionEvent::SelectComponent(Selection::Server(id.clone()))),
                                if let Some(icon) = &server.icon {
                                    div { class: "server-icon", "{icon}" }
                                }
                                div { class: "server-id", "{server.id}" }
                                div { class: "server-tools", "{server.capabilities.len()} tools" }
                            }
                        }
                    }
                }
            }

            div { class: "connector" }

            div { class: if legacy_lit { "legacy-node lit" } else { "legacy-node" },
                div { class: "node-title", "MuleSoft API Gateway" }
                div { class: "node-subtitle", "Existing Security • Tokens • Rate Limiting" }
            }

            div { class: "connector" }

            div { class: if source_lit { "source-node lit" } else { "source-node" },
                div { class: "node-title", "Source Systems (Golden)" }
                div { class: "node-subtitle", "3 Billers • VCG • Decisioning Engine • Workflow Engine" }
            }

            if let Some(active) = flow {
                if let Some(tool) = catalog.tool(&active.tool) {
                    div { class: "flow-status",
                        span { class: "flow-label", "Tool: " }
                        span { class: "flow-tool", "{tool.id}" }
                        span { class: "flow-detail", "Servers: {active.servers.join(\" → \")}" }
                        span { class: "flow-detail", "Latency: {tool.latency}" }
                    }
                }
            }
        }
    }
}

/// CSS class of a platform node in the top row
pub fn platform_node_class(is_current: bool, flowing: bool) -> &'static str {
    match (is_current, flowing) {
        (true, true) => "platform-node active flowing",
        (true, false) => "platform-node active",
        (false, _) => "platform-node",
    }
}

/// CSS class of a data source server node; lit wins over used
pub fn server_node_class(lit: bool, used: bool) -> &'static str {
    if lit {
        "server-node lit"
    } else if used {
        "server-node used"
    } else {
        "server-node"
    }
}
