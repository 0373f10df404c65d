use dioxus::prelude::*;

use crate::catalog::{Catalog, OperationKind, Platform, Server, Tool};
use crate::components::session::{ExplorerSession, Selection, SessionEvent};

/// Side panel describing whatever component was clicked
#[component]
pub fn ComponentDetail(session: Signal<ExplorerSession>, on_event: EventHandler<SessionEvent>) -> Element {
    let session = session.read();
    let catalog = session.catalog();
    let accent = session.platform().color.clone();

    let body = match session.selection() {
        None => return rsx! {},
        Some(Selection::Tool(id)) => catalog.tool(id).map(|tool| tool_detail(catalog, tool, &accent)),
        Some(Selection::Server(id)) => catalog.server(id).map(|server| server_detail(catalog, server)),
        Some(Selection::Platform(id)) => catalog.platform(id).map(|platform| platform_detail(catalog, platform)),
    };

    rsx! {
        div { class: "component-detail",
            button {
                class: "detail-close",
                onclick: move |_| on_event.call(SessionEvent::CloseDetail),
                "×"
            }
            match body {
                Some(body) => body,
                None => rsx! { div { class: "detail-missing", "Component not found in catalog" } },
            }
        }
    }
}

fn tool_detail(catalog: &Catalog, tool: &Tool, accent: &str) -> Element {
    let kind_class = match tool.kind {
        OperationKind::Read => "kind-badge read",
        OperationKind::Write => "kind-badge write",
        OperationKind::Action => "kind-badge action",
    };

    rsx! {
        div { class: "detail-header",
            h2 { class: "detail-title", "{tool.id}()" }
            span { class: "{kind_class}", "{tool.kind.as_str()}" }
        }
        div { class: "detail-subtitle", "{catalog.edition.label()} • {tool.latency}" }
        p { class: "detail-description", "{tool.description}" }

        h3 { class: "detail-section", "DATA SOURCE SERVERS CALLED" }
        div { class: "detail-chips",
            for server_id in tool.servers.iter() {
                {
                    let full_name = catalog
                        .server(server_id)
                        .map(|s| s.full_name.clone())
                        .unwrap_or_else(|| "Gateway".to_string());
                    rsx! {
                        div { key: "{server_id}", class: "detail-chip",
                            span { class: "chip-id", "{server_id}" }
                            span { class: "chip-name", "{full_name}" }
                        }
                    }
                }
            }
        }

        if !tool.server_calls.is_empty() {
            h3 { class: "detail-section", "EXECUTION FLOW" }
            for (i, call) in tool.server_calls.iter().enumerate() {
                div { key: "{i}", class: "detail-call",
                    span { class: "call-index", "{i + 1}." }
                    span { class: "call-name", "{call}" }
                }
            }
        }

        if let Some(returns) = &tool.returns {
            h3 { class: "detail-section", "RETURNS" }
            p { class: "detail-description", "{returns}" }
        }

        h3 { class: "detail-section", "AVAILABLE ON" }
        div { class: "detail-chips",
            for (platform, has_access) in catalog.platforms_with_tool(&tool.id) {
                span {
                    key: "{platform.id}",
                    class: if has_access { "access-chip granted" } else { "access-chip denied" },
                    style: if has_access { format!("color: {accent};") } else { String::new() },
                    if has_access { "{platform.name} ✓" } else { "{platform.name} ✗" }
                }
            }
        }
    }
}

fn server_detail(catalog: &Catalog, server: &Server) -> Element {
    rsx! {
        div { class: "detail-header",
            h2 { class: "detail-title", style: "color: {server.color};", "{server.name}" }
        }
        div { class: "detail-subtitle", "{server.full_name}" }
        p { class: "detail-description", "{server.description}" }

        h3 { class: "detail-section", "TOOLS" }
        for capability in server.capabilities.iter() {
            div { key: "{capability.name}", class: "detail-capability",
                div { class: "capability-signature", "{capability.name}({capability.params})" }
                div { class: "capability-returns", "Returns: {capability.returns}" }
            }
        }

        if !server.is_gateway() {
            h3 { class: "detail-section", "USED BY" }
            div { class: "detail-chips",
                for tool in catalog.tools_using(&server.id) {
                    span { key: "{tool.id}", class: "detail-chip", "{tool.id}" }
                }
            }
        }

        h3 { class: "detail-section", "REACHABLE FROM" }
        div { class: "detail-chips",
            for (platform, reachable) in catalog.server_access(&server.id) {
                span {
                    key: "{platform.id}",
                    class: if reachable { "access-chip granted" } else { "access-chip denied" },
                    if reachable { "{platform.name} ✓" } else { "{platform.name} ✗" }
                }
            }
        }
    }
}

fn platform_detail(catalog: &Catalog, platform: &Platform) -> Element {
    rsx! {
        div { class: "detail-header",
            h2 { class: "detail-title", style: "color: {platform.color};", "{platform.name}" }
        }
        div { class: "detail-subtitle", "{platform.channel}" }
        p { class: "detail-description", "{platform.description}" }

        if !platform.stats.is_empty() {
            div { class: "detail-stats",
                for stat in platform.stats.iter() {
                    div { key: "{stat.label}", class: "detail-stat",
                        span { class: "stat-label", "{stat.label}" }
                        span { class: "stat-value", "{stat.value}" }
                    }
                }
            }
        }

        h3 { class: "detail-section", "TOOLS" }
        div { class: "detail-chips",
            for tool in catalog.tools_for(platform) {
                span { key: "{tool.id}", class: "detail-chip", "{tool.id}" }
            }
        }
    }
}
