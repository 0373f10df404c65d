use anyhow::Context;
use dioxus::prelude::*;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn, Level};

use gateway_explorer::catalog::Catalog;
use gateway_explorer::components::{
    ArchitectureDiagram, ChatPanel, ComparisonView, ComponentDetail, ExplorerSession, Pacing,
    SessionEvent, SubmissionSequencer, ToolPalette, ViewMode,
};
use gateway_explorer::{logging, ExplorerConfig};

// Load environment variables from .env file if it exists
fn load_env() {
    match dotenv() {
        Ok(_) => eprintln!("Loaded environment from .env file"),
        Err(_) => eprintln!("No .env file found, using default environment"),
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Explorer {},
}

const EXPLORER_CSS: Asset = asset!("/assets/explorer.css");

/// Session and pacing the explorer page starts from
#[derive(Clone)]
struct Startup {
    session: ExplorerSession,
    sequencer: SubmissionSequencer,
}

impl Startup {
    fn new(session: ExplorerSession, sequencer: SubmissionSequencer) -> Self {
        info!(
            edition = ?session.catalog().edition,
            platform = %session.platform().id,
            tools = session.catalog().tools.len(),
            "Explorer ready"
        );
        Self { session, sequencer }
    }

    fn builtin() -> Self {
        let catalog = Catalog::default();
        let pacing = Pacing::for_edition(catalog.edition);
        let session = ExplorerSession::new(Arc::new(catalog));
        Self::new(session, SubmissionSequencer::new(pacing))
    }
}

fn startup() -> anyhow::Result<Startup> {
    let config = ExplorerConfig::from_env().context("Failed to read EXPLORER_* variables")?;
    let catalog = config
        .load_catalog()
        .with_context(|| format!("Failed to load the {:?} catalog", config.edition))?;

    let platform = config.initial_platform(&catalog).to_string();
    let pacing = config.pacing(catalog.edition);
    let session = ExplorerSession::new(Arc::new(catalog))
        .reduce(SessionEvent::SelectPlatform(platform));

    Ok(Startup::new(session, SubmissionSequencer::new(pacing)))
}

fn startup_or_builtin() -> Startup {
    startup().unwrap_or_else(|e| {
        warn!("{:#}; starting with the built-in catalog", e);
        Startup::builtin()
    })
}

fn main() {
    load_env();

    if let Err(e) = logging::init() {
        eprintln!("File logging unavailable ({}), using console only", e);
        if let Err(e) = logging::init_simple(Level::INFO) {
            eprintln!("Console logging unavailable: {}", e);
        }
    }

    // Launch the app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: EXPLORER_CSS }
        Router::<Route> {}
    }
}

/// Explorer page: owns the session and runs submissions
#[component]
fn Explorer() -> Element {
    let startup = use_hook(startup_or_builtin);
    let sequencer = startup.sequencer;
    let mut session = use_signal(move || startup.session.clone());

    let mut dispatch = move |event: SessionEvent| {
        let next = session.peek().clone().reduce(event);
        session.set(next);
    };

    let submit = move |text: String| {
        if !session.peek().accepts(&text) {
            return;
        }
        dispatch(SessionEvent::Submit(text));

        let Some(flow) = session.peek().active_flow().cloned() else {
            return;
        };
        spawn(async move {
            let mut dispatch = dispatch;
            sequencer.play(&flow, |event| dispatch(event)).await;
        });
    };

    let state = session.read();
    let platform = state.platform();
    let view = state.view();

    rsx! {
        div { class: "app-wrapper",
            header { class: "app-header",
                div { class: "app-brand",
                    div { class: "app-kicker", "DIRECTV × ALTIMETRIK" }
                    div { class: "app-title", "MCP Architecture Explorer" }
                }

                div { class: "platform-tabs",
                    for p in state.catalog().platforms.iter() {
                        {
                            let id = p.id.clone();
                            let is_current = p.id == platform.id;
                            rsx! {
                                button {
                                    key: "{p.id}",
                                    class: if is_current { "platform-tab active" } else { "platform-tab" },
                                    style: if is_current { format!("border-color: {c}; color: {c};", c = p.color) } else { String::new() },
                                    disabled: state.is_processing() && !is_current,
                                    onclick: move |_| dispatch(SessionEvent::SelectPlatform(id.clone())),
                                    "{p.name}"
                                }
                            }
                        }
                    }
                }

                div { class: "view-toggle",
                    span { class: "view-toggle-label", "COMPARE" }
                    button {
                        class: if view == ViewMode::Architecture { "view-button active" } else { "view-button" },
                        onclick: move |_| dispatch(SessionEvent::SetView(ViewMode::Architecture)),
                        "MCP"
                    }
                    button {
                        class: if view == ViewMode::Comparison { "view-button active" } else { "view-button" },
                        onclick: move |_| dispatch(SessionEvent::SetView(ViewMode::Comparison)),
                        "Data Lake"
                    }
                }
            }

            main { class: "app-main",
                section { class: "explorer-pane",
                    match view {
                        ViewMode::Architecture => rsx! {
                            ArchitectureDiagram { session: session, on_event: dispatch }
                            ToolPalette { session: session, on_event: dispatch }
                            ComponentDetail { session: session, on_event: dispatch }
                        },
                        ViewMode::Comparison => rsx! {
                            ComparisonView {}
                        },
                    }
                }
                section { class: "chat-pane",
                    ChatPanel { session: session, on_submit: submit }
                }
            }

            footer { class: "app-footer", "ALTIMETRIK × DIRECTV | MCP Gateway Architecture Demo" }
        }
    }
}
