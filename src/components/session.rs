use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::{Catalog, Platform, Tool};
use crate::components::flow::{build_flow, Stage, StageTarget};
use crate::components::message::{Message, MessageRole, TurnMeta};
use crate::components::responses::synthesize;
use crate::components::stage_ticker::TickKind;
use crate::components::tool_selection::classify_detailed;

/// Which main panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Architecture,
    Comparison,
}

/// Component opened in the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Tool(String),
    Server(String),
    Platform(String),
}

/// The flow currently animating (or lingering after its response)
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFlow {
    /// Submission number this flow belongs to
    pub sequence: u64,
    pub tool: String,
    pub trigger: Option<String>,
    pub servers: Vec<String>,
    pub stages: Vec<Stage>,
    pub step: usize,
}

impl ActiveFlow {
    pub fn current_stage(&self) -> Option<&Stage> {
        self.stages.get(self.step)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.stages.len()
    }

    pub fn uses_server(&self, server_id: &str) -> bool {
        self.servers.iter().any(|s| s == server_id)
    }

    /// True while the highlight sits on `target`
    pub fn is_at(&self, target: &StageTarget) -> bool {
        self.current_stage().is_some_and(|s| &s.target == target)
    }

    /// True once the highlight reached or passed the first stage aimed at `target`
    pub fn has_reached(&self, target: &StageTarget) -> bool {
        self.stages
            .iter()
            .position(|s| &s.target == target)
            .is_some_and(|first| self.step >= first)
    }
}

/// Inputs the session reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SelectPlatform(String),
    Submit(String),
    AdvanceStage { flow: u64, step: usize },
    Respond { flow: u64 },
    ClearFlow { flow: u64 },
    SelectComponent(Selection),
    CloseDetail,
    SetView(ViewMode),
}

impl SessionEvent {
    /// Session event a ticker tick stands for
    pub fn from_tick(flow: u64, kind: TickKind) -> Self {
        match kind {
            TickKind::Stage(step) => SessionEvent::AdvanceStage { flow, step },
            TickKind::Respond => SessionEvent::Respond { flow },
            TickKind::Clear => SessionEvent::ClearFlow { flow },
        }
    }
}

/// Everything the explorer shows, owned by one controller.
///
/// Transitions go through [`ExplorerSession::reduce`]; the session never
/// touches timers or the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    catalog: Arc<Catalog>,
    platform: String,
    conversation: Vec<Message>,
    processing: bool,
    active_flow: Option<ActiveFlow>,
    selection: Option<Selection>,
    view: ViewMode,
    submissions: u64,
}

impl ExplorerSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let platform = catalog.default_platform().id.clone();
        Self {
            catalog,
            platform,
            conversation: Vec::new(),
            processing: false,
            active_flow: None,
            selection: None,
            view: ViewMode::default(),
            submissions: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn platform(&self) -> &Platform {
        self.catalog
            .platform(&self.platform)
            .unwrap_or_else(|| self.catalog.default_platform())
    }

    pub fn conversation(&self) -> &[Message] {
        &self.conversation
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn active_flow(&self) -> Option<&ActiveFlow> {
        self.active_flow.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Whether a submission of `input` would start a new flow
    pub fn accepts(&self, input: &str) -> bool {
        !self.processing && !input.trim().is_empty()
    }

    /// Apply one event and return the next state
    pub fn reduce(mut self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SelectPlatform(id) => {
                if self.processing {
                    debug!(platform = %id, "Ignoring platform change while a query is in flight");
                } else if self.catalog.platform(&id).is_some() {
                    info!(platform = %id, "Platform selected");
                    self.platform = id;
                } else {
                    debug!(platform = %id, "Ignoring unknown platform");
                }
            }
            SessionEvent::Submit(input) => {
                if self.accepts(&input) {
                    self.start_submission(input.trim());
                } else {
                    debug!(processing = self.processing, "Submission rejected");
                }
            }
            SessionEvent::AdvanceStage { flow, step } => {
                let processing = self.processing;
                if let Some(active) = self.flow_mut(flow) {
                    if processing {
                        active.step = step.min(active.stages.len());
                        debug!(flow, step = active.step, "Advanced stage");
                    }
                }
            }
            SessionEvent::Respond { flow } => {
                if self.processing && self.flow_mut(flow).is_some() {
                    self.finish_submission();
                }
            }
            SessionEvent::ClearFlow { flow } => {
                if !self.processing && self.flow_mut(flow).is_some() {
                    debug!(flow, "Flow cleared");
                    self.active_flow = None;
                }
            }
            SessionEvent::SelectComponent(selection) => {
                self.selection = Some(selection);
            }
            SessionEvent::CloseDetail => {
                self.selection = None;
            }
            SessionEvent::SetView(view) => {
                self.view = view;
            }
        }
        self
    }

    fn flow_mut(&mut self, sequence: u64) -> Option<&mut ActiveFlow> {
        self.active_flow
            .as_mut()
            .filter(|active| active.sequence == sequence)
    }

    fn start_submission(&mut self, input: &str) {
        self.conversation
            .push(Message::new(MessageRole::User, input.to_string()));
        self.submissions += 1;

        let platform = self.platform();
        let classification = classify_detailed(&self.catalog, input, platform);
        let tool: &Tool = classification.tool;
        let stages = build_flow(&self.catalog, tool);

        info!(
            flow = self.submissions,
            platform = %platform.id,
            tool = %tool.id,
            fallback = classification.is_fallback(),
            stages = stages.len(),
            "Query accepted"
        );

        let active = ActiveFlow {
            sequence: self.submissions,
            tool: tool.id.clone(),
            trigger: classification.trigger.map(str::to_string),
            servers: tool.servers.clone(),
            stages,
            step: 0,
        };
        self.active_flow = Some(active);
        self.processing = true;
    }

    fn finish_submission(&mut self) {
        let Some(active) = self.active_flow.as_mut() else {
            return;
        };
        active.step = active.stages.len();

        let reply = match self.catalog.tool(&active.tool) {
            Some(tool) => Message::new(
                MessageRole::Assistant,
                synthesize(&self.catalog, tool).to_string(),
            )
            .with_meta(TurnMeta {
                tool: tool.id.clone(),
                servers: tool.server_summary(" → "),
                latency: tool.latency.clone(),
            }),
            None => Message::new(
                MessageRole::Assistant,
                crate::catalog::GENERIC_RESPONSE.to_string(),
            ),
        };

        info!(flow = active.sequence, tool = %active.tool, "Response delivered");
        self.conversation.push(reply);
        self.processing = false;
    }
}
