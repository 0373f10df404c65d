pub mod architecture;
pub mod chat;
pub mod comparison;
pub mod component_detail;
pub mod flow;
pub mod message;
pub mod responses;
pub mod sequencer;
pub mod session;
pub mod stage_ticker;
pub mod tool_palette;
pub mod tool_selection;

pub use architecture::ArchitectureDiagram;
pub use chat::ChatPanel;
pub use comparison::ComparisonView;
pub use component_detail::ComponentDetail;
pub use flow::{build_flow, Stage, StageTarget};
pub use message::{Message, MessageRole, MessageView, TurnMeta};
pub use responses::synthesize;
pub use sequencer::SubmissionSequencer;
pub use session::{ActiveFlow, ExplorerSession, Selection, SessionEvent, ViewMode};
pub use stage_ticker::{Pacing, StageTicker, Tick, TickKind};
pub use tool_palette::ToolPalette;
pub use tool_selection::{classify, classify_detailed, Classification};
