use std::time::Duration;
use tracing::{debug, instrument};

use crate::components::session::{ActiveFlow, SessionEvent};
use crate::components::stage_ticker::{Pacing, StageTicker};

/// Drives an accepted submission through its stages in real time.
///
/// Ticks are emitted strictly one after another; the sink decides what a
/// tick does to the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionSequencer {
    pacing: Pacing,
}

impl SubmissionSequencer {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Schedule for a flow that was just started
    pub fn ticker_for(&self, flow: &ActiveFlow) -> StageTicker {
        StageTicker::new(flow.stages.len(), self.pacing)
    }

    /// Sleep between ticks and hand each one to `sink` as a session event
    #[instrument(skip(self, flow, sink), fields(flow = flow.sequence, tool = %flow.tool))]
    pub async fn play<F>(&self, flow: &ActiveFlow, mut sink: F)
    where
        F: FnMut(SessionEvent),
    {
        let mut elapsed = Duration::ZERO;
        for tick in self.ticker_for(flow) {
            let wait = tick.at.saturating_sub(elapsed);
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            elapsed = tick.at;
            debug!(?tick.kind, at_ms = tick.at.as_millis() as u64, "Tick");
            sink(SessionEvent::from_tick(flow.sequence, tick.kind));
        }
    }
}
