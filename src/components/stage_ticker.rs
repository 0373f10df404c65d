use std::time::Duration;

use crate::catalog::Edition;

/// Delays used to pace a flow on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub step_delay: Duration,
    pub settle_delay: Duration,
    pub linger: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(400),
            settle_delay: Duration::from_millis(300),
            linger: Duration::from_millis(1500),
        }
    }
}

impl Pacing {
    /// Default delays for a catalog edition.
    ///
    /// Recipe flows answer as soon as the last stage is reached and clear
    /// after a second.
    pub fn for_edition(edition: Edition) -> Self {
        match edition {
            Edition::Servers => Self::default(),
            Edition::Recipes => Self {
                step_delay: Duration::from_millis(400),
                settle_delay: Duration::ZERO,
                linger: Duration::from_millis(1000),
            },
        }
    }

    /// Pacing with no delays, for tests and headless runs
    pub fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            linger: Duration::ZERO,
        }
    }

    /// Offset of the response tick for a flow of `stages` stages
    pub fn response_at(&self, stages: usize) -> Duration {
        self.step_delay * stages as u32 + self.settle_delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Highlight moves to this stage index; `index == len` means past the last stage
    Stage(usize),
    /// The assistant turn is due
    Respond,
    /// The flow can be discarded
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Offset from the moment the submission was accepted
    pub at: Duration,
    pub kind: TickKind,
}

/// Pure schedule of the ticks for one flow.
///
/// Stage 0 is active as soon as the submission is accepted, so the ticker
/// yields stage indices `1..=stages`, then the response, then the clear.
#[derive(Debug, Clone)]
pub struct StageTicker {
    stages: usize,
    pacing: Pacing,
    next: usize,
}

impl StageTicker {
    pub fn new(stages: usize, pacing: Pacing) -> Self {
        Self {
            stages,
            pacing,
            next: 0,
        }
    }

    /// Total number of ticks the schedule emits
    pub fn tick_count(&self) -> usize {
        self.stages + 2
    }
}

impl Iterator for StageTicker {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let position = self.next;
        let tick = if position < self.stages {
            let index = position + 1;
            Tick {
                at: self.pacing.step_delay * index as u32,
                kind: TickKind::Stage(index),
            }
        } else if position == self.stages {
            Tick {
                at: self.pacing.response_at(self.stages),
                kind: TickKind::Respond,
            }
        } else if position == self.stages + 1 {
            Tick {
                at: self.pacing.response_at(self.stages) + self.pacing.linger,
                kind: TickKind::Clear,
            }
        } else {
            return None;
        };

        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tick_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StageTicker {}
