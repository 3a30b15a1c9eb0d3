use crate::simulated::SimulatedPacer;
use chrono::Duration;
use std::sync::Arc;

/// A guard that provides access to pacing controls in tests
pub struct PaceControl {
    pacer: Arc<SimulatedPacer>,
}

impl PaceControl {
    pub(crate) fn new(pacer: Arc<SimulatedPacer>) -> Self {
        Self { pacer }
    }

    /// Park every subsequent pause until [`PaceControl::release`]
    pub fn hold(&self) {
        self.pacer.hold();
    }

    /// Let every parked pause complete
    pub fn release(&self) {
        self.pacer.release();
    }

    /// Get the total duration paused since creation or last reset
    pub fn total_paused(&self) -> Duration {
        self.pacer.total_paused()
    }

    /// Get the number of pause calls since creation or last reset
    pub fn pause_count(&self) -> usize {
        self.pacer.pause_count()
    }

    /// Reset pause tracking statistics
    pub fn reset_tracking(&self) {
        self.pacer.reset_tracking();
    }
}

impl std::fmt::Debug for PaceControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaceControl")
            .field("total_paused", &self.total_paused())
            .field("pause_count", &self.pause_count())
            .finish()
    }
}
