use crate::provider::Pacer;
use async_trait::async_trait;
use chrono::Duration;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Notify;

/// Simulated pacer for tests: pauses return immediately but are recorded.
///
/// The pacer can also be put on hold, in which case every pause parks until
/// [`SimulatedPacer::release`] is called. This lets tests interleave overlapping
/// calculation requests deterministically.
pub struct SimulatedPacer {
    state: Arc<RwLock<PaceState>>,
    released: Arc<Notify>,
}

#[derive(Debug)]
struct PaceState {
    total_paused: Duration,
    pause_count: usize,
    held: bool,
}

impl SimulatedPacer {
    /// Create a new simulated pacer with no recorded pauses
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(PaceState {
                total_paused: Duration::zero(),
                pause_count: 0,
                held: false,
            })),
            released: Arc::new(Notify::new()),
        }
    }

    /// Park every subsequent pause until [`SimulatedPacer::release`]
    pub fn hold(&self) {
        self.state.write().held = true;
    }

    /// Let every parked pause complete
    pub fn release(&self) {
        self.state.write().held = false;
        self.released.notify_waiters();
    }

    /// Get the total duration paused
    pub fn total_paused(&self) -> Duration {
        self.state.read().total_paused
    }

    /// Get the number of pause calls
    pub fn pause_count(&self) -> usize {
        self.state.read().pause_count
    }

    /// Reset pause tracking statistics
    pub fn reset_tracking(&self) {
        let mut state = self.state.write();
        state.total_paused = Duration::zero();
        state.pause_count = 0;
    }

    fn is_held(&self) -> bool {
        self.state.read().held
    }
}

impl Default for SimulatedPacer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Pacer for SimulatedPacer {
    async fn pause(&self, duration: Duration) {
        {
            let mut state = self.state.write();
            state.total_paused = state.total_paused + duration;
            state.pause_count += 1;
        } // Lock is dropped here

        loop {
            // Register interest before checking, so a release in between is not lost.
            let released = self.released.notified();
            if !self.is_held() {
                break;
            }
            released.await;
        }

        // Yield to allow other tasks to run
        tokio::task::yield_now().await;
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
