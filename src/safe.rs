use crate::config::PacingSource;
use crate::control::PaceControl;
use crate::provider::SharedPacer;
use crate::simulated::SimulatedPacer;
use crate::system::SystemPacer;
use chrono::Duration;
use std::sync::Arc;

/// Production-safe pacer wrapper that only hands out controls in simulated mode
#[derive(Clone)]
pub struct SafePacer {
    inner: SharedPacer,
    simulated: Option<Arc<SimulatedPacer>>,
}

impl SafePacer {
    /// Create a new SafePacer from a PacingSource
    pub fn new(source: PacingSource) -> Self {
        match source {
            PacingSource::System => Self {
                inner: Arc::new(SystemPacer),
                simulated: None,
            },
            PacingSource::Simulated => {
                Self::new_from_simulated(Arc::new(SimulatedPacer::new()))
            }
        }
    }

    /// Create from an existing simulated pacer
    pub fn new_from_simulated(pacer: Arc<SimulatedPacer>) -> Self {
        Self {
            inner: pacer.clone() as SharedPacer,
            simulated: Some(pacer),
        }
    }

    /// Hold the caller for the specified duration
    pub async fn pause(&self, duration: Duration) {
        self.inner.pause(duration).await
    }

    /// Check if running in simulated mode
    pub fn is_simulated(&self) -> bool {
        self.inner.is_simulated()
    }

    /// Get pacing controls for tests (returns None with the system pacer)
    pub fn pace_control(&self) -> Option<PaceControl> {
        self.simulated
            .as_ref()
            .map(|pacer| PaceControl::new(pacer.clone()))
    }
}

impl std::fmt::Debug for SafePacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafePacer")
            .field("simulated", &self.is_simulated())
            .finish()
    }
}
