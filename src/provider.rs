use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

/// Type alias for a shared pacer
pub type SharedPacer = Arc<dyn Pacer>;

/// Core trait for pacing calculation requests.
///
/// Calculations are instant, but front-ends show a loading state while a request is in
/// flight. A pacer holds the request for a short, configurable moment so that state is
/// visible. The pause carries no meaning for the result.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Hold the caller for the specified duration
    async fn pause(&self, duration: Duration);

    /// Check if this pacer only simulates its pauses
    fn is_simulated(&self) -> bool;
}
