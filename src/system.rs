use crate::provider::Pacer;
use async_trait::async_trait;
use chrono::Duration;
use tokio::time;

/// Production pacer that really sleeps on the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct SystemPacer;

#[async_trait]
impl Pacer for SystemPacer {
    async fn pause(&self, duration: Duration) {
        // Negative durations fail the conversion and are skipped.
        if let Ok(std_duration) = duration.to_std() {
            if !std_duration.is_zero() {
                time::sleep(std_duration).await;
            }
        }
    }

    fn is_simulated(&self) -> bool {
        false
    }
}
