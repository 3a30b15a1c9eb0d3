use loanwise::{CalculatorConfig, PacingSource, SafePacer, SimulatedPacer};
use chrono::Duration;
use std::sync::Arc;

#[tokio::test]
async fn test_safe_pacer_with_system_has_no_control() {
    let pacer = SafePacer::new(PacingSource::System);
    assert!(!pacer.is_simulated());
    assert!(pacer.pace_control().is_none());
}

#[tokio::test]
async fn test_safe_pacer_with_simulated_has_control() {
    let pacer = SafePacer::new(PacingSource::Simulated);
    assert!(pacer.is_simulated());
    assert!(pacer.pace_control().is_some());
}

#[tokio::test]
async fn test_control_pause_tracking() {
    let pacer = SafePacer::new(PacingSource::Simulated);
    let control = pacer.pace_control().unwrap();

    assert_eq!(control.total_paused(), Duration::zero());
    assert_eq!(control.pause_count(), 0);

    pacer.pause(Duration::milliseconds(300)).await;
    pacer.pause(Duration::milliseconds(200)).await;

    assert_eq!(control.total_paused(), Duration::milliseconds(500));
    assert_eq!(control.pause_count(), 2);

    control.reset_tracking();
    assert_eq!(control.total_paused(), Duration::zero());
    assert_eq!(control.pause_count(), 0);
}

#[tokio::test]
async fn test_controls_share_one_pacer() {
    let simulated = Arc::new(SimulatedPacer::new());
    let pacer = SafePacer::new_from_simulated(simulated.clone());
    let first = pacer.pace_control().unwrap();
    let second = pacer.clone().pace_control().unwrap();

    pacer.pause(Duration::seconds(1)).await;

    assert_eq!(first.pause_count(), 1);
    assert_eq!(second.pause_count(), 1);
    assert_eq!(simulated.total_paused(), Duration::seconds(1));
}

#[tokio::test]
async fn test_control_debug_output() {
    let pacer = SafePacer::new(PacingSource::Simulated);
    let control = pacer.pace_control().unwrap();
    pacer.pause(Duration::milliseconds(10)).await;

    let debug = format!("{control:?}");
    assert!(debug.contains("PaceControl"));
    assert!(debug.contains("pause_count: 1"));
}

#[test]
fn test_simulated_config_defaults() {
    let config = CalculatorConfig::simulated();
    assert_eq!(config.pacing, PacingSource::Simulated);
    assert_eq!(config.delay, Duration::milliseconds(500));
    assert_eq!(CalculatorConfig::default().pacing, PacingSource::System);
}
