use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Delay applied to every calculation when nothing else is configured
pub const DEFAULT_DELAY_MS: i64 = 500;

/// Pacing configuration for different environments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingSource {
    /// Really wait (production)
    #[default]
    System,
    /// Record pauses and return immediately (tests)
    Simulated,
}

impl PacingSource {
    /// Create from the `LOANCALC_PACING` environment variable:
    /// "system" (default) or "simulated"
    pub fn from_env() -> Self {
        match std::env::var("LOANCALC_PACING") {
            Ok(value) => Self::parse_or_default(&value),
            Err(_) => PacingSource::System,
        }
    }

    fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "system" | "" => PacingSource::System,
            "simulated" | "test" => PacingSource::Simulated,
            other => {
                tracing::warn!(value = other, "unknown LOANCALC_PACING, using system pacing");
                PacingSource::System
            }
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub pacing: PacingSource,
    /// Artificial delay before each result is handed back
    pub delay: Duration,
}

impl CalculatorConfig {
    /// Create from environment variables
    /// - LOANCALC_PACING: "system" (default) or "simulated"
    /// - LOANCALC_DELAY_MS: non-negative delay in milliseconds (default 500)
    pub fn from_env() -> Self {
        let delay = match std::env::var("LOANCALC_DELAY_MS") {
            Ok(raw) => Self::parse_delay(&raw),
            Err(_) => Duration::milliseconds(DEFAULT_DELAY_MS),
        };

        Self {
            pacing: PacingSource::from_env(),
            delay,
        }
    }

    /// Configuration for tests: simulated pacing, default delay
    pub fn simulated() -> Self {
        Self {
            pacing: PacingSource::Simulated,
            delay: Duration::milliseconds(DEFAULT_DELAY_MS),
        }
    }

    fn parse_delay(raw: &str) -> Duration {
        match raw.trim().parse::<i64>() {
            Ok(ms) if ms >= 0 => Duration::milliseconds(ms),
            _ => {
                tracing::warn!(value = raw, "invalid LOANCALC_DELAY_MS, using default delay");
                Duration::milliseconds(DEFAULT_DELAY_MS)
            }
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            pacing: PacingSource::System,
            delay: Duration::milliseconds(DEFAULT_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pacing_values() {
        assert_eq!(PacingSource::parse_or_default("Simulated"), PacingSource::Simulated);
        assert_eq!(PacingSource::parse_or_default(" system "), PacingSource::System);
        assert_eq!(PacingSource::parse_or_default("bogus"), PacingSource::System);
    }

    #[test]
    fn test_parse_delay_falls_back_on_garbage() {
        assert_eq!(CalculatorConfig::parse_delay("250"), Duration::milliseconds(250));
        assert_eq!(CalculatorConfig::parse_delay("-5"), Duration::milliseconds(DEFAULT_DELAY_MS));
        assert_eq!(CalculatorConfig::parse_delay("soon"), Duration::milliseconds(DEFAULT_DELAY_MS));
    }
}
