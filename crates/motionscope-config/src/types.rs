use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sampling loop parameters.
    pub sampling: SamplingConfig,
    /// Presentation settings.
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reject values the sampling loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.chart_capacity == 0 {
            return Err(ConfigError::ZeroChartCapacity);
        }
        if self.sampling.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Tick period of the sampling loop in milliseconds.
    pub period_ms: u64,
    /// Number of acceleration samples retained for the chart.
    pub chart_capacity: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            period_ms: 100,
            chart_capacity: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Mode selected at startup. The picker UI owns this at runtime.
    pub initial_mode: DisplayMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            initial_mode: DisplayMode::ReferenceFrames,
        }
    }
}

/// Which view consumes the sampling loop's output.
///
/// Owned by the presentation layer; the pipeline only reads it. The 3-D
/// reference-frame scene is driven only in `ReferenceFrames`; the other two
/// modes drive the line chart. `Speed` charts the same acceleration buffer;
/// a dedicated speed series was never implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    ReferenceFrames,
    Acceleration,
    Speed,
}

impl DisplayMode {
    /// True when the 3-D scene is the active consumer.
    pub fn shows_scene(&self) -> bool {
        matches!(self, DisplayMode::ReferenceFrames)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sampling.chart_capacity must be at least 1")]
    ZeroChartCapacity,
    #[error("sampling.period_ms must be at least 1")]
    ZeroPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_valid_ten_hz_hundred_sample_setup() {
        let config = AppConfig::default();
        assert_eq!(config.sampling.period_ms, 100);
        assert_eq!(config.sampling.chart_capacity, 100);
        assert_eq!(config.display.initial_mode, DisplayMode::ReferenceFrames);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scene_only_for_reference_frames() {
        assert!(DisplayMode::ReferenceFrames.shows_scene());
        assert!(!DisplayMode::Acceleration.shows_scene());
        assert!(!DisplayMode::Speed.shows_scene());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut config = AppConfig::default();
        config.sampling.chart_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.sampling.period_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.sampling.period_ms, config.sampling.period_ms);
        assert_eq!(back.sampling.chart_capacity, config.sampling.chart_capacity);
        assert_eq!(back.display.initial_mode, config.display.initial_mode);
    }
}
