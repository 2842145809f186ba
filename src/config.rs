//! Shell configuration: confidence threshold and bind address, env-driven.
//!
//! The core never validates thresholds; the shell enforces the [0.5, 0.9]
//! contract via `clamp_threshold` on every value it hands to the pipeline.

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.6;
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.5;
pub const MAX_CONFIDENCE_THRESHOLD: f32 = 0.9;
/// UI slider granularity; informational for clients.
pub const THRESHOLD_STEP: f32 = 0.05;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

pub const ENV_CONFIDENCE_THRESHOLD: &str = "CX_CONFIDENCE_THRESHOLD";
pub const ENV_BIND_ADDR: &str = "CX_BIND_ADDR";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Default threshold applied when a request omits one.
    pub confidence_threshold: f32,
    pub bind_addr: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let confidence_threshold = parse_threshold_env(std::env::var(ENV_CONFIDENCE_THRESHOLD).ok())
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD);
        let bind_addr = std::env::var(ENV_BIND_ADDR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        Self {
            confidence_threshold,
            bind_addr,
        }
    }
}

/// Clamp into the allowed [0.5, 0.9] band.
pub fn clamp_threshold(v: f32) -> f32 {
    v.clamp(MIN_CONFIDENCE_THRESHOLD, MAX_CONFIDENCE_THRESHOLD)
}

// parse optional float env and clamp into the allowed band
fn parse_threshold_env(raw: Option<String>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .map(clamp_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_thresholds() {
        assert_eq!(clamp_threshold(0.3), MIN_CONFIDENCE_THRESHOLD);
        assert_eq!(clamp_threshold(1.5), MAX_CONFIDENCE_THRESHOLD);
        assert_eq!(clamp_threshold(0.75), 0.75);
    }

    #[test]
    fn parses_and_clamps_env_threshold() {
        assert_eq!(parse_threshold_env(Some(" 0.7 ".into())), Some(0.7));
        assert_eq!(parse_threshold_env(Some("2.0".into())), Some(0.9));
        assert_eq!(parse_threshold_env(Some("abc".into())), None);
        assert_eq!(parse_threshold_env(None), None);
    }

    #[test]
    fn default_config_matches_ui_contract() {
        let c = ShellConfig::default();
        assert_eq!(c.confidence_threshold, 0.6);
        assert!(MIN_CONFIDENCE_THRESHOLD <= c.confidence_threshold);
        assert!(c.confidence_threshold <= MAX_CONFIDENCE_THRESHOLD);
    }
}
