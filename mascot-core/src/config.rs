/// Tunable constants for the mascot, loadable from JSON
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse mascot config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config value `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Seek animator constants
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeekConfig {
    /// Fraction of the remaining distance covered per tick
    pub speed_factor: f64,
    /// Smallest per-axis step in pixels
    pub min_step: f64,
    /// Distance below which the mascot counts as arrived
    pub arrival_threshold: f64,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            speed_factor: 0.03,
            min_step: 2.0,
            arrival_threshold: 50.0,
        }
    }
}

/// Target resolver constants
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Left anchor as a fraction of the viewport width
    pub left_x_percent: f64,
    /// Right anchor as a fraction of the viewport width
    pub right_x_percent: f64,
    /// Resting height as a fraction of the viewport height
    pub screen_y_percent: f64,
    /// Distance past the right viewport edge used while hidden
    pub offscreen_margin: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            left_x_percent: 0.1,
            right_x_percent: 0.9,
            screen_y_percent: 0.5,
            offscreen_margin: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    pub duration_ms: f64,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self { duration_ms: 500.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub lerp_speed: f64,
    pub tilt_factor: f64,
    pub roll_factor: f64,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            lerp_speed: 0.03,
            tilt_factor: 0.001,
            roll_factor: 0.1,
        }
    }
}

/// One-shot action played when the mascot is clicked rather than dragged
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub duration_ms: f64,
    /// Pointer travel up to this distance still counts as a click
    pub click_slop: f64,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            click_slop: 4.0,
        }
    }
}

/// Idle bob while the pointer rests over the mascot
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub amplitude: f64,
    /// Angular frequency in radians per second
    pub frequency: f64,
    /// Fraction of the offset removed per tick once the pointer leaves
    pub return_speed: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            amplitude: 6.0,
            frequency: 2.0,
            return_speed: 0.1,
        }
    }
}

/// Complete mascot configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MascotConfig {
    pub seek: SeekConfig,
    pub target: TargetConfig,
    pub drop: DropConfig,
    pub orientation: OrientationConfig,
    pub action: ActionConfig,
    pub hover: HoverConfig,
    /// Viewports narrower than this hide the mascot
    pub min_viewport_width: f64,
}

impl Default for MascotConfig {
    fn default() -> Self {
        Self {
            seek: SeekConfig::default(),
            target: TargetConfig::default(),
            drop: DropConfig::default(),
            orientation: OrientationConfig::default(),
            action: ActionConfig::default(),
            hover: HoverConfig::default(),
            min_viewport_width: 1024.0,
        }
    }
}

impl MascotConfig {
    /// Parse a (possibly partial) JSON object and validate it
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let seek = &self.seek;
        check("seek.speed_factor", seek.speed_factor, |v| v > 0.0 && v <= 1.0)?;
        check("seek.min_step", seek.min_step, |v| v > 0.0)?;
        check("seek.arrival_threshold", seek.arrival_threshold, |v| v > 0.0)?;

        let target = &self.target;
        check("target.left_x_percent", target.left_x_percent, unit)?;
        check("target.right_x_percent", target.right_x_percent, unit)?;
        check("target.screen_y_percent", target.screen_y_percent, unit)?;
        check("target.offscreen_margin", target.offscreen_margin, |v| v >= 0.0)?;

        check("drop.duration_ms", self.drop.duration_ms, |v| v > 0.0)?;

        let orientation = &self.orientation;
        check("orientation.lerp_speed", orientation.lerp_speed, |v| v > 0.0 && v <= 1.0)?;
        check("orientation.tilt_factor", orientation.tilt_factor, |_| true)?;
        check("orientation.roll_factor", orientation.roll_factor, |_| true)?;

        check("action.duration_ms", self.action.duration_ms, |v| v > 0.0)?;
        check("action.click_slop", self.action.click_slop, |v| v >= 0.0)?;

        let hover = &self.hover;
        check("hover.amplitude", hover.amplitude, |v| v >= 0.0)?;
        check("hover.frequency", hover.frequency, |_| true)?;
        check("hover.return_speed", hover.return_speed, |v| v > 0.0 && v <= 1.0)?;

        check("min_viewport_width", self.min_viewport_width, |v| v >= 0.0)
    }
}

fn unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn check(field: &'static str, value: f64, valid: impl Fn(f64) -> bool) -> Result<(), ConfigError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MascotConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MascotConfig::from_json(r#"{ "seek": { "min_step": 4.0 } }"#).unwrap();
        assert_eq!(config.seek.min_step, 4.0);
        assert_eq!(config.seek.speed_factor, 0.03);
        assert_eq!(config.target, TargetConfig::default());
        assert_eq!(config.min_viewport_width, 1024.0);
    }

    #[test]
    fn test_out_of_range_speed_rejected() {
        let err = MascotConfig::from_json(r#"{ "seek": { "speed_factor": 1.5 } }"#).unwrap_err();
        match err {
            ConfigError::OutOfRange { field, value } => {
                assert_eq!(field, "seek.speed_factor");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_hover_return_speed_must_be_fraction() {
        let err = MascotConfig::from_json(r#"{ "hover": { "return_speed": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "hover.return_speed", .. }
        ));
    }

    #[test]
    fn test_zero_min_step_rejected() {
        let mut config = MascotConfig::default();
        config.seek.min_step = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_arrival_threshold_rejected() {
        let err = MascotConfig::from_json(r#"{ "seek": { "arrival_threshold": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "seek.arrival_threshold", .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = MascotConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
