/// Click and hover feedback for an idle mascot
use crate::config::{ActionConfig, HoverConfig};

/// One-shot action started by a click; the clock starts on the first poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickAction {
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ClickAction {
    pub fn new(config: &ActionConfig) -> Self {
        Self {
            duration_ms: config.duration_ms,
            started_at: None,
        }
    }

    /// Whether the action is still playing at `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let started = *self.started_at.get_or_insert(now_ms);
        now_ms - started < self.duration_ms
    }
}

/// Vertical bob while hovered, easing back to rest afterwards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverFloat {
    hovered: bool,
    offset: f64,
}

impl HoverFloat {
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn update(&mut self, now_ms: f64, config: &HoverConfig) {
        let offset = if self.hovered {
            (now_ms / 1000.0 * config.frequency).sin() * config.amplitude
        } else {
            self.offset - self.offset * config.return_speed
        };
        if offset.is_finite() {
            self.offset = offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_action_runs_for_duration() {
        let mut action = ClickAction::new(&ActionConfig::default());
        assert!(action.poll(5000.0));
        assert!(action.poll(5999.0));
        assert!(!action.poll(6000.0));
    }

    #[test]
    fn test_hover_bobs_within_amplitude() {
        let config = HoverConfig::default();
        let mut float = HoverFloat::default();
        float.set_hovered(true);
        let mut peak: f64 = 0.0;
        for frame in 0..200 {
            float.update(frame as f64 * 16.0, &config);
            peak = peak.max(float.offset().abs());
        }
        assert!(peak > config.amplitude * 0.9);
        assert!(peak <= config.amplitude);
    }

    #[test]
    fn test_hover_eases_back_to_rest() {
        let config = HoverConfig::default();
        let mut float = HoverFloat::default();
        float.set_hovered(true);
        float.update(785.0, &config);
        assert!(float.offset() > 0.0);

        float.set_hovered(false);
        for frame in 0..200 {
            float.update(frame as f64 * 16.0, &config);
        }
        assert!(float.offset().abs() < 1e-6);
    }
}
