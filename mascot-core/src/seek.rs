/// Per-frame movement towards the resolved target
use crate::config::SeekConfig;
use crate::geometry::{is_finite, Point};

/// Result of one animator tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekStep {
    /// Within the arrival threshold; position left unchanged
    Arrived,
    /// New position for this frame
    Moved(Point),
}

#[derive(Debug, Clone, Copy)]
pub struct SeekAnimator {
    config: SeekConfig,
}

impl SeekAnimator {
    pub fn new(config: SeekConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeekConfig {
        &self.config
    }

    pub fn step(&self, current: &Point, target: &Point) -> SeekStep {
        let delta = target - current;
        let distance = delta.x.hypot(delta.y);

        if !distance.is_finite() || distance == 0.0 || distance < self.config.arrival_threshold {
            return SeekStep::Arrived;
        }

        let next = Point::new(
            current.x + self.axis_step(delta.x),
            current.y + self.axis_step(delta.y),
        );
        if is_finite(&next) {
            SeekStep::Moved(next)
        } else {
            SeekStep::Arrived
        }
    }

    /// Proportional step, floored so small residuals still make progress
    fn axis_step(&self, delta: f64) -> f64 {
        if delta == 0.0 {
            return 0.0;
        }
        let step = delta * self.config.speed_factor;
        if step.abs() < self.config.min_step {
            delta.signum() * delta.abs().min(self.config.min_step)
        } else {
            step
        }
    }

    /// Upper bound on ticks needed to arrive from `distance` away
    pub fn ticks_to_arrive_bound(&self, distance: f64) -> usize {
        (distance / self.config.min_step).ceil() as usize + 1
    }
}

impl Default for SeekAnimator {
    fn default() -> Self {
        Self::new(SeekConfig::default())
    }
}
