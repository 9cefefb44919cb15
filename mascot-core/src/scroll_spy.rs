/// Active-section tracking for page navigation
use crate::geometry::Rect;

/// Fixed header height plus the activation band below it
pub const DEFAULT_TRIGGER_OFFSET: f64 = 180.0;

#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    trigger_y: f64,
}

impl ScrollSpy {
    pub fn new(trigger_y: f64) -> Self {
        Self { trigger_y }
    }

    /// Pick the section under the trigger line, falling back to the one whose
    /// top edge is closest to it. `sections` are viewport-space rects keyed
    /// by the caller's id, in document order.
    pub fn active<K: Copy>(&self, sections: &[(K, Rect)]) -> Option<K> {
        let mut nearest: Option<(K, f64)> = None;
        for (key, rect) in sections {
            if rect.top <= self.trigger_y && rect.bottom() > self.trigger_y {
                return Some(*key);
            }
            let distance = (rect.top - self.trigger_y).abs();
            if nearest.map(|(_, best)| distance < best).unwrap_or(true) {
                nearest = Some((*key, distance));
            }
        }
        nearest.map(|(key, _)| key)
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_OFFSET)
    }
}
