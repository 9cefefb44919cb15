/// Resting-position resolution from scroll offset, viewport and panel layout
use log::debug;

use crate::config::TargetConfig;
use crate::geometry::{Point, Viewport};
use crate::panel::{PanelLayout, Side};

/// Picks the document-space point the mascot seeks towards.
///
/// The resolver stays dormant (targets off-screen) until the viewport
/// mid-line first reaches the anchor panel. Once activated it stays so.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    config: TargetConfig,
    activated: bool,
}

impl TargetResolver {
    pub fn new(config: TargetConfig) -> Self {
        Self {
            config,
            activated: false,
        }
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// X coordinate of the resting anchor on `side`
    pub fn anchor_x(&self, side: Side, viewport: &Viewport) -> f64 {
        match side {
            Side::Left => viewport.width * self.config.left_x_percent,
            Side::Right => viewport.width * self.config.right_x_percent,
        }
    }

    fn offscreen_x(&self, viewport: &Viewport) -> f64 {
        viewport.width + self.config.offscreen_margin
    }

    pub fn resolve(&mut self, viewport: &Viewport, layout: &PanelLayout) -> Point {
        if viewport.is_degenerate() {
            return Point::new(self.offscreen_x(viewport), viewport.scroll_y);
        }

        if layout.is_empty() {
            return Point::new(viewport.width / 2.0, viewport.mid_y());
        }

        let mid_y = viewport.mid_y();
        let anchor = layout.anchor_panel();

        if !self.activated {
            let triggered = anchor.map(|panel| mid_y >= panel.top).unwrap_or(true);
            if triggered {
                debug!("target resolver activated at scroll {}", viewport.scroll_y);
                self.activated = true;
            }
        }

        // Inside a panel: its side. In a gap: the nearest panel's side.
        let side = layout
            .panel_at(mid_y)
            .or_else(|| layout.nearest(mid_y))
            .map(|panel| panel.preferred_side.opposite())
            .unwrap_or(Side::Right);

        let screen_y = viewport.scroll_y + viewport.height * self.config.screen_y_percent;
        let y = match anchor {
            Some(panel) => screen_y.max(panel.mid_y()),
            None => screen_y,
        };

        let x = if self.activated {
            self.anchor_x(side, viewport)
        } else {
            self.offscreen_x(viewport)
        };

        Point::new(x, y)
    }
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new(TargetConfig::default())
    }
}
