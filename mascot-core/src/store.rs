/// Current and target positions of the mascot, in document space
use log::warn;

use crate::geometry::{is_finite, Point};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionStore {
    current: Option<Point>,
    target: Option<Point>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Both positions known; until then the mascot is not shown
    pub fn is_ready(&self) -> bool {
        self.current.is_some() && self.target.is_some()
    }

    pub fn set_target(&mut self, target: Point) -> bool {
        if !is_finite(&target) {
            warn!("rejected non-finite target {target:?}");
            return false;
        }
        self.target = Some(target);
        true
    }

    pub fn set_current(&mut self, current: Point) -> bool {
        if !is_finite(&current) {
            warn!("rejected non-finite position {current:?}");
            return false;
        }
        self.current = Some(current);
        true
    }

}
