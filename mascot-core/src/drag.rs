/// Pointer-driven dragging and drop-target hit testing
use crate::geometry::{Point, Rect, Vector};

/// Region that accepts the mascot, queried live in viewport space
pub trait DropTarget {
    fn bounds(&self) -> Option<Rect>;

    fn contains(&self, client: &Point) -> bool {
        self.bounds().map(|rect| rect.contains(client)).unwrap_or(false)
    }
}

impl DropTarget for Rect {
    fn bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl DropTarget for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

/// Outcome of releasing (or losing) the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag was in progress
    Ignored,
    /// Released over the drop target
    Dropped,
    /// Released elsewhere or cancelled; seeking resumes
    Released,
    /// Released where it was pressed; seeking resumes and the click action plays
    Clicked,
}

/// An in-progress drag.
///
/// `S` is the host's subscription guard for the global pointer listeners.
/// It lives exactly as long as the session, so every exit path (drop,
/// release, cancel, unmount) releases the listeners by dropping it.
#[derive(Debug)]
pub struct DragSession<S> {
    grab_offset: Vector,
    press: Point,
    travelled: bool,
    over_drop_target: bool,
    _subscription: S,
}

impl<S> DragSession<S> {
    /// `pointer` and `element_center` are both viewport-space
    pub fn begin(pointer: &Point, element_center: &Point, subscription: S) -> Self {
        let grab_offset = pointer - element_center;
        let grab_offset = if grab_offset.x.is_finite() && grab_offset.y.is_finite() {
            grab_offset
        } else {
            Vector::zeros()
        };
        Self {
            grab_offset,
            press: *pointer,
            travelled: false,
            over_drop_target: false,
            _subscription: subscription,
        }
    }

    pub fn grab_offset(&self) -> Vector {
        self.grab_offset
    }

    /// Document-space mascot center for a pointer at `pointer`
    pub fn position_for(&self, pointer: &Point, scroll_y: f64) -> Point {
        let center = pointer - self.grab_offset;
        Point::new(center.x, center.y + scroll_y)
    }

    /// Record pointer travel; anything beyond `slop` makes this a real drag
    pub fn note_travel(&mut self, pointer: &Point, slop: f64) {
        if (pointer - self.press).norm() > slop {
            self.travelled = true;
        }
    }

    /// Pressed and released without travelling
    pub fn is_click(&self) -> bool {
        !self.travelled
    }

    /// Hover feedback only; the drop decision re-queries at release
    pub fn track_hover(&mut self, pointer: &Point, target: &impl DropTarget) -> bool {
        self.over_drop_target = target.contains(pointer);
        self.over_drop_target
    }

    pub fn over_drop_target(&self) -> bool {
        self.over_drop_target
    }
}
