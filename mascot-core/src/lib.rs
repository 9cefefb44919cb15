/// Mascot Core Library - seek-and-drop behavior for a draggable page mascot
///
/// This library holds the platform-free part of the widget: target resolution
/// from the page layout, per-frame seeking, drag handling, and the drop
/// transition. Hosts feed it viewport, pointer and clock input and render the
/// resulting frame.

pub mod config;
pub mod drag;
pub mod geometry;
pub mod gesture;
pub mod mascot;
pub mod orientation;
pub mod panel;
pub mod reaction;
pub mod scroll_spy;
pub mod seek;
pub mod store;
pub mod target;

// Re-export commonly used types
pub use config::{ConfigError, MascotConfig};
pub use drag::{DragOutcome, DropTarget};
pub use geometry::{Point, Rect, Vector, Viewport};
pub use mascot::{Mascot, MotionKind, RenderFrame};
pub use orientation::Orientation;
pub use panel::{PanelDescriptor, PanelLayout, Side};
pub use scroll_spy::ScrollSpy;
