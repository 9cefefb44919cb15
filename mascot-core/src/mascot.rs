/// The seek-and-drop state machine driving the mascot widget
use log::debug;

use crate::config::MascotConfig;
use crate::drag::{DragOutcome, DragSession, DropTarget};
use crate::geometry::{Point, Viewport};
use crate::gesture::{ClickAction, HoverFloat};
use crate::orientation::Orientation;
use crate::panel::PanelLayout;
use crate::reaction::{ConsumedCallback, DropReaction, ReactionFrame};
use crate::seek::{SeekAnimator, SeekStep};
use crate::store::PositionStore;
use crate::target::TargetResolver;

/// Who currently governs the mascot's position.
///
/// Only `Seeking`/`Arrived` let the animator write; only `Dragging` lets
/// pointer moves write. `Dropped` and `Consumed` are terminal for motion.
#[derive(Debug)]
pub enum Motion<S> {
    Seeking,
    Arrived,
    Dragging(DragSession<S>),
    Dropped(DropReaction),
    Consumed,
}

/// Payload-free view of [`Motion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Seeking,
    Arrived,
    Dragging,
    Dropped,
    Consumed,
}

impl<S> Motion<S> {
    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Seeking => MotionKind::Seeking,
            Motion::Arrived => MotionKind::Arrived,
            Motion::Dragging(_) => MotionKind::Dragging,
            Motion::Dropped(_) => MotionKind::Dropped,
            Motion::Consumed => MotionKind::Consumed,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    /// Document-space center of the mascot
    pub position: Point,
    pub visible: bool,
    pub scale: f64,
    pub opacity: f64,
    pub dragging: bool,
    pub over_drop_target: bool,
    pub orientation: Orientation,
    /// Pointer rests over the mascot
    pub hovered: bool,
    /// The click action is playing
    pub playing_action: bool,
    /// Vertical bob to add to `position.y` when drawing
    pub float_offset: f64,
}

/// Seek-and-drop widget.
///
/// `S` is the guard type the host hands over when a drag begins; see
/// [`DragSession`].
pub struct Mascot<S = ()> {
    config: MascotConfig,
    resolver: TargetResolver,
    animator: SeekAnimator,
    store: PositionStore,
    orientation: Orientation,
    motion: Motion<S>,
    viewport: Viewport,
    enabled: bool,
    reaction_frame: Option<ReactionFrame>,
    action: Option<ClickAction>,
    hover: HoverFloat,
    on_consumed: Option<ConsumedCallback>,
}

impl<S> Mascot<S> {
    pub fn new(config: MascotConfig) -> Self {
        Self {
            config,
            resolver: TargetResolver::new(config.target),
            animator: SeekAnimator::new(config.seek),
            store: PositionStore::new(),
            orientation: Orientation::zero(),
            motion: Motion::Seeking,
            viewport: Viewport::default(),
            enabled: false,
            reaction_frame: None,
            action: None,
            hover: HoverFloat::default(),
            on_consumed: None,
        }
    }

    /// Register the host notification fired after a drop completes
    pub fn with_on_consumed(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_consumed = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &MascotConfig {
        &self.config
    }

    /// Re-resolve the target after a scroll, resize or layout change
    pub fn update_layout(&mut self, viewport: Viewport, layout: &PanelLayout) {
        self.viewport = viewport;
        self.enabled = !viewport.is_degenerate() && viewport.width >= self.config.min_viewport_width;

        let dormant = !self.resolver.is_activated();
        let target = self.resolver.resolve(&viewport, layout);
        if !self.store.set_target(target) {
            return;
        }
        // Until activation the mascot waits just past the current right edge,
        // including on the layout that activates it.
        if dormant && matches!(self.motion, Motion::Seeking | Motion::Arrived) {
            let entry = Point::new(viewport.width + self.config.target.offscreen_margin, target.y);
            if self.store.current().is_none() {
                debug!("mascot spawned at {entry:?}");
            }
            self.store.set_current(entry);
        }
    }

    /// Advance one animation frame
    pub fn tick(&mut self, now_ms: f64) {
        match self.motion.kind() {
            MotionKind::Seeking | MotionKind::Arrived => self.seek(),
            MotionKind::Dropped => self.advance_reaction(now_ms),
            MotionKind::Dragging | MotionKind::Consumed => {}
        }
        self.hover.update(now_ms, &self.config.hover);
        let finished = self.action.as_mut().is_some_and(|action| !action.poll(now_ms));
        if finished {
            debug!("click action finished");
            self.action = None;
        }
    }

    /// Pointer entered or left the mascot
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover.set_hovered(hovered && self.is_visible());
    }

    fn advance_reaction(&mut self, now_ms: f64) {
        let Motion::Dropped(reaction) = &mut self.motion else {
            return;
        };
        let frame = reaction.poll(now_ms);
        self.reaction_frame = Some(frame);
        if frame.finished {
            debug!("mascot consumed");
            self.motion = Motion::Consumed;
        }
    }

    fn seek(&mut self) {
        let (Some(current), Some(target)) = (self.store.current(), self.store.target()) else {
            return;
        };
        match self.animator.step(&current, &target) {
            SeekStep::Arrived => {
                if !matches!(self.motion, Motion::Arrived) {
                    debug!("mascot arrived at {current:?}");
                }
                self.motion = Motion::Arrived;
                self.orientation.settle(&self.config.orientation);
            }
            SeekStep::Moved(next) => {
                self.store.set_current(next);
                self.orientation.face_towards(&(target - current), &self.config.orientation);
                self.motion = Motion::Seeking;
            }
        }
    }

    /// Begin dragging if the mascot is visible and idle.
    ///
    /// `subscribe` acquires the host's global pointer listeners and is only
    /// called when the drag actually starts.
    pub fn pointer_down(
        &mut self,
        pointer: &Point,
        element_center: &Point,
        subscribe: impl FnOnce() -> S,
    ) -> bool {
        if !matches!(self.motion, Motion::Seeking | Motion::Arrived) || !self.is_visible() {
            return false;
        }
        let session = DragSession::begin(pointer, element_center, subscribe());
        debug!("drag started, grab offset {:?}", session.grab_offset());
        self.motion = Motion::Dragging(session);
        true
    }

    /// Follow the pointer; returns false when no drag is in progress
    pub fn pointer_move(&mut self, pointer: &Point, scroll_y: f64, target: &impl DropTarget) -> bool {
        let Motion::Dragging(session) = &mut self.motion else {
            return false;
        };
        let scroll_y = if scroll_y.is_finite() { scroll_y } else { self.viewport.scroll_y };
        session.note_travel(pointer, self.config.action.click_slop);
        session.track_hover(pointer, target);
        self.store.set_current(session.position_for(pointer, scroll_y));
        true
    }

    /// Finish a drag, re-querying the drop target at the release point
    pub fn pointer_up(&mut self, pointer: &Point, target: &impl DropTarget) -> DragOutcome {
        let clicked = match &mut self.motion {
            Motion::Dragging(session) => {
                session.note_travel(pointer, self.config.action.click_slop);
                session.is_click()
            }
            _ => return DragOutcome::Ignored,
        };
        if target.contains(pointer) {
            debug!("dropped on target at {pointer:?}");
            let reaction = DropReaction::new(self.config.drop.duration_ms, self.on_consumed.take());
            self.motion = Motion::Dropped(reaction);
            DragOutcome::Dropped
        } else if clicked {
            debug!("mascot clicked at {pointer:?}");
            self.motion = Motion::Seeking;
            self.action = Some(ClickAction::new(&self.config.action));
            DragOutcome::Clicked
        } else {
            debug!("drag released at {pointer:?}");
            self.motion = Motion::Seeking;
            DragOutcome::Released
        }
    }

    /// Pointer left the window or capture was lost
    pub fn pointer_cancel(&mut self) -> DragOutcome {
        if !matches!(self.motion, Motion::Dragging(_)) {
            return DragOutcome::Ignored;
        }
        debug!("drag cancelled");
        self.motion = Motion::Seeking;
        DragOutcome::Released
    }

    /// Tear the widget down, releasing any live pointer subscription
    pub fn unmount(self) {
        debug!("mascot unmounted in state {:?}", self.motion.kind());
    }

    pub fn motion_kind(&self) -> MotionKind {
        self.motion.kind()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn has_arrived(&self) -> bool {
        matches!(self.motion, Motion::Arrived)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Seeking) && self.store.is_ready()
    }

    pub fn is_visible(&self) -> bool {
        self.enabled && self.store.is_ready() && !matches!(self.motion, Motion::Consumed)
    }

    pub fn position(&self) -> Option<Point> {
        self.store.current()
    }

    pub fn target(&self) -> Option<Point> {
        self.store.target()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_playing_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    pub fn frame(&self) -> RenderFrame {
        let (scale, opacity) = match (&self.motion, self.reaction_frame) {
            (Motion::Consumed, _) => (0.0, 0.0),
            (Motion::Dropped(_), Some(frame)) => (frame.scale, frame.opacity),
            _ => (1.0, 1.0),
        };
        let over_drop_target = match &self.motion {
            Motion::Dragging(session) => session.over_drop_target(),
            _ => false,
        };
        let float_offset = match self.motion {
            Motion::Seeking | Motion::Arrived => self.hover.offset(),
            _ => 0.0,
        };
        RenderFrame {
            position: self.store.current().unwrap_or_else(Point::origin),
            visible: self.is_visible(),
            scale,
            opacity,
            dragging: self.is_dragging(),
            over_drop_target,
            orientation: self.orientation,
            hovered: self.hover.is_hovered(),
            playing_action: self.is_playing_action(),
            float_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::panel::{PanelDescriptor, Side};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stands in for a set of document-level listeners
    struct Listeners(Rc<Cell<i32>>);

    impl Listeners {
        fn acquire(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 3);
            Listeners(Rc::clone(live))
        }
    }

    impl Drop for Listeners {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 3);
        }
    }

    fn layout() -> PanelLayout {
        PanelLayout::new(vec![PanelDescriptor::new(0.0, 2000.0, Side::Right)], Some(0))
    }

    fn viewport() -> Viewport {
        Viewport::new(0.0, 1280.0, 800.0)
    }

    fn drop_zone() -> Rect {
        Rect::new(400.0, 200.0, 400.0, 300.0)
    }

    fn mounted<S>() -> Mascot<S> {
        let mut mascot = Mascot::new(MascotConfig::default());
        mascot.update_layout(viewport(), &layout());
        mascot
    }

    fn settle<S>(mascot: &mut Mascot<S>) {
        for frame in 0..10_000 {
            mascot.tick(frame as f64 * 16.0);
            if mascot.has_arrived() {
                return;
            }
        }
        panic!("mascot never arrived");
    }

    fn counting_callback() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_spawns_offscreen_at_target_height() {
        let mascot: Mascot = mounted();
        // Anchor mid 1000 beats the naive 400; inside a right-hand panel -> left anchor.
        assert_eq!(mascot.target(), Some(Point::new(128.0, 1000.0)));
        assert_eq!(mascot.position(), Some(Point::new(1480.0, 1000.0)));
        assert!(mascot.is_visible());
    }

    #[test]
    fn test_dormant_mascot_stays_past_widened_edge() {
        let anchored = PanelLayout::new(vec![PanelDescriptor::new(500.0, 700.0, Side::Left)], Some(0));
        let mut mascot: Mascot = Mascot::new(MascotConfig::default());
        mascot.update_layout(Viewport::new(0.0, 800.0, 800.0), &anchored);
        mascot.update_layout(Viewport::new(0.0, 1920.0, 800.0), &anchored);

        assert_eq!(mascot.position(), Some(Point::new(2120.0, 600.0)));
        for frame in 0..100 {
            mascot.tick(frame as f64 * 16.0);
        }
        assert!(mascot.position().unwrap().x > 1920.0);

        // Scrolling the anchor into view brings it in from the right edge.
        mascot.update_layout(Viewport::new(300.0, 1920.0, 800.0), &anchored);
        assert_eq!(mascot.target(), Some(Point::new(1728.0, 700.0)));
        assert_eq!(mascot.position(), Some(Point::new(2120.0, 700.0)));
        mascot.tick(0.0);
        assert!(mascot.is_moving());
    }

    #[test]
    fn test_degenerate_first_layout_spawns_offscreen() {
        let mut mascot: Mascot = Mascot::new(MascotConfig::default());
        mascot.update_layout(Viewport::new(0.0, 0.0, 0.0), &layout());
        mascot.update_layout(viewport(), &layout());
        // Activated on the second layout: entry sits past the real edge.
        assert_eq!(mascot.position().unwrap().x, 1480.0);
    }

    #[test]
    fn test_exact_arrival_with_zero_threshold() {
        let mut config = MascotConfig::default();
        config.seek.arrival_threshold = 0.0;
        let mut mascot: Mascot = Mascot::new(config);
        mascot.update_layout(viewport(), &layout());
        settle(&mut mascot);
        assert_eq!(mascot.position(), mascot.target());
        mascot.tick(0.0);
        assert!(mascot.has_arrived());
        assert!(!mascot.is_moving());
    }

    #[test]
    fn test_not_visible_before_layout() {
        let mascot: Mascot = Mascot::new(MascotConfig::default());
        assert!(!mascot.is_visible());
        assert!(!mascot.frame().visible);
    }

    #[test]
    fn test_converges_within_bound() {
        let mut mascot: Mascot = mounted();
        let distance = (mascot.target().unwrap() - mascot.position().unwrap()).norm();
        let bound = SeekAnimator::new(mascot.config().seek).ticks_to_arrive_bound(distance);
        for frame in 0..=bound {
            mascot.tick(frame as f64 * 16.0);
            if mascot.has_arrived() {
                return;
            }
        }
        panic!("not arrived after {bound} ticks");
    }

    #[test]
    fn test_moving_flags_while_seeking() {
        let mut mascot: Mascot = mounted();
        mascot.tick(0.0);
        assert!(mascot.is_moving());
        assert!(!mascot.has_arrived());
        assert_eq!(mascot.motion_kind(), MotionKind::Seeking);
    }

    #[test]
    fn test_within_threshold_arrives_without_motion() {
        let mut mascot: Mascot = mounted();
        settle(&mut mascot);
        let before = mascot.position();
        mascot.tick(0.0);
        assert!(mascot.has_arrived());
        assert!(!mascot.is_moving());
        assert_eq!(mascot.position(), before);
    }

    #[test]
    fn test_retargets_after_scroll() {
        let mut mascot: Mascot = mounted();
        settle(&mut mascot);
        mascot.update_layout(Viewport::new(3000.0, 1280.0, 800.0), &layout());
        mascot.tick(0.0);
        assert!(mascot.is_moving());
        assert_eq!(mascot.target().unwrap().y, 3400.0);
    }

    #[test]
    fn test_ticks_never_move_while_dragging() {
        let mut mascot: Mascot = mounted();
        mascot.tick(0.0);
        let center = mascot.position().unwrap();
        assert!(mascot.pointer_down(&center, &center, || ()));

        let held = mascot.position();
        for frame in 0..200 {
            mascot.tick(frame as f64 * 16.0);
        }
        assert_eq!(mascot.position(), held);
        assert!(mascot.is_dragging());
        assert!(!mascot.has_arrived());

        assert!(mascot.pointer_move(&Point::new(300.0, 300.0), 50.0, &drop_zone()));
        assert_eq!(mascot.position(), Some(Point::new(300.0, 350.0)));
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut mascot: Mascot = mounted();
        let center = Point::new(100.0, 100.0);
        assert!(mascot.pointer_down(&Point::new(120.0, 90.0), &center, || ()));
        mascot.pointer_move(&Point::new(520.0, 690.0), 1000.0, &drop_zone());
        assert_eq!(mascot.position(), Some(Point::new(500.0, 1700.0)));
    }

    #[test]
    fn test_hover_feedback() {
        let mut mascot: Mascot = mounted();
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        mascot.pointer_move(&Point::new(500.0, 300.0), 0.0, &drop_zone());
        assert!(mascot.frame().over_drop_target);
        mascot.pointer_move(&Point::new(50.0, 50.0), 0.0, &drop_zone());
        assert!(!mascot.frame().over_drop_target);
    }

    #[test]
    fn test_drop_inside_fires_once() {
        let (count, callback) = counting_callback();
        let mut mascot: Mascot = mounted::<()>().with_on_consumed(callback);
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());

        let inside = Point::new(600.0, 350.0);
        assert_eq!(mascot.pointer_up(&inside, &drop_zone()), DragOutcome::Dropped);
        assert_eq!(mascot.motion_kind(), MotionKind::Dropped);
        assert_eq!(mascot.pointer_up(&inside, &drop_zone()), DragOutcome::Ignored);

        mascot.tick(1000.0);
        mascot.tick(1250.0);
        assert_eq!(count.get(), 0);
        let frame = mascot.frame();
        assert!(frame.scale < 1.0 && frame.scale > 0.0);

        mascot.tick(1500.0);
        assert_eq!(count.get(), 1);
        assert_eq!(mascot.motion_kind(), MotionKind::Consumed);
        assert!(!mascot.is_visible());

        for frame in 0..20 {
            mascot.tick(2000.0 + frame as f64 * 16.0);
            mascot.pointer_up(&inside, &drop_zone());
        }
        assert_eq!(count.get(), 1);
        assert!(!mascot.pointer_down(&origin, &origin, || ()));
    }

    #[test]
    fn test_drop_outside_resumes_seeking() {
        let (count, callback) = counting_callback();
        let mut mascot: Mascot = mounted::<()>().with_on_consumed(callback);
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        mascot.pointer_move(&Point::new(900.0, 700.0), 0.0, &drop_zone());

        let outside = Point::new(900.0, 700.0);
        assert_eq!(mascot.pointer_up(&outside, &drop_zone()), DragOutcome::Released);
        assert_eq!(mascot.motion_kind(), MotionKind::Seeking);

        settle(&mut mascot);
        assert_eq!(count.get(), 0);
        assert!(mascot.is_visible());
    }

    #[test]
    fn test_release_decision_uses_live_bounds() {
        let mut mascot: Mascot = mounted();
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        // Hovering says yes, but the target scrolled away before release.
        mascot.pointer_move(&Point::new(500.0, 300.0), 0.0, &drop_zone());
        assert!(mascot.frame().over_drop_target);
        let scrolled = drop_zone().translated(0.0, -600.0);
        assert_eq!(mascot.pointer_up(&Point::new(500.0, 300.0), &scrolled), DragOutcome::Released);
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let mut mascot: Mascot = mounted();
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        assert_eq!(mascot.pointer_cancel(), DragOutcome::Released);
        assert!(!mascot.is_dragging());
        assert_eq!(mascot.pointer_cancel(), DragOutcome::Ignored);
    }

    #[test]
    fn test_pointer_events_ignored_when_idle() {
        let mut mascot: Mascot = mounted();
        let before = mascot.position();
        assert!(!mascot.pointer_move(&Point::new(10.0, 10.0), 0.0, &drop_zone()));
        assert_eq!(mascot.pointer_up(&Point::new(500.0, 300.0), &drop_zone()), DragOutcome::Ignored);
        assert_eq!(mascot.position(), before);
    }

    #[test]
    fn test_listeners_released_on_every_exit() {
        let live = Rc::new(Cell::new(0));
        let origin = Point::new(0.0, 0.0);
        let mut mascot: Mascot<Listeners> = mounted();

        mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live));
        assert_eq!(live.get(), 3);
        mascot.pointer_up(&Point::new(2000.0, 0.0), &drop_zone());
        assert_eq!(live.get(), 0);

        mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live));
        mascot.pointer_cancel();
        assert_eq!(live.get(), 0);

        mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live));
        mascot.pointer_up(&Point::new(500.0, 300.0), &drop_zone());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_unmount_mid_drag_releases_listeners() {
        let live = Rc::new(Cell::new(0));
        let origin = Point::new(0.0, 0.0);
        let mut mascot: Mascot<Listeners> = mounted();
        assert!(mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live)));
        mascot.pointer_move(&Point::new(40.0, 40.0), 0.0, &drop_zone());
        assert_eq!(live.get(), 3);

        mascot.unmount();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_second_pointer_down_does_not_resubscribe() {
        let live = Rc::new(Cell::new(0));
        let origin = Point::new(0.0, 0.0);
        let mut mascot: Mascot<Listeners> = mounted();
        assert!(mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live)));
        assert!(!mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live)));
        assert_eq!(live.get(), 3);
    }

    #[test]
    fn test_narrow_viewport_hides_and_blocks_drag() {
        let mut mascot: Mascot<Listeners> = Mascot::new(MascotConfig::default());
        mascot.update_layout(Viewport::new(0.0, 800.0, 800.0), &layout());
        assert!(!mascot.is_visible());

        let live = Rc::new(Cell::new(0));
        let origin = Point::new(0.0, 0.0);
        assert!(!mascot.pointer_down(&origin, &origin, || Listeners::acquire(&live)));
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_click_without_travel_plays_action() {
        let mut mascot: Mascot = mounted();
        let center = mascot.position().unwrap();
        assert!(mascot.pointer_down(&center, &center, || ()));
        mascot.pointer_move(&Point::new(center.x + 2.0, center.y), 0.0, &drop_zone());
        assert_eq!(mascot.pointer_up(&center, &drop_zone()), DragOutcome::Clicked);
        assert_eq!(mascot.motion_kind(), MotionKind::Seeking);
        assert!(mascot.frame().playing_action);

        mascot.tick(100.0);
        mascot.tick(1050.0);
        assert!(mascot.is_playing_action());
        mascot.tick(1100.0);
        assert!(!mascot.frame().playing_action);
    }

    #[test]
    fn test_drag_does_not_play_action() {
        let mut mascot: Mascot = mounted();
        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        mascot.pointer_move(&Point::new(40.0, 0.0), 0.0, &drop_zone());
        assert_eq!(mascot.pointer_up(&origin, &drop_zone()), DragOutcome::Released);
        assert!(!mascot.is_playing_action());
    }

    #[test]
    fn test_hover_floats_only_while_idle() {
        let mut mascot: Mascot = mounted();
        mascot.set_hovered(true);
        mascot.tick(785.0);
        let frame = mascot.frame();
        assert!(frame.hovered);
        assert!(frame.float_offset > 0.0);

        let origin = Point::new(0.0, 0.0);
        mascot.pointer_down(&origin, &origin, || ());
        assert_eq!(mascot.frame().float_offset, 0.0);
    }

    #[test]
    fn test_hidden_mascot_ignores_hover() {
        let mut mascot: Mascot = Mascot::new(MascotConfig::default());
        mascot.update_layout(Viewport::new(0.0, 800.0, 800.0), &layout());
        mascot.set_hovered(true);
        assert!(!mascot.is_hovered());
    }

    #[test]
    fn test_orientation_turns_towards_travel() {
        let mut mascot: Mascot = mounted();
        for frame in 0..30 {
            mascot.tick(frame as f64 * 16.0);
        }
        // Travelling left: yaw heads towards -pi/2.
        assert!(mascot.orientation().yaw < 0.0);
    }
}
