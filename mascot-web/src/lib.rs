/// Mascot Web - browser binding for the seek-and-drop mascot
///
/// Mounts the core state machine onto an absolutely positioned element,
/// feeds it scroll, resize and pointer events, and writes the element's
/// style once per animation frame. The host page owns the 3D model and
/// reads `yaw()/pitch()/roll()` to pose it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use log::{debug, info, warn};
use mascot_core::{
    DragOutcome, Mascot, MascotConfig, MotionKind, Orientation, PanelLayout, Point, RenderFrame,
    ScrollSpy,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, PointerEvent, Window};

pub mod dom;
pub mod error;

pub use error::WebError;

use dom::ElementDropTarget;

/// Attribute set on the drop target while the dragged mascot hovers it
const HOVER_ATTRIBUTE: &str = "data-mascot-hover";
/// Attribute set on the mascot element while the pointer rests on it
const HOVERED_ATTRIBUTE: &str = "data-mascot-hovered";
/// Attribute set on the mascot element while the click action plays
const ACTION_ATTRIBUTE: &str = "data-mascot-action";

/// Document listeners held for exactly as long as one drag lasts
type DragListeners = Vec<EventListener>;

#[wasm_bindgen(start)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

struct WidgetState {
    window: Window,
    mascot: Mascot<DragListeners>,
    element: HtmlElement,
    drop_target: ElementDropTarget,
    panels: Vec<Element>,
    layout: PanelLayout,
    spy: ScrollSpy,
    active_panel: Option<usize>,
    consumed: Rc<Cell<bool>>,
    on_consumed: Option<js_sys::Function>,
    frame: Option<AnimationFrame>,
}

impl WidgetState {
    fn remeasure(&mut self) {
        let scroll_y = dom::viewport(&self.window).scroll_y;
        self.layout = dom::measure_panels(&self.panels, scroll_y);
        self.relayout();
    }

    fn relayout(&mut self) {
        let viewport = dom::viewport(&self.window);
        self.mascot.update_layout(viewport, &self.layout);
        self.update_active_panel();
    }

    fn update_active_panel(&mut self) {
        let active = self.spy.active(&dom::section_rects(&self.panels));
        if active == self.active_panel {
            return;
        }
        if let Some(previous) = self.active_panel.and_then(|index| self.panels.get(index)) {
            set_flag(previous, dom::ACTIVE_ATTRIBUTE, false);
        }
        if let Some(current) = active.and_then(|index| self.panels.get(index)) {
            set_flag(current, dom::ACTIVE_ATTRIBUTE, true);
        }
        self.active_panel = active;
    }

    fn begin_drag(&mut self, pointer: &Point, state: Weak<RefCell<WidgetState>>) -> bool {
        let center = dom::element_center(&self.element);
        let window = self.window.clone();
        self.mascot
            .pointer_down(pointer, &center, || drag_listeners(&window, state))
    }

    fn pointer_move(&mut self, pointer: &Point) {
        let scroll_y = dom::viewport(&self.window).scroll_y;
        self.mascot.pointer_move(pointer, scroll_y, &self.drop_target);
    }

    fn pointer_up(&mut self, pointer: &Point) {
        match self.mascot.pointer_up(pointer, &self.drop_target) {
            DragOutcome::Dropped => info!("mascot dropped on target"),
            DragOutcome::Clicked => info!("mascot clicked, playing action"),
            DragOutcome::Released => debug!("mascot released, resuming seek"),
            DragOutcome::Ignored => {}
        }
    }

    /// Host callback to run once the current borrow is released
    fn take_consumed_notification(&mut self) -> Option<js_sys::Function> {
        if self.consumed.replace(false) {
            self.on_consumed.take()
        } else {
            None
        }
    }

    fn render(&mut self) {
        let frame = self.mascot.frame();
        set_flag(self.drop_target.element(), HOVER_ATTRIBUTE, frame.over_drop_target);
        set_flag(&self.element, HOVERED_ATTRIBUTE, frame.hovered);
        set_flag(&self.element, ACTION_ATTRIBUTE, frame.playing_action);

        let style = self.element.style();
        if !frame.visible {
            set_style(&style, "display", "none");
            return;
        }
        if let Err(err) = style.remove_property("display") {
            warn!("failed to clear display: {err:?}");
        }
        write_frame(&style, &frame);
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.mascot.set_hovered(hovered);
    }
}

fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    if let Err(err) = style.set_property(property, value) {
        warn!("failed to set {property}: {err:?}");
    }
}

/// Add or remove a valueless attribute, touching the DOM only on change
fn set_flag(element: &Element, name: &str, on: bool) {
    if element.has_attribute(name) == on {
        return;
    }
    let result = if on {
        element.set_attribute(name, "")
    } else {
        element.remove_attribute(name)
    };
    if let Err(err) = result {
        warn!("failed to update {name}: {err:?}");
    }
}

fn write_frame(style: &CssStyleDeclaration, frame: &RenderFrame) {
    set_style(style, "left", &format!("{:.2}px", frame.position.x));
    set_style(
        style,
        "top",
        &format!("{:.2}px", frame.position.y + frame.float_offset),
    );
    set_style(
        style,
        "transform",
        &format!("translate(-50%, -50%) scale({:.4})", frame.scale),
    );
    set_style(style, "opacity", &format!("{:.4}", frame.opacity));
    set_style(style, "cursor", if frame.dragging { "grabbing" } else { "grab" });
}

/// Run `f` against the widget unless it is gone or already borrowed
fn with_widget(state: &Weak<RefCell<WidgetState>>, f: impl FnOnce(&mut WidgetState)) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let Ok(mut widget) = state.try_borrow_mut() else {
        warn!("widget busy, dropping event");
        return;
    };
    f(&mut widget);
}

fn pointer_listener(
    target: &web_sys::EventTarget,
    event_type: &'static str,
    state: &Weak<RefCell<WidgetState>>,
    handler: fn(&mut WidgetState, &Point),
) -> EventListener {
    let state = state.clone();
    EventListener::new(target, event_type, move |event| {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let pointer = dom::client_point(event);
        with_widget(&state, |widget| handler(widget, &pointer));
    })
}

fn drag_listeners(window: &Window, state: Weak<RefCell<WidgetState>>) -> DragListeners {
    let mut listeners = vec![
        pointer_listener(window, "pointermove", &state, WidgetState::pointer_move),
        pointer_listener(window, "pointerup", &state, WidgetState::pointer_up),
        pointer_listener(window, "pointercancel", &state, |widget, _| {
            widget.mascot.pointer_cancel();
        }),
    ];
    let root = window.document().and_then(|document| document.document_element());
    if let Some(root) = root {
        listeners.push(pointer_listener(&root, "pointerleave", &state, |widget, _| {
            widget.mascot.pointer_cancel();
        }));
    }
    listeners
}

fn schedule_frame(state: Weak<RefCell<WidgetState>>) -> AnimationFrame {
    request_animation_frame(move |timestamp| {
        let Some(state) = state.upgrade() else {
            return;
        };
        let notify = {
            let mut widget = state.borrow_mut();
            widget.mascot.tick(timestamp);
            widget.render();
            widget.frame = (widget.mascot.motion_kind() != MotionKind::Consumed)
                .then(|| schedule_frame(Rc::downgrade(&state)));
            widget.take_consumed_notification()
        };
        if let Some(callback) = notify {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                warn!("onConsumed callback threw: {err:?}");
            }
        }
    })
}

/// Draggable mascot mounted on a page
#[wasm_bindgen]
pub struct MascotWidget {
    state: Option<Rc<RefCell<WidgetState>>>,
    listeners: Vec<EventListener>,
}

impl MascotWidget {
    fn orientation(&self) -> Option<Orientation> {
        self.state
            .as_ref()
            .and_then(|state| state.try_borrow().ok().map(|widget| widget.mascot.orientation()))
    }

    /// Boolean query on the mascot; false once unmounted or while busy
    fn read(&self, query: impl FnOnce(&Mascot<DragListeners>) -> bool) -> bool {
        self.state
            .as_ref()
            .and_then(|state| state.try_borrow().ok().map(|widget| query(&widget.mascot)))
            .unwrap_or(false)
    }
}

#[wasm_bindgen]
impl MascotWidget {
    /// Mount onto `#element_id`, resting beside the panels matching
    /// `panel_selector` and accepting drops on `#drop_target_id`.
    ///
    /// `options_json` overrides any subset of the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element_id: &str,
        drop_target_id: &str,
        panel_selector: &str,
        options_json: Option<String>,
        on_consumed: Option<js_sys::Function>,
    ) -> Result<MascotWidget, JsValue> {
        let config = match options_json {
            Some(json) => MascotConfig::from_json(&json).map_err(WebError::from)?,
            None => MascotConfig::default(),
        };

        let window = dom::window()?;
        let document = dom::document(&window)?;
        let element = dom::html_element_by_id(&document, element_id)?;
        let drop_target = dom::html_element_by_id(&document, drop_target_id)?;
        let panels = dom::query_all(&document, panel_selector)?;

        let consumed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&consumed);
        let mascot = Mascot::new(config).with_on_consumed(move || flag.set(true));

        let state = Rc::new(RefCell::new(WidgetState {
            window: window.clone(),
            mascot,
            element: element.clone(),
            drop_target: ElementDropTarget::new(drop_target.into()),
            panels,
            layout: PanelLayout::default(),
            spy: ScrollSpy::default(),
            active_panel: None,
            consumed,
            on_consumed,
            frame: None,
        }));
        state.borrow_mut().remeasure();
        info!(
            "mascot mounted on #{element_id} with {} panels",
            state.borrow().layout.panels().len()
        );

        let weak = Rc::downgrade(&state);
        let listeners = vec![
            {
                let weak = weak.clone();
                EventListener::new(&window, "scroll", move |_| {
                    with_widget(&weak, WidgetState::relayout);
                })
            },
            {
                let weak = weak.clone();
                EventListener::new(&window, "resize", move |_| {
                    with_widget(&weak, WidgetState::remeasure);
                })
            },
            {
                let weak = weak.clone();
                EventListener::new(&element, "pointerenter", move |_| {
                    with_widget(&weak, |widget| widget.set_hovered(true));
                })
            },
            {
                let weak = weak.clone();
                EventListener::new(&element, "pointerleave", move |_| {
                    with_widget(&weak, |widget| widget.set_hovered(false));
                })
            },
            {
                let weak = weak.clone();
                EventListener::new_with_options(
                    &element,
                    "pointerdown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        let pointer = dom::client_point(event);
                        let drag_state = weak.clone();
                        with_widget(&weak, |widget| {
                            if widget.begin_drag(&pointer, drag_state) {
                                event.prevent_default();
                            }
                        });
                    },
                )
            },
        ];

        let frame = schedule_frame(weak);
        state.borrow_mut().frame = Some(frame);

        Ok(MascotWidget {
            state: Some(state),
            listeners,
        })
    }

    /// Re-measure panels after the host changed the page layout
    pub fn relayout(&self) {
        if let Some(state) = &self.state {
            with_widget(&Rc::downgrade(state), WidgetState::remeasure);
        }
    }

    pub fn yaw(&self) -> f64 {
        self.orientation().map(|o| o.yaw).unwrap_or(0.0)
    }

    pub fn pitch(&self) -> f64 {
        self.orientation().map(|o| o.pitch).unwrap_or(0.0)
    }

    pub fn roll(&self) -> f64 {
        self.orientation().map(|o| o.roll).unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.read(|mascot| mascot.is_dragging())
    }

    /// Whether the click action is currently playing
    #[wasm_bindgen(js_name = isPlayingAction)]
    pub fn is_playing_action(&self) -> bool {
        self.read(|mascot| mascot.is_playing_action())
    }

    #[wasm_bindgen(js_name = isHovered)]
    pub fn is_hovered(&self) -> bool {
        self.read(|mascot| mascot.is_hovered())
    }

    /// Stop the frame loop and release every listener, including those of a
    /// drag in progress. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        let Some(state) = self.state.take() else {
            return;
        };
        match Rc::try_unwrap(state) {
            Ok(cell) => {
                let widget = cell.into_inner();
                widget.mascot.unmount();
            }
            Err(shared) => {
                if let Ok(mut widget) = shared.try_borrow_mut() {
                    widget.frame.take();
                    widget.mascot.pointer_cancel();
                }
            }
        }
        info!("mascot unmounted");
    }
}
