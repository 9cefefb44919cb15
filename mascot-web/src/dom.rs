/// Page measurements: viewport, panels, and the drop target element
use log::warn;
use mascot_core::{DropTarget, PanelDescriptor, PanelLayout, Point, Rect, Side, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, HtmlElement, MouseEvent, Window};

use crate::error::WebError;

pub const SIDE_ATTRIBUTE: &str = "data-mascot-side";
pub const ANCHOR_ATTRIBUTE: &str = "data-mascot-anchor";
pub const ACTIVE_ATTRIBUTE: &str = "data-mascot-active";

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::NoDocument)
}

pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::NotHtmlElement(id.to_string()))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| WebError::Selector(selector.to_string()))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Current scroll offset and inner size; unreadable values count as zero
pub fn viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        window.scroll_y().unwrap_or(0.0),
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

pub fn client_rect(rect: &DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Viewport-space center of `element`
pub fn element_center(element: &Element) -> Point {
    client_rect(&element.get_bounding_client_rect()).center()
}

/// Side hint from the panel's attribute, alternating when absent or invalid
pub fn panel_side(attribute: Option<&str>, index: usize) -> Side {
    let fallback = if index % 2 == 0 { Side::Left } else { Side::Right };
    match attribute.map(str::parse::<Side>) {
        Some(Ok(side)) => side,
        Some(Err(err)) => {
            warn!("panel {index}: {err}, using {fallback:?}");
            fallback
        }
        None => fallback,
    }
}

/// Document-space descriptor for a panel measured at `scroll_y`
pub fn descriptor(client: &Rect, scroll_y: f64, side: Side) -> PanelDescriptor {
    PanelDescriptor::new(client.top + scroll_y, client.bottom() + scroll_y, side)
}

/// Measure every panel element into a layout
pub fn measure_panels(panels: &[Element], scroll_y: f64) -> PanelLayout {
    let descriptors = panels
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let side = panel_side(element.get_attribute(SIDE_ATTRIBUTE).as_deref(), index);
            descriptor(&client_rect(&element.get_bounding_client_rect()), scroll_y, side)
        })
        .collect();
    let anchor = panels
        .iter()
        .position(|element| element.has_attribute(ANCHOR_ATTRIBUTE));
    PanelLayout::new(descriptors, anchor)
}

/// Viewport-space rects of the panels, keyed by their index
pub fn section_rects(panels: &[Element]) -> Vec<(usize, Rect)> {
    panels
        .iter()
        .map(|element| client_rect(&element.get_bounding_client_rect()))
        .enumerate()
        .collect()
}

/// Drop target whose bounds are read from the live element on every query
pub struct ElementDropTarget {
    element: Element,
}

impl ElementDropTarget {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl DropTarget for ElementDropTarget {
    fn bounds(&self) -> Option<Rect> {
        if !self.element.is_connected() {
            return None;
        }
        Some(client_rect(&self.element.get_bounding_client_rect()))
    }
}
