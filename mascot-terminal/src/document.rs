/// Virtual scrolling page laid out in terminal cells
use mascot_core::{DropTarget, PanelDescriptor, PanelLayout, Point, Rect, Side};

/// Gap between panels, in rows
const PANEL_GAP: f64 = 4.0;
/// Share of the width a panel's content occupies
const PANEL_WIDTH_PERCENT: f64 = 0.55;

pub const SECTION_TITLES: [&str; 4] = ["About", "Skills", "Projects", "Mobile Games"];

/// One titled section of the page
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub descriptor: PanelDescriptor,
    /// Content box in document space
    pub content: Rect,
}

/// A hero banner followed by alternating sections; the last one hosts the game box
#[derive(Debug, Clone)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub sections: Vec<Section>,
    pub game_box: Rect,
}

impl Document {
    pub fn new(columns: u16, rows: u16) -> Self {
        let width = f64::from(columns.max(20));
        let page = f64::from(rows.max(10));
        let panel_width = (width * PANEL_WIDTH_PERCENT).floor();

        let mut top = page;
        let mut sections = Vec::with_capacity(SECTION_TITLES.len());
        for (index, title) in SECTION_TITLES.iter().enumerate() {
            let side = if index % 2 == 0 { Side::Left } else { Side::Right };
            let bottom = top + page;
            let left = match side {
                Side::Left => 2.0,
                Side::Right => width - panel_width - 2.0,
            };
            sections.push(Section {
                title,
                descriptor: PanelDescriptor::new(top, bottom, side),
                content: Rect::new(left, top, panel_width, page),
            });
            top = bottom + PANEL_GAP;
        }

        let game_box = sections
            .last()
            .map(|section| {
                let content = section.content;
                Rect::new(content.left + 2.0, content.top + 3.0, content.width - 4.0, content.height - 6.0)
            })
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0));

        Self {
            width,
            height: top + page / 2.0,
            sections,
            game_box,
        }
    }

    /// The first section anchors the mascot
    pub fn layout(&self) -> PanelLayout {
        PanelLayout::new(self.sections.iter().map(|s| s.descriptor).collect(), Some(0))
    }

    pub fn max_scroll(&self, viewport_rows: f64) -> f64 {
        (self.height - viewport_rows).max(0.0)
    }
}

/// The game box as seen through the current scroll offset
pub struct GameBox {
    pub document_rect: Rect,
    pub scroll_y: f64,
}

impl DropTarget for GameBox {
    fn bounds(&self) -> Option<Rect> {
        Some(self.document_rect.translated(0.0, -self.scroll_y))
    }
}

/// Cells the mascot glyph can be grabbed by
pub fn grab_area(center: &Point) -> Rect {
    Rect::new(center.x - 2.0, center.y - 1.0, 4.0, 2.0)
}
