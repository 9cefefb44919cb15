/// Character-cell canvas for the terminal playground
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use mascot_core::{Rect, RenderFrame};
use std::io::Write;

/// Mascot glyphs from full size down to nearly gone
const MASCOT_GLYPHS: &[&str] = &["<@>", "(o)", " . "];
/// Shown while the click action plays
const ACTION_GLYPH: &str = "\\@/";

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

/// Cell buffer flushed to the terminal once per frame
pub struct CellRenderer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![BLANK; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn put(&mut self, x: i64, y: i64, ch: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { ch, color };
    }

    pub fn put_str(&mut self, x: i64, y: i64, text: &str, color: Color) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as i64, y, ch, color);
        }
    }

    /// Outline `rect` (viewport space) with box-drawing characters
    pub fn frame_rect(&mut self, rect: &Rect, color: Color) {
        let left = rect.left.round() as i64;
        let top = rect.top.round() as i64;
        let right = rect.right().round() as i64;
        let bottom = rect.bottom().round() as i64;

        for x in left + 1..right {
            self.put(x, top, '─', color);
            self.put(x, bottom, '─', color);
        }
        for y in top + 1..bottom {
            self.put(left, y, '│', color);
            self.put(right, y, '│', color);
        }
        self.put(left, top, '┌', color);
        self.put(right, top, '┐', color);
        self.put(left, bottom, '└', color);
        self.put(right, bottom, '┘', color);
    }

    /// Draw the mascot for `frame`, shifted into the viewport by `scroll_y`
    pub fn draw_mascot(&mut self, frame: &RenderFrame, scroll_y: f64) {
        if !frame.visible || frame.scale <= 0.0 {
            return;
        }
        let glyph = if frame.playing_action {
            ACTION_GLYPH
        } else if frame.scale > 0.66 {
            MASCOT_GLYPHS[0]
        } else if frame.scale > 0.33 {
            MASCOT_GLYPHS[1]
        } else {
            MASCOT_GLYPHS[2]
        };
        let color = if frame.over_drop_target {
            Color::Green
        } else if frame.dragging {
            Color::Yellow
        } else if frame.hovered {
            Color::Magenta
        } else {
            Color::Cyan
        };
        let x = frame.position.x.round() as i64 - 1;
        let y = (frame.position.y + frame.float_offset - scroll_y).round() as i64;
        self.put_str(x, y, glyph, color);
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.ch))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
