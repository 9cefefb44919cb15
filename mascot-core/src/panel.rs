/// Layout panels the mascot rests beside
use std::fmt;
use std::str::FromStr;

/// Horizontal side of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown side `{}` (expected `left` or `right`)", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// One layout section, measured in document space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelDescriptor {
    pub top: f64,
    pub bottom: f64,
    /// Side where the panel's own content sits
    pub preferred_side: Side,
}

impl PanelDescriptor {
    pub fn new(top: f64, bottom: f64, preferred_side: Side) -> Self {
        let (top, bottom) = if top > bottom { (bottom, top) } else { (top, bottom) };
        Self {
            top,
            bottom,
            preferred_side,
        }
    }

    pub fn mid_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }

    /// Vertical distance from `y` to the span; zero inside
    pub fn distance_to(&self, y: f64) -> f64 {
        if y < self.top {
            self.top - y
        } else if y >= self.bottom {
            y - self.bottom
        } else {
            0.0
        }
    }
}

/// Panels in document order plus the optional anchor panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelLayout {
    panels: Vec<PanelDescriptor>,
    anchor: Option<usize>,
}

impl PanelLayout {
    /// Sorts panels by their top edge. `anchor` indexes the unsorted input.
    pub fn new(panels: Vec<PanelDescriptor>, anchor: Option<usize>) -> Self {
        let mut indexed: Vec<(usize, PanelDescriptor)> = panels
            .into_iter()
            .enumerate()
            .filter(|(_, panel)| panel.top.is_finite() && panel.bottom.is_finite())
            .collect();
        indexed.sort_by(|a, b| a.1.top.total_cmp(&b.1.top));

        let anchor = anchor.and_then(|original| indexed.iter().position(|(i, _)| *i == original));
        Self {
            panels: indexed.into_iter().map(|(_, panel)| panel).collect(),
            anchor,
        }
    }

    pub fn panels(&self) -> &[PanelDescriptor] {
        &self.panels
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn anchor_panel(&self) -> Option<&PanelDescriptor> {
        self.anchor.and_then(|index| self.panels.get(index))
    }

    pub fn panel_at(&self, y: f64) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|panel| panel.contains_y(y))
    }

    /// Closest panel by vertical distance; the earlier panel wins ties
    pub fn nearest(&self, y: f64) -> Option<&PanelDescriptor> {
        self.panels.iter().fold(None, |best: Option<&PanelDescriptor>, panel| match best {
            Some(current) if current.distance_to(y) <= panel.distance_to(y) => Some(current),
            _ => Some(panel),
        })
    }
}
