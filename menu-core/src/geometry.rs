use crate::error::LayoutError;
use crate::model::{Margins, Orientation, PageGeometry};

/// Horizontal gap between adjacent columns, in inches.
pub const COLUMN_GAP: f64 = 0.2;

/// Supported column counts.
pub const MAX_COLUMNS: usize = 3;

/// Concrete page dimensions and column boxes, in inches with a
/// top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub page_width: f64,
    pub page_height: f64,
    pub margins: Margins,
    pub columns: usize,
    pub column_gap: f64,
    pub usable_width: f64,
    pub usable_height: f64,
    pub column_width: f64,
}

impl PageFrame {
    /// Left edge of column `column`.
    pub fn column_left(&self, column: usize) -> f64 {
        self.margins.left + column as f64 * (self.column_width + self.column_gap)
    }

    /// Right edge of column `column`.
    pub fn column_right(&self, column: usize) -> f64 {
        self.column_left(column) + self.column_width
    }

    pub fn content_top(&self) -> f64 {
        self.margins.top
    }

    pub fn content_bottom(&self) -> f64 {
        self.page_height - self.margins.bottom
    }

    /// Height a column offers to blocks.
    pub fn column_height(&self) -> f64 {
        self.usable_height
    }
}

/// Validate a page setup and compute its frame.
pub fn resolve(geometry: &PageGeometry) -> Result<PageFrame, LayoutError> {
    if geometry.columns < 1 || geometry.columns > MAX_COLUMNS {
        return Err(LayoutError::InvalidGeometry(format!(
            "column count must be between 1 and {}, got {}",
            MAX_COLUMNS, geometry.columns
        )));
    }

    let m = geometry.margins;
    for (side, value) in [
        ("top", m.top),
        ("right", m.right),
        ("bottom", m.bottom),
        ("left", m.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "{} margin must be a non-negative number, got {}",
                side, value
            )));
        }
    }

    let (short, long) = geometry.paper_size.dimensions();
    let (page_width, page_height) = match geometry.orientation {
        Orientation::Portrait => (short, long),
        Orientation::Landscape => (long, short),
    };

    let usable_width = page_width - m.left - m.right;
    let usable_height = page_height - m.top - m.bottom;
    if usable_width <= 0.0 || usable_height <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "margins leave no room on a {}x{}in page",
            page_width, page_height
        )));
    }

    let gaps = (geometry.columns - 1) as f64 * COLUMN_GAP;
    let column_width = (usable_width - gaps) / geometry.columns as f64;
    if column_width <= 0.0 {
        return Err(LayoutError::InvalidGeometry(format!(
            "{} columns do not fit in {}in of usable width",
            geometry.columns, usable_width
        )));
    }

    Ok(PageFrame {
        page_width,
        page_height,
        margins: m,
        columns: geometry.columns,
        column_gap: COLUMN_GAP,
        usable_width,
        usable_height,
        column_width,
    })
}
