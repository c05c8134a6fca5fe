use crate::geometry::PageFrame;

/// Slack for floating-point accumulation when testing fit.
const FIT_EPSILON: f64 = 1e-9;

/// Where the cursor stands after its last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    InColumn,
    ColumnExhausted,
    PageExhausted,
}

/// A placed block: its column and top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub column: usize,
    pub y: f64,
    /// The block is taller than a column and runs past the bottom
    /// margin.
    pub overflow: bool,
}

/// Tracks page, column and vertical position while blocks are
/// placed, moving to the next column or page when one fills up.
#[derive(Debug, Clone)]
pub struct FlowCursor {
    columns: usize,
    top: f64,
    bottom: f64,
    page: usize,
    column: usize,
    y: f64,
    state: CursorState,
}

impl FlowCursor {
    pub fn new(frame: &PageFrame) -> Self {
        FlowCursor {
            columns: frame.columns.max(1),
            top: frame.content_top(),
            bottom: frame.content_bottom(),
            page: 0,
            column: 0,
            y: frame.content_top(),
            state: CursorState::InColumn,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Height a fresh column offers.
    pub fn column_height(&self) -> f64 {
        self.bottom - self.top
    }

    fn at_column_top(&self) -> bool {
        self.y <= self.top + FIT_EPSILON
    }

    /// Place a block of `height`, breaking to the next column or page
    /// as needed.
    ///
    /// A block taller than a whole column is placed at the top of a
    /// fresh column with `overflow` set instead of being rejected.
    pub fn advance(&mut self, height: f64) -> Placement {
        // Each pass either places or moves to a fresh column; a fresh
        // column always places.
        loop {
            let fits = self.y + height <= self.bottom + FIT_EPSILON;
            if fits || self.at_column_top() {
                let placement = Placement {
                    page: self.page,
                    column: self.column,
                    y: self.y,
                    overflow: !fits,
                };
                self.y += height;
                self.state = CursorState::InColumn;
                return placement;
            }
            self.break_column();
        }
    }

    /// Add inter-block spacing. Never breaks by itself; a cursor pushed
    /// past the bottom breaks on the next [`advance`](Self::advance).
    /// Spacing at the top of a column is dropped.
    pub fn skip(&mut self, space: f64) {
        if self.at_column_top() {
            return;
        }
        self.y += space;
    }

    fn break_column(&mut self) {
        self.state = CursorState::ColumnExhausted;
        if self.column + 1 < self.columns {
            self.column += 1;
            log::debug!("page {}: moving to column {}", self.page, self.column);
        } else {
            self.state = CursorState::PageExhausted;
            self.page += 1;
            self.column = 0;
            log::debug!("starting page {}", self.page);
        }
        self.y = self.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use crate::model::{Margins, PageGeometry};

    fn cursor(columns: usize) -> FlowCursor {
        let frame = resolve(&PageGeometry {
            columns,
            margins: Margins::uniform(0.5),
            ..Default::default()
        })
        .unwrap();
        FlowCursor::new(&frame)
    }

    #[test]
    fn places_while_blocks_fit() {
        let mut c = cursor(1);
        let a = c.advance(4.0);
        let b = c.advance(6.0);
        assert_eq!((a.page, a.column), (0, 0));
        assert!((a.y - 0.5).abs() < 1e-9);
        assert_eq!((b.page, b.column), (0, 0));
        assert!((b.y - 4.5).abs() < 1e-9);
        assert!(!b.overflow);
        assert_eq!(c.state(), CursorState::InColumn);
    }

    #[test]
    fn moves_to_next_column_then_page() {
        let mut c = cursor(2);
        c.advance(8.0);
        let second = c.advance(3.0);
        assert_eq!((second.page, second.column), (0, 1));
        assert!((second.y - 0.5).abs() < 1e-9);
        let third = c.advance(8.0);
        assert_eq!((third.page, third.column), (1, 0));
        assert!((third.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn oversized_block_is_forced_at_column_top() {
        let mut c = cursor(2);
        c.advance(1.0);
        let big = c.advance(25.0);
        assert!(big.overflow);
        assert_eq!((big.page, big.column), (0, 1));
        assert!((big.y - 0.5).abs() < 1e-9);
        // The next block starts a fresh column after the overflow.
        let next = c.advance(1.0);
        assert_eq!((next.page, next.column), (1, 0));
    }

    #[test]
    fn oversized_block_on_empty_page_stays_put() {
        let mut c = cursor(1);
        let big = c.advance(12.0);
        assert!(big.overflow);
        assert_eq!((big.page, big.column), (0, 0));
    }

    #[test]
    fn skip_is_dropped_at_column_top() {
        let mut c = cursor(1);
        c.skip(0.3);
        assert!((c.y() - 0.5).abs() < 1e-9);
        c.advance(1.0);
        c.skip(0.3);
        assert!((c.y() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn spacing_past_bottom_breaks_on_next_block() {
        let mut c = cursor(1);
        c.advance(9.9);
        c.skip(0.3);
        let next = c.advance(0.1);
        assert_eq!(next.page, 1);
        assert_eq!(c.state(), CursorState::InColumn);
    }
}
