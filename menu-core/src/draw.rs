//! Positioned draw instructions: the engine's output and every
//! emitter's input.
//!
//! Coordinates are inches from the top-left corner of the page.

use crate::bilingual::StyleHint;
use crate::error::OverflowWarning;
use crate::fonts::FontSpec;
use crate::geometry::PageFrame;
use crate::model::{Language, LocalizedText, Theme};

/// What a piece of text is, so emitters can colour and tag it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    DocumentTitle,
    DocumentDescription,
    SectionTitle,
    ItemName,
    ItemDescription,
    Price,
    ImageCaption,
}

impl TextRole {
    /// Whether the theme's primary colour applies (secondary otherwise).
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            TextRole::DocumentTitle | TextRole::SectionTitle | TextRole::ItemName | TextRole::Price
        )
    }
}

/// One visual line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f64,
    /// Top of the line box.
    pub y: f64,
    pub baseline: f64,
    pub text: String,
    pub font: FontSpec,
    pub style: StyleHint,
    pub role: TextRole,
    /// `None` for language-neutral text such as prices.
    pub language: Option<Language>,
}

/// Reserved box for an item image. The reference is passed through
/// untouched; emitters decide whether to fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlaceholder {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub reference: String,
    pub label: String,
    /// Face and size of the label drawn inside the box.
    pub caption_font: FontSpec,
}

/// Horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Dotted line from an item name to its price, on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leader {
    pub x_start: f64,
    pub x_end: f64,
    pub baseline: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawKind {
    Text(TextRun),
    Image(ImagePlaceholder),
    Rule(Rule),
    Frame(Frame),
    Leader(Leader),
}

impl DrawKind {
    /// Shift by (dx, dy). Blocks are measured at the origin and moved
    /// into place once the cursor has chosen a position.
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            DrawKind::Text(t) => {
                t.x += dx;
                t.y += dy;
                t.baseline += dy;
            }
            DrawKind::Image(i) => {
                i.x += dx;
                i.y += dy;
            }
            DrawKind::Rule(r) => {
                r.x += dx;
                r.y += dy;
            }
            DrawKind::Frame(f) => {
                f.x += dx;
                f.y += dy;
            }
            DrawKind::Leader(l) => {
                l.x_start += dx;
                l.x_end += dx;
                l.baseline += dy;
            }
        }
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            DrawKind::Text(t) => Some(t),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    pub page: usize,
    pub column: usize,
    pub kind: DrawKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub index: usize,
    pub instructions: Vec<DrawInstruction>,
}

/// Kind of a content block, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    DocumentTitle,
    DocumentDescription,
    SectionHeader,
    Item,
}

/// Where one block ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPlacement {
    pub kind: BlockKind,
    pub page: usize,
    pub column: usize,
    pub y: f64,
    pub height: f64,
    pub overflow: bool,
}

/// A finished pagination run. Plain data: it can be walked any number
/// of times and handed to several emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub frame: PageFrame,
    pub theme: Theme,
    pub title: LocalizedText,
    pub pages: Vec<Page>,
    /// Every placed block, in placement order.
    pub placements: Vec<BlockPlacement>,
    pub warnings: Vec<OverflowWarning>,
}

impl MenuLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All instructions, page by page, in emission order.
    pub fn instructions(&self) -> impl Iterator<Item = &DrawInstruction> + '_ {
        self.pages.iter().flat_map(|p| p.instructions.iter())
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.instructions().filter_map(|i| i.kind.as_text())
    }

    pub fn placements_of(&self, kind: BlockKind) -> impl Iterator<Item = &BlockPlacement> + '_ {
        self.placements.iter().filter(move |p| p.kind == kind)
    }
}
