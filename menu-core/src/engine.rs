//! Greedy, single-pass pagination of menu blocks.
//!
//! Blocks are measured at the origin, placed by the [`FlowCursor`] and
//! translated into place. There is no backtracking: a block's position
//! depends only on the blocks before it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::bilingual::{self, LanguageLine, StyleHint};
use crate::draw::{
    BlockKind, BlockPlacement, DrawInstruction, DrawKind, Frame, ImagePlaceholder, Leader,
    MenuLayout, Page, Rule, TextRole, TextRun,
};
use crate::error::{LayoutError, OverflowWarning};
use crate::flow::FlowCursor;
use crate::fonts::{FontSpec, POINTS_PER_INCH};
use crate::geometry::PageFrame;
use crate::measure::TextMeasurer;
use crate::model::{
    DisplayLanguageSet, HeaderStyle, Item, ItemStyle, LocalizedText, MenuDocument, Section, Theme,
};
use crate::style::LayoutStyle;

/// Offset of a rule below the text it underlines.
const UNDERLINE_OFFSET: f64 = 0.03;

/// Narrowest share of the column an item name may wrap into beside
/// its price. A wider price takes a line of its own above the name.
const MIN_NAME_SHARE: f64 = 0.25;

/// One unit of content, placed atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'a> {
    DocumentTitle(&'a LocalizedText),
    DocumentDescription(&'a LocalizedText),
    SectionHeader(&'a Section),
    Item(&'a Item),
}

impl<'a> Block<'a> {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::DocumentTitle(_) => BlockKind::DocumentTitle,
            Block::DocumentDescription(_) => BlockKind::DocumentDescription,
            Block::SectionHeader(_) => BlockKind::SectionHeader,
            Block::Item(_) => BlockKind::Item,
        }
    }

    /// Short description for diagnostics.
    pub fn label(&self) -> String {
        fn first(text: &LocalizedText) -> &str {
            if text.en.is_empty() {
                &text.es
            } else {
                &text.en
            }
        }
        match self {
            Block::DocumentTitle(_) => "document title".to_string(),
            Block::DocumentDescription(_) => "document description".to_string(),
            Block::SectionHeader(s) => format!("section {:?}", first(&s.title)),
            Block::Item(i) => format!("item {:?}", first(&i.name)),
        }
    }
}

impl MenuDocument {
    /// Content in reading order: title, description, then each section
    /// header followed by its items.
    pub fn blocks(&self) -> Vec<Block<'_>> {
        let mut blocks = Vec::with_capacity(2 + self.sections.len() + self.item_count());
        blocks.push(Block::DocumentTitle(&self.title));
        blocks.push(Block::DocumentDescription(&self.description));
        for section in &self.sections {
            blocks.push(Block::SectionHeader(section));
            blocks.extend(section.items.iter().map(Block::Item));
        }
        blocks
    }
}

/// A block laid out at the origin of its column.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredBlock {
    pub kind: BlockKind,
    pub height: f64,
    pub elements: Vec<DrawKind>,
}

impl MeasuredBlock {
    fn new(kind: BlockKind) -> Self {
        MeasuredBlock {
            kind,
            height: 0.0,
            elements: Vec::new(),
        }
    }

    /// True when the block would draw nothing.
    pub fn is_blank(&self) -> bool {
        self.elements.is_empty()
    }
}

/// State of one pagination run. Created per run, never shared.
struct FlowState {
    cursor: FlowCursor,
    pages: Vec<Page>,
    placements: Vec<BlockPlacement>,
    warnings: Vec<OverflowWarning>,
}

impl FlowState {
    fn new(frame: &PageFrame) -> Self {
        FlowState {
            cursor: FlowCursor::new(frame),
            pages: vec![Page::default()],
            placements: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn place(&mut self, frame: &PageFrame, block: &Block<'_>, measured: MeasuredBlock) {
        let placement = self.cursor.advance(measured.height);
        if placement.overflow {
            let warning = OverflowWarning {
                page: placement.page,
                column: placement.column,
                block: block.label(),
                height: measured.height,
                available: self.cursor.column_height(),
            };
            log::warn!("overflow: {}", warning);
            self.warnings.push(warning);
        }

        while self.pages.len() <= placement.page {
            let index = self.pages.len();
            self.pages.push(Page {
                index,
                instructions: Vec::new(),
            });
        }

        let dx = frame.column_left(placement.column);
        let page = &mut self.pages[placement.page];
        for mut kind in measured.elements {
            kind.translate(dx, placement.y);
            page.instructions.push(DrawInstruction {
                page: placement.page,
                column: placement.column,
                kind,
            });
        }

        self.placements.push(BlockPlacement {
            kind: measured.kind,
            page: placement.page,
            column: placement.column,
            y: placement.y,
            height: measured.height,
            overflow: placement.overflow,
        });
    }
}

/// Lays out blocks for one page frame, theme and language selection.
pub struct Paginator<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    frame: &'a PageFrame,
    style: &'a LayoutStyle,
    theme: &'a Theme,
    languages: DisplayLanguageSet,
}

impl<'a, M: TextMeasurer + ?Sized> Paginator<'a, M> {
    pub fn new(
        measurer: &'a M,
        frame: &'a PageFrame,
        style: &'a LayoutStyle,
        theme: &'a Theme,
        languages: DisplayLanguageSet,
    ) -> Self {
        Paginator {
            measurer,
            frame,
            style,
            theme,
            languages,
        }
    }

    /// Flow `blocks` into pages.
    ///
    /// When `cancel` is given it is checked before each section header;
    /// a block, once started, is always finished.
    pub fn paginate(
        &self,
        title: &LocalizedText,
        blocks: &[Block<'_>],
        cancel: Option<&AtomicBool>,
    ) -> Result<MenuLayout, LayoutError> {
        let mut state = FlowState::new(self.frame);

        let mut iter = blocks.iter().peekable();
        while let Some(block) = iter.next() {
            if let (Block::SectionHeader(_), Some(flag)) = (block, cancel) {
                if flag.load(Ordering::Relaxed) {
                    log::info!("layout cancelled after {} blocks", state.placements.len());
                    return Err(LayoutError::Cancelled);
                }
            }

            let measured = self.measure_block(block)?;
            // Items are always placed so every one is accounted for;
            // headers with nothing visible take no room.
            if !measured.is_blank() || measured.kind == BlockKind::Item {
                state.place(self.frame, block, measured);
            }

            let next_is_item = matches!(iter.peek(), Some(Block::Item(_)));
            match block {
                Block::Item(_) => {
                    state.cursor.skip(self.style.item_spacing);
                    if !next_is_item {
                        state.cursor.skip(self.style.section_spacing);
                    }
                }
                Block::SectionHeader(_) if !next_is_item => {
                    state.cursor.skip(self.style.section_spacing);
                }
                Block::DocumentTitle(_)
                    if !matches!(iter.peek(), Some(Block::DocumentDescription(_))) =>
                {
                    state.cursor.skip(self.style.header_spacing);
                }
                Block::DocumentDescription(_) => {
                    state.cursor.skip(self.style.header_spacing);
                }
                _ => {}
            }
        }

        log::info!(
            "laid out {} blocks on {} page(s), {} overflow warning(s)",
            state.placements.len(),
            state.pages.len(),
            state.warnings.len()
        );

        Ok(MenuLayout {
            frame: *self.frame,
            theme: self.theme.clone(),
            title: title.clone(),
            pages: state.pages,
            placements: state.placements,
            warnings: state.warnings,
        })
    }

    /// Lay out one block at the origin and report its height.
    pub fn measure_block(&self, block: &Block<'_>) -> Result<MeasuredBlock, LayoutError> {
        match block {
            Block::DocumentTitle(text) => {
                self.measure_header(BlockKind::DocumentTitle, text, TextRole::DocumentTitle)
            }
            Block::DocumentDescription(text) => self.measure_header(
                BlockKind::DocumentDescription,
                text,
                TextRole::DocumentDescription,
            ),
            Block::SectionHeader(section) => {
                self.measure_header(BlockKind::SectionHeader, &section.title, TextRole::SectionTitle)
            }
            Block::Item(item) => self.measure_item(item),
        }
    }

    fn font(&self, role: TextRole, hint: StyleHint) -> FontSpec {
        let italic = hint == StyleHint::Secondary;
        let family = self.theme.font_family;
        let s = self.style;
        match role {
            TextRole::DocumentTitle => FontSpec::new(family.face(true, italic), s.title_size),
            TextRole::DocumentDescription => {
                FontSpec::new(family.face(false, italic), s.description_size)
            }
            TextRole::SectionTitle => FontSpec::new(family.face(true, italic), s.section_size),
            TextRole::ItemName => FontSpec::new(family.face(true, italic), s.item_size),
            TextRole::ItemDescription => {
                FontSpec::new(family.face(false, italic), s.description_size)
            }
            TextRole::Price => FontSpec::new(family.face(true, false), s.item_size),
            TextRole::ImageCaption => FontSpec::new(family.face(false, false), s.caption_size),
        }
    }

    fn lines<'t>(&self, text: &'t LocalizedText) -> Vec<LanguageLine<'t>> {
        bilingual::render(text, &self.languages, self.style.italicize_secondary)
    }

    fn width(&self, text: &str, font: &FontSpec) -> Result<f64, LayoutError> {
        self.measurer
            .measure_width(text, font)
            .map_err(|source| LayoutError::Measurement {
                text: text.to_string(),
                source,
            })
    }

    fn wrap(&self, text: &str, font: &FontSpec, max_width: f64) -> Result<Vec<String>, LayoutError> {
        self.measurer
            .wrap_to_width(text, font, max_width)
            .map_err(|source| LayoutError::Measurement {
                text: text.to_string(),
                source,
            })
    }

    fn text_run(
        &self,
        line: &LanguageLine<'_>,
        text: String,
        x: f64,
        y: f64,
        font: FontSpec,
        role: TextRole,
    ) -> DrawKind {
        DrawKind::Text(TextRun {
            x,
            y,
            baseline: y + font.size / POINTS_PER_INCH,
            text,
            font,
            style: line.style,
            role,
            language: Some(line.language),
        })
    }

    fn measure_header(
        &self,
        kind: BlockKind,
        text: &LocalizedText,
        role: TextRole,
    ) -> Result<MeasuredBlock, LayoutError> {
        let mut block = MeasuredBlock::new(kind);
        let column_width = self.frame.column_width;
        let align = self.theme.header_style;

        for line in self.lines(text) {
            let font = self.font(role, line.style);
            let line_height = self.measurer.line_height(&font);
            for visual in self.wrap(line.text, &font, column_width)? {
                let x = if align == HeaderStyle::Centered {
                    ((column_width - self.width(&visual, &font)?) / 2.0).max(0.0)
                } else {
                    0.0
                };
                block
                    .elements
                    .push(self.text_run(&line, visual, x, block.height, font, role));
                block.height += line_height;
            }
        }

        if block.is_blank() || role == TextRole::DocumentDescription {
            return Ok(block);
        }
        match align {
            HeaderStyle::Underlined => block.elements.push(DrawKind::Rule(Rule {
                x: 0.0,
                y: block.height + UNDERLINE_OFFSET,
                width: column_width,
            })),
            HeaderStyle::Boxed => block.elements.push(DrawKind::Frame(Frame {
                x: 0.0,
                y: 0.0,
                width: column_width,
                height: block.height,
            })),
            HeaderStyle::Centered | HeaderStyle::LeftAligned => {}
        }
        Ok(block)
    }

    fn measure_item(&self, item: &Item) -> Result<MeasuredBlock, LayoutError> {
        let mut block = MeasuredBlock::new(BlockKind::Item);
        let column_width = self.frame.column_width;

        let price = item.price.trim();
        let price_font = self.font(TextRole::Price, StyleHint::Primary);
        let price_width = if price.is_empty() {
            0.0
        } else {
            self.width(price, &price_font)?
        };
        let price_x = (column_width - price_width).max(0.0);
        let beside_price = column_width - price_width - self.style.price_gap;
        // The price goes on the first name line drawn: English when it
        // is shown and non-empty, otherwise Spanish.
        let mut price_pending = !price.is_empty();

        let name_lines = self.lines(&item.name);
        if price_pending
            && !name_lines.is_empty()
            && beside_price < column_width * MIN_NAME_SHARE
        {
            self.push_price(&mut block, price, price_font, price_x, price_x, 0.0);
            block.height += self.measurer.line_height(&price_font);
            price_pending = false;
        }

        for line in &name_lines {
            let font = self.font(TextRole::ItemName, line.style);
            let line_height = self.measurer.line_height(&font);
            let max_width = if price_pending {
                beside_price
            } else {
                column_width
            };

            for visual in self.wrap(line.text, &font, max_width)? {
                let y = block.height;
                if price_pending {
                    let name_width = self.width(&visual, &font)?;
                    self.push_price(&mut block, price, price_font, price_x, name_width, y);
                    price_pending = false;
                }
                block
                    .elements
                    .push(self.text_run(line, visual, 0.0, y, font, TextRole::ItemName));
                block.height += line_height;
            }
        }

        if price_pending {
            // No visible name: the price gets a line of its own.
            let y = block.height;
            self.push_price(&mut block, price, price_font, price_x, price_x, y);
            block.height += self.measurer.line_height(&price_font);
        }

        for line in self.lines(&item.description) {
            let font = self.font(TextRole::ItemDescription, line.style);
            let line_height = self.measurer.line_height(&font);
            for visual in self.wrap(line.text, &font, column_width)? {
                block.elements.push(self.text_run(
                    &line,
                    visual,
                    0.0,
                    block.height,
                    font,
                    TextRole::ItemDescription,
                ));
                block.height += line_height;
            }
        }

        if let (true, Some(reference)) = (self.style.include_images, item.image.as_ref()) {
            self.push_image(&mut block, item, &name_lines, reference)?;
        }

        match self.theme.item_style {
            ItemStyle::Boxed if !block.is_blank() => block.elements.push(DrawKind::Frame(Frame {
                x: 0.0,
                y: 0.0,
                width: column_width,
                height: block.height,
            })),
            ItemStyle::Separated if !block.is_blank() => block.elements.push(DrawKind::Rule(Rule {
                x: 0.0,
                y: block.height + self.style.item_spacing / 2.0,
                width: column_width,
            })),
            _ => {}
        }

        Ok(block)
    }

    fn push_price(
        &self,
        block: &mut MeasuredBlock,
        price: &str,
        font: FontSpec,
        price_x: f64,
        name_end: f64,
        y: f64,
    ) {
        let baseline = y + font.size / POINTS_PER_INCH;
        if self.theme.show_price_with_dots {
            let x_start = name_end + self.style.price_gap / 2.0;
            let x_end = price_x - self.style.price_gap / 2.0;
            if x_end > x_start {
                block.elements.push(DrawKind::Leader(Leader {
                    x_start,
                    x_end,
                    baseline,
                }));
            }
        }
        block.elements.push(DrawKind::Text(TextRun {
            x: price_x,
            y,
            baseline,
            text: price.to_string(),
            font,
            style: StyleHint::Primary,
            role: TextRole::Price,
            language: None,
        }));
    }

    fn push_image(
        &self,
        block: &mut MeasuredBlock,
        item: &Item,
        name_lines: &[LanguageLine<'_>],
        reference: &str,
    ) -> Result<(), LayoutError> {
        let name = name_lines.first().map(|l| l.text).unwrap_or_default();
        let label = format!("Image: {}", name);
        let width = self.frame.column_width * self.style.image_width_ratio;
        let caption_font = self.font(TextRole::ImageCaption, StyleHint::Primary);
        // Unmeasurable captions must not reach the emitter.
        self.width(&label, &caption_font)?;

        block.elements.push(DrawKind::Image(ImagePlaceholder {
            x: 0.0,
            y: block.height,
            width,
            height: self.style.image_height,
            reference: reference.to_string(),
            label,
            caption_font,
        }));
        block.height += self.style.image_height + self.style.image_gap;
        log::debug!("reserved image box for {}", Block::Item(item).label());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use crate::measure::BuiltinMetrics;
    use crate::model::{Language, PageGeometry};

    fn menu() -> MenuDocument {
        let mut doc = MenuDocument::new(LocalizedText::new("Dinner", "Cena"));
        doc.sections.push(
            Section::new(LocalizedText::new("Mains", "Platos"))
                .with_item(Item::new(LocalizedText::new("Steak", "Bistec"), "$20")),
        );
        doc.sections.push(Section::new(LocalizedText::new("Empty", "Vacío")));
        doc
    }

    #[test]
    fn blocks_follow_reading_order() {
        let doc = menu();
        let kinds: Vec<BlockKind> = doc.blocks().iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::DocumentTitle,
                BlockKind::DocumentDescription,
                BlockKind::SectionHeader,
                BlockKind::Item,
                BlockKind::SectionHeader,
            ]
        );
    }

    #[test]
    fn price_attaches_to_spanish_when_english_hidden() {
        let doc = menu();
        let frame = resolve(&PageGeometry::default()).unwrap();
        let style = LayoutStyle::default();
        let metrics = BuiltinMetrics::new();
        let p = Paginator::new(
            &metrics,
            &frame,
            &style,
            &doc.theme,
            DisplayLanguageSet::spanish_only(),
        );
        let item = &doc.sections[0].items[0];
        let measured = p.measure_block(&Block::Item(item)).unwrap();
        let texts: Vec<&TextRun> = measured.elements.iter().filter_map(|e| e.as_text()).collect();
        let name = texts.iter().find(|t| t.role == TextRole::ItemName).unwrap();
        let price = texts.iter().find(|t| t.role == TextRole::Price).unwrap();
        assert_eq!(name.language, Some(Language::Es));
        assert_eq!(price.y, name.y);
    }

    #[test]
    fn blank_description_takes_no_room() {
        let doc = menu();
        let frame = resolve(&PageGeometry::default()).unwrap();
        let style = LayoutStyle::default();
        let metrics = BuiltinMetrics::new();
        let p = Paginator::new(
            &metrics,
            &frame,
            &style,
            &doc.theme,
            DisplayLanguageSet::bilingual(),
        );
        let measured = p
            .measure_block(&Block::DocumentDescription(&doc.description))
            .unwrap();
        assert!(measured.is_blank());
        assert_eq!(measured.height, 0.0);
    }

    #[test]
    fn label_prefers_english() {
        let doc = menu();
        assert_eq!(Block::SectionHeader(&doc.sections[0]).label(), "section \"Mains\"");
    }
}
