use std::sync::atomic::AtomicBool;

use crate::draw::MenuLayout;
use crate::emit::Emitter;
use crate::engine::Paginator;
use crate::error::{Error, LayoutError, OverflowWarning};
use crate::geometry;
use crate::measure::TextMeasurer;
use crate::model::MenuDocument;
use crate::style::LayoutStyle;

/// Result of [`DocumentAssembler::export`]: the emitter's output plus
/// any non-fatal diagnostics from the layout.
#[derive(Debug)]
pub struct Export<T> {
    pub output: T,
    pub page_count: usize,
    pub warnings: Vec<OverflowWarning>,
}

/// Top-level driver: validates the page geometry and style, paginates
/// the whole menu and hands the finished layout to an emitter.
pub struct DocumentAssembler<'m, M: TextMeasurer + ?Sized> {
    measurer: &'m M,
    style: LayoutStyle,
}

impl<'m, M: TextMeasurer + ?Sized> DocumentAssembler<'m, M> {
    pub fn new(measurer: &'m M) -> Self {
        DocumentAssembler {
            measurer,
            style: LayoutStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Lay out `doc`. On error nothing is returned, never a partial
    /// set of pages.
    pub fn assemble(&self, doc: &MenuDocument) -> Result<MenuLayout, LayoutError> {
        self.run(doc, None)
    }

    /// Like [`assemble`](Self::assemble), stopping with
    /// [`LayoutError::Cancelled`] at the next section boundary once
    /// `cancel` is set.
    pub fn assemble_with_cancel(
        &self,
        doc: &MenuDocument,
        cancel: &AtomicBool,
    ) -> Result<MenuLayout, LayoutError> {
        self.run(doc, Some(cancel))
    }

    /// Lay out `doc` and emit it.
    pub fn export<E: Emitter>(
        &self,
        doc: &MenuDocument,
        emitter: E,
    ) -> Result<Export<E::Output>, Error> {
        let layout = self.assemble(doc)?;
        let output = emitter.emit(&layout)?;
        Ok(Export {
            output,
            page_count: layout.page_count(),
            warnings: layout.warnings,
        })
    }

    fn run(
        &self,
        doc: &MenuDocument,
        cancel: Option<&AtomicBool>,
    ) -> Result<MenuLayout, LayoutError> {
        let frame = geometry::resolve(&doc.layout)?;
        self.style.validate()?;
        if doc.sections.is_empty() {
            return Err(LayoutError::EmptyDocument);
        }

        log::debug!(
            "page {:.2}x{:.2}in, {} column(s) of {:.2}in, languages {:?}",
            frame.page_width,
            frame.page_height,
            frame.columns,
            frame.column_width,
            doc.display_languages.languages().collect::<Vec<_>>()
        );

        let paginator = Paginator::new(
            self.measurer,
            &frame,
            &self.style,
            &doc.theme,
            doc.display_languages,
        );
        paginator.paginate(&doc.title, &doc.blocks(), cancel)
    }
}
