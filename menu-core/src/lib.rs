pub mod assembler;
pub mod bilingual;
pub mod describe;
pub mod draw;
pub mod emit;
pub mod engine;
pub mod error;
pub mod flow;
pub mod fonts;
pub mod geometry;
pub mod graphics;
pub mod idml;
pub mod measure;
pub mod model;
pub mod objects;
pub mod pdf;
pub mod style;
pub mod truetype;
pub mod writer;

pub use assembler::{DocumentAssembler, Export};
pub use bilingual::{LanguageLine, StyleHint};
pub use describe::FoodCategory;
pub use draw::{BlockKind, DrawInstruction, DrawKind, MenuLayout, TextRole, TextRun};
pub use emit::Emitter;
pub use engine::{Block, Paginator};
pub use error::{EmitError, Error, LayoutError, MeasureError, OverflowWarning};
pub use fonts::{BuiltinFont, FontFamily, FontSpec};
pub use geometry::PageFrame;
pub use graphics::Color;
pub use idml::IdmlEmitter;
pub use measure::{BuiltinMetrics, TextMeasurer};
pub use model::{
    DisplayLanguageSet, HeaderStyle, Item, ItemStyle, Language, LocalizedText, Margins,
    MenuDocument, Orientation, PageGeometry, PaperSize, Section, Theme,
};
pub use pdf::PdfEmitter;
pub use style::LayoutStyle;
pub use truetype::TrueTypeFont;
