use std::fmt;
use std::io;

use thiserror::Error;

/// Failure of a measurement adapter to size a string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f64),

    #[error("font has no glyph for {ch:?}")]
    MissingGlyph { ch: char },

    #[error("failed to parse font: {0}")]
    FontParse(String),
}

/// Fatal errors of a pagination run. A run that returns one of these
/// produces no pages at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid layout style: {0}")]
    InvalidStyle(String),

    #[error("menu has no sections")]
    EmptyDocument,

    #[error("could not measure {text:?}")]
    Measurement {
        text: String,
        #[source]
        source: MeasureError,
    },

    #[error("layout cancelled")]
    Cancelled,
}

/// Failure while turning a finished layout into an output format.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Either half of an export can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// A block taller than a whole column, placed anyway at the top of a
/// fresh column. The rendered block runs past the bottom margin.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowWarning {
    pub page: usize,
    pub column: usize,
    /// What was placed, e.g. `item "Paella"`.
    pub block: String,
    pub height: f64,
    pub available: f64,
}

impl fmt::Display for OverflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {:.2}in tall but a column holds {:.2}in (page {}, column {})",
            self.block,
            self.height,
            self.available,
            self.page + 1,
            self.column + 1,
        )
    }
}
