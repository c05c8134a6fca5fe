use crate::draw::MenuLayout;
use crate::error::EmitError;

/// Turns a finished layout into an output format.
///
/// Emitters only ever see complete layouts; a failed pagination run
/// never reaches them.
pub trait Emitter {
    type Output;

    fn emit(self, layout: &MenuLayout) -> Result<Self::Output, EmitError>;
}
