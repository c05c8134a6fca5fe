mod common;

use common::dinner_menu;
use menu_core::{
    BuiltinFont, DocumentAssembler, Emitter, FontSpec, IdmlEmitter, MeasureError, PdfEmitter,
    TextMeasurer, TextRole, TrueTypeFont,
};

const DEJAVU_SANS: &[u8] = include_bytes!("fixtures/DejaVuSans.ttf");

/// Helper: check that a byte pattern exists in the buffer.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn dejavu() -> TrueTypeFont {
    TrueTypeFont::from_bytes(DEJAVU_SANS.to_vec()).unwrap()
}

// ---- Font parsing and metrics ----

#[test]
fn parse_names() {
    let font = dejavu();
    assert_eq!(font.family(), "DejaVu Sans");
    assert_eq!(font.postscript_name(), "DejaVuSans");
}

#[test]
fn widths_follow_glyph_advances() {
    let font = dejavu();
    let spec = FontSpec::new(BuiltinFont::Helvetica, 12.0);
    let narrow = font.measure_width("iiii", &spec).unwrap();
    let wide = font.measure_width("WWWW", &spec).unwrap();
    assert!(narrow > 0.0 && narrow < wide);

    let doubled = FontSpec::new(BuiltinFont::Helvetica, 24.0);
    let twice = font.measure_width("iiii", &doubled).unwrap();
    assert!((twice - 2.0 * narrow).abs() < 1e-9);
}

#[test]
fn missing_glyph_fails_measurement() {
    let font = dejavu();
    let spec = FontSpec::new(BuiltinFont::Helvetica, 12.0);
    assert_eq!(
        font.measure_width("Té 中", &spec),
        Err(MeasureError::MissingGlyph { ch: '中' })
    );
}

// ---- Embedding ----

fn render_pdf(font: &TrueTypeFont) -> Vec<u8> {
    let layout = DocumentAssembler::new(font).assemble(&dinner_menu()).unwrap();
    PdfEmitter::new(Vec::new())
        .with_compression(false)
        .with_truetype(font.clone())
        .emit(&layout)
        .unwrap()
}

#[test]
fn measuring_font_is_embedded() {
    let bytes = render_pdf(&dejavu());

    assert!(contains(&bytes, b"/Subtype /Type0"));
    assert!(contains(&bytes, b"/Subtype /CIDFontType2"));
    assert!(contains(&bytes, b"/Encoding /Identity-H"));
    assert!(contains(&bytes, b"/Type /FontDescriptor"));
    assert!(contains(&bytes, b"/FontName /DejaVuSans"));
    assert!(contains(&bytes, b"/FontFile2"));
    assert!(contains(
        &bytes,
        format!("/Length1 {}", DEJAVU_SANS.len()).as_bytes()
    ));
    assert!(contains(&bytes, b"/W ["));
    assert!(contains(&bytes, b"/CIDToGIDMap /Identity"));
}

#[test]
fn standard_fonts_are_not_used() {
    let bytes = render_pdf(&dejavu());

    assert!(!contains(&bytes, b"/Subtype /Type1"));
    assert!(!contains(&bytes, b"/WinAnsiEncoding"));
    assert!(contains(&bytes, b"/F13 "));
    assert!(contains(&bytes, b"> Tj"));
}

#[test]
fn tounicode_cmap_present() {
    let bytes = render_pdf(&dejavu());

    assert!(contains(&bytes, b"/ToUnicode"));
    assert!(contains(&bytes, b"/CMapName /Adobe-Identity-UCS"));
    assert!(contains(&bytes, b"beginbfchar"));
    // The "ó" of "limón" maps back to U+00F3.
    assert!(contains(&bytes, b"> <00F3>"));
}

#[test]
fn price_ends_at_column_edge() {
    let font = dejavu();
    let layout = DocumentAssembler::new(&font)
        .assemble(&dinner_menu())
        .unwrap();

    let mut prices = 0;
    for instruction in layout.instructions() {
        let Some(run) = instruction.kind.as_text() else {
            continue;
        };
        if run.role != TextRole::Price {
            continue;
        }
        let width = font.measure_width(&run.text, &run.font).unwrap();
        let right = layout.frame.column_right(instruction.column);
        assert!((run.x + width - right).abs() < 1e-9);
        prices += 1;
    }
    assert_eq!(prices, 5);
}

#[test]
fn idml_names_the_truetype_family() {
    let font = dejavu();
    let layout = DocumentAssembler::new(&font)
        .assemble(&dinner_menu())
        .unwrap();
    let xml = IdmlEmitter::in_memory()
        .with_font_family(font.family())
        .emit(&layout)
        .unwrap();
    let xml = String::from_utf8(xml).unwrap();

    assert!(xml.contains(r#"AppliedFont="DejaVu Sans""#));
    assert!(!xml.contains(r#"AppliedFont="Times-Bold""#));
}
