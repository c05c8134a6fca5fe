//! PDF output for a [`MenuLayout`].

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::draw::{DrawKind, Frame, ImagePlaceholder, Leader, MenuLayout, Rule, TextRun};
use crate::emit::Emitter;
use crate::error::EmitError;
use crate::fonts::{BuiltinFont, FontSpec, POINTS_PER_INCH};
use crate::geometry::PageFrame;
use crate::graphics::Color;
use crate::objects::{encode_win_ansi, escape_into, format_number, ObjId, PdfObject};
use crate::truetype::TrueTypeFont;
use crate::writer::PdfWriter;

const CATALOG_OBJ: ObjId = ObjId(1);
const PAGES_OBJ: ObjId = ObjId(2);
const FIRST_FREE_OBJ: u32 = 3;

/// Resource name of an embedded TrueType face, after the twelve
/// standard ones.
const EMBEDDED_FONT: &str = "F13";

/// Placeholder fill and border, the light grays of the editor preview.
const PLACEHOLDER_FILL: f64 = 240.0 / 255.0;
const PLACEHOLDER_STROKE: f64 = 200.0 / 255.0;

/// Writes a layout as PDF 1.7 using the standard Type1 fonts, or one
/// embedded TrueType face.
///
/// Generic over `Write`, so it targets files and in-memory buffers
/// alike. Content streams are Flate-compressed unless disabled.
pub struct PdfEmitter<W: Write> {
    out: W,
    compress: bool,
    info: Vec<(String, String)>,
    truetype: Option<TrueTypeFont>,
}

impl PdfEmitter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> PdfEmitter<W> {
    pub fn new(out: W) -> Self {
        PdfEmitter {
            out,
            compress: true,
            info: vec![("Creator".to_string(), "menu-core".to_string())],
            truetype: None,
        }
    }

    /// Draw every text run in `font`, embedded as a composite font.
    /// Pass the face the layout was measured with.
    pub fn with_truetype(mut self, font: TrueTypeFont) -> Self {
        self.truetype = Some(font);
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Add a document info entry such as "Author" or "Subject".
    pub fn set_info(mut self, key: &str, value: &str) -> Self {
        self.info.retain(|(k, _)| k != key);
        self.info.push((key.to_string(), value.to_string()));
        self
    }
}

impl<W: Write> Emitter for PdfEmitter<W> {
    type Output = W;

    fn emit(self, layout: &MenuLayout) -> Result<W, EmitError> {
        let PdfEmitter {
            out,
            compress,
            mut info,
            truetype,
        } = self;
        let mut writer = PdfWriter::start(out)?;
        let mut next = FIRST_FREE_OBJ;
        let mut alloc = || {
            let id = ObjId(next);
            next += 1;
            id
        };

        let mut font_entries = Vec::new();
        let embedded_id = match &truetype {
            Some(font) => {
                let id = alloc();
                font_entries.push((EMBEDDED_FONT, PdfObject::Reference(id)));
                log::debug!("embedding TrueType font {}", font.postscript_name());
                Some(id)
            }
            None => {
                for font in used_builtin_fonts(layout) {
                    let id = alloc();
                    writer.write_object(
                        id,
                        &PdfObject::dict([
                            ("Type", PdfObject::name("Font")),
                            ("Subtype", PdfObject::name("Type1")),
                            ("BaseFont", PdfObject::name(font.base_name())),
                            ("Encoding", PdfObject::name("WinAnsiEncoding")),
                        ]),
                    )?;
                    font_entries.push((font.resource_name(), PdfObject::Reference(id)));
                }
                None
            }
        };
        let resources = PdfObject::dict([("Font", PdfObject::dict(font_entries))]);

        let frame = &layout.frame;
        let media_box = PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(frame.page_width * POINTS_PER_INCH),
            PdfObject::Real(frame.page_height * POINTS_PER_INCH),
        ]);

        let mut used_glyphs = BTreeSet::new();
        let mut kids = Vec::with_capacity(layout.pages.len());
        for page in &layout.pages {
            let mut ops = ContentBuilder::new(frame, truetype.as_ref(), &mut used_glyphs);
            for instruction in &page.instructions {
                ops.draw(&instruction.kind, layout);
            }

            let content_id = alloc();
            writer.write_object(
                content_id,
                &PdfObject::content_stream(ops.finish(), compress)?,
            )?;

            let page_id = alloc();
            writer.write_object(
                page_id,
                &PdfObject::dict([
                    ("Type", PdfObject::name("Page")),
                    ("Parent", PdfObject::Reference(PAGES_OBJ)),
                    ("MediaBox", media_box.clone()),
                    ("Contents", PdfObject::Reference(content_id)),
                    ("Resources", resources.clone()),
                ]),
            )?;
            kids.push(PdfObject::Reference(page_id));
        }

        if let (Some(font), Some(type0_id)) = (&truetype, embedded_id) {
            write_embedded_font(
                &mut writer,
                font,
                &used_glyphs,
                type0_id,
                &mut alloc,
                compress,
            )?;
        }

        if !layout.title.en.is_empty() {
            info.insert(0, ("Title".to_string(), format!("{} Menu", layout.title.en)));
        }
        let info_id = alloc();
        writer.write_object(
            info_id,
            &PdfObject::dict(info.iter().map(|(k, v)| (k.as_str(), PdfObject::text(v)))),
        )?;

        let count = kids.len() as i64;
        writer.write_object(
            PAGES_OBJ,
            &PdfObject::dict([
                ("Type", PdfObject::name("Pages")),
                ("Kids", PdfObject::Array(kids)),
                ("Count", PdfObject::Integer(count)),
            ]),
        )?;
        writer.write_object(
            CATALOG_OBJ,
            &PdfObject::dict([
                ("Type", PdfObject::name("Catalog")),
                ("Pages", PdfObject::Reference(PAGES_OBJ)),
            ]),
        )?;

        log::debug!("wrote {} page(s) of PDF", count);
        Ok(writer.finish(CATALOG_OBJ, Some(info_id))?)
    }
}

/// Standard faces drawn anywhere in the layout, captions included.
fn used_builtin_fonts(layout: &MenuLayout) -> BTreeSet<BuiltinFont> {
    layout
        .instructions()
        .filter_map(|i| match &i.kind {
            DrawKind::Text(run) => Some(run.font.font),
            DrawKind::Image(image) => Some(image.caption_font.font),
            _ => None,
        })
        .collect()
}

/// Type0 font over an Identity-H CIDFontType2, with the whole `.ttf`
/// as `/FontFile2` and widths for the glyphs actually drawn.
fn write_embedded_font<W: Write>(
    writer: &mut PdfWriter<W>,
    font: &TrueTypeFont,
    used: &BTreeSet<u16>,
    type0_id: ObjId,
    alloc: &mut impl FnMut() -> ObjId,
    compress: bool,
) -> io::Result<()> {
    let data = font.font_data().to_vec();
    let file_id = alloc();
    writer.write_object(
        file_id,
        &PdfObject::stream(
            vec![("Length1".to_string(), PdfObject::Integer(data.len() as i64))],
            data,
            compress,
        )?,
    )?;

    let descriptor_id = alloc();
    let mut descriptor = font.descriptor_entries();
    descriptor.push(("FontFile2", PdfObject::Reference(file_id)));
    writer.write_object(descriptor_id, &PdfObject::dict(descriptor))?;

    let cid_id = alloc();
    writer.write_object(
        cid_id,
        &PdfObject::dict([
            ("Type", PdfObject::name("Font")),
            ("Subtype", PdfObject::name("CIDFontType2")),
            ("BaseFont", PdfObject::name(font.postscript_name())),
            (
                "CIDSystemInfo",
                PdfObject::dict([
                    ("Registry", PdfObject::text("Adobe")),
                    ("Ordering", PdfObject::text("Identity")),
                    ("Supplement", PdfObject::Integer(0)),
                ]),
            ),
            ("FontDescriptor", PdfObject::Reference(descriptor_id)),
            ("DW", PdfObject::Integer(font.default_width_pdf())),
            ("W", PdfObject::Array(font.width_array(used))),
            ("CIDToGIDMap", PdfObject::name("Identity")),
        ]),
    )?;

    let to_unicode_id = alloc();
    writer.write_object(
        to_unicode_id,
        &PdfObject::stream(Vec::new(), font.to_unicode_cmap(used), compress)?,
    )?;

    writer.write_object(
        type0_id,
        &PdfObject::dict([
            ("Type", PdfObject::name("Font")),
            ("Subtype", PdfObject::name("Type0")),
            ("BaseFont", PdfObject::name(font.postscript_name())),
            ("Encoding", PdfObject::name("Identity-H")),
            ("DescendantFonts", PdfObject::Array(vec![PdfObject::Reference(cid_id)])),
            ("ToUnicode", PdfObject::Reference(to_unicode_id)),
        ]),
    )
}

/// Builds one page's content stream. Converts from inches with a
/// top-left origin to points with PDF's bottom-left origin.
struct ContentBuilder<'a> {
    frame: &'a PageFrame,
    truetype: Option<&'a TrueTypeFont>,
    used_glyphs: &'a mut BTreeSet<u16>,
    ops: Vec<u8>,
}

impl<'a> ContentBuilder<'a> {
    fn new(
        frame: &'a PageFrame,
        truetype: Option<&'a TrueTypeFont>,
        used_glyphs: &'a mut BTreeSet<u16>,
    ) -> Self {
        ContentBuilder {
            frame,
            truetype,
            used_glyphs,
            ops: Vec::new(),
        }
    }

    fn x(&self, inches: f64) -> String {
        format_number(inches * POINTS_PER_INCH)
    }

    fn y(&self, inches_from_top: f64) -> String {
        format_number((self.frame.page_height - inches_from_top) * POINTS_PER_INCH)
    }

    fn len(&self, inches: f64) -> String {
        format_number(inches * POINTS_PER_INCH)
    }

    fn push(&mut self, s: &str) {
        self.ops.extend_from_slice(s.as_bytes());
    }

    fn color(c: &Color) -> String {
        format!(
            "{} {} {}",
            format_number(c.r),
            format_number(c.g),
            format_number(c.b)
        )
    }

    fn draw(&mut self, kind: &DrawKind, layout: &MenuLayout) {
        match kind {
            DrawKind::Text(run) => {
                let color = if run.role.is_primary() {
                    layout.theme.primary_color
                } else {
                    layout.theme.secondary_color
                };
                self.text(run, &color);
            }
            DrawKind::Image(image) => self.placeholder(image),
            DrawKind::Rule(rule) => self.rule(rule, &layout.theme.secondary_color),
            DrawKind::Frame(frame) => self.frame_rect(frame, &layout.theme.primary_color),
            DrawKind::Leader(leader) => self.leader(leader, &layout.theme.secondary_color),
        }
    }

    fn show_text(&mut self, text: &str, font: &FontSpec, x: f64, baseline: f64) {
        let resource = match self.truetype {
            Some(_) => EMBEDDED_FONT,
            None => font.font.resource_name(),
        };
        let head = format!(
            "BT\n/{} {} Tf\n{} {} Td\n",
            resource,
            format_number(font.size),
            self.x(x),
            self.y(baseline),
        );
        self.push(&head);
        match self.truetype {
            Some(tt) => {
                let hex = tt.encode_hex(text, self.used_glyphs);
                self.push(&hex);
            }
            None => {
                self.ops.push(b'(');
                escape_into(&encode_win_ansi(text), &mut self.ops);
                self.ops.push(b')');
            }
        }
        self.push(" Tj\nET\n");
    }

    fn text(&mut self, run: &TextRun, color: &Color) {
        self.push(&format!("{} rg\n", Self::color(color)));
        self.show_text(&run.text, &run.font, run.x, run.baseline);
    }

    fn placeholder(&mut self, image: &ImagePlaceholder) {
        let rect = format!(
            "q\n{} G\n{} g\n{} {} {} {} re\nB\n",
            format_number(PLACEHOLDER_STROKE),
            format_number(PLACEHOLDER_FILL),
            self.x(image.x),
            self.y(image.y + image.height),
            self.len(image.width),
            self.len(image.height),
        );
        self.push(&rect);
        self.push("0.4 g\n");
        self.show_text(
            &image.label,
            &image.caption_font,
            image.x + 0.1,
            image.y + image.height / 2.0,
        );
        self.push("Q\n");
    }

    fn rule(&mut self, rule: &Rule, color: &Color) {
        let ops = format!(
            "q\n{} RG\n0.75 w\n{} {} m\n{} {} l\nS\nQ\n",
            Self::color(color),
            self.x(rule.x),
            self.y(rule.y),
            self.x(rule.x + rule.width),
            self.y(rule.y),
        );
        self.push(&ops);
    }

    fn frame_rect(&mut self, frame: &Frame, color: &Color) {
        let ops = format!(
            "q\n{} RG\n0.75 w\n{} {} {} {} re\nS\nQ\n",
            Self::color(color),
            self.x(frame.x),
            self.y(frame.y + frame.height),
            self.len(frame.width),
            self.len(frame.height),
        );
        self.push(&ops);
    }

    fn leader(&mut self, leader: &Leader, color: &Color) {
        let ops = format!(
            "q\n{} RG\n[1 3] 0 d\n0.75 w\n{} {} m\n{} {} l\nS\nQ\n",
            Self::color(color),
            self.x(leader.x_start),
            self.y(leader.baseline),
            self.x(leader.x_end),
            self.y(leader.baseline),
        );
        self.push(&ops);
    }

    fn finish(self) -> Vec<u8> {
        self.ops
    }
}
