use std::collections::{BTreeMap, BTreeSet};

use crate::error::MeasureError;
use crate::fonts::{FontSpec, POINTS_PER_INCH};
use crate::measure::{check_size, TextMeasurer};
use crate::objects::PdfObject;

/// A user-supplied TrueType face, used both to measure text and to
/// draw it.
///
/// One face serves every [`FontSpec`]; only its size is used, so bold
/// and italic roles are set in the same face. Hand the same value to
/// [`PdfEmitter::with_truetype`](crate::PdfEmitter::with_truetype) so
/// the drawn glyphs are the ones that were measured. Characters the
/// font has no glyph for fail measurement rather than silently using
/// the notdef width.
#[derive(Debug, Clone)]
pub struct TrueTypeFont {
    family: String,
    postscript_name: String,
    font_data: Vec<u8>,
    units_per_em: u16,
    ascent: i16,
    descent: i16,
    line_gap: i16,
    bbox: [i16; 4],
    cap_height: i16,
    italic_angle: f64,
    flags: u32,
    stem_v: i16,
    /// Unicode codepoint -> glyph ID
    cmap: BTreeMap<u32, u16>,
    /// Glyph ID -> advance width in font units
    glyph_widths: BTreeMap<u16, u16>,
    /// Glyph ID -> Unicode codepoint, for the ToUnicode CMap
    glyph_to_unicode: BTreeMap<u16, u32>,
}

impl TrueTypeFont {
    /// Parse a `.ttf` file. The bytes are kept for embedding.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, MeasureError> {
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| MeasureError::FontParse(e.to_string()))?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(MeasureError::FontParse("units per em is zero".to_string()));
        }

        let subtables = face
            .tables()
            .cmap
            .ok_or_else(|| MeasureError::FontParse("font has no cmap table".to_string()))?;

        let mut cmap = BTreeMap::new();
        let mut glyph_to_unicode = BTreeMap::new();
        for subtable in subtables.subtables {
            if !subtable.is_unicode() {
                continue;
            }
            subtable.codepoints(|cp| {
                if let Some(gid) = subtable.glyph_index(cp) {
                    cmap.entry(cp).or_insert(gid.0);
                    glyph_to_unicode.entry(gid.0).or_insert(cp);
                }
            });
        }

        let mut glyph_widths = BTreeMap::new();
        for gid in 0..face.number_of_glyphs() {
            let width = face.glyph_hor_advance(ttf_parser::GlyphId(gid)).unwrap_or(0);
            glyph_widths.insert(gid, width);
        }

        let family = find_name(&face, ttf_parser::name_id::FAMILY)
            .unwrap_or_else(|| "Unknown".to_string());
        let postscript_name = find_name(&face, ttf_parser::name_id::POST_SCRIPT_NAME)
            .unwrap_or_else(|| family.replace(' ', ""));

        let ascent = face.ascender();
        let descent = face.descender();
        let line_gap = face.line_gap();
        let bbox = face.global_bounding_box();
        let cap_height = face.capital_height().unwrap_or(ascent);
        let italic_angle = face.italic_angle() as f64;
        let flags = descriptor_flags(&face);
        let stem_v = estimate_stem_v(&face);

        log::debug!(
            "loaded TrueType font {} ({} mapped codepoints)",
            family,
            cmap.len()
        );

        Ok(TrueTypeFont {
            family,
            postscript_name,
            font_data: data,
            units_per_em,
            ascent,
            descent,
            line_gap,
            bbox: [bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max],
            cap_height,
            italic_angle,
            flags,
            stem_v,
            cmap,
            glyph_widths,
            glyph_to_unicode,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    fn advance(&self, ch: char) -> Result<u16, MeasureError> {
        let gid = self
            .cmap
            .get(&(ch as u32))
            .ok_or(MeasureError::MissingGlyph { ch })?;
        Ok(self.glyph_widths.get(gid).copied().unwrap_or(0))
    }

    /// Font units to PDF glyph space (1/1000 em).
    fn to_pdf_units(&self, value: i32) -> i64 {
        value as i64 * 1000 / self.units_per_em as i64
    }

    fn glyph_width_pdf(&self, gid: u16) -> i64 {
        self.to_pdf_units(self.glyph_widths.get(&gid).copied().unwrap_or(0) as i32)
    }

    /// Hex string of glyph IDs for an `Identity-H` font, e.g.
    /// `<0048004C>`. Every glyph written is recorded in `used`.
    pub(crate) fn encode_hex(&self, text: &str, used: &mut BTreeSet<u16>) -> String {
        let mut hex = String::with_capacity(text.len() * 4 + 2);
        hex.push('<');
        for ch in text.chars() {
            let gid = self.cmap.get(&(ch as u32)).copied().unwrap_or(0);
            used.insert(gid);
            hex.push_str(&format!("{:04X}", gid));
        }
        hex.push('>');
        hex
    }

    /// The `/W` array for the used glyphs, runs of consecutive IDs
    /// sharing one entry: `[first [w1 w2 ...] first [...] ...]`.
    pub(crate) fn width_array(&self, used: &BTreeSet<u16>) -> Vec<PdfObject> {
        let mut result = Vec::new();
        let mut run: Vec<PdfObject> = Vec::new();
        let mut run_start = 0u16;
        let mut prev: Option<u16> = None;

        for &gid in used {
            if prev.and_then(|p| p.checked_add(1)) != Some(gid) && !run.is_empty() {
                result.push(PdfObject::Integer(run_start as i64));
                result.push(PdfObject::Array(std::mem::take(&mut run)));
            }
            if run.is_empty() {
                run_start = gid;
            }
            run.push(PdfObject::Integer(self.glyph_width_pdf(gid)));
            prev = Some(gid);
        }
        if !run.is_empty() {
            result.push(PdfObject::Integer(run_start as i64));
            result.push(PdfObject::Array(run));
        }
        result
    }

    /// ToUnicode CMap so viewers can copy and search the text.
    pub(crate) fn to_unicode_cmap(&self, used: &BTreeSet<u16>) -> Vec<u8> {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mappings: Vec<(u16, u32)> = used
            .iter()
            .filter_map(|gid| self.glyph_to_unicode.get(gid).map(|&cp| (*gid, cp)))
            .collect();
        // At most 100 entries per bfchar block.
        for chunk in mappings.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
            for &(gid, cp) in chunk {
                cmap.push_str(&format!("<{:04X}> <{}>\n", gid, utf16_hex(cp)));
            }
            cmap.push_str("endbfchar\n");
        }

        cmap.push_str(
            "endcmap\n\
             CMapName currentdict /CMap defineresource pop\n\
             end\n\
             end\n",
        );
        cmap.into_bytes()
    }

    /// `/FontDescriptor` entries, without the `/FontFile2` reference.
    pub(crate) fn descriptor_entries(&self) -> Vec<(&'static str, PdfObject)> {
        let bbox = self
            .bbox
            .iter()
            .map(|&v| PdfObject::Integer(self.to_pdf_units(v as i32)))
            .collect();
        vec![
            ("Type", PdfObject::name("FontDescriptor")),
            ("FontName", PdfObject::name(&self.postscript_name)),
            ("Flags", PdfObject::Integer(self.flags as i64)),
            ("FontBBox", PdfObject::Array(bbox)),
            ("ItalicAngle", PdfObject::Real(self.italic_angle)),
            ("Ascent", PdfObject::Integer(self.to_pdf_units(self.ascent as i32))),
            ("Descent", PdfObject::Integer(self.to_pdf_units(self.descent as i32))),
            ("CapHeight", PdfObject::Integer(self.to_pdf_units(self.cap_height as i32))),
            ("StemV", PdfObject::Integer(self.stem_v as i64)),
        ]
    }

    /// Width of the notdef glyph, the `/DW` of the CID font.
    pub(crate) fn default_width_pdf(&self) -> i64 {
        self.glyph_width_pdf(0)
    }

    pub(crate) fn font_data(&self) -> &[u8] {
        &self.font_data
    }
}

impl TextMeasurer for TrueTypeFont {
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64, MeasureError> {
        check_size(font)?;
        let mut units: u64 = 0;
        for ch in text.chars() {
            units += self.advance(ch)? as u64;
        }
        let points = units as f64 / self.units_per_em as f64 * font.size;
        Ok(points / POINTS_PER_INCH)
    }

    fn line_height(&self, font: &FontSpec) -> f64 {
        let extent = self.ascent as f64 - self.descent as f64 + self.line_gap as f64;
        extent / self.units_per_em as f64 * font.size / POINTS_PER_INCH
    }
}

fn find_name(face: &ttf_parser::Face, id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .find(|name| name.name_id == id && name.is_unicode())
        .and_then(|name| name.to_string())
}

/// PDF font descriptor flags: FixedPitch, Nonsymbolic, Italic.
fn descriptor_flags(face: &ttf_parser::Face) -> u32 {
    let mut flags = 32;
    if face.is_monospaced() {
        flags |= 1;
    }
    if face.is_italic() {
        flags |= 64;
    }
    flags
}

/// StemV approximated from the weight class.
fn estimate_stem_v(face: &ttf_parser::Face) -> i16 {
    let w = face.weight().to_number() as f64 / 1000.0;
    (10.0 + 220.0 * w * w) as i16
}

/// UTF-16BE hex for a codepoint, as a surrogate pair above the BMP.
fn utf16_hex(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(ch) => {
            let mut units = [0u16; 2];
            ch.encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{:04X}", u))
                .collect()
        }
        None => "FFFD".to_string(),
    }
}
