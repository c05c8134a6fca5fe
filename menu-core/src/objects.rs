use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::fonts::win_ansi_code;

/// Indirect object number. Generation is always 0 in files we write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub u32);

/// The subset of PDF object types the emitter writes.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Name without the leading `/`.
    Name(String),
    /// Literal string as raw bytes (WinAnsi / PDFDocEncoding).
    String(Vec<u8>),
    Array(Vec<PdfObject>),
    /// Entries keep insertion order so output is deterministic.
    Dictionary(Vec<(String, PdfObject)>),
    Stream {
        dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
    },
    Reference(ObjId),
}

impl PdfObject {
    pub fn name(s: &str) -> Self {
        PdfObject::Name(s.to_string())
    }

    /// Literal string, encoded one byte per character.
    pub fn text(s: &str) -> Self {
        PdfObject::String(encode_win_ansi(s))
    }

    pub fn dict<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, PdfObject)>,
    {
        PdfObject::Dictionary(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Content stream, Flate-compressed when `compress` is set.
    pub fn content_stream(data: Vec<u8>, compress: bool) -> std::io::Result<Self> {
        Self::stream(Vec::new(), data, compress)
    }

    /// Stream with extra dictionary entries. `/Filter` is added when
    /// compressing; `/Length` is written at serialization.
    pub fn stream(
        mut dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
        compress: bool,
    ) -> std::io::Result<Self> {
        if !compress {
            return Ok(PdfObject::Stream { dict, data });
        }
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&data)?;
        dict.insert(0, ("Filter".to_string(), PdfObject::name("FlateDecode")));
        Ok(PdfObject::Stream {
            dict,
            data: encoder.finish()?,
        })
    }

    /// Append the PDF syntax for this object to `out`.
    pub fn serialize(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            PdfObject::Real(v) => out.extend_from_slice(format_number(*v).as_bytes()),
            PdfObject::Name(name) => {
                out.push(b'/');
                out.extend_from_slice(name.as_bytes());
            }
            PdfObject::String(bytes) => {
                out.push(b'(');
                escape_into(bytes, out);
                out.push(b')');
            }
            PdfObject::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.serialize(out);
                }
                out.push(b']');
            }
            PdfObject::Dictionary(entries) => serialize_dict(entries, None, out),
            PdfObject::Stream { dict, data } => {
                serialize_dict(dict, Some(data.len()), out);
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(data);
                out.extend_from_slice(b"\nendstream");
            }
            PdfObject::Reference(id) => {
                out.extend_from_slice(format!("{} 0 R", id.0).as_bytes());
            }
        }
    }
}

fn serialize_dict(entries: &[(String, PdfObject)], length: Option<usize>, out: &mut Vec<u8>) {
    out.extend_from_slice(b"<<");
    for (key, value) in entries {
        out.extend_from_slice(b" /");
        out.extend_from_slice(key.as_bytes());
        out.push(b' ');
        value.serialize(out);
    }
    if let Some(len) = length {
        out.extend_from_slice(format!(" /Length {}", len).as_bytes());
    }
    out.extend_from_slice(b" >>");
}

/// One WinAnsi byte per character; characters the encoding lacks
/// become `?`.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|ch| win_ansi_code(ch).unwrap_or(b'?')).collect()
}

/// Escape the delimiters of a PDF literal string.
pub fn escape_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        match b {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
}

/// Number for PDF output: at most four decimals, no trailing zeros,
/// never scientific notation.
pub fn format_number(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
