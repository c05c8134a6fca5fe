use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::objects::{ObjId, PdfObject};

/// Streams indirect objects to a writer and records their byte
/// offsets for the cross-reference table.
pub struct PdfWriter<W: Write> {
    out: W,
    offset: usize,
    offsets: BTreeMap<u32, usize>,
}

impl<W: Write> PdfWriter<W> {
    /// Start a PDF 1.7 file: header plus the binary marker comment.
    pub fn start(out: W) -> io::Result<Self> {
        let mut writer = PdfWriter {
            out,
            offset: 0,
            offsets: BTreeMap::new(),
        };
        writer.emit(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n")?;
        Ok(writer)
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.offset += bytes.len();
        Ok(())
    }

    pub fn write_object(&mut self, id: ObjId, obj: &PdfObject) -> io::Result<()> {
        self.offsets.insert(id.0, self.offset);
        let mut buf = format!("{} 0 obj\n", id.0).into_bytes();
        obj.serialize(&mut buf);
        buf.extend_from_slice(b"\nendobj\n");
        self.emit(&buf)
    }

    /// Write the xref table and trailer and return the inner writer.
    /// Unused object numbers get free entries.
    pub fn finish(mut self, root: ObjId, info: Option<ObjId>) -> io::Result<W> {
        let xref_at = self.offset;
        let size = self.offsets.keys().next_back().map_or(1, |max| max + 1);

        let mut table = format!("xref\n0 {}\n0000000000 65535 f\r\n", size);
        for num in 1..size {
            match self.offsets.get(&num) {
                Some(off) => table.push_str(&format!("{:010} 00000 n\r\n", off)),
                None => table.push_str("0000000000 00000 f\r\n"),
            }
        }
        table.push_str(&format!("trailer\n<< /Size {} /Root {} 0 R", size, root.0));
        if let Some(info) = info {
            table.push_str(&format!(" /Info {} 0 R", info.0));
        }
        table.push_str(&format!(" >>\nstartxref\n{}\n%%EOF\n", xref_at));

        self.emit(table.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_binary_marker() {
        let w = PdfWriter::start(Vec::new()).unwrap();
        let bytes = w.finish(ObjId(1), None).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7\n%"));
        assert!(bytes[10..14].iter().all(|b| *b >= 128));
    }

    #[test]
    fn xref_points_at_objects() {
        let mut w = PdfWriter::start(Vec::new()).unwrap();
        w.write_object(ObjId(1), &PdfObject::name("Catalog")).unwrap();
        w.write_object(ObjId(3), &PdfObject::Integer(7)).unwrap();
        let bytes = w.finish(ObjId(1), Some(ObjId(3))).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        let obj1 = text.find("1 0 obj").unwrap();
        assert!(text.contains(&format!("{:010} 00000 n\r\n", obj1)));
        // Object 2 was never written.
        assert!(text.contains("xref\n0 4\n0000000000 65535 f\r\n"));
        assert!(text.contains("/Size 4 /Root 1 0 R /Info 3 0 R"));
        assert!(text.ends_with("%%EOF\n"));
    }

    #[test]
    fn xref_entries_are_twenty_bytes() {
        let mut w = PdfWriter::start(Vec::new()).unwrap();
        w.write_object(ObjId(1), &PdfObject::Integer(1)).unwrap();
        let bytes = w.finish(ObjId(1), None).unwrap();
        let start = bytes
            .windows(9)
            .position(|win| win == b"xref\n0 2\n")
            .unwrap()
            + 9;
        assert_eq!(&bytes[start + 18..start + 20], b"\r\n");
        assert_eq!(&bytes[start + 38..start + 40], b"\r\n");
    }
}
