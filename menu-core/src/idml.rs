//! Simplified InDesign package XML.
//!
//! One `Spread` per page, a `TextFrame` per text run and a `Rectangle`
//! per image placeholder, all in points from the top-left corner.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::draw::{DrawKind, MenuLayout, TextRole};
use crate::emit::Emitter;
use crate::error::EmitError;
use crate::fonts::POINTS_PER_INCH;
use crate::objects::format_number;

const PACKAGE_NS: &str = "http://ns.adobe.com/AdobeInDesign/idml/1.0/packaging";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

pub struct IdmlEmitter<W: Write> {
    writer: Writer<W>,
    creator: String,
    /// Replaces the standard face names when the layout was measured
    /// with a TrueType font.
    font_family: Option<String>,
}

impl IdmlEmitter<Vec<u8>> {
    /// Emitter writing indented XML into memory.
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> IdmlEmitter<W> {
    pub fn new(out: W) -> Self {
        IdmlEmitter {
            writer: Writer::new_with_indent(out, b' ', 2),
            creator: "menu-core".to_string(),
            font_family: None,
        }
    }

    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creator = creator.to_string();
        self
    }

    /// Apply one font family to every text frame, e.g. the family of
    /// the TrueType font used for measuring.
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = Some(family.to_string());
        self
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), EmitError> {
        let mut tag = BytesStart::new(name);
        for (k, v) in attrs {
            tag.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Start(tag))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), EmitError> {
        let mut tag = BytesStart::new(name);
        for (k, v) in attrs {
            tag.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Empty(tag))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), EmitError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), EmitError> {
        self.start(name, &[])?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn metadata(&mut self, title: &str) -> Result<(), EmitError> {
        self.start("idPkg:Metadata", &[])?;
        self.start("x:xmpmeta", &[("xmlns:x", "adobe:ns:meta/")])?;
        self.start("rdf:RDF", &[("xmlns:rdf", RDF_NS)])?;
        self.start("rdf:Description", &[("rdf:about", ""), ("xmlns:dc", DC_NS)])?;
        self.text_element("dc:title", &format!("{} Menu", title))?;
        let creator = self.creator.clone();
        self.text_element("dc:creator", &creator)?;
        self.end("rdf:Description")?;
        self.end("rdf:RDF")?;
        self.end("x:xmpmeta")?;
        self.end("idPkg:Metadata")
    }
}

fn pt(inches: f64) -> String {
    format_number(inches * POINTS_PER_INCH)
}

fn style_name(role: TextRole) -> &'static str {
    match role {
        TextRole::DocumentTitle => "MenuTitle",
        TextRole::DocumentDescription => "MenuDescription",
        TextRole::SectionTitle => "SectionTitle",
        TextRole::ItemName => "ItemName",
        TextRole::ItemDescription => "ItemDescription",
        TextRole::Price => "Price",
        TextRole::ImageCaption => "ImageCaption",
    }
}

impl<W: Write> Emitter for IdmlEmitter<W> {
    type Output = W;

    fn emit(mut self, layout: &MenuLayout) -> Result<W, EmitError> {
        self.writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;
        self.start("idPkg:Package", &[("xmlns:idPkg", PACKAGE_NS)])?;
        self.metadata(&layout.title.en)?;

        let width = pt(layout.frame.page_width);
        let height = pt(layout.frame.page_height);
        let columns = layout.frame.columns.to_string();

        for page in &layout.pages {
            let page_id = format!("page{}", page.index + 1);
            self.start("Spread", &[("Self", format!("spread{}", page.index + 1).as_str())])?;
            self.start(
                "Page",
                &[
                    ("Self", page_id.as_str()),
                    ("Name", (page.index + 1).to_string().as_str()),
                    ("Width", width.as_str()),
                    ("Height", height.as_str()),
                    ("ColumnCount", columns.as_str()),
                ],
            )?;

            for (n, instruction) in page.instructions.iter().enumerate() {
                let id = format!("{}_{}", page_id, n + 1);
                match &instruction.kind {
                    DrawKind::Text(run) => {
                        let language = run.language.map(|l| l.code()).unwrap_or("");
                        let font = match &self.font_family {
                            Some(family) => family.clone(),
                            None => run.font.font.base_name().to_string(),
                        };
                        self.start(
                            "TextFrame",
                            &[
                                ("Self", id.as_str()),
                                ("Column", instruction.column.to_string().as_str()),
                                ("X", pt(run.x).as_str()),
                                ("Y", pt(run.y).as_str()),
                                ("AppliedParagraphStyle", style_name(run.role)),
                                ("AppliedFont", font.as_str()),
                                ("PointSize", format_number(run.font.size).as_str()),
                                ("Language", language),
                            ],
                        )?;
                        self.text_element("Content", &run.text)?;
                        self.end("TextFrame")?;
                    }
                    DrawKind::Image(image) => {
                        self.start(
                            "Rectangle",
                            &[
                                ("Self", id.as_str()),
                                ("Column", instruction.column.to_string().as_str()),
                                ("X", pt(image.x).as_str()),
                                ("Y", pt(image.y).as_str()),
                                ("Width", pt(image.width).as_str()),
                                ("Height", pt(image.height).as_str()),
                            ],
                        )?;
                        self.empty("Link", &[("LinkResourceURI", image.reference.as_str())])?;
                        self.text_element("Label", &image.label)?;
                        self.end("Rectangle")?;
                    }
                    DrawKind::Rule(rule) => self.empty(
                        "GraphicLine",
                        &[
                            ("Self", id.as_str()),
                            ("X1", pt(rule.x).as_str()),
                            ("Y1", pt(rule.y).as_str()),
                            ("X2", pt(rule.x + rule.width).as_str()),
                            ("Y2", pt(rule.y).as_str()),
                        ],
                    )?,
                    DrawKind::Frame(frame) => self.empty(
                        "Rectangle",
                        &[
                            ("Self", id.as_str()),
                            ("X", pt(frame.x).as_str()),
                            ("Y", pt(frame.y).as_str()),
                            ("Width", pt(frame.width).as_str()),
                            ("Height", pt(frame.height).as_str()),
                            ("FillColor", "None"),
                        ],
                    )?,
                    DrawKind::Leader(leader) => self.empty(
                        "GraphicLine",
                        &[
                            ("Self", id.as_str()),
                            ("X1", pt(leader.x_start).as_str()),
                            ("Y1", pt(leader.baseline).as_str()),
                            ("X2", pt(leader.x_end).as_str()),
                            ("Y2", pt(leader.baseline).as_str()),
                            ("StrokeType", "Dotted"),
                        ],
                    )?,
                }
            }

            self.end("Page")?;
            self.end("Spread")?;
        }

        self.end("idPkg:Package")?;
        log::debug!("wrote {} spread(s) of IDML", layout.pages.len());

        let mut out = self.writer.into_inner();
        out.flush()?;
        Ok(out)
    }
}
