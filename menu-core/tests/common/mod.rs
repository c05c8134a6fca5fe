#![allow(dead_code)]

use menu_core::{
    DisplayLanguageSet, FontSpec, Item, LayoutStyle, LocalizedText, MeasureError, MenuDocument,
    PageGeometry, Section, TextMeasurer,
};

/// Every character is `char_width` wide and every line `line_height`
/// tall, whatever the font.
pub struct FixedMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl FixedMeasurer {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        FixedMeasurer {
            char_width,
            line_height,
        }
    }
}

impl TextMeasurer for FixedMeasurer {
    fn measure_width(&self, text: &str, _font: &FontSpec) -> Result<f64, MeasureError> {
        Ok(text.chars().count() as f64 * self.char_width)
    }

    fn line_height(&self, _font: &FontSpec) -> f64 {
        self.line_height
    }
}

/// Fails on any text containing `bad`.
pub struct FailingMeasurer {
    pub bad: char,
}

impl TextMeasurer for FailingMeasurer {
    fn measure_width(&self, text: &str, _font: &FontSpec) -> Result<f64, MeasureError> {
        if text.contains(self.bad) {
            return Err(MeasureError::MissingGlyph { ch: self.bad });
        }
        Ok(text.chars().count() as f64 * 0.1)
    }

    fn line_height(&self, _font: &FontSpec) -> f64 {
        0.2
    }
}

/// No spacing between blocks, so heights add up exactly.
pub fn tight_style() -> LayoutStyle {
    LayoutStyle {
        item_spacing: 0.0,
        section_spacing: 0.0,
        header_spacing: 0.0,
        ..LayoutStyle::default()
    }
}

/// A menu with blank title and headers, so only item blocks take
/// room. Items are named "Dish 1", "Dish 2", ...
pub fn items_only(count: usize, columns: usize, languages: DisplayLanguageSet) -> MenuDocument {
    let mut section = Section::new(LocalizedText::default());
    for n in 1..=count {
        section.items.push(Item::new(
            LocalizedText::new(format!("Dish {}", n), format!("Plato {}", n)),
            "$5",
        ));
    }
    let mut doc = MenuDocument::new(LocalizedText::default());
    doc.sections.push(section);
    doc.layout = PageGeometry {
        columns,
        ..PageGeometry::default()
    };
    doc.display_languages = languages;
    doc
}

/// A realistic bilingual dinner menu.
pub fn dinner_menu() -> MenuDocument {
    let mut doc = MenuDocument::new(LocalizedText::new("Casa Lupita", "Casa Lupita"));
    doc.description = LocalizedText::new(
        "Family recipes from Oaxaca since 1987",
        "Recetas familiares de Oaxaca desde 1987",
    );
    doc.sections.push(
        Section::new(LocalizedText::new("Starters", "Entradas"))
            .with_item(
                Item::new(LocalizedText::new("Guacamole", "Guacamole"), "$9")
                    .with_description(LocalizedText::new(
                        "Avocado, lime, cilantro and serrano, with warm chips",
                        "Aguacate, limón, cilantro y serrano, con totopos calientes",
                    )),
            )
            .with_item(Item::new(
                LocalizedText::new("Tortilla Soup", "Sopa de Tortilla"),
                "$8",
            )),
    );
    doc.sections.push(
        Section::new(LocalizedText::new("Mains", "Platos Fuertes"))
            .with_item(
                Item::new(LocalizedText::new("Mole Negro", "Mole Negro"), "$22")
                    .with_description(LocalizedText::new(
                        "Chicken in a sauce of 30 ingredients",
                        "Pollo en salsa de 30 ingredientes",
                    ))
                    .with_image("images/mole.jpg"),
            )
            .with_item(Item::new(
                LocalizedText::new("Carne Asada", "Carne Asada"),
                "$26",
            ))
            .with_item(Item::new(LocalizedText::new("Fish Tacos", ""), "$18")),
    );
    doc.sections
        .push(Section::new(LocalizedText::new("Specials", "Especiales")));
    doc
}
