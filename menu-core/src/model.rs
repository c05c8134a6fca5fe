//! The menu document handed to the layout engine.
//!
//! Field names follow the JSON the menu editor saves, so a saved menu
//! loads directly with [`MenuDocument::from_json`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fonts::FontFamily;
use crate::graphics::Color;

/// The two content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text with an English and a Spanish variant. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub es: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        LocalizedText {
            en: en.into(),
            es: es.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }

    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        match language {
            Language::En => self.en = text.into(),
            Language::Es => self.es = text.into(),
        }
    }
}

/// Which languages an export shows. Never empty: switching off the
/// last enabled language is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LanguageFlags", into = "LanguageFlags")]
pub struct DisplayLanguageSet {
    en: bool,
    es: bool,
}

/// Raw `{ "en": bool, "es": bool }` form of a [`DisplayLanguageSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFlags {
    pub en: bool,
    pub es: bool,
}

impl TryFrom<LanguageFlags> for DisplayLanguageSet {
    type Error = String;

    fn try_from(flags: LanguageFlags) -> Result<Self, Self::Error> {
        if !flags.en && !flags.es {
            return Err("at least one display language must be enabled".to_string());
        }
        Ok(DisplayLanguageSet {
            en: flags.en,
            es: flags.es,
        })
    }
}

impl From<DisplayLanguageSet> for LanguageFlags {
    fn from(set: DisplayLanguageSet) -> Self {
        LanguageFlags {
            en: set.en,
            es: set.es,
        }
    }
}

impl Default for DisplayLanguageSet {
    fn default() -> Self {
        DisplayLanguageSet::bilingual()
    }
}

impl DisplayLanguageSet {
    pub fn english_only() -> Self {
        DisplayLanguageSet { en: true, es: false }
    }

    pub fn spanish_only() -> Self {
        DisplayLanguageSet { en: false, es: true }
    }

    pub fn bilingual() -> Self {
        DisplayLanguageSet { en: true, es: true }
    }

    pub fn contains(&self, language: Language) -> bool {
        match language {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }

    pub fn is_bilingual(&self) -> bool {
        self.en && self.es
    }

    /// Enable or disable a language. Returns false, leaving the set
    /// untouched, when that would disable the last language.
    pub fn set(&mut self, language: Language, enabled: bool) -> bool {
        if !enabled && !self.contains(language.other()) {
            return false;
        }
        match language {
            Language::En => self.en = enabled,
            Language::Es => self.es = enabled,
        }
        true
    }

    /// Flip one language. Same no-op rule as [`set`](Self::set).
    pub fn toggle(&mut self, language: Language) -> bool {
        let enabled = self.contains(language);
        self.set(language, !enabled)
    }

    /// Enabled languages, English first.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        [Language::En, Language::Es]
            .into_iter()
            .filter(move |l| self.contains(*l))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    /// 8.5 × 11 in.
    #[default]
    #[serde(alias = "8.5x11", alias = "letter")]
    Letter,
    /// 11 × 17 in.
    #[serde(alias = "11x17", alias = "tabloid")]
    Tabloid,
    #[serde(alias = "a4")]
    A4,
    #[serde(alias = "a3")]
    A3,
}

impl PaperSize {
    /// Portrait (width, height) in inches.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::A4 => (8.27, 11.69),
            PaperSize::A3 => (11.69, 16.54),
        }
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(value: f64) -> Self {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(0.5)
    }
}

/// Requested page setup, before validation by
/// [`geometry::resolve`](crate::geometry::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub paper_size: PaperSize,
    pub columns: usize,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            orientation: Orientation::Portrait,
            paper_size: PaperSize::Letter,
            columns: 1,
            margins: Margins::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    #[default]
    Centered,
    LeftAligned,
    Underlined,
    Boxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStyle {
    #[default]
    Simple,
    Boxed,
    Separated,
}

/// Visual theme picked in the layout options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Titles, section headers, item names and prices.
    pub primary_color: Color,
    /// Descriptions.
    pub secondary_color: Color,
    pub font_family: FontFamily,
    pub header_style: HeaderStyle,
    pub item_style: ItemStyle,
    /// Dotted leader between an item name and its price.
    pub show_price_with_dots: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_color: Color::BLACK,
            secondary_color: Color::gray(0.4),
            font_family: FontFamily::Serif,
            header_style: HeaderStyle::Centered,
            item_style: ItemStyle::Simple,
            show_price_with_dots: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// Display text only; never parsed as an amount.
    #[serde(default)]
    pub price: String,
    /// Opaque image reference (URL or handle).
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    pub fn new(name: LocalizedText, price: impl Into<String>) -> Self {
        Item {
            name,
            price: price.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    pub fn with_image(mut self, reference: impl Into<String>) -> Self {
        self.image = Some(reference.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: Option<String>,
    pub title: LocalizedText,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(title: LocalizedText) -> Self {
        Section {
            title,
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// A complete menu: content plus the settings it is exported with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    #[serde(default)]
    pub id: Option<String>,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub layout: PageGeometry,
    #[serde(default)]
    pub display_languages: DisplayLanguageSet,
    #[serde(default)]
    pub theme: Theme,
}

impl MenuDocument {
    pub fn new(title: LocalizedText) -> Self {
        MenuDocument {
            title,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
