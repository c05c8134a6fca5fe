use crate::model::{DisplayLanguageSet, Language, LocalizedText};

/// Visual treatment for a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    /// Upright face.
    Primary,
    /// Italic face; the Spanish line of a bilingual pair.
    Secondary,
}

/// One language's line of an entity, before wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageLine<'a> {
    pub language: Language,
    pub text: &'a str,
    pub style: StyleHint,
}

/// Pick the visible language variants of `text`, English first.
///
/// Empty variants are dropped without reserving a line. Spanish lines
/// get [`StyleHint::Secondary`] when `italicize_secondary` is set.
pub fn render<'a>(
    text: &'a LocalizedText,
    languages: &DisplayLanguageSet,
    italicize_secondary: bool,
) -> Vec<LanguageLine<'a>> {
    languages
        .languages()
        .filter_map(|language| {
            let value = text.get(language);
            if value.trim().is_empty() {
                return None;
            }
            let style = if language == Language::Es && italicize_secondary {
                StyleHint::Secondary
            } else {
                StyleHint::Primary
            };
            Some(LanguageLine {
                language,
                text: value,
                style,
            })
        })
        .collect()
}
