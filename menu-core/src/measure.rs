//! Text measurement: the engine's only view of glyph metrics.
//!
//! All lengths are inches. Font sizes in [`FontSpec`] are points.

use crate::error::MeasureError;
use crate::fonts::{char_width, FontSpec, LINE_HEIGHT_FACTOR, POINTS_PER_INCH};

/// Sizes strings for the layout engine.
///
/// Calls are synchronous and must be deterministic: the same input
/// always yields the same answer, or pagination is not reproducible.
pub trait TextMeasurer {
    /// Rendered width of `text` on one line.
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64, MeasureError>;

    /// Distance between consecutive baselines.
    fn line_height(&self, font: &FontSpec) -> f64;

    /// Break `text` into visual lines no wider than `max_width`.
    /// Explicit newlines always break. Empty text yields no lines.
    fn wrap_to_width(
        &self,
        text: &str,
        font: &FontSpec,
        max_width: f64,
    ) -> Result<Vec<String>, MeasureError> {
        wrap_words(text, max_width, |s| self.measure_width(s, font))
    }
}

/// Greedy word wrap. Words wider than the line are split between
/// characters, always keeping at least one character per line.
pub fn wrap_words<F>(text: &str, max_width: f64, measure: F) -> Result<Vec<String>, MeasureError>
where
    F: Fn(&str) -> Result<f64, MeasureError>,
{
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return Ok(lines);
    }

    // Trailing newlines would open empty paragraphs at the end.
    for paragraph in text.trim_end().split('\n') {
        let mut line = String::new();
        let mut words = paragraph.split_whitespace().peekable();
        if words.peek().is_none() {
            lines.push(String::new());
            continue;
        }

        for word in words {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if measure(&candidate)? <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if measure(word)? <= max_width {
                line = word.to_string();
            } else {
                let mut pieces = break_word(word, max_width, &measure)?;
                // The tail stays open so following words can join it.
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}

/// Split a single over-wide word into pieces that fit.
fn break_word<F>(word: &str, max_width: f64, measure: &F) -> Result<Vec<String>, MeasureError>
where
    F: Fn(&str) -> Result<f64, MeasureError>,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if measure(&current)? > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    Ok(pieces)
}

/// Metrics of the standard PDF fonts, from the Adobe AFM tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl BuiltinMetrics {
    pub fn new() -> Self {
        BuiltinMetrics
    }
}

pub(crate) fn check_size(font: &FontSpec) -> Result<(), MeasureError> {
    if font.size.is_finite() && font.size > 0.0 {
        Ok(())
    } else {
        Err(MeasureError::InvalidFontSize(font.size))
    }
}

impl TextMeasurer for BuiltinMetrics {
    fn measure_width(&self, text: &str, font: &FontSpec) -> Result<f64, MeasureError> {
        check_size(font)?;
        let units: u32 = text.chars().map(|ch| char_width(font.font, ch) as u32).sum();
        Ok(units as f64 * font.size / 1000.0 / POINTS_PER_INCH)
    }

    fn line_height(&self, font: &FontSpec) -> f64 {
        font.size * LINE_HEIGHT_FACTOR / POINTS_PER_INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::BuiltinFont;

    /// Every character is 1 unit wide.
    fn unit_width(s: &str) -> Result<f64, MeasureError> {
        Ok(s.chars().count() as f64)
    }

    #[test]
    fn wraps_greedily_on_spaces() {
        let lines = wrap_words("aa bb cc dd", 5.0, unit_width).unwrap();
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn newline_forces_break() {
        let lines = wrap_words("one\ntwo", 100.0, unit_width).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn trailing_newlines_are_ignored() {
        let lines = wrap_words("Fresh\n\n", 100.0, unit_width).unwrap();
        assert_eq!(lines, vec!["Fresh"]);
        let lines = wrap_words("a\n\nb", 100.0, unit_width).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_words("", 10.0, unit_width).unwrap().is_empty());
        assert!(wrap_words("   ", 10.0, unit_width).unwrap().is_empty());
    }

    #[test]
    fn long_word_is_split() {
        let lines = wrap_words("abcdefgh ij", 3.0, unit_width).unwrap();
        assert_eq!(lines, vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn split_tail_keeps_accepting_words() {
        let lines = wrap_words("abcde f", 4.0, unit_width).unwrap();
        assert_eq!(lines, vec!["abcd", "e f"]);
    }

    #[test]
    fn builtin_width_in_inches() {
        let m = BuiltinMetrics::new();
        let font = FontSpec::new(BuiltinFont::Courier, 12.0);
        // 10 chars * 600/1000 * 12pt = 72pt = 1in
        let w = m.measure_width("0123456789", &font).unwrap();
        assert!((w - 1.0).abs() < 1e-9);
        assert!((m.line_height(&font) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn builtin_rejects_zero_size() {
        let m = BuiltinMetrics::new();
        let font = FontSpec::new(BuiltinFont::Helvetica, 0.0);
        assert_eq!(
            m.measure_width("x", &font),
            Err(MeasureError::InvalidFontSize(0.0))
        );
    }

    #[test]
    fn builtin_wrap_fits_width() {
        let m = BuiltinMetrics::new();
        let font = FontSpec::new(BuiltinFont::TimesRoman, 12.0);
        let text = "Nuestro delicioso plato está preparado con los mejores ingredientes";
        let lines = m.wrap_to_width(text, &font, 2.0).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(m.measure_width(line, &font).unwrap() <= 2.0);
        }
        assert_eq!(lines.join(" "), text);
    }
}
