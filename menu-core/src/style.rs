use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Type sizes and spacing used by the pagination engine.
///
/// Sizes are points, spacing is inches. Every field has a default, so
/// a partial TOML or JSON file overrides only what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub title_size: f64,
    pub section_size: f64,
    pub item_size: f64,
    pub description_size: f64,
    pub caption_size: f64,
    /// After every item.
    pub item_spacing: f64,
    /// After the last item of a section.
    pub section_spacing: f64,
    /// After the title and description.
    pub header_spacing: f64,
    /// Minimum room between an item name and its price.
    pub price_gap: f64,
    pub include_images: bool,
    pub image_height: f64,
    /// Placeholder width as a fraction of the column width.
    pub image_width_ratio: f64,
    /// Space below an image placeholder.
    pub image_gap: f64,
    /// Set Spanish lines in italic.
    pub italicize_secondary: bool,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        LayoutStyle {
            title_size: 24.0,
            section_size: 16.0,
            item_size: 12.0,
            description_size: 12.0,
            caption_size: 8.0,
            item_spacing: 0.1,
            section_spacing: 0.3,
            header_spacing: 0.2,
            price_gap: 0.1,
            include_images: true,
            image_height: 1.0,
            image_width_ratio: 0.8,
            image_gap: 0.2,
            italicize_secondary: true,
        }
    }
}

impl LayoutStyle {
    /// Reject values the flow cursor cannot honour: font sizes must be
    /// positive, spacing must not move the cursor back up the column.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let sizes = [
            ("title_size", self.title_size),
            ("section_size", self.section_size),
            ("item_size", self.item_size),
            ("description_size", self.description_size),
            ("caption_size", self.caption_size),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidStyle(format!(
                    "{} must be a positive number of points, got {}",
                    name, value
                )));
            }
        }

        let lengths = [
            ("item_spacing", self.item_spacing),
            ("section_spacing", self.section_spacing),
            ("header_spacing", self.header_spacing),
            ("price_gap", self.price_gap),
            ("image_height", self.image_height),
            ("image_gap", self.image_gap),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidStyle(format!(
                    "{} must be zero or more inches, got {}",
                    name, value
                )));
            }
        }

        let ratio = self.image_width_ratio;
        if !(ratio.is_finite() && ratio > 0.0 && ratio <= 1.0) {
            return Err(LayoutError::InvalidStyle(format!(
                "image_width_ratio must be in (0, 1], got {}",
                ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_valid() {
        assert_eq!(LayoutStyle::default().validate(), Ok(()));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let style = LayoutStyle {
            item_spacing: -1.0,
            ..LayoutStyle::default()
        };
        let err = style.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidStyle(ref msg) if msg.contains("item_spacing")));
    }

    #[test]
    fn nan_and_zero_sizes_are_rejected() {
        for style in [
            LayoutStyle {
                image_gap: f64::NAN,
                ..LayoutStyle::default()
            },
            LayoutStyle {
                caption_size: 0.0,
                ..LayoutStyle::default()
            },
            LayoutStyle {
                image_width_ratio: 1.5,
                ..LayoutStyle::default()
            },
        ] {
            assert!(matches!(style.validate(), Err(LayoutError::InvalidStyle(_))));
        }
    }

    #[test]
    fn zero_spacing_is_allowed() {
        let style = LayoutStyle {
            item_spacing: 0.0,
            section_spacing: 0.0,
            header_spacing: 0.0,
            image_gap: 0.0,
            ..LayoutStyle::default()
        };
        assert_eq!(style.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let style: LayoutStyle =
            serde_json::from_str(r#"{ "item_spacing": 0.0, "include_images": false }"#).unwrap();
        assert_eq!(style.item_spacing, 0.0);
        assert!(!style.include_images);
        assert_eq!(style.title_size, 24.0);
    }
}
