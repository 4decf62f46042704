// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::{smallvec, SmallVec};

use super::types::{FontStyle, FontWeight, TextAlign, TextDirection, TextHeightBehavior};
use super::{Brush, TextStyle};

/// Paragraph-level style, constructed exactly once per builder instance.
#[derive(Clone, PartialEq, Debug)]
pub struct ParagraphStyle {
    /// Horizontal alignment of the paragraph's lines.
    pub text_align: TextAlign,
    /// Base writing direction.
    pub text_direction: TextDirection,
    /// Default font weight for the paragraph.
    pub font_weight: FontWeight,
    /// Default font slant for the paragraph.
    pub font_style: FontStyle,
    /// Maximum number of lines, or `None` for no limit.
    pub max_lines: Option<u32>,
    /// How line-height multipliers apply to the first and last lines.
    pub text_height_behavior: TextHeightBehavior,
    /// Default font family; empty means the platform default.
    pub font_family: String,
    /// Default font size in pixels.
    pub font_size: f32,
    /// Line height, as a multiplier of the font size.
    pub height: f32,
    /// Whether `height` was explicitly set rather than left to the font.
    pub height_override: bool,
    /// Minimum line-box strut, when supplied by the caller.
    ///
    /// `None` means the strut buffer was absent entirely, not merely
    /// disabled.
    pub strut: Option<StrutStyle>,
    /// Overflow ellipsis string.
    pub ellipsis: Option<String>,
    /// BCP-47 locale for locale-specific glyph selection.
    pub locale: Option<String>,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            text_align: TextAlign::Left,
            text_direction: TextDirection::Ltr,
            font_weight: FontWeight::W400,
            font_style: FontStyle::Normal,
            max_lines: None,
            text_height_behavior: TextHeightBehavior::default(),
            font_family: String::new(),
            font_size: 14.0,
            height: 1.0,
            height_override: false,
            strut: None,
            ellipsis: None,
            locale: None,
        }
    }
}

impl ParagraphStyle {
    /// Derives the implicit base entry of the style stack.
    ///
    /// The base carries the paragraph's font selection and metrics so that
    /// text added before any explicit style push still shapes with the
    /// paragraph defaults.
    pub fn base_text_style<B: Brush>(&self) -> TextStyle<B> {
        let font_families = if self.font_family.is_empty() {
            SmallVec::new()
        } else {
            smallvec![self.font_family.clone()]
        };
        TextStyle {
            font_weight: self.font_weight,
            font_style: self.font_style,
            font_size: self.font_size,
            height: self.height,
            height_override: self.height_override,
            locale: self.locale.clone(),
            font_families,
            ..TextStyle::default()
        }
    }
}

/// Minimum line-box metrics applied to every line of a paragraph.
///
/// Field presence on the wire follows the order-dependent sparse encoding;
/// see `text_wire::decode_sparse`.
#[derive(Clone, PartialEq, Debug)]
pub struct StrutStyle {
    /// Whether the strut participates in line metrics at all.
    pub enabled: bool,
    /// Font weight used for the strut's metrics.
    pub font_weight: FontWeight,
    /// Font slant used for the strut's metrics.
    pub font_style: FontStyle,
    /// Distribute the strut's leading evenly above and below the line.
    pub half_leading: bool,
    /// Strut font size in pixels.
    pub font_size: f32,
    /// Strut height, as a multiplier of the strut font size.
    pub height: f32,
    /// Whether `height` was explicitly set rather than left to the font.
    pub height_override: bool,
    /// Additional leading, as a multiple of the font size; negative means
    /// unset.
    pub leading: f32,
    /// Force every line to exactly the strut's height.
    pub force_height: bool,
    /// Font families for the strut's metrics; a single empty name defers to
    /// the platform default font.
    pub font_families: SmallVec<[String; 2]>,
}

impl Default for StrutStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            font_weight: FontWeight::W400,
            font_style: FontStyle::Normal,
            half_leading: false,
            font_size: 14.0,
            height: 1.0,
            height_override: false,
            leading: -1.0,
            force_height: false,
            font_families: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_style_carries_paragraph_font_selection() {
        let paragraph = ParagraphStyle {
            font_weight: FontWeight::W700,
            font_size: 24.0,
            font_family: String::from("Roboto"),
            height: 1.5,
            height_override: true,
            ..ParagraphStyle::default()
        };

        let base: TextStyle<()> = paragraph.base_text_style();
        assert_eq!(base.font_weight, FontWeight::W700);
        assert_eq!(base.font_size, 24.0);
        assert_eq!(base.font_families.as_slice(), ["Roboto"]);
        assert_eq!(base.height, 1.5);
        assert!(base.height_override);
    }

    #[test]
    fn empty_family_leaves_base_families_empty() {
        let paragraph = ParagraphStyle::default();
        let base: TextStyle<()> = paragraph.base_text_style();
        assert!(base.font_families.is_empty());
    }
}
