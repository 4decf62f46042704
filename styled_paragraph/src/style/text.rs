// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use text_wire::{FontFeature, FontVariation, TextShadow};

use super::types::{FontStyle, FontWeight, TextDecoration, TextDecorationStyle};
use super::Brush;

/// A resolved text style for a span of text.
///
/// A `TextStyle` is always derived from its parent on the style stack: the
/// wire decode copies the parent and overwrites only the fields whose
/// presence bit is set, so unset fields inherit rather than reset.
#[derive(Clone, PartialEq, Debug)]
pub struct TextStyle<B: Brush> {
    /// Distribute leading evenly above and below the text.
    pub half_leading: bool,
    /// Text color as 32-bit ARGB.
    pub color: u32,
    /// Decoration lines to paint.
    pub decoration: TextDecoration,
    /// Decoration color as 32-bit ARGB.
    pub decoration_color: u32,
    /// How decoration lines are painted.
    pub decoration_style: TextDecorationStyle,
    /// Decoration thickness, as a multiplier of the font's default.
    pub decoration_thickness: f32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font slant.
    pub font_style: FontStyle,
    /// Font size in pixels.
    pub font_size: f32,
    /// Extra spacing between letters, in pixels.
    pub letter_spacing: f32,
    /// Extra spacing between words, in pixels.
    pub word_spacing: f32,
    /// Line height, as a multiplier of the font size.
    pub height: f32,
    /// Whether `height` was explicitly set rather than left to the font.
    pub height_override: bool,
    /// BCP-47 locale for locale-specific glyph selection.
    pub locale: Option<String>,
    /// Opaque paint drawn behind the text.
    pub background: Option<B>,
    /// Opaque paint the glyphs are drawn with, replacing `color`.
    pub foreground: Option<B>,
    /// Shadows painted beneath the text, in paint order.
    pub shadows: Vec<TextShadow>,
    /// OpenType feature settings.
    pub font_features: Vec<FontFeature>,
    /// Variation axis settings.
    pub font_variations: Vec<FontVariation>,
    /// Font families to match against, in priority order.
    pub font_families: SmallVec<[String; 2]>,
}

impl<B: Brush> Default for TextStyle<B> {
    fn default() -> Self {
        Self {
            half_leading: false,
            color: 0xFF00_0000,
            decoration: TextDecoration::NONE,
            decoration_color: 0xFF00_0000,
            decoration_style: TextDecorationStyle::Solid,
            decoration_thickness: 1.0,
            font_weight: FontWeight::W400,
            font_style: FontStyle::Normal,
            font_size: 14.0,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            height: 1.0,
            height_override: false,
            locale: None,
            background: None,
            foreground: None,
            shadows: Vec::new(),
            font_features: Vec::new(),
            font_variations: Vec::new(),
            font_families: SmallVec::new(),
        }
    }
}
