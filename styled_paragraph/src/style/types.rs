// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerated style properties and their wire constructors.
//!
//! Wire payloads carry these properties as small integers. The
//! `from_encoded` constructors are total: an out-of-range payload falls back
//! to the property's default value instead of failing, since a trusted
//! encoder never produces one.

/// Horizontal alignment of paragraph text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextAlign {
    /// Align against the left edge.
    #[default]
    Left,
    /// Align against the right edge.
    Right,
    /// Center each line.
    Center,
    /// Stretch lines to fill the width.
    Justify,
    /// Align against the leading edge for the text direction.
    Start,
    /// Align against the trailing edge for the text direction.
    End,
}

impl TextAlign {
    /// Decodes a wire alignment value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            1 => Self::Right,
            2 => Self::Center,
            3 => Self::Justify,
            4 => Self::Start,
            5 => Self::End,
            _ => Self::Left,
        }
    }
}

/// Base writing direction of a paragraph.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextDirection {
    /// Right to left.
    Rtl,
    /// Left to right.
    #[default]
    Ltr,
}

impl TextDirection {
    /// Decodes a wire direction value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            0 => Self::Rtl,
            _ => Self::Ltr,
        }
    }
}

/// Baseline used for aligning inline content.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    #[default]
    Alphabetic,
    /// The ideographic baseline.
    Ideographic,
}

impl TextBaseline {
    /// Decodes a wire baseline value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            1 => Self::Ideographic,
            _ => Self::Alphabetic,
        }
    }
}

/// Visual weight class of a font, from thin (100) to black (900).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum FontWeight {
    /// Weight value of 100.
    W100,
    /// Weight value of 200.
    W200,
    /// Weight value of 300.
    W300,
    /// Weight value of 400. This is the default value.
    #[default]
    W400,
    /// Weight value of 500.
    W500,
    /// Weight value of 600.
    W600,
    /// Weight value of 700.
    W700,
    /// Weight value of 800.
    W800,
    /// Weight value of 900.
    W900,
}

impl FontWeight {
    /// Decodes a wire weight index (0 = thin .. 8 = black).
    pub fn from_encoded(value: i32) -> Self {
        match value {
            0 => Self::W100,
            1 => Self::W200,
            2 => Self::W300,
            3 => Self::W400,
            4 => Self::W500,
            5 => Self::W600,
            6 => Self::W700,
            7 => Self::W800,
            8 => Self::W900,
            _ => Self::W400,
        }
    }

    /// The numeric weight value (100..=900).
    pub fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }
}

/// Slant of a font.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Slanted glyphs.
    Italic,
}

impl FontStyle {
    /// Decodes a wire style value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            1 => Self::Italic,
            _ => Self::Normal,
        }
    }
}

/// A set of text decoration lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TextDecoration(u32);

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self(0);
    /// A line below the text.
    pub const UNDERLINE: Self = Self(1 << 0);
    /// A line above the text.
    pub const OVERLINE: Self = Self(1 << 1);
    /// A line through the text.
    pub const LINE_THROUGH: Self = Self(1 << 2);

    /// Decodes a wire decoration bit set.
    pub fn from_encoded(value: i32) -> Self {
        Self(value.cast_unsigned() & 0b111)
    }

    /// Whether every line in `other` is present in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw decoration bits.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// How decoration lines are painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextDecorationStyle {
    /// A single solid line.
    #[default]
    Solid,
    /// Two parallel lines.
    Double,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
    /// A wavy line.
    Wavy,
}

impl TextDecorationStyle {
    /// Decodes a wire decoration-style value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            1 => Self::Double,
            2 => Self::Dotted,
            3 => Self::Dashed,
            4 => Self::Wavy,
            _ => Self::Solid,
        }
    }
}

/// How line-height multipliers apply to the first and last lines.
///
/// The wire value is a small bit set: bit 0 disables applying the height
/// multiplier to the ascent of the first line, bit 1 disables applying it to
/// the descent of the last line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TextHeightBehavior(u32);

impl TextHeightBehavior {
    /// Decodes a wire height-behavior value.
    pub fn from_encoded(value: i32) -> Self {
        Self(value.cast_unsigned())
    }

    /// Whether the height multiplier applies to the first line's ascent.
    pub const fn apply_height_to_first_ascent(self) -> bool {
        self.0 & 1 == 0
    }

    /// Whether the height multiplier applies to the last line's descent.
    pub const fn apply_height_to_last_descent(self) -> bool {
        self.0 & 2 == 0
    }
}
