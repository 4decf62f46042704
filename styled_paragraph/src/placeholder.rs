// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::TextBaseline;

/// How an inline placeholder is positioned relative to the surrounding text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaceholderAlignment {
    /// Align the placeholder's chosen baseline with the text baseline.
    #[default]
    Baseline,
    /// Rest the placeholder's bottom edge on the text baseline.
    AboveBaseline,
    /// Hang the placeholder's top edge from the text baseline.
    BelowBaseline,
    /// Align the placeholder's top edge with the top of the line.
    Top,
    /// Align the placeholder's bottom edge with the bottom of the line.
    Bottom,
    /// Center the placeholder within the line.
    Middle,
}

impl PlaceholderAlignment {
    /// Decodes a wire alignment value.
    pub fn from_encoded(value: i32) -> Self {
        match value {
            1 => Self::AboveBaseline,
            2 => Self::BelowBaseline,
            3 => Self::Top,
            4 => Self::Bottom,
            5 => Self::Middle,
            _ => Self::Baseline,
        }
    }
}

/// An inline box reserved in the text flow for externally laid-out content.
///
/// Placeholders carry no style reference: the shaping engine positions them
/// from these metrics alone, using the enclosing style only for baseline
/// alignment.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlaceholderRun {
    /// Width of the reserved box in pixels.
    pub width: f32,
    /// Height of the reserved box in pixels.
    pub height: f32,
    /// How the box is positioned relative to the surrounding text.
    pub alignment: PlaceholderAlignment,
    /// The text baseline to align against.
    pub baseline: TextBaseline,
    /// Distance from the box's top edge to its baseline, in pixels.
    pub baseline_offset: f32,
}
