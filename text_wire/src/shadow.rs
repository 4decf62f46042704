// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A text shadow: color, offset and blur radius.
///
/// The wire form stores the color XOR'd against [`TextShadow::DEFAULT_COLOR`]
/// so that an all-zero record decodes to an opaque black shadow with no
/// offset and no blur.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextShadow {
    /// The shadow color, as 32-bit ARGB.
    pub color: u32,
    /// Horizontal offset in pixels.
    pub dx: f32,
    /// Vertical offset in pixels.
    pub dy: f32,
    /// Blur radius in pixels.
    pub blur: f32,
}

impl TextShadow {
    /// Opaque black; the wire encoding XORs shadow colors against this value.
    pub const DEFAULT_COLOR: u32 = 0xFF00_0000;
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            color: Self::DEFAULT_COLOR,
            dx: 0.,
            dy: 0.,
            blur: 0.,
        }
    }
}
