// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style records and the property vocabulary they are built from.

mod brush;
mod paragraph;
mod text;
mod types;

pub use brush::Brush;
pub use paragraph::{ParagraphStyle, StrutStyle};
pub use text::TextStyle;
pub use types::{
    FontStyle, FontWeight, TextAlign, TextBaseline, TextDecoration, TextDecorationStyle,
    TextDirection, TextHeightBehavior,
};
