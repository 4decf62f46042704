// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::placeholder::PlaceholderRun;
use crate::style::{Brush, ParagraphStyle, TextStyle};

/// A run of text tagged with a style-table index.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextRun {
    /// Byte range into the paragraph's UTF-8 text.
    pub range: Range<usize>,
    /// Index into the paragraph's style table.
    pub style_index: u16,
}

/// One element of a paragraph's run sequence.
#[derive(Clone, PartialEq, Debug)]
pub enum Item {
    /// A styled run of text.
    Text(TextRun),
    /// An inline placeholder; carries no style reference.
    Placeholder(PlaceholderRun),
}

/// An immutable paragraph description, ready for a shaping engine.
///
/// Holds the paragraph-level style, the accumulated UTF-8 text, the
/// deduplicated table of resolved text styles, and the ordered run sequence
/// referencing it.
#[derive(Clone, PartialEq, Debug)]
pub struct Paragraph<B: Brush> {
    style: ParagraphStyle,
    text: String,
    styles: Vec<TextStyle<B>>,
    items: Vec<Item>,
}

impl<B: Brush> Paragraph<B> {
    pub(crate) fn new(
        style: ParagraphStyle,
        text: String,
        styles: Vec<TextStyle<B>>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            style,
            text,
            styles,
            items,
        }
    }

    /// The paragraph-level style.
    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// The accumulated text, transcoded to UTF-8.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The deduplicated table of resolved text styles.
    pub fn styles(&self) -> &[TextStyle<B>] {
        &self.styles
    }

    /// The run sequence, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
