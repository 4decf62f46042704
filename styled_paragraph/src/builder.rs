// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use text_wire::BufferView;

use crate::decode;
use crate::engine::ShapingEngine;
use crate::error::Error;
use crate::paragraph::{Item, Paragraph, TextRun};
use crate::placeholder::{PlaceholderAlignment, PlaceholderRun};
use crate::stack::StyleStack;
use crate::style::{Brush, ParagraphStyle, TextBaseline, TextStyle};

/// Incremental builder for a styled paragraph.
///
/// Construction decodes the paragraph-level style exactly once and installs
/// it as the permanent base of the style stack. Afterwards the caller
/// interleaves [`push_style`](Self::push_style)/[`pop`](Self::pop) with
/// [`add_text`](Self::add_text) and
/// [`add_placeholder`](Self::add_placeholder), then calls
/// [`build`](Self::build) exactly once; `build` consumes the builder, so the
/// instance cannot be used afterwards.
///
/// A builder is single-writer for its whole lifetime: operations run to
/// completion, never block, and are ordered by the caller.
#[must_use]
pub struct ParagraphBuilder<B: Brush, E: ShapingEngine<B>> {
    engine: E,
    style: ParagraphStyle,
    stack: StyleStack<B>,
    style_table: Vec<TextStyle<B>>,
    items: Vec<Item>,
    text: String,
}

impl<B: Brush, E: ShapingEngine<B>> ParagraphBuilder<B, E> {
    /// Decodes the paragraph style (and strut, when requested) and creates
    /// a builder driving the injected shaping engine.
    ///
    /// `font_family`, `font_size`, `height`, `ellipsis` and `locale` are the
    /// companion values for paragraph-style slots 7 and up; each applies only
    /// when its presence bit is set in `encoded`.
    pub fn new(
        engine: E,
        encoded: BufferView<'_>,
        strut_data: Option<BufferView<'_>>,
        font_family: &str,
        strut_font_families: &[String],
        font_size: f32,
        height: f32,
        ellipsis: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Self, Error> {
        let style = decode::decode_paragraph_style(
            encoded,
            strut_data,
            font_family,
            strut_font_families,
            font_size,
            height,
            ellipsis,
            locale,
        )?;
        let base = style.base_text_style();
        Ok(Self {
            engine,
            style,
            stack: StyleStack::new(base),
            style_table: Vec::new(),
            items: Vec::new(),
            text: String::new(),
        })
    }

    /// The paragraph-level style decoded at construction.
    pub fn paragraph_style(&self) -> &ParagraphStyle {
        &self.style
    }

    /// The text style currently in effect.
    pub fn peek_style(&self) -> &TextStyle<B> {
        self.stack.peek()
    }

    /// Resolves a text style against the current top of the stack and pushes
    /// it.
    ///
    /// Fields whose presence bit is unset in `encoded` inherit from the
    /// current top. The paint values are opaque; only their presence
    /// matters here, their content is forwarded verbatim.
    pub fn push_style(
        &mut self,
        encoded: BufferView<'_>,
        font_families: &[String],
        font_size: f32,
        letter_spacing: f32,
        word_spacing: f32,
        height: f32,
        decoration_thickness: f32,
        locale: Option<&str>,
        background: Option<B>,
        foreground: Option<B>,
        shadows: Option<BufferView<'_>>,
        font_features: Option<BufferView<'_>>,
        font_variations: Option<BufferView<'_>>,
    ) -> Result<(), Error> {
        let mut style = self.stack.peek().clone();
        decode::apply_text_style(
            &mut style,
            encoded,
            font_families,
            font_size,
            letter_spacing,
            word_spacing,
            height,
            decoration_thickness,
            locale,
            background,
            foreground,
            shadows,
            font_features,
            font_variations,
        )?;
        self.stack.push(style);
        Ok(())
    }

    /// Pops the current style, restoring the enclosing one.
    pub fn pop(&mut self) -> Result<(), Error> {
        self.stack.pop()
    }

    /// Appends a run of UTF-16 text tagged with the style currently in
    /// effect.
    ///
    /// Empty input is a no-op. Ill-formed UTF-16 fails with
    /// [`Error::MalformedText`] and appends nothing; the builder remains
    /// usable.
    pub fn add_text(&mut self, text: &[u16]) -> Result<(), Error> {
        if text.is_empty() {
            return Ok(());
        }
        let decoded = char::decode_utf16(text.iter().copied())
            .collect::<Result<String, _>>()
            .map_err(|err| Error::MalformedText {
                code_unit: err.unpaired_surrogate(),
            })?;

        let start = self.text.len();
        self.text.push_str(&decoded);
        let style_index = self.stack.current_style_id(&mut self.style_table);
        self.items.push(Item::Text(TextRun {
            range: start..self.text.len(),
            style_index,
        }));
        Ok(())
    }

    /// Appends an inline placeholder to the run sequence.
    pub fn add_placeholder(
        &mut self,
        width: f32,
        height: f32,
        alignment: PlaceholderAlignment,
        baseline_offset: f32,
        baseline: TextBaseline,
    ) {
        self.items.push(Item::Placeholder(PlaceholderRun {
            width,
            height,
            alignment,
            baseline,
            baseline_offset,
        }));
    }

    /// Finalizes the paragraph and hands it to the shaping engine.
    ///
    /// Consumes the builder: further operations, including a second build,
    /// are rejected at compile time.
    pub fn build(self) -> E::Output {
        let Self {
            mut engine,
            style,
            stack: _,
            style_table,
            items,
            text,
        } = self;
        engine.layout(Paragraph::new(style, text, style_table, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PassthroughEngine;
    use crate::style::FontWeight;

    type Builder = ParagraphBuilder<u32, PassthroughEngine>;

    fn words(values: &[i32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for value in values {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        bytes
    }

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn plain_builder() -> Builder {
        let encoded = words(&[0]);
        ParagraphBuilder::new(
            PassthroughEngine,
            BufferView::new(&encoded),
            None,
            "",
            &[],
            14.0,
            1.0,
            None,
            None,
        )
        .unwrap()
    }

    /// A text-style buffer with only the font-weight slot set to bold.
    fn bold_style_words() -> Vec<u8> {
        words(&[1 << 5, 0, 0, 0, 0, 6, 0, 0, 0])
    }

    fn push_bold(builder: &mut Builder) {
        let encoded = bold_style_words();
        builder
            .push_style(
                BufferView::new(&encoded),
                &[],
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
                None,
                None,
                None,
                None,
                None,
                None,
            )
            .unwrap();
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let mut builder = plain_builder();
        builder.add_text(&[]).unwrap();
        let paragraph = builder.build();
        assert!(paragraph.items().is_empty());
        assert!(paragraph.text().is_empty());
        assert!(paragraph.styles().is_empty());
    }

    #[test]
    fn malformed_utf16_is_recoverable() {
        let mut builder = plain_builder();
        // A lone high surrogate.
        let err = builder.add_text(&[0xD800]).unwrap_err();
        assert_eq!(err, Error::MalformedText { code_unit: 0xD800 });

        // The failed run appended nothing and the builder stays usable.
        builder.add_text(&utf16("ok")).unwrap();
        let paragraph = builder.build();
        assert_eq!(paragraph.text(), "ok");
        assert_eq!(paragraph.items().len(), 1);
    }

    #[test]
    fn surrogate_pairs_are_well_formed() {
        let mut builder = plain_builder();
        builder.add_text(&utf16("a𝄞b")).unwrap();
        let paragraph = builder.build();
        assert_eq!(paragraph.text(), "a𝄞b");
    }

    #[test]
    fn push_with_empty_mask_inherits_everything() {
        let mut builder = plain_builder();
        push_bold(&mut builder);
        let bold_top = builder.peek_style().clone();

        let encoded = words(&[0, 0, 0, 0, 0, 0, 0, 0, 0]);
        builder
            .push_style(
                BufferView::new(&encoded),
                &[],
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
                None,
                None,
                None,
                None,
                None,
                None,
            )
            .unwrap();
        assert_eq!(*builder.peek_style(), bold_top);
    }

    #[test]
    fn pop_below_base_is_an_error() {
        let mut builder = plain_builder();
        push_bold(&mut builder);
        assert_eq!(builder.pop(), Ok(()));
        assert_eq!(builder.pop(), Err(Error::StackUnderflow));
    }

    #[test]
    fn runs_are_tagged_with_interned_styles() {
        let mut builder = plain_builder();
        builder.add_text(&utf16("A")).unwrap();
        push_bold(&mut builder);
        builder.add_text(&utf16("B")).unwrap();
        builder.pop().unwrap();
        builder.add_text(&utf16("C")).unwrap();

        let paragraph = builder.build();
        assert_eq!(paragraph.text(), "ABC");
        assert_eq!(paragraph.styles().len(), 2);
        assert_eq!(paragraph.styles()[1].font_weight, FontWeight::W700);

        let runs: Vec<&TextRun> = paragraph
            .items()
            .iter()
            .map(|item| match item {
                Item::Text(run) => run,
                Item::Placeholder(_) => panic!("expected only text runs"),
            })
            .collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].style_index, 0);
        assert_eq!(runs[1].style_index, 1);
        assert_eq!(runs[2].style_index, 0);
        assert_eq!(runs[0].range, 0..1);
        assert_eq!(runs[1].range, 1..2);
        assert_eq!(runs[2].range, 2..3);
    }

    #[test]
    fn placeholders_keep_sequence_order_and_carry_no_style() {
        let mut builder = plain_builder();
        builder.add_text(&utf16("before")).unwrap();
        builder.add_placeholder(
            32.0,
            24.0,
            PlaceholderAlignment::Middle,
            0.0,
            TextBaseline::Alphabetic,
        );
        builder.add_text(&utf16("after")).unwrap();

        let paragraph = builder.build();
        assert_eq!(paragraph.items().len(), 3);
        let Item::Placeholder(run) = &paragraph.items()[1] else {
            panic!("expected a placeholder at index 1");
        };
        assert_eq!(run.width, 32.0);
        assert_eq!(run.alignment, PlaceholderAlignment::Middle);
    }

    #[test]
    fn base_style_comes_from_paragraph_style() {
        let encoded = words(&[(1 << 3) | (1 << 8), 0, 0, 6, 0, 0, 0]);
        let builder: Builder = ParagraphBuilder::new(
            PassthroughEngine,
            BufferView::new(&encoded),
            None,
            "",
            &[],
            22.0,
            1.0,
            None,
            None,
        )
        .unwrap();
        assert_eq!(builder.peek_style().font_weight, FontWeight::W700);
        assert_eq!(builder.peek_style().font_size, 22.0);
    }

    #[test]
    fn nested_spans_inherit_and_unwind() {
        let mut builder = plain_builder();
        push_bold(&mut builder);

        // Inner span sets only letter spacing; weight inherits from bold.
        let encoded = words(&[1 << 11, 0, 0, 0, 0, 0, 0, 0, 0]);
        builder
            .push_style(
                BufferView::new(&encoded),
                &[],
                0.0,
                3.0,
                0.0,
                0.0,
                0.0,
                None,
                None,
                None,
                None,
                None,
                None,
            )
            .unwrap();
        assert_eq!(builder.peek_style().font_weight, FontWeight::W700);
        assert_eq!(builder.peek_style().letter_spacing, 3.0);

        builder.pop().unwrap();
        assert_eq!(builder.peek_style().letter_spacing, 0.0);
        builder.pop().unwrap();
        assert_eq!(builder.peek_style().font_weight, FontWeight::W400);
    }

    #[test]
    fn opaque_paints_are_forwarded_verbatim() {
        let mut builder = plain_builder();
        let encoded = words(&[(1 << 15) | (1 << 16), 0, 0, 0, 0, 0, 0, 0, 0]);
        builder
            .push_style(
                BufferView::new(&encoded),
                &[],
                0.0,
                0.0,
                0.0,
                0.0,
                0.0,
                None,
                Some(7),
                Some(9),
                None,
                None,
                None,
            )
            .unwrap();
        assert_eq!(builder.peek_style().background, Some(7));
        assert_eq!(builder.peek_style().foreground, Some(9));

        let paragraph = {
            let mut b = builder;
            b.add_text(&utf16("x")).unwrap();
            b.build()
        };
        assert_eq!(paragraph.styles()[0].background, Some(7));
    }
}
