// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::paragraph::Paragraph;
use crate::style::Brush;

/// Strategy trait for the external text-shaping back-end.
///
/// An engine is selected once at configuration time and injected into the
/// builder at construction; this crate only hands it the finished paragraph
/// description and forwards whatever it produces.
pub trait ShapingEngine<B: Brush> {
    /// The laid-out paragraph type this engine produces.
    type Output;

    /// Consumes a finished paragraph description and lays it out.
    fn layout(&mut self, paragraph: Paragraph<B>) -> Self::Output;
}

/// A two-variant engine selection, fixed at configuration time.
///
/// Both back-ends must produce the same output type; calls are forwarded to
/// whichever variant was chosen.
#[derive(Clone, Debug)]
pub enum EitherEngine<L, R> {
    /// The first back-end.
    First(L),
    /// The second back-end.
    Second(R),
}

impl<B, L, R> ShapingEngine<B> for EitherEngine<L, R>
where
    B: Brush,
    L: ShapingEngine<B>,
    R: ShapingEngine<B, Output = L::Output>,
{
    type Output = L::Output;

    fn layout(&mut self, paragraph: Paragraph<B>) -> Self::Output {
        match self {
            Self::First(engine) => engine.layout(paragraph),
            Self::Second(engine) => engine.layout(paragraph),
        }
    }
}

/// The identity back-end: returns the paragraph description unchanged.
///
/// Useful for callers that want the raw description, and as a stand-in
/// engine in tests.
#[derive(Clone, Copy, Default, Debug)]
pub struct PassthroughEngine;

impl<B: Brush> ShapingEngine<B> for PassthroughEngine {
    type Output = Paragraph<B>;

    fn layout(&mut self, paragraph: Paragraph<B>) -> Self::Output {
        paragraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ParagraphStyle;
    use alloc::string::String;
    use alloc::vec::Vec;

    struct CountingEngine {
        calls: usize,
    }

    impl ShapingEngine<u32> for CountingEngine {
        type Output = usize;

        fn layout(&mut self, _paragraph: Paragraph<u32>) -> usize {
            self.calls += 1;
            self.calls
        }
    }

    fn empty_paragraph() -> Paragraph<u32> {
        Paragraph::new(
            ParagraphStyle::default(),
            String::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn either_engine_forwards_to_selected_variant() {
        let mut first: EitherEngine<CountingEngine, CountingEngine> =
            EitherEngine::First(CountingEngine { calls: 0 });
        assert_eq!(first.layout(empty_paragraph()), 1);

        let mut second: EitherEngine<CountingEngine, CountingEngine> =
            EitherEngine::Second(CountingEngine { calls: 10 });
        assert_eq!(second.layout(empty_paragraph()), 11);
    }

    #[test]
    fn passthrough_returns_the_description() {
        let mut engine = PassthroughEngine;
        let paragraph = engine.layout(empty_paragraph());
        assert!(paragraph.text().is_empty());
        assert!(paragraph.items().is_empty());
    }
}
