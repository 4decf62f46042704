// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::Error;
use crate::style::{Brush, TextStyle};

struct Entry<B: Brush> {
    style: TextStyle<B>,
    /// Index into the deduplicated style table, assigned lazily when the
    /// first text run is tagged with this entry.
    style_id: Option<u16>,
}

/// An explicit stack of resolved text styles.
///
/// The stack realizes cascading inheritance without global state: each
/// builder owns its own stack, the paragraph's base style is the permanent
/// bottom entry, and pushed styles have already been resolved against the
/// previous top.
pub(crate) struct StyleStack<B: Brush> {
    entries: Vec<Entry<B>>,
}

impl<B: Brush> StyleStack<B> {
    /// Creates a stack whose permanent bottom entry is `base`.
    pub(crate) fn new(base: TextStyle<B>) -> Self {
        Self {
            entries: alloc::vec![Entry {
                style: base,
                style_id: None,
            }],
        }
    }

    /// The style currently in effect.
    pub(crate) fn peek(&self) -> &TextStyle<B> {
        &self
            .entries
            .last()
            .expect("style stack always holds the base entry")
            .style
    }

    /// Installs `style` as the new top. The caller has already resolved it
    /// against the previous top.
    pub(crate) fn push(&mut self, style: TextStyle<B>) {
        self.entries.push(Entry {
            style,
            style_id: None,
        });
    }

    /// Removes the current top.
    ///
    /// Popping the base entry is a protocol violation and fails without
    /// changing the stack.
    pub(crate) fn pop(&mut self) -> Result<(), Error> {
        if self.entries.len() == 1 {
            return Err(Error::StackUnderflow);
        }
        self.entries.pop();
        Ok(())
    }

    /// The style-table index for the current top, interning the style into
    /// `table` on first use.
    ///
    /// Re-entering an entry (text after a pop) reuses its id, so the table
    /// stays deduplicated per stack entry.
    pub(crate) fn current_style_id(&mut self, table: &mut Vec<TextStyle<B>>) -> u16 {
        let entry = self
            .entries
            .last_mut()
            .expect("style stack always holds the base entry");
        if let Some(style_id) = entry.style_id {
            return style_id;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "A builder never accumulates 65536 distinct style spans."
        )]
        let style_id = table.len() as u16;
        table.push(entry.style.clone());
        entry.style_id = Some(style_id);
        style_id
    }
}
