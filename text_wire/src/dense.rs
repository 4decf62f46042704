// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{BufferView, DecodeError};

/// A dense array of 32-bit slots with a leading presence mask.
///
/// Slot 0 is the mask word; bit *i* of the mask gates whether slot *i* is
/// authoritative. Slot lookup is constant time and independent of which
/// other bits are set, so decoding costs O(number of set bits).
#[derive(Clone, Copy, Debug)]
pub struct DenseSlots<'a> {
    view: BufferView<'a>,
    mask: i32,
}

impl<'a> DenseSlots<'a> {
    /// Wraps a buffer of 32-bit slots, reading the mask from slot 0.
    ///
    /// Fails with a truncation error when the buffer cannot hold the mask
    /// word.
    pub fn new(view: BufferView<'a>) -> Result<Self, DecodeError> {
        let mask = view
            .read_i32(0)
            .ok_or_else(|| DecodeError::truncated(view.len(), 4))?;
        Ok(Self { view, mask })
    }

    /// The presence mask from slot 0.
    pub fn mask(&self) -> i32 {
        self.mask
    }

    /// Whether the mask bit for the given slot index is set.
    pub fn contains(&self, bit: u32) -> bool {
        self.mask & (1 << bit) != 0
    }

    /// Reads the 32-bit value at the given fixed slot index.
    ///
    /// Only meaningful for slots whose mask bit is set; a masked slot lying
    /// past the end of the buffer is a truncation error.
    pub fn slot(&self, index: usize) -> Result<i32, DecodeError> {
        let offset = index * 4;
        self.view
            .read_i32(offset)
            .ok_or_else(|| DecodeError::truncated(self.view.len(), offset + 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeErrorKind;

    fn words(values: &[i32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for value in values {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        bytes
    }

    #[test]
    fn reads_masked_slots_by_fixed_index() {
        let bytes = words(&[0b110, 7, 42]);
        let slots = DenseSlots::new(BufferView::new(&bytes)).unwrap();
        assert_eq!(slots.mask(), 0b110);
        assert!(slots.contains(1));
        assert!(slots.contains(2));
        assert!(!slots.contains(0));
        assert_eq!(slots.slot(1).unwrap(), 7);
        assert_eq!(slots.slot(2).unwrap(), 42);
    }

    #[test]
    fn empty_buffer_is_truncated() {
        let err = DenseSlots::new(BufferView::new(&[])).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Truncated);
    }

    #[test]
    fn masked_slot_past_end_is_truncated() {
        let bytes = words(&[0b10]);
        let slots = DenseSlots::new(BufferView::new(&bytes)).unwrap();
        let err = slots.slot(1).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Truncated);
        assert_eq!(err.expected(), 8);
    }
}
