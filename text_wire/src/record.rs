// Copyright 2026 the Styled Paragraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{BufferView, DecodeError, FontFeature, FontVariation, Setting, Tag, TextShadow};

/// A record type with a fixed encoded size and no presence mask.
///
/// Presence is array membership: a buffer of fixed-stride records is simply
/// `len / STRIDE` records back to back, decoded in buffer order. Order is
/// preserved because it is semantically meaningful to consumers (later
/// entries may layer over earlier ones at render time).
pub trait FixedStride: Sized {
    /// The encoded size of one record in bytes.
    const STRIDE: usize;

    /// Decodes one record from exactly [`Self::STRIDE`] bytes.
    fn decode(record: BufferView<'_>) -> Self;
}

/// Decodes a buffer as a sequence of fixed-stride records.
///
/// The total buffer length must be an exact multiple of the stride;
/// violation is a fatal framing error, never a partial decode.
pub fn decode_records<T: FixedStride>(view: BufferView<'_>) -> Result<Vec<T>, DecodeError> {
    if view.len() % T::STRIDE != 0 {
        return Err(DecodeError::stride_mismatch(view.len(), T::STRIDE));
    }
    Ok(view
        .as_bytes()
        .chunks_exact(T::STRIDE)
        .map(|chunk| T::decode(BufferView::new(chunk)))
        .collect())
}

fn record_tag(record: BufferView<'_>) -> Tag {
    let bytes = record.as_bytes();
    Tag::from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

impl FixedStride for TextShadow {
    const STRIDE: usize = 16;

    fn decode(record: BufferView<'_>) -> Self {
        // The wire color is XOR'd against the default so an all-zero record
        // is an opaque black shadow.
        Self {
            color: record.read_u32(0).unwrap_or(0) ^ Self::DEFAULT_COLOR,
            dx: record.read_f32(4).unwrap_or(0.),
            dy: record.read_f32(8).unwrap_or(0.),
            blur: record.read_f32(12).unwrap_or(0.),
        }
    }
}

impl FixedStride for FontFeature {
    const STRIDE: usize = 8;

    fn decode(record: BufferView<'_>) -> Self {
        Setting::new(record_tag(record), record.read_i32(4).unwrap_or(0))
    }
}

impl FixedStride for FontVariation {
    const STRIDE: usize = 8;

    fn decode(record: BufferView<'_>) -> Self {
        Setting::new(record_tag(record), record.read_f32(4).unwrap_or(0.))
    }
}
